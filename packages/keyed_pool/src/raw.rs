use std::{fmt, mem, thread};

use foldhash::{HashMap, HashMapExt};
use tracing::{debug, trace, warn};

use crate::{DropPolicy, Error, PoolRegistryBuilder, Pooled, Result, SeedPolicy};

/// The members of one pool, in insertion order.
struct Pool {
    objects: Vec<Pooled>,

    /// Only present while `objects` is empty, so the pool can still grow on checkout.
    /// The template is never handed out and never receives lifecycle callbacks.
    template: Option<Pooled>,
}

impl Pool {
    fn first_free(&self) -> Option<&Pooled> {
        self.objects.iter().find(|object| object.is_free())
    }

    /// Manufactures one more member from the first member (or the template of an empty pool)
    /// and appends it to the pool.
    fn grow(&mut self) -> Pooled {
        let created = {
            let template = self
                .objects
                .first()
                .or(self.template.as_ref())
                .expect("a pool always has a member or a template to manufacture from");

            template.borrow().create()
        };

        self.objects.push(created.clone());
        self.template = None;

        created
    }

    /// Counts members that are checked out or currently borrowed by the caller.
    fn active_count(&self) -> usize {
        self.objects.iter().filter(|object| !object.is_free()).count()
    }

    /// Destroys the members in reverse insertion order.
    fn destroy(self) {
        for object in self.objects.iter().rev() {
            object.borrow_mut().destroyed();
        }
    }
}

impl fmt::Debug for Pool {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("len", &self.objects.len())
            .field("has_template", &self.template.is_some())
            .finish()
    }
}

/// A registry of object pools, each keyed by a pool identifier.
///
/// Each pool is an ordered collection of interchangeable [`PooledObject`][crate::PooledObject]s
/// that report the same [`pool_id()`][crate::PooledObject::pool_id]. Callers declare a pool
/// with a seed object, then check objects out and back in by identifier. When a pool has no
/// free object left, checkout manufactures one more from the first member of the pool, so a
/// checkout against a declared pool never fails.
///
/// This is the registry with exclusive (`&mut self`) access. To share one registry between
/// the composition root and application code, use [`PoolRegistry`][crate::PoolRegistry].
///
/// # Example
///
/// ```rust
/// use keyed_pool::{Pooled, PooledObject, RawPoolRegistry, SeedPolicy};
/// # #[derive(Debug)]
/// # struct Bullet {
/// #     active: bool,
/// # }
/// #
/// # impl PooledObject for Bullet {
/// #     fn pool_id(&self) -> &str {
/// #         "bullet"
/// #     }
/// #
/// #     fn is_active(&self) -> bool {
/// #         self.active
/// #     }
/// #
/// #     fn create(&self) -> Pooled {
/// #         Pooled::new(Bullet { active: false })
/// #     }
/// #
/// #     fn activated(&mut self) {
/// #         self.active = true;
/// #     }
/// #
/// #     fn deactivated(&mut self) {
/// #         self.active = false;
/// #     }
/// #
/// #     fn destroyed(&mut self) {}
/// # }
///
/// let mut registry = RawPoolRegistry::new();
///
/// registry.declare_with(Pooled::new(Bullet { active: false }), 2, SeedPolicy::Exclude);
///
/// let bullet = registry.checkout("bullet").unwrap();
/// assert!(bullet.is_active());
///
/// registry.checkin(&bullet);
/// assert!(!bullet.is_active());
///
/// registry.teardown_all();
/// assert!(registry.is_empty());
/// ```
///
/// # Thread safety
///
/// This type is single-threaded and is neither [`Send`] nor [`Sync`].
pub struct RawPoolRegistry {
    /// We use foldhash for better performance with small hash tables.
    pools: HashMap<String, Pool>,

    /// How many objects [`declare()`][Self::declare] manufactures for a new pool.
    default_count: usize,

    drop_policy: DropPolicy,
}

impl RawPoolRegistry {
    /// Creates a new `RawPoolRegistry` with default configuration.
    ///
    /// For custom configuration, use [`RawPoolRegistry::builder()`][RawPoolRegistry::builder].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build_raw()
    }

    /// Creates a builder for configuring and constructing a registry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keyed_pool::{DropPolicy, RawPoolRegistry};
    ///
    /// let registry = RawPoolRegistry::builder()
    ///     .default_count(32)
    ///     .drop_policy(DropPolicy::MustNotDropPools)
    ///     .build_raw();
    /// ```
    pub fn builder() -> PoolRegistryBuilder {
        PoolRegistryBuilder::new()
    }

    #[must_use]
    pub(crate) fn new_inner(default_count: usize, drop_policy: DropPolicy) -> Self {
        Self {
            pools: HashMap::new(),
            default_count,
            drop_policy,
        }
    }

    /// Declares the pool that `seed` belongs to, manufacturing the configured default number
    /// of objects from it. The seed itself is not added to the pool.
    ///
    /// Equivalent to [`declare_with()`][Self::declare_with] with the registry's default count
    /// and [`SeedPolicy::Exclude`].
    pub fn declare(&mut self, seed: Pooled) {
        self.declare_with(seed, self.default_count, SeedPolicy::Exclude);
    }

    /// Declares the pool that `seed` belongs to.
    ///
    /// On first declaration of the pool identifier, the seed is optionally inserted as-is
    /// (see [`SeedPolicy`]), then `count` objects are manufactured via the seed's
    /// [`create()`][crate::PooledObject::create], deactivated and appended in manufacture order.
    ///
    /// If the pool identifier is already declared, this does nothing: the existing pool is
    /// neither topped up nor modified.
    ///
    /// # Panics
    ///
    /// Panics if the seed is currently mutably borrowed.
    pub fn declare_with(&mut self, seed: Pooled, count: usize, seed_policy: SeedPolicy) {
        let pool_id = seed.pool_id();
        debug_assert!(!pool_id.is_empty(), "pool identifiers must not be empty");

        if self.pools.contains_key(&pool_id) {
            debug!(pool_id = %pool_id, "pool already declared; declaration ignored");
            return;
        }

        let include_seed = matches!(seed_policy, SeedPolicy::Include);
        let mut objects = Vec::with_capacity(count.saturating_add(usize::from(include_seed)));

        if include_seed {
            objects.push(seed.clone());
        }

        for _ in 0..count {
            let created = seed.borrow().create();
            created.borrow_mut().deactivated();
            objects.push(created);
        }

        let template = objects.is_empty().then_some(seed);

        debug!(pool_id = %pool_id, len = objects.len(), "pool declared");

        self.pools.insert(pool_id, Pool { objects, template });
    }

    /// Checks out an object from the pool with the given identifier.
    ///
    /// Returns the first inactive member in insertion order. If every member is active, one
    /// more member is manufactured from the first member of the pool and appended to it. In
    /// both cases, the object's [`activated()`][crate::PooledObject::activated] callback is
    /// called before it is returned.
    ///
    /// An object the caller is currently holding a mutable borrow of is treated as active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPool`] if no pool with this identifier has been declared.
    ///
    /// # Panics
    ///
    /// Panics if the pool has to grow and its first member is currently mutably borrowed.
    pub fn checkout(&mut self, pool_id: &str) -> Result<Pooled> {
        let pool = self
            .pools
            .get_mut(pool_id)
            .ok_or_else(|| Error::UnknownPool {
                pool_id: pool_id.to_owned(),
            })?;

        let object = pool.first_free().cloned().unwrap_or_else(|| {
            let created = pool.grow();
            trace!(pool_id, len = pool.objects.len(), "pool grew on checkout");
            created
        });

        let mut guard = object.borrow_mut();
        debug_assert_eq!(
            guard.pool_id(),
            pool_id,
            "pooled object reports a different pool than the one it was found in"
        );
        guard.activated();
        drop(guard);

        Ok(object)
    }

    /// Returns an object to its pool by calling its
    /// [`deactivated()`][crate::PooledObject::deactivated] callback.
    ///
    /// The registry does not check that the object came from one of its pools or that it is
    /// currently checked out. Checking in the same object twice calls the callback twice.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    pub fn checkin(&mut self, object: &Pooled) {
        let mut guard = object.borrow_mut();
        trace!(pool_id = guard.pool_id(), "object checked in");
        guard.deactivated();
    }

    /// Tears down the pool with the given identifier.
    ///
    /// Every member receives its [`destroyed()`][crate::PooledObject::destroyed] callback, in
    /// reverse insertion order, and the pool is removed. The identifier may be declared again
    /// afterwards.
    ///
    /// Tearing down a pool that is not declared logs a warning and changes nothing.
    pub fn teardown_pool(&mut self, pool_id: &str) {
        let Some(pool) = self.pools.remove(pool_id) else {
            warn!(pool_id, "attempted to tear down a pool that has not been declared");
            return;
        };

        debug!(pool_id, len = pool.objects.len(), "tearing down pool");
        pool.destroy();
    }

    /// Tears down every pool, leaving the registry empty.
    ///
    /// Within each pool, members receive their [`destroyed()`][crate::PooledObject::destroyed]
    /// callback in reverse insertion order. The order in which pools are torn down is
    /// unspecified.
    pub fn teardown_all(&mut self) {
        let pools = mem::take(&mut self.pools);

        debug!(pool_count = pools.len(), "tearing down all pools");

        for (pool_id, pool) in pools {
            trace!(pool_id = %pool_id, len = pool.objects.len(), "tearing down pool");
            pool.destroy();
        }
    }

    /// Whether a pool with the given identifier is declared.
    #[must_use]
    pub fn contains_pool(&self, pool_id: &str) -> bool {
        self.pools.contains_key(pool_id)
    }

    /// The number of objects in the pool with the given identifier, checked out or not.
    ///
    /// Returns `None` if the pool is not declared.
    #[must_use]
    pub fn pool_len(&self, pool_id: &str) -> Option<usize> {
        self.pools.get(pool_id).map(|pool| pool.objects.len())
    }

    /// The number of objects in the pool with the given identifier that are currently in use.
    ///
    /// An object is in use if it is checked out or if the caller currently holds a borrow of it
    /// (through [`Pooled::borrow()`] or similar), since checkout would skip it either way.
    ///
    /// Returns `None` if the pool is not declared.
    #[must_use]
    pub fn active_count(&self, pool_id: &str) -> Option<usize> {
        self.pools.get(pool_id).map(Pool::active_count)
    }

    /// The identifiers of all declared pools, in unspecified order.
    pub fn pool_ids(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// The number of declared pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// The total number of objects across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.values().map(|pool| pool.objects.len()).sum()
    }

    /// Whether the registry holds no objects.
    ///
    /// A registry may hold declared pools and still be empty, if those pools were declared
    /// with a count of zero and never checked out from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.values().all(|pool| pool.objects.is_empty())
    }
}

impl Default for RawPoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RawPoolRegistry {
    fn drop(&mut self) {
        if self.pools.is_empty() || thread::panicking() {
            return;
        }

        match self.drop_policy {
            DropPolicy::MayDropPools => self.teardown_all(),
            DropPolicy::MustNotDropPools => panic!(
                "RawPoolRegistry dropped while still containing pools (drop policy is MustNotDropPools)"
            ),
        }
    }
}

impl fmt::Debug for RawPoolRegistry {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawPoolRegistry")
            .field("pools", &self.pools)
            .field("default_count", &self.default_count)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}
