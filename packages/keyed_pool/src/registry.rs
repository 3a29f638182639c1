use std::cell::RefCell;
use std::rc::Rc;

use crate::{Pooled, PoolRegistryBuilder, RawPoolRegistry, Result, SeedPolicy};

/// A single-threaded, cloneable handle to a shared [`RawPoolRegistry`].
///
/// Multiple handles can exist simultaneously and all of them operate on the same pools. This is
/// the type a composition root owns and passes to the code that needs pooling, instead of
/// reaching the registry through global state.
///
/// # Re-entrancy
///
/// Lifecycle callbacks run while the registry is borrowed. A
/// [`PooledObject`][crate::PooledObject] callback must not call back into the same registry;
/// doing so panics.
///
/// # Single-threaded Design
///
/// This type is designed for single-threaded use and is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use keyed_pool::{PoolRegistry, Pooled, PooledObject};
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
/// let registry = PoolRegistry::new();
///
/// // Clone the handle for use in different parts of the code.
/// let registry_clone = registry.clone();
///
/// registry.declare(Pooled::new(Bullet { active: false }));
///
/// let bullet = registry_clone.checkout("bullet").unwrap();
/// assert!(bullet.is_active());
/// assert_eq!(registry.active_count("bullet"), Some(1));
///
/// registry_clone.checkin(&bullet);
/// ```
#[derive(Clone, Debug)]
pub struct PoolRegistry {
    inner: Rc<RefCell<RawPoolRegistry>>,
}

impl From<RawPoolRegistry> for PoolRegistry {
    /// Wraps an existing registry in a shareable handle.
    fn from(registry: RawPoolRegistry) -> Self {
        Self {
            inner: Rc::new(RefCell::new(registry)),
        }
    }
}

impl PoolRegistry {
    /// Creates a new [`PoolRegistry`] with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from(RawPoolRegistry::new())
    }

    /// Returns a builder for creating a [`PoolRegistry`] with custom configuration.
    pub fn builder() -> PoolRegistryBuilder {
        PoolRegistryBuilder::new()
    }

    /// Declares the pool that `seed` belongs to with the default count.
    ///
    /// See [`RawPoolRegistry::declare()`].
    pub fn declare(&self, seed: Pooled) {
        self.inner.borrow_mut().declare(seed);
    }

    /// Declares the pool that `seed` belongs to.
    ///
    /// See [`RawPoolRegistry::declare_with()`].
    pub fn declare_with(&self, seed: Pooled, count: usize, seed_policy: SeedPolicy) {
        self.inner
            .borrow_mut()
            .declare_with(seed, count, seed_policy);
    }

    /// Checks out an object from the pool with the given identifier.
    ///
    /// See [`RawPoolRegistry::checkout()`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPool`][crate::Error::UnknownPool] if no pool with this
    /// identifier has been declared.
    pub fn checkout(&self, pool_id: &str) -> Result<Pooled> {
        self.inner.borrow_mut().checkout(pool_id)
    }

    /// Returns an object to its pool.
    ///
    /// See [`RawPoolRegistry::checkin()`].
    pub fn checkin(&self, object: &Pooled) {
        self.inner.borrow_mut().checkin(object);
    }

    /// Tears down the pool with the given identifier.
    ///
    /// See [`RawPoolRegistry::teardown_pool()`].
    pub fn teardown_pool(&self, pool_id: &str) {
        self.inner.borrow_mut().teardown_pool(pool_id);
    }

    /// Tears down every pool.
    ///
    /// See [`RawPoolRegistry::teardown_all()`].
    pub fn teardown_all(&self) {
        self.inner.borrow_mut().teardown_all();
    }

    /// Whether a pool with the given identifier is declared.
    #[must_use]
    pub fn contains_pool(&self, pool_id: &str) -> bool {
        self.inner.borrow().contains_pool(pool_id)
    }

    /// The number of objects in the pool with the given identifier.
    #[must_use]
    pub fn pool_len(&self, pool_id: &str) -> Option<usize> {
        self.inner.borrow().pool_len(pool_id)
    }

    /// The number of objects in the pool with the given identifier that are in use, counting
    /// objects the caller currently holds a borrow of.
    #[must_use]
    pub fn active_count(&self, pool_id: &str) -> Option<usize> {
        self.inner.borrow().active_count(pool_id)
    }

    /// The identifiers of all declared pools, in unspecified order.
    #[must_use]
    pub fn pool_ids(&self) -> Vec<String> {
        self.inner
            .borrow()
            .pool_ids()
            .map(str::to_owned)
            .collect()
    }

    /// The number of declared pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.inner.borrow().pool_count()
    }

    /// The total number of objects across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the registry holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
