use crate::{DropPolicy, PoolRegistry, RawPoolRegistry};

/// How many objects a pool declaration manufactures when the caller does not say.
pub(crate) const DEFAULT_POOL_SIZE: usize = 10;

/// Builder for creating an instance of [`PoolRegistry`] or [`RawPoolRegistry`].
///
/// This builder allows configuration of registry behavior before creation.
///
/// # Examples
///
/// ```
/// use keyed_pool::{DropPolicy, PoolRegistry};
///
/// // Default registry.
/// let registry = PoolRegistry::builder().build();
///
/// // Larger pools by default, and a loud failure if pools outlive the registry.
/// let registry = PoolRegistry::builder()
///     .default_count(64)
///     .drop_policy(DropPolicy::MustNotDropPools)
///     .build();
/// ```
#[derive(Debug)]
#[must_use]
pub struct PoolRegistryBuilder {
    default_count: usize,
    drop_policy: DropPolicy,
}

impl PoolRegistryBuilder {
    pub(crate) fn new() -> Self {
        Self {
            default_count: DEFAULT_POOL_SIZE,
            drop_policy: DropPolicy::default(),
        }
    }

    /// Sets how many objects [`declare()`][RawPoolRegistry::declare] manufactures for a new
    /// pool. Defaults to 10.
    ///
    /// Does not affect [`declare_with()`][RawPoolRegistry::declare_with], which always takes an
    /// explicit count.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_pool::PoolRegistry;
    ///
    /// let registry = PoolRegistry::builder().default_count(3).build();
    /// ```
    pub fn default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the registry. This governs how
    /// to treat remaining pools when the registry is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_pool::{DropPolicy, PoolRegistry};
    ///
    /// let registry = PoolRegistry::builder()
    ///     .drop_policy(DropPolicy::MustNotDropPools)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds a shareable registry with the specified configuration.
    ///
    /// For simple cases, prefer [`PoolRegistry::new()`] which is equivalent to
    /// `PoolRegistry::builder().build()`.
    #[must_use]
    pub fn build(self) -> PoolRegistry {
        PoolRegistry::from(self.build_raw())
    }

    /// Builds a registry with exclusive access and the specified configuration.
    ///
    /// For simple cases, prefer [`RawPoolRegistry::new()`] which is equivalent to
    /// `RawPoolRegistry::builder().build_raw()`.
    #[must_use]
    pub fn build_raw(self) -> RawPoolRegistry {
        RawPoolRegistry::new_inner(self.default_count, self.drop_policy)
    }
}
