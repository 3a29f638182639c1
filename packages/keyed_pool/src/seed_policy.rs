/// Determines whether the seed object passed to a pool declaration becomes a member of the pool.
///
/// # Examples
///
/// ```
/// use keyed_pool::{PoolRegistry, SeedPolicy};
/// # use keyed_pool::{Pooled, PooledObject};
/// #
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
/// // The seed is kept in the pool next to the 3 manufactured copies.
/// registry.declare_with(Pooled::new(Bullet { active: false }), 3, SeedPolicy::Include);
/// assert_eq!(registry.pool_len("bullet"), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum SeedPolicy {
    /// The seed only serves as the template for manufactured objects. This is the default.
    #[default]
    Exclude,

    /// The seed is inserted as the first member of the pool, in whatever state it is in.
    ///
    /// Unlike manufactured objects, the seed does not receive a
    /// [`deactivated()`][crate::PooledObject::deactivated] callback on insertion.
    Include,
}
