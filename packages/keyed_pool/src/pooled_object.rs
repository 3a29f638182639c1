use std::any::Any;

use crate::Pooled;

/// An object that can be reused through a [`RawPoolRegistry`][crate::RawPoolRegistry] or
/// [`PoolRegistry`][crate::PoolRegistry].
///
/// The registry never looks at the payload of a pooled object. It only relies on the identifier,
/// the activity flag, the factory and the three lifecycle callbacks defined here. Everything
/// else (what "active" means for the object, whether it is visible, what it holds) is up to the
/// implementation.
///
/// All objects in the same pool must be interchangeable: any member can serve as the template
/// from which the registry manufactures more members when the pool runs dry.
///
/// # Lifecycle
///
/// 1. The object is created, either by the caller (the seed) or by [`create()`][Self::create].
/// 2. Manufactured objects receive [`deactivated()`][Self::deactivated] when they are added
///    to a pool during declaration.
/// 3. Each checkout calls [`activated()`][Self::activated], each check-in calls
///    [`deactivated()`][Self::deactivated].
/// 4. When the pool is torn down, [`destroyed()`][Self::destroyed] is called exactly once and
///    the registry forgets the object.
///
/// # Example
///
/// ```rust
/// use keyed_pool::{Pooled, PooledObject};
///
/// #[derive(Debug)]
/// struct Bullet {
///     speed: f32,
///     active: bool,
/// }
///
/// impl PooledObject for Bullet {
///     fn pool_id(&self) -> &str {
///         "bullet"
///     }
///
///     fn is_active(&self) -> bool {
///         self.active
///     }
///
///     fn create(&self) -> Pooled {
///         Pooled::new(Bullet {
///             speed: self.speed,
///             active: false,
///         })
///     }
///
///     fn activated(&mut self) {
///         self.active = true;
///     }
///
///     fn deactivated(&mut self) {
///         self.active = false;
///     }
///
///     fn destroyed(&mut self) {}
/// }
/// ```
pub trait PooledObject: Any {
    /// The identifier of the pool this object belongs to.
    ///
    /// Must be non-empty and must not change for the lifetime of the object. Every object
    /// manufactured from this one must report the same identifier.
    fn pool_id(&self) -> &str;

    /// Whether the object is currently checked out to a caller.
    fn is_active(&self) -> bool;

    /// Manufactures a new, independent object configured identically to this one.
    ///
    /// The new object has the same pool identifier and the same reusable configuration but its
    /// own activity state. This must not have side effects on `self`.
    fn create(&self) -> Pooled;

    /// Called exactly once per checkout, right before the object is handed to the caller.
    ///
    /// After this returns, [`is_active()`][Self::is_active] must report `true`.
    fn activated(&mut self);

    /// Called exactly once per check-in and once after the object is manufactured during
    /// pool declaration.
    ///
    /// After this returns, [`is_active()`][Self::is_active] must report `false`.
    fn deactivated(&mut self);

    /// Called exactly once when the object is permanently removed from its pool.
    ///
    /// The registry makes no further calls against the object afterwards.
    fn destroyed(&mut self);
}
