#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`PoolRegistry`], a registry of object pools keyed by pool identifier.
//!
//! Expensive objects are created once, handed out on checkout, returned on check-in and only
//! destroyed when their pool is torn down. The registry does not know what the objects are;
//! it only drives the lifecycle contract defined by [`PooledObject`].
//!
//! # Features
//!
//! - **Keyed pools**: One registry holds any number of pools, each addressed by a string
//!   identifier reported by its objects.
//! - **Lifecycle callbacks**: Objects are told when they are activated, deactivated and
//!   destroyed.
//! - **Growth on demand**: A checkout against a pool with no free object manufactures one more
//!   object instead of failing.
//! - **Heterogeneous pools**: Each pool can hold a different concrete type, accessed through
//!   [`Pooled::downcast_ref()`] and [`Pooled::downcast_mut()`].
//! - **Shared and exclusive variants**: [`PoolRegistry`] is a cloneable handle for sharing one
//!   registry across an application, [`RawPoolRegistry`] offers the same operations with
//!   exclusive access.
//! - **Optional leak detection**: The registry can be configured to panic on drop if pools were
//!   not torn down.
//!
//! # Example
//!
//! ```rust
//! use keyed_pool::{PoolRegistry, Pooled, PooledObject, SeedPolicy};
//!
//! #[derive(Debug)]
//! struct Bullet {
//!     damage: u32,
//!     active: bool,
//! }
//!
//! impl PooledObject for Bullet {
//!     fn pool_id(&self) -> &str {
//!         "bullet"
//!     }
//!
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//!
//!     fn create(&self) -> Pooled {
//!         Pooled::new(Bullet {
//!             damage: self.damage,
//!             active: false,
//!         })
//!     }
//!
//!     fn activated(&mut self) {
//!         self.active = true;
//!     }
//!
//!     fn deactivated(&mut self) {
//!         self.active = false;
//!     }
//!
//!     fn destroyed(&mut self) {}
//! }
//!
//! let registry = PoolRegistry::new();
//!
//! // Manufacture 3 bullets from the seed.
//! registry.declare_with(
//!     Pooled::new(Bullet {
//!         damage: 5,
//!         active: false,
//!     }),
//!     3,
//!     SeedPolicy::Exclude,
//! );
//!
//! let bullet = registry.checkout("bullet").unwrap();
//! assert!(bullet.is_active());
//! assert_eq!(bullet.downcast_ref::<Bullet>().unwrap().damage, 5);
//!
//! // Return it to the pool when done.
//! registry.checkin(&bullet);
//! assert!(!bullet.is_active());
//!
//! // Destroy every bullet.
//! registry.teardown_pool("bullet");
//! assert!(!registry.contains_pool("bullet"));
//! ```

mod builder;
mod drop_policy;
mod error;
mod pooled;
mod pooled_object;
mod raw;
mod registry;
mod seed_policy;

#[cfg(test)]
mod test_objects;

pub use builder::*;
pub use drop_policy::*;
pub use error::*;
pub use pooled::*;
pub use pooled_object::*;
pub use raw::*;
pub use registry::*;
pub use seed_policy::*;
