#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Initializes, owns and tears down the long-lived services of an application.
//!
//! A [`ServiceHost`] is the composition root for the subsystems that live as long as the
//! application does. It always carries an object pooling registry
//! ([`keyed_pool::PoolRegistry`]) and can carry any number of additional [`Service`]s. All of
//! them are initialized once, in registration order, when the host is built, and destroyed
//! once, in the same order, when the host shuts down.
//!
//! # Example
//!
//! ```rust
//! use service_host::{Service, ServiceHost};
//!
//! #[derive(Debug, Default)]
//! struct Telemetry {
//!     started: bool,
//! }
//!
//! impl Service for Telemetry {
//!     fn init(&mut self) {
//!         self.started = true;
//!     }
//!
//!     fn destroy(&mut self) {
//!         self.started = false;
//!     }
//! }
//!
//! let mut host = ServiceHost::builder()
//!     .service(Telemetry::default())
//!     .build();
//!
//! // Object pooling first, then telemetry.
//! assert_eq!(host.service_count(), 2);
//!
//! let pools = host.object_pooling().clone();
//! assert!(pools.is_empty());
//!
//! host.shutdown();
//! ```

mod builder;
mod host;
mod object_pooling;
mod service;

#[cfg(test)]
mod test_objects;

pub use builder::*;
pub use host::*;
pub use service::*;
