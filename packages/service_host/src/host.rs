use std::{fmt, thread};

use keyed_pool::PoolRegistry;
use tracing::debug;

use crate::{Service, ServiceHostBuilder};

/// Owns the long-lived services of an application and drives their lifecycle.
///
/// When built, the host registers the object pooling registry first, followed by any
/// additional services in the order they were given to the builder, and initializes all of
/// them in that order. On [`shutdown()`][Self::shutdown] (or when dropped) it destroys them in
/// the same order, exactly once.
///
/// The host is the composition root for object pooling: application code reaches the registry
/// through [`object_pooling()`][Self::object_pooling] instead of through global state.
///
/// # Single-threaded Design
///
/// This type is designed for single-threaded use and is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use service_host::ServiceHost;
///
/// let mut host = ServiceHost::new();
///
/// // Hand a registry handle to whatever needs pooling.
/// let pools = host.object_pooling().clone();
/// assert_eq!(pools.pool_count(), 0);
///
/// host.shutdown();
/// assert!(host.is_shut_down());
/// ```
pub struct ServiceHost {
    object_pooling: PoolRegistry,

    /// Every registered service in registration order, starting with object pooling.
    /// Emptied on shutdown.
    services: Vec<Box<dyn Service>>,

    shut_down: bool,
}

impl ServiceHost {
    /// Creates a host with a default object pooling registry and no other services, and
    /// initializes it.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for registering additional services or a custom registry.
    pub fn builder() -> ServiceHostBuilder {
        ServiceHostBuilder::new()
    }

    /// Registers the services in order and initializes each of them.
    pub(crate) fn start(object_pooling: PoolRegistry, additional: Vec<Box<dyn Service>>) -> Self {
        let mut services: Vec<Box<dyn Service>> =
            Vec::with_capacity(additional.len().saturating_add(1));
        services.push(Box::new(object_pooling.clone()));
        services.extend(additional);

        for service in &mut services {
            debug!(service = service.name(), "initializing service");
            service.init();
        }

        Self {
            object_pooling,
            services,
            shut_down: false,
        }
    }

    /// The object pooling registry. Clone the handle to pass it to code that needs pooling.
    #[must_use]
    pub fn object_pooling(&self) -> &PoolRegistry {
        &self.object_pooling
    }

    /// The number of services currently registered, including object pooling.
    ///
    /// This is zero after shutdown.
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    /// Whether [`shutdown()`][Self::shutdown] has already run.
    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Destroys every service in registration order and forgets them.
    ///
    /// Calling this more than once has no further effect.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }

        self.shut_down = true;

        for service in &mut self.services {
            debug!(service = service.name(), "destroying service");
            service.destroy();
        }

        self.services.clear();
    }
}

impl Default for ServiceHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ServiceHost {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }

        self.shutdown();
    }
}

impl fmt::Debug for ServiceHost {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .services
            .iter()
            .map(|service| service.name())
            .collect::<Vec<_>>();

        f.debug_struct("ServiceHost")
            .field("object_pooling", &self.object_pooling)
            .field("services", &names)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}
