use std::fmt;

use keyed_pool::PoolRegistry;

use crate::{Service, ServiceHost};

/// Builder for creating an instance of [`ServiceHost`].
///
/// Services are initialized in the order they are added, after the object pooling registry,
/// when [`build()`][Self::build] is called.
///
/// # Examples
///
/// ```
/// use keyed_pool::PoolRegistry;
/// use service_host::ServiceHost;
///
/// // Default host.
/// let host = ServiceHost::builder().build();
///
/// // With a registry that manufactures 32 objects per declared pool.
/// let host = ServiceHost::builder()
///     .object_pooling(PoolRegistry::builder().default_count(32).build())
///     .build();
/// ```
#[must_use]
pub struct ServiceHostBuilder {
    object_pooling: Option<PoolRegistry>,
    services: Vec<Box<dyn Service>>,
}

impl ServiceHostBuilder {
    pub(crate) fn new() -> Self {
        Self {
            object_pooling: None,
            services: Vec::new(),
        }
    }

    /// Sets the object pooling registry the host manages.
    ///
    /// If not set, a registry with default configuration is created.
    pub fn object_pooling(mut self, registry: PoolRegistry) -> Self {
        self.object_pooling = Some(registry);
        self
    }

    /// Registers an additional service, initialized after every service registered before it.
    pub fn service(mut self, service: impl Service + 'static) -> Self {
        self.services.push(Box::new(service));
        self
    }

    /// Builds the host and initializes every registered service.
    #[must_use]
    pub fn build(self) -> ServiceHost {
        ServiceHost::start(self.object_pooling.unwrap_or_default(), self.services)
    }
}

impl fmt::Debug for ServiceHostBuilder {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, no behavior depends on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .services
            .iter()
            .map(|service| service.name())
            .collect::<Vec<_>>();

        f.debug_struct("ServiceHostBuilder")
            .field("object_pooling", &self.object_pooling)
            .field("services", &names)
            .finish()
    }
}
