use std::any::type_name;

/// A long-lived subsystem managed by a [`ServiceHost`][crate::ServiceHost].
///
/// The host calls [`init()`][Self::init] exactly once when it starts and
/// [`destroy()`][Self::destroy] exactly once when it shuts down. Services are initialized and
/// destroyed in the order they were registered.
///
/// A service that application code needs to reach after registration is typically a cheap
/// cloneable handle (such as [`PoolRegistry`][keyed_pool::PoolRegistry]): one clone is given
/// to the host, the others are passed to the code that uses the service.
///
/// # Example
///
/// ```rust
/// use service_host::{Service, ServiceHost};
///
/// #[derive(Debug, Default)]
/// struct Audio {
///     running: bool,
/// }
///
/// impl Service for Audio {
///     fn init(&mut self) {
///         self.running = true;
///     }
///
///     fn destroy(&mut self) {
///         self.running = false;
///     }
/// }
///
/// let mut host = ServiceHost::builder().service(Audio::default()).build();
/// host.shutdown();
/// ```
pub trait Service {
    /// Prepares the service for use. Called exactly once, before any other service that was
    /// registered after this one is initialized.
    fn init(&mut self);

    /// Releases everything the service holds. Called exactly once at shutdown; the service is
    /// not used again afterwards.
    fn destroy(&mut self);

    /// A human-readable name for the service, used in diagnostics.
    ///
    /// Defaults to the name of the implementing type.
    fn name(&self) -> &str {
        type_name::<Self>()
    }
}
