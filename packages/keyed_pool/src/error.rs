use thiserror::Error;

/// Errors that can occur when operating on a pool registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller asked for an object from a pool that has not been declared.
    ///
    /// Pools must be declared via [`declare()`][crate::RawPoolRegistry::declare] or
    /// [`declare_with()`][crate::RawPoolRegistry::declare_with] before objects can be checked
    /// out of them. A pool that has been torn down must be declared again.
    #[error("pool '{pool_id}' has not been declared")]
    UnknownPool {
        /// The identifier the caller asked for.
        pool_id: String,
    },
}

/// A specialized `Result` type for pool registry operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
