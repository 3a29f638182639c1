/// Determines what happens to declared pools when the registry is dropped.
///
/// By default, the registry tears down any remaining pools when it is dropped, so every object
/// still in the registry receives its [`destroyed()`][crate::PooledObject::destroyed] callback.
///
/// # Examples
///
/// ```
/// use keyed_pool::{DropPolicy, PoolRegistry};
///
/// // The drop policy is set at registry creation time.
/// let registry = PoolRegistry::builder()
///     .drop_policy(DropPolicy::MustNotDropPools)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The registry tears down its remaining pools when it is dropped. This is the default.
    #[default]
    MayDropPools,

    /// The registry will panic if it still contains pools when it is dropped.
    ///
    /// This may be valuable if the owner is expected to always call
    /// [`teardown_all()`][crate::RawPoolRegistry::teardown_all] during an orderly shutdown and
    /// a forgotten shutdown should be loud instead of silently handled.
    MustNotDropPools,
}
