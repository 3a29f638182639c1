use keyed_pool::PoolRegistry;
use tracing::debug;

use crate::Service;

/// The registry is usable as soon as it is built, so initialization only guarantees that it
/// starts out empty. Shutdown tears down every pool.
impl Service for PoolRegistry {
    #[cfg_attr(test, mutants::skip)] // The log line is the only difference; teardown is tested.
    fn init(&mut self) {
        if self.pool_count() != 0 {
            debug!(
                pool_count = self.pool_count(),
                "object pooling initialized with leftover pools; tearing them down"
            );
        }

        self.teardown_all();
    }

    fn destroy(&mut self) {
        self.teardown_all();
    }

    fn name(&self) -> &str {
        "object_pooling"
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use keyed_pool::SeedPolicy;

    use super::*;
    use crate::test_objects::{Barrel, destroyed_count};

    #[test]
    fn init_starts_empty() {
        let mut registry = PoolRegistry::new();
        registry.declare_with(Barrel::seed(), 2, SeedPolicy::Exclude);

        registry.init();

        assert_eq!(registry.pool_count(), 0);
    }

    #[test]
    fn destroy_tears_down_all_pools() {
        let mut registry = PoolRegistry::new();
        let seed = Barrel::seed();
        let counter = destroyed_count(&seed);
        registry.declare_with(seed, 3, SeedPolicy::Exclude);

        registry.destroy();

        assert_eq!(registry.pool_count(), 0);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn has_stable_name() {
        let registry = PoolRegistry::new();

        assert_eq!(registry.name(), "object_pooling");
    }
}
