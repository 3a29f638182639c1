//! Test doubles shared by the unit tests of this package.

use std::cell::Cell;
use std::rc::Rc;

use keyed_pool::{Pooled, PooledObject};
use mockall::mock;

use crate::Service;

mock! {
    #[derive(Debug)]
    pub Service {
    }

    impl Service for Service {
        fn init(&mut self);

        fn destroy(&mut self);
    }
}

/// A pooled object that counts how many members of its pool have been destroyed.
#[derive(Debug)]
pub(crate) struct Barrel {
    active: bool,
    destroyed: Rc<Cell<usize>>,
}

impl Barrel {
    pub(crate) fn seed() -> Pooled {
        Pooled::new(Self {
            active: false,
            destroyed: Rc::default(),
        })
    }
}

impl PooledObject for Barrel {
    fn pool_id(&self) -> &str {
        "barrel"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn create(&self) -> Pooled {
        Pooled::new(Self {
            active: false,
            destroyed: Rc::clone(&self.destroyed),
        })
    }

    fn activated(&mut self) {
        self.active = true;
    }

    fn deactivated(&mut self) {
        self.active = false;
    }

    fn destroyed(&mut self) {
        self.destroyed.set(self.destroyed.get().wrapping_add(1));
    }
}

/// The destruction counter shared by every object manufactured from `seed`.
pub(crate) fn destroyed_count(seed: &Pooled) -> Rc<Cell<usize>> {
    seed.downcast_ref::<Barrel>()
        .map(|object| Rc::clone(&object.destroyed))
        .expect("seed is a barrel")
}
