//! Pooled objects that record their lifecycle, for use in unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Pooled, PooledObject};

/// A lifecycle callback observed by a [`Probe`], tagged with the probe's serial number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    Activated(usize),
    Deactivated(usize),
    Destroyed(usize),
}

/// Shared log of lifecycle events, plus the serial number counter for new probes.
#[derive(Clone, Debug, Default)]
pub(crate) struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
    next_serial: Rc<Cell<usize>>,
}

impl Journal {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub(crate) fn destroyed(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Destroyed(serial) => Some(*serial),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    fn take_serial(&self) -> usize {
        let serial = self.next_serial.get();
        self.next_serial.set(serial.wrapping_add(1));
        serial
    }
}

/// A pooled object that writes every lifecycle callback into a [`Journal`].
///
/// Serial numbers are handed out in creation order, starting from 0 for the first probe
/// created against a journal.
#[derive(Debug)]
pub(crate) struct Probe {
    pool_id: String,
    serial: usize,
    active: bool,
    journal: Journal,
}

impl Probe {
    /// Creates an inactive probe wrapped in a handle.
    pub(crate) fn seed(pool_id: &str, journal: &Journal) -> Pooled {
        Pooled::new(Self::new(pool_id, journal, false))
    }

    /// Creates an active probe wrapped in a handle.
    pub(crate) fn active_seed(pool_id: &str, journal: &Journal) -> Pooled {
        Pooled::new(Self::new(pool_id, journal, true))
    }

    pub(crate) fn serial(&self) -> usize {
        self.serial
    }

    fn new(pool_id: &str, journal: &Journal, active: bool) -> Self {
        Self {
            pool_id: pool_id.to_owned(),
            serial: journal.take_serial(),
            active,
            journal: journal.clone(),
        }
    }
}

impl PooledObject for Probe {
    fn pool_id(&self) -> &str {
        &self.pool_id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn create(&self) -> Pooled {
        Pooled::new(Self::new(&self.pool_id, &self.journal, false))
    }

    fn activated(&mut self) {
        self.active = true;
        self.journal.record(Event::Activated(self.serial));
    }

    fn deactivated(&mut self) {
        self.active = false;
        self.journal.record(Event::Deactivated(self.serial));
    }

    fn destroyed(&mut self) {
        self.journal.record(Event::Destroyed(self.serial));
    }
}

/// Reads the serial number of a pooled [`Probe`].
pub(crate) fn serial_of(pooled: &Pooled) -> usize {
    pooled
        .downcast_ref::<Probe>()
        .map(|probe| probe.serial())
        .expect("test pools only contain probes")
}
