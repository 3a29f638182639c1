use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::PooledObject;

/// A shared handle to an object that lives in a pool registry.
///
/// The registry keeps one handle to every member of every pool and hands out clones of those
/// handles on checkout. Cloning a [`Pooled`] does not clone the object; all clones refer to the
/// same object.
///
/// Access to the object goes through [`borrow()`][Self::borrow] and
/// [`borrow_mut()`][Self::borrow_mut] for the [`PooledObject`] surface, or through
/// [`downcast_ref()`][Self::downcast_ref] and [`downcast_mut()`][Self::downcast_mut] for the
/// concrete type.
///
/// # Single-threaded Design
///
/// This type is designed for single-threaded use and is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use keyed_pool::{Pooled, PooledObject};
///
/// #[derive(Debug)]
/// struct Spark {
///     brightness: u8,
///     active: bool,
/// }
///
/// impl PooledObject for Spark {
///     fn pool_id(&self) -> &str {
///         "spark"
///     }
///
///     fn is_active(&self) -> bool {
///         self.active
///     }
///
///     fn create(&self) -> Pooled {
///         Pooled::new(Spark {
///             brightness: self.brightness,
///             active: false,
///         })
///     }
///
///     fn activated(&mut self) {
///         self.active = true;
///     }
///
///     fn deactivated(&mut self) {
///         self.active = false;
///     }
///
///     fn destroyed(&mut self) {}
/// }
///
/// let spark = Pooled::new(Spark {
///     brightness: 200,
///     active: false,
/// });
///
/// assert_eq!(spark.pool_id(), "spark");
/// assert_eq!(spark.downcast_ref::<Spark>().unwrap().brightness, 200);
///
/// spark.downcast_mut::<Spark>().unwrap().brightness = 10;
/// assert_eq!(spark.downcast_ref::<Spark>().unwrap().brightness, 10);
/// ```
#[derive(Clone)]
pub struct Pooled {
    inner: Rc<RefCell<dyn PooledObject>>,
}

impl Pooled {
    /// Wraps an object in a new handle.
    ///
    /// This is typically called from [`PooledObject::create()`] and when constructing the seed
    /// object passed to a pool declaration.
    #[must_use]
    pub fn new<T: PooledObject>(object: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(object)),
        }
    }

    /// Immutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, dyn PooledObject> {
        self.inner.borrow()
    }

    /// Mutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, dyn PooledObject> {
        self.inner.borrow_mut()
    }

    /// Immutably borrows the object as its concrete type.
    ///
    /// Returns `None` if the object is not a `T`.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn downcast_ref<T: PooledObject>(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.inner.borrow(), |object| {
            let object: &dyn Any = object;
            object.downcast_ref::<T>()
        })
        .ok()
    }

    /// Mutably borrows the object as its concrete type.
    ///
    /// Returns `None` if the object is not a `T`.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    #[must_use]
    pub fn downcast_mut<T: PooledObject>(&self) -> Option<RefMut<'_, T>> {
        RefMut::filter_map(self.inner.borrow_mut(), |object| {
            let object: &mut dyn Any = object;
            object.downcast_mut::<T>()
        })
        .ok()
    }

    /// The identifier of the pool the object belongs to.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn pool_id(&self) -> String {
        self.inner.borrow().pool_id().to_owned()
    }

    /// Whether the object is currently checked out.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.borrow().is_active()
    }

    /// Whether two handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    /// Whether the registry may hand this object out.
    ///
    /// An object that the caller is holding any borrow of is in use, whatever its activity
    /// flag says, because activating it requires exclusive access.
    pub(crate) fn is_free(&self) -> bool {
        self.inner
            .try_borrow_mut()
            .is_ok_and(|object| !object.is_active())
    }
}

impl fmt::Debug for Pooled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(object) => f
                .debug_struct("Pooled")
                .field("pool_id", &object.pool_id())
                .field("is_active", &object.is_active())
                .finish(),
            Err(_) => f.debug_struct("Pooled").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_not_impl_any;

    use super::*;
    use crate::test_objects::{Journal, Probe};

    assert_not_impl_any!(Pooled: Send, Sync);

    #[test]
    fn clones_share_the_object() {
        let journal = Journal::default();
        let first = Probe::seed("bullet", &journal);
        let second = first.clone();

        assert!(Pooled::ptr_eq(&first, &second));

        second.borrow_mut().activated();
        assert!(first.is_active());
    }

    #[test]
    fn created_objects_are_distinct() {
        let journal = Journal::default();
        let seed = Probe::seed("bullet", &journal);
        let created = seed.borrow().create();

        assert!(!Pooled::ptr_eq(&seed, &created));
        assert_eq!(created.pool_id(), "bullet");
    }

    #[test]
    fn downcast_to_wrong_type_is_none() {
        #[derive(Debug)]
        struct Other;

        impl PooledObject for Other {
            fn pool_id(&self) -> &str {
                "other"
            }

            fn is_active(&self) -> bool {
                false
            }

            fn create(&self) -> Pooled {
                Pooled::new(Self)
            }

            fn activated(&mut self) {}

            fn deactivated(&mut self) {}

            fn destroyed(&mut self) {}
        }

        let journal = Journal::default();
        let probe = Probe::seed("bullet", &journal);

        assert!(probe.downcast_ref::<Other>().is_none());
        assert!(probe.downcast_mut::<Other>().is_none());
        assert_eq!(probe.downcast_ref::<Probe>().unwrap().serial(), 0);
    }

    #[test]
    fn mutably_borrowed_object_is_not_free() {
        let journal = Journal::default();
        let probe = Probe::seed("bullet", &journal);

        assert!(probe.is_free());

        let guard = probe.borrow_mut();
        assert!(!probe.is_free());
        drop(guard);

        probe.borrow_mut().activated();
        assert!(!probe.is_free());
    }

    #[test]
    fn shared_borrowed_object_is_not_free() {
        let journal = Journal::default();
        let probe = Probe::seed("bullet", &journal);

        let reading = probe.borrow();
        assert!(!probe.is_free());
        drop(reading);

        assert!(probe.is_free());
    }

    #[test]
    fn debug_output_survives_active_borrow() {
        let journal = Journal::default();
        let probe = Probe::seed("bullet", &journal);

        let text = format!("{probe:?}");
        assert!(text.contains("bullet"));

        let _guard = probe.borrow_mut();
        let text = format!("{probe:?}");
        assert_eq!(text, "Pooled { .. }");
    }
}
