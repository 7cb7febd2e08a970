use std::collections::BTreeMap;

use log::{trace, warn};
use thiserror::Error;

use crate::{Observer, Params};

/// A derived scalar a watcher publishes back into its store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Writeback {
    /// The output name, e.g. `"loss"`.
    pub field: &'static str,

    /// The computed value.
    pub value: f64,
}

impl Writeback {
    /// Creates a new writeback.
    #[must_use]
    pub fn new(field: &'static str, value: f64) -> Self {
        Self { field, value }
    }
}

/// Errors that can occur when updating a [`Store`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown parameter `{0}`")]
    UnknownField(String),
}

type Watcher<P> = Box<dyn Observer<P, Writeback>>;

/// Observable parameter state shared between sliders and watchers.
///
/// Watchers are invoked synchronously, in registration order, on the thread
/// that mutates the store. A watcher may answer with a [`Writeback`], which
/// is recorded in the store's outputs without triggering another round of
/// notifications.
pub struct Store<P> {
    params: P,
    outputs: BTreeMap<&'static str, f64>,
    watchers: Vec<Watcher<P>>,
}

impl<P: Params> Store<P> {
    /// Creates a store holding `params` with no watchers.
    pub fn new(params: P) -> Self {
        Self {
            params,
            outputs: BTreeMap::new(),
            watchers: Vec::new(),
        }
    }

    /// Returns the current parameters.
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Returns the last value written back under `name`, if any.
    pub fn output(&self, name: &str) -> Option<f64> {
        self.outputs.get(name).copied()
    }

    /// Returns all outputs written back so far, ordered by name.
    pub fn outputs(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.outputs.iter().map(|(name, value)| (*name, *value))
    }

    /// Returns the number of registered watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Registers a watcher and invokes it once with the current parameters.
    pub fn subscribe<W>(&mut self, watcher: W)
    where
        W: Observer<P, Writeback> + 'static,
    {
        let mut watcher: Watcher<P> = Box::new(watcher);
        if let Some(writeback) = watcher.observe(&self.params) {
            self.outputs.insert(writeback.field, writeback.value);
        }
        self.watchers.push(watcher);
    }

    /// Sets a single parameter and notifies watchers if its value changed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownField`] if `P` does not declare `field`.
    /// No watcher runs in that case.
    #[allow(clippy::float_cmp)]
    pub fn set(&mut self, field: &str, value: f64) -> Result<(), StoreError> {
        let Some(previous) = self.params.set(field, value) else {
            warn!("ignoring update to unknown parameter `{field}`");
            return Err(StoreError::UnknownField(field.to_owned()));
        };

        if previous == value {
            trace!("parameter `{field}` unchanged at {value}");
            return Ok(());
        }

        trace!("parameter `{field}` changed from {previous} to {value}");
        self.notify();
        Ok(())
    }

    /// Replaces every parameter at once and notifies watchers a single time.
    pub fn replace(&mut self, params: P) {
        self.params = params;
        self.notify();
    }

    /// Invokes every watcher with the current parameters.
    pub fn notify(&mut self) {
        trace!("notifying {} watcher(s)", self.watchers.len());
        for watcher in &mut self.watchers {
            if let Some(writeback) = watcher.observe(&self.params) {
                self.outputs.insert(writeback.field, writeback.value);
            }
        }
    }
}

impl<P: Params + Default> Default for Store<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::Field;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Slope {
        m: f64,
        c: f64,
    }

    impl Params for Slope {
        fn fields() -> &'static [Field] {
            &[
                Field {
                    name: "m",
                    min: -1.0,
                    max: 1.0,
                },
                Field {
                    name: "c",
                    min: -1.0,
                    max: 1.0,
                },
            ]
        }

        fn get(&self, field: &str) -> Option<f64> {
            match field {
                "m" => Some(self.m),
                "c" => Some(self.c),
                _ => None,
            }
        }

        fn set(&mut self, field: &str, value: f64) -> Option<f64> {
            match field {
                "m" => Some(std::mem::replace(&mut self.m, value)),
                "c" => Some(std::mem::replace(&mut self.c, value)),
                _ => None,
            }
        }
    }

    #[test]
    fn subscribe_invokes_watcher_immediately() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::new(Slope { m: 2.0, c: 1.0 });

        let seen = Rc::clone(&calls);
        store.subscribe(move |p: &Slope| {
            *seen.borrow_mut() += 1;
            Some(Writeback::new("at_one", p.m + p.c))
        });

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.output("at_one"), Some(3.0));
        assert_eq!(store.watcher_count(), 1);
    }

    #[test]
    fn set_notifies_watchers_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::<Slope>::default();

        for id in 0..3 {
            let log = Rc::clone(&log);
            store.subscribe(move |p: &Slope| {
                log.borrow_mut().push((id, p.m));
                None
            });
        }
        log.borrow_mut().clear();

        store.set("m", 0.5).unwrap();

        assert_eq!(*log.borrow(), vec![(0, 0.5), (1, 0.5), (2, 0.5)]);
    }

    #[test]
    fn set_rejects_unknown_fields_without_notifying() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::<Slope>::default();

        let seen = Rc::clone(&calls);
        store.subscribe(move |_: &Slope| {
            *seen.borrow_mut() += 1;
            None
        });

        let err = store.set("slope", 1.0).unwrap_err();

        assert_eq!(err, StoreError::UnknownField("slope".into()));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(*store.params(), Slope::default());
    }

    #[test]
    fn unchanged_value_does_not_refire() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::new(Slope { m: 1.0, c: 0.0 });

        let seen = Rc::clone(&calls);
        store.subscribe(move |_: &Slope| {
            *seen.borrow_mut() += 1;
            None
        });

        store.set("m", 1.0).unwrap();
        assert_eq!(*calls.borrow(), 1);

        store.set("m", 1.5).unwrap();
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn writebacks_overwrite_previous_outputs() {
        let mut store = Store::<Slope>::default();
        store.subscribe(|p: &Slope| Some(Writeback::new("loss", p.m * p.m)));

        store.set("m", 3.0).unwrap();
        assert_eq!(store.output("loss"), Some(9.0));

        store.set("m", -2.0).unwrap();
        assert_eq!(store.output("loss"), Some(4.0));
        assert_eq!(store.outputs().collect::<Vec<_>>(), vec![("loss", 4.0)]);
    }

    #[test]
    fn replace_notifies_once() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::<Slope>::default();

        let seen = Rc::clone(&calls);
        store.subscribe(move |_: &Slope| {
            *seen.borrow_mut() += 1;
            None
        });

        store.replace(Slope { m: 4.0, c: -4.0 });

        assert_eq!(*calls.borrow(), 2);
        assert_eq!(store.params().get("c"), Some(-4.0));
    }

    #[test]
    fn unit_observer_never_writes_back() {
        let mut store = Store::<Slope>::default();
        store.subscribe(());
        store.set("c", 1.0).unwrap();

        assert_eq!(store.outputs().count(), 0);
    }
}
