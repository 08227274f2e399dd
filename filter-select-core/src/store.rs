//! Host-side holder for a filter's controlled value
//!
//! Filters never keep the selection. A host stores what `on_select` reports
//! and passes it back as props on the next event and frame. `SelectionStore`
//! is that slot: it coerces incoming values to the filter's mode, counts
//! real changes, and runs middleware around each update.
//!
//! Apply every reported value before handling the next terminal event. Props
//! built from a value that has not been applied yet make the controller work
//! on a stale selection and drop earlier toggles.

use std::fmt::Debug;

use tracing::debug;

use crate::config::FilterConfig;
use crate::controller::SelectionController;
use crate::option::OptionCatalog;
use crate::selection::{normalize, SelectMode, SelectionEvent, SelectionValue};

/// Hook called around every stored update
pub trait Middleware<V> {
    /// Before `next` replaces `current`
    fn before(&mut self, current: &SelectionValue<V>, next: &SelectionValue<V>);
    /// After the update, with the value now held
    fn after(&mut self, value: &SelectionValue<V>, changed: bool);
}

/// Middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<V> Middleware<V> for NoopMiddleware {
    fn before(&mut self, _current: &SelectionValue<V>, _next: &SelectionValue<V>) {}
    fn after(&mut self, _value: &SelectionValue<V>, _changed: bool) {}
}

/// Logs every stored update through `tracing`
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    pub log_before: bool,
    pub log_after: bool,
}

impl LoggingMiddleware {
    /// Log after the update only
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<V: Debug + PartialEq> Middleware<V> for LoggingMiddleware {
    fn before(&mut self, current: &SelectionValue<V>, next: &SelectionValue<V>) {
        if self.log_before {
            debug!(?current, ?next, "Applying selection");
        }
    }

    fn after(&mut self, value: &SelectionValue<V>, changed: bool) {
        if self.log_after {
            debug!(selected = value.len(), ?value, changed, "Selection stored");
        }
    }
}

/// The controlled value of one filter, as a host keeps it
///
/// # Example
///
/// ```
/// use filter_select_core::{SelectMode, SelectionStore, SelectionValue};
///
/// let mut store = SelectionStore::new(SelectMode::Multi, SelectionValue::None);
/// assert!(store.apply(SelectionValue::Multi(vec!["bug"])));
/// assert!(!store.apply(SelectionValue::Multi(vec!["bug"])));
/// assert_eq!(store.revision(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionStore<V, M = NoopMiddleware> {
    mode: SelectMode,
    value: SelectionValue<V>,
    revision: u64,
    middleware: M,
}

impl<V: Clone + PartialEq> SelectionStore<V> {
    /// Hold `initial`, normalized for `mode`
    pub fn new(mode: SelectMode, initial: SelectionValue<V>) -> Self {
        Self {
            value: coerce(mode, &initial),
            mode,
            revision: 0,
            middleware: NoopMiddleware,
        }
    }

    /// Mode and starting value from a filter config
    pub fn from_config(config: &FilterConfig<V>) -> Self {
        Self::new(config.mode(), config.initial_value())
    }
}

impl<V: Clone + PartialEq, M: Middleware<V>> SelectionStore<V, M> {
    pub fn with_middleware<N: Middleware<V>>(self, middleware: N) -> SelectionStore<V, N> {
        SelectionStore {
            mode: self.mode,
            value: self.value,
            revision: self.revision,
            middleware,
        }
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// The value to pass back as props
    pub fn value(&self) -> &SelectionValue<V> {
        &self.value
    }

    /// Number of updates that changed the stored value
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Store a value reported through `on_select`
    ///
    /// Returns `true` if the stored value changed and a re-render is needed.
    pub fn apply(&mut self, next: SelectionValue<V>) -> bool {
        let next = coerce(self.mode, &next);
        self.middleware.before(&self.value, &next);

        let changed = next != self.value;
        if changed {
            self.value = next;
            self.revision += 1;
        }

        self.middleware.after(&self.value, changed);
        changed
    }

    /// Run `event` through `controller` against the stored value and apply
    /// the result, if any
    pub fn handle(
        &mut self,
        controller: &SelectionController,
        catalog: &OptionCatalog<'_, V>,
        event: &SelectionEvent<V>,
    ) -> bool {
        match controller.handle(catalog, &self.value, event) {
            Some(next) => self.apply(next),
            None => false,
        }
    }
}

/// `normalize`, except that `None` stays `None` so a cleared filter reads as cleared
fn coerce<V: Clone + PartialEq>(mode: SelectMode, value: &SelectionValue<V>) -> SelectionValue<V> {
    if value.is_none() {
        SelectionValue::None
    } else {
        normalize(mode, value)
    }
}
