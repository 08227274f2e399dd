//! Selection controller: gates interactions, applies transitions, owns open state

use tracing::debug;

use crate::config::FilterConfig;
use crate::option::OptionCatalog;
use crate::selection::{normalize, transition, SelectMode, SelectionEvent, SelectionValue};

/// Whether the popup surface is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Controlled selection logic for one filter
///
/// The selection value belongs to the caller: it is passed into
/// [`handle`](Self::handle) and the result is handed back through a
/// notification. The only state kept here is the fixed [`SelectMode`] and the
/// popup's [`OpenState`].
///
/// # Example
///
/// ```
/// use filter_select_core::{
///     FilterOption, OptionCatalog, SelectMode, SelectionController, SelectionEvent,
///     SelectionValue,
/// };
///
/// let options = vec![FilterOption::new("Open", "open"), FilterOption::new("Done", "done")];
/// let catalog = OptionCatalog::new(&options);
/// let controller = SelectionController::new(SelectMode::Multi);
///
/// let next = controller.handle(
///     &catalog,
///     &SelectionValue::None,
///     &SelectionEvent::Toggle { value: "done", on: true },
/// );
/// assert_eq!(next, Some(SelectionValue::Multi(vec!["done"])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    mode: SelectMode,
    open: OpenState,
}

impl SelectionController {
    /// Create a controller in the `Closed` state
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            open: OpenState::Closed,
        }
    }

    /// Controller for the mode a host configured
    pub fn from_config<V: Clone + PartialEq>(config: &FilterConfig<V>) -> Self {
        Self::new(config.mode())
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Compute the value to notify for `event`, or `None` if nothing changes
    ///
    /// Toggle ON or choose of a disabled option, or of a value the catalog
    /// does not contain, is rejected. Toggle OFF only requires the option not
    /// to be disabled, so a value the catalog no longer lists can still be
    /// removed. Clear always produces a notification.
    pub fn handle<V: Clone + PartialEq>(
        &self,
        catalog: &OptionCatalog<'_, V>,
        current: &SelectionValue<V>,
        event: &SelectionEvent<V>,
    ) -> Option<SelectionValue<V>> {
        let rejected = match event {
            SelectionEvent::Toggle { value, on: false } => catalog.is_disabled(value),
            SelectionEvent::Toggle { value, .. } | SelectionEvent::Choose(value) => {
                !catalog.is_selectable(value)
            }
            SelectionEvent::Clear => false,
        };
        if rejected {
            debug!(
                event = event.name(),
                known = event.value().is_some_and(|v| catalog.find(v).is_some()),
                "Ignoring interaction on unselectable option"
            );
            return None;
        }

        let next = transition(self.mode, current, event);

        if matches!(event, SelectionEvent::Clear) {
            return Some(next);
        }

        if next == normalize(self.mode, current) {
            None
        } else {
            Some(next)
        }
    }

    /// Apply `event` and call `on_select` once if the value changed
    ///
    /// Returns `true` when `on_select` was invoked.
    pub fn dispatch<V, F>(
        &self,
        catalog: &OptionCatalog<'_, V>,
        current: &SelectionValue<V>,
        event: &SelectionEvent<V>,
        on_select: F,
    ) -> bool
    where
        V: Clone + PartialEq,
        F: FnOnce(SelectionValue<V>),
    {
        match self.handle(catalog, current, event) {
            Some(next) => {
                on_select(next);
                true
            }
            None => false,
        }
    }

    pub fn open_state(&self) -> OpenState {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Flip between `Closed` and `Open`
    pub fn toggle_open(&mut self) -> bool {
        self.open = match self.open {
            OpenState::Closed => OpenState::Open,
            OpenState::Open => OpenState::Closed,
        };
        debug!(open = self.open.is_open(), "Toggled filter popup");
        true
    }

    /// Open the popup; no-op when already open
    pub fn open(&mut self) -> bool {
        if self.open.is_open() {
            return false;
        }
        self.open = OpenState::Open;
        debug!("Opened filter popup");
        true
    }

    /// Close request (e.g. a click outside the surface); no-op when closed
    pub fn request_close(&mut self) -> bool {
        if !self.open.is_open() {
            return false;
        }
        self.open = OpenState::Closed;
        debug!("Closed filter popup");
        true
    }
}
