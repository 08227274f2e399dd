//! filter-select: controlled filter dropdowns for ratatui apps
//!
//! The host owns the selection value. A [`FilterDropdown`] renders it, turns
//! key presses and clicks into toggle/choose/clear events, and reports the
//! resulting value through the host's `on_select` action.
//!
//! # Example
//! ```ignore
//! use filter_select::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     LabelsSelect(SelectionValue<String>),
//! }
//!
//! let mut labels = FilterDropdown::from_config(&config);
//! let mut selection = SelectionStore::from_config(&config);
//!
//! // Apply each value before the next event builds its props
//! let actions: Vec<_> = labels.handle_event(&event, props).into_iter().collect();
//! for AppAction::LabelsSelect(value) in actions {
//!     selection.apply(value);
//! }
//! ```

// Re-export everything from core
pub use filter_select_core::*;

pub use filter_select_components::{
    popup_below, render_popup_background, summarize, FilterDropdown, FilterDropdownProps,
    PopupStyle,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use filter_select_core::prelude::*;

    pub use filter_select_components::prelude::*;
}
