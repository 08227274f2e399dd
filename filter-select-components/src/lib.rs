//! Presentation surfaces for filter-select
//!
//! Components implement the `Component<A>` trait: they render from props and
//! report selection changes by building host actions through the `on_select`
//! callback passed in props.
//!
//! # Components
//!
//! - [`FilterDropdown`] - Single- or multi-select filter, as a dropdown or a card
//! - [`popup_below`] / [`render_popup_background`] - Popup placement helpers
//!
//! # Example
//!
//! ```ignore
//! use filter_select_components::{FilterDropdown, FilterDropdownProps};
//!
//! let mut status = FilterDropdown::new(SelectMode::Multi);
//!
//! // In your render function:
//! status.render(frame, area, FilterDropdownProps {
//!     title: "Status",
//!     options: &state.status_options,
//!     value: &state.status,
//!     container: ContainerKind::Default,
//!     trigger: &state.status_trigger,
//!     is_focused: state.focus == Focus::Status,
//!     on_select: AppAction::StatusSelect,
//! });
//! ```

mod filter_dropdown;
mod popup;

pub use filter_dropdown::{summarize, FilterDropdown, FilterDropdownProps};
pub use popup::{popup_below, render_popup_background, PopupStyle};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        popup_below, render_popup_background, FilterDropdown, FilterDropdownProps, PopupStyle,
    };
}
