//! Core types for filter-select
//!
//! A filter is a controlled component: the host owns the selection value,
//! passes it in, and receives the next value through a single `on_select`
//! notification. This crate holds the logic that decides that next value.
//!
//! # Core Concepts
//!
//! - **FilterOption / OptionCatalog**: the read-only choices, identified by value
//! - **SelectionValue**: `None`, a single value, or an ordered set
//! - **SelectionController**: applies toggle/choose/clear, gates disabled
//!   options, and owns the popup's open/closed state
//! - **Component**: presentation surfaces render from props and emit actions
//! - **SelectionStore**: host-side slot that keeps the value between events
//!
//! # Example
//!
//! ```
//! use filter_select_core::prelude::*;
//!
//! let options = vec![
//!     FilterOption::new("Bug", "bug"),
//!     FilterOption::new("Feature", "feature"),
//!     FilterOption::new("Wontfix", "wontfix").disabled(true),
//! ];
//! let catalog = OptionCatalog::new(&options);
//! let controller = SelectionController::new(SelectMode::Multi);
//!
//! let mut value = SelectionValue::None;
//! for event in [
//!     SelectionEvent::Toggle { value: "bug", on: true },
//!     SelectionEvent::Toggle { value: "feature", on: true },
//!     SelectionEvent::Toggle { value: "wontfix", on: true },
//! ] {
//!     controller.dispatch(&catalog, &value.clone(), &event, |next| value = next);
//! }
//!
//! assert_eq!(value, SelectionValue::Multi(vec!["feature", "bug"]));
//! ```

pub mod component;
pub mod config;
pub mod controller;
pub mod event;
pub mod option;
pub mod selection;
pub mod store;
pub mod testing;

pub use component::Component;
pub use config::{ConfigError, ContainerKind, FilterConfig, TriggerProps};
pub use controller::{OpenState, SelectionController};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use option::{FilterOption, OptionCatalog};
pub use selection::{normalize, transition, SelectMode, SelectionEvent, SelectionValue};
pub use store::{LoggingMiddleware, Middleware, NoopMiddleware, SelectionStore};

pub use testing::{click, key, key_event, scroll, RenderHarness, SelectionRecorder};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::component::Component;
    pub use crate::config::{ContainerKind, FilterConfig, TriggerProps};
    pub use crate::controller::{OpenState, SelectionController};
    pub use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
    pub use crate::option::{FilterOption, OptionCatalog};
    pub use crate::selection::{SelectMode, SelectionEvent, SelectionValue};
    pub use crate::store::{LoggingMiddleware, Middleware, SelectionStore};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
