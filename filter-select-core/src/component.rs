//! Component trait for presentation surfaces

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and reports interactions as actions
///
/// Components follow these rules:
/// 1. Props carry all host-owned data, including the controlled selection value
/// 2. `handle_event` returns actions and never mutates host state
/// 3. `render` depends only on props plus local UI state (open flag, highlight, scroll)
///
/// Focus is passed in props as a plain flag so components stay decoupled from
/// however the host tracks focus.
///
/// # Example
///
/// ```ignore
/// use filter_select::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         match event {
///             EventKind::Key(key) if key.code == KeyCode::Char(' ') => Some(AppAction::Flip),
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "[x]" } else { "[ ]" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any `IntoIterator<Item = A>`: `None` for no actions,
    /// `Some(action)` for one.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
