//! Test utilities for filters and their hosts
//!
//! - [`key`]: build a `KeyEvent` from a string (e.g. `key("ctrl+x")`)
//! - [`click`] / [`scroll`]: left-click and mouse-wheel [`EventKind`]s at a cell
//! - [`SelectionRecorder`]: collects values passed to `on_select`
//! - [`RenderHarness`]: renders into an in-memory buffer and returns plain text
//! - `assert_emitted!` / `assert_not_emitted!` / `count_emitted!` for action lists
//!
//! # Example
//!
//! ```ignore
//! use filter_select::testing::{key, RenderHarness};
//!
//! let actions: Vec<_> = dropdown
//!     .handle_event(&EventKind::Key(key("space")), props)
//!     .into_iter()
//!     .collect();
//! assert_emitted!(actions, AppAction::StatusSelect(_));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::event::EventKind;
use crate::selection::SelectionValue;

/// Parse strings like `"j"`, `"enter"`, `"ctrl+x"` or `"shift+tab"` into a key event
///
/// Modifier and named-key parts are case-insensitive; a single character keeps
/// its case so `"G"` and `"g"` stay distinct.
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return None;
    }

    // A lone "+" is a key, not a separator
    let (modifier_parts, key_part) = match key_str.rsplit_once('+') {
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, key_str),
    };

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts.into_iter().flat_map(|m| m.split('+')) {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers |= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return None,
            }
        }
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` from a key string
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// `EventKind::Key` from a key string
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Left click at a cell
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Click { column, row }
}

/// Mouse wheel at a cell, `delta` rows down (negative for up)
pub fn scroll(column: u16, row: u16, delta: isize) -> EventKind {
    EventKind::Scroll { column, row, delta }
}

/// Collects every value handed to an `on_select` callback, in order
#[derive(Debug, Clone)]
pub struct SelectionRecorder<V> {
    seen: Vec<SelectionValue<V>>,
}

impl<V> Default for SelectionRecorder<V> {
    fn default() -> Self {
        Self { seen: Vec::new() }
    }
}

impl<V: Clone> SelectionRecorder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback to pass as `on_select`
    pub fn record(&mut self) -> impl FnMut(SelectionValue<V>) + '_ {
        move |value| self.seen.push(value)
    }

    pub fn push(&mut self, value: SelectionValue<V>) {
        self.seen.push(value);
    }

    pub fn seen(&self) -> &[SelectionValue<V>] {
        &self.seen
    }

    pub fn last(&self) -> Option<&SelectionValue<V>> {
        self.seen.last()
    }

    pub fn count(&self) -> usize {
        self.seen.len()
    }

    pub fn take(&mut self) -> Vec<SelectionValue<V>> {
        std::mem::take(&mut self.seen)
    }
}

/// Renders components into an in-memory terminal
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test backend cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    ///
    /// # Panics
    ///
    /// Panics if drawing fails.
    pub fn render<F>(&mut self, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("Failed to draw frame: {e}"));
        self.terminal.backend().buffer().clone()
    }

    /// Draw one frame and return its text, one line per row, styles dropped
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(&self.render(draw))
    }
}

/// Plain text of a buffer, trailing spaces trimmed per row
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Assert that an action matching a pattern was emitted
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions matching a pattern
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_key_simple() {
        let k = key("q");
        assert_eq!(k.code, KeyCode::Char('q'));
        assert_eq!(k.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_key_keeps_char_case() {
        assert_eq!(key("G").code, KeyCode::Char('G'));
        assert_eq!(key("g").code, KeyCode::Char('g'));
    }

    #[test]
    fn test_key_with_ctrl() {
        let k = key("Ctrl+x");
        assert_eq!(k.code, KeyCode::Char('x'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_key_special() {
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("space").code, KeyCode::Char(' '));
        assert_eq!(key("shift+tab").code, KeyCode::BackTab);
        assert_eq!(key("+").code, KeyCode::Char('+'));
    }

    #[test]
    fn test_invalid_key() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("notakey").is_none());
    }

    #[test]
    fn test_recorder() {
        let mut recorder = SelectionRecorder::<u8>::new();
        {
            let mut on_select = recorder.record();
            on_select(SelectionValue::Single(1));
            on_select(SelectionValue::None);
        }
        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.last(), Some(&SelectionValue::None));
        assert_eq!(recorder.take().len(), 2);
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_render_harness() {
        let mut harness = RenderHarness::new(20, 2);
        let output = harness.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("Status"), frame.area());
        });
        assert_eq!(output, "Status\n\n");
    }

    #[derive(Debug, PartialEq)]
    enum TestAction {
        Select(u8),
        Close,
    }

    #[test]
    fn test_assert_macros() {
        let actions = vec![TestAction::Select(1), TestAction::Select(2)];

        assert_emitted!(actions, TestAction::Select(1));
        assert_emitted!(actions, TestAction::Select(n) if *n == 2);
        assert_not_emitted!(actions, TestAction::Close);
        assert_eq!(count_emitted!(actions, TestAction::Select(_)), 2);
    }
}
