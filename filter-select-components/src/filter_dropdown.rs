//! Filter dropdown/card: renders options and reports selection changes

use std::marker::PhantomData;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use filter_select_core::{
    normalize, Component, ContainerKind, EventKind, FilterConfig, FilterOption, OpenState,
    OptionCatalog, SelectMode, SelectionController, SelectionEvent, SelectionValue, TriggerProps,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::popup::{popup_below, render_popup_background, PopupStyle};

const DEFAULT_SUMMARY: &str = "All";

/// Props for FilterDropdown
pub struct FilterDropdownProps<'a, V, A> {
    /// Label for the trigger and the card header
    pub title: &'a str,
    /// Choices, in display order
    pub options: &'a [FilterOption<V>],
    /// Current selection, owned by the host
    pub value: &'a SelectionValue<V>,
    /// Which wrapper to draw
    pub container: ContainerKind,
    /// Pass-through trigger properties
    pub trigger: &'a TriggerProps,
    /// Whether keyboard events are for this filter
    pub is_focused: bool,
    /// Builds the host action for a new selection value
    pub on_select: fn(SelectionValue<V>) -> A,
}

/// A single- or multi-select filter
///
/// Closed, it renders one trigger line summarizing the selection. Open, it
/// lists the options with a movable highlight:
/// - `enter`/`space`/`down` open the list
/// - `j`/`k`/`up`/`down`, `g`/`G`/`home`/`end` move the highlight
/// - `space`/`enter` toggle (multi) or choose (single) the highlighted option
/// - `esc`/`tab` close
/// - `backspace`/`delete`/`ctrl+x` clear
///
/// Left clicks on the trigger toggle the list, clicks on a row act on that
/// row, and clicks anywhere else close it. The mouse wheel over an open list
/// moves the highlight.
pub struct FilterDropdown<V> {
    controller: SelectionController,
    highlight: usize,
    scroll_offset: usize,
    /// Areas from the last render, for hit-testing clicks
    trigger_area: Rect,
    list_area: Rect,
    popup_style: PopupStyle,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Default for FilterDropdown<V> {
    fn default() -> Self {
        Self::new(SelectMode::Single)
    }
}

impl<V> FilterDropdown<V> {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            controller: SelectionController::new(mode),
            highlight: 0,
            scroll_offset: 0,
            trigger_area: Rect::default(),
            list_area: Rect::default(),
            popup_style: PopupStyle::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_popup_style(mut self, style: PopupStyle) -> Self {
        self.popup_style = style;
        self
    }

    pub fn mode(&self) -> SelectMode {
        self.controller.mode()
    }

    pub fn open_state(&self) -> OpenState {
        self.controller.open_state()
    }

    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    /// Close request from the host, e.g. when focus moves elsewhere
    pub fn close(&mut self) -> bool {
        self.controller.request_close()
    }

    fn move_highlight(&mut self, delta: isize, len: usize) {
        self.highlight = self
            .highlight
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
    }

    fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.highlight < self.scroll_offset {
            self.scroll_offset = self.highlight;
        } else if self.highlight >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.highlight.saturating_sub(viewport_height - 1);
        }
    }
}

impl<V: Clone + PartialEq> FilterDropdown<V> {
    pub fn from_config(config: &FilterConfig<V>) -> Self {
        Self {
            controller: SelectionController::from_config(config),
            ..Self::default()
        }
    }

    fn toggle_open(&mut self, catalog: &OptionCatalog<'_, V>, value: &SelectionValue<V>) {
        self.controller.toggle_open();
        if self.controller.is_open() {
            // Start on the most recent selection, or the top
            self.highlight = value
                .as_slice()
                .first()
                .and_then(|v| catalog.position(v))
                .unwrap_or(0);
        }
    }

    /// Selection event for the option at `index`
    fn activate(
        &mut self,
        index: usize,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
    ) -> Option<SelectionEvent<V>> {
        let option = catalog.get(index)?;
        let mode = self.controller.mode();

        match mode {
            SelectMode::Multi => {
                let on = !normalize(mode, value).contains(&option.value);
                Some(SelectionEvent::Toggle {
                    value: option.value.clone(),
                    on,
                })
            }
            SelectMode::Single => {
                if !option.is_disabled {
                    self.controller.request_close();
                }
                Some(SelectionEvent::Choose(option.value.clone()))
            }
        }
    }

    fn key_to_event(
        &mut self,
        key: &KeyEvent,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
    ) -> Option<SelectionEvent<V>> {
        let is_clear = matches!(key.code, KeyCode::Backspace | KeyCode::Delete)
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('x'));
        if is_clear {
            return Some(SelectionEvent::Clear);
        }

        if !self.controller.is_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
                self.toggle_open(catalog, value);
            }
            return None;
        }

        let last = catalog.len().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.highlight = (self.highlight + 1).min(last);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.highlight = self.highlight.saturating_sub(1);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.highlight = 0;
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.highlight = last;
                None
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.controller.request_close();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.highlight, catalog, value),
            _ => None,
        }
    }

    fn click_to_event(
        &mut self,
        column: u16,
        row: u16,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
    ) -> Option<SelectionEvent<V>> {
        if contains(self.trigger_area, column, row) {
            self.toggle_open(catalog, value);
            return None;
        }

        if !self.controller.is_open() {
            return None;
        }

        if contains(self.list_area, column, row) {
            let index = self.scroll_offset + usize::from(row - self.list_area.y);
            if index < catalog.len() {
                self.highlight = index;
                return self.activate(index, catalog, value);
            }
            return None;
        }

        self.controller.request_close();
        None
    }

    /// Turn a terminal event into at most one new selection value
    fn interact(
        &mut self,
        event: &EventKind,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
        is_focused: bool,
    ) -> Option<SelectionValue<V>> {
        let selection_event = match event {
            EventKind::Key(key) if is_focused => self.key_to_event(key, catalog, value)?,
            EventKind::Click { column, row } => {
                self.click_to_event(*column, *row, catalog, value)?
            }
            EventKind::Scroll { column, row, delta } => {
                if self.controller.is_open() && contains(self.list_area, *column, *row) {
                    self.move_highlight(*delta, catalog.len());
                }
                return None;
            }
            _ => return None,
        };

        self.controller.handle(catalog, value, &selection_event)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Text shown on the trigger for the current selection
///
/// Labels joined by `", "`; `"N selected"` when that would be wider than
/// `max_width`; the placeholder (or `"All"`) when nothing is selected.
pub fn summarize<V: PartialEq>(
    catalog: &OptionCatalog<'_, V>,
    value: &SelectionValue<V>,
    placeholder: Option<&str>,
    max_width: usize,
) -> String {
    let labels = value.labels(catalog);
    if labels.is_empty() {
        return placeholder.unwrap_or(DEFAULT_SUMMARY).to_string();
    }

    let joined = labels.join(", ");
    if labels.len() > 1 && joined.chars().count() > max_width {
        format!("{} selected", labels.len())
    } else {
        joined
    }
}

fn marker(mode: SelectMode, selected: bool) -> &'static str {
    match (mode, selected) {
        (SelectMode::Multi, true) => "[x] ",
        (SelectMode::Multi, false) => "[ ] ",
        (SelectMode::Single, true) => "(•) ",
        (SelectMode::Single, false) => "( ) ",
    }
}

impl<V: Clone + PartialEq> FilterDropdown<V> {
    fn trigger_line(
        &self,
        prefix: Option<&str>,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
        placeholder: Option<&str>,
        width: u16,
        is_focused: bool,
    ) -> Line<'static> {
        let arrow = if self.controller.is_open() { " ▴" } else { " ▾" };
        let prefix = prefix.map(|p| format!("{p}: ")).unwrap_or_default();
        let budget = usize::from(width)
            .saturating_sub(prefix.chars().count())
            .saturating_sub(arrow.chars().count());
        let summary = summarize(catalog, value, placeholder, budget);

        let label_style = if is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let summary_style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(prefix, label_style),
            Span::styled(summary, summary_style),
            Span::styled(arrow, label_style),
        ])
    }

    fn option_items(
        &self,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
    ) -> Vec<ListItem<'static>> {
        let mode = self.controller.mode();
        let value = normalize(mode, value);

        catalog
            .options()
            .iter()
            .map(|option| {
                let text = format!(
                    "{}{}",
                    marker(mode, value.contains(&option.value)),
                    option.label
                );
                let style = if option.is_disabled {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM)
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(text)).style(style)
            })
            .collect()
    }

    fn render_list(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        block: Option<Block<'static>>,
        catalog: &OptionCatalog<'_, V>,
        value: &SelectionValue<V>,
    ) {
        self.list_area = block.as_ref().map_or(area, |b| b.inner(area));
        self.highlight = self.highlight.min(catalog.len().saturating_sub(1));
        self.ensure_visible(usize::from(self.list_area.height));

        let mut list = List::new(self.option_items(catalog, value)).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        if let Some(block) = block {
            list = list.block(block);
        }

        let selected = (!catalog.is_empty()).then_some(self.highlight);
        let mut state = ListState::default().with_selected(selected);
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl<A, V: Clone + PartialEq + 'static> Component<A> for FilterDropdown<V> {
    type Props<'a> = FilterDropdownProps<'a, V, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let catalog = OptionCatalog::new(props.options);
        self.interact(event, &catalog, props.value, props.is_focused)
            .map(props.on_select)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let catalog = OptionCatalog::new(props.options);
        let placeholder = props.trigger.placeholder();

        match props.container {
            ContainerKind::Default => {
                self.trigger_area = Rect::new(area.x, area.y, area.width, area.height.min(1));
                let line = self.trigger_line(
                    Some(props.title).filter(|t| !t.is_empty()),
                    &catalog,
                    props.value,
                    placeholder,
                    area.width,
                    props.is_focused,
                );
                frame.render_widget(Paragraph::new(line), self.trigger_area);

                if !self.controller.is_open() {
                    self.list_area = Rect::default();
                    return;
                }

                let popup = popup_below(self.trigger_area, catalog.len(), frame.area());
                render_popup_background(frame, popup, &self.popup_style);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.popup_style.border_color));
                self.render_list(frame, popup, Some(block), &catalog, props.value);
            }
            ContainerKind::Card => {
                let border_color = if props.is_focused {
                    Color::Cyan
                } else {
                    Color::DarkGray
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!(" {} ", props.title));
                let inner = block.inner(area);
                frame.render_widget(block, area);

                self.trigger_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
                let line = self.trigger_line(
                    None,
                    &catalog,
                    props.value,
                    placeholder,
                    inner.width,
                    props.is_focused,
                );
                frame.render_widget(Paragraph::new(line), self.trigger_area);

                if !self.controller.is_open() || inner.height < 2 {
                    self.list_area = Rect::default();
                    return;
                }

                let list_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);
                self.render_list(frame, list_area, None, &catalog, props.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_select_core::testing::{click, key_event, scroll, RenderHarness, SelectionRecorder};
    use filter_select_core::{assert_emitted, assert_not_emitted};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Select(SelectionValue<&'static str>),
    }

    fn make_options() -> Vec<FilterOption<&'static str>> {
        vec![
            FilterOption::new("Open", "open"),
            FilterOption::new("Closed", "closed"),
            FilterOption::new("Merged", "merged"),
            FilterOption::new("Draft", "draft").disabled(true),
        ]
    }

    fn props<'a>(
        options: &'a [FilterOption<&'static str>],
        value: &'a SelectionValue<&'static str>,
        trigger: &'a TriggerProps,
    ) -> FilterDropdownProps<'a, &'static str, TestAction> {
        FilterDropdownProps {
            title: "Status",
            options,
            value,
            container: ContainerKind::Default,
            trigger,
            is_focused: true,
            on_select: TestAction::Select,
        }
    }

    fn send(
        dropdown: &mut FilterDropdown<&'static str>,
        event: EventKind,
        options: &[FilterOption<&'static str>],
        value: &SelectionValue<&'static str>,
    ) -> Vec<TestAction> {
        let trigger = TriggerProps::default();
        dropdown
            .handle_event(&event, props(options, value, &trigger))
            .into_iter()
            .collect()
    }

    /// Feed each emitted value back in, the way a host store would
    fn drive(
        dropdown: &mut FilterDropdown<&'static str>,
        keys: &[&str],
        options: &[FilterOption<&'static str>],
        recorder: &mut SelectionRecorder<&'static str>,
    ) -> SelectionValue<&'static str> {
        let mut value = SelectionValue::None;
        for k in keys {
            for TestAction::Select(next) in send(dropdown, key_event(k), options, &value) {
                recorder.push(next.clone());
                value = next;
            }
        }
        value
    }

    #[test]
    fn test_opens_on_enter() {
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();

        let actions = send(&mut dropdown, key_event("enter"), &options, &SelectionValue::None);

        assert!(actions.is_empty());
        assert_eq!(dropdown.open_state(), OpenState::Open);
    }

    #[test]
    fn test_single_choose_replaces_and_closes() {
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();
        let mut recorder = SelectionRecorder::new();

        // open, move to "Closed", choose, reopen, move to "Merged", choose
        let value = drive(
            &mut dropdown,
            &["enter", "j", "enter", "enter", "j", "space"],
            &options,
            &mut recorder,
        );

        assert_eq!(value, SelectionValue::Single("merged"));
        assert_eq!(
            recorder.seen(),
            &[SelectionValue::Single("closed"), SelectionValue::Single("merged")]
        );
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_multi_toggle_keeps_open() {
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();
        let mut recorder = SelectionRecorder::new();

        // open, toggle Open, down, toggle Closed, up, toggle Open off
        let value = drive(
            &mut dropdown,
            &["space", "space", "j", "space", "k", "space"],
            &options,
            &mut recorder,
        );

        assert_eq!(value, SelectionValue::Multi(vec!["closed"]));
        assert_eq!(recorder.count(), 3);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_disabled_option_emits_nothing() {
        for mode in [SelectMode::Single, SelectMode::Multi] {
            let mut dropdown = FilterDropdown::new(mode);
            let options = make_options();
            let mut recorder = SelectionRecorder::new();

            let value = drive(&mut dropdown, &["enter", "G", "space"], &options, &mut recorder);

            assert_eq!(recorder.count(), 0, "{mode:?}");
            assert_eq!(value, SelectionValue::None);
        }
    }

    #[test]
    fn test_clear_emits_none() {
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();
        let value = SelectionValue::Multi(vec!["open", "merged"]);

        let actions = send(&mut dropdown, key_event("ctrl+x"), &options, &value);

        assert_eq!(actions, vec![TestAction::Select(SelectionValue::None)]);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();
        let trigger = TriggerProps::default();
        let value = SelectionValue::Single("open");
        let mut p = props(&options, &value, &trigger);
        p.is_focused = false;

        let actions: Vec<_> = dropdown
            .handle_event(&key_event("backspace"), p)
            .into_iter()
            .collect();

        assert_not_emitted!(actions, TestAction::Select(_));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();

        send(&mut dropdown, key_event("enter"), &options, &SelectionValue::None);
        assert!(dropdown.is_open());
        send(&mut dropdown, key_event("esc"), &options, &SelectionValue::None);
        assert!(!dropdown.is_open());
        // Close request while closed stays closed
        send(&mut dropdown, key_event("esc"), &options, &SelectionValue::None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_host_close_request() {
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();

        assert!(!dropdown.close());
        send(&mut dropdown, key_event("down"), &options, &SelectionValue::None);
        assert!(dropdown.close());
        assert_eq!(dropdown.open_state(), OpenState::Closed);
    }

    #[test]
    fn test_highlight_starts_on_selection() {
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();

        send(
            &mut dropdown,
            key_event("enter"),
            &options,
            &SelectionValue::Single("merged"),
        );

        assert_eq!(dropdown.highlight(), 2);
    }

    fn render_dropdown(
        dropdown: &mut FilterDropdown<&'static str>,
        harness: &mut RenderHarness,
        options: &[FilterOption<&'static str>],
        value: &SelectionValue<&'static str>,
        container: ContainerKind,
    ) -> String {
        let trigger = TriggerProps::default();
        harness.render_to_string_plain(|frame| {
            let mut p = props(options, value, &trigger);
            p.container = container;
            dropdown.render(frame, frame.area(), p);
        })
    }

    #[test]
    fn test_render_closed_trigger() {
        let mut harness = RenderHarness::new(40, 8);
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();
        let value = SelectionValue::Multi(vec!["merged", "open"]);

        let output = render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Default,
        );

        assert!(output.starts_with("Status: Merged, Open ▾"));
        assert!(!output.contains("[x]"));
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let mut harness = RenderHarness::new(40, 3);
        let mut dropdown = FilterDropdown::<&'static str>::new(SelectMode::Single);
        let options = make_options();
        let trigger = TriggerProps::new().with("placeholder", "Any status");

        let output = harness.render_to_string_plain(|frame| {
            let value = SelectionValue::None;
            let p = props(&options, &value, &trigger);
            dropdown.render(frame, frame.area(), p);
        });

        assert!(output.contains("Status: Any status"));
    }

    #[test]
    fn test_render_open_popup_markers() {
        let mut harness = RenderHarness::new(40, 8);
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();
        let value = SelectionValue::Multi(vec!["closed"]);

        send(&mut dropdown, key_event("enter"), &options, &value);
        let output = render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Default,
        );

        assert!(output.contains("Status: Closed ▴"));
        assert!(output.contains("[ ] Open"));
        assert!(output.contains("[x] Closed"));
        assert!(output.contains("[ ] Draft"));
    }

    #[test]
    fn test_render_card() {
        let mut harness = RenderHarness::new(30, 8);
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();
        let value = SelectionValue::Single("open");

        send(&mut dropdown, key_event("enter"), &options, &value);
        let output = render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Card,
        );

        assert!(output.contains(" Status "));
        assert!(output.contains("Open ▴"));
        assert!(output.contains("(•) Open"));
        assert!(output.contains("( ) Merged"));
    }

    #[test]
    fn test_click_row_and_outside() {
        let mut harness = RenderHarness::new(40, 10);
        let mut dropdown = FilterDropdown::new(SelectMode::Multi);
        let options = make_options();
        let value = SelectionValue::None;

        // Hit areas come from the last render
        render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Default,
        );
        send(&mut dropdown, click(3, 0), &options, &value);
        assert!(dropdown.is_open());
        render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Default,
        );

        // Popup border is row 1, first option row 2, second row 3
        let actions = send(&mut dropdown, click(5, 3), &options, &value);
        assert_emitted!(actions, TestAction::Select(SelectionValue::Multi(v)) if v == &vec!["closed"]);

        // Click outside closes without a notification
        let actions = send(&mut dropdown, click(39, 9), &options, &value);
        assert!(actions.is_empty());
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_wheel_moves_highlight_over_open_list() {
        let mut harness = RenderHarness::new(40, 10);
        let mut dropdown = FilterDropdown::new(SelectMode::Single);
        let options = make_options();
        let value = SelectionValue::None;

        // Closed: nothing to scroll
        send(&mut dropdown, scroll(5, 3, 1), &options, &value);
        assert_eq!(dropdown.highlight(), 0);

        send(&mut dropdown, key_event("enter"), &options, &value);
        render_dropdown(
            &mut dropdown,
            &mut harness,
            &options,
            &value,
            ContainerKind::Default,
        );

        let actions = send(&mut dropdown, scroll(5, 3, 1), &options, &value);
        assert!(actions.is_empty());
        send(&mut dropdown, scroll(5, 3, 1), &options, &value);
        assert_eq!(dropdown.highlight(), 2);

        // Clamped at both ends
        send(&mut dropdown, scroll(5, 3, 10), &options, &value);
        assert_eq!(dropdown.highlight(), 3);
        send(&mut dropdown, scroll(5, 3, -10), &options, &value);
        assert_eq!(dropdown.highlight(), 0);

        // Outside the list is ignored and does not close it
        send(&mut dropdown, scroll(39, 9, 1), &options, &value);
        assert_eq!(dropdown.highlight(), 0);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_summarize_collapses_when_long() {
        let options = make_options();
        let catalog = OptionCatalog::new(&options);
        let value = SelectionValue::Multi(vec!["open", "closed", "merged"]);

        assert_eq!(
            summarize(&catalog, &value, None, 80),
            "Open, Closed, Merged"
        );
        assert_eq!(summarize(&catalog, &value, None, 10), "3 selected");
        assert_eq!(
            summarize(&catalog, &SelectionValue::None, None, 10),
            "All"
        );
    }
}
