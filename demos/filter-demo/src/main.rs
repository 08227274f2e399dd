//! Filter demo - a host app for one filter-select dropdown
//!
//! The host owns the selection value; the dropdown reports changes through
//! `on_select`, the store keeps the new value, and the next event and frame
//! pass it back in as props. Each event's values are stored before the next
//! event is handled.
//!
//! Keys: enter/space open, j/k move, space/enter pick, esc close,
//! backspace clear, q quit. Mouse clicks work too.
//!
//! ```sh
//! cargo run -p filter-demo -- --multi --card
//! cargo run -p filter-demo -- --config status.json
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filter_select::{
    process_raw_event, spawn_event_poller, Component, ContainerKind, EventKind, FilterConfig,
    FilterDropdown, FilterDropdownProps, FilterOption, LoggingMiddleware, PopupStyle, RawEvent,
    SelectionStore, SelectionValue,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter demo - one dropdown bound to a host store
#[derive(Parser, Debug)]
#[command(name = "filter-demo")]
struct Args {
    /// JSON filter config (options, isMulti, value, title, container, trigger)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Multi-select (ignored with --config)
    #[arg(long)]
    multi: bool,

    /// Draw the filter as a card
    #[arg(long)]
    card: bool,

    /// Override the filter title
    #[arg(long, short)]
    title: Option<String>,

    /// Where to write logs
    #[arg(long, default_value = "filter-demo.log")]
    log_file: PathBuf,
}

// ============================================================================
// State
// ============================================================================

struct AppState {
    config: FilterConfig<String>,
    selection: SelectionStore<String, LoggingMiddleware>,
}

impl AppState {
    fn new(config: FilterConfig<String>) -> Self {
        let selection =
            SelectionStore::from_config(&config).with_middleware(LoggingMiddleware::new());
        Self { config, selection }
    }

    fn props(&self) -> FilterDropdownProps<'_, String, AppAction> {
        FilterDropdownProps {
            title: &self.config.title,
            options: &self.config.options,
            value: self.selection.value(),
            container: self.config.container,
            trigger: &self.config.trigger,
            is_focused: true,
            on_select: AppAction::FilterSelect,
        }
    }
}

fn builtin_config(multi: bool) -> FilterConfig<String> {
    let options = [
        ("Open", "open", false),
        ("In review", "review", false),
        ("Merged", "merged", false),
        ("Closed", "closed", false),
        ("Locked", "locked", true),
    ]
    .into_iter()
    .map(|(label, value, disabled)| FilterOption::new(label, value.to_string()).disabled(disabled))
    .collect();

    FilterConfig {
        options,
        is_multi: multi,
        title: "Status".to_string(),
        ..FilterConfig::default()
    }
}

// ============================================================================
// Actions and event handling
// ============================================================================

#[derive(Clone, Debug)]
enum AppAction {
    FilterSelect(SelectionValue<String>),
}

/// What the loop does after one event
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn is_quit(event: &EventKind) -> bool {
    match event {
        EventKind::Key(key) => {
            key.code == KeyCode::Char('q')
                || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        }
        _ => false,
    }
}

/// Handle one terminal event to completion
///
/// Every value the filter reports is stored before this returns, so the next
/// event builds its props from the updated selection.
fn handle_event(
    filter: &mut FilterDropdown<String>,
    state: &mut AppState,
    event: &EventKind,
) -> Flow {
    if is_quit(event) {
        return Flow::Quit;
    }

    // Popup geometry is stale after a resize
    if matches!(event, EventKind::Resize(_, _)) {
        filter.close();
    }

    let actions: Vec<AppAction> = filter
        .handle_event(event, state.props())
        .into_iter()
        .collect();
    for action in actions {
        match action {
            AppAction::FilterSelect(value) => {
                tracing::info!(selection = ?value, "Filter changed");
                state.selection.apply(value);
            }
        }
    }

    Flow::Continue
}

// ============================================================================
// Main
// ============================================================================

fn init_logging(path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("filter_select_core=debug,filter_demo=info")),
        )
        .init();
    Ok(())
}

fn load_state(args: &Args) -> io::Result<AppState> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load(path).map_err(io::Error::other)?,
        None => builtin_config(args.multi),
    };
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if args.card {
        config.container = ContainerKind::Card;
    }

    Ok(AppState::new(config))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    let state = load_state(&args)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut state: AppState,
) -> io::Result<()> {
    let mut filter = FilterDropdown::from_config(&state.config)
        .with_popup_style(PopupStyle::with_bg(Color::Rgb(30, 30, 40)));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _handle = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let filter_height = match state.config.container {
        ContainerKind::Card => u16::try_from(state.config.options.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3),
        ContainerKind::Default => 1,
    };

    loop {
        terminal.draw(|frame| {
            let [filter_area, summary_area, help_area] = Layout::vertical([
                Constraint::Length(filter_height),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            let selection = serde_json::to_string(state.selection.value())
                .unwrap_or_else(|_| "<unserializable>".to_string());
            let summary = Paragraph::new(format!(
                "value: {selection}\nchanges: {}",
                state.selection.revision()
            ))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).title(" Host state "));
            frame.render_widget(summary, summary_area);

            let help = Paragraph::new("enter: open  space: pick  esc: close  bksp: clear  q: quit")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(help, help_area);

            // Last, so the popup draws over the host panel
            filter.render(frame, filter_area, state.props());
        })?;

        let Some(raw_event) = event_rx.recv().await else {
            break;
        };
        if handle_event(&mut filter, &mut state, &process_raw_event(raw_event)) == Flow::Quit {
            break;
        }
    }

    cancel_token.cancel();
    Ok(())
}
