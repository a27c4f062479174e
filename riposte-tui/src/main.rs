//! Riposte TUI entry point.

use riposte_tui::api_client::ApiClient;
use riposte_tui::clipboard;
use riposte_tui::config::TuiConfig;
use riposte_tui::error::TuiError;
use riposte_tui::events::TuiEvent;
use riposte_tui::keys::{map_key, map_search_key, Action, SearchAction};
use riposte_tui::nav::View;
use riposte_tui::notifications::NotificationLevel;
use riposte_tui::state::{App, InputMode, Modal};
use riposte_tui::views::{render_view, HELP_TEXT};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let _log_guard = init_logging(&config)?;
    info!(base_url = %config.api_base_url, "starting riposte tui");

    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());

    // Seed the catalog before the first fetch; a failed seed is logged and
    // the fetches proceed against whatever the service already holds.
    if let Err(err) = app.api.initialize_data().await {
        warn!(error = %err, "data initialization failed");
    }
    request_objections(&mut app, &event_tx);
    request_quotes(&app, &event_tx);

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                expire_notifications(&mut app);
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &TuiConfig) -> Result<tracing_appender::non_blocking::WorkerGuard, TuiError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

/// Start a new objection fetch for the current filter. The spawned task
/// reports back tagged with its generation; the controller discards results
/// whose generation has been superseded by a later call.
fn request_objections(app: &mut App, sender: &mpsc::Sender<TuiEvent>) {
    let seq = app.objection_view.begin_fetch();
    let term = app.objection_view.search_term.trim().to_string();
    let search = if term.is_empty() { None } else { Some(term) };
    let favorites_only = app.objection_view.favorites_only;
    let api = app.api.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
        match api.list_objections(search.as_deref(), favorites_only).await {
            Ok(objections) => {
                let _ = sender
                    .send(TuiEvent::ObjectionsLoaded { seq, objections })
                    .await;
            }
            Err(err) => {
                let _ = sender
                    .send(TuiEvent::ObjectionsFailed {
                        seq,
                        message: err.to_string(),
                    })
                    .await;
            }
        }
    });
}

fn request_quotes(app: &App, sender: &mpsc::Sender<TuiEvent>) {
    let api = app.api.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
        match api.list_quotes().await {
            Ok(quotes) => {
                let _ = sender.send(TuiEvent::QuotesLoaded(quotes)).await;
            }
            Err(err) => {
                let _ = sender.send(TuiEvent::QuotesFailed(err.to_string())).await;
            }
        }
    });
}

fn expire_notifications(app: &mut App) {
    let cutoff = chrono::Utc::now() - chrono::Duration::seconds(5);
    app.notifications.retain(|n| n.created_at > cutoff);
}

async fn handle_event(
    app: &mut App,
    event: TuiEvent,
    sender: &mpsc::Sender<TuiEvent>,
) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => match app.input_mode {
            InputMode::Search => {
                if let Some(action) = map_search_key(key) {
                    handle_search_action(app, action, sender);
                }
            }
            InputMode::Browse => {
                if let Some(action) = map_key(key) {
                    return Ok(handle_action(app, action, sender));
                }
            }
        },
        TuiEvent::ObjectionsLoaded { seq, objections } => {
            let count = objections.len();
            if app.objection_view.apply_fetch(seq, objections) {
                debug!(seq, count, "objections loaded");
            } else {
                debug!(seq, "discarded stale objection fetch");
            }
        }
        TuiEvent::ObjectionsFailed { seq, message } => {
            if app.objection_view.fail_fetch(seq) {
                warn!(seq, %message, "objection fetch failed");
                app.notify(
                    NotificationLevel::Error,
                    format!("Fetch failed: {}", message),
                );
            } else {
                debug!(seq, "discarded stale objection fetch failure");
            }
        }
        TuiEvent::QuotesLoaded(quotes) => {
            app.quote_view.set_quotes(quotes);
        }
        TuiEvent::QuotesFailed(message) => {
            warn!(%message, "quote fetch failed");
            app.notify(NotificationLevel::Error, format!("Quotes failed: {}", message));
        }
        TuiEvent::ApiError(message) => {
            app.notify(NotificationLevel::Error, message);
        }
        TuiEvent::Resize { .. } => {}
    }
    Ok(false)
}

fn handle_action(app: &mut App, action: Action, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextView => app.active_view = app.active_view.next(),
        Action::PrevView => app.active_view = app.active_view.previous(),
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::NextResponse => {
            if app.active_view == View::Objections {
                app.objection_view.next_response();
            }
        }
        Action::PrevResponse => {
            if app.active_view == View::Objections {
                app.objection_view.prev_response();
            }
        }
        Action::ToggleFavorite => toggle_favorite(app, sender),
        Action::ToggleFavoritesOnly => {
            app.objection_view.favorites_only = !app.objection_view.favorites_only;
            request_objections(app, sender);
        }
        Action::CopyResponse => copy_response(app, sender),
        Action::LoadMore => {
            if !app.objection_view.load_more() {
                app.notify(NotificationLevel::Info, "Nothing more to load");
            }
        }
        Action::OpenSearch => {
            app.active_view = View::Objections;
            app.input_mode = InputMode::Search;
        }
        Action::Refresh => {
            request_objections(app, sender);
            request_quotes(app, sender);
        }
        Action::OpenHelp => {
            app.modal = Some(Modal {
                title: "Keybindings".to_string(),
                message: HELP_TEXT.to_string(),
            });
        }
        Action::Cancel => {
            app.modal = None;
        }
    }
    false
}

fn handle_search_action(app: &mut App, action: SearchAction, sender: &mpsc::Sender<TuiEvent>) {
    match action {
        SearchAction::Insert(c) => {
            let mut term = app.objection_view.search_term.clone();
            term.push(c);
            app.objection_view.set_search_term(term);
            request_objections(app, sender);
        }
        SearchAction::Backspace => {
            let mut term = app.objection_view.search_term.clone();
            term.pop();
            app.objection_view.set_search_term(term);
            request_objections(app, sender);
        }
        SearchAction::SuggestionDown => app.objection_view.suggestion_down(),
        SearchAction::SuggestionUp => app.objection_view.suggestion_up(),
        SearchAction::Accept => {
            if app.objection_view.take_suggestion() {
                request_objections(app, sender);
            }
            app.input_mode = InputMode::Browse;
        }
        SearchAction::Close => {
            app.objection_view.clear_suggestions();
            app.input_mode = InputMode::Browse;
        }
    }
}

/// Optimistic toggle: the local flag flips immediately, then the server is
/// told. A failed call surfaces as a notification; the local flip stands
/// until the next fetch re-reads server truth.
fn toggle_favorite(app: &mut App, sender: &mpsc::Sender<TuiEvent>) {
    let Some(id) = app.objection_view.selected else {
        return;
    };
    let Some(now_favorite) = app.objection_view.toggle_favorite_local(id) else {
        return;
    };
    app.notify(
        NotificationLevel::Success,
        if now_favorite { "Starred" } else { "Unstarred" },
    );

    let api = app.api.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
        if let Err(err) = api.toggle_favorite(id).await {
            warn!(%id, error = %err, "favorite toggle failed");
            let _ = sender
                .send(TuiEvent::ApiError(format!("Favorite sync failed: {}", err)))
                .await;
        }
    });
}

/// Copy the highlighted rebuttal and report usage. The usage increment is
/// fire-and-forget: failures are logged, never surfaced.
fn copy_response(app: &mut App, _sender: &mpsc::Sender<TuiEvent>) {
    let Some(objection) = app.objection_view.selected_objection() else {
        return;
    };
    let id = objection.id;
    let Some(response) = app.objection_view.selected_response() else {
        app.notify(NotificationLevel::Warning, "No rebuttal to copy");
        return;
    };
    let text = response.text.clone();

    match clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.notify(NotificationLevel::Success, "Rebuttal copied"),
        Err(err) => {
            app.notify(NotificationLevel::Error, format!("Copy failed: {}", err));
            return;
        }
    }

    let api = app.api.clone();
    tokio::spawn(async move {
        if let Err(err) = api.increment_usage(id).await {
            warn!(%id, error = %err, "usage increment failed");
        }
    });
}
