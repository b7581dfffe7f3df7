//! Event polling, dispatching, and UI rendering loop.
//!
//! The loop owns the [`App`] outright. Terminal input and finished queries
//! arrive over channels, are turned into [`AppAction`]s, and are applied
//! between frames; commands returned by the actions spawn the outbound calls.

use std::{
    error::Error,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::Size;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::app::actions::{AppActionContext, AppActionDispatcher, AppActionEnvelope};
use crate::core::app::{apply_actions, App, AppAction, AppCommand};
use crate::core::config::settings::ServiceSettings;
use crate::core::query_service::{QueryOutcome, QueryService};
use crate::ui::renderer::ui;
use crate::ui::theme::Theme;

use super::keybindings::map_key_event;
use super::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn context_for(term_size: Size) -> AppActionContext {
    AppActionContext {
        term_width: term_size.width,
        term_height: term_size.height,
    }
}

fn try_draw_frame(
    app: &mut App,
    terminal: &mut ChatTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> std::io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    terminal.draw(|f| ui(f, app))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

/// Drains pending terminal events into actions. Returns whether any arrived.
fn process_ui_events(
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
    term_size: Size,
) -> bool {
    let mut events_processed = false;

    while let Ok(ev) = event_rx.try_recv() {
        events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                dispatcher.dispatch_many([map_key_event(&key)], context_for(term_size));
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                handle_paste_event(dispatcher, term_size, text);
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    events_processed
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

pub(crate) fn handle_paste_event(dispatcher: &AppActionDispatcher, term_size: Size, text: String) {
    let sanitized_text = sanitize_pasted_text(&text);
    if sanitized_text.is_empty() {
        return;
    }

    dispatcher.dispatch_many(
        [AppAction::InsertIntoInput {
            text: sanitized_text,
        }],
        context_for(term_size),
    );
}

fn process_query_outcomes(
    dispatcher: &AppActionDispatcher,
    rx: &mut mpsc::UnboundedReceiver<(QueryOutcome, u64)>,
    term_size: Size,
) -> bool {
    let mut actions = Vec::new();
    while let Ok((outcome, cycle_id)) = rx.try_recv() {
        actions.push(AppAction::QueryResolved { outcome, cycle_id });
    }

    if actions.is_empty() {
        return false;
    }

    dispatcher.dispatch_many(actions, context_for(term_size));
    true
}

fn drain_action_queue(
    app: &mut App,
    query_service: &QueryService,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }

    if pending.is_empty() {
        return false;
    }

    let commands = apply_actions(app, pending);
    for cmd in commands {
        match cmd {
            AppCommand::SpawnQuery(params) => {
                debug!(cycle_id = params.cycle_id, "spawning query");
                query_service.spawn_query(params);
            }
        }
    }
    true
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(settings: ServiceSettings) -> Result<(), Box<dyn Error>> {
    info!(base_url = %settings.base_url, "starting chat");
    let mut app = App::new(settings, Theme::dark_default())?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let action_dispatcher = AppActionDispatcher::new(action_tx);
    let (query_service, mut outcome_rx) = QueryService::new();

    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    const MAX_FPS: u64 = 60;
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;
    let mut last_indicator_frame = Instant::now() - frame_duration;

    let result: Result<(), Box<dyn Error>> = 'main_loop: loop {
        if app.ui.exit_requested {
            break 'main_loop Ok(());
        }

        if let Err(err) = try_draw_frame(
            &mut app,
            &mut terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        ) {
            break 'main_loop Err(err.into());
        }

        let term_size = terminal.size().unwrap_or_default();
        if term_size != app.ui.last_term_size {
            app.ui.last_term_size = term_size;
            request_redraw = true;
        }

        let events_processed = process_ui_events(&mut event_rx, &action_dispatcher, term_size);
        let received_any = process_query_outcomes(&action_dispatcher, &mut outcome_rx, term_size);
        let actions_applied = drain_action_queue(&mut app, &query_service, &mut action_rx);

        if events_processed || received_any || actions_applied {
            request_redraw = true;
        }

        if app.session.is_pending() {
            let now = Instant::now();
            if now.duration_since(last_indicator_frame) >= frame_duration {
                request_redraw = true;
                last_indicator_frame = now;
            }
        }

        let idle = !events_processed && !received_any && !request_redraw;

        if idle {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    info!("chat closed");

    result
}
