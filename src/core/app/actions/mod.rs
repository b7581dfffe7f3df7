mod input;
mod query;

use tokio::sync::mpsc;

use super::App;
use crate::core::query_service::{QueryOutcome, QueryParams};

pub enum AppAction {
    InsertIntoInput { text: String },
    InsertNewline,
    EditInput { input: tui_textarea::Input },
    SubmitQuestion,
    QueryResolved { outcome: QueryOutcome, cycle_id: u64 },
    ScrollAnswer { lines: i32 },
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

pub enum AppCommand {
    SpawnQuery(QueryParams),
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    if ctx.term_width > 0 && ctx.term_height > 0 {
        app.ui.last_term_size = ratatui::prelude::Size::new(ctx.term_width, ctx.term_height);
    }

    match action {
        AppAction::SubmitQuestion | AppAction::QueryResolved { .. } => {
            query::handle_query_action(app, action)
        }

        AppAction::InsertIntoInput { .. }
        | AppAction::InsertNewline
        | AppAction::EditInput { .. }
        | AppAction::ScrollAnswer { .. }
        | AppAction::ScrollPageUp
        | AppAction::ScrollPageDown
        | AppAction::ScrollToTop
        | AppAction::ScrollToBottom
        | AppAction::Quit => input::handle_input_action(app, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_queues_envelopes_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = AppActionDispatcher::new(tx);
        let ctx = AppActionContext {
            term_width: 80,
            term_height: 24,
        };

        dispatcher.dispatch_many(
            [
                AppAction::InsertIntoInput {
                    text: "seals".into(),
                },
                AppAction::SubmitQuestion,
            ],
            ctx,
        );

        let first = rx.try_recv().expect("first envelope");
        assert!(matches!(first.action, AppAction::InsertIntoInput { .. }));
        assert_eq!(first.context.term_width, 80);
        let second = rx.try_recv().expect("second envelope");
        assert!(matches!(second.action, AppAction::SubmitQuestion));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn apply_actions_collects_one_command_per_accepted_submit() {
        let mut app = App::new_test_app();
        let ctx = AppActionContext {
            term_width: 100,
            term_height: 30,
        };
        let envelopes = [
            AppAction::InsertIntoInput {
                text: "pallet jacks in stock?".into(),
            },
            AppAction::SubmitQuestion,
            AppAction::InsertIntoInput {
                text: "again".into(),
            },
            AppAction::SubmitQuestion,
        ]
        .into_iter()
        .map(|action| AppActionEnvelope {
            action,
            context: ctx,
        });

        let commands = apply_actions(&mut app, envelopes);

        assert_eq!(commands.len(), 1);
        assert_eq!(app.ui.last_term_size, ratatui::prelude::Size::new(100, 30));
        assert_eq!(app.input.draft(), "again");
    }
}
