use super::{App, AppAction, AppCommand};

pub(super) fn handle_query_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitQuestion => submit_question(app),
        AppAction::QueryResolved { outcome, cycle_id } => {
            app.session.resolve(cycle_id, outcome);
            None
        }
        _ => unreachable!("non-query action routed to query handler"),
    }
}

/// Starts a cycle from the current draft. Exactly one command comes back for
/// every accepted submission and none otherwise.
fn submit_question(app: &mut App) -> Option<AppCommand> {
    let submission = app.input.submit(&mut app.session)?;
    app.ui.scroll_to_top();
    app.ui.restart_pulse();
    Some(AppCommand::SpawnQuery(app.service.query_params(submission)))
}
