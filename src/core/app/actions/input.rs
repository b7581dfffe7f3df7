use super::{App, AppAction, AppCommand};

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::InsertIntoInput { text } => {
            if !text.is_empty() {
                app.input.insert_text(&text);
            }
            None
        }
        AppAction::InsertNewline => {
            app.input.insert_newline();
            None
        }
        AppAction::EditInput { input } => {
            app.input.apply_input(input);
            None
        }
        AppAction::ScrollAnswer { lines } => {
            app.ui.scroll_by(lines);
            None
        }
        AppAction::ScrollPageUp => {
            let rows = app.ui.page_rows();
            app.ui.scroll_by(-rows);
            None
        }
        AppAction::ScrollPageDown => {
            let rows = app.ui.page_rows();
            app.ui.scroll_by(rows);
            None
        }
        AppAction::ScrollToTop => {
            app.ui.scroll_to_top();
            None
        }
        AppAction::ScrollToBottom => {
            app.ui.scroll_to_bottom();
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
        _ => unreachable!("non-input action routed to input handler"),
    }
}
