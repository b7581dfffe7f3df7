//! Key event mapping for the chat screen.
//!
//! Navigation and control keys become dedicated actions; everything else is
//! handed to the draft editor untouched.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input as TAInput, Key as TAKey};

use crate::core::app::AppAction;

pub fn map_key_event(key: &KeyEvent) -> AppAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('c') if ctrl => AppAction::Quit,
        KeyCode::Char('s') if ctrl => AppAction::SubmitQuestion,
        KeyCode::Enter if alt || shift => AppAction::InsertNewline,
        KeyCode::Enter => AppAction::SubmitQuestion,

        // Plain arrows scroll the conversation; Shift moves the draft cursor.
        KeyCode::Up if shift => plain_editor_key(TAKey::Up),
        KeyCode::Down if shift => plain_editor_key(TAKey::Down),
        KeyCode::Up => AppAction::ScrollAnswer { lines: -1 },
        KeyCode::Down => AppAction::ScrollAnswer { lines: 1 },
        KeyCode::PageUp => AppAction::ScrollPageUp,
        KeyCode::PageDown => AppAction::ScrollPageDown,
        KeyCode::Home if ctrl => AppAction::ScrollToTop,
        KeyCode::End if ctrl => AppAction::ScrollToBottom,

        _ => AppAction::EditInput {
            input: TAInput::from(*key),
        },
    }
}

fn plain_editor_key(key: TAKey) -> AppAction {
    AppAction::EditInput {
        input: TAInput {
            key,
            ..TAInput::default()
        },
    }
}
