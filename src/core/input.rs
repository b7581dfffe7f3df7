//! Draft editing and submission gating.

use tui_textarea::{CursorMove, Input, TextArea};

use crate::core::session::{QuerySession, Submission};

pub const INPUT_PLACEHOLDER: &str = "Type your question here...";

/// Owns the text the user is composing. Validation happens only at
/// submission time; edits are always accepted, even while a query is
/// pending.
pub struct InputController {
    textarea: TextArea<'static>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        let mut controller = Self {
            textarea: TextArea::default(),
        };
        controller.configure_textarea();
        controller
    }

    fn configure_textarea(&mut self) {
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    }

    pub fn draft(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the whole draft, leaving the cursor at its end.
    pub fn update_draft(&mut self, text: impl AsRef<str>) {
        let lines: Vec<String> = text.as_ref().split('\n').map(str::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
        self.configure_textarea();
    }

    /// Feed a key press to the editor.
    pub fn apply_input(&mut self, input: impl Into<Input>) {
        self.textarea.input(input);
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn insert_text(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.update_draft("");
    }

    pub fn can_submit(&self, session: &QuerySession) -> bool {
        !self.draft().trim().is_empty() && !session.is_pending()
    }

    /// Hand the draft to `session`; the draft is cleared only when the
    /// session accepts it.
    pub fn submit(&mut self, session: &mut QuerySession) -> Option<Submission> {
        let submission = session.submit(&self.draft())?;
        self.clear();
        Some(submission)
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}
