use std::time::Instant;

use ratatui::prelude::Size;

use crate::ui::theme::Theme;

/// Presentation state that does not belong to the query lifecycle.
pub struct UiState {
    pub theme: Theme,
    /// Vertical offset of the conversation pane, in wrapped rows.
    pub scroll_offset: u16,
    /// Largest offset the last rendered frame allowed.
    pub max_scroll_offset: u16,
    /// Start of the current pending cycle; drives the activity indicator.
    pub pulse_start: Instant,
    pub last_term_size: Size,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scroll_offset: 0,
            max_scroll_offset: 0,
            pulse_start: Instant::now(),
            last_term_size: Size::default(),
            exit_requested: false,
        }
    }

    pub fn scroll_by(&mut self, lines: i32) {
        let target = i32::from(self.scroll_offset).saturating_add(lines);
        let clamped = target.clamp(0, i32::from(self.max_scroll_offset));
        self.scroll_offset = u16::try_from(clamped).unwrap_or(self.max_scroll_offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll_offset;
    }

    /// Called by the renderer once it knows how many rows the conversation
    /// needs at the current size.
    pub fn set_max_scroll_offset(&mut self, max: u16) {
        self.max_scroll_offset = max;
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn restart_pulse(&mut self) {
        self.pulse_start = Instant::now();
    }

    /// Rows the conversation pane can scroll through per page.
    pub fn page_rows(&self) -> i32 {
        let rows = self.last_term_size.height.saturating_sub(8).max(1);
        i32::from(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_max(max: u16) -> UiState {
        let mut state = UiState::new(Theme::dark_default());
        state.set_max_scroll_offset(max);
        state
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut state = state_with_max(5);
        state.scroll_by(3);
        assert_eq!(state.scroll_offset, 3);
        state.scroll_by(10);
        assert_eq!(state.scroll_offset, 5);
        state.scroll_by(-20);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut state = state_with_max(10);
        state.scroll_to_bottom();
        assert_eq!(state.scroll_offset, 10);
        state.set_max_scroll_offset(4);
        assert_eq!(state.scroll_offset, 4);
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn page_rows_never_zero() {
        let mut state = state_with_max(0);
        state.last_term_size = Size::new(80, 4);
        assert_eq!(state.page_rows(), 1);
        state.last_term_size = Size::new(80, 30);
        assert_eq!(state.page_rows(), 22);
    }
}
