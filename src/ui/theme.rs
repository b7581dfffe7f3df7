use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Header
    pub title_style: Style,
    pub subtitle_style: Style,
    pub avatar_style: Style,

    // Conversation
    pub user_bubble_style: Style,
    pub assistant_text_style: Style,
    pub error_text_style: Style,
    pub dim_text_style: Style,
    pub streaming_indicator_style: Style,

    // Landing placeholder
    pub landing_heading_style: Style,
    pub card_border_style: Style,
    pub card_title_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_cursor_style: Style,
    pub input_cursor_line_style: Style,
    pub input_placeholder_style: Style,

    // Send button
    pub button_enabled_style: Style,
    pub button_disabled_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Reset,

            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::Gray),
            avatar_style: Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(27))
                .add_modifier(Modifier::BOLD),

            user_bubble_style: Style::default().fg(Color::White).bg(Color::Indexed(27)),
            assistant_text_style: Style::default().fg(Color::White),
            error_text_style: Style::default().fg(Color::LightRed),
            dim_text_style: Style::default().fg(Color::DarkGray),
            streaming_indicator_style: Style::default().fg(Color::LightBlue),

            landing_heading_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_border_style: Style::default().fg(Color::DarkGray),
            card_title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            input_cursor_line_style: Style::default(),
            input_placeholder_style: Style::default().fg(Color::DarkGray),

            button_enabled_style: Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(27))
                .add_modifier(Modifier::BOLD),
            button_disabled_style: Style::default().fg(Color::Gray).bg(Color::DarkGray),
        }
    }
}
