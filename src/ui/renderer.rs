use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::core::app::App;
use crate::core::session::{DisplayState, SessionSnapshot};
use crate::core::text_wrapping::wrap_text;
use crate::ui::theme::Theme;

pub const TITLE: &str = "AI Warehouse Assistant";
pub const SUBTITLE: &str = "Ask in plain language about products, stock, item codes and more.";
pub const LANDING_HEADING: &str = "Start with a question";
pub const LANDING_EXAMPLES: &str = "E.g. \u{201c}Find all hydraulic filters for Caterpillar\u{201d} or \u{201c}What is the stock on 3/8 hoses?\u{201d}";
pub const LOADING_TEXT: &str = "Writing answer...";
pub const EMPTY_ANSWER_TEXT: &str = "(empty answer)";
pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending...";

const AVATAR: &str = " A ";
const AVATAR_GAP: &str = " ";
const INPUT_TITLE: &str = "Ask (Enter to send, Alt+Enter for new line, Ctrl+C to quit)";
const MAX_INPUT_ROWS: u16 = 5;
const BUTTON_WIDTH: u16 = 14;

/// Suggestion cards shown on the landing screen: title and example prompt.
pub const SUGGESTION_CARDS: [(&str, &str); 3] = [
    (
        "\u{1f50e} Product search",
        "\u{201c}Show me every item code with \u{2018}seal kit\u{2019} in the name.\u{201d}",
    ),
    (
        "\u{1f4e6} Stock & warehouse",
        "\u{201c}What do we have available in 1/2 flexible hoses?\u{201d}",
    ),
    (
        "\u{1f9e0} Descriptions",
        "\u{201c}Write an e-shop description for this product.\u{201d}",
    ),
];

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if app.ui.theme.background_color != ratatui::style::Color::Reset {
        f.render_widget(
            Block::default().style(Style::default().bg(app.ui.theme.background_color)),
            area,
        );
    }

    let input_rows = (app.input.textarea().lines().len() as u16).clamp(1, MAX_INPUT_ROWS);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(input_rows + 2), // +2 for borders
        ])
        .split(area);

    render_header(f, &app.ui.theme, chunks[0]);
    render_conversation(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, theme: &Theme, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(AVATAR, theme.avatar_style),
            Span::raw(AVATAR_GAP),
            Span::styled(TITLE, theme.title_style),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(AVATAR.len() + AVATAR_GAP.len())),
            Span::styled(SUBTITLE, theme.subtitle_style),
        ]),
    ];
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.card_border_style),
    );
    f.render_widget(header, area);
}

fn render_conversation(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let lines = build_conversation_lines(
        app.session.snapshot(),
        &app.ui.theme,
        inner.width as usize,
        app.ui.pulse_start.elapsed(),
    );

    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.ui
        .set_max_scroll_offset(total.saturating_sub(inner.height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.ui.scroll_offset, 0));
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    let can_submit = app.can_submit();
    let pending = app.session.is_pending();
    let theme = app.ui.theme.clone();

    let textarea = app.input.textarea_mut();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style)
            .title(Span::styled(INPUT_TITLE, theme.input_title_style)),
    );
    textarea.set_style(theme.input_text_style);
    textarea.set_cursor_style(theme.input_cursor_style);
    textarea.set_cursor_line_style(theme.input_cursor_line_style);
    textarea.set_placeholder_style(theme.input_placeholder_style);
    f.render_widget(&*textarea, chunks[0]);

    let label = if pending { SENDING_LABEL } else { SEND_LABEL };
    let style = if can_submit {
        theme.button_enabled_style
    } else {
        theme.button_disabled_style
    };
    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, chunks[1]);
}

/// Rows for the conversation pane at `width` columns, already wrapped.
pub fn build_conversation_lines(
    snapshot: SessionSnapshot<'_>,
    theme: &Theme,
    width: usize,
    pulse_elapsed: Duration,
) -> Vec<Line<'static>> {
    match snapshot.display {
        DisplayState::InitialEmpty => landing_lines(theme, width),
        display => {
            let mut lines = user_bubble_lines(snapshot.last_question, theme, width);
            lines.push(Line::default());
            lines.extend(assistant_lines(display, theme, width, pulse_elapsed));
            lines
        }
    }
}

fn landing_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(LANDING_HEADING, theme.landing_heading_style))
            .alignment(Alignment::Center),
    ];
    for row in wrap_text(LANDING_EXAMPLES, width) {
        lines.push(
            Line::from(Span::styled(row, theme.dim_text_style)).alignment(Alignment::Center),
        );
    }

    for (title, example) in SUGGESTION_CARDS {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(title, theme.card_title_style)));
        for row in wrap_text(example, width.saturating_sub(2)) {
            lines.push(Line::from(vec![
                Span::styled("\u{2502} ", theme.card_border_style),
                Span::styled(row, theme.dim_text_style),
            ]));
        }
    }
    lines
}

fn user_bubble_lines(question: &str, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let bubble_width = (width * 3 / 4).max(1).saturating_sub(2);
    wrap_text(question, bubble_width)
        .into_iter()
        .map(|row| {
            Line::from(Span::styled(format!(" {row} "), theme.user_bubble_style))
                .alignment(Alignment::Right)
        })
        .collect()
}

fn assistant_lines(
    display: DisplayState<'_>,
    theme: &Theme,
    width: usize,
    pulse_elapsed: Duration,
) -> Vec<Line<'static>> {
    let indent = AVATAR.len() + AVATAR_GAP.len();
    let text_width = width.saturating_sub(indent);

    let body: Vec<Span<'static>> = match display {
        DisplayState::Pending => {
            return vec![Line::from(vec![
                Span::styled(AVATAR, theme.avatar_style),
                Span::raw(AVATAR_GAP),
                Span::styled(
                    format!("{} ", activity_symbol(pulse_elapsed)),
                    theme.streaming_indicator_style,
                ),
                Span::styled(LOADING_TEXT, theme.dim_text_style),
            ])];
        }
        DisplayState::Failed(error) => wrap_text(&format!("Error: {error}"), text_width)
            .into_iter()
            .map(|row| Span::styled(row, theme.error_text_style))
            .collect(),
        DisplayState::Success("") => vec![Span::styled(EMPTY_ANSWER_TEXT, theme.dim_text_style)],
        DisplayState::Success(answer) => wrap_text(answer, text_width)
            .into_iter()
            .map(|row| Span::styled(row, theme.assistant_text_style))
            .collect(),
        DisplayState::InitialEmpty => Vec::new(),
    };

    body.into_iter()
        .enumerate()
        .map(|(idx, span)| {
            if idx == 0 {
                Line::from(vec![
                    Span::styled(AVATAR, theme.avatar_style),
                    Span::raw(AVATAR_GAP),
                    span,
                ])
            } else {
                Line::from(vec![Span::raw(" ".repeat(indent)), span])
            }
        })
        .collect()
}

/// Pulsing indicator frame for the time elapsed since submission.
pub fn activity_symbol(elapsed: Duration) -> &'static str {
    let elapsed = elapsed.as_millis() as f32 / 1000.0;
    let pulse_phase = (elapsed * 2.0) % 2.0; // 2 cycles per second
    let pulse_intensity = if pulse_phase < 1.0 {
        pulse_phase
    } else {
        2.0 - pulse_phase
    };

    if pulse_intensity < 0.33 {
        "○"
    } else if pulse_intensity < 0.66 {
        "◐"
    } else {
        "●"
    }
}
