//! The dual-field search form row: location input, search input, button.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};

/// Placeholder for the empty location input.
const LOCATION_PLACEHOLDER: &str = "Select location";

/// Placeholder for the empty search input.
const SEARCH_PLACEHOLDER: &str = "Search doctors, clinics, hospitals, specialties...";

/// What: Render the form row and record its clickable rects.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; field and button rects are written back.
/// - `area`: Row area (three lines tall, bordered fields).
///
/// Output: None.
///
/// Details:
/// - Location takes a third of the row, search the rest minus the button.
/// - The focused field gets the accent border and the terminal cursor at
///   the end of its input.
pub fn render_form(f: &mut Frame, app: &mut AppState, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Min(20),
        Constraint::Length(10),
    ])
    .split(area);

    render_field(
        f,
        app,
        chunks[0],
        Focus::Location,
        LOCATION_PLACEHOLDER,
    );
    render_field(f, app, chunks[1], Focus::Search, SEARCH_PLACEHOLDER);
    render_button(f, app, chunks[2]);
}

/// Render one bordered input with placeholder, chevron, and caret.
fn render_field(f: &mut Frame, app: &mut AppState, area: Rect, which: Focus, placeholder: &str) {
    let focused = app.focus == which;
    let accent = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let field = app.field(which.field());
    let text_width = inner.width.saturating_sub(2); // chevron + gap
    let mut spans: Vec<Span> = Vec::new();
    if field.input.is_empty() {
        spans.push(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(field.input.clone()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Chevron at the right edge of the inner area
    let chevron = Rect {
        x: inner.x + inner.width.saturating_sub(1),
        y: inner.y,
        width: 1.min(inner.width),
        height: 1.min(inner.height),
    };
    f.render_widget(
        Paragraph::new(Span::styled("▾", Style::default().fg(Color::DarkGray))),
        chevron,
    );

    if focused {
        let caret_x = inner.x
            + u16::try_from(UnicodeWidthStr::width(field.input.as_str()))
                .unwrap_or(u16::MAX)
                .min(text_width);
        f.set_cursor_position(Position::new(caret_x, inner.y));
    }

    let rect = Some((area.x, area.y, area.width, area.height));
    match which {
        Focus::Location => app.location_field_rect = rect,
        Focus::Search => app.search_field_rect = rect,
    }
}

/// Render the Search submit button and record its rect.
fn render_button(f: &mut Frame, app: &mut AppState, area: Rect) {
    let label = Paragraph::new(Line::from(Span::styled(
        " Search ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    let row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    };
    f.render_widget(label, row);
    app.search_button_rect = Some((row.x, row.y, row.width, row.height));
}
