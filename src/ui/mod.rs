//! Terminal rendering.
//!
//! One stateless-looking pass per frame: every clickable region (fields,
//! button, popular shortcuts, dropdown rows) is re-recorded into
//! [`AppState`] as it is drawn, so the mouse layer always hit-tests
//! against the geometry actually on screen.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

pub mod dropdown;
pub mod form;

/// Widest the centered content column gets on large terminals.
const CONTENT_MAX_WIDTH: u16 = 90;

/// What: Draw the full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Mutable application state; clickable rects are refreshed.
///
/// Output: None.
///
/// Details:
/// - Layout top to bottom: hero copy, form row, popular shortcuts,
///   status line. Dropdown overlays render last so they float above
///   the rows beneath the form.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    app.popular_rects.clear();
    app.others_rect = None;
    app.search_button_rect = None;

    let content = centered_column(f.area());
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(content);

    render_hero(f, rows[1]);
    form::render_form(f, app, rows[3]);
    render_popular(f, app, rows[5]);
    render_status(f, app, rows[6]);
    dropdown::render_dropdowns(f, app);
}

/// Center the content column horizontally, capped at a readable width.
fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(CONTENT_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// The two-line hero copy above the form.
fn render_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Your home for health",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Find and Book",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    f.render_widget(Paragraph::new(lines).centered(), area);
}

/// What: Render the popular-search shortcut row and record each label's rect.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; `popular_rects` and `others_rect` are
///   written back.
/// - `area`: Single-line area for the row.
///
/// Output: None.
///
/// Details:
/// - Labels that would overflow the row are skipped along with their
///   rects, so a narrow terminal simply shows fewer shortcuts.
pub fn render_popular(f: &mut Frame, app: &mut AppState, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mut spans: Vec<Span> = Vec::new();
    let prefix = "Popular searches: ";
    spans.push(Span::styled(prefix, Style::default().fg(Color::DarkGray)));
    let mut x = area.x + width_u16(prefix);

    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    for label in app.popular_searches() {
        let w = width_u16(&label);
        if x + w + 2 >= area.x + area.width {
            break;
        }
        spans.push(Span::styled(label.clone(), label_style));
        spans.push(Span::raw("  "));
        app.popular_rects.push(((x, area.y, w, 1), label));
        x += w + 2;
    }

    let others = "Others";
    let ow = width_u16(others);
    if x + ow < area.x + area.width {
        spans.push(Span::styled(others, label_style));
        app.others_rect = Some((x, area.y, ow, 1));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Status line: corpus loading notice, the last navigated route, or a
/// key hint.
fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if app.loading_suggestions {
        Line::from(Span::styled(
            "Loading suggestions…",
            Style::default().fg(Color::DarkGray),
        ))
    } else if let Some(route) = &app.last_route {
        Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::Green)),
            Span::styled(route.clone(), Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(Span::styled(
            "Tab switches fields · Enter submits · Ctrl+C quits",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(Paragraph::new(line).centered(), area);
}

/// Display width of a label, saturated into `u16`.
fn width_u16(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    /// What: A full draw records every clickable region
    ///
    /// - Input: Loaded corpora with five specialties on an 80x24 frame
    /// - Output: Field, button, four popular, and Others rects all set
    fn ui_draw_records_clickable_rects() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).expect("test terminal");
        let mut app = AppState::default();
        app.specialties = Arc::new(vec![
            "Dentist".to_string(),
            "Dermatologist".to_string(),
            "Cardiologist".to_string(),
            "Gynecologist".to_string(),
            "Orthopedist".to_string(),
        ]);
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        assert!(app.location_field_rect.is_some());
        assert!(app.search_field_rect.is_some());
        assert!(app.search_button_rect.is_some());
        assert_eq!(app.popular_rects.len(), 4);
        assert_eq!(app.popular_rects[0].1, "Dentist");
        assert!(app.others_rect.is_some());
    }

    #[test]
    /// What: Popular rects do not overlap and sit on one row
    ///
    /// - Input: Standard draw with loaded specialties
    /// - Output: Strictly increasing, non-overlapping x ranges; shared y
    fn ui_popular_rects_disjoint() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).expect("test terminal");
        let mut app = AppState::default();
        app.specialties = Arc::new(vec![
            "Dentist".to_string(),
            "Dermatologist".to_string(),
            "Cardiologist".to_string(),
            "Gynecologist".to_string(),
        ]);
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        let mut last_end = 0;
        let y = app.popular_rects[0].0.1;
        for ((x, ry, w, _), _) in &app.popular_rects {
            assert!(*x >= last_end);
            assert_eq!(*ry, y);
            last_end = x + w;
        }
        if let Some((ox, oy, _, _)) = app.others_rect {
            assert!(ox >= last_end);
            assert_eq!(oy, y);
        }
    }
}
