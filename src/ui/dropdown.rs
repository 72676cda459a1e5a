//! Suggestion dropdown overlays.
//!
//! Drawn last so they float over whatever sits below the form row. Each
//! overlay's rect is recorded back into [`AppState`] for mouse hit-testing;
//! a closed or empty dropdown clears its rect so stale geometry can never
//! swallow a click.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::state::{AppState, FieldKind};

/// What: Render both suggestion overlays beneath their fields.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; dropdown rects are written back.
///
/// Output: None.
pub fn render_dropdowns(f: &mut Frame, app: &mut AppState) {
    app.location_dropdown_rect = render_one(f, app, FieldKind::Location, app.location_field_rect);
    app.search_dropdown_rect = render_one(f, app, FieldKind::Search, app.search_field_rect);
}

/// Render one field's overlay anchored under its field rect; returns the
/// drawn rect, or `None` when nothing is visible.
fn render_one(
    f: &mut Frame,
    app: &AppState,
    kind: FieldKind,
    anchor: Option<(u16, u16, u16, u16)>,
) -> Option<(u16, u16, u16, u16)> {
    let field = app.field(kind);
    if !field.dropdown_open || field.suggestions.is_empty() {
        return None;
    }
    let (ax, ay, aw, ah) = anchor?;
    let frame_area = f.area();
    let top = ay.saturating_add(ah);
    if top >= frame_area.height {
        return None;
    }
    let avail = usize::from(frame_area.height - top);
    let rows = field.suggestions.len().min(avail);
    if rows == 0 {
        return None;
    }
    let rect = Rect {
        x: ax,
        y: top,
        width: aw.min(frame_area.width.saturating_sub(ax)),
        height: u16::try_from(rows).unwrap_or(u16::MAX),
    };

    f.render_widget(Clear, rect);
    let lines: Vec<Line> = field
        .suggestions
        .iter()
        .take(rows)
        .enumerate()
        .map(|(i, s)| row_line(kind, s, field.highlight == Some(i)))
        .collect();
    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Black)),
        rect,
    );
    Some((rect.x, rect.y, rect.width, rect.height))
}

/// One suggestion row; search rows carry a dim category tag.
fn row_line(kind: FieldKind, label: &str, highlighted: bool) -> Line<'static> {
    let base = if highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut spans = vec![Span::styled(format!(" {label}"), base)];
    if kind == FieldKind::Search {
        spans.push(Span::styled(
            "  Specialty",
            base.fg(if highlighted {
                Color::Black
            } else {
                Color::DarkGray
            }),
        ));
    }
    Line::from(spans)
}
