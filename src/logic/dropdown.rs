//! Pure dropdown state-machine transitions.
//!
//! Each field's dropdown is `Closed`, `Open-NoHighlight`, or
//! `Open-Highlighted(index)`; the event layer is a thin shell that applies
//! the transition helpers here to a [`FieldState`].

use crate::state::FieldState;

/// Explicit dropdown phase, derived from a [`FieldState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPhase {
    /// Dropdown hidden; suggestions retained but not shown.
    Closed,
    /// Dropdown visible, no row highlighted.
    OpenNoHighlight,
    /// Dropdown visible with the given row highlighted.
    OpenHighlighted(usize),
}

/// Current phase of a field's dropdown.
#[must_use]
pub const fn phase(field: &FieldState) -> DropdownPhase {
    if !field.dropdown_open {
        return DropdownPhase::Closed;
    }
    match field.highlight {
        Some(i) => DropdownPhase::OpenHighlighted(i),
        None => DropdownPhase::OpenNoHighlight,
    }
}

/// What: Move the highlight one row down, wrapping from last to first.
///
/// Inputs:
/// - `highlight`: Current highlight, `None` when no row is highlighted.
/// - `len`: Number of visible suggestions.
///
/// Output:
/// - New highlight; `None` stays `None` only for an empty list.
///
/// Details:
/// - From `Open-NoHighlight` the first ArrowDown lands on index 0.
#[must_use]
pub const fn step_down(highlight: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match highlight {
        None => Some(0),
        Some(i) if i + 1 < len => Some(i + 1),
        Some(_) => Some(0),
    }
}

/// What: Move the highlight one row up, wrapping from first to last.
///
/// Inputs:
/// - `highlight`: Current highlight, `None` when no row is highlighted.
/// - `len`: Number of visible suggestions.
///
/// Output:
/// - New highlight; from `Open-NoHighlight` ArrowUp lands on the last row.
#[must_use]
pub const fn step_up(highlight: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match highlight {
        None | Some(0) => Some(len - 1),
        Some(i) => Some(i - 1),
    }
}

/// Open the dropdown without touching suggestions or highlight.
pub const fn open(field: &mut FieldState) {
    field.dropdown_open = true;
}

/// What: Close the dropdown, retaining suggestions and input.
///
/// Inputs:
/// - `field`: Field whose dropdown closes.
///
/// Output: None (mutates in place).
///
/// Details:
/// - Escape and outside interaction both land here; the raw query is
///   untouched so reopening shows the same list.
pub const fn close(field: &mut FieldState) {
    field.dropdown_open = false;
    field.highlight = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;

    #[test]
    /// What: Wrap-around stepping in both directions
    ///
    /// - Input: Three visible rows, all starting highlights
    /// - Output: Down from last wraps to 0; up from 0 wraps to last
    fn dropdown_wraps_both_directions() {
        assert_eq!(step_down(None, 3), Some(0));
        assert_eq!(step_down(Some(0), 3), Some(1));
        assert_eq!(step_down(Some(2), 3), Some(0));
        assert_eq!(step_up(None, 3), Some(2));
        assert_eq!(step_up(Some(0), 3), Some(2));
        assert_eq!(step_up(Some(2), 3), Some(1));
    }

    #[test]
    /// What: Stepping an empty list never produces a highlight
    ///
    /// - Input: Zero rows
    /// - Output: `None` for both directions
    fn dropdown_empty_list_stays_unhighlighted() {
        assert_eq!(step_down(None, 0), None);
        assert_eq!(step_up(None, 0), None);
    }

    #[test]
    /// What: Highlight stays in bounds under arbitrary arrow sequences
    ///
    /// - Input: Alternating and repeated up/down steps over 5 rows
    /// - Output: Highlight is always `None` or `< 5`
    fn dropdown_highlight_bounds_property() {
        let len = 5;
        let mut h = None;
        for i in 0..100 {
            h = if i % 3 == 0 { step_up(h, len) } else { step_down(h, len) };
            assert!(h.is_none_or(|v| v < len));
        }
    }

    #[test]
    /// What: Phase derivation and close semantics
    ///
    /// - Input: Field moved through open, highlighted, closed
    /// - Output: Phases match; close clears highlight but keeps suggestions
    fn dropdown_phase_and_close() {
        let mut f = FieldState::new(FieldKind::Location);
        f.suggestions = vec!["Pune".into(), "Mumbai".into()];
        assert_eq!(phase(&f), DropdownPhase::Closed);
        open(&mut f);
        assert_eq!(phase(&f), DropdownPhase::OpenNoHighlight);
        f.highlight = step_down(f.highlight, f.suggestions.len());
        assert_eq!(phase(&f), DropdownPhase::OpenHighlighted(0));
        close(&mut f);
        assert_eq!(phase(&f), DropdownPhase::Closed);
        assert_eq!(f.suggestions.len(), 2);
        assert_eq!(f.highlight, None);
    }
}
