use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::{Exercise, Set};

/// Weight without a trailing `.0` for whole numbers (`100`, `102.5`).
pub(crate) fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        format!("{weight}")
    }
}

/// `Set 3: 100 lbs x 12 reps`, numbered from one.
pub(crate) fn set_line(index: usize, set: &Set) -> String {
    format!(
        "Set {}: {} lbs x {} reps",
        index + 1,
        format_weight(set.weight),
        set.reps
    )
}

/// One-line summary used in the exercise list of a program.
pub(crate) fn exercise_line(exercise: &Exercise, suggested: f64) -> String {
    let sets = match exercise.sets.len() {
        1 => "1 set".to_string(),
        n => format!("{n} sets"),
    };
    format!(
        "{}  |  reps {}-{}  |  {}  |  next {} lbs",
        exercise.name,
        exercise.rep_min,
        exercise.rep_max,
        sets,
        format_weight(suggested)
    )
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Terminal cursor for the end of `value` on `row` of a form, written after
/// `prefix`. Long values pin the cursor to the last column of `inner`.
pub(crate) fn form_cursor(inner: Rect, prefix: &str, value: &str, row: usize) -> (u16, u16) {
    let offset = prefix.chars().count().saturating_add(value.chars().count());
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let last_col = inner.right().saturating_sub(1).max(inner.x);
    let x = inner.x.saturating_add(offset).min(last_col);
    let row = u16::try_from(row).unwrap_or(u16::MAX);
    let last_row = inner.bottom().saturating_sub(1).max(inner.y);
    let y = inner.y.saturating_add(row).min(last_row);
    (x, y)
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn whole_weights_drop_the_decimal() {
        assert_eq!(format_weight(100.0), "100");
        assert_eq!(format_weight(102.5), "102.5");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn set_lines_are_numbered_from_one() {
        let set = Set {
            id: "s1".to_string(),
            weight: 135.0,
            reps: 8,
        };
        assert_eq!(set_line(0, &set), "Set 1: 135 lbs x 8 reps");
    }

    #[test]
    fn form_cursor_follows_the_typed_value() {
        let inner = Rect::new(10, 5, 40, 6);
        assert_eq!(form_cursor(inner, "Name: ", "Push", 0), (20, 5));
        assert_eq!(form_cursor(inner, "Reps: ", "", 1), (16, 6));
    }

    #[test]
    fn form_cursor_stays_inside_for_long_names() {
        let inner = Rect::new(10, 5, 40, 6);
        let long_name = "x".repeat(100_000);
        assert_eq!(form_cursor(inner, "Name: ", &long_name, 0), (49, 5));
        assert_eq!(form_cursor(inner, "Name: ", "", 99), (16, 10));

        let corner = Rect::new(u16::MAX - 4, 0, 4, 1);
        assert_eq!(form_cursor(corner, "Name: ", "abc", 0), (u16::MAX - 1, 0));
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(anyhow!("Exercise not found: e1"))
            .context("failed to save")
            .unwrap_err();
        assert_eq!(surface_error(&err), "Exercise not found: e1");
    }
}
