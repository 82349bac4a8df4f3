use std::ops::RangeInclusive;

use anyhow::{anyhow, Result};
use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Exercise, Set};

use super::helpers::format_weight;

/// Rep counts offered for the bottom and top of a rep range.
pub(crate) const REP_CHOICES: RangeInclusive<i64> = 1..=25;
pub(crate) const DEFAULT_REP_MIN: i64 = 8;
pub(crate) const DEFAULT_REP_MAX: i64 = 12;

/// What a keystroke did to an open form.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormEvent {
    Cancel,
    Submit,
    Edited,
    Unchanged,
}

/// Shared text-entry behavior so every popup form reacts to keys the same way.
pub(crate) trait FormInput {
    /// Append a character to the active field. Returns false when the field
    /// does not accept it.
    fn push_char(&mut self, ch: char) -> bool;
    fn backspace(&mut self);
    fn next_field(&mut self);
    fn set_error(&mut self, error: Option<String>);

    fn clear_error(&mut self) {
        self.set_error(None);
    }
}

pub(crate) fn apply_form_key<F: FormInput>(form: &mut F, code: KeyCode) -> FormEvent {
    match code {
        KeyCode::Esc => FormEvent::Cancel,
        KeyCode::Enter => FormEvent::Submit,
        KeyCode::Tab | KeyCode::BackTab => {
            form.next_field();
            FormEvent::Edited
        }
        KeyCode::Backspace => {
            form.backspace();
            form.clear_error();
            FormEvent::Edited
        }
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.clear_error();
                FormEvent::Edited
            } else {
                FormEvent::Unchanged
            }
        }
        _ => FormEvent::Unchanged,
    }
}

/// Render `Label: value`, highlighting the focused field and dimming blanks.
pub(crate) fn field_line(field_name: &str, value: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        "<required>".to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(display, style),
    ])
}

/// Single-field form used to create or rename programs and rename exercises.
#[derive(Default, Clone)]
pub(crate) struct NameForm {
    pub(crate) name: String,
    pub(crate) error: Option<String>,
}

impl NameForm {
    pub(crate) fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error: None,
        }
    }

    pub(crate) fn parse_name(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Name is required."));
        }
        Ok(name.to_string())
    }
}

impl FormInput for NameForm {
    fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.name.push(ch);
        true
    }

    fn backspace(&mut self) {
        self.name.pop();
    }

    fn next_field(&mut self) {}

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum ExerciseField {
    Name,
    RepMin,
    RepMax,
}

/// Exercise name plus rep range. When editing an existing exercise only the
/// range is shown.
#[derive(Clone)]
pub(crate) struct ExerciseForm {
    pub(crate) name: String,
    pub(crate) rep_min: String,
    pub(crate) rep_max: String,
    pub(crate) active: ExerciseField,
    pub(crate) error: Option<String>,
    pub(crate) with_name: bool,
}

impl ExerciseForm {
    pub(crate) fn new_exercise() -> Self {
        Self {
            name: String::new(),
            rep_min: DEFAULT_REP_MIN.to_string(),
            rep_max: DEFAULT_REP_MAX.to_string(),
            active: ExerciseField::Name,
            error: None,
            with_name: true,
        }
    }

    pub(crate) fn rep_range_of(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            rep_min: exercise.rep_min.to_string(),
            rep_max: exercise.rep_max.to_string(),
            active: ExerciseField::RepMin,
            error: None,
            with_name: false,
        }
    }

    /// Fields in focus order.
    pub(crate) fn fields(&self) -> &'static [ExerciseField] {
        if self.with_name {
            &[ExerciseField::Name, ExerciseField::RepMin, ExerciseField::RepMax]
        } else {
            &[ExerciseField::RepMin, ExerciseField::RepMax]
        }
    }

    pub(crate) fn value(&self, field: ExerciseField) -> &str {
        match field {
            ExerciseField::Name => &self.name,
            ExerciseField::RepMin => &self.rep_min,
            ExerciseField::RepMax => &self.rep_max,
        }
    }

    pub(crate) fn label(field: ExerciseField) -> &'static str {
        match field {
            ExerciseField::Name => "Name",
            ExerciseField::RepMin => "Min reps",
            ExerciseField::RepMax => "Max reps",
        }
    }

    /// Validate and return `(name, rep_min, rep_max)`, swapping an inverted
    /// range so the bottom is always the smaller number.
    pub(crate) fn parse_inputs(&self) -> Result<(String, i64, i64)> {
        let name = self.name.trim();
        if self.with_name && name.is_empty() {
            return Err(anyhow!("Exercise name is required."));
        }
        let mut rep_min = parse_rep(&self.rep_min, "Min reps")?;
        let mut rep_max = parse_rep(&self.rep_max, "Max reps")?;
        if rep_min > rep_max {
            std::mem::swap(&mut rep_min, &mut rep_max);
        }
        Ok((name.to_string(), rep_min, rep_max))
    }
}

fn parse_rep(raw: &str, label: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(anyhow!("{label} is required."));
    }
    let reps = raw
        .parse::<i64>()
        .map_err(|_| anyhow!("{label} must be a whole number."))?;
    if !REP_CHOICES.contains(&reps) {
        return Err(anyhow!(
            "{label} must be between {} and {}.",
            REP_CHOICES.start(),
            REP_CHOICES.end()
        ));
    }
    Ok(reps)
}

impl FormInput for ExerciseForm {
    fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            ExerciseField::Name => {
                if ch.is_control() {
                    return false;
                }
                self.name.push(ch);
                true
            }
            ExerciseField::RepMin | ExerciseField::RepMax => {
                if !ch.is_ascii_digit() {
                    return false;
                }
                let field = if self.active == ExerciseField::RepMin {
                    &mut self.rep_min
                } else {
                    &mut self.rep_max
                };
                if field.len() >= 2 {
                    return false;
                }
                field.push(ch);
                true
            }
        }
    }

    fn backspace(&mut self) {
        match self.active {
            ExerciseField::Name => self.name.pop(),
            ExerciseField::RepMin => self.rep_min.pop(),
            ExerciseField::RepMax => self.rep_max.pop(),
        };
    }

    fn next_field(&mut self) {
        let fields = self.fields();
        let idx = fields
            .iter()
            .position(|field| *field == self.active)
            .unwrap_or(0);
        self.active = fields[(idx + 1) % fields.len()];
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum SetField {
    Weight,
    Reps,
}

/// Weight and reps for logging a new set or correcting an old one.
#[derive(Clone)]
pub(crate) struct SetForm {
    pub(crate) weight: String,
    pub(crate) reps: String,
    pub(crate) active: SetField,
    pub(crate) error: Option<String>,
}

impl SetForm {
    /// New set with the weight pre-filled from the suggestion; focus starts on reps.
    pub(crate) fn with_suggestion(suggested: f64) -> Self {
        Self {
            weight: format_weight(suggested),
            reps: String::new(),
            active: SetField::Reps,
            error: None,
        }
    }

    pub(crate) fn from_set(set: &Set) -> Self {
        Self {
            weight: format_weight(set.weight),
            reps: set.reps.to_string(),
            active: SetField::Weight,
            error: None,
        }
    }

    pub(crate) fn value(&self, field: SetField) -> &str {
        match field {
            SetField::Weight => &self.weight,
            SetField::Reps => &self.reps,
        }
    }

    pub(crate) fn parse_inputs(&self) -> Result<(f64, i64)> {
        let weight_raw = self.weight.trim();
        if weight_raw.is_empty() {
            return Err(anyhow!("Weight is required."));
        }
        let weight = weight_raw
            .parse::<f64>()
            .map_err(|_| anyhow!("Weight must be a number."))?;
        let reps_raw = self.reps.trim();
        if reps_raw.is_empty() {
            return Err(anyhow!("Reps are required."));
        }
        let reps = reps_raw
            .parse::<i64>()
            .map_err(|_| anyhow!("Reps must be a whole number."))?;
        Ok((weight, reps))
    }
}

impl FormInput for SetForm {
    fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            SetField::Weight => {
                let accepted = ch.is_ascii_digit() || (ch == '.' && !self.weight.contains('.'));
                if accepted {
                    self.weight.push(ch);
                }
                accepted
            }
            SetField::Reps => {
                if ch.is_ascii_digit() {
                    self.reps.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn backspace(&mut self) {
        match self.active {
            SetField::Weight => self.weight.pop(),
            SetField::Reps => self.reps.pop(),
        };
    }

    fn next_field(&mut self) {
        self.active = match self.active {
            SetField::Weight => SetField::Reps,
            SetField::Reps => SetField::Weight,
        };
    }

    fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}

/// Record awaiting a yes/no before removal.
#[derive(Clone, Debug)]
pub(crate) enum DeleteTarget {
    Program {
        program_id: String,
    },
    Exercise {
        program_id: String,
        exercise_id: String,
    },
    Set {
        program_id: String,
        exercise_id: String,
        set_id: String,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct ConfirmDelete {
    pub(crate) target: DeleteTarget,
    /// What is being removed, e.g. `program "Upper A"`.
    pub(crate) label: String,
    /// Extra line describing what goes with it.
    pub(crate) detail: &'static str,
}
