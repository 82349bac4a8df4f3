//! Domain models for programs, exercises and logged sets. The same structs are
//! the on-disk JSON shape and the snapshots handed to the front-end, so field
//! names here are part of the data file format.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weight added to the last set once its reps reach the top of the rep range.
pub const OVERLOAD_INCREMENT: f64 = 5.0;

/// Fresh opaque identifier for a program, exercise or set.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// One logged performance of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// Stable across edits; never reassigned.
    pub id: String,
    pub weight: f64,
    pub reps: i64,
}

impl Set {
    pub(crate) fn new(weight: f64, reps: i64) -> Self {
        Self {
            id: new_id(),
            weight,
            reps,
        }
    }
}

/// A named movement with a target rep range and its chronological set log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Bottom of the target range. Not required to be below `rep_max`.
    pub rep_min: i64,
    /// Reaching this many reps on the last set triggers the weight increase.
    pub rep_max: i64,
    /// Oldest first; the last element is the most recent set.
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl Exercise {
    pub(crate) fn new(name: &str, rep_min: i64, rep_max: i64) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            rep_min,
            rep_max,
            sets: Vec::new(),
        }
    }

    /// Most recently appended set, regardless of weight or reps.
    pub fn last_set(&self) -> Option<&Set> {
        self.sets.last()
    }

    /// Weight recommended for the next set.
    ///
    /// Looks only at the last logged set: hitting `rep_max` adds
    /// [`OVERLOAD_INCREMENT`], anything less repeats the same weight, and an
    /// empty log suggests `0.0`.
    pub fn suggested_weight(&self) -> f64 {
        match self.last_set() {
            None => 0.0,
            Some(last) if last.reps >= self.rep_max => last.weight + OVERLOAD_INCREMENT,
            Some(last) => last.weight,
        }
    }

    pub(crate) fn set_mut(&mut self, set_id: &str) -> Option<&mut Set> {
        self.sets.iter_mut().find(|set| set.id == set_id)
    }

    pub(crate) fn set_position(&self, set_id: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.id == set_id)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{} reps)", self.name, self.rep_min, self.rep_max)
    }
}

/// A workout plan: a name plus its exercises in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Program {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            exercises: Vec::new(),
        }
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == exercise_id)
    }

    pub(crate) fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut Exercise> {
        self.exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
    }

    /// Id and name only, as shown in the program picker.
    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_with_sets(rep_max: i64, sets: &[(f64, i64)]) -> Exercise {
        let mut exercise = Exercise::new("Bench Press", 8, rep_max);
        for &(weight, reps) in sets {
            exercise.sets.push(Set::new(weight, reps));
        }
        exercise
    }

    #[test]
    fn suggestion_is_zero_without_sets() {
        let exercise = exercise_with_sets(12, &[]);
        assert_eq!(exercise.suggested_weight(), 0.0);
    }

    #[test]
    fn suggestion_adds_increment_at_top_of_range() {
        let exercise = exercise_with_sets(12, &[(100.0, 12)]);
        assert_eq!(exercise.suggested_weight(), 105.0);

        let exercise = exercise_with_sets(12, &[(100.0, 15)]);
        assert_eq!(exercise.suggested_weight(), 105.0);
    }

    #[test]
    fn suggestion_repeats_weight_below_top_of_range() {
        let exercise = exercise_with_sets(12, &[(100.0, 11)]);
        assert_eq!(exercise.suggested_weight(), 100.0);
    }

    #[test]
    fn suggestion_uses_most_recent_set_not_heaviest() {
        let exercise = exercise_with_sets(12, &[(140.0, 12), (90.0, 6)]);
        assert_eq!(exercise.suggested_weight(), 90.0);
    }

    #[test]
    fn missing_nested_arrays_deserialize_as_empty() {
        let program: Program =
            serde_json::from_str(r#"{"id": "p1", "name": "Upper A"}"#).unwrap();
        assert!(program.exercises.is_empty());

        let exercise: Exercise = serde_json::from_str(
            r#"{"id": "e1", "name": "Row", "rep_min": 6, "rep_max": 10}"#,
        )
        .unwrap();
        assert!(exercise.sets.is_empty());
    }

    #[test]
    fn integer_weights_from_existing_files_are_accepted() {
        let set: Set = serde_json::from_str(r#"{"id": "s1", "weight": 100, "reps": 8}"#).unwrap();
        assert_eq!(set.weight, 100.0);
        assert_eq!(set.reps, 8);
    }

    #[test]
    fn generated_ids_are_unique() {
        let first = Program::new("A");
        let second = Program::new("A");
        assert_ne!(first.id, second.id);
    }
}
