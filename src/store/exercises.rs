use log::debug;

use super::WorkoutStore;
use crate::error::{Entity, Result, StoreError};
use crate::models::Exercise;

impl WorkoutStore {
    /// Append an exercise to a program and return its id. The rep range is
    /// stored exactly as given, even when `rep_min > rep_max`.
    pub fn add_exercise(
        &mut self,
        program_id: &str,
        name: &str,
        rep_min: i64,
        rep_max: i64,
    ) -> Result<String> {
        let program = self.program_mut(program_id)?;
        let exercise = Exercise::new(name, rep_min, rep_max);
        let exercise_id = exercise.id.clone();
        program.exercises.push(exercise);
        debug!("added exercise {exercise_id} ({name}) to program {program_id}");
        self.persist();
        Ok(exercise_id)
    }

    pub fn rename_exercise(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        new_name: &str,
    ) -> Result<()> {
        let exercise = self.exercise_mut(program_id, exercise_id)?;
        exercise.name = new_name.to_string();
        debug!("renamed exercise {exercise_id} to {new_name}");
        self.persist();
        Ok(())
    }

    pub fn set_exercise_rep_range(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        rep_min: i64,
        rep_max: i64,
    ) -> Result<()> {
        let exercise = self.exercise_mut(program_id, exercise_id)?;
        exercise.rep_min = rep_min;
        exercise.rep_max = rep_max;
        debug!("exercise {exercise_id} rep range now {rep_min}-{rep_max}");
        self.persist();
        Ok(())
    }

    /// Remove an exercise and its whole set log.
    pub fn remove_exercise(&mut self, program_id: &str, exercise_id: &str) -> Result<()> {
        let program = self.program_mut(program_id)?;
        let idx = program
            .exercises
            .iter()
            .position(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| StoreError::not_found(Entity::Exercise, exercise_id))?;
        program.exercises.remove(idx);
        debug!("removed exercise {exercise_id} from program {program_id}");
        self.persist();
        Ok(())
    }

    /// Snapshots of a program's exercises, sets included, in insertion order.
    pub fn list_exercises(&self, program_id: &str) -> Result<Vec<Exercise>> {
        Ok(self.program_ref(program_id)?.exercises.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Entity;
    use crate::store::test_support::temp_store;

    #[test]
    fn add_exercise_requires_known_program() {
        let (_dir, mut store) = temp_store();
        let err = store.add_exercise("nope", "Bench", 8, 12).unwrap_err();
        assert!(err.is_not_found(Entity::Program));
    }

    #[test]
    fn added_exercises_list_in_order_with_empty_logs() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");
        let bench = store.add_exercise(&program_id, "Bench", 8, 12).unwrap();
        let row = store.add_exercise(&program_id, "Row", 6, 10).unwrap();

        let exercises = store.list_exercises(&program_id).unwrap();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].id, bench);
        assert_eq!(exercises[1].id, row);
        assert_eq!((exercises[1].rep_min, exercises[1].rep_max), (6, 10));
        assert!(exercises.iter().all(|exercise| exercise.sets.is_empty()));
    }

    #[test]
    fn inverted_rep_range_is_stored_as_given() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");
        let exercise_id = store.add_exercise(&program_id, "Curl", 15, 10).unwrap();

        let program = store.get_program(&program_id).unwrap();
        let exercise = program.exercise(&exercise_id).unwrap();
        assert_eq!((exercise.rep_min, exercise.rep_max), (15, 10));

        store
            .set_exercise_rep_range(&program_id, &exercise_id, 20, 5)
            .unwrap();
        let exercises = store.list_exercises(&program_id).unwrap();
        assert_eq!((exercises[0].rep_min, exercises[0].rep_max), (20, 5));
    }

    #[test]
    fn rename_and_rep_range_report_missing_exercise() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");

        assert!(store
            .rename_exercise(&program_id, "nope", "Bench")
            .unwrap_err()
            .is_not_found(Entity::Exercise));
        assert!(store
            .set_exercise_rep_range(&program_id, "nope", 8, 12)
            .unwrap_err()
            .is_not_found(Entity::Exercise));
        assert!(store
            .rename_exercise("nope", "nope", "Bench")
            .unwrap_err()
            .is_not_found(Entity::Program));
    }

    #[test]
    fn rename_changes_only_the_name() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");
        let exercise_id = store.add_exercise(&program_id, "Bench", 8, 12).unwrap();
        store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();

        store
            .rename_exercise(&program_id, &exercise_id, "Incline Bench")
            .unwrap();

        let exercises = store.list_exercises(&program_id).unwrap();
        assert_eq!(exercises[0].name, "Incline Bench");
        assert_eq!(exercises[0].sets.len(), 1);
    }

    #[test]
    fn remove_exercise_cascades_to_sets() {
        let (_dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");
        let bench = store.add_exercise(&program_id, "Bench", 8, 12).unwrap();
        let row = store.add_exercise(&program_id, "Row", 6, 10).unwrap();
        store.add_set(&program_id, &bench, 100.0, 10).unwrap();

        store.remove_exercise(&program_id, &bench).unwrap();

        let exercises = store.list_exercises(&program_id).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].id, row);
        assert!(store
            .list_sets(&program_id, &bench)
            .unwrap_err()
            .is_not_found(Entity::Exercise));
        assert!(store
            .remove_exercise(&program_id, &bench)
            .unwrap_err()
            .is_not_found(Entity::Exercise));
    }

    #[test]
    fn list_exercises_requires_known_program() {
        let (_dir, store) = temp_store();
        assert!(store
            .list_exercises("nope")
            .unwrap_err()
            .is_not_found(Entity::Program));
    }
}
