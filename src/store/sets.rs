use log::debug;

use super::WorkoutStore;
use crate::error::{Entity, Result, StoreError};
use crate::models::Set;

/// Reject values no real set could have.
fn validate_set(weight: f64, reps: i64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 || reps < 0 {
        return Err(StoreError::InvalidArgument(
            "Weight and reps must be non-negative.".to_string(),
        ));
    }
    Ok(())
}

impl WorkoutStore {
    /// Log a set as the most recent entry of an exercise and return its id.
    pub fn add_set(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        weight: f64,
        reps: i64,
    ) -> Result<String> {
        let exercise = self.exercise_mut(program_id, exercise_id)?;
        validate_set(weight, reps)?;
        let set = Set::new(weight, reps);
        let set_id = set.id.clone();
        exercise.sets.push(set);
        debug!("logged set {set_id} ({weight} x {reps}) on exercise {exercise_id}");
        self.persist();
        Ok(set_id)
    }

    /// Overwrite a set's weight and reps without moving it in the log.
    pub fn edit_set(
        &mut self,
        program_id: &str,
        exercise_id: &str,
        set_id: &str,
        weight: f64,
        reps: i64,
    ) -> Result<()> {
        let exercise = self.exercise_mut(program_id, exercise_id)?;
        validate_set(weight, reps)?;
        let set = exercise
            .set_mut(set_id)
            .ok_or_else(|| StoreError::not_found(Entity::Set, set_id))?;
        set.weight = weight;
        set.reps = reps;
        debug!("edited set {set_id} to {weight} x {reps}");
        self.persist();
        Ok(())
    }

    pub fn remove_set(&mut self, program_id: &str, exercise_id: &str, set_id: &str) -> Result<()> {
        let exercise = self.exercise_mut(program_id, exercise_id)?;
        let idx = exercise
            .set_position(set_id)
            .ok_or_else(|| StoreError::not_found(Entity::Set, set_id))?;
        exercise.sets.remove(idx);
        debug!("removed set {set_id} from exercise {exercise_id}");
        self.persist();
        Ok(())
    }

    /// Snapshots of an exercise's sets, oldest first.
    pub fn list_sets(&self, program_id: &str, exercise_id: &str) -> Result<Vec<Set>> {
        Ok(self.exercise_ref(program_id, exercise_id)?.sets.clone())
    }

    /// Weight to use for the next set, derived from the most recent one.
    pub fn get_suggested_weight(&self, program_id: &str, exercise_id: &str) -> Result<f64> {
        Ok(self
            .exercise_ref(program_id, exercise_id)?
            .suggested_weight())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Entity, StoreError};
    use crate::store::test_support::temp_store;
    use crate::store::WorkoutStore;

    fn store_with_exercise(rep_max: i64) -> (tempfile::TempDir, WorkoutStore, String, String) {
        let (dir, mut store) = temp_store();
        let program_id = store.create_program("Upper");
        let exercise_id = store.add_exercise(&program_id, "Bench", 8, rep_max).unwrap();
        (dir, store, program_id, exercise_id)
    }

    #[test]
    fn negative_values_are_rejected_without_changing_the_log() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        store.add_set(&program_id, &exercise_id, 95.0, 10).unwrap();

        let err = store.add_set(&program_id, &exercise_id, -1.0, 10).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
        let err = store.add_set(&program_id, &exercise_id, 100.0, -1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
        let err = store
            .add_set(&program_id, &exercise_id, f64::NAN, 10)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));

        assert_eq!(store.list_sets(&program_id, &exercise_id).unwrap().len(), 1);
    }

    #[test]
    fn zero_weight_and_reps_are_allowed() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        store.add_set(&program_id, &exercise_id, 0.0, 0).unwrap();
        assert_eq!(store.list_sets(&program_id, &exercise_id).unwrap().len(), 1);
    }

    #[test]
    fn missing_parent_is_reported_before_bad_values() {
        let (_dir, mut store, program_id, _) = store_with_exercise(12);
        let err = store.add_set(&program_id, "nope", -1.0, -1).unwrap_err();
        assert!(err.is_not_found(Entity::Exercise));
    }

    #[test]
    fn sets_append_in_log_order() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        let first = store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();
        let second = store.add_set(&program_id, &exercise_id, 100.0, 11).unwrap();

        let sets = store.list_sets(&program_id, &exercise_id).unwrap();
        assert_eq!(sets[0].id, first);
        assert_eq!(sets[1].id, second);
    }

    #[test]
    fn edit_keeps_position_and_identity() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        let first = store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();
        let second = store.add_set(&program_id, &exercise_id, 100.0, 11).unwrap();

        store
            .edit_set(&program_id, &exercise_id, &first, 102.5, 12)
            .unwrap();

        let sets = store.list_sets(&program_id, &exercise_id).unwrap();
        assert_eq!(sets[0].id, first);
        assert_eq!((sets[0].weight, sets[0].reps), (102.5, 12));
        assert_eq!(sets[1].id, second);
    }

    #[test]
    fn edit_validates_before_touching_the_set() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        let set_id = store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();

        let err = store
            .edit_set(&program_id, &exercise_id, &set_id, -5.0, 10)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
        let err = store
            .edit_set(&program_id, &exercise_id, "nope", 100.0, 10)
            .unwrap_err();
        assert!(err.is_not_found(Entity::Set));

        let sets = store.list_sets(&program_id, &exercise_id).unwrap();
        assert_eq!((sets[0].weight, sets[0].reps), (100.0, 10));
    }

    #[test]
    fn remove_set_takes_out_exactly_that_set() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        let ids: Vec<String> = [(100.0, 10), (100.0, 11), (100.0, 12)]
            .iter()
            .map(|&(w, r)| store.add_set(&program_id, &exercise_id, w, r).unwrap())
            .collect();

        store.remove_set(&program_id, &exercise_id, &ids[1]).unwrap();

        let remaining: Vec<(String, i64)> = store
            .list_sets(&program_id, &exercise_id)
            .unwrap()
            .into_iter()
            .map(|set| (set.id, set.reps))
            .collect();
        assert_eq!(
            remaining,
            vec![(ids[0].clone(), 10), (ids[2].clone(), 12)]
        );
    }

    #[test]
    fn removing_unknown_set_fails_without_side_effects() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();
        let before = store.list_sets(&program_id, &exercise_id).unwrap();

        let err = store
            .remove_set(&program_id, &exercise_id, "nope")
            .unwrap_err();
        assert!(err.is_not_found(Entity::Set));
        assert_eq!(store.list_sets(&program_id, &exercise_id).unwrap(), before);
    }

    #[test]
    fn suggested_weight_follows_the_last_set() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        assert_eq!(
            store.get_suggested_weight(&program_id, &exercise_id).unwrap(),
            0.0
        );

        let set_id = store.add_set(&program_id, &exercise_id, 100.0, 12).unwrap();
        assert_eq!(
            store.get_suggested_weight(&program_id, &exercise_id).unwrap(),
            105.0
        );

        store
            .edit_set(&program_id, &exercise_id, &set_id, 100.0, 11)
            .unwrap();
        assert_eq!(
            store.get_suggested_weight(&program_id, &exercise_id).unwrap(),
            100.0
        );
    }

    #[test]
    fn suggested_weight_tracks_rep_range_changes() {
        let (_dir, mut store, program_id, exercise_id) = store_with_exercise(12);
        store.add_set(&program_id, &exercise_id, 100.0, 10).unwrap();
        store
            .set_exercise_rep_range(&program_id, &exercise_id, 6, 10)
            .unwrap();
        assert_eq!(
            store.get_suggested_weight(&program_id, &exercise_id).unwrap(),
            105.0
        );
    }

    #[test]
    fn set_reads_report_missing_exercise() {
        let (_dir, store, program_id, _) = store_with_exercise(12);
        assert!(store
            .list_sets(&program_id, "nope")
            .unwrap_err()
            .is_not_found(Entity::Exercise));
        assert!(store
            .get_suggested_weight(&program_id, "nope")
            .unwrap_err()
            .is_not_found(Entity::Exercise));
    }
}
