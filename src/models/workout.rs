use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    pub routine: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Owned by exactly one workout through `workout_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    #[validate(required(message = "is required"))]
    pub date: Option<NaiveDate>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub routine: Option<String>,

    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExerciseRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, max = 100, message = "must be 1-100 characters")
    )]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub sets: Option<i32>,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub weight: Option<f64>,

    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutSummary {
    pub id: i64,
    pub date: NaiveDate,
    pub routine: Option<String>,
}

impl From<Workout> for WorkoutSummary {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            date: workout.date,
            routine: workout.routine,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseSummary {
    pub id: i64,
    pub name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
}

impl From<Exercise> for ExerciseSummary {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            sets: exercise.sets,
            reps: exercise.reps,
            weight: exercise.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_requires_date() {
        let req: CreateWorkoutRequest = serde_json::from_str(r#"{"routine":"Push"}"#).unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("date"));

        let req: CreateWorkoutRequest =
            serde_json::from_str(r#"{"date":"2024-05-02","routine":"Push"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_exercise_optional_numbers() {
        let req: CreateExerciseRequest =
            serde_json::from_str(r#"{"name":"Bench press"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.sets.is_none() && req.reps.is_none() && req.weight.is_none());

        let req: CreateExerciseRequest =
            serde_json::from_str(r#"{"name":"Squat","sets":5,"reps":5,"weight":102.5}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.weight, Some(102.5));
    }

    #[test]
    fn test_exercise_rejects_negative_and_missing_name() {
        let req: CreateExerciseRequest = serde_json::from_str(r#"{"sets":-1}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("sets"));
    }

    #[test]
    fn test_exercise_summary_drops_notes_and_owner() {
        let exercise = Exercise {
            id: 4,
            workout_id: 2,
            name: "Deadlift".into(),
            sets: Some(3),
            reps: Some(5),
            weight: None,
            notes: Some("belt".into()),
        };
        let json = serde_json::to_value(ExerciseSummary::from(exercise)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "name": "Deadlift",
                "sets": 3,
                "reps": 5,
                "weight": null,
            })
        );
    }
}
