use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::error::ErrorKind;

use crate::dto::{CreatedResponse, IdResponse};
use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::models::workout::{
    CreateExerciseRequest, CreateWorkoutRequest, Exercise, ExerciseSummary, Workout,
    WorkoutSummary,
};
use crate::AppState;

pub async fn create_workout(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateWorkoutRequest>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO workouts (date, routine, notes) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(body.date)
    .bind(&body.routine)
    .bind(&body.notes)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(workout_id = id, "Workout created");

    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

pub async fn list_workouts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WorkoutSummary>>> {
    let workouts = sqlx::query_as::<_, Workout>("SELECT * FROM workouts ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(workouts.into_iter().map(WorkoutSummary::from).collect()))
}

/// The foreign key is the existence check: a missing workout surfaces as
/// `NotFound` rather than a generic integrity error.
pub async fn add_exercise(
    State(state): State<AppState>,
    PathParam(workout_id): PathParam<i64>,
    ValidatedJson(body): ValidatedJson<CreateExerciseRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO exercises (workout_id, name, sets, reps, weight, notes)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(workout_id)
    .bind(&body.name)
    .bind(body.sets)
    .bind(body.reps)
    .bind(body.weight)
    .bind(&body.notes)
    .fetch_one(&state.db)
    .await
    .map_err(AppError::from)
    .map_err(|e| match e.db_error_kind() {
        Some(ErrorKind::ForeignKeyViolation) => AppError::NotFound("Workout not found".into()),
        _ => e,
    })?;

    tracing::info!(workout_id, exercise_id = id, "Exercise added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Exercise added", id)),
    ))
}

pub async fn list_exercises(
    State(state): State<AppState>,
    PathParam(workout_id): PathParam<i64>,
) -> AppResult<Json<Vec<ExerciseSummary>>> {
    let exercises = sqlx::query_as::<_, Exercise>(
        "SELECT * FROM exercises WHERE workout_id = $1 ORDER BY id",
    )
    .bind(workout_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(exercises.into_iter().map(ExerciseSummary::from).collect()))
}
