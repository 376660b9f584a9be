use axum::{extract::Path, Form, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    dates::{date_string, midnight_utc, parse_calendar_date},
    db::{
        model::{Exercise, NewExercise, User},
        Store,
    },
    ApiError,
};

#[derive(Debug, Deserialize)]
pub struct LogExercise {
    pub description: String,
    pub duration: i64,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseLogged {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

pub async fn log_exercise(
    Store(db): Store,
    Path(id): Path<String>,
    Form(payload): Form<LogExercise>,
) -> Result<Json<ExerciseLogged>, ApiError> {
    let user = User::fetch(&db, &id).await?.ok_or(ApiError::UserNotFound)?;

    // A missing or unparsable date stamps the creation instant
    let date = payload
        .date
        .as_deref()
        .and_then(parse_calendar_date)
        .map(midnight_utc)
        .unwrap_or_else(Utc::now);

    let exercise = Exercise::create(&db, NewExercise {
        user_id: user.id.to_hex(),
        description: payload.description,
        duration: payload.duration,
        date,
    })
    .await?;

    Ok(Json(ExerciseLogged {
        id: user.id.to_hex(),
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: date_string(date),
    }))
}
