use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    dates::{date_string, parse_calendar_date},
    db::{
        model::{Exercise, LogFilter, User},
        Store,
    },
    state::Args,
    ApiError,
};

/// All three are optional and all three arrive as text; anything that
/// doesn't parse falls back to the unfiltered behavior
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogParams {
    fn filter(&self) -> LogFilter {
        LogFilter {
            from: self.from.as_deref().and_then(parse_calendar_date),
            to: self.to.as_deref().and_then(parse_calendar_date),
            limit: self.limit.as_deref().and_then(|l| l.trim().parse().ok()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

pub async fn exercise_log(
    Store(db): Store,
    args: Args,
    Path(id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<ExerciseLog>, ApiError> {
    let user = User::fetch(&db, &id).await?.ok_or(ApiError::UserNotFound)?;

    let exercises = Exercise::fetch_for_user(
        &db,
        &user.id.to_hex(),
        &params.filter(),
        args.default_log_limit,
    )
    .await?;

    let log: Vec<_> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: date_string(e.date.to_chrono()),
        })
        .collect();

    Ok(Json(ExerciseLog {
        username: user.username,
        id: user.id.to_hex(),
        count: log.len(),
        log,
    }))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn params_parse_into_a_filter() {
        let params = LogParams {
            from: Some("2023-01-01".to_owned()),
            to: Some("2023-01-31".to_owned()),
            limit: Some("10".to_owned()),
        };

        let filter = params.filter();
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(filter.to, NaiveDate::from_ymd_opt(2023, 1, 31));
        assert_eq!(filter.limit, Some(10));
    }

    #[test]
    fn unparsable_params_read_as_absent() {
        let params = LogParams {
            from: Some("last tuesday".to_owned()),
            to: Some(String::new()),
            limit: Some("plenty".to_owned()),
        };

        assert_eq!(params.filter(), LogFilter::default());
    }

    #[test]
    fn body_shape_matches_the_log_contract() {
        let body = ExerciseLog {
            username: "alice".to_owned(),
            id: "63f7d0f4e4b0a1b2c3d4e5f6".to_owned(),
            count: 1,
            log: vec![LogEntry {
                description: "run".to_owned(),
                duration: 30,
                date: "Sun Jan 01 2023".to_owned(),
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "_id": "63f7d0f4e4b0a1b2c3d4e5f6",
                "count": 1,
                "log": [{ "description": "run", "duration": 30, "date": "Sun Jan 01 2023" }],
            })
        );
    }
}
