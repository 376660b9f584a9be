use bson::{doc, oid::ObjectId, Document};
use chrono::{DateTime, NaiveDate, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{db, dates::midnight_utc, ApiError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Hex form of the owning user's id, checked for existence at creation
    /// time only
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: bson::DateTime,
}

#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Bounds and cap for a log query. Bounds are calendar dates anchored at UTC
/// midnight and compared inclusively; a missing side leaves the range open.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl LogFilter {
    pub fn query(&self, user_id: &str) -> Document {
        let mut filter = doc! { "user_id": user_id };

        let mut range = Document::new();
        if let Some(from) = self.from {
            range.insert("$gte", bson::DateTime::from_chrono(midnight_utc(from)));
        }
        if let Some(to) = self.to {
            range.insert("$lte", bson::DateTime::from_chrono(midnight_utc(to)));
        }
        if !range.is_empty() {
            filter.insert("date", range);
        }

        filter
    }
}

fn collection(db: &Database) -> Collection<Exercise> {
    db.collection(db::EXERCISES_COLLECTION)
}

impl Exercise {
    #[instrument(skip(db))]
    pub async fn create(db: &Database, new: NewExercise) -> Result<Exercise, ApiError> {
        let exercise = Exercise {
            id: ObjectId::new(),
            user_id: new.user_id,
            description: new.description,
            duration: new.duration,
            date: bson::DateTime::from_chrono(new.date),
        };

        collection(db).insert_one(&exercise).await?;

        Ok(exercise)
    }

    /// Exercises for one user within `filter`, truncated to the limit
    /// (`default_limit` when none was asked for). No sort is applied, the
    /// order is whatever the store returns.
    #[instrument(skip(db))]
    pub async fn fetch_for_user(
        db: &Database,
        user_id: &str,
        filter: &LogFilter,
        default_limit: i64,
    ) -> Result<Vec<Exercise>, ApiError> {
        let cursor = collection(db)
            .find(filter.query(user_id))
            .limit(filter.limit.unwrap_or(default_limit))
            .await?;

        Ok(cursor.try_collect().await?)
    }
}
