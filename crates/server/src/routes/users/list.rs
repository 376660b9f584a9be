use axum::Json;
use serde::{Deserialize, Serialize};

use crate::{
    db::{model::User, Store},
    ApiError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

pub async fn list_users(Store(db): Store) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = User::fetch_all(&db).await?;

    let summaries = users
        .into_iter()
        .map(|user| UserSummary { id: user.id.to_hex(), username: user.username })
        .collect();

    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_expose_the_raw_document_shape() {
        let entry = UserSummary {
            id: "63f7d0f4e4b0a1b2c3d4e5f6".to_owned(),
            username: "alice".to_owned(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "63f7d0f4e4b0a1b2c3d4e5f6",
                "username": "alice",
            })
        );
    }
}
