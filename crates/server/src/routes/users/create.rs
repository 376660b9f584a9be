use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::{
    db::{
        model::{NewUser, User},
        Store,
    },
    ApiError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    pub user_id: String,
}

pub async fn create_user(
    Store(db): Store,
    Form(new_user): Form<NewUser>,
) -> Result<Json<RegisteredUser>, ApiError> {
    let user = User::create(&db, new_user).await?;

    Ok(Json(RegisteredUser {
        username: user.username,
        user_id: user.id.to_hex(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_username_and_user_id() {
        let body = RegisteredUser {
            username: "alice".to_owned(),
            user_id: "63f7d0f4e4b0a1b2c3d4e5f6".to_owned(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "user_id": "63f7d0f4e4b0a1b2c3d4e5f6",
            })
        );
    }
}
