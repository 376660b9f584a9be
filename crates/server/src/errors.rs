use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Failures a handler can surface. Everything renders as HTTP 200 with an
/// `{error}` body; callers tell success from failure by the body shape
/// alone, which is the contract the API has always had.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not find user")]
    UserNotFound,
    #[error("username is already registered")]
    DuplicateUser,
    #[error("malformed user id: {0}")]
    InvalidIdentifier(#[from] bson::oid::Error),
    #[error(transparent)]
    Store(#[from] mongodb::error::Error),
}

/// The error half of the response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::UserNotFound => "Could not find user",
            ApiError::DuplicateUser => "You are already an user",
            // Store internals stay out of response bodies
            ApiError::InvalidIdentifier(_) | ApiError::Store(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::UserNotFound | ApiError::DuplicateUser => {}
            ApiError::InvalidIdentifier(e) => error!("rejected user id: {e}"),
            ApiError::Store(e) => error!("store failure: {e}"),
        }

        let body = ErrorBody { error: self.client_message().to_owned() };
        (StatusCode::OK, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    fn body_of(err: ApiError) -> (StatusCode, ErrorBody) {
        tokio_test::block_on(async {
            let response = err.into_response();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
            (status, serde_json::from_slice(&bytes).expect("error body json"))
        })
    }

    #[test]
    fn unknown_user_renders_the_lookup_miss_message() {
        let (status, body) = body_of(ApiError::UserNotFound);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error, "Could not find user");
    }

    #[test]
    fn duplicate_user_renders_the_collision_message() {
        let (status, body) = body_of(ApiError::DuplicateUser);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error, "You are already an user");
    }

    #[test]
    fn malformed_ids_render_as_internal_errors() {
        let err = bson::oid::ObjectId::parse_str("not-an-oid").unwrap_err();
        let (status, body) = body_of(ApiError::InvalidIdentifier(err));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error, "Internal Server Error");
    }
}
