use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use mongodb::Database;

use crate::cli::Cli;

mod create;
pub use create::*;

mod logs;
pub use logs::*;

/// Exercise routes hang off a user id, the caller nests this next to the
/// user routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Database: FromRef<S>,
    Arc<Cli>: FromRef<S>,
{
    Router::new()
        .route("/:id/exercises", post(log_exercise))
        .route("/:id/logs", get(exercise_log))
}
