use std::sync::Arc;

use axum::{extract::FromRef, routing::get, Router};
use mongodb::Database;

use crate::cli::Cli;

mod ping;
pub use ping::*;

pub mod exercises;
pub mod users;

/// The JSON surface, meant to be nested under `/api`
pub fn api_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Database: FromRef<S>,
    Arc<Cli>: FromRef<S>,
{
    Router::new()
        .route("/ping", get(ping))
        .nest("/users", users::router().merge(exercises::router()))
}
