use axum::{extract::FromRef, routing::post, Router};
use mongodb::Database;

mod create;
pub use create::*;

mod list;
pub use list::*;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Database: FromRef<S>,
{
    Router::new().route("/", post(create_user).get(list_users))
}
