use std::sync::Arc;

use axum::extract::FromRef;
use mongodb::Database;

mod args;
pub use args::*;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub args: Arc<Cli>,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        // the driver shares one connection pool behind an Arc so clone is cheap
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<Cli> {
    fn from_ref(state: &AppState) -> Self {
        state.args.clone()
    }
}
