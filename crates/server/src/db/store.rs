use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use mongodb::Database;

/// Extractor handing handlers the database. The handle clones a reference to
/// the driver's shared pool, there is no per-request connection lifecycle.
#[derive(Debug, Clone)]
pub struct Store(pub Database);

#[async_trait]
impl<S> FromRequestParts<S> for Store
where
    S: Send + Sync,
    Database: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Store(Database::from_ref(state)))
    }
}
