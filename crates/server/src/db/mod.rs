use bson::doc;
use mongodb::{options::IndexOptions, Client, Database, IndexModel};
use tracing::{info, instrument};

mod store;
pub use store::*;

pub mod model;

pub const USERS_COLLECTION: &str = "users";
pub const EXERCISES_COLLECTION: &str = "exercises";

/// Used when the connection string doesn't name a database
const DEFAULT_DATABASE: &str = "exercise_tracker";

/// Connects to the store. The client owns the connection pool and lives for
/// the whole process; the database handle is what gets passed around.
#[instrument(skip(mongo_url))]
pub async fn connect(mongo_url: &str) -> Result<(Client, Database), mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_url).await?;

    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

    info!("connected to database {:?}", db.name());

    Ok((client, db))
}

/// Pins the unique index on `users.username`. The registration handler still
/// pre-checks for a friendlier path, but this closes the check-then-insert
/// race: the slower of two concurrent registrations gets a duplicate-key
/// write error instead of a second document.
#[instrument(skip(db))]
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let username_unique = IndexModel::builder()
        .keys(doc! { "username": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    db.collection::<model::User>(USERS_COLLECTION)
        .create_index(username_unique)
        .await?;

    Ok(())
}
