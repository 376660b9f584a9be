use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{
    error::{ErrorKind, WriteFailure},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{db, ApiError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
}

fn collection(db: &Database) -> Collection<User> {
    db.collection(db::USERS_COLLECTION)
}

const DUPLICATE_KEY: i32 = 11000;

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

impl User {
    #[instrument(skip(db))]
    pub async fn create(db: &Database, new_user: NewUser) -> Result<User, ApiError> {
        if User::fetch_by_username(db, &new_user.username).await?.is_some() {
            return Err(ApiError::DuplicateUser);
        }

        let user = User {
            id: ObjectId::new(),
            username: new_user.username,
        };

        match collection(db).insert_one(&user).await {
            Ok(_) => Ok(user),
            // A concurrent registration can slip past the lookup above; the
            // unique index turns the losing insert into the same answer
            Err(e) if is_duplicate_key(&e) => Err(ApiError::DuplicateUser),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn fetch_by_username(
        db: &Database,
        username: &str,
    ) -> Result<Option<User>, ApiError> {
        Ok(collection(db).find_one(doc! { "username": username }).await?)
    }

    /// Looks a user up by the hex form of its id. A string that isn't a
    /// valid object id is an [`ApiError::InvalidIdentifier`], a well-formed
    /// id with no document behind it is `Ok(None)`.
    pub async fn fetch(db: &Database, id: &str) -> Result<Option<User>, ApiError> {
        let id = ObjectId::parse_str(id)?;
        Ok(collection(db).find_one(doc! { "_id": id }).await?)
    }

    #[instrument(skip(db))]
    pub async fn fetch_all(db: &Database) -> Result<Vec<User>, ApiError> {
        // Store-returned order, there is no sorting contract on this listing
        let cursor = collection(db).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}
