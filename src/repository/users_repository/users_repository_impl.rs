use super::{entity::UserFindEntity, UserRecord, UsersRepository};
use crate::repository;
use axum::async_trait;
use bson::doc;
use mongodb::Database;

const USERS: &str = "users";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find(&self, uid: &str) -> Result<Option<UserRecord>, repository::Error> {
        tracing::debug!(collection = USERS, uid, "finding user");

        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! {
                "_id": uid,
            })
            .await?
            .map(UserRecord::from);

        Ok(user)
    }
}
