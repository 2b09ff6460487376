//! Admin account repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::admin::Admin;

pub struct AdminRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an admin with an already hashed password.
    pub async fn create(&self, username: String, password_hash: String) -> Result<Admin, DbErr> {
        let entity = entity::admin::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Returns the full row, password hash included, for credential checks.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin::Model>, DbErr> {
        entity::prelude::Admin::find()
            .filter(entity::admin::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks if any admin account exists.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - First start; no admin has been seeded yet
    /// - `Err(DbErr)` - Database error during count query
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<Admin>, DbErr> {
        let admins = entity::prelude::Admin::find()
            .order_by_asc(entity::admin::Column::Username)
            .all(self.db)
            .await?;

        Ok(admins.into_iter().map(Admin::from_entity).collect())
    }
}
