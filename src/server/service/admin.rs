use sea_orm::DatabaseConnection;

use crate::server::{data::admin::AdminRepository, error::AppError, model::admin::Admin};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every admin account ordered by username.
    pub async fn get_all(&self) -> Result<Vec<Admin>, AppError> {
        Ok(AdminRepository::new(self.db).get_all().await?)
    }
}
