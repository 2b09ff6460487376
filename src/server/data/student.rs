//! Student data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student, UpdateStudentParams};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new student.
    ///
    /// # Arguments
    /// - `params` - Validated registration; its plaintext password is ignored
    /// - `password_hash` - argon2 hash of the password
    pub async fn create(
        &self,
        params: &CreateStudentParams,
        password_hash: String,
    ) -> Result<Student, DbErr> {
        let now = Utc::now();
        let entity = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            email: ActiveValue::Set(params.email.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            username: ActiveValue::Set(params.username.clone()),
            password_hash: ActiveValue::Set(password_hash),
            areas_of_interest: ActiveValue::Set(serde_json::json!(params.areas_of_interest)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Student::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Returns the full row, password hash included, for credential checks.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Checks whether another student already uses any of the given contact values.
    ///
    /// Phone numbers are not unique at the schema level, so this check is the only
    /// guard against a reused phone.
    pub async fn contact_taken(
        &self,
        email: Option<&str>,
        username: Option<&str>,
        phone: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut any = Condition::any();
        if let Some(email) = email {
            any = any.add(entity::student::Column::Email.eq(email));
        }
        if let Some(username) = username {
            any = any.add(entity::student::Column::Username.eq(username));
        }
        if let Some(phone) = phone {
            any = any.add(entity::student::Column::Phone.eq(phone));
        }
        if any.is_empty() {
            return Ok(false);
        }

        let mut query = entity::prelude::Student::find().filter(any);
        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student with that id
    pub async fn update(
        &self,
        params: UpdateStudentParams,
        password_hash: Option<String>,
    ) -> Result<Option<Student>, DbErr> {
        let Some(existing) = entity::prelude::Student::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::student::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(areas) = params.areas_of_interest {
            active.areas_of_interest = ActiveValue::Set(serde_json::json!(areas));
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Student::from_entity(entity).map(Some)
    }

    /// Deletes a student; enrollments and submissions cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of students ordered by name, plus the total count.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Student>, u64), DbErr> {
        let paginator = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Name)
            .order_by_asc(entity::student::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let students = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Student::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((students, total))
    }
}
