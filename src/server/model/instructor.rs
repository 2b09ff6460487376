//! Instructor domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::instructor::{
        CreateInstructorDto, InstructorDto, PaginatedInstructorsDto, UpdateInstructorDto,
    },
    server::{
        error::validation::ValidationErrors, model::total_pages, util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Instructor {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The password hash stays behind; nothing above the data layer needs it.
    pub fn from_entity(entity: entity::instructor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            username: entity.username,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> InstructorDto {
        InstructorDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            username: self.username,
            created_at: self.created_at,
        }
    }
}

/// Validated instructor registration. `password` is still plaintext here.
#[derive(Debug, Clone)]
pub struct CreateInstructorParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}

impl CreateInstructorParams {
    /// Validates every field of the registration request.
    ///
    /// # Returns
    /// - `Ok(CreateInstructorParams)` - All fields passed validation
    /// - `Err(ValidationErrors)` - One violation per failing field
    pub fn from_dto(dto: CreateInstructorDto) -> Result<Self, ValidationErrors> {
        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_string();

        let mut validator = Validator::new();
        validator
            .name("name", &name)
            .email("email", &email)
            .phone("phone", &dto.phone)
            .username("user", &dto.user)
            .password("password", &dto.password);
        validator.finish()?;

        Ok(Self {
            name,
            email,
            phone: dto.phone,
            username: dto.user,
            password: dto.password,
        })
    }
}

/// Validated partial profile update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateInstructorParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl UpdateInstructorParams {
    pub fn from_dto(id: i32, dto: UpdateInstructorDto) -> Result<Self, ValidationErrors> {
        let name = dto.name.map(|n| n.trim().to_string());
        let email = dto.email.map(|e| e.trim().to_string());

        let mut validator = Validator::new();
        if let Some(name) = &name {
            validator.name("name", name);
        }
        if let Some(email) = &email {
            validator.email("email", email);
        }
        if let Some(phone) = &dto.phone {
            validator.phone("phone", phone);
        }
        if let Some(password) = &dto.password {
            validator.password("password", password);
        }
        validator.finish()?;

        Ok(Self {
            id,
            name,
            email,
            phone: dto.phone,
            password: dto.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedInstructors {
    pub instructors: Vec<Instructor>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedInstructors {
    pub fn into_dto(self) -> PaginatedInstructorsDto {
        PaginatedInstructorsDto {
            total_pages: total_pages(self.total, self.per_page),
            instructors: self.instructors.into_iter().map(Instructor::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
