//! Student domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::student::{
        CreateStudentDto, PaginatedStudentsDto, RosterStudentDto, StudentDto, UpdateStudentDto,
    },
    server::{
        error::validation::ValidationErrors, model::total_pages, util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub areas_of_interest: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Student)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored areas of interest are not a JSON array of strings
    pub fn from_entity(entity: entity::student::Model) -> Result<Self, DbErr> {
        let areas_of_interest: Vec<String> = serde_json::from_value(entity.areas_of_interest)
            .map_err(|e| {
                DbErr::Custom(format!(
                    "Failed to decode areas of interest of student {}: {}",
                    entity.id, e
                ))
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            username: entity.username,
            areas_of_interest,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            username: self.username,
            areas_of_interest: self.areas_of_interest,
            created_at: self.created_at,
        }
    }

    /// Contact details shown on an instructor's roster.
    pub fn into_roster_dto(self) -> RosterStudentDto {
        RosterStudentDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Trims each interest and drops blank ones.
fn clean_areas(areas: Vec<String>) -> Vec<String> {
    areas
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}

/// Validated student registration. `password` is still plaintext here.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub areas_of_interest: Vec<String>,
}

impl CreateStudentParams {
    /// Validates every field of the registration request.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - All fields passed validation
    /// - `Err(ValidationErrors)` - One violation per failing field
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, ValidationErrors> {
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
            areas_of_interest: clean_areas(dto.areas_of_interest),
        })
    }
}

/// Validated partial profile update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub areas_of_interest: Option<Vec<String>>,
}

impl UpdateStudentParams {
    pub fn from_dto(id: i32, dto: UpdateStudentDto) -> Result<Self, ValidationErrors> {
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
            areas_of_interest: dto.areas_of_interest.map(clean_areas),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedStudents {
    pub students: Vec<Student>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedStudents {
    pub fn into_dto(self) -> PaginatedStudentsDto {
        PaginatedStudentsDto {
            total_pages: total_pages(self.total, self.per_page),
            students: self.students.into_iter().map(Student::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
