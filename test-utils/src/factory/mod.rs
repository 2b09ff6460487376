//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly through SeaORM active models and never go through the application's
//! validation or password hashing.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let instructor = factory::create_instructor(&db).await?;
//! let classroom = factory::classroom::ClassroomFactory::new(&db, instructor.id)
//!     .subject("Chemistry")
//!     .slot("Monday", "09:00:00", "09:50:00")
//!     .build()
//!     .await?;
//! let student = factory::create_student(&db).await?;
//! factory::create_enrollment(&db, classroom.id, student.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `admin` - Create admin entities
//! - `instructor` - Create instructor entities
//! - `student` - Create student entities
//! - `classroom` - Create classroom entities with schedule entries
//! - `enrollment` - Create roster memberships
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod admin;
pub mod classroom;
pub mod enrollment;
pub mod helpers;
pub mod instructor;
pub mod student;

pub use admin::create_admin;
pub use classroom::create_classroom;
pub use enrollment::create_enrollment;
pub use instructor::create_instructor;
pub use student::create_student;
