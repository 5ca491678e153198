//! Class request/response models.
//!
//! `ClassRequest` covers creation (all fields required); `EditClassRequest`
//! is the partial-update variant where absent fields are left unchanged.

use db::models::gym_class::Model as GymClass;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub static NON_BLANK_REGEX: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"\S").unwrap());

#[derive(Debug, Deserialize, Validate)]
pub struct ClassRequest {
    #[validate(
        regex(path = *NON_BLANK_REGEX, message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[validate(regex(path = *NON_BLANK_REGEX, message = "Description is required"))]
    pub description: String,

    #[validate(regex(path = *NON_BLANK_REGEX, message = "Instructor is required"))]
    pub instructor: String,

    pub schedule: chrono::DateTime<chrono::Utc>,

    #[validate(range(min = 0, message = "Capacity must be zero or greater"))]
    pub capacity: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditClassRequest {
    #[validate(
        regex(path = *NON_BLANK_REGEX, message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: Option<String>,

    #[validate(regex(path = *NON_BLANK_REGEX, message = "Description is required"))]
    pub description: Option<String>,

    #[validate(regex(path = *NON_BLANK_REGEX, message = "Instructor is required"))]
    pub instructor: Option<String>,

    pub schedule: Option<chrono::DateTime<chrono::Utc>>,

    #[validate(range(min = 0, message = "Capacity must be zero or greater"))]
    pub capacity: Option<i32>,
}

#[derive(Debug, Serialize, Default)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub schedule: String,
    pub capacity: i32,
    pub registered_members: Vec<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl ClassResponse {
    pub fn from_model(class: GymClass, registered_members: Vec<i64>) -> Self {
        Self {
            id: class.id,
            name: class.name,
            description: class.description,
            instructor: class.instructor,
            schedule: class.schedule.to_rfc3339(),
            capacity: class.capacity,
            registered_members,
            created_at: class.created_at.to_rfc3339(),
            updated_at: class.updated_at.to_rfc3339(),
        }
    }
}
