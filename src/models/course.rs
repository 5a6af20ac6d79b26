use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::check_max_len;

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 255;

/// A row of the `courses` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub workload_hours: i64,
    pub exercise_count: i64,
    pub active: bool,
}

/// Column values of a course that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub workload_hours: i64,
    pub exercise_count: i64,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourseRequest {
    #[schema(max_length = 100)]
    pub title: String,
    #[schema(max_length = 255)]
    pub description: String,
    pub workload_hours: i64,
    pub exercise_count: i64,
    #[serde(default)]
    pub active: bool,
}

impl CourseRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_max_len("title", &self.title, TITLE_MAX_LEN)?;
        check_max_len("description", &self.description, DESCRIPTION_MAX_LEN)?;
        Ok(())
    }
}

impl From<CourseRequest> for NewCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            workload_hours: req.workload_hours,
            exercise_count: req.exercise_count,
            active: req.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub workload_hours: i64,
    pub exercise_count: i64,
    pub active: bool,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            workload_hours: course.workload_hours,
            exercise_count: course.exercise_count,
            active: course.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, description: &str) -> CourseRequest {
        CourseRequest {
            title: title.to_string(),
            description: description.to_string(),
            workload_hours: 10,
            exercise_count: 5,
            active: false,
        }
    }

    #[test]
    fn test_active_defaults_to_false() {
        let req: CourseRequest = serde_json::from_str(
            r#"{"title":"Intro","description":"Basics","workload_hours":10,"exercise_count":5}"#,
        )
        .expect("Failed to parse request");
        assert!(!req.active);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let parsed = serde_json::from_str::<CourseRequest>(r#"{"title":"Intro"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_accepts_limits() {
        let req = request(&"a".repeat(TITLE_MAX_LEN), &"b".repeat(DESCRIPTION_MAX_LEN));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_title() {
        let req = request(&"a".repeat(TITLE_MAX_LEN + 1), "Basics");
        match req.validate() {
            Err(AppError::Validation(msg)) => assert!(msg.contains("title")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 100 two-byte characters
        let req = request(&"é".repeat(TITLE_MAX_LEN), "Basics");
        assert!(req.validate().is_ok());
    }
}
