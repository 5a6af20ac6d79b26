pub mod course;
pub mod student;

pub use course::{Course, CourseRequest, CourseResponse, NewCourse};
pub use student::{NewStudent, Student, StudentRequest, StudentResponse};

use crate::error::AppError;

/// Rejects `value` when it is longer than `max` characters.
pub(crate) fn check_max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
