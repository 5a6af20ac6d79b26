use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::models::check_max_len;

pub const FIRST_NAME_MAX_LEN: usize = 100;
pub const LAST_NAME_MAX_LEN: usize = 255;
pub const EMAIL_MAX_LEN: usize = 255;

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
    pub national_id_number: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
    pub national_id_number: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentRequest {
    #[schema(max_length = 100)]
    pub first_name: String,
    #[schema(max_length = 255)]
    pub last_name: String,
    #[schema(max_length = 255)]
    pub email: String,
    pub age: i64,
    pub national_id_number: i64,
    pub course_id: i64,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        check_max_len("first_name", &self.first_name, FIRST_NAME_MAX_LEN)?;
        check_max_len("last_name", &self.last_name, LAST_NAME_MAX_LEN)?;
        check_max_len("email", &self.email, EMAIL_MAX_LEN)?;
        Ok(())
    }
}

impl From<StudentRequest> for NewStudent {
    fn from(req: StudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            age: req.age,
            national_id_number: req.national_id_number,
            course_id: req.course_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i64,
    pub national_id_number: i64,
    pub course_id: i64,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            age: student.age,
            national_id_number: student.national_id_number,
            course_id: student.course_id,
        }
    }
}
