use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{CourseRequest, CourseResponse, StudentRequest, StudentResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Virtual Learning Environment",
        version = "1.0.0",
        description = "Virtual learning environment for fully remote students"
    ),
    paths(
        super::health,
        super::courses::create,
        super::courses::find_all,
        super::courses::find_by_id,
        super::courses::update_by_id,
        super::courses::delete_by_id,
        super::students::create,
        super::students::find_all,
        super::students::find_by_id,
        super::students::update_by_id,
        super::students::delete_by_id,
    ),
    components(schemas(
        CourseRequest,
        CourseResponse,
        StudentRequest,
        StudentResponse,
        ErrorResponse
    )),
    tags(
        (name = "courses", description = "Course catalog"),
        (name = "students", description = "Student enrollment")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Virtual Learning Environment");
        assert_eq!(doc.info.version, "1.0.0");
    }

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/courses",
            "/api/courses/{id}",
            "/api/students",
            "/api/students/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
