//! Data access for the `students` table.

use sqlx::SqlitePool;

use crate::models::{NewStudent, Student};

/// Inserts `student` when `id` is `None`, otherwise overwrites every column of
/// the row with that id. `course_id` is stored as given.
pub async fn save(
    db: &SqlitePool,
    id: Option<i64>,
    student: &NewStudent,
) -> Result<Student, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        r#"
        INSERT INTO students
            (id, first_name, last_name, email, age, national_id_number, course_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ON CONFLICT(id) DO UPDATE SET
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            email = excluded.email,
            age = excluded.age,
            national_id_number = excluded.national_id_number,
            course_id = excluded.course_id
        RETURNING id, first_name, last_name, email, age, national_id_number, course_id
        "#,
    )
    .bind(id)
    .bind(&student.first_name)
    .bind(&student.last_name)
    .bind(&student.email)
    .bind(student.age)
    .bind(student.national_id_number)
    .bind(student.course_id)
    .fetch_one(db)
    .await
}

pub async fn find_all(db: &SqlitePool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT id, first_name, last_name, email, age, national_id_number, course_id FROM students ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT id, first_name, last_name, email, age, national_id_number, course_id FROM students WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn exists_by_id(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}

pub async fn delete_by_id(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{courses, setup_test_db};
    use crate::models::NewCourse;

    async fn insert_course(pool: &SqlitePool) -> i64 {
        let course = NewCourse {
            title: "Intro".to_string(),
            description: "Basics".to_string(),
            workload_hours: 10,
            exercise_count: 5,
            active: false,
        };
        courses::save(pool, None, &course)
            .await
            .expect("Failed to insert course")
            .id
    }

    fn new_student(course_id: i64) -> NewStudent {
        NewStudent {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            age: 20,
            national_id_number: 123,
            course_id,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_student() {
        let pool = setup_test_db().await;
        let course_id = insert_course(&pool).await;

        let student = save(&pool, None, &new_student(course_id))
            .await
            .expect("Failed to insert student");
        assert_eq!(student.first_name, "A");
        assert_eq!(student.course_id, course_id);

        let students = find_all(&pool).await.expect("Failed to fetch students");
        assert_eq!(students, vec![student]);
    }

    #[tokio::test]
    async fn test_course_id_is_not_checked_here() {
        let pool = setup_test_db().await;

        let student = save(&pool, None, &new_student(99))
            .await
            .expect("Failed to insert student");
        assert_eq!(student.course_id, 99);
    }

    #[tokio::test]
    async fn test_update_student() {
        let pool = setup_test_db().await;
        let course_id = insert_course(&pool).await;

        let student = save(&pool, None, &new_student(course_id))
            .await
            .expect("Failed to insert student");

        let mut changes = new_student(course_id);
        changes.email = "new@b.com".to_string();
        changes.age = 21;
        let updated = save(&pool, Some(student.id), &changes)
            .await
            .expect("Failed to update student");

        assert_eq!(updated.id, student.id);
        assert_eq!(updated.email, "new@b.com");
        assert_eq!(updated.age, 21);
    }

    #[tokio::test]
    async fn test_delete_student() {
        let pool = setup_test_db().await;
        let course_id = insert_course(&pool).await;

        let student = save(&pool, None, &new_student(course_id))
            .await
            .expect("Failed to insert student");
        assert!(exists_by_id(&pool, student.id).await.expect("exists failed"));

        assert!(delete_by_id(&pool, student.id).await.expect("delete failed"));
        assert!(!exists_by_id(&pool, student.id).await.expect("exists failed"));
        assert!(find_by_id(&pool, student.id).await.expect("find failed").is_none());
    }

    #[tokio::test]
    async fn test_course_delete_leaves_students() {
        let pool = setup_test_db().await;
        let course_id = insert_course(&pool).await;

        let student = save(&pool, None, &new_student(course_id))
            .await
            .expect("Failed to insert student");
        assert!(courses::delete_by_id(&pool, course_id).await.expect("delete failed"));

        let found = find_by_id(&pool, student.id).await.expect("find failed");
        assert_eq!(found, Some(student));
    }
}
