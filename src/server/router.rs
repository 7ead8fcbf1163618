use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        account, category, club, course, department, document, health, institution, lecture,
        lecturer, school, student, topic, unit,
    },
    state::AppState,
};

/// Builds every `/api` route. Static segments such as `lookup` take precedence over
/// `{id}` captures.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/accounts", post(account::register))
        .route("/api/accounts/me", get(account::get_me))
        .route("/api/accounts/token", post(account::rotate_token))
        .route(
            "/api/institutions",
            get(institution::get_institutions).post(institution::create_institution),
        )
        .route(
            "/api/institutions/lookup",
            get(institution::lookup_institution)
                .patch(institution::update_institution_lookup)
                .delete(institution::delete_institution_lookup),
        )
        .route(
            "/api/institutions/{id}",
            get(institution::get_institution)
                .patch(institution::update_institution)
                .delete(institution::delete_institution),
        )
        .route(
            "/api/schools",
            get(school::get_schools).post(school::create_school),
        )
        .route(
            "/api/schools/lookup",
            get(school::lookup_school)
                .patch(school::update_school_lookup)
                .delete(school::delete_school_lookup),
        )
        .route(
            "/api/schools/{id}",
            get(school::get_school)
                .patch(school::update_school)
                .delete(school::delete_school),
        )
        .route(
            "/api/departments",
            get(department::get_departments).post(department::create_department),
        )
        .route(
            "/api/departments/lookup",
            get(department::lookup_department)
                .patch(department::update_department_lookup)
                .delete(department::delete_department_lookup),
        )
        .route(
            "/api/departments/{id}",
            get(department::get_department)
                .patch(department::update_department)
                .delete(department::delete_department),
        )
        .route(
            "/api/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route(
            "/api/courses/lookup",
            get(course::lookup_course)
                .patch(course::update_course_lookup)
                .delete(course::delete_course_lookup),
        )
        .route(
            "/api/courses/{id}",
            get(course::get_course)
                .patch(course::update_course)
                .delete(course::delete_course),
        )
        .route("/api/units", get(unit::get_units).post(unit::create_unit))
        .route(
            "/api/units/lookup",
            get(unit::lookup_unit)
                .patch(unit::update_unit_lookup)
                .delete(unit::delete_unit_lookup),
        )
        .route(
            "/api/units/{id}",
            get(unit::get_unit)
                .patch(unit::update_unit)
                .delete(unit::delete_unit),
        )
        .route(
            "/api/lecturers",
            get(lecturer::get_lecturers).post(lecturer::create_lecturer),
        )
        .route(
            "/api/lecturers/lookup",
            get(lecturer::lookup_lecturer)
                .patch(lecturer::update_lecturer_lookup)
                .delete(lecturer::delete_lecturer_lookup),
        )
        .route(
            "/api/lecturers/{id}",
            get(lecturer::get_lecturer)
                .patch(lecturer::update_lecturer)
                .delete(lecturer::delete_lecturer),
        )
        .route(
            "/api/lectures",
            get(lecture::get_lectures).post(lecture::create_lecture),
        )
        .route(
            "/api/lectures/lookup",
            get(lecture::lookup_lecture)
                .patch(lecture::update_lecture_lookup)
                .delete(lecture::delete_lecture_lookup),
        )
        .route(
            "/api/lectures/{id}",
            get(lecture::get_lecture)
                .patch(lecture::update_lecture)
                .delete(lecture::delete_lecture),
        )
        .route(
            "/api/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/api/students/lookup",
            get(student::lookup_student)
                .patch(student::update_student_lookup)
                .delete(student::delete_student_lookup),
        )
        .route(
            "/api/students/{id}",
            get(student::get_student)
                .patch(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/api/students/{id}/documents",
            get(student::get_student_documents),
        )
        .route(
            "/api/documents",
            get(document::get_documents).post(document::upload_document),
        )
        .route(
            "/api/documents/{id}",
            get(document::get_document)
                .patch(document::update_document)
                .delete(document::delete_document),
        )
        .route(
            "/api/documents/{id}/download",
            get(document::download_document),
        )
        .route(
            "/api/documents/by-title/{title}/download",
            get(document::download_document_by_title),
        )
        .route(
            "/api/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/api/categories/bulk",
            post(category::bulk_create_categories).delete(category::bulk_delete_categories),
        )
        .route(
            "/api/categories/by-name/{name}",
            delete(category::delete_category_by_name),
        )
        .route(
            "/api/categories/{id}",
            get(category::get_category)
                .patch(category::update_category)
                .delete(category::delete_category),
        )
        .route("/api/topics", get(topic::get_topics).post(topic::create_topic))
        .route(
            "/api/topics/{id}",
            get(topic::get_topic)
                .patch(topic::update_topic)
                .delete(topic::delete_topic),
        )
        .route("/api/clubs", get(club::get_clubs).post(club::create_club))
        .route(
            "/api/clubs/lookup",
            get(club::lookup_club)
                .patch(club::update_club_lookup)
                .delete(club::delete_club_lookup),
        )
        .route(
            "/api/clubs/{id}",
            get(club::get_club)
                .patch(club::update_club)
                .delete(club::delete_club),
        )
        .route("/api/clubs/{id}/join", post(club::join_club))
        .route("/api/clubs/{id}/leave", post(club::leave_club))
}
