//! OpenAPI document for the REST API, served at `/api/openapi.json`.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::controller::{
    account, category, club, course, department, document, health, institution, lecture,
    lecturer, school, student, topic, unit,
};

/// Registers the `bearer` scheme referenced by mutating endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Account token issued by POST /api/accounts"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        account::register,
        account::get_me,
        account::rotate_token,
        institution::create_institution,
        institution::get_institutions,
        institution::get_institution,
        institution::update_institution,
        institution::delete_institution,
        institution::lookup_institution,
        institution::update_institution_lookup,
        institution::delete_institution_lookup,
        school::create_school,
        school::get_schools,
        school::get_school,
        school::update_school,
        school::delete_school,
        school::lookup_school,
        school::update_school_lookup,
        school::delete_school_lookup,
        department::create_department,
        department::get_departments,
        department::get_department,
        department::update_department,
        department::delete_department,
        department::lookup_department,
        department::update_department_lookup,
        department::delete_department_lookup,
        course::create_course,
        course::get_courses,
        course::get_course,
        course::update_course,
        course::delete_course,
        course::lookup_course,
        course::update_course_lookup,
        course::delete_course_lookup,
        unit::create_unit,
        unit::get_units,
        unit::get_unit,
        unit::update_unit,
        unit::delete_unit,
        unit::lookup_unit,
        unit::update_unit_lookup,
        unit::delete_unit_lookup,
        lecturer::create_lecturer,
        lecturer::get_lecturers,
        lecturer::get_lecturer,
        lecturer::update_lecturer,
        lecturer::delete_lecturer,
        lecturer::lookup_lecturer,
        lecturer::update_lecturer_lookup,
        lecturer::delete_lecturer_lookup,
        lecture::create_lecture,
        lecture::get_lectures,
        lecture::get_lecture,
        lecture::update_lecture,
        lecture::delete_lecture,
        lecture::lookup_lecture,
        lecture::update_lecture_lookup,
        lecture::delete_lecture_lookup,
        student::create_student,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        student::get_student_documents,
        student::lookup_student,
        student::update_student_lookup,
        student::delete_student_lookup,
        document::upload_document,
        document::get_documents,
        document::get_document,
        document::update_document,
        document::delete_document,
        document::download_document,
        document::download_document_by_title,
        category::create_category,
        category::bulk_create_categories,
        category::get_categories,
        category::get_category,
        category::update_category,
        category::delete_category,
        category::delete_category_by_name,
        category::bulk_delete_categories,
        topic::create_topic,
        topic::get_topics,
        topic::get_topic,
        topic::update_topic,
        topic::delete_topic,
        club::create_club,
        club::get_clubs,
        club::get_club,
        club::update_club,
        club::delete_club,
        club::join_club,
        club::leave_club,
        club::lookup_club,
        club::update_club_lookup,
        club::delete_club_lookup,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "account", description = "Accounts and bearer tokens"),
        (name = "institution", description = "Universities and colleges"),
        (name = "school", description = "Schools within an institution"),
        (name = "department", description = "Departments within a school"),
        (name = "course", description = "Courses offered by a department"),
        (name = "unit", description = "Units taught within a course"),
        (name = "lecturer", description = "Lecturer profiles"),
        (name = "lecture", description = "Scheduled lectures"),
        (name = "student", description = "Student profiles"),
        (name = "document", description = "Uploaded course documents"),
        (name = "category", description = "Document categories"),
        (name = "topic", description = "Topics covering document pages"),
        (name = "club", description = "Clubs and societies"),
    ),
    info(
        title = "Academia API",
        version = "0.1.0",
        description = "Directory of institutions, their academic hierarchy, people, documents and clubs"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components should be generated");
        assert!(components.security_schemes.contains_key("bearer"));
    }

    #[test]
    fn documents_lookup_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/institutions/lookup"));
        assert!(doc.paths.paths.contains_key("/api/documents/by-title/{title}/download"));
    }
}
