pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_institution_table;
mod m20261001_000003_create_school_table;
mod m20261001_000004_create_department_table;
mod m20261001_000005_create_course_and_unit_tables;
mod m20261002_000006_create_lecturer_table;
mod m20261002_000007_create_document_table;
mod m20261002_000008_create_topic_table;
mod m20261002_000009_create_lecture_table;
mod m20261003_000010_create_student_table;
mod m20261003_000011_create_club_society_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_institution_table::Migration),
            Box::new(m20261001_000003_create_school_table::Migration),
            Box::new(m20261001_000004_create_department_table::Migration),
            Box::new(m20261001_000005_create_course_and_unit_tables::Migration),
            Box::new(m20261002_000006_create_lecturer_table::Migration),
            Box::new(m20261002_000007_create_document_table::Migration),
            Box::new(m20261002_000008_create_topic_table::Migration),
            Box::new(m20261002_000009_create_lecture_table::Migration),
            Box::new(m20261003_000010_create_student_table::Migration),
            Box::new(m20261003_000011_create_club_society_table::Migration),
        ]
    }
}
