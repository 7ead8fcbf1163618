pub use super::auth_token::Entity as AuthToken;
pub use super::category::Entity as Category;
pub use super::club_society::Entity as ClubSociety;
pub use super::club_society_admin::Entity as ClubSocietyAdmin;
pub use super::club_society_member::Entity as ClubSocietyMember;
pub use super::course::Entity as Course;
pub use super::department::Entity as Department;
pub use super::department_admin::Entity as DepartmentAdmin;
pub use super::document::Entity as Document;
pub use super::document_category::Entity as DocumentCategory;
pub use super::institution::Entity as Institution;
pub use super::institution_admin::Entity as InstitutionAdmin;
pub use super::lecture::Entity as Lecture;
pub use super::lecture_document::Entity as LectureDocument;
pub use super::lecturer::Entity as Lecturer;
pub use super::lecturer_department::Entity as LecturerDepartment;
pub use super::school::Entity as School;
pub use super::school_admin::Entity as SchoolAdmin;
pub use super::student::Entity as Student;
pub use super::topic::Entity as Topic;
pub use super::topic_document::Entity as TopicDocument;
pub use super::unit::Entity as Unit;
pub use super::user::Entity as User;
