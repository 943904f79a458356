use facalloc_core::db::open_db_in_memory;
use facalloc_core::{
    CourseRepository, CourseService, FacultyRepository, FacultyService, NewCourse, NewFaculty,
    RepoError, SqliteCourseRepository, SqliteFacultyRepository, ValidationError,
    DEFAULT_CREDITS, DEFAULT_MAX_COURSES,
};
use uuid::Uuid;

#[test]
fn create_and_get_faculty_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = FacultyService::new(SqliteFacultyRepository::new(&conn));

    let created = service
        .create_faculty(&NewFaculty::new("Ada Lovelace", "ada@uni.edu").with_expertise("math"))
        .unwrap();
    let loaded = service.get_faculty(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.max_courses, DEFAULT_MAX_COURSES);
    assert_eq!(loaded.workload, 0);
}

#[test]
fn get_unknown_faculty_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteFacultyRepository::new(&conn);

    assert!(repo.get_faculty(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn service_get_unknown_ids_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let faculty_service = FacultyService::new(SqliteFacultyRepository::new(&conn));
    let course_service = CourseService::new(SqliteCourseRepository::new(&conn));
    let missing = Uuid::new_v4();

    let err = faculty_service.get_faculty(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { kind: "faculty", id } if id == missing));
    assert_eq!(err.to_string(), format!("faculty not found: {missing}"));

    let err = course_service.get_course(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { kind: "course", .. }));
}

#[test]
fn duplicate_faculty_email_is_conflict() {
    let conn = open_db_in_memory().unwrap();
    let service = FacultyService::new(SqliteFacultyRepository::new(&conn));

    service
        .create_faculty(&NewFaculty::new("Ada", "ada@uni.edu"))
        .unwrap();
    let err = service
        .create_faculty(&NewFaculty::new("Ada Again", "ada@uni.edu"))
        .unwrap_err();

    assert!(matches!(err, RepoError::Conflict(message) if message.contains("ada@uni.edu")));
    assert_eq!(service.list_faculty().unwrap().len(), 1);
}

#[test]
fn invalid_faculty_is_rejected_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = FacultyService::new(SqliteFacultyRepository::new(&conn));

    let err = service
        .create_faculty(&NewFaculty::new("Ada", "not-an-email"))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert!(service.list_faculty().unwrap().is_empty());
}

#[test]
fn faculty_list_follows_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service = FacultyService::new(SqliteFacultyRepository::new(&conn));

    let names = ["Zed", "Amy", "Mo"];
    for (index, name) in names.iter().enumerate() {
        service
            .create_faculty(&NewFaculty::new(*name, format!("{index}@uni.edu")))
            .unwrap();
    }

    let listed: Vec<_> = service
        .list_faculty()
        .unwrap()
        .into_iter()
        .map(|faculty| faculty.name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn create_and_list_courses() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseRepository::new(&conn));

    let first = service
        .create_course(&NewCourse::new("CS201", "Data Structures").with_credits(4))
        .unwrap();
    let second = service
        .create_course(&NewCourse::new("CS101", "Intro").with_required_expertise("programming"))
        .unwrap();

    let listed = service.list_courses().unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);
    assert_eq!(first.credits, 4);
    assert_eq!(second.credits, DEFAULT_CREDITS);
    assert_eq!(second.required_expertise, "programming");
}

#[test]
fn duplicate_course_code_is_conflict() {
    let conn = open_db_in_memory().unwrap();
    let service = CourseService::new(SqliteCourseRepository::new(&conn));

    service
        .create_course(&NewCourse::new("CS101", "Intro"))
        .unwrap();
    let err = service
        .create_course(&NewCourse::new(" CS101 ", "Intro again"))
        .unwrap_err();

    assert!(matches!(err, RepoError::Conflict(_)));
}

#[test]
fn get_course_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCourseRepository::new(&conn);
    let service = CourseService::new(SqliteCourseRepository::new(&conn));

    let created = service
        .create_course(&NewCourse::new("MA101", "Calculus"))
        .unwrap();

    assert_eq!(service.get_course(created.id).unwrap(), created);
    assert_eq!(repo.get_course(created.id).unwrap(), Some(created));
    assert_eq!(repo.get_course(Uuid::new_v4()).unwrap(), None);
}

#[test]
fn corrupted_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO courses (uuid, code, name) VALUES ('not-a-uuid', 'X1', 'Broken');",
        [],
    )
    .unwrap();

    let err = SqliteCourseRepository::new(&conn).list_courses().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
