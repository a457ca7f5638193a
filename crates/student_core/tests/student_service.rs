use student_core::db::open_db_in_memory;
use student_core::{
    Gender, NewStudent, SqliteStudentRepository, StudentService, StudentServiceError,
};

fn jamila() -> NewStudent {
    NewStudent::new("Jamila", "jamila@x.com", Gender::Female)
}

#[test]
fn created_student_is_listed_exactly_once() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let saved = service.add_student(&jamila()).unwrap();

    let all = service.get_all_students().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], saved);
    assert_eq!(all[0].name, "Jamila");
    assert_eq!(all[0].email, "jamila@x.com");
    assert_eq!(all[0].gender, Gender::Female);
}

#[test]
fn duplicate_email_is_rejected_without_altering_state() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    service.add_student(&jamila()).unwrap();
    let before = service.get_all_students().unwrap();

    let err = service
        .add_student(&NewStudent::new("Someone Else", "jamila@x.com", Gender::Male))
        .unwrap_err();
    assert!(matches!(err, StudentServiceError::EmailTaken(_)));
    assert_eq!(err.to_string(), "Email jamila@x.com taken");

    assert_eq!(service.get_all_students().unwrap(), before);
}

#[test]
fn deleting_missing_id_fails_without_altering_state() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    service.add_student(&jamila()).unwrap();
    let before = service.get_all_students().unwrap();

    let err = service.delete_student(99).unwrap_err();
    assert!(matches!(err, StudentServiceError::StudentNotFound(99)));
    assert_eq!(err.to_string(), "Student with id 99 does not exists");

    assert_eq!(service.get_all_students().unwrap(), before);
}

#[test]
fn create_then_delete_leaves_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let saved = service.add_student(&jamila()).unwrap();
    service.delete_student(saved.id).unwrap();

    assert!(service.get_all_students().unwrap().is_empty());
}

#[test]
fn second_delete_of_same_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let saved = service.add_student(&jamila()).unwrap();
    service.delete_student(saved.id).unwrap();

    let err = service.delete_student(saved.id).unwrap_err();
    assert!(matches!(err, StudentServiceError::StudentNotFound(id) if id == saved.id));
}

#[test]
fn email_can_be_reused_after_its_owner_is_deleted() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let saved = service.add_student(&jamila()).unwrap();
    service.delete_student(saved.id).unwrap();

    assert!(service.add_student(&jamila()).is_ok());
}

#[test]
fn listing_twice_without_writes_is_stable() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));
    service.add_student(&jamila()).unwrap();
    service
        .add_student(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();

    assert_eq!(
        service.get_all_students().unwrap(),
        service.get_all_students().unwrap()
    );
}

#[test]
fn plain_text_email_is_accepted_and_listed() {
    let conn = open_db_in_memory().unwrap();
    let service = StudentService::new(SqliteStudentRepository::new(&conn));

    let saved = service
        .add_student(&NewStudent::new("Alex", "alex", Gender::Male))
        .unwrap();

    assert_eq!(saved.email, "alex");
    assert_eq!(service.get_all_students().unwrap(), vec![saved]);
}
