use student_core::db::open_db_in_memory;
use student_core::{
    Gender, NewStudent, RepoError, SqliteStudentRepository, StudentRepository,
};

#[test]
fn save_assigns_id_and_find_all_returns_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let saved = repo
        .save(&NewStudent::new("Jamila", "jamila@x.com", Gender::Female))
        .unwrap();
    assert!(saved.id > 0);

    let all = repo.find_all().unwrap();
    assert_eq!(all, vec![saved.clone()]);
    assert_eq!(all[0].name, "Jamila");
    assert_eq!(all[0].email, "jamila@x.com");
    assert_eq!(all[0].gender, Gender::Female);
}

#[test]
fn ids_are_unique_and_listed_in_ascending_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let first = repo
        .save(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();
    let second = repo
        .save(&NewStudent::new("Jamila", "jamila@x.com", Gender::Female))
        .unwrap();
    assert_ne!(first.id, second.id);

    let ids: Vec<_> = repo.find_all().unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn deleted_ids_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let first = repo
        .save(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();
    repo.delete_by_id(first.id).unwrap();
    let second = repo
        .save(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();

    assert!(second.id > first.id);
}

#[test]
fn exists_by_id_tracks_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let saved = repo
        .save(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();
    assert!(repo.exists_by_id(saved.id).unwrap());
    assert!(!repo.exists_by_id(saved.id + 1).unwrap());

    repo.delete_by_id(saved.id).unwrap();
    assert!(!repo.exists_by_id(saved.id).unwrap());
}

#[test]
fn delete_removes_only_the_target_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let keep = repo
        .save(&NewStudent::new("Alex", "alex@x.com", Gender::Male))
        .unwrap();
    let gone = repo
        .save(&NewStudent::new("Jamila", "jamila@x.com", Gender::Female))
        .unwrap();

    repo.delete_by_id(gone.id).unwrap();
    assert_eq!(repo.find_all().unwrap(), vec![keep]);
}

#[test]
fn delete_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let err = repo.delete_by_id(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn select_exists_email_is_a_literal_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    repo.save(&NewStudent::new("Jamila", "jamila@x.com", Gender::Female))
        .unwrap();

    assert!(repo.select_exists_email("jamila@x.com").unwrap());
    assert!(!repo.select_exists_email("JAMILA@x.com").unwrap());
    assert!(!repo.select_exists_email(" jamila@x.com").unwrap());
    assert!(!repo.select_exists_email("alex@x.com").unwrap());
}

#[test]
fn save_does_not_enforce_email_uniqueness() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    repo.save(&NewStudent::new("A", "same@x.com", Gender::Male))
        .unwrap();
    repo.save(&NewStudent::new("B", "same@x.com", Gender::Female))
        .unwrap();

    assert_eq!(repo.find_all().unwrap().len(), 2);
}

#[test]
fn save_accepts_plain_text_email() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    let saved = repo
        .save(&NewStudent::new("Alex", "alex", Gender::Male))
        .unwrap();

    assert_eq!(saved.email, "alex");
    assert_eq!(repo.find_all().unwrap(), vec![saved]);
    assert!(repo.select_exists_email("alex").unwrap());
}

#[test]
fn find_all_on_empty_table_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::new(&conn);

    assert!(repo.find_all().unwrap().is_empty());
}
