use student_core::{Gender, NewStudent, Student};

#[test]
fn gender_serializes_as_uppercase_literal() {
    assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
    assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"FEMALE\"");
    assert_eq!(
        serde_json::from_str::<Gender>("\"FEMALE\"").unwrap(),
        Gender::Female
    );
    assert!(serde_json::from_str::<Gender>("\"female\"").is_err());
    assert!(serde_json::from_str::<Gender>("\"OTHER\"").is_err());
}

#[test]
fn gender_from_str_is_exact() {
    assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
    let err = "Male".parse::<Gender>().unwrap_err();
    assert_eq!(err.0, "Male");
    assert!(err.to_string().contains("MALE|FEMALE"));
}

#[test]
fn student_json_has_expected_fields() {
    let student = NewStudent::new("Jamila", "jamila@x.com", Gender::Female).into_student(3);
    let value = serde_json::to_value(&student).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "id": 3,
            "name": "Jamila",
            "email": "jamila@x.com",
            "gender": "FEMALE"
        })
    );
    let back: Student = serde_json::from_value(value).unwrap();
    assert_eq!(back, student);
}

#[test]
fn new_student_keeps_fields_verbatim() {
    let student = NewStudent::new(" Alex ", "alex", Gender::Male).into_student(9);

    assert_eq!(student.name, " Alex ");
    assert_eq!(student.email, "alex");
    assert_eq!(student.gender, Gender::Male);
}
