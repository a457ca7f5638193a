use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{validate_new_student, StudentRequest};
use actix_web::{
    web::{self, delete, get, post, Data, Json, Path},
    HttpResponse, Scope,
};
use student_core::StudentId;

pub fn students_routes() -> Scope {
    web::scope("/api/v1/students")
        .route("", get().to(get_all_students))
        .route("", post().to(add_student))
        .route("/{student_id}", delete().to(delete_student))
}

async fn get_all_students(app_state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let students = app_state
        .run(|service| service.get_all_students())
        .await?;
    Ok(HttpResponse::Ok().json(students))
}

async fn add_student(
    app_state: Data<AppState>,
    body: Json<StudentRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_student = validate_new_student(body.into_inner())?;
    app_state
        .run(move |service| service.add_student(&new_student))
        .await?;
    Ok(HttpResponse::Ok().finish())
}

async fn delete_student(
    app_state: Data<AppState>,
    student_id: Path<StudentId>,
) -> Result<HttpResponse, ApiError> {
    let student_id = student_id.into_inner();
    app_state
        .run(move |service| service.delete_student(student_id))
        .await?;
    Ok(HttpResponse::Ok().finish())
}
