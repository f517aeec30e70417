use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};

use schoolrec_core::{has_error, FieldError, ServiceError};

use crate::api::{views, AppState};
use crate::model::StudentForm;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/new", get(new_student_form))
        .route("/students/edit/{id}", get(edit_student_form))
        .route("/students/update/{id}", post(update_student))
        .route("/students/delete/{id}", get(delete_student))
}

/// GET /students — list all students with their resolved classes.
async fn list_students(State(svc): State<AppState>) -> Result<Html<String>, ServiceError> {
    let students = svc.list_students().map_err(ServiceError::from)?;
    Ok(Html(views::student_list_page(&students)))
}

/// GET /students/new — show the create form with the class picker.
async fn new_student_form(State(svc): State<AppState>) -> Result<Html<String>, ServiceError> {
    let classes = svc.list_classes().map_err(ServiceError::from)?;
    Ok(Html(views::student_create_page(
        &StudentForm::default(),
        &classes,
        &[],
    )))
}

/// POST /students — save a new student.
///
/// A missing class reference is a field error on `classId`, shown inline
/// with the re-rendered form (HTTP 200), never an HTTP error.
async fn create_student(
    State(svc): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, ServiceError> {
    let mut errors = Vec::new();
    let input = match form.validate() {
        Ok(input) => Some(input),
        Err(errs) => {
            errors = errs;
            None
        }
    };

    // The class reference is checked alongside any other field errors, so
    // a bad reference shows up even when the rest of the form is invalid.
    if !has_error(&errors, "classId") {
        if let Ok(class_id) = form.class_id.trim().parse::<i64>() {
            if svc.find_class(class_id).map_err(ServiceError::from)?.is_none() {
                errors.push(FieldError::new("classId", "Lớp không tồn tại"));
            }
        }
    }

    if !errors.is_empty() {
        let classes = svc.list_classes().map_err(ServiceError::from)?;
        return Ok(Html(views::student_create_page(&form, &classes, &errors)).into_response());
    }

    // Validation passed and the class exists; input is present.
    svc.create_student(input.unwrap()).map_err(ServiceError::from)?;
    Ok(Redirect::to("/students").into_response())
}

/// GET /students/edit/{id} — show the edit form, or bounce back to the
/// list if the student is gone.
async fn edit_student_form(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    let Some(student) = svc.find_student(id).map_err(ServiceError::from)? else {
        return Ok(Redirect::to("/students").into_response());
    };
    let form = StudentForm {
        name: student.name,
        email: student.email,
        age: student.age.to_string(),
        class_id: student.class.id.to_string(),
    };
    let classes = svc.list_classes().map_err(ServiceError::from)?;
    Ok(Html(views::student_update_page(id, &form, &classes, &[])).into_response())
}

/// POST /students/update/{id} — persist edits.
///
/// The class reference is re-verified only when the selection changed.
/// A missing student surfaces as HTTP 404 through the global mapping.
async fn update_student(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> Result<Response, ServiceError> {
    let current = svc
        .find_student(id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound("Student not found".into()))?;

    let mut errors = Vec::new();
    let input = match form.validate() {
        Ok(input) => Some(input),
        Err(errs) => {
            errors = errs;
            None
        }
    };

    // A changed class reference is checked alongside any other field
    // errors; an unchanged selection needs no lookup.
    if !has_error(&errors, "classId") {
        if let Ok(class_id) = form.class_id.trim().parse::<i64>() {
            if class_id != current.class.id
                && svc.find_class(class_id).map_err(ServiceError::from)?.is_none()
            {
                errors.push(FieldError::new("classId", "Lớp không tồn tại"));
            }
        }
    }

    if !errors.is_empty() {
        let classes = svc.list_classes().map_err(ServiceError::from)?;
        return Ok(Html(views::student_update_page(id, &form, &classes, &errors)).into_response());
    }

    svc.update_student(id, input.unwrap()).map_err(ServiceError::from)?;
    Ok(Redirect::to("/students").into_response())
}

/// GET /students/delete/{id} — delete and bounce back to the list.
async fn delete_student(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ServiceError> {
    svc.delete_student(id).map_err(ServiceError::from)?;
    Ok(Redirect::to("/students"))
}
