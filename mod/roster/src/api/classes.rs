use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};

use schoolrec_core::ServiceError;

use crate::api::{views, AppState};
use crate::model::ClassForm;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(list_classes).post(create_class))
        .route("/classes/new", get(new_class_form))
        .route("/classes/edit/{id}", get(edit_class_form))
        .route("/classes/update/{id}", post(update_class))
        .route("/classes/delete/{id}", get(delete_class))
}

/// GET /classes — list all classes.
async fn list_classes(State(svc): State<AppState>) -> Result<Html<String>, ServiceError> {
    let classes = svc.list_classes().map_err(ServiceError::from)?;
    Ok(Html(views::class_list_page(&classes)))
}

/// GET /classes/new — show the create form.
async fn new_class_form() -> Html<String> {
    Html(views::class_create_page(&ClassForm::default(), &[]))
}

/// POST /classes — save a new class, or re-render the form on validation
/// failure.
async fn create_class(
    State(svc): State<AppState>,
    Form(form): Form<ClassForm>,
) -> Result<Response, ServiceError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::class_create_page(&form, &errors)).into_response());
        }
    };
    svc.create_class(input).map_err(ServiceError::from)?;
    Ok(Redirect::to("/classes").into_response())
}

/// GET /classes/edit/{id} — show the edit form, or bounce back to the list
/// if the class is gone.
async fn edit_class_form(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ServiceError> {
    let Some(class) = svc.find_class(id).map_err(ServiceError::from)? else {
        return Ok(Redirect::to("/classes").into_response());
    };
    let form = ClassForm {
        name: class.name,
        description: class.description.unwrap_or_default(),
    };
    Ok(Html(views::class_update_page(id, &form, &[])).into_response())
}

/// POST /classes/update/{id} — persist edits, or re-render on validation
/// failure.
async fn update_class(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ClassForm>,
) -> Result<Response, ServiceError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Html(views::class_update_page(id, &form, &errors)).into_response());
        }
    };
    svc.update_class(id, input).map_err(ServiceError::from)?;
    Ok(Redirect::to("/classes").into_response())
}

/// GET /classes/delete/{id} — delete and bounce back to the list.
async fn delete_class(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ServiceError> {
    svc.delete_class(id).map_err(ServiceError::from)?;
    Ok(Redirect::to("/classes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    use crate::model::ClassInput;
    use crate::service::test_service;

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn blank_name_rerenders_form_with_error() {
        let svc = test_service();
        let form = ClassForm {
            name: String::new(),
            description: "mô tả".into(),
        };

        let resp = create_class(State(svc.clone()), Form(form)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let html = body_text(resp).await;
        assert!(html.contains("Tên lớp không được để trống"));
        // Nothing persisted.
        assert!(svc.list_classes().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_redirects_to_list() {
        let svc = test_service();
        let form = ClassForm {
            name: "10A1".into(),
            description: String::new(),
        };

        let resp = create_class(State(svc.clone()), Form(form)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()["location"], "/classes");
        assert_eq!(svc.list_classes().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_missing_class_redirects_without_error() {
        let svc = test_service();
        let resp = edit_class_form(State(svc), Path(999)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()["location"], "/classes");
    }

    #[tokio::test]
    async fn edit_prefills_the_form() {
        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: Some("khối sáng".into()),
            })
            .unwrap();

        let resp = edit_class_form(State(svc), Path(class.id)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("value=\"10A1\""));
        assert!(html.contains("value=\"khối sáng\""));
    }

    #[tokio::test]
    async fn delete_referenced_class_maps_to_conflict() {
        use crate::model::StudentInput;

        let svc = test_service();
        let class = svc
            .create_class(ClassInput {
                name: "10A1".into(),
                description: None,
            })
            .unwrap();
        svc.create_student(StudentInput {
            name: "An".into(),
            email: "an@x.com".into(),
            age: 20,
            class_id: class.id,
        })
        .unwrap();

        let err = delete_class(State(svc), Path(class.id)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
