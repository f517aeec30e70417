//! Route registration — roster routes plus the home, login, and error pages.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use serde::Deserialize;

use roster::api::views::escape;

/// Build the complete router.
pub fn build_router(roster: Router) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/login", get(login_page))
        .route("/error", any(error_page))
        .merge(roster)
        .fallback(not_found)
}

async fn home_page() -> impl IntoResponse {
    Html(include_str!("web/home.html"))
}

async fn login_page() -> impl IntoResponse {
    Html(include_str!("web/login.html"))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(include_str!("web/404.html")))
}

/// Error attributes, passed by whoever redirected here.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorParams {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// GET (or anything) /error — status-aware error display.
///
/// 404 gets its dedicated page; every other status renders the generic
/// error page with the attributes filled in.
async fn error_page(Query(params): Query<ErrorParams>) -> Response {
    let status = params
        .status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status == StatusCode::NOT_FOUND {
        return (status, Html(include_str!("web/404.html"))).into_response();
    }

    let body = include_str!("web/error.html")
        .replace("{status}", status.as_str())
        .replace("{message}", &escape(params.message.as_deref().unwrap_or("")))
        .replace("{path}", &escape(params.path.as_deref().unwrap_or("")));
    (status, Html(body)).into_response()
}
