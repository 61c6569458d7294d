//! Router creation and configuration
//!
//! Creates the Axum router for all REST API endpoints.

use super::handlers::*;
use super::profile::me;
use super::types::{AppState, Envelope};
use crate::error::INTERNAL_ERROR_MESSAGE;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Router options not carried in [`AppState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    /// Attach a permissive CORS layer
    pub enable_cors: bool,
}

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    create_router_with_options(state, RouterOptions::default())
}

/// Create REST API router with optional layers
pub fn create_router_with_options(state: AppState, options: RouterOptions) -> Router {
    let course_routes = Router::new()
        .route("/", get(list_students))
        .route(
            "/courses",
            get(list_courses)
                .post(create_course)
                .put(update_course)
                .delete(delete_course),
        )
        .route("/courses/:course_id", get(get_course))
        .route("/students/:student_id/courses", get(student_courses));

    let router = Router::new()
        .route("/", get(health))
        .route("/me", get(me))
        .nest("/api/v2", course_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    if options.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::failure(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
