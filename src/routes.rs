use crate::{
    routes::{
        index::get_index_route,
        students::{get_add_student_form, get_students, post_students},
    },
    state::TrackerState,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod student_pages;
pub mod students;

pub fn app(state: TrackerState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", get(get_students).post(post_students))
        .route("/students/new", get(get_add_student_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
