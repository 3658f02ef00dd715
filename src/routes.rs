use crate::{
    routes::students::{delete_student, get_student, get_students, post_student, put_student},
    state::RosterState,
};
use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod students;

pub fn app(state: RosterState) -> Router {
    Router::new()
        .route("/students", get(get_students).post(post_student))
        .route(
            "/students/{id}",
            get(get_student).put(put_student).delete(delete_student),
        )
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
