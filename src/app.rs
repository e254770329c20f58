use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/activities", post(handlers::form_save))
        .route("/activities/clear", post(handlers::form_clear))
        .route("/activities/:id/edit", post(handlers::form_edit))
        .route("/activities/:id/delete", post(handlers::form_delete))
        .route(
            "/api/activities",
            get(handlers::list_activities)
                .post(handlers::save_activity)
                .delete(handlers::clear_activities),
        )
        .route("/api/activities/:id", delete(handlers::delete_activity))
        .route("/api/active", post(handlers::set_active))
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
}
