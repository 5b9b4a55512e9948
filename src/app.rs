use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/options", get(handlers::get_options))
        .route(
            "/api/habits",
            get(handlers::list_habits).post(handlers::create_habit),
        )
        .route(
            "/api/habits/:id",
            get(handlers::get_habit)
                .put(handlers::update_habit)
                .delete(handlers::delete_habit),
        )
        .route(
            "/api/habits/:id/entries/:date",
            get(handlers::get_entry).put(handlers::set_entry),
        )
        .route("/api/preview", post(handlers::preview))
        .route("/api/export", get(handlers::export_habits))
        .route("/api/import", post(handlers::import_habits))
        .with_state(state)
}
