use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .route("/api/register", post(handlers::register))
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route("/api/categories/:id", delete(handlers::delete_category))
        .route(
            "/api/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/api/tasks/:id/status", put(handlers::update_task_status))
        .route("/api/tasks/:id", delete(handlers::delete_task))
        .route(
            "/api/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::get_appointment).put(handlers::update_appointment),
        )
        .route(
            "/api/appointments/:id/status",
            put(handlers::update_appointment_status),
        )
        .route("/api/dashboard/data", get(handlers::dashboard_data))
        .route(
            "/api/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/api/profile/password", put(handlers::change_password))
        .with_state(state)
}
