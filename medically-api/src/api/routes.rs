use axum::{routing::get, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{clinics, diseases, health, meds, messages, users};
use crate::api::state::AppState;
use crate::openapi;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    debug!("Creating application router");

    let record_routes = Router::new()
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/:id",
            get(users::get_user).put(users::update_user).delete(users::delete_user),
        )
        .route("/med", get(meds::list_meds).post(meds::create_med))
        .route(
            "/med/:id",
            get(meds::get_med).put(meds::update_med).delete(meds::delete_med),
        )
        .route("/disease", get(diseases::list_diseases).post(diseases::create_disease))
        .route(
            "/disease/:id",
            get(diseases::get_disease)
                .put(diseases::update_disease)
                .delete(diseases::delete_disease),
        )
        .route("/clinic", get(clinics::list_clinics).post(clinics::create_clinic))
        .route(
            "/clinic/:id",
            get(clinics::get_clinic).put(clinics::update_clinic).delete(clinics::delete_clinic),
        );

    debug!("Record routes configured");

    let public_routes = Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health_check))
        .route("/healthcheck", get(health::health_check))
        .route("/count", get(messages::count_messages))
        .route("/add-message", post(messages::add_message))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    debug!("Public routes configured");

    Router::new()
        .merge(public_routes)
        .merge(record_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
