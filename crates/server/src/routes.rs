use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::services::{
    company_settings_service::CompanySettingsService, user_service::UserService,
};

pub mod company_settings;
pub mod users;

/// Shared handler state: one service per resource.
#[derive(Clone)]
pub struct ServerState {
    pub users: UserService,
    pub settings: CompanySettingsService,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let users = Router::new()
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user).put(users::update_user));

    let settings = Router::new()
        .route("/companysettings", post(company_settings::save_settings))
        .route(
            "/companysettings/unit-id/:unit_id",
            get(company_settings::get_by_unit_id),
        );

    Router::new()
        .route("/health", get(health))
        .merge(users)
        .merge(settings)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
