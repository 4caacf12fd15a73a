use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::company_settings::CompanySettings;

use crate::routes::ServerState;

/// Settings lookup for a unit. The backing store is a stub, so this
/// always succeeds.
pub async fn get_by_unit_id(
    State(state): State<ServerState>,
    Path(unit_id): Path<String>,
) -> Json<CompanySettings> {
    Json(state.settings.get_settings_by_unit_id(&unit_id))
}

/// Accept a settings payload and return an empty 200. The store logs
/// and discards it.
pub async fn save_settings(
    State(state): State<ServerState>,
    Json(settings): Json<CompanySettings>,
) -> StatusCode {
    state.settings.save_settings(&settings);
    StatusCode::OK
}
