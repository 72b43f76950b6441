use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use common::types::{DataResponse, MessageResponse};
use models::setting::{SettingUpdate, SettingValue};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/settings", tag = "settings",
    responses(
        (status = 200, description = "All settings as key -> value"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<DataResponse<BTreeMap<String, SettingValue>>>, JsonApiError> {
    match state.data.all_settings().await {
        Ok(all) => Ok(Json(DataResponse::new(all))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch settings")),
    }
}

#[utoipa::path(
    get, path = "/api/settings/{key}", tag = "settings",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(key): Path<String>) -> Result<Json<DataResponse<SettingValue>>, JsonApiError> {
    match state.data.setting(&key).await {
        Ok(Some(value)) => Ok(Json(DataResponse::new(value))),
        Ok(None) => Err(JsonApiError::not_found("Setting not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch setting")),
    }
}

#[utoipa::path(
    put, path = "/api/settings/{key}", tag = "settings",
    params(("key" = String, Path, description = "Setting key")),
    request_body = crate::openapi::SettingUpdateDoc,
    responses(
        (status = 200, description = "Stored (created or replaced)"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn put(
    State(state): State<ServerState>,
    Path(key): Path<String>,
    payload: Result<Json<SettingUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(SettingUpdate { value }) = payload?;
    match state.data.set_setting(&key, value).await {
        Ok(_) => {
            info!(%key, "setting stored");
            Ok(Json(MessageResponse::ok("Setting updated successfully")))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update setting")),
    }
}
