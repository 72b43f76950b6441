use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use common::types::{DataResponse, MessageResponse};
use models::{EntityPatch, NewEntity};
use models::offering::{ServiceOffering, ServiceOfferingCreate, ServiceOfferingUpdate};
use service::data::ServiceQuery;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    responses(
        (status = 200, description = "Active services ordered for display"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<DataResponse<Vec<ServiceOffering>>>, JsonApiError> {
    match state.data.services(&ServiceQuery::default()).await {
        Ok(services) => Ok(Json(DataResponse::new(services))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch services")),
    }
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::ServiceOfferingCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ServiceOfferingCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    match state.data.create_service(input).await {
        Ok(id) => {
            info!(%id, "created service");
            Ok(Json(MessageResponse::created("Service created successfully", id)))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to create service")),
    }
}

#[utoipa::path(
    put, path = "/api/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service ID")),
    request_body = crate::openapi::ServiceOfferingUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ServiceOfferingUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    match state.data.update_service(&id, &patch).await {
        Ok(true) => {
            info!(%id, "updated service");
            Ok(Json(MessageResponse::ok("Service updated successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Service not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update service")),
    }
}

#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.data.delete_service(&id).await {
        Ok(true) => {
            info!(%id, "deleted service");
            Ok(Json(MessageResponse::ok("Service deleted successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Service not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to delete service")),
    }
}
