use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use common::types::{DataResponse, MessageResponse};
use models::{EntityPatch, NewEntity};
use models::testimonial::{Testimonial, TestimonialCreate, TestimonialUpdate};
use service::data::TestimonialQuery;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/testimonials", tag = "testimonials",
    responses(
        (status = 200, description = "Approved testimonials, newest first"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<DataResponse<Vec<Testimonial>>>, JsonApiError> {
    match state.data.testimonials(&TestimonialQuery::default()).await {
        Ok(list) => Ok(Json(DataResponse::new(list))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch testimonials")),
    }
}

#[utoipa::path(
    get, path = "/api/testimonials/featured", tag = "testimonials",
    responses(
        (status = 200, description = "Approved and featured testimonials"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn featured(State(state): State<ServerState>) -> Result<Json<DataResponse<Vec<Testimonial>>>, JsonApiError> {
    match state.data.testimonials(&TestimonialQuery::featured()).await {
        Ok(list) => Ok(Json(DataResponse::new(list))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch featured testimonials")),
    }
}

#[utoipa::path(
    post, path = "/api/testimonials", tag = "testimonials",
    request_body = crate::openapi::TestimonialCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TestimonialCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    match state.data.create_testimonial(input).await {
        Ok(id) => {
            info!(%id, "created testimonial");
            Ok(Json(MessageResponse::created("Testimonial created successfully", id)))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to create testimonial")),
    }
}

#[utoipa::path(
    put, path = "/api/testimonials/{id}", tag = "testimonials",
    params(("id" = String, Path, description = "Testimonial ID")),
    request_body = crate::openapi::TestimonialUpdateDoc,
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
    payload: Result<Json<TestimonialUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    match state.data.update_testimonial(&id, &patch).await {
        Ok(true) => {
            info!(%id, "updated testimonial");
            Ok(Json(MessageResponse::ok("Testimonial updated successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Testimonial not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update testimonial")),
    }
}

#[utoipa::path(
    delete, path = "/api/testimonials/{id}", tag = "testimonials",
    params(("id" = String, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.data.delete_testimonial(&id).await {
        Ok(true) => {
            info!(%id, "deleted testimonial");
            Ok(Json(MessageResponse::ok("Testimonial deleted successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Testimonial not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to delete testimonial")),
    }
}
