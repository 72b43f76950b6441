use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use common::types::{DataResponse, MessageResponse};
use models::{EntityPatch, NewEntity};
use models::portfolio::{PortfolioItem, PortfolioItemCreate, PortfolioItemUpdate};
use serde::Deserialize;
use service::data::PortfolioQuery;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PortfolioParams {
    /// Category name; empty or `All` lists everything.
    pub category: Option<String>,
}

#[utoipa::path(
    get, path = "/api/portfolio", tag = "portfolio",
    params(PortfolioParams),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    params: Result<Query<PortfolioParams>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<PortfolioItem>>>, JsonApiError> {
    let Query(params) = params?;
    let query = PortfolioQuery { category: params.category, featured: None };
    match state.data.portfolio_items(&query).await {
        Ok(items) => Ok(Json(DataResponse::new(items))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch portfolio items")),
    }
}

#[utoipa::path(
    get, path = "/api/portfolio/featured", tag = "portfolio",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn featured(State(state): State<ServerState>) -> Result<Json<DataResponse<Vec<PortfolioItem>>>, JsonApiError> {
    match state.data.portfolio_items(&PortfolioQuery::featured()).await {
        Ok(items) => Ok(Json(DataResponse::new(items))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch featured portfolio items")),
    }
}

#[utoipa::path(
    post, path = "/api/portfolio", tag = "portfolio",
    request_body = crate::openapi::PortfolioItemCreateDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<PortfolioItemCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let category = input.category.clone();
    match state.data.create_portfolio_item(input).await {
        Ok(id) => {
            info!(%id, %category, "created portfolio item");
            Ok(Json(MessageResponse::created("Portfolio item created successfully", id)))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to create portfolio item")),
    }
}

#[utoipa::path(
    put, path = "/api/portfolio/{id}", tag = "portfolio",
    params(("id" = String, Path, description = "Portfolio item ID")),
    request_body = crate::openapi::PortfolioItemUpdateDoc,
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
    payload: Result<Json<PortfolioItemUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(patch) = payload?;
    patch.validate()?;
    match state.data.update_portfolio_item(&id, &patch).await {
        Ok(true) => {
            info!(%id, "updated portfolio item");
            Ok(Json(MessageResponse::ok("Portfolio item updated successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Portfolio item not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update portfolio item")),
    }
}

#[utoipa::path(
    delete, path = "/api/portfolio/{id}", tag = "portfolio",
    params(("id" = String, Path, description = "Portfolio item ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.data.delete_portfolio_item(&id).await {
        Ok(true) => {
            info!(%id, "deleted portfolio item");
            Ok(Json(MessageResponse::ok("Portfolio item deleted successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Portfolio item not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to delete portfolio item")),
    }
}
