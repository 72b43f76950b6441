//! Visitor submissions (contact form, booking form) and the admin views over them.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use common::types::{DataResponse, MessageResponse};
use models::{EntityPatch, NewEntity};
use models::booking::{BookingRequest, BookingRequestCreate, BookingStatusUpdate};
use models::contact::{ContactMessage, ContactMessageCreate, MessageStatusUpdate};
use serde::Deserialize;
use service::data::StatusQuery;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

const CONTACT_RECEIVED: &str = "הודעתך נשלחה בהצלחה!";
const BOOKING_RECEIVED: &str = "בקשת ההזמנה נשלחה בהצלחה!";

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusParams {
    pub status: Option<String>,
}

impl From<StatusParams> for StatusQuery {
    fn from(p: StatusParams) -> Self { StatusQuery { status: p.status } }
}

#[utoipa::path(
    post, path = "/api/contact", tag = "inbox",
    request_body = crate::openapi::ContactMessageCreateDoc,
    responses(
        (status = 200, description = "Message stored"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Submit Failed")
    )
)]
pub async fn submit_contact(
    State(state): State<ServerState>,
    payload: Result<Json<ContactMessageCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    match state.data.create_contact_message(input).await {
        Ok(id) => {
            info!(%id, "contact message received");
            Ok(Json(MessageResponse::created(CONTACT_RECEIVED, id)))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to submit contact message")),
    }
}

#[utoipa::path(
    post, path = "/api/booking", tag = "inbox",
    request_body = crate::openapi::BookingRequestCreateDoc,
    responses(
        (status = 200, description = "Booking request stored"),
        (status = 400, description = "Validation Error, including an unparsable event date"),
        (status = 500, description = "Submit Failed")
    )
)]
pub async fn submit_booking(
    State(state): State<ServerState>,
    payload: Result<Json<BookingRequestCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(input) = payload?;
    input.validate()?;
    let event_type = input.event_type.clone();
    match state.data.create_booking_request(input).await {
        Ok(id) => {
            info!(%id, %event_type, "booking request received");
            Ok(Json(MessageResponse::created(BOOKING_RECEIVED, id)))
        }
        Err(e) => Err(JsonApiError::from_service(e, "Failed to submit booking request")),
    }
}

#[utoipa::path(
    get, path = "/api/messages", tag = "inbox",
    params(StatusParams),
    responses(
        (status = 200, description = "Contact messages, newest first"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_messages(
    State(state): State<ServerState>,
    params: Result<Query<StatusParams>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<ContactMessage>>>, JsonApiError> {
    let Query(params) = params?;
    match state.data.contact_messages(&params.into()).await {
        Ok(list) => Ok(Json(DataResponse::new(list))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch contact messages")),
    }
}

#[utoipa::path(
    put, path = "/api/messages/{id}", tag = "inbox",
    params(("id" = String, Path, description = "Message ID")),
    request_body = crate::openapi::StatusUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_message(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<MessageStatusUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(update) = payload?;
    update.validate()?;
    match state.data.update_message_status(&id, &update).await {
        Ok(true) => {
            info!(%id, status = %update.status, "message status updated");
            Ok(Json(MessageResponse::ok("Message status updated successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Message not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update message status")),
    }
}

#[utoipa::path(
    delete, path = "/api/messages/{id}", tag = "inbox",
    params(("id" = String, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_message(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.data.delete_contact_message(&id).await {
        Ok(true) => {
            info!(%id, "message deleted");
            Ok(Json(MessageResponse::ok("Message deleted successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Message not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to delete message")),
    }
}

#[utoipa::path(
    get, path = "/api/bookings", tag = "inbox",
    params(StatusParams),
    responses(
        (status = 200, description = "Booking requests, newest first"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_bookings(
    State(state): State<ServerState>,
    params: Result<Query<StatusParams>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<BookingRequest>>>, JsonApiError> {
    let Query(params) = params?;
    match state.data.booking_requests(&params.into()).await {
        Ok(list) => Ok(Json(DataResponse::new(list))),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to fetch booking requests")),
    }
}

#[utoipa::path(
    put, path = "/api/bookings/{id}", tag = "inbox",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = crate::openapi::StatusUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_booking(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<BookingStatusUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    let Json(update) = payload?;
    update.validate()?;
    match state.data.update_booking_status(&id, &update).await {
        Ok(true) => {
            info!(%id, status = %update.status, "booking status updated");
            Ok(Json(MessageResponse::ok("Booking status updated successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Booking not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to update booking status")),
    }
}

#[utoipa::path(
    delete, path = "/api/bookings/{id}", tag = "inbox",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_booking(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<MessageResponse>, JsonApiError> {
    match state.data.delete_booking_request(&id).await {
        Ok(true) => {
            info!(%id, "booking deleted");
            Ok(Json(MessageResponse::ok("Booking deleted successfully")))
        }
        Ok(false) => Err(JsonApiError::not_found("Booking not found")),
        Err(e) => Err(JsonApiError::from_service(e, "Failed to delete booking")),
    }
}
