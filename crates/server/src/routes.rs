use axum::{
    http::StatusCode,
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::{errors::JsonApiError, openapi::ApiDoc, state::ServerState};

pub mod inbox;
pub mod offerings;
pub mod portfolio;
pub mod settings;
pub mod testimonials;

#[utoipa::path(
    get, path = "/api/", tag = "health",
    responses((status = 200, description = "Service banner", body = crate::openapi::RootResponse))
)]
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Jewish Event Photography API is running",
        "status": "healthy",
    }))
}

#[utoipa::path(
    get, path = "/api/health", tag = "health",
    responses(
        (status = 200, description = "Store reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Store unreachable")
    )
)]
pub async fn health(State(state): State<ServerState>) -> Result<Json<Health>, JsonApiError> {
    match state.data.ping().await {
        Ok(()) => Ok(Json(Health { status: "ok" })),
        Err(e) => {
            warn!(err = %e, "health check failed");
            Err(JsonApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", Some("document store unreachable".into())))
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router for the `/api` surface.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/health", get(health))
        .route("/api/openapi.json", get(openapi_json));

    let catalog = Router::new()
        .route("/api/portfolio", get(portfolio::list).post(portfolio::create))
        .route("/api/portfolio/featured", get(portfolio::featured))
        .route("/api/portfolio/:id", put(portfolio::update).delete(portfolio::delete))
        .route("/api/services", get(offerings::list).post(offerings::create))
        .route("/api/services/:id", put(offerings::update).delete(offerings::delete))
        .route("/api/testimonials", get(testimonials::list).post(testimonials::create))
        .route("/api/testimonials/featured", get(testimonials::featured))
        .route("/api/testimonials/:id", put(testimonials::update).delete(testimonials::delete));

    let inbox_routes = Router::new()
        .route("/api/contact", post(inbox::submit_contact))
        .route("/api/booking", post(inbox::submit_booking))
        .route("/api/messages", get(inbox::list_messages))
        .route("/api/messages/:id", put(inbox::update_message).delete(inbox::delete_message))
        .route("/api/bookings", get(inbox::list_bookings))
        .route("/api/bookings/:id", put(inbox::update_booking).delete(inbox::delete_booking));

    let settings_routes = Router::new()
        .route("/api/settings", get(settings::list))
        .route("/api/settings/:key", get(settings::get).put(settings::put));

    public
        .merge(catalog)
        .merge(inbox_routes)
        .merge(settings_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use service::{storage::JsonDocumentStore, DataService};
    use tower::ServiceExt;

    fn app() -> Router {
        let data = DataService::new(JsonDocumentStore::in_memory());
        build_router(ServerState::new(data), CorsLayer::very_permissive())
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json)?)
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(req.body(body)?).await?;
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, json))
    }

    #[tokio::test]
    async fn root_and_health() -> anyhow::Result<()> {
        let app = app();
        let (status, body) = call(&app, Method::GET, "/api/", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = call(&app, Method::GET, "/api/health", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        Ok(())
    }

    #[tokio::test]
    async fn update_with_no_fields_is_bad_request() -> anyhow::Result<()> {
        let app = app();
        let payload = serde_json::json!({
            "name": "Cohen", "event": "Bar Mitzvah", "text": "Great", "rating": 5
        });
        let (_, created) = call(&app, Method::POST, "/api/testimonials", Some(payload)).await?;
        let id = created["id"].as_str().unwrap_or_default().to_string();

        let (status, body) = call(&app, Method::PUT, &format!("/api/testimonials/{id}"), Some(serde_json::json!({}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["detail"], "No fields to update");

        let (status, _) = call(&app, Method::PUT, "/api/testimonials/unknown", Some(serde_json::json!({"rating": 4}))).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn rating_out_of_range_rejected() -> anyhow::Result<()> {
        let app = app();
        let payload = serde_json::json!({
            "name": "Cohen", "event": "Bar Mitzvah", "text": "Great", "rating": 7
        });
        let (status, body) = call(&app, Method::POST, "/api/testimonials", Some(payload)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation Error");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_uses_error_envelope() -> anyhow::Result<()> {
        let app = app();
        let (status, body) = call(&app, Method::POST, "/api/contact", Some(serde_json::json!({"name": "only"}))).await?;
        assert!(status.is_client_error());
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid Payload");
        Ok(())
    }

    #[tokio::test]
    async fn settings_not_found_then_upserted() -> anyhow::Result<()> {
        let app = app();
        let (status, _) = call(&app, Method::GET, "/api/settings/contact_info", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let value = serde_json::json!({"value": {"phone": "050-123-4567"}});
        let (status, _) = call(&app, Method::PUT, "/api/settings/contact_info", Some(value)).await?;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&app, Method::GET, "/api/settings/contact_info", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["phone"], "050-123-4567");
        Ok(())
    }

    #[tokio::test]
    async fn settings_accept_free_form_keys() -> anyhow::Result<()> {
        let app = app();
        let value = serde_json::json!({"value": {"title": "ברוכים הבאים"}});
        let (status, _) = call(&app, Method::PUT, "/api/settings/hero%20banner", Some(value.clone())).await?;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, Method::PUT, "/api/settings/%D7%A2%D7%91%D7%A8%D7%99%D7%AA", Some(value)).await?;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call(&app, Method::GET, "/api/settings", None).await?;
        assert_eq!(body["data"]["hero banner"]["title"], "ברוכים הבאים");
        assert!(body["data"]["עברית"].is_object());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_status_rejected_before_storage() -> anyhow::Result<()> {
        let app = app();
        let (_, created) = call(&app, Method::POST, "/api/contact", Some(serde_json::json!({"name": "Dana", "phone": "050"}))).await?;
        let id = created["id"].as_str().unwrap_or_default().to_string();

        let (status, body) = call(&app, Method::PUT, &format!("/api/messages/{id}"), Some(serde_json::json!({"status": "archived"}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation Error");

        let (_, body) = call(&app, Method::GET, "/api/messages?status=new", None).await?;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() -> anyhow::Result<()> {
        let app = app();
        let (status, body) = call(&app, Method::GET, "/api/openapi.json", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/portfolio"].is_object());
        assert!(body["paths"]["/api/settings/{key}"].is_object());
        Ok(())
    }
}
