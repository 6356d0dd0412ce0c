use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tower_http::request_id::RequestId;
use tracing::{error, info};

use crate::ServerState;
use crate::forward_service::request::ForwardRequest;
use crate::request_id::UNKNOWN_REQUEST_ID;

pub(crate) const URL_REQUIRED: &str = "URL is required";

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

pub(crate) async fn forward(State(state): State<ServerState>, request: Request<Body>) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or(UNKNOWN_REQUEST_ID)
        .to_string();

    let body_bytes = match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("Reading the body of request {request_id} failed: {err}");
            return bad_request(err.to_string());
        }
    };

    let forward_request: ForwardRequest = match serde_json::from_slice(&body_bytes) {
        Ok(parsed) => parsed,
        Err(err) => {
            info!("Rejecting request {request_id}: {err}");
            return bad_request(format!("Invalid request body: {err}"));
        }
    };

    if forward_request.url.is_empty() {
        info!("Rejecting request {request_id}: no target URL");
        return bad_request(String::from(URL_REQUIRED));
    }

    match state.forward_service.execute(forward_request).await {
        Ok(result) => {
            info!(
                "Request {request_id} forwarded, target answered {} in {}ms",
                result.status, result.response_time_ms
            );

            let status =
                StatusCode::from_u16(result.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            (status, Json(result)).into_response()
        }
        Err(err) => {
            error!("Forwarding request {request_id} failed: {err}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
}
