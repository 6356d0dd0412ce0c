pub mod cli_arguments;
pub mod forward_service;
mod request_id;
mod route;

use std::sync::Arc;

use axum::extract::Request;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};

use crate::forward_service::forward_service::ForwardService;
use crate::request_id::{RelayRequestId, UNKNOWN_REQUEST_ID, X_REQUEST_ID};
use crate::route::forward::forward;
use crate::route::health::health;

#[derive(Clone)]
pub struct ServerState {
    pub forward_service: Arc<dyn ForwardService>,
}

pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", post(forward))
        .with_state(server_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or(UNKNOWN_REQUEST_ID);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            RelayRequestId::default(),
        ))
}
