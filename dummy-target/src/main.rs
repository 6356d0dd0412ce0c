use axum::Json;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use serde_json::json;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    port: u16,
}

async fn json_payload() -> impl IntoResponse {
    Json(json!({ "a": 1 }))
}

async fn text_payload() -> impl IntoResponse {
    "Hello"
}

async fn broken_json() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], "{bad")
}

async fn echo(body: String) -> impl IntoResponse {
    body
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(std::time::Duration::from_secs(15)).await;
    "finally"
}

fn router() -> Router {
    Router::new()
        .route("/json", get(json_payload))
        .route("/text", get(text_payload))
        .route("/broken-json", get(broken_json))
        .route("/echo", post(echo))
        .route("/slow", get(slow))
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .unwrap();
    axum::serve(listener, router()).await.unwrap();
}
