use std::sync::Arc;

use clap::Parser;
use request_relay::cli_arguments::CliArguments;
use request_relay::forward_service::reqwest_forward_service::ReqwestForwardService;
use request_relay::{ServerState, router};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let tcp_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .unwrap();

    info!("Server started on port {}", args.port);

    let state = ServerState {
        forward_service: Arc::new(ReqwestForwardService::new()),
    };

    axum::serve(tcp_listener, router(state)).await.unwrap();
}
