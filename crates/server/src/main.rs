// triage-server main.rs
// HTTP host for the alert triage pipeline

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_server=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Port from CLI args or environment
    let port: u16 = args
        .iter()
        .position(|a| a == "--port" || a == "-p")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .or_else(|| {
            std::env::var("TRIAGE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(8000);

    let app = triage_server::app();

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Alert triage service running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for ctrl+c");
    tracing::info!("Shutting down...");
}
