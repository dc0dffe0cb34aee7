mod config;
mod icons;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    // The page is useless without the client script.
    hx::HTMX.verify().expect("htmx payload missing from build");
    tracing::info!(bytes = hx::HTMX.len(), etag = hx::HTMX.etag(), "htmx asset embedded");

    let state = state::AppState::new();
    let app = routes::app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "hxdemo listening");
    axum::serve(listener, app).await.expect("server failed");
}
