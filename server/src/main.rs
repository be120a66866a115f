//! SSR host for the Showcase Admin console.
//!
//! Serves the Leptos app and its compiled assets, nothing more: the console
//! talks to the external showcase backend directly from the browser.

#![recursion_limit = "512"]

mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let app = routes::app().expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "showcase admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
