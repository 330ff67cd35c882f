mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // The database is optional: without it the canvas still works, only
    // saving and loading by slug are disabled.
    let db = match std::env::var("DATABASE_URL") {
        Ok(url) => Some(db::init_pool(&url).await.expect("database init failed")),
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; bouquet saving and loading disabled");
            None
        }
    };

    let subscribe_key = std::env::var("BREVO_API_KEY").ok();
    if subscribe_key.is_none() {
        tracing::warn!("BREVO_API_KEY not set; email subscriptions disabled");
    }

    let share_base = std::env::var("SHARE_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

    let state = state::AppState::new(db, subscribe_key, share_base);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bouquet server listening");
    axum::serve(listener, app).await.expect("server failed");
}
