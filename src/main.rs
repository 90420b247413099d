use petpal::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(startup::session_layer(&config));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server on {}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}
