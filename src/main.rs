//! certiGen backend server: loads config, connects storage, serves the `/api` router.

use certigen_backend::{app, connect_store, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("certigen_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;
    let router = app(AppState::new(store));

    if config.test_mode {
        tracing::info!("APP_ENV=test: listener not started");
        return Ok(());
    }

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("certiGen backend lancé sur http://localhost:{}", config.port);
    axum::serve(listener, router).await?;
    Ok(())
}
