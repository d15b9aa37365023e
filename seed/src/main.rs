//! Seeds the formation catalogue. Run from the repo root: `cargo run -p certigen-seed`.

use certigen_backend::{connect_store, default_formations, seed_formations, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("certigen_backend=info,certigen_seed=info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = connect_store(&config).await?;
    if let Err(e) = seed_formations(store.as_ref(), &default_formations()).await {
        tracing::error!(error = %e, "Erreur lors du seed des formations");
        return Err(e.into());
    }
    Ok(())
}
