//! Bookery migration runner entry point.
//!
//! Applies pending schema migrations and exits. Run once at deploy time;
//! re-running against an up-to-date database is a no-op.

use bookery_common::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env for local development
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    info!("Connecting to database");
    let db = bookery_db::init(&config).await?;

    info!("Applying pending migrations");
    bookery_db::migrate(&db).await?;

    info!("Migrations applied");

    db.close().await?;

    Ok(())
}
