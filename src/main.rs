use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_directory_in_memory::InMemoryActivityDirectory;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    fmt().with_env_filter(filter).init();

    // Process-lifetime directory; a restart brings back the seed set.
    let directory = Arc::new(InMemoryActivityDirectory::seeded());
    let state = AppState::new(directory, config.capacity);

    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        capacity = ?config.capacity,
        "Activities API: http://{}/activities",
        listener.local_addr()?
    );
    axum::serve(listener, app).await?;
    Ok(())
}
