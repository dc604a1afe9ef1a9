mod page;
mod routes;

use anyhow::Result;
use hackrx_client::{FormController, FrontendConfig};
use routes::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FrontendConfig::from_env()?;
    let controller = FormController::new(&config)?;
    let app = routes::router(AppState {
        controller: Arc::new(controller),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", config.bind_addr, e))?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
