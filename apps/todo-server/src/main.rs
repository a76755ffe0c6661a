use anyhow::Context;
use todo_server::{
  app::{self, AppState},
  config::Config,
  telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = Config::load().context("failed to load configuration")?;
  telemetry::init(&config.log);

  let state = AppState::from_config(&config.storage).context("failed to open todo store")?;

  let listener = tokio::net::TcpListener::bind(config.server.bind)
    .await
    .with_context(|| format!("failed to bind {}", config.server.bind))?;

  tracing::info!(addr = %listener.local_addr()?, "todo api listening");

  axum::serve(listener, app::router(state, &config.openapi))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::error!(%err, "failed to listen for ctrl-c");
  }

  tracing::info!("shutting down");
}
