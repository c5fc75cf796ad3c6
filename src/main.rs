mod model;
mod server;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::server::{
    config::Config, error::AppError, router, scheduler::purchase_expiry, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;

    let cancel = CancellationToken::new();
    let mut scheduler = purchase_expiry::start_scheduler(
        db.clone(),
        &config.purchase_expiry_schedule,
        cancel.clone(),
    )
    .await?;

    let app = router::router().with_state(AppState::new(db.clone()));

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await;

    cancel.cancel();
    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop scheduler: {}", e);
    }
    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database: {}", e);
    }

    tracing::info!("Server stopped");

    Ok(served?)
}
