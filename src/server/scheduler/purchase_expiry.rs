use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;

use crate::server::{error::AppError, service::purchase::PurchaseService};

/// Starts the purchase expiry scheduler.
///
/// On every tick the job marks active purchases whose end date has passed as expired.
/// Failures are logged and the job keeps its schedule.
///
/// # Arguments
/// - `db` - Database connection
/// - `schedule` - Six-field cron expression (seconds first)
/// - `cancel` - Token that stops pending and in-flight runs once cancelled
///
/// # Returns
/// - `Ok(JobScheduler)` - Started scheduler; the caller shuts it down
/// - `Err(AppError::SchedulerErr)` - Invalid schedule or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    schedule: &str,
    cancel: CancellationToken,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let cancel = cancel.clone();

        Box::pin(async move {
            match run_expiry(&db, &cancel).await {
                Ok(Some(_)) => {}
                Ok(None) => tracing::debug!("Purchase expiry skipped, shutting down"),
                Err(e) => tracing::error!("Error expiring purchases: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Purchase expiry scheduler started ({})", schedule);

    Ok(scheduler)
}

/// Runs one expiry pass unless `cancel` fires first.
///
/// # Returns
/// - `Ok(Some(u64))` - Number of purchases expired
/// - `Ok(None)` - Cancelled before the pass completed
/// - `Err(AppError)` - Database error
async fn run_expiry(
    db: &DatabaseConnection,
    cancel: &CancellationToken,
) -> Result<Option<u64>, AppError> {
    if cancel.is_cancelled() {
        return Ok(None);
    }

    let service = PurchaseService::new(db);

    tokio::select! {
        _ = cancel.cancelled() => Ok(None),
        expired = service.expire_overdue(Utc::now()) => expired.map(Some),
    }
}
