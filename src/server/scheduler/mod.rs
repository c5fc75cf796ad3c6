//! Background jobs driven by `tokio-cron-scheduler`.
//!
//! The process supervisor owns the returned `JobScheduler` and the
//! `CancellationToken` handed to each job, and shuts both down on exit.

pub mod purchase_expiry;
