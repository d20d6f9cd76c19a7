// Background refresh worker: rebuilds the clan summary on a fixed interval
// and prints the console report.

use std::sync::Arc;

use tokio::time::{Duration, interval};

use crate::collector::Collector;
use crate::report;

/// Collector handle and shutdown channel for the worker.
pub struct WorkerDeps {
    pub collector: Arc<Collector>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct WorkerConfig {
    pub refresh_interval_secs: u64,
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        collector,
        mut shutdown_rx,
    } = deps;

    tokio::spawn(async move {
        // first tick fires immediately, so a report is printed at startup
        let mut tick = interval(Duration::from_secs(config.refresh_interval_secs));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    match collector.clan_summary().await {
                        Some(summary) => {
                            tracing::info!(
                                operation = "refresh_summary",
                                total_members = summary.member_stats.total_members,
                                online_members = summary.member_stats.online_members,
                                "clan summary refreshed"
                            );
                            println!("{}", report::render(&summary));
                        }
                        None => {
                            tracing::warn!(
                                operation = "refresh_summary",
                                "clan summary unavailable"
                            );
                            println!("{}", report::FETCH_FAILED_MESSAGE);
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            }
        }
    })
}
