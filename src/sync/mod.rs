//! One reconciliation pass: read the board and the issues, decide, write.

pub mod board;
pub mod executor;
pub mod index;
pub mod reconcile;

use crate::config::AppConfig;
use crate::error::SyncError;
use crate::providers::{BoardSource, IssueTracker};

pub use executor::SyncReport;

/// Runs a full pass. Both reads must succeed before any decision is made;
/// individual write failures are counted in the report instead.
pub async fn run_pass(
    config: &AppConfig,
    source: &dyn BoardSource,
    tracker: &dyn IssueTracker,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let (cards, index) = tokio::try_join!(
        board::read_board(source, &config.trello.board_id, config),
        index::build_index(tracker),
    )?;
    tracing::info!(cards = cards.len(), issues = index.len(), "loaded board and issues");

    let (actions, unchanged) = reconcile::plan(&cards, &index);

    let mut report = if dry_run {
        executor::preview(&actions);
        SyncReport {
            planned: actions.len(),
            ..SyncReport::default()
        }
    } else {
        executor::apply_all(tracker, &actions).await
    };
    report.unchanged = unchanged;

    tracing::info!(
        dry_run,
        planned = report.planned,
        created = report.created,
        updated = report.updated,
        failed = report.failed,
        unchanged = report.unchanged,
        "sync pass finished"
    );
    Ok(report)
}
