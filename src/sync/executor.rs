use futures::stream::{self, StreamExt};

use crate::model::Action;
use crate::providers::IssueTracker;

/// Upper bound on concurrent GitHub writes, to stay clear of secondary rate limits.
const MAX_IN_FLIGHT: usize = 4;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Actions the reconciler produced, whether or not they were applied.
    pub planned: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
    pub unchanged: usize,
}

/// Applies one action. Failures are logged and reported as `false`, never raised.
pub async fn apply(tracker: &dyn IssueTracker, action: &Action) -> bool {
    let result = match action {
        Action::CreateIssue { title, labels } => tracker.create_issue(title, labels).await,
        Action::UpdateIssue {
            title,
            labels,
            issue_number,
            new_state,
        } => {
            tracker
                .edit_issue(*issue_number, title, labels, *new_state)
                .await
        }
    };

    match result {
        Ok(()) => {
            match action {
                Action::CreateIssue { title, labels } => {
                    tracing::info!(%title, ?labels, "created issue");
                }
                Action::UpdateIssue {
                    title,
                    labels,
                    issue_number,
                    new_state,
                } => {
                    tracing::info!(%title, ?labels, issue = issue_number, state = %new_state, "edited issue");
                }
            }
            true
        }
        Err(e) => {
            let error = format!("{e:#}");
            tracing::error!(
                action = action.verb(),
                title = %action.title(),
                labels = ?action.labels(),
                %error,
                "failed to apply action"
            );
            false
        }
    }
}

/// Applies every action with bounded concurrency. One failed write never stops the rest.
pub async fn apply_all(tracker: &dyn IssueTracker, actions: &[Action]) -> SyncReport {
    let outcomes: Vec<(&Action, bool)> = stream::iter(actions)
        .map(|action| async move { (action, apply(tracker, action).await) })
        .buffer_unordered(MAX_IN_FLIGHT)
        .collect()
        .await;

    let mut report = SyncReport {
        planned: actions.len(),
        ..SyncReport::default()
    };
    for (action, ok) in outcomes {
        match (action, ok) {
            (_, false) => report.failed += 1,
            (Action::CreateIssue { .. }, true) => report.created += 1,
            (Action::UpdateIssue { .. }, true) => report.updated += 1,
        }
    }
    report
}

/// Logs what would be applied without touching GitHub.
pub fn preview(actions: &[Action]) {
    for action in actions {
        match action {
            Action::CreateIssue { title, labels } => {
                tracing::info!(%title, ?labels, "dry run: would create issue");
            }
            Action::UpdateIssue {
                title,
                labels,
                issue_number,
                new_state,
            } => {
                tracing::info!(%title, ?labels, issue = issue_number, state = %new_state, "dry run: would edit issue");
            }
        }
    }
}
