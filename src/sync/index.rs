use crate::error::SyncError;
use crate::model::{Issue, IssueIndex, ItemState};
use crate::providers::{IssueTracker, RawIssue};

/// GitHub's maximum `per_page`. Larger repositories are walked page by page.
pub const PAGE_SIZE: u32 = 100;

/// Fetches open and closed issues concurrently and merges them into one index.
pub async fn build_index(tracker: &dyn IssueTracker) -> Result<IssueIndex, SyncError> {
    let (open, closed) = tokio::try_join!(
        tracker.fetch_issues(ItemState::Open, PAGE_SIZE),
        tracker.fetch_issues(ItemState::Closed, PAGE_SIZE),
    )
    .map_err(SyncError::IssueFetch)?;

    let index = IssueIndex::merge(
        open.into_iter().map(Issue::from).collect(),
        closed.into_iter().map(Issue::from).collect(),
    );
    if index.is_empty() {
        tracing::debug!("repository has no issues yet");
    } else {
        tracing::debug!(issues = index.len(), "built issue index");
    }
    Ok(index)
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Issue {
            title: raw.title,
            number: raw.number,
            state: raw.state,
            labels: raw.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::tests::{raw_issue, MockTracker};

    #[tokio::test]
    async fn fetches_both_states_with_page_size() {
        let tracker = MockTracker::with_issues(
            vec![raw_issue("A", 1, ItemState::Open, &["doing"])],
            vec![raw_issue("B", 2, ItemState::Closed, &["done"])],
        );
        let index = build_index(&tracker).await.unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A").unwrap().labels, vec!["doing"]);
        assert_eq!(index.get("B").unwrap().state, ItemState::Closed);

        let mut fetches = tracker.fetches.lock().unwrap().clone();
        fetches.sort_by_key(|(s, _)| s.as_str());
        assert_eq!(
            fetches,
            vec![(ItemState::Closed, PAGE_SIZE), (ItemState::Open, PAGE_SIZE)]
        );
    }

    #[tokio::test]
    async fn closed_issue_wins_title_collision() {
        let tracker = MockTracker::with_issues(
            vec![raw_issue("A", 1, ItemState::Open, &[])],
            vec![raw_issue("A", 2, ItemState::Closed, &[])],
        );
        let index = build_index(&tracker).await.unwrap();
        assert_eq!(index.get("A").unwrap().number, 2);
    }

    #[tokio::test]
    async fn fetch_failure_is_propagated() {
        let tracker = MockTracker {
            fail_fetch: true,
            ..MockTracker::default()
        };
        let result = build_index(&tracker).await;
        assert!(matches!(result, Err(SyncError::IssueFetch(_))));
    }
}
