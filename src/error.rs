use thiserror::Error;

/// Failures that stop a sync pass before any GitHub write happens.
///
/// Per-action write failures are not represented here: the executor logs them
/// and carries on with the remaining actions.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("board id must not be blank")]
    InvalidBoardId,

    #[error("failed to read Trello board: {0:#}")]
    BoardFetch(anyhow::Error),

    #[error("failed to read GitHub issues: {0:#}")]
    IssueFetch(anyhow::Error),
}
