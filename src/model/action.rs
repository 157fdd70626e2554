use super::card::ItemState;

/// A single write the executor must perform against GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateIssue {
        title: String,
        labels: Vec<String>,
    },
    UpdateIssue {
        title: String,
        labels: Vec<String>,
        issue_number: u64,
        new_state: ItemState,
    },
}

impl Action {
    pub fn title(&self) -> &str {
        match self {
            Action::CreateIssue { title, .. } | Action::UpdateIssue { title, .. } => title,
        }
    }

    pub fn labels(&self) -> &[String] {
        match self {
            Action::CreateIssue { labels, .. } | Action::UpdateIssue { labels, .. } => labels,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Action::CreateIssue { .. } => "create",
            Action::UpdateIssue { .. } => "edit",
        }
    }
}
