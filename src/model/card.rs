use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open/closed state shared by Trello cards and GitHub issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemState::Open => "open",
            ItemState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Trello card normalized for reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    /// Title of the matching GitHub issue. Must be unique per repository.
    pub name: String,
    pub list: String,
    pub state: ItemState,
    /// State label mapped from `list`, lower-cased; empty when the list is unmapped.
    pub label: String,
    /// First tag on the card, lower-cased; empty when the card has no tags.
    pub category: String,
    pub date: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub comments: u32,
}

impl Card {
    /// Labels to put on the GitHub issue: the state label, then the category if any.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = vec![self.label.clone()];
        if !self.category.is_empty() {
            labels.push(self.category.clone());
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(label: &str, category: &str) -> Card {
        Card {
            id: "c1".into(),
            name: "Fix bug X-123".into(),
            list: "l1".into(),
            state: ItemState::Open,
            label: label.into(),
            category: category.into(),
            date: None,
            url: None,
            comments: 0,
        }
    }

    #[test]
    fn labels_include_category_when_present() {
        assert_eq!(card("doing", "bug").labels(), vec!["doing", "bug"]);
    }

    #[test]
    fn labels_never_contain_empty_category() {
        assert_eq!(card("doing", "").labels(), vec!["doing"]);
        assert_eq!(card("", "").labels(), vec![""]);
    }

    #[test]
    fn state_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemState::Closed).unwrap(), "\"closed\"");
        let state: ItemState = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(state, ItemState::Open);
    }
}
