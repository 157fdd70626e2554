use std::collections::HashMap;

use super::card::ItemState;

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub title: String,
    pub number: u64,
    pub state: ItemState,
    /// Label names as GitHub returns them; compare case-insensitively.
    pub labels: Vec<String>,
}

impl Issue {
    pub fn has_label(&self, label: &str) -> bool {
        !label.is_empty() && self.labels.iter().any(|l| l.to_lowercase() == label)
    }
}

/// Title-keyed lookup of every issue in a repository, open and closed.
#[derive(Debug, Clone, Default)]
pub struct IssueIndex {
    by_title: HashMap<String, Issue>,
}

impl IssueIndex {
    /// Builds the index from both state fetches. On a title collision the
    /// closed issue wins because it is inserted last.
    pub fn merge(open: Vec<Issue>, closed: Vec<Issue>) -> Self {
        let mut index = Self::default();
        index.extend(open);
        index.extend(closed);
        index
    }

    pub fn get(&self, title: &str) -> Option<&Issue> {
        self.by_title.get(title)
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}

impl Extend<Issue> for IssueIndex {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.by_title.insert(issue.title.clone(), issue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: &str, number: u64, state: ItemState) -> Issue {
        Issue {
            title: title.into(),
            number,
            state,
            labels: vec![],
        }
    }

    #[test]
    fn merge_keeps_both_states() {
        let index = IssueIndex::merge(
            vec![issue("A", 1, ItemState::Open)],
            vec![issue("B", 2, ItemState::Closed)],
        );
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("A").unwrap().number, 1);
        assert_eq!(index.get("B").unwrap().number, 2);
    }

    #[test]
    fn closed_fetch_wins_on_collision() {
        let index = IssueIndex::merge(
            vec![issue("A", 1, ItemState::Open)],
            vec![issue("A", 9, ItemState::Closed)],
        );
        assert_eq!(index.len(), 1);
        let a = index.get("A").unwrap();
        assert_eq!(a.number, 9);
        assert_eq!(a.state, ItemState::Closed);
    }

    #[test]
    fn has_label_ignores_case() {
        let mut i = issue("A", 1, ItemState::Open);
        i.labels = vec!["Doing".into(), "bug".into()];
        assert!(i.has_label("doing"));
        assert!(!i.has_label("done"));
    }

    #[test]
    fn empty_label_never_matches() {
        let mut i = issue("A", 1, ItemState::Open);
        i.labels = vec!["".into()];
        assert!(!i.has_label(""));
    }
}
