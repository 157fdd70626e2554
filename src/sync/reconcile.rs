use crate::model::{Action, Card, IssueIndex, ItemState};

/// Decides what, if anything, must change on GitHub for `card`.
///
/// Matching is by exact title. Titles are assumed unique per repository; the
/// board reader guarantees this by suffixing card names with their short link.
///
/// An existing issue is updated when its state differs from the card's or when
/// none of its labels equals the card's state label. An empty state label never
/// matches, so issues for cards on unmapped lists are always re-asserted.
pub fn reconcile(card: &Card, index: &IssueIndex) -> Option<Action> {
    let Some(issue) = index.get(&card.name) else {
        return match card.state {
            ItemState::Open => Some(Action::CreateIssue {
                title: card.name.clone(),
                labels: card.labels(),
            }),
            ItemState::Closed => None,
        };
    };

    let state_drift = card.state != issue.state;
    let state_label_found = issue.has_label(&card.label);

    if state_drift || !state_label_found {
        Some(Action::UpdateIssue {
            title: card.name.clone(),
            labels: card.labels(),
            issue_number: issue.number,
            new_state: card.state,
        })
    } else {
        None
    }
}

/// Reconciles every card, returning the actions together with the number of
/// cards that needed nothing.
pub fn plan(cards: &[Card], index: &IssueIndex) -> (Vec<Action>, usize) {
    let mut actions = Vec::new();
    for card in cards {
        match reconcile(card, index) {
            Some(action) => actions.push(action),
            None => tracing::debug!(
                id = %card.id,
                list = %card.list,
                title = %card.name,
                url = ?card.url,
                due = ?card.date,
                comments = card.comments,
                "card needs no change"
            ),
        }
    }
    let unchanged = cards.len() - actions.len();
    (actions, unchanged)
}
