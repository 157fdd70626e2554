pub mod action;
pub mod card;
pub mod issue;

pub use action::Action;
pub use card::{Card, ItemState};
pub use issue::{Issue, IssueIndex};
