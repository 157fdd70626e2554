use crate::config::AppConfig;
use crate::error::SyncError;
use crate::model::{Card, ItemState};
use crate::providers::{BoardSource, RawCard};

/// Reads every card on `board_id`, archived ones included. Order follows the API.
pub async fn read_board(
    source: &dyn BoardSource,
    board_id: &str,
    config: &AppConfig,
) -> Result<Vec<Card>, SyncError> {
    if board_id.trim().is_empty() {
        return Err(SyncError::InvalidBoardId);
    }
    let raw = source
        .fetch_board_cards(board_id)
        .await
        .map_err(SyncError::BoardFetch)?;
    Ok(raw.into_iter().map(|c| normalize_card(c, config)).collect())
}

/// The issue title is the card name plus its short link, which keeps two
/// cards with the same name apart on GitHub.
pub fn normalize_card(raw: RawCard, config: &AppConfig) -> Card {
    let name = match raw.short_link.as_deref() {
        Some(link) if !link.is_empty() => format!("{} {link}", raw.name),
        _ => raw.name,
    };
    let category = raw
        .labels
        .first()
        .map(|l| l.name.to_lowercase())
        .unwrap_or_default();
    let state = if raw.closed {
        ItemState::Closed
    } else {
        ItemState::Open
    };

    Card {
        label: config.label_for_list(&raw.id_list),
        id: raw.id,
        name,
        list: raw.id_list,
        state,
        category,
        date: raw.due,
        url: raw.short_url,
        comments: raw.badges.comments,
    }
}
