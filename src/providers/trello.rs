use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{check_status, BoardSource, RawCard};
use crate::config::TrelloConfig;

const DEFAULT_BASE: &str = "https://api.trello.com/1";
const CARD_FIELDS: &str = "id,name,idList,due,shortUrl,shortLink,closed,badges,labels";

pub struct TrelloClient {
    api_key: String,
    token: String,
    base: String,
    client: reqwest::Client,
}

impl TrelloClient {
    pub fn new(config: &TrelloConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE)
    }

    pub fn with_base_url(config: &TrelloConfig, base: &str) -> Self {
        Self {
            api_key: config.api_key.clone(),
            token: config.token.clone(),
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn auth_params(&self) -> [(&str, &str); 2] {
        [("key", &self.api_key), ("token", &self.token)]
    }
}

#[async_trait]
impl BoardSource for TrelloClient {
    async fn fetch_board_cards(&self, board_id: &str) -> Result<Vec<RawCard>> {
        // filter=all includes archived cards, which map to closed issues.
        let resp = self
            .client
            .get(format!("{}/boards/{board_id}/cards", self.base))
            .query(&self.auth_params())
            .query(&[("filter", "all"), ("fields", CARD_FIELDS)])
            .send()
            .await
            .context("Trello boards/cards request failed")?;

        let cards: Vec<RawCard> = check_status(resp, "Trello boards/cards")
            .await?
            .json()
            .await
            .context("Failed to parse Trello cards")?;

        tracing::debug!(board_id, count = cards.len(), "fetched Trello cards");
        Ok(cards)
    }
}
