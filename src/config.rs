use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub trello: TrelloConfig,
    pub github: GitHubConfig,
    /// Trello list id -> GitHub state label.
    #[serde(default)]
    pub lists_mapping: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloConfig {
    pub board_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    pub owner: String,
    pub repo: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl GitHubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// State label for a Trello list, lower-cased. Unmapped lists give an empty label.
    pub fn label_for_list(&self, list_id: &str) -> String {
        self.lists_mapping
            .get(list_id)
            .map(|l| l.to_lowercase())
            .unwrap_or_default()
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRELLO_API_KEY") {
            self.trello.api_key = v;
        }
        if let Some(v) = lookup("TRELLO_TOKEN") {
            self.trello.token = v;
        }
        if let Some(v) = lookup("GITHUB_TOKEN") {
            self.github.token = v;
        }
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("trello.board_id", &self.trello.board_id),
            ("trello.api_key", &self.trello.api_key),
            ("trello.token", &self.trello.token),
            ("github.owner", &self.github.owner),
            ("github.repo", &self.github.repo),
            ("github.token", &self.github.token),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                bail!("Missing required setting `{key}`");
            }
        }
        if self.github.timeout_secs == 0 {
            bail!("`github.timeout_secs` must be greater than zero");
        }
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".trello-github")
        .join("config.toml")
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents, |key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .with_context(|| format!("Invalid config in {}", path.display()))
}

fn parse_config<F>(contents: &str, env: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: AppConfig = toml::from_str(contents).context("Failed to parse config TOML")?;
    config.apply_env(env);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
pub fn test_config() -> AppConfig {
    AppConfig {
        trello: TrelloConfig {
            board_id: "board".into(),
            api_key: "k".into(),
            token: "t".into(),
        },
        github: GitHubConfig {
            owner: "acme".into(),
            repo: "widgets".into(),
            token: "g".into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        },
        lists_mapping: [
            ("l-doing".to_string(), "Doing".to_string()),
            ("l-done".to_string(), "Done".to_string()),
        ]
        .into_iter()
        .collect(),
    }
}
