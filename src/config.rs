//! Configuration management for vocadeck.
//!
//! This module loads configuration values from environment variables and
//! `.env` files. The Notion credential and database id are required; nothing
//! is ever hard-coded.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

pub const NOTION_API_KEY: &str = "NOTION_API_KEY";
pub const NOTION_DB_ID: &str = "NOTION_DB_ID";
pub const NOTION_API_URL: &str = "NOTION_API_URL";
pub const GENRE_TABS: &str = "VOCADECK_GENRE_TABS";
pub const AUDIO_PLAYER: &str = "VOCADECK_AUDIO_PLAYER";

pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";
/// API revision sent in the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_AUDIO_PLAYER: &str = "ffplay -nodisp -autoexit -loglevel error";

/// Loads environment variables from `.env` files.
///
/// Creates the `vocadeck` directory in the platform-specific local data
/// directory if it doesn't exist, then loads `vocadeck/.env` from there and
/// finally a `.env` in the working directory. Variables that are already set
/// are never overridden. A missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/vocadeck/.env`
/// - macOS: `~/Library/Application Support/vocadeck/.env`
/// - Windows: `%LOCALAPPDATA%/vocadeck/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vocadeck/.env");
    path
}

/// Connection settings for the Notion database query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionConfig {
    pub api_key: String,
    pub database_id: String,
    pub api_url: String,
}

impl NotionConfig {
    /// Reads the Notion settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `NOTION_API_KEY` or
    /// `NOTION_DB_ID` is unset or blank, and [`ConfigError::Invalid`] when
    /// either value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the Notion settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, NOTION_API_KEY)?;
        let database_id = required(&lookup, NOTION_DB_ID)?;

        if api_key.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                var: NOTION_API_KEY,
                reason: "must not contain whitespace".to_string(),
            });
        }

        let compact: String = database_id.chars().filter(|c| *c != '-').collect();
        if compact.len() != 32 || !compact.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Invalid {
                var: NOTION_DB_ID,
                reason: "expected a 32 character hexadecimal database id".to_string(),
            });
        }

        let api_url = lookup(NOTION_API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_key,
            database_id,
            api_url,
        })
    }

    pub fn query_url(&self) -> String {
        format!(
            "{uri}/databases/{id}/query",
            uri = self.api_url,
            id = self.database_id
        )
    }
}

/// Optional behaviour of the deck itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSettings {
    pub genre_tabs: bool,
    pub audio_player: String,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            genre_tabs: false,
            audio_player: DEFAULT_AUDIO_PLAYER.to_string(),
        }
    }
}

impl DeckSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            genre_tabs: lookup(GENRE_TABS)
                .map(|v| is_truthy(&v))
                .unwrap_or(defaults.genre_tabs),
            audio_player: lookup(AUDIO_PLAYER)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.audio_player),
        }
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
