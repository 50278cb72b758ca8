//! # Notion Integration Module
//!
//! This module is the record fetcher: it queries a Notion database once and
//! normalizes every returned page into a [`WordRecord`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (deck, list, genres, play)
//!          ↓
//! Notion Integration Layer
//!     ├── Query   (one POST /databases/{id}/query)
//!     └── Mapping (page properties → WordRecord)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Notion API
//! ```
//!
//! ## Columns
//!
//! The database is expected to carry these columns. Only the title column is
//! required by the query itself, since the results are sorted on it.
//!
//! | column | type | record field |
//! |---|---|---|
//! | `単語` | title | `word` |
//! | `意味` | rich text | `meaning` |
//! | `発音記号` | rich text | `ipa` |
//! | `カタカナ発音` | rich text | `katakana` |
//! | `ジャンル` | select | `genre` |
//! | `メモ` | rich text | `memo` |
//! | `例文` | rich text | `example` |
//! | `音声` | url | `audio_url` |
//! | `動画` | url | `video_url` |
//!
//! ## Error Handling
//!
//! A request is sent exactly once. Network failures, non-success statuses and
//! a missing title column all come back as [`FetchError`]; nothing is
//! retried.
//!
//! ## Usage
//!
//! ```rust
//! let config = NotionConfig::from_env()?;
//! let records = notion::fetch_records(&config).await?;
//! ```

mod mapping;
mod query;

pub use mapping::{map_page, map_pages};
pub use query::{TITLE_PROPERTY, query_database};

use crate::{config::NotionConfig, error::FetchError, types::WordRecord};

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub records: Vec<WordRecord>,
    /// The database holds rows past this page. They are not fetched.
    pub has_more: bool,
}

impl FetchedPage {
    /// Notice for a truncated deck, `None` when every row was fetched.
    pub fn truncation_notice(&self) -> Option<String> {
        self.has_more.then(|| match self.records.len() {
            1 => "Only the first word is shown; the database holds more.".to_string(),
            n => format!("Only the first {} words are shown; the database holds more.", n),
        })
    }
}

/// Queries the database once and returns its first page as records.
///
/// Order is the order the API returned, which is ascending by `単語`.
pub async fn fetch_page(config: &NotionConfig) -> Result<FetchedPage, FetchError> {
    let response = query_database(config).await?;
    Ok(FetchedPage {
        records: map_pages(&response.results),
        has_more: response.has_more,
    })
}

/// Like [`fetch_page`], keeping only the records.
pub async fn fetch_records(config: &NotionConfig) -> Result<Vec<WordRecord>, FetchError> {
    Ok(fetch_page(config).await?.records)
}
