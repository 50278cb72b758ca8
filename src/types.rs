use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

pub const ALL_GENRES: &str = "All";
pub const NO_TITLE: &str = "No Title";

/// One vocabulary entry, normalized from a database page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    pub meaning: String,
    pub ipa: String,
    pub katakana: String,
    pub genre: String,
    pub memo: String,
    pub example: String,
    pub audio_url: String,
    pub video_url: String,
}

impl WordRecord {
    pub fn has_audio(&self) -> bool {
        !self.audio_url.is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.video_url.is_empty()
    }
}

#[derive(Tabled)]
pub struct CardTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub word: String,
    pub ipa: String,
    pub meaning: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub sorts: Vec<SortSpec>,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSpec {
    pub property: String,
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawPage>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A database page as returned by the API.
///
/// Properties stay untyped; every column is optional and checked on access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
