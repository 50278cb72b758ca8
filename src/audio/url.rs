use std::sync::LazyLock;

use regex::Regex;

const DIRECT_DOWNLOAD: &str = "https://docs.google.com/uc?export=download&confirm=no_antivirus&id=";

static QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id=([a-zA-Z0-9_-]{25,})").expect("valid regex"));
static PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]{25,})").expect("valid regex"));

/// Hosted file id embedded in `url`, from `id=<ID>` first, then `/d/<ID>`.
pub fn file_id(url: &str) -> Option<&str> {
    QUERY_ID
        .captures(url)
        .or_else(|| PATH_ID.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The URL the player should open for `raw`.
///
/// Share links that embed a file id are rewritten to their direct-download
/// form; anything else is returned unchanged.
pub fn playback_url(raw: &str) -> String {
    match file_id(raw) {
        Some(id) => format!("{}{}", DIRECT_DOWNLOAD, id),
        None => raw.to_string(),
    }
}
