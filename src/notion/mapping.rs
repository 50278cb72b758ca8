use serde_json::{Map, Value};

use crate::{
    notion::TITLE_PROPERTY,
    types::{ALL_GENRES, NO_TITLE, RawPage, WordRecord},
};

const MEANING: &str = "意味";
const IPA: &str = "発音記号";
const KATAKANA: &str = "カタカナ発音";
const GENRE: &str = "ジャンル";
const MEMO: &str = "メモ";
const EXAMPLE: &str = "例文";
const AUDIO: &str = "音声";
const VIDEO: &str = "動画";

/// Normalizes one database page into a [`WordRecord`].
///
/// Every column is optional. An absent column, an empty array and an empty
/// string all fall back to the field default: `"No Title"` for the word,
/// `"All"` for the genre and an empty string for everything else.
pub fn map_page(page: &RawPage) -> WordRecord {
    let p = &page.properties;
    WordRecord {
        id: page.id.clone(),
        word: first_plain_text(p, TITLE_PROPERTY, "title").unwrap_or_else(|| NO_TITLE.to_string()),
        meaning: first_plain_text(p, MEANING, "rich_text").unwrap_or_default(),
        ipa: first_plain_text(p, IPA, "rich_text").unwrap_or_default(),
        katakana: first_plain_text(p, KATAKANA, "rich_text").unwrap_or_default(),
        genre: select_name(p, GENRE).unwrap_or_else(|| ALL_GENRES.to_string()),
        memo: first_plain_text(p, MEMO, "rich_text").unwrap_or_default(),
        example: first_plain_text(p, EXAMPLE, "rich_text").unwrap_or_default(),
        audio_url: url(p, AUDIO).unwrap_or_default(),
        video_url: url(p, VIDEO).unwrap_or_default(),
    }
}

pub fn map_pages(pages: &[RawPage]) -> Vec<WordRecord> {
    pages.iter().map(map_page).collect()
}

// `properties[name][kind][0].plain_text`
fn first_plain_text(props: &Map<String, Value>, name: &str, kind: &str) -> Option<String> {
    props
        .get(name)?
        .get(kind)?
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn select_name(props: &Map<String, Value>, name: &str) -> Option<String> {
    props
        .get(name)?
        .get("select")?
        .get("name")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn url(props: &Map<String, Value>, name: &str) -> Option<String> {
    props
        .get(name)?
        .get("url")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
