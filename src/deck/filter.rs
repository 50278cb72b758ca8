use crate::types::{ALL_GENRES, WordRecord};

/// Whether `record` stays in the filtered view.
///
/// `query` must already be lowercased. An empty query matches everything;
/// a genre of `"All"` disables genre narrowing.
pub fn keep(record: &WordRecord, query: &str, genre: &str) -> bool {
    let genre_match = genre == ALL_GENRES || record.genre == genre;
    let text_match = query.is_empty()
        || record.word.to_lowercase().contains(query)
        || record.meaning.to_lowercase().contains(query);
    genre_match && text_match
}

/// Filters `records`, keeping their relative order.
pub fn filter<'a>(records: &'a [WordRecord], query: &str, genre: &str) -> Vec<&'a WordRecord> {
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|r| keep(r, &query, genre))
        .collect()
}

/// `"All"` followed by every distinct genre, in order of first appearance.
pub fn genre_tabs(records: &[WordRecord]) -> Vec<String> {
    let mut tabs = vec![ALL_GENRES.to_string()];
    for record in records {
        if !tabs.iter().any(|t| *t == record.genre) {
            tabs.push(record.genre.clone());
        }
    }
    tabs
}
