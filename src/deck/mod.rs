//! # Deck Module
//!
//! In-memory flashcard deck with search, optional genre filtering and a
//! single expanded card.
//!
//! The deck owns the records it was built from and never mutates them. Every
//! call to [`Deck::visible`] re-derives the filtered view from the current
//! search query and genre.
//!
//! ## State
//!
//! ```text
//! search_query : String         ("" shows everything)
//! active_genre : String         ("All" shows every genre)
//! expanded_id  : Option<String> (zero or one card)
//! ```
//!
//! A deck built from a failed load holds no records and carries the error so
//! the list area can show it instead.

mod filter;
mod render;

pub use filter::{filter, genre_tabs, keep};
pub use render::{render, render_detail};

use crate::{
    error::LoadError,
    types::{ALL_GENRES, WordRecord},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckOptions {
    /// Enables the genre tab bar and genre narrowing.
    pub genre_tabs: bool,
}

/// Error shown in place of the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckError {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl From<&LoadError> for DeckError {
    fn from(err: &LoadError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
            hint: err.hint().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    records: Vec<WordRecord>,
    options: DeckOptions,
    error: Option<DeckError>,
    search_query: String,
    active_genre: String,
    expanded_id: Option<String>,
}

impl Deck {
    pub fn new(records: Vec<WordRecord>, options: DeckOptions) -> Self {
        Self {
            records,
            options,
            error: None,
            search_query: String::new(),
            active_genre: ALL_GENRES.to_string(),
            expanded_id: None,
        }
    }

    /// A deck with no records that shows `err` in the list area.
    pub fn failed(err: &LoadError, options: DeckOptions) -> Self {
        let mut deck = Self::new(Vec::new(), options);
        deck.error = Some(DeckError::from(err));
        deck
    }

    pub fn from_load(result: Result<Vec<WordRecord>, LoadError>, options: DeckOptions) -> Self {
        match result {
            Ok(records) => Self::new(records, options),
            Err(err) => Self::failed(&err, options),
        }
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn error(&self) -> Option<&DeckError> {
        self.error.as_ref()
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn active_genre(&self) -> &str {
        &self.active_genre
    }

    /// Selects a genre tab. An empty name selects `"All"`.
    pub fn set_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        self.active_genre = if genre.trim().is_empty() {
            ALL_GENRES.to_string()
        } else {
            genre
        };
    }

    /// The genre actually applied, `"All"` when tabs are disabled.
    fn effective_genre(&self) -> &str {
        if self.options.genre_tabs {
            &self.active_genre
        } else {
            ALL_GENRES
        }
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded_id.as_deref()
    }

    /// Expands the record with `id`, or collapses it if it is already expanded.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded_id.as_deref() == Some(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    /// Toggles the `n`th visible card (1-based). Returns `false` if there is none.
    pub fn toggle_visible(&mut self, n: usize) -> bool {
        let id = match self.visible_at(n) {
            Some(record) => record.id.clone(),
            None => return false,
        };
        self.toggle(&id);
        true
    }

    pub fn visible(&self) -> Vec<&WordRecord> {
        filter(&self.records, &self.search_query, self.effective_genre())
    }

    /// The `n`th visible card (1-based).
    pub fn visible_at(&self, n: usize) -> Option<&WordRecord> {
        n.checked_sub(1).and_then(|i| self.visible().get(i).copied())
    }

    /// The expanded record, if it is part of the current view.
    pub fn expanded(&self) -> Option<&WordRecord> {
        let id = self.expanded_id.as_deref()?;
        self.visible().into_iter().find(|r| r.id == id)
    }

    pub fn find_word(&self, word: &str) -> Option<&WordRecord> {
        let needle = word.to_lowercase();
        self.records
            .iter()
            .find(|r| r.word.to_lowercase() == needle || r.id == word)
    }

    pub fn genre_tabs(&self) -> Vec<String> {
        if self.options.genre_tabs {
            genre_tabs(&self.records)
        } else {
            Vec::new()
        }
    }
}
