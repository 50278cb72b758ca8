use tabled::{Table, settings::Style};

use crate::{
    cli::load::{exit_if_failed, load_deck},
    deck::{DeckOptions, genre_tabs, render},
    error, info,
    types::{ALL_GENRES, GenreTableRow},
    warning,
};

/// Prints the deck once, optionally filtered and with one card expanded.
///
/// # Arguments
///
/// * `search` - Only show words whose word or meaning contains this text
/// * `genre` - Only show words of this genre
/// * `expand` - Word (or page id) whose details are shown below the table
/// * `json` - Print the visible records as JSON instead of a table. Status
///   notices are left out so stdout holds nothing but the JSON array
///
/// # Example Usage
///
/// ```bash
/// vocadeck list --search run
/// vocadeck list --genre Verb --expand run
/// vocadeck list --json > words.json
/// ```
pub async fn list(search: Option<String>, genre: Option<String>, expand: Option<String>, json: bool) {
    let options = DeckOptions {
        genre_tabs: genre.is_some(),
    };
    let mut deck = load_deck(options, json).await;
    exit_if_failed(&deck);

    if let Some(query) = search {
        deck.set_search(query);
    }
    if let Some(genre) = genre {
        deck.set_genre(genre);
    }
    if let Some(word) = expand {
        match deck.find_word(&word).map(|r| r.id.clone()) {
            Some(id) => deck.toggle(&id),
            None if json => {}
            None => warning!("No word '{}' in the deck.", word),
        }
    }

    if json {
        match serde_json::to_string_pretty(&deck.visible()) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize words. Err: {}", e),
        }
        return;
    }

    print!("{}", render(&deck));
}

/// Prints how many words each genre holds.
pub async fn genres() {
    let deck = load_deck(DeckOptions::default(), false).await;
    exit_if_failed(&deck);

    let records = deck.records();
    let rows: Vec<GenreTableRow> = genre_tabs(records)
        .into_iter()
        .filter(|g| g != ALL_GENRES)
        .map(|g| GenreTableRow {
            words: records.iter().filter(|r| r.genre == g).count(),
            genre: g,
        })
        .collect();

    if rows.is_empty() {
        info!("No genres are set, all {} words are in {}.", records.len(), ALL_GENRES);
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    info!("{} words in total.", records.len());
}
