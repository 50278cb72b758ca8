use crate::{
    config::NotionConfig,
    deck::{Deck, DeckOptions},
    error::LoadError,
    notion, success,
    types::WordRecord,
    utils, warning,
};

/// Reads the configuration and fetches every word once.
///
/// Configuration is checked before any request is made, so a missing
/// credential never reaches the network. With `quiet` set nothing is printed
/// to stdout, which keeps machine-readable output clean. The spinner draws on
/// stderr either way.
pub async fn load_records(quiet: bool) -> Result<Vec<WordRecord>, LoadError> {
    let config = NotionConfig::from_env()?;

    let pb = utils::spinner("Fetching words from Notion...");
    let result = notion::fetch_page(&config).await;
    pb.finish_and_clear();

    let page = result?;
    if !quiet {
        if let Some(notice) = page.truncation_notice() {
            warning!("{}", notice);
        }
        success!("Loaded {} words.", page.records.len());
    }
    Ok(page.records)
}

/// Builds a deck from a fresh fetch. A failed load yields an empty deck
/// carrying the error.
pub async fn load_deck(options: DeckOptions, quiet: bool) -> Deck {
    Deck::from_load(load_records(quiet).await, options)
}

/// Prints a failed deck and exits with status 1.
pub fn exit_if_failed(deck: &Deck) {
    if deck.error().is_some() {
        print!("{}", crate::deck::render(deck));
        std::process::exit(1);
    }
}
