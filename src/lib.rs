//! Vocabulary Flashcard Deck Library
//!
//! This library renders a vocabulary deck stored in a Notion database. It
//! fetches the database once, normalizes every page into a word record, and
//! offers a terminal deck with search, optional genre tabs, one expanded card
//! at a time and best-effort audio playback.
//!
//! # Modules
//!
//! - `audio` - Single-slot audio playback and share-link rewriting
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `deck` - Deck state, filtering and rendering
//! - `error` - Error types for loading and playback
//! - `notion` - Notion database query and page mapping
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use vocadeck::{config, deck, notion};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let cfg = config::NotionConfig::from_env()?;
//!     let records = notion::fetch_records(&cfg).await?;
//!     let deck = deck::Deck::new(records, deck::DeckOptions::default());
//!     print!("{}", deck::render(&deck));
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod notion;
pub mod types;
pub mod utils;

/// Prints a status line prefixed with a blue `[o]`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Found {} words", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a status line prefixed with a green `[✓]`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `[!]` line and exits with status 1.
///
/// Only for the top level of a command, once nothing useful is left to show.
///
/// ```
/// error!("Invalid shell: {}", name);
/// // the process has exited here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `[!]` notice. Used for recoverable problems such as a
/// failed playback.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
