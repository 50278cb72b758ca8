//! # CLI Module
//!
//! User-facing commands of vocadeck. Each command fetches the deck once,
//! applies its flags and prints the result.
//!
//! ## Commands
//!
//! - [`deck`] - Interactive deck with search, genre tabs, expandable cards,
//!   audio playback and video links
//! - [`list`] - One-shot listing, optionally filtered, expanded or as JSON
//! - [`genres`] - Word count per genre
//! - [`play`] - Plays one word's pronunciation
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (prompt, tables, notices)
//!     ↓
//! Deck Layer (filter, expand, render)      Audio Layer (single playback slot)
//!     ↓
//! Notion Layer (query, mapping)
//!     ↓
//! Network Layer (HTTP requests)
//! ```
//!
//! ## Error Handling
//!
//! A failed load never panics. A missing configuration or failed fetch is
//! printed in place of the list, with a hint on how to fix it, and the
//! process exits with status 1. Playback failures are shown as a notice and
//! leave the deck untouched.
//!
//! ## Usage Patterns
//!
//! ```bash
//! vocadeck deck --genre-tabs          # browse interactively
//! vocadeck list --search apple        # words or meanings containing "apple"
//! vocadeck list --expand apple        # show apple's details
//! vocadeck play apple                 # hear it
//! ```

mod list;
mod load;
mod play;
mod session;

pub use list::genres;
pub use list::list;
pub use load::load_records;
pub use play::play;
pub use session::{AUDIO_POLL_INTERVAL, Action, Session, deck, parse_action};
