use colored::Colorize;
use tabled::{Table, settings::Style};

use crate::{
    deck::Deck,
    types::{CardTableRow, WordRecord},
    utils::truncate_line,
};

const MEANING_WIDTH: usize = 40;

/// Renders the whole deck view as text.
///
/// The layout, top to bottom:
/// - genre tab bar (only with genre tabs enabled)
/// - status line with the number of visible cards
/// - card table, or a "No matches found" notice
/// - detail block of the expanded card
///
/// A failed deck renders its error in place of the list.
pub fn render(deck: &Deck) -> String {
    let mut out = String::new();

    if let Some(err) = deck.error() {
        out.push_str(&format!("{}\n", err.title.red().bold()));
        out.push_str(&format!("{}\n", err.message));
        out.push_str(&format!("{}\n", err.hint.dimmed()));
        out.push_str(&format!("{}\n", "0 shown".dimmed()));
        return out;
    }

    let tabs = deck.genre_tabs();
    if !tabs.is_empty() {
        let bar: Vec<String> = tabs
            .iter()
            .map(|t| {
                if t == deck.active_genre() {
                    format!("[{}]", t).yellow().bold().to_string()
                } else {
                    t.to_string()
                }
            })
            .collect();
        out.push_str(&format!("{}\n", bar.join("  ")));
    }

    let visible = deck.visible();
    if !deck.search_query().is_empty() {
        out.push_str(&format!("Search: \"{}\"\n", deck.search_query()));
    }
    out.push_str(&format!("{}\n", format!("{} shown", visible.len()).dimmed()));

    if visible.is_empty() {
        out.push_str(&format!("{}\n", "No matches found".dimmed()));
        return out;
    }

    let rows: Vec<CardTableRow> = visible
        .iter()
        .enumerate()
        .map(|(i, r)| CardTableRow {
            index: i + 1,
            word: card_face(r, deck.expanded_id() == Some(r.id.as_str())),
            ipa: r.ipa.clone(),
            meaning: truncate_line(&r.meaning, MEANING_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    out.push_str(&format!("{}\n", table));

    if let Some(record) = deck.expanded() {
        out.push('\n');
        out.push_str(&render_detail(record));
    }

    out
}

/// Detail block shown for the expanded card.
pub fn render_detail(record: &WordRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", record.word.bold(), record.ipa.dimmed()));
    out.push_str(&field("Meaning", &record.meaning));
    out.push_str(&field("Katakana", &record.katakana));
    out.push_str(&field("Memo", or_dash(&record.memo)));
    out.push_str(&field("Example", &format!("\"{}\"", or_dash(&record.example))));
    out.push_str(&field("Genre", &record.genre));
    if record.has_video() {
        out.push_str(&field("Watch video", &record.video_url));
    }
    out
}

fn field(label: &str, value: &str) -> String {
    format!("  {}\n    {}\n", label.yellow().bold(), value)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn card_face(record: &WordRecord, expanded: bool) -> String {
    let marker = if expanded { "▾ " } else { "" };
    if record.has_audio() {
        format!("{}{} ▶", marker, record.word)
    } else {
        format!("{}{}", marker, record.word)
    }
}
