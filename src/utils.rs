use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// First line of `text`, cut to `max` characters with a trailing `…` when
/// anything was dropped.
pub fn truncate_line(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let multiline = text.trim_end().contains('\n');
    if first_line.chars().count() <= max && !multiline {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(max).collect();
    format!("{}…", cut)
}
