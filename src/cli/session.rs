use std::{io::Write, time::Duration};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    time::{MissedTickBehavior, interval},
};

use crate::{
    audio::{AudioBackend, AudioSlot, ProcessBackend},
    cli::load::{exit_if_failed, load_deck},
    config::DeckSettings,
    deck::{Deck, DeckOptions, render},
    error::PlaybackError,
    info, warning,
};

/// One line typed at the deck prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Redraw the deck.
    Show,
    Search(String),
    Genre(String),
    /// Expand or collapse the nth visible card.
    Toggle(usize),
    /// Play the nth visible card's audio. Never expands or collapses it.
    Play(usize),
    /// Open the nth visible card's video in the browser.
    Video(usize),
    Help,
    Quit,
    Unknown(String),
}

/// Parses a prompt line into an [`Action`].
///
/// ```text
/// /text       search for text   (`/` alone clears the search)
/// g <genre>   select a genre tab (`g` alone selects All)
/// <n>         expand or collapse card n
/// p <n>       play the audio of card n
/// v <n>       open the video of card n
/// h           help
/// q           quit
/// ```
pub fn parse_action(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Show;
    }
    if let Some(query) = line.strip_prefix('/') {
        return Action::Search(query.trim().to_string());
    }
    if let Ok(n) = line.parse::<usize>() {
        return Action::Toggle(n);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Action::Quit,
        "h" | "help" | "?" => Action::Help,
        "s" | "search" => Action::Search(rest.to_string()),
        "g" | "genre" => Action::Genre(rest.to_string()),
        "p" | "play" => match rest.parse() {
            Ok(n) => Action::Play(n),
            Err(_) => Action::Unknown(line.to_string()),
        },
        "v" | "video" => match rest.parse() {
            Ok(n) => Action::Video(n),
            Err(_) => Action::Unknown(line.to_string()),
        },
        _ => Action::Unknown(line.to_string()),
    }
}

const HELP: &str = "\
/text      search words and meanings (`/` clears)
g <genre>  select a genre tab (`g` selects All)
<n>        expand or collapse card n
p <n>      play the audio of card n
v <n>      open the video of card n
q          quit";

/// How often the audio slot is checked while the prompt waits for input.
pub const AUDIO_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Runs the interactive deck.
///
/// Fetches the words once, then reads commands from stdin until `q` or end
/// of input. The deck is redrawn after every command that changes it.
pub async fn deck(search: Option<String>, genre: Option<String>, genre_tabs: bool) {
    let settings = DeckSettings::from_env();
    let options = DeckOptions {
        genre_tabs: genre_tabs || settings.genre_tabs || genre.is_some(),
    };

    let mut deck = load_deck(options, false).await;
    exit_if_failed(&deck);

    if let Some(query) = search {
        deck.set_search(query);
    }
    if let Some(genre) = genre {
        select_genre(&mut deck, &genre);
    }

    let audio = ProcessBackend::from_command_line(&settings.audio_player).map(AudioSlot::new);
    let mut session = Session::new(deck, audio);

    print!("{}", render(session.deck()));
    info!("Type h for help.");

    session
        .run(BufReader::new(tokio::io::stdin()), |err| warning!("{}", err))
        .await;
}

/// The interactive deck: a [`Deck`] plus the audio slot its cards play into.
pub struct Session<B: AudioBackend> {
    deck: Deck,
    audio: Result<AudioSlot<B>, PlaybackError>,
}

impl<B: AudioBackend> Session<B> {
    /// `audio` is the error to show on every play when no player is usable.
    pub fn new(deck: Deck, audio: Result<AudioSlot<B>, PlaybackError>) -> Self {
        Self { deck, audio }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn audio(&self) -> Option<&AudioSlot<B>> {
        self.audio.as_ref().ok()
    }

    /// Reads commands from `input` until `q` or end of input.
    ///
    /// The audio slot is polled every [`AUDIO_POLL_INTERVAL`] while waiting,
    /// so `on_playback_error` fires as soon as a playback fails and not on
    /// the next command.
    pub async fn run<R, F>(&mut self, input: R, mut on_playback_error: F)
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(&PlaybackError),
    {
        let mut lines = input.lines();
        let mut ticker = interval(AUDIO_POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        prompt();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let line = match line {
                        Ok(Some(line)) => line,
                        Ok(None) => break,
                        Err(e) => {
                            warning!("Cannot read input. Err: {}", e);
                            break;
                        }
                    };

                    self.poll_audio(&mut on_playback_error);
                    if !self.apply(parse_action(&line)) {
                        break;
                    }
                    prompt();
                }
                _ = ticker.tick() => {
                    if self.poll_audio(&mut on_playback_error) {
                        prompt();
                    }
                }
            }
        }
    }

    // Returns true when an error was reported.
    fn poll_audio<F: FnMut(&PlaybackError)>(&mut self, on_playback_error: &mut F) -> bool {
        match self.audio.as_mut().ok().and_then(|slot| slot.poll()) {
            Some(err) => {
                on_playback_error(&err);
                true
            }
            None => false,
        }
    }

    // Returns false once the session should end.
    fn apply(&mut self, action: Action) -> bool {
        let deck = &mut self.deck;
        match action {
            Action::Show => print!("{}", render(deck)),
            Action::Search(query) => {
                deck.set_search(query);
                print!("{}", render(deck));
            }
            Action::Genre(genre) => {
                if !deck.options().genre_tabs {
                    warning!("Genre tabs are disabled. Start with --genre-tabs or set VOCADECK_GENRE_TABS=1.");
                    return true;
                }
                select_genre(deck, &genre);
                print!("{}", render(deck));
            }
            Action::Toggle(n) => {
                if deck.toggle_visible(n) {
                    print!("{}", render(deck));
                } else {
                    warning!("There is no card {}.", n);
                }
            }
            Action::Play(n) => play_card(deck, &mut self.audio, n),
            Action::Video(n) => open_video(deck, n),
            Action::Help => println!("{}", HELP),
            Action::Quit => return false,
            Action::Unknown(line) => warning!("Unknown command '{}'. Type h for help.", line),
        }
        true
    }
}

fn select_genre(deck: &mut Deck, genre: &str) {
    let tabs = deck.genre_tabs();
    match tabs.iter().find(|t| t.eq_ignore_ascii_case(genre.trim())) {
        Some(tab) => deck.set_genre(tab.clone()),
        None if genre.trim().is_empty() => deck.set_genre(""),
        None => {
            warning!("Unknown genre '{}'. Available: {}", genre, tabs.join(", "));
        }
    }
}

fn play_card<B: AudioBackend>(
    deck: &Deck,
    audio: &mut Result<AudioSlot<B>, PlaybackError>,
    n: usize,
) {
    let record = match deck.visible_at(n) {
        Some(record) => record,
        None => {
            warning!("There is no card {}.", n);
            return;
        }
    };
    if !record.has_audio() {
        warning!("'{}' has no audio.", record.word);
        return;
    }

    match audio.as_mut() {
        Ok(slot) => match slot.play(&record.audio_url) {
            Ok(()) => info!("Playing '{}'...", record.word),
            Err(err) => warning!("{}", err),
        },
        Err(err) => warning!("{}", err),
    }
}

fn open_video(deck: &Deck, n: usize) {
    let record = match deck.visible_at(n) {
        Some(record) => record,
        None => {
            warning!("There is no card {}.", n);
            return;
        }
    };
    if !record.has_video() {
        warning!("'{}' has no video.", record.word);
        return;
    }

    if webbrowser::open(&record.video_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            record.video_url
        )
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
