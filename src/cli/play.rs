use tokio::time::sleep;

use crate::{
    audio::{AudioSlot, ProcessBackend},
    cli::{
        AUDIO_POLL_INTERVAL,
        load::{exit_if_failed, load_deck},
    },
    config::DeckSettings,
    deck::DeckOptions,
    error, success, utils, warning,
};

/// Plays one word's pronunciation and waits until the player is done.
pub async fn play(word: String) {
    let settings = DeckSettings::from_env();
    let deck = load_deck(DeckOptions::default(), false).await;
    exit_if_failed(&deck);

    let record = match deck.find_word(&word) {
        Some(record) => record,
        None => error!("No word '{}' in the deck.", word),
    };
    if !record.has_audio() {
        warning!("'{}' has no audio.", record.word);
        return;
    }

    let backend = match ProcessBackend::from_command_line(&settings.audio_player) {
        Ok(backend) => backend,
        Err(e) => error!("{}", e),
    };
    let mut slot = AudioSlot::new(backend);
    if let Err(e) = slot.play(&record.audio_url) {
        error!("{}", e);
    }

    let pb = utils::spinner(&format!("Playing '{}'...", record.word));
    let failure = loop {
        if let Some(err) = slot.poll() {
            break Some(err);
        }
        if !slot.is_playing() {
            break None;
        }
        sleep(AUDIO_POLL_INTERVAL).await;
    };
    pb.finish_and_clear();

    match failure {
        Some(err) => warning!("{}", err),
        None => success!("Played '{}'.", record.word),
    }
}
