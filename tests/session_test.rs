mod common;

use std::{cell::RefCell, time::Duration};

use common::*;
use tokio::{
    io::{AsyncWriteExt, BufReader, duplex},
    time::sleep,
};
use vocadeck::{
    audio::{AudioSlot, AudioState, PlaybackStatus},
    cli::{AUDIO_POLL_INTERVAL, Action, Session, parse_action},
    deck::{Deck, DeckOptions},
    error::PlaybackError,
};

// Deck whose second card has an audio link.
fn audio_session(backend: &FakeBackend) -> Session<FakeBackend> {
    let mut records = sample_deck();
    records[1].audio_url = "https://plainhost/apply.mp3".to_string();
    let deck = Deck::new(records, DeckOptions::default());
    Session::new(deck, Ok(AudioSlot::new(backend.clone())))
}

#[test]
fn test_parse_search() {
    assert_eq!(parse_action("/apple"), Action::Search("apple".to_string()));
    assert_eq!(parse_action("/ two words "), Action::Search("two words".to_string()));
    assert_eq!(parse_action("/"), Action::Search(String::new()));
    assert_eq!(parse_action("search run"), Action::Search("run".to_string()));
}

#[test]
fn test_parse_card_number_toggles() {
    assert_eq!(parse_action("3"), Action::Toggle(3));
    assert_eq!(parse_action("  12 "), Action::Toggle(12));
}

#[test]
fn test_parse_play_and_video() {
    assert_eq!(parse_action("p 2"), Action::Play(2));
    assert_eq!(parse_action("PLAY 4"), Action::Play(4));
    assert_eq!(parse_action("v 1"), Action::Video(1));
    assert_eq!(parse_action("p"), Action::Unknown("p".to_string()));
    assert_eq!(parse_action("p two"), Action::Unknown("p two".to_string()));
}

#[test]
fn test_parse_genre() {
    assert_eq!(parse_action("g Verb"), Action::Genre("Verb".to_string()));
    assert_eq!(parse_action("genre"), Action::Genre(String::new()));
}

#[test]
fn test_parse_misc() {
    assert_eq!(parse_action(""), Action::Show);
    assert_eq!(parse_action("q"), Action::Quit);
    assert_eq!(parse_action("exit"), Action::Quit);
    assert_eq!(parse_action("h"), Action::Help);
    assert_eq!(parse_action("dance"), Action::Unknown("dance".to_string()));
}

#[tokio::test]
async fn test_playback_error_is_shown_without_further_input() {
    let backend = FakeBackend::default();
    let err = PlaybackError::Access("403 Forbidden".to_string());
    backend
        .0
        .borrow_mut()
        .script
        .push_back(PlaybackStatus::Errored(err.clone()));
    let mut session = audio_session(&backend);

    let notices = RefCell::new(Vec::new());
    let (mut keyboard, stdin) = duplex(64);

    let typing = async {
        keyboard.write_all(b"p 2\n").await.unwrap();
        // the prompt stays idle until the notice arrives
        for _ in 0..20 {
            if !notices.borrow().is_empty() {
                break;
            }
            sleep(AUDIO_POLL_INTERVAL / 2).await;
        }
        let seen_while_idle = notices.borrow().clone();
        keyboard.write_all(b"q\n").await.unwrap();
        seen_while_idle
    };
    let running = session.run(BufReader::new(stdin), |e| notices.borrow_mut().push(e.clone()));

    let (_, seen_while_idle) = tokio::join!(running, typing);

    assert_eq!(seen_while_idle, vec![err.clone()]);
    assert_eq!(notices.borrow().len(), 1);
    assert_eq!(backend.0.borrow().started, vec!["https://plainhost/apply.mp3"]);
    assert_eq!(backend.0.borrow().live, 0);
    assert_eq!(session.audio().unwrap().state(), &AudioState::Errored(err));
}

#[tokio::test]
async fn test_playing_card_does_not_expand_it() {
    let backend = FakeBackend::default();
    let mut session = audio_session(&backend);

    let input: &[u8] = b"p 2\n3\n";
    session
        .run(BufReader::new(input), |e| panic!("unexpected notice {:?}", e))
        .await;

    assert_eq!(backend.0.borrow().started.len(), 1);
    assert_eq!(session.deck().expanded_id(), Some("3"));
    assert!(session.audio().unwrap().is_playing());
}

#[tokio::test]
async fn test_finished_playback_gives_no_notice() {
    let backend = FakeBackend::default();
    backend.0.borrow_mut().script.push_back(PlaybackStatus::Finished);
    let mut session = audio_session(&backend);

    let (mut keyboard, stdin) = duplex(64);
    let typing = async {
        keyboard.write_all(b"p 2\n").await.unwrap();
        sleep(AUDIO_POLL_INTERVAL * 2 + Duration::from_millis(50)).await;
        // dropping the writer ends the input
        drop(keyboard);
    };
    let running = session.run(BufReader::new(stdin), |e| panic!("unexpected notice {:?}", e));
    tokio::join!(running, typing);

    assert_eq!(session.audio().unwrap().state(), &AudioState::Idle);
    assert_eq!(backend.0.borrow().live, 0);
}
