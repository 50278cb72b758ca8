#![allow(dead_code)]

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use axum::Router;
use serde_json::{Value, json};
use vocadeck::{
    audio::{AudioBackend, Playback, PlaybackStatus},
    config::NotionConfig,
    error::PlaybackError,
    types::WordRecord,
};

pub const DB_ID: &str = "0123456789abcdef0123456789abcdef";
pub const API_KEY: &str = "secret_test";

// Helper function to create a test record
pub fn record(id: &str, word: &str, meaning: &str, genre: &str) -> WordRecord {
    WordRecord {
        id: id.to_string(),
        word: word.to_string(),
        meaning: meaning.to_string(),
        ipa: String::new(),
        katakana: String::new(),
        genre: genre.to_string(),
        memo: String::new(),
        example: String::new(),
        audio_url: String::new(),
        video_url: String::new(),
    }
}

pub fn sample_deck() -> Vec<WordRecord> {
    vec![
        record("1", "Apple", "りんご", "Noun"),
        record("2", "apply", "申し込む", "Verb"),
        record("3", "Banana", "バナナ", "Noun"),
        record("4", "run", "走る", "Verb"),
        record("5", "Sunrise", "日の出 (early morning)", "All"),
    ]
}

pub fn config(api_url: &str) -> NotionConfig {
    NotionConfig {
        api_key: API_KEY.to_string(),
        database_id: DB_ID.to_string(),
        api_url: api_url.to_string(),
    }
}

// Serves `app` on an ephemeral port and returns the API base URL.
pub async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

pub fn title(text: &str) -> Value {
    json!({ "type": "title", "title": [{ "type": "text", "plain_text": text }] })
}

pub fn rich_text(text: &str) -> Value {
    json!({ "type": "rich_text", "rich_text": [{ "type": "text", "plain_text": text }] })
}

pub fn select(name: &str) -> Value {
    json!({ "type": "select", "select": { "name": name } })
}

pub fn url(url: &str) -> Value {
    json!({ "type": "url", "url": url })
}

/// A fully populated page as the query endpoint returns it.
pub fn full_page(id: &str, word: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "単語": title(word),
            "意味": rich_text("意味のテキスト"),
            "発音記号": rich_text("/ˈæp.əl/"),
            "カタカナ発音": rich_text("アップル"),
            "ジャンル": select("Noun"),
            "メモ": rich_text("memo"),
            "例文": rich_text("An apple a day."),
            "音声": url("https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz012345/view"),
            "動画": url("https://www.youtube.com/watch?v=abc"),
        }
    })
}

#[derive(Default)]
pub struct Log {
    pub started: Vec<String>,
    pub live: usize,
    pub max_live: usize,
    pub released: usize,
    // statuses handed out by the next playback's poll calls
    pub script: VecDeque<PlaybackStatus>,
    pub fail_start: Option<PlaybackError>,
}

#[derive(Clone, Default)]
pub struct FakeBackend(pub Rc<RefCell<Log>>);

pub struct FakePlayback {
    log: Rc<RefCell<Log>>,
    released: bool,
}

impl AudioBackend for FakeBackend {
    fn start(&self, url: &str) -> Result<Box<dyn Playback>, PlaybackError> {
        let mut log = self.0.borrow_mut();
        if let Some(err) = log.fail_start.take() {
            return Err(err);
        }
        log.started.push(url.to_string());
        log.live += 1;
        log.max_live = log.max_live.max(log.live);
        Ok(Box::new(FakePlayback {
            log: Rc::clone(&self.0),
            released: false,
        }))
    }
}

impl Playback for FakePlayback {
    fn poll(&mut self) -> PlaybackStatus {
        self.log
            .borrow_mut()
            .script
            .pop_front()
            .unwrap_or(PlaybackStatus::Playing)
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            let mut log = self.log.borrow_mut();
            log.live -= 1;
            log.released += 1;
        }
    }
}
