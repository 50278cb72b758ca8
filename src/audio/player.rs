use std::{
    io::Read,
    path::PathBuf,
    process::{Child, Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use crate::{audio::playback_url, error::PlaybackError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Finished,
    Errored(PlaybackError),
}

/// One live playback started by an [`AudioBackend`].
pub trait Playback {
    fn poll(&mut self) -> PlaybackStatus;

    /// Stops playback and frees whatever the backend acquired.
    fn release(&mut self);
}

/// A platform capability that can play audio from a URL.
pub trait AudioBackend {
    fn start(&self, url: &str) -> Result<Box<dyn Playback>, PlaybackError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioState {
    Idle,
    Playing,
    Errored(PlaybackError),
}

/// Owns at most one live playback.
///
/// Starting a new playback releases the previous one first. Dropping the slot
/// releases whatever is still playing.
pub struct AudioSlot<B: AudioBackend> {
    backend: B,
    current: Option<Box<dyn Playback>>,
    state: AudioState,
}

impl<B: AudioBackend> AudioSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            state: AudioState::Idle,
        }
    }

    pub fn state(&self) -> &AudioState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == AudioState::Playing
    }

    /// Starts playing `raw_url`, replacing any current playback.
    ///
    /// Share links are rewritten with [`playback_url`] first. An empty URL is
    /// ignored and leaves the current playback alone.
    pub fn play(&mut self, raw_url: &str) -> Result<(), PlaybackError> {
        if raw_url.trim().is_empty() {
            return Ok(());
        }

        self.release();
        let url = playback_url(raw_url.trim());
        match self.backend.start(&url) {
            Ok(handle) => {
                self.current = Some(handle);
                self.state = AudioState::Playing;
                Ok(())
            }
            Err(err) => {
                self.state = AudioState::Errored(err.clone());
                Err(err)
            }
        }
    }

    /// Checks on the current playback. Returns the error if it just failed.
    pub fn poll(&mut self) -> Option<PlaybackError> {
        let status = self.current.as_mut()?.poll();
        match status {
            PlaybackStatus::Playing => None,
            PlaybackStatus::Finished => {
                self.release();
                None
            }
            PlaybackStatus::Errored(err) => {
                self.release();
                self.state = AudioState::Errored(err.clone());
                Some(err)
            }
        }
    }

    pub fn release(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.release();
        }
        if self.state == AudioState::Playing {
            self.state = AudioState::Idle;
        }
    }
}

impl<B: AudioBackend> Drop for AudioSlot<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Plays audio by running an external player with the URL as last argument.
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessBackend {
    /// Builds a backend from a command line such as `ffplay -nodisp -autoexit`.
    ///
    /// The program is looked up on `PATH`.
    pub fn from_command_line(command_line: &str) -> Result<Self, PlaybackError> {
        let mut parts = command_line.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| PlaybackError::Failed("no audio player configured".to_string()))?;
        let program = which::which(name).map_err(|e| {
            PlaybackError::Failed(format!("audio player '{}' not found: {}", name, e))
        })?;

        Ok(Self {
            program,
            args: parts.map(str::to_string).collect(),
        })
    }
}

impl AudioBackend for ProcessBackend {
    fn start(&self, url: &str) -> Result<Box<dyn Playback>, PlaybackError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PlaybackError::Failed(e.to_string()))?;

        // drain stderr so a chatty player can't block on a full pipe
        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut text = String::new();
                let _ = pipe.read_to_string(&mut text);
                text
            })
        });

        Ok(Box::new(ProcessPlayback {
            child,
            stderr,
            released: false,
        }))
    }
}

struct ProcessPlayback {
    child: Child,
    stderr: Option<JoinHandle<String>>,
    released: bool,
}

impl ProcessPlayback {
    fn take_stderr(&mut self) -> String {
        self.stderr
            .take()
            .and_then(|h| h.join().ok())
            .unwrap_or_default()
    }
}

impl Playback for ProcessPlayback {
    fn poll(&mut self) -> PlaybackStatus {
        match self.child.try_wait() {
            Ok(None) => PlaybackStatus::Playing,
            Ok(Some(status)) if status.success() => PlaybackStatus::Finished,
            Ok(Some(status)) => {
                let stderr = self.take_stderr();
                PlaybackStatus::Errored(classify_failure(&stderr, Some(status)))
            }
            Err(e) => PlaybackStatus::Errored(PlaybackError::Failed(e.to_string())),
        }
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Drop for ProcessPlayback {
    fn drop(&mut self) {
        self.release();
    }
}

const ACCESS_MARKERS: [&str; 6] = [
    "401",
    "403",
    "forbidden",
    "unauthorized",
    "permission denied",
    "access denied",
];

/// Maps a failed player run to an access problem or a generic failure.
pub fn classify_failure(stderr: &str, status: Option<ExitStatus>) -> PlaybackError {
    let detail = stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| match status {
            Some(status) => format!("player exited with {}", status),
            None => "player failed".to_string(),
        });

    let lower = stderr.to_lowercase();
    if ACCESS_MARKERS.iter().any(|m| lower.contains(m)) {
        PlaybackError::Access(detail)
    } else {
        PlaybackError::Failed(detail)
    }
}
