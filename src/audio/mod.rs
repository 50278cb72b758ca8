//! # Audio Module
//!
//! Best-effort pronunciation playback.
//!
//! [`AudioSlot`] holds the only live playback. Asking it to play something
//! new releases the previous playback before the backend is asked for a new
//! one, so repeated plays never pile up players.
//!
//! [`ProcessBackend`] is the backend used by the CLI. It runs an external
//! player (`ffplay` unless `VOCADECK_AUDIO_PLAYER` says otherwise) and reads
//! its stderr once it exits to tell a permission problem from any other
//! failure.

mod player;
mod url;

pub use player::{
    AudioBackend, AudioSlot, AudioState, Playback, PlaybackStatus, ProcessBackend,
    classify_failure,
};
pub use url::{file_id, playback_url};
