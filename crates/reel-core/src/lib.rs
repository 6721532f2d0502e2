//! Reel Core - video list playback library
//!
//! This crate provides everything behind the single playback screen:
//! - Fetching the video list from the videos endpoint
//! - Ordering videos by publish date
//! - Composing the markdown text shown under the player
//! - Next/previous/play/pause control over one media player
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Reel Core                          │
//! ├───────────────────────────────────────────────────────────┤
//! │                                                           │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │  │    Video     │──>│    Video     │──>│    Video     │   │
//! │  │   Service    │   │    Record    │   │  View Model  │   │
//! │  └──────────────┘   └──────────────┘   └──────┬───────┘   │
//! │                                               │           │
//! │                     ┌──────────────┐   ┌──────┴───────┐   │
//! │                     │    Media     │<──│   Playback   │   │
//! │                     │    Player    │   │  Controller  │   │
//! │                     └──────────────┘   └──────────────┘   │
//! └───────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod media;
pub mod service;
pub mod types;
pub mod view_model;

pub use config::ClientConfig;
pub use controller::{
    sort_by_published, ControlGlyph, Phase, PlaybackController, ScreenEvent, FETCH_FAILED_NOTICE,
};
pub use error::{Error, Result};
pub use media::{LoggingPlayer, MediaPlayer, PlayerFactory};
pub use service::{decode_videos, spawn_fetch, HttpVideoService, VideoService};
pub use types::{Author, Video};
pub use view_model::VideoViewModel;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Reel Core initialized");
}
