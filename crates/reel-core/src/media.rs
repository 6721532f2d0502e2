//! Media player abstraction
//!
//! The controller owns at most one player at a time. Switching videos builds a
//! fresh player through a [`PlayerFactory`] and drops the old one.

use tracing::{debug, info};
use url::Url;

/// A player bound to one media source
pub trait MediaPlayer: Send {
    /// Source this player was created for
    fn source(&self) -> &Url;

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// True while playback is running
    fn is_playing(&self) -> bool;
}

/// Builds players for a media URL
pub trait PlayerFactory: Send {
    fn create(&self, source: Url) -> Box<dyn MediaPlayer>;
}

impl<F> PlayerFactory for F
where
    F: Fn(Url) -> Box<dyn MediaPlayer> + Send,
{
    fn create(&self, source: Url) -> Box<dyn MediaPlayer> {
        self(source)
    }
}

/// Headless player that only tracks and logs play/pause state
#[derive(Debug)]
pub struct LoggingPlayer {
    source: Url,
    playing: bool,
}

impl LoggingPlayer {
    pub fn new(source: Url) -> Self {
        debug!(source = %source, "Player created");
        Self {
            source,
            playing: false,
        }
    }

    /// Factory producing [`LoggingPlayer`]s
    pub fn factory() -> impl PlayerFactory {
        |source: Url| Box::new(LoggingPlayer::new(source)) as Box<dyn MediaPlayer>
    }
}

impl MediaPlayer for LoggingPlayer {
    fn source(&self) -> &Url {
        &self.source
    }

    fn play(&mut self) {
        self.playing = true;
        info!(source = %self.source, "Playback started");
    }

    fn pause(&mut self) {
        self.playing = false;
        info!(source = %self.source, "Playback paused");
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Drop for LoggingPlayer {
    fn drop(&mut self) {
        debug!(source = %self.source, "Player released");
    }
}
