//! Playback screen controller
//!
//! Owns the ordered video list, the active index, the paused flag and the
//! single media player. Everything is mutated through `&mut self` from the
//! context that owns the screen; the network fetch is the only asynchronous
//! step and hands its outcome back through [`PlaybackController::finish_load`].
//!
//! ```text
//! Idle ──appear──> Loading ──ok──> Ready(0) ──next/previous──> Ready(i)
//!                     │
//!                     └──err──> Failed ──appear──> Loading
//! ```

use crate::{
    media::{MediaPlayer, PlayerFactory},
    service::VideoService,
    types::Video,
    view_model::VideoViewModel,
    Result,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;

/// Notice shown when the video list cannot be loaded
pub const FETCH_FAILED_NOTICE: &str = "Failed to fetch videos from the server";

/// Lifecycle of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Screen has not appeared yet
    Idle,
    /// Fetch in flight
    Loading,
    /// List loaded (possibly empty)
    Ready,
    /// Fetch failed, no list
    Failed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Loading => write!(f, "loading"),
            Phase::Ready => write!(f, "ready"),
            Phase::Failed => write!(f, "failed"),
        }
    }
}

/// Glyph on the play/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlGlyph {
    Play,
    Pause,
}

impl ControlGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            ControlGlyph::Play => "▶",
            ControlGlyph::Pause => "⏸",
        }
    }
}

/// Things the frontend should react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Fetch started
    Loading,
    /// List loaded and ordered
    Loaded { count: usize },
    /// User-visible message
    Notice(String),
    /// Active video changed (also sent for the first video after a load)
    TrackChanged { index: usize, id: String },
    /// Play/pause flipped
    PlaybackToggled { paused: bool },
}

/// State owner for the single playback screen
pub struct PlaybackController {
    phase: Phase,
    videos: Vec<VideoViewModel>,
    current_index: usize,
    is_paused: bool,
    player: Option<Box<dyn MediaPlayer>>,
    factory: Box<dyn PlayerFactory>,
    events: mpsc::UnboundedSender<ScreenEvent>,
}

impl PlaybackController {
    /// Create a controller and the receiver for its [`ScreenEvent`]s
    pub fn new(
        factory: impl PlayerFactory + 'static,
    ) -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            phase: Phase::Idle,
            videos: Vec::new(),
            current_index: 0,
            is_paused: true,
            player: None,
            factory: Box::new(factory),
            events,
        };
        (controller, rx)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ordered presentation models
    pub fn videos(&self) -> &[VideoViewModel] {
        &self.videos
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Active presentation model, if a non-empty list is loaded
    pub fn current(&self) -> Option<&VideoViewModel> {
        self.videos.get(self.current_index)
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// True when a media source is loaded into the player slot
    pub fn has_media(&self) -> bool {
        self.player.is_some()
    }

    /// Media source of the current player
    pub fn current_source(&self) -> Option<&Url> {
        self.player.as_ref().map(|p| p.source())
    }

    pub fn control_glyph(&self) -> ControlGlyph {
        if self.is_paused {
            ControlGlyph::Play
        } else {
            ControlGlyph::Pause
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.videos.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0 && !self.videos.is_empty()
    }

    /// Mark the screen as appearing.
    ///
    /// Returns true if the caller should start a fetch and later pass its
    /// outcome to [`finish_load`](Self::finish_load). A fetch already in flight
    /// or a loaded list makes this a no-op.
    pub fn begin_load(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Failed => {
                info!(from = %self.phase, "Loading video list");
                self.phase = Phase::Loading;
                self.emit(ScreenEvent::Loading);
                true
            }
            Phase::Loading | Phase::Ready => {
                debug!(phase = %self.phase, "Appear ignored");
                false
            }
        }
    }

    /// Apply the outcome of the fetch started by [`begin_load`](Self::begin_load)
    pub fn finish_load(&mut self, outcome: Result<Vec<Video>>) {
        if self.phase != Phase::Loading {
            warn!(phase = %self.phase, "Fetch result arrived outside of loading, ignored");
            return;
        }

        match outcome {
            Ok(mut videos) => {
                sort_by_published(&mut videos);
                self.videos = videos.into_iter().map(VideoViewModel::new).collect();
                self.phase = Phase::Ready;
                info!(count = self.videos.len(), "Video list ready");
                self.emit(ScreenEvent::Loaded {
                    count: self.videos.len(),
                });
                self.show(0);
            }
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "Failed to fetch videos");
                self.videos.clear();
                self.current_index = 0;
                self.is_paused = true;
                self.player = None;
                self.phase = Phase::Failed;
                self.emit(ScreenEvent::Notice(FETCH_FAILED_NOTICE.to_string()));
            }
        }
    }

    /// Appear, fetch from `service` and apply the result in one step
    pub async fn appear(&mut self, service: &dyn VideoService) {
        if self.begin_load() {
            let outcome = service.fetch_videos().await;
            self.finish_load(outcome);
        }
    }

    /// Move to the next video; no-op at the end of the list
    pub fn next(&mut self) {
        if self.has_next() {
            self.show(self.current_index + 1);
        }
    }

    /// Move to the previous video; no-op at the start of the list
    pub fn previous(&mut self) {
        if self.has_previous() {
            self.show(self.current_index - 1);
        }
    }

    /// Flip play/pause; no-op without a media source
    pub fn toggle_playback(&mut self) {
        let Some(player) = self.player.as_mut() else {
            debug!("Toggle ignored, no media loaded");
            return;
        };

        if self.is_paused {
            player.play();
        } else {
            player.pause();
        }
        self.is_paused = !self.is_paused;
        self.emit(ScreenEvent::PlaybackToggled {
            paused: self.is_paused,
        });
    }

    /// Point the player slot at `index` and force the paused state
    fn show(&mut self, index: usize) {
        self.current_index = index;
        self.is_paused = true;

        let Some(model) = self.videos.get(index) else {
            self.player = None;
            return;
        };
        let video = model.video();

        self.player = match Url::parse(&video.streaming_url) {
            Ok(source) => Some(self.factory.create(source)),
            Err(e) => {
                warn!(id = %video.id, url = %video.streaming_url, error = %e, "Unplayable streaming URL");
                None
            }
        };

        info!(index, id = %video.id, "Showing video");
        let id = video.id.clone();
        self.emit(ScreenEvent::TrackChanged { index, id });
    }

    fn emit(&self, event: ScreenEvent) {
        // Receiver dropped means nobody is rendering; state is still kept.
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("phase", &self.phase)
            .field("videos", &self.videos.len())
            .field("current_index", &self.current_index)
            .field("is_paused", &self.is_paused)
            .field("source", &self.current_source().map(Url::as_str))
            .finish()
    }
}

/// Order videos by publish time, earliest first.
///
/// Videos whose timestamp does not parse keep their position; the parseable
/// ones are stably sorted among the remaining positions.
pub fn sort_by_published(videos: &mut [Video]) {
    let mut dated: Vec<(usize, chrono::DateTime<chrono::FixedOffset>)> = Vec::new();
    for (slot, video) in videos.iter().enumerate() {
        match video.published_date() {
            Some(date) => dated.push((slot, date)),
            None => warn!(id = %video.id, published_at = %video.published_at, "Unparseable publish date"),
        }
    }

    let slots: Vec<usize> = dated.iter().map(|(slot, _)| *slot).collect();
    dated.sort_by_key(|(_, date)| *date);

    let sorted: Vec<Video> = dated.iter().map(|(from, _)| videos[*from].clone()).collect();
    for (slot, video) in slots.into_iter().zip(sorted) {
        videos[slot] = video;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::LoggingPlayer;
    use crate::types::Author;

    fn video(id: &str, published_at: &str) -> Video {
        Video {
            id: id.into(),
            title: format!("Video {}", id),
            streaming_url: format!("https://cdn.example.com/{}/index.m3u8", id),
            download_url: format!("https://cdn.example.com/{}/full.mp4", id),
            description: String::new(),
            published_at: published_at.into(),
            author: Author {
                name: "Author".into(),
            },
        }
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    fn ready(videos: Vec<Video>) -> (PlaybackController, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (mut controller, rx) = PlaybackController::new(LoggingPlayer::factory());
        assert!(controller.begin_load());
        controller.finish_load(Ok(videos));
        (controller, rx)
    }

    #[test]
    fn test_sort_ascending() {
        let mut videos = vec![
            video("3", "2022-01-03T00:00:00.000Z"),
            video("1", "2022-01-01T00:00:00.000Z"),
            video("2", "2022-01-02T00:00:00.000Z"),
        ];
        sort_by_published(&mut videos);
        assert_eq!(ids(&videos), ["1", "2", "3"]);
    }

    #[test]
    fn test_sort_respects_offsets() {
        let mut videos = vec![
            video("utc", "2022-01-01T01:30:00.000Z"),
            video("plus2", "2022-01-01T03:00:00.000+02:00"),
        ];
        sort_by_published(&mut videos);
        assert_eq!(ids(&videos), ["plus2", "utc"]);
    }

    #[test]
    fn test_sort_keeps_unparseable_in_place() {
        let mut videos = vec![
            video("c", "2022-01-03T00:00:00.000Z"),
            video("x", "not a date"),
            video("a", "2022-01-01T00:00:00.000Z"),
            video("b", "2022-01-02T00:00:00.000Z"),
        ];
        sort_by_published(&mut videos);
        assert_eq!(ids(&videos), ["a", "x", "b", "c"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut videos = vec![
            video("first", "2022-01-01T00:00:00.000Z"),
            video("second", "2022-01-01T00:00:00.000Z"),
        ];
        sort_by_published(&mut videos);
        assert_eq!(ids(&videos), ["first", "second"]);
    }

    #[test]
    fn test_load_shows_first_paused() {
        let (controller, _rx) = ready(vec![
            video("2", "2022-01-02T00:00:00.000Z"),
            video("1", "2022-01-01T00:00:00.000Z"),
        ]);

        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current().unwrap().video().id, "1");
        assert!(controller.is_paused());
        assert_eq!(
            controller.current_source().unwrap().as_str(),
            "https://cdn.example.com/1/index.m3u8"
        );
        assert_eq!(controller.control_glyph(), ControlGlyph::Play);
    }

    #[test]
    fn test_previous_at_start_is_noop() {
        let (mut controller, _rx) = ready(vec![
            video("1", "2022-01-01T00:00:00.000Z"),
            video("2", "2022-01-02T00:00:00.000Z"),
        ]);
        controller.toggle_playback();

        controller.previous();
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_paused());
    }

    #[test]
    fn test_index_change_forces_pause() {
        let (mut controller, _rx) = ready(vec![
            video("1", "2022-01-01T00:00:00.000Z"),
            video("2", "2022-01-02T00:00:00.000Z"),
        ]);

        controller.toggle_playback();
        assert!(!controller.is_paused());
        assert_eq!(controller.control_glyph(), ControlGlyph::Pause);

        controller.next();
        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_paused());
        assert_eq!(
            controller.current_source().unwrap().as_str(),
            "https://cdn.example.com/2/index.m3u8"
        );
    }

    #[test]
    fn test_toggle_without_media_is_noop() {
        let (mut controller, mut rx) = PlaybackController::new(LoggingPlayer::factory());
        controller.toggle_playback();

        assert!(controller.is_paused());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_bad_streaming_url_leaves_no_media() {
        let mut broken = video("1", "2022-01-01T00:00:00.000Z");
        broken.streaming_url = "not a url".into();
        let (mut controller, _rx) = ready(vec![broken]);

        assert!(controller.current().is_some());
        assert!(!controller.has_media());
        controller.toggle_playback();
        assert!(controller.is_paused());
    }

    #[test]
    fn test_empty_list_is_ready_without_media() {
        let (mut controller, _rx) = ready(Vec::new());

        assert_eq!(controller.phase(), Phase::Ready);
        assert!(controller.current().is_none());
        controller.next();
        controller.previous();
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.has_media());
    }

    #[test]
    fn test_begin_load_only_once() {
        let (mut controller, _rx) = PlaybackController::new(LoggingPlayer::factory());
        assert!(controller.begin_load());
        assert!(!controller.begin_load());
        controller.finish_load(Ok(vec![video("1", "2022-01-01T00:00:00.000Z")]));
        assert!(!controller.begin_load());
    }

    #[test]
    fn test_late_result_is_ignored() {
        let (mut controller, _rx) = PlaybackController::new(LoggingPlayer::factory());
        controller.finish_load(Ok(vec![video("1", "2022-01-01T00:00:00.000Z")]));
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.videos().is_empty());
    }
}
