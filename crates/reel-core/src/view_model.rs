//! Presentation model for a single video

use crate::types::Video;

/// Read-only view over one [`Video`] with its composed markdown text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoViewModel {
    video: Video,
}

impl VideoViewModel {
    pub fn new(video: Video) -> Self {
        Self { video }
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    /// Title and author as `#` heading lines, a blank line, then the raw description
    pub fn description_text(&self) -> String {
        format!(
            "#{}\n#{}\n\n{}",
            self.video.title, self.video.author.name, self.video.description
        )
    }
}

impl From<Video> for VideoViewModel {
    fn from(video: Video) -> Self {
        Self::new(video)
    }
}
