//! CLI command implementations

use crate::output;
use reel_core::{
    sort_by_published, spawn_fetch, ClientConfig, HttpVideoService, LoggingPlayer,
    PlaybackController, ScreenEvent, VideoService,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

/// A line of user input on the player screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Toggle,
    Next,
    Quit,
    Unknown,
}

impl From<&str> for Control {
    fn from(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "p" | "prev" | "previous" => Control::Previous,
            "" | "t" | "toggle" | "play" | "pause" => Control::Toggle,
            "n" | "next" => Control::Next,
            "q" | "quit" | "exit" => Control::Quit,
            _ => Control::Unknown,
        }
    }
}

/// Run the interactive player screen
pub async fn play(config: ClientConfig) -> anyhow::Result<()> {
    let service: Arc<dyn VideoService> = Arc::new(HttpVideoService::new(config)?);
    let (mut controller, mut events) = PlaybackController::new(LoggingPlayer::factory());
    let (tx, mut results) = mpsc::channel(1);

    println!("{}", output::controls_help());
    if controller.begin_load() {
        spawn_fetch(service, tx);
    }
    render_events(&controller, &mut events);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(outcome) = results.recv() => {
                controller.finish_load(outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                match Control::from(line.as_str()) {
                    Control::Previous => controller.previous(),
                    Control::Toggle => controller.toggle_playback(),
                    Control::Next => controller.next(),
                    Control::Quit => break,
                    Control::Unknown => println!("{}", output::controls_help()),
                }
            }
        }
        render_events(&controller, &mut events);
    }

    Ok(())
}

/// Drain pending screen events and redraw once if anything changed
fn render_events(
    controller: &PlaybackController,
    events: &mut mpsc::UnboundedReceiver<ScreenEvent>,
) {
    let mut redraw = false;
    while let Ok(event) = events.try_recv() {
        match event {
            ScreenEvent::Loading => println!("Loading videos…"),
            ScreenEvent::Notice(message) => println!("{}", output::render_notice(&message)),
            ScreenEvent::Loaded { .. }
            | ScreenEvent::TrackChanged { .. }
            | ScreenEvent::PlaybackToggled { .. } => redraw = true,
        }
    }
    if redraw {
        println!("{}", output::render_screen(controller));
    }
}

/// Fetch, order and print the video list
pub async fn list(config: ClientConfig, format: &str) -> anyhow::Result<()> {
    let service = HttpVideoService::new(config)?;
    let mut videos = service.fetch_videos().await?;
    sort_by_published(&mut videos);

    println!("{}", output::format_videos(&videos, format)?);
    Ok(())
}
