//! Output formatting for CLI

use console::style;
use reel_core::{PlaybackController, Video};
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Format the ordered video list
pub fn format_videos(videos: &[Video], format: &str) -> anyhow::Result<String> {
    match OutputFormat::from(format) {
        OutputFormat::Json => to_json(&videos),
        OutputFormat::Text => {
            let lines: Vec<String> = videos
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    format!(
                        "{:>3}. {}  {} - {} ({})",
                        i + 1,
                        v.published_at,
                        v.id,
                        v.title,
                        v.author.name
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Render markdown text: `#` lines become bold headings, the rest is printed as is
pub fn render_markdown(text: &str) -> String {
    text.lines()
        .map(|line| match line.strip_prefix('#') {
            Some(heading) => style(heading.trim_start_matches('#').trim()).bold().to_string(),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the player screen for the active video
pub fn render_screen(controller: &PlaybackController) -> String {
    let Some(model) = controller.current() else {
        return style("No videos available").dim().to_string();
    };

    let video = model.video();
    let source = controller
        .current_source()
        .map(|u| u.to_string())
        .unwrap_or_else(|| "(no playable source)".to_string());

    let prev = if controller.has_previous() { "⏮" } else { " " };
    let next = if controller.has_next() { "⏭" } else { " " };

    format!(
        "{}\n{}\n[ {}  {}  {} ]  {}/{}\n\n{}\n{}",
        style("─".repeat(48)).dim(),
        style(source).cyan(),
        prev,
        controller.control_glyph().symbol(),
        next,
        controller.current_index() + 1,
        controller.videos().len(),
        render_markdown(&model.description_text()),
        style(format!("id {}", video.id)).dim(),
    )
}

/// Render a user-visible notice
pub fn render_notice(message: &str) -> String {
    style(message).red().bold().to_string()
}

/// Key reference shown at startup
pub fn controls_help() -> &'static str {
    "Controls: [p]revious  [t]oggle (or Enter)  [n]ext  [q]uit"
}
