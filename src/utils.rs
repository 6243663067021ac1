use std::{fmt, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Historical ranking interval used to compute "top" entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// Roughly the last 4 weeks.
    #[default]
    ShortTerm,
    /// Roughly the last 6 months.
    MediumTerm,
    /// Several years of history.
    LongTerm,
}

impl Window {
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::ShortTerm => "short_term",
            Window::MediumTerm => "medium_term",
            Window::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-order key for a sorted working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Artist,
}

/// Parses `short`, `medium`, `long` or the API spelling (`short_term`, ...).
pub fn parse_window(s: &str) -> Result<Window, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "short" | "short_term" | "4w" => Ok(Window::ShortTerm),
        "medium" | "medium_term" | "6m" => Ok(Window::MediumTerm),
        "long" | "long_term" | "all" => Ok(Window::LongTerm),
        other => Err(format!(
            "invalid window '{}', expected one of: short, medium, long",
            other
        )),
    }
}

pub fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "artist" => Ok(SortKey::Artist),
        other => Err(format!(
            "invalid sort key '{}', expected one of: name, artist",
            other
        )),
    }
}

/// Spotify URI for a bare track id, as the playlist endpoints expect.
pub fn track_uri(track_id: &str) -> String {
    format!("spotify:track:{}", track_id)
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
