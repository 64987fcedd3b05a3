//! Highscore records
//!
//! One record per finished session, appended to a single LocalStorage list.

use serde::{Deserialize, Serialize};

/// A single highscore entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreRecord {
    /// Player name at the time the session ended
    pub name: String,
    /// Rounds won by the player
    pub score: u32,
    /// ISO-8601 timestamp of the session end
    pub date: String,
}

impl HighscoreRecord {
    pub fn new(name: impl Into<String>, score: u32, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            date: date.into(),
        }
    }

    /// Line shown in the highscores list
    pub fn display_line(&self) -> String {
        format!("{}: {} ({})", self.name, self.score, format_date(&self.date))
    }
}

/// Records ordered for display: best score first, newest first on ties
pub fn ranked(records: &[HighscoreRecord]) -> Vec<&HighscoreRecord> {
    let mut sorted: Vec<&HighscoreRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.date.cmp(&a.date)));
    sorted
}

/// Date portion of an ISO timestamp (`2024-01-01T10:00:00Z` -> `2024-01-01`)
pub fn format_date(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}
