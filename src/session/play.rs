//! Play page controller
//!
//! Owns the transient score state and writes one highscore per session.

use crate::highscores::{self, HighscoreRecord};
use crate::persistence;
use crate::platform::storage::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{Move, MovePicker, RoundRecord, ScoreState};

/// Play page state
pub struct PlaySession<S: KeyValueStore, P: MovePicker> {
    store: S,
    picker: P,
    settings: Settings,
    score: ScoreState,
    /// Rounds were played since the last highscore write or reset
    unrecorded: bool,
    highscores: Vec<HighscoreRecord>,
}

impl<S: KeyValueStore, P: MovePicker> PlaySession<S, P> {
    /// Open the play page; `None` when no settings are stored
    pub fn start(store: S, picker: P) -> Option<Self> {
        let Some(settings) = persistence::load_settings(&store) else {
            log::warn!("No stored settings, cannot start a session");
            return None;
        };
        Some(Self::with_settings(store, picker, settings))
    }

    pub fn with_settings(store: S, picker: P, settings: Settings) -> Self {
        let highscores = persistence::get_highscores(&store);
        log::info!(
            "Session started for {} on {} ({} highscores)",
            settings.name,
            settings.difficulty.as_str(),
            highscores.len()
        );
        Self {
            store,
            picker,
            settings,
            score: ScoreState::new(),
            unrecorded: false,
            highscores,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn greeting(&self) -> String {
        self.settings.greeting()
    }

    /// Difficulty label; it has no effect on the CPU
    pub fn difficulty_label(&self) -> &'static str {
        self.settings.difficulty.as_str()
    }

    pub fn theme_class(&self) -> &'static str {
        self.settings.theme.body_class()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Play one round against the CPU
    pub fn play(&mut self, player: Move) -> RoundRecord {
        let round = RoundRecord::new(player, self.picker.pick());
        self.score.record(round);
        self.unrecorded = true;
        log::debug!(
            "{} (player {} / cpu {} / ties {})",
            round,
            self.score.player_wins,
            self.score.cpu_wins,
            self.score.ties
        );
        round
    }

    /// Zero the counters and clear history; settings are untouched
    pub fn reset(&mut self) {
        self.score.reset();
        self.unrecorded = false;
        log::info!("Score reset");
    }

    /// Record the session's score on teardown.
    ///
    /// Writes nothing if no round was played since the last reset or the
    /// last write. The score itself is left as is.
    pub fn end_session(&mut self, date: &str) -> Option<HighscoreRecord> {
        if !self.unrecorded || self.score.rounds_played() == 0 {
            log::debug!("No new rounds, no highscore written");
            return None;
        }
        let record = HighscoreRecord::new(self.settings.name.clone(), self.score.player_wins, date);
        self.highscores = persistence::append_highscore(&mut self.store, record.clone());
        self.unrecorded = false;
        log::info!("Highscore recorded: {} scored {}", record.name, record.score);
        Some(record)
    }

    /// Stored highscores as loaded (or last written) by this page
    pub fn highscores(&self) -> &[HighscoreRecord] {
        &self.highscores
    }

    /// Display lines, best first
    pub fn highscore_lines(&self) -> Vec<String> {
        highscores::ranked(&self.highscores)
            .into_iter()
            .map(HighscoreRecord::display_line)
            .collect()
    }

    pub fn clear_highscores(&mut self) {
        persistence::set_highscores(&mut self.store, &[]);
        self.highscores.clear();
        log::info!("Highscores cleared");
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
