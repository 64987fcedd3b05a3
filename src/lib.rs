//! RPS Arena - a two-page Rock-Paper-Scissors browser game
//!
//! Core modules:
//! - `sim`: Round resolution, CPU opponent and transient score state
//! - `persistence`: Settings/highscores codec over a key-value store
//! - `session`: Settings page and play page controllers
//! - `platform`: Storage backends and browser DOM wiring

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighscoreRecord;
pub use platform::storage::{KeyValueStore, MemoryStore};
pub use session::{FormState, PlaySession, SetupPage};
pub use settings::{Avatar, Difficulty, Settings, Theme};
pub use sim::{Move, RoundOutcome, resolve};

/// Game configuration constants
pub mod consts {
    /// LocalStorage key for the settings record
    pub const SETTINGS_KEY: &str = "game.settings";
    /// LocalStorage key for the highscores list
    pub const HIGHSCORES_KEY: &str = "game.highscores";

    /// Rounds kept in the on-screen history (newest first)
    pub const MAX_HISTORY: usize = 10;

    /// Settings/setup document
    pub const SETTINGS_PAGE: &str = "index.html";
    /// Play document
    pub const GAME_PAGE: &str = "game.html";

    /// Store file used by the native binary when no path is given
    pub const DEFAULT_STORE_PATH: &str = "rps_arena_store.json";
}
