//! Page controllers
//!
//! - `setup`: settings form, save, start gating
//! - `play`: rounds, score, reset, highscores

pub mod play;
pub mod setup;

pub use play::PlaySession;
pub use setup::{FormState, SettingsForm, SetupPage};
