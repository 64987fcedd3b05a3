//! Game rules module
//!
//! Pure and deterministic:
//! - Round outcome is a fixed lookup over move pairs
//! - CPU randomness is injected through `MovePicker`
//! - No storage or platform dependencies

pub mod rps;
pub mod state;

pub use rps::{FixedPicker, Move, MovePicker, RandomPicker, RoundOutcome, resolve};
pub use state::{RoundRecord, ScoreState};
