//! Transient score state for one play session
//!
//! Nothing here is persisted; only the final win count ends up in a
//! highscore record.

use std::fmt;

use super::rps::{Move, RoundOutcome, resolve};
use crate::consts::MAX_HISTORY;

/// One resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub player: Move,
    pub cpu: Move,
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    pub fn new(player: Move, cpu: Move) -> Self {
        Self {
            player,
            cpu,
            outcome: resolve(player, cpu),
        }
    }
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player({}) vs CPU({}) - {}",
            self.player,
            self.cpu,
            self.outcome.verdict()
        )
    }
}

/// Counters and recent history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub player_wins: u32,
    pub cpu_wins: u32,
    pub ties: u32,
    /// Most recent first, at most `MAX_HISTORY` entries
    pub history: Vec<RoundRecord>,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a round and push it onto the history
    pub fn record(&mut self, round: RoundRecord) {
        match round.outcome {
            RoundOutcome::PlayerWin => self.player_wins += 1,
            RoundOutcome::CpuWin => self.cpu_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
        self.history.insert(0, round);
        self.history.truncate(MAX_HISTORY);
    }

    /// Rounds counted since the last reset (not capped by history)
    pub fn rounds_played(&self) -> u32 {
        self.player_wins + self.cpu_wins + self.ties
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_one_counter() {
        let mut score = ScoreState::new();
        score.record(RoundRecord::new(Move::Rock, Move::Scissors));
        score.record(RoundRecord::new(Move::Rock, Move::Paper));
        score.record(RoundRecord::new(Move::Rock, Move::Rock));
        assert_eq!((score.player_wins, score.cpu_wins, score.ties), (1, 1, 1));
        assert_eq!(score.rounds_played(), 3);
    }

    #[test]
    fn test_history_newest_first_and_bounded() {
        let mut score = ScoreState::new();
        for _ in 0..MAX_HISTORY {
            score.record(RoundRecord::new(Move::Paper, Move::Paper));
        }
        score.record(RoundRecord::new(Move::Scissors, Move::Paper));

        assert_eq!(score.history.len(), MAX_HISTORY);
        assert_eq!(score.history[0].player, Move::Scissors);
        assert_eq!(score.rounds_played() as usize, MAX_HISTORY + 1);
    }

    #[test]
    fn test_reset() {
        let mut score = ScoreState::new();
        score.record(RoundRecord::new(Move::Rock, Move::Scissors));
        score.reset();
        assert_eq!(score, ScoreState::default());
    }

    #[test]
    fn test_round_display() {
        let round = RoundRecord::new(Move::Rock, Move::Paper);
        assert_eq!(round.to_string(), "Player(rock) vs CPU(paper) - CPU wins");
    }
}
