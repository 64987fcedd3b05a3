//! Moves, round resolution and the CPU opponent

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::fmt;

/// A hand shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Parse a move name; accepts single-letter shorthand
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Some(Move::Rock),
            "paper" | "p" => Some(Move::Paper),
            "scissors" | "s" => Some(Move::Scissors),
            _ => None,
        }
    }

    /// The move this one defeats
    pub fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// The move that defeats this one
    pub fn beaten_by(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one round, from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    PlayerWin,
    CpuWin,
    Tie,
}

impl RoundOutcome {
    pub fn verdict(&self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "You win",
            RoundOutcome::CpuWin => "CPU wins",
            RoundOutcome::Tie => "Tie",
        }
    }
}

/// Resolve a round
pub fn resolve(player: Move, cpu: Move) -> RoundOutcome {
    if player == cpu {
        RoundOutcome::Tie
    } else if player.beats() == cpu {
        RoundOutcome::PlayerWin
    } else {
        RoundOutcome::CpuWin
    }
}

/// Source of CPU moves
pub trait MovePicker {
    fn pick(&mut self) -> Move;
}

/// Uniform random CPU, seeded for reproducibility
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: Pcg32,
}

impl RandomPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl MovePicker for RandomPicker {
    fn pick(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

/// Replays a fixed script of moves, cycling when exhausted.
/// An empty script plays rock, paper, scissors in turn.
#[derive(Debug, Clone)]
pub struct FixedPicker {
    moves: Vec<Move>,
    next: usize,
}

impl FixedPicker {
    pub fn new(moves: Vec<Move>) -> Self {
        let moves = if moves.is_empty() { Move::ALL.to_vec() } else { moves };
        Self { moves, next: 0 }
    }
}

impl MovePicker for FixedPicker {
    fn pick(&mut self) -> Move {
        let mv = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        mv
    }
}
