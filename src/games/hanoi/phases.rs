//! Game status and terminal outcomes.

use serde::{Deserialize, Serialize};

/// Status of a puzzle; terminal once it leaves `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// Every disk reached the destination rod.
    Won,
    /// Invalid attempts used up every life.
    LostLives,
    /// The move budget ran out before the tower was solved.
    LostMoves,
}

impl Status {
    /// Returns true unless the game is still in progress.
    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }

    /// The outcome this status ends the game with, if any.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Won => Some(Outcome::Won),
            Status::LostLives => Some(Outcome::LostLives),
            Status::LostMoves => Some(Outcome::LostMoves),
        }
    }
}

/// Outcome of a finished game.
///
/// Unlike [`Status`] this has no in-progress variant, so a finished
/// puzzle always has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player solved the puzzle.
    Won,
    /// The player ran out of lives.
    LostLives,
    /// The player ran out of moves.
    LostMoves,
}

impl Outcome {
    /// Returns true if the player won.
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }

    /// End-of-game message shown to the player.
    pub fn message(self, player_name: &str) -> String {
        match self {
            Outcome::Won => format!("Congratulations, {}! You have won the game.", player_name),
            Outcome::LostLives => "Game Over! You have lost all your lives.".to_string(),
            Outcome::LostMoves => {
                "Game Over! You have exceeded the maximum number of moves.".to_string()
            }
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Status::Won,
            Outcome::LostLives => Status::LostLives,
            Outcome::LostMoves => Status::LostMoves,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Won"),
            Outcome::LostLives => write!(f, "Out of lives"),
            Outcome::LostMoves => write!(f, "Out of moves"),
        }
    }
}
