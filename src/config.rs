//! Command line configuration for a match
//!
//! The engine constants are fixed at compile time; only the match setup and
//! the search depth can be changed when starting the game.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};

use connect4_minimax::{board::Player, SEARCH_DEPTH};

/// Deepest search the computer will run; the tree grows sevenfold per ply
pub const MAX_DEPTH: u32 = 10;

/// Who drops the first piece
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl FirstPlayer {
    pub fn choose(self) -> Player {
        match self {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Computer => Player::Computer,
            FirstPlayer::Random => {
                if rand::random() {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax opponent")]
pub struct Config {
    /// Number of plies the computer searches
    #[arg(long, default_value_t = SEARCH_DEPTH)]
    pub depth: u32,

    /// Who plays first
    #[arg(long, value_enum, default_value_t = FirstPlayer::Random)]
    pub first: FirstPlayer,

    /// Resume from a position given as zero-indexed columns, human moving first
    #[arg(long)]
    pub moves: Option<String>,

    /// Search the computer's candidate moves on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Log filter directive, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(anyhow!(
                "search depth {} out of range, must be between 1 and {}",
                self.depth,
                MAX_DEPTH
            ));
        }
        Ok(())
    }
}
