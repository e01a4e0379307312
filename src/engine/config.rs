//! Engine discovery and polling configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_HANDSHAKE_ATTEMPTS: u32 = 50;
pub const DEFAULT_ANALYSIS_ATTEMPTS: u32 = 50;
pub const DEFAULT_TOP_MOVES_MOVETIME_MS: u64 = 1000;
pub const DEFAULT_BEST_MOVE_MOVETIME_MS: u64 = 500;
pub const DEFAULT_EXIT_ATTEMPTS: u32 = 20;
/// Upper bound on the MultiPV width requested from the engine
pub const MAX_MULTIPV: usize = 5;

/// A program to launch as a UCI engine, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineBinary {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl EngineBinary {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        EngineBinary {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl From<&str> for EngineBinary {
    fn from(program: &str) -> Self {
        EngineBinary::new(program)
    }
}

impl fmt::Display for EngineBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How to find an engine and how patiently to talk to it.
///
/// Every protocol exchange sleeps `poll_interval` between reads and gives
/// up after its attempt budget, so the longest wait of an exchange is
/// `poll_interval * attempts`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Programs tried in order; the first to finish the handshake wins
    pub candidates: Vec<EngineBinary>,
    pub poll_interval: Duration,
    /// Budget for each of the `uciok` and `readyok` waits
    pub handshake_attempts: u32,
    /// Budget for waiting on analysis or a best move
    pub analysis_attempts: u32,
    pub top_moves_movetime_ms: u64,
    pub best_move_movetime_ms: u64,
    pub max_multipv: usize,
    /// Budget for the child to exit after `quit` before it is killed
    pub exit_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            candidates: vec![EngineBinary::new("stockfish"), EngineBinary::new("asmfish")],
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            handshake_attempts: DEFAULT_HANDSHAKE_ATTEMPTS,
            analysis_attempts: DEFAULT_ANALYSIS_ATTEMPTS,
            top_moves_movetime_ms: DEFAULT_TOP_MOVES_MOVETIME_MS,
            best_move_movetime_ms: DEFAULT_BEST_MOVE_MOVETIME_MS,
            max_multipv: MAX_MULTIPV,
            exit_attempts: DEFAULT_EXIT_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Default settings with a custom candidate list
    #[must_use]
    pub fn with_candidates<I, B>(candidates: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<EngineBinary>,
    {
        EngineConfig {
            candidates: candidates.into_iter().map(Into::into).collect(),
            ..EngineConfig::default()
        }
    }

    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn handshake_attempts(mut self, attempts: u32) -> Self {
        self.handshake_attempts = attempts;
        self
    }

    #[must_use]
    pub fn analysis_attempts(mut self, attempts: u32) -> Self {
        self.analysis_attempts = attempts;
        self
    }

    #[must_use]
    pub fn movetimes(mut self, top_moves_ms: u64, best_move_ms: u64) -> Self {
        self.top_moves_movetime_ms = top_moves_ms;
        self.best_move_movetime_ms = best_move_ms;
        self
    }

    #[must_use]
    pub fn exit_attempts(mut self, attempts: u32) -> Self {
        self.exit_attempts = attempts;
        self
    }
}
