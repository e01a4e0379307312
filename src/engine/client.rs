//! Analysis requests on top of a running engine.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, warn};

use super::config::EngineConfig;
use super::error::EngineError;
use super::process::EngineProcess;
use crate::board::{Move, MoveParseError, Position};
use crate::uci::{parse_line, EngineCommand, EngineResponse};

/// A candidate reported by the engine: its first move and score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineMove {
    /// Centipawns from the side to move's point of view
    pub score_cp: i32,
    /// Move in UCI coordinate text, e.g. `e2e4` or `e7e8q`
    pub uci: String,
}

impl EngineMove {
    /// Resolve the move text against `position`.
    pub fn resolve(&self, position: &Position) -> Result<Move, MoveParseError> {
        position.parse_move(&self.uci)
    }
}

impl fmt::Display for EngineMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+} cp)", self.uci, self.score_cp)
    }
}

/// Asks a UCI engine for the best move or a ranked list of moves.
///
/// Every request is bounded: it waits at most
/// `poll_interval * analysis_attempts` and returns whatever it has by then.
pub struct EngineClient {
    process: EngineProcess,
    config: EngineConfig,
    /// A `go` was sent whose `bestmove` has not been seen yet
    searching: bool,
}

impl EngineClient {
    /// Launch the first working engine from `config.candidates`.
    pub fn start(config: EngineConfig) -> Result<Self, EngineError> {
        let process = EngineProcess::start(&config)?;
        Ok(EngineClient::new(process, config))
    }

    /// Wrap an already started process.
    #[must_use]
    pub fn new(process: EngineProcess, config: EngineConfig) -> Self {
        EngineClient {
            process,
            config,
            searching: false,
        }
    }

    #[must_use]
    pub fn process(&self) -> &EngineProcess {
        &self.process
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Up to `max` candidate moves for `position`, best score first.
    ///
    /// The request asks for `min(max, max_multipv)` lines. For each line
    /// the latest report wins. If the engine runs out of time the lines
    /// seen so far are returned, which may be none at all.
    pub fn get_top_moves(&mut self, position: &Position, max: usize) -> Vec<EngineMove> {
        let width = max.min(self.config.max_multipv);
        if width == 0 {
            return Vec::new();
        }
        self.settle();

        let sent = self.process.send(&EngineCommand::PositionFen(position.to_fen()))
            && self.process.send(&EngineCommand::multi_pv(width))
            && self
                .process
                .send(&EngineCommand::GoMovetime(self.config.top_moves_movetime_ms));
        if !sent {
            warn!("could not request analysis from '{}'", self.process.program());
            return Vec::new();
        }
        self.searching = true;

        let mut slots: Vec<Option<EngineMove>> = vec![None; width];
        let interval = self.config.poll_interval;
        let finished = self
            .process
            .poll(interval, self.config.analysis_attempts, |line| {
                match parse_line(line) {
                    EngineResponse::Info(info) if (1..=width).contains(&info.multipv) => {
                        slots[info.multipv - 1] = Some(EngineMove {
                            score_cp: info.score_cp,
                            uci: info.pv_move,
                        });
                        false
                    }
                    EngineResponse::BestMove { .. } => true,
                    _ => false,
                }
            });
        if finished {
            self.searching = false;
        } else {
            debug!("analysis timed out, returning partial results");
        }

        let mut moves: Vec<EngineMove> = slots.into_iter().flatten().collect();
        moves.sort_by(|a, b| b.score_cp.cmp(&a.score_cp));
        moves
    }

    /// The engine's chosen move for `position`, or `None` if it gave no
    /// answer in time or reported that no move exists.
    pub fn get_best_move(&mut self, position: &Position) -> Option<String> {
        self.settle();

        let sent = self.process.send(&EngineCommand::PositionFen(position.to_fen()))
            && self
                .process
                .send(&EngineCommand::GoMovetime(self.config.best_move_movetime_ms));
        if !sent {
            warn!("could not request a move from '{}'", self.process.program());
            return None;
        }
        self.searching = true;

        let mut best = None;
        let interval = self.config.poll_interval;
        let finished = self
            .process
            .poll(interval, self.config.analysis_attempts, |line| {
                match parse_line(line) {
                    EngineResponse::BestMove { mv, .. } => {
                        best = Some(mv);
                        true
                    }
                    _ => false,
                }
            });
        if finished {
            self.searching = false;
        }

        best.filter(|mv| mv != "(none)" && mv != "0000")
    }

    /// Stop the engine process.
    pub fn stop(&mut self) {
        self.process.stop();
    }

    /// Finish an abandoned search and drop output left over from it, so the
    /// next request only sees its own lines.
    fn settle(&mut self) {
        if self.searching {
            debug!("stopping unfinished search on '{}'", self.process.program());
            if self.process.send(&EngineCommand::Stop) {
                let interval = self.config.poll_interval;
                self.process
                    .poll(interval, self.config.analysis_attempts, |line| {
                        matches!(parse_line(line), EngineResponse::BestMove { .. })
                    });
            }
            self.searching = false;
        }
        self.process.read_lines();
    }
}
