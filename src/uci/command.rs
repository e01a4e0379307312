//! Commands sent to a UCI engine.

use std::fmt;

/// A command line sent to the engine. `Display` gives the exact wire text
/// without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Uci,
    IsReady,
    SetOption { name: String, value: Option<String> },
    PositionFen(String),
    GoMovetime(u64),
    Stop,
    Quit,
}

impl EngineCommand {
    /// `setoption name MultiPV value <n>`
    #[must_use]
    pub fn multi_pv(lines: usize) -> Self {
        EngineCommand::SetOption {
            name: "MultiPV".to_string(),
            value: Some(lines.to_string()),
        }
    }
}

impl fmt::Display for EngineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineCommand::Uci => write!(f, "uci"),
            EngineCommand::IsReady => write!(f, "isready"),
            EngineCommand::SetOption { name, value } => {
                write!(f, "setoption name {name}")?;
                if let Some(value) = value {
                    write!(f, " value {value}")?;
                }
                Ok(())
            }
            EngineCommand::PositionFen(fen) => write!(f, "position fen {fen}"),
            EngineCommand::GoMovetime(ms) => write!(f, "go movetime {ms}"),
            EngineCommand::Stop => write!(f, "stop"),
            EngineCommand::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_text() {
        assert_eq!(EngineCommand::Uci.to_string(), "uci");
        assert_eq!(EngineCommand::IsReady.to_string(), "isready");
        assert_eq!(
            EngineCommand::multi_pv(3).to_string(),
            "setoption name MultiPV value 3"
        );
        assert_eq!(
            EngineCommand::SetOption {
                name: "Clear Hash".to_string(),
                value: None
            }
            .to_string(),
            "setoption name Clear Hash"
        );
        assert_eq!(
            EngineCommand::PositionFen(crate::board::START_FEN.to_string()).to_string(),
            "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(EngineCommand::GoMovetime(250).to_string(), "go movetime 250");
        assert_eq!(EngineCommand::Quit.to_string(), "quit");
    }
}
