use std::fmt;
use std::io;

/// Failures while launching an external engine.
///
/// Once an engine is running, protocol trouble is reported through return
/// values (`false`, `None`, empty lists) rather than errors.
#[derive(Debug)]
pub enum EngineError {
    /// The program could not be spawned
    Spawn { program: String, source: io::Error },
    /// The program started but never answered `uciok` and `readyok`
    Handshake { program: String },
    /// Every configured candidate failed
    NoEngineAvailable { tried: Vec<String> },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Spawn { program, source } => {
                write!(f, "failed to start engine '{program}': {source}")
            }
            EngineError::Handshake { program } => {
                write!(f, "engine '{program}' did not complete the UCI handshake")
            }
            EngineError::NoEngineAvailable { tried } if tried.is_empty() => {
                write!(f, "no engine candidates configured")
            }
            EngineError::NoEngineAvailable { tried } => {
                write!(f, "no UCI engine available (tried: {})", tried.join(", "))
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        let err = EngineError::NoEngineAvailable {
            tried: vec!["stockfish".into(), "asmfish".into()],
        };
        assert_eq!(
            err.to_string(),
            "no UCI engine available (tried: stockfish, asmfish)"
        );
        let none = EngineError::NoEngineAvailable { tried: vec![] };
        assert_eq!(none.to_string(), "no engine candidates configured");
    }

    #[test]
    fn test_spawn_source() {
        let err = EngineError::Spawn {
            program: "missing".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to start engine 'missing'"));
        assert!(EngineError::Handshake { program: "x".into() }.source().is_none());
    }
}
