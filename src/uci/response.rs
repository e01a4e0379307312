//! Lines received from a UCI engine.

/// One `info` line carrying a ranked candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    /// 1-based rank of the line
    pub multipv: usize,
    /// Centipawns from the side to move's view; 0 when the engine reports
    /// a mate score instead
    pub score_cp: i32,
    /// First move of the principal variation
    pub pv_move: String,
}

/// A classified engine output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineResponse {
    UciOk,
    ReadyOk,
    Info(InfoLine),
    BestMove { mv: String, ponder: Option<String> },
    Other(String),
}

/// Classify a single line of engine output.
#[must_use]
pub fn parse_line(line: &str) -> EngineResponse {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.contains("uciok") {
        return EngineResponse::UciOk;
    }
    if line.contains("readyok") {
        return EngineResponse::ReadyOk;
    }
    if let Some(rest) = line.strip_prefix("bestmove ") {
        let mut tokens = rest.split_whitespace();
        if let Some(mv) = tokens.next() {
            let ponder = match (tokens.next(), tokens.next()) {
                (Some("ponder"), Some(p)) => Some(p.to_string()),
                _ => None,
            };
            return EngineResponse::BestMove {
                mv: mv.to_string(),
                ponder,
            };
        }
    }
    if let Some(info) = parse_info(line) {
        return EngineResponse::Info(info);
    }
    EngineResponse::Other(line.to_string())
}

/// Parse an `info` line that names a multipv index, a score and a pv.
fn parse_info(line: &str) -> Option<InfoLine> {
    if !line.starts_with("info ")
        || !line.contains(" multipv ")
        || !line.contains(" score ")
        || !line.contains(" pv ")
    {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let after = |key: &str| {
        tokens
            .iter()
            .position(|t| *t == key)
            .and_then(|i| tokens.get(i + 1).copied())
    };

    let multipv = after("multipv")?.parse::<usize>().ok()?;
    let pv_move = after("pv")?.to_string();

    let score_at = tokens.iter().position(|t| *t == "score")?;
    let score_cp = match tokens.get(score_at + 1..score_at + 3) {
        Some(["cp", value]) => value.parse::<i32>().unwrap_or(0),
        _ => 0,
    };

    Some(InfoLine {
        multipv,
        score_cp,
        pv_move,
    })
}
