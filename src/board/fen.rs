use std::str::FromStr;

use super::error::{FenError, LineError, MoveParseError};
use super::{CastlingRights, Cell, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// 0 and 1.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(FenError::ZeroEmptyRun { rank: rank + 1 });
                    }
                    file += run as usize;
                    continue;
                }
                let cell = Cell::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankWidth {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                position.set(Square::at(rank, file), cell);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => position.castling.set(Color::White, true),
                    'Q' => position.castling.set(Color::White, false),
                    'k' => position.castling.set(Color::Black, true),
                    'q' => position.castling.set(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        position.en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        let counter = |s: &str| {
            s.parse::<u32>().map_err(|_| FenError::InvalidCounter {
                found: s.to_string(),
            })
        };
        if let Some(halfmove) = parts.get(4) {
            position.halfmove_clock = counter(halfmove)?;
        }
        if let Some(fullmove) = parts.get(5) {
            position.fullmove_number = counter(fullmove)?;
        }

        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.cell(Square::at(rank, file)) {
                    Cell::Empty => empty += 1,
                    Cell::Occupied(color, piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g. "e2e4", "e7e8q").
    ///
    /// The move is looked up in the current legal move list; coordinates
    /// alone never produce a move. A promotion letter selects the piece of
    /// the matching promotion move.
    ///
    /// # Example
    /// ```
    /// use chess_bridge::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            Some(c) => {
                let piece = Piece::from_char(c)
                    .filter(|p| p.is_promotion_target() && c.is_ascii_lowercase())
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?;
                Some(piece)
            }
            None => None,
        };

        let illegal = || MoveParseError::IllegalMove {
            notation: uci.to_string(),
        };
        let mut mv = self
            .generate_legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or_else(illegal)?;

        if let Some(piece) = promotion {
            if mv.promotion.is_none() {
                return Err(illegal());
            }
            mv.promotion = Some(piece);
        }
        Ok(mv)
    }

    /// Parse a UCI move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_bridge::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.play_uci("e2e4").unwrap();
    /// position.play_uci("e7e5").unwrap();
    /// assert_eq!(position.fullmove_number(), 2);
    /// ```
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mut mv = self.parse_move(uci)?;
        self.make_move(&mut mv).map_err(|_| MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })?;
        Ok(mv)
    }

    /// Play a space-separated UCI move history, returning the moves made.
    ///
    /// Stops at the first move that cannot be played; moves before it stay
    /// applied.
    pub fn play_line(&mut self, line: &str) -> Result<Vec<Move>, LineError> {
        line.split_whitespace()
            .enumerate()
            .map(|(index, uci)| {
                self.play_uci(uci)
                    .map_err(|error| LineError::Move { index, error })
            })
            .collect()
    }

    /// Rebuild a position from a FEN and the move history played from it.
    pub fn replay(fen: &str, line: &str) -> Result<Self, LineError> {
        let mut position = Position::from_fen(fen)?;
        position.play_line(line)?;
        Ok(position)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_fen_round_trip_start() {
        let position = Position::from_fen(START_FEN).unwrap();
        assert_eq!(position, Position::new());
        assert_eq!(position.to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let position = Position::from_fen(fen).unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.en_passant(), Some(sq("e3")));
        assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn test_fen_counters() {
        let position = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(position.halfmove_clock(), 42);
        assert_eq!(position.fullmove_number(), 17);
    }

    #[test]
    fn test_fen_counters_default() {
        let position = Position::from_fen("8/8/8/8/8/8/8/K1k5 b - -").unwrap();
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/K1k5 b - - 0 1");
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_too_many_parts() {
        let result = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - 0 1 extra");
        assert!(matches!(result, Err(FenError::TooManyParts { found: 7 })));
    }

    #[test]
    fn test_fen_error_zero_empty_run() {
        let result = Position::from_fen("8/8/8/8/8/8/8/K01k5 w - - 0 1");
        assert!(matches!(result, Err(FenError::ZeroEmptyRun { rank: 1 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let short = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(short, Err(FenError::WrongRankCount { found: 7 })));

        let wide = Position::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(matches!(wide, Err(FenError::BadRankWidth { rank: 7, .. })));

        let narrow = Position::from_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(matches!(
            narrow,
            Err(FenError::BadRankWidth { rank: 6, files: 7 })
        ));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_counter() {
        let result = Position::from_fen("8/8/8/8/8/8/8/K1k5 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let position =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
        assert!(position.to_fen().contains(" Kq "));
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = START_FEN.parse().unwrap();
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn test_parse_move_e2e4() {
        let position = Position::new();
        let mv = position.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), sq("e2"));
        assert_eq!(mv.to(), sq("e4"));
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn test_parse_move_promotion() {
        let position = Position::from_fen("8/4P3/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = position.parse_move("e7e8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        let mv = position.parse_move("e7e8n").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_parse_move_black_promotion_lands_black_piece() {
        let mut position = Position::from_fen("K1k5/8/8/8/8/8/3p4/8 b - - 0 1").unwrap();
        position.play_uci("d2d1r").unwrap();
        assert_eq!(
            position.cell(sq("d1")),
            Cell::Occupied(Color::Black, Piece::Rook)
        );
    }

    #[test]
    fn test_parse_move_error_invalid_length() {
        let position = Position::new();
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_square() {
        let position = Position::new();
        assert!(matches!(
            position.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_illegal() {
        let position = Position::new();
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_move_error_invalid_promotion() {
        let position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(matches!(
            position.parse_move("a7a8p"),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
        assert!(matches!(
            position.parse_move("a7a8k"),
            Err(MoveParseError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_parse_move_rejects_promotion_letter_on_plain_move() {
        let position = Position::new();
        assert!(matches!(
            position.parse_move("e2e4q"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_play_line_and_replay() {
        let mut position = Position::new();
        let moves = position.play_line("e2e4 e7e5 g1f3").unwrap();
        assert_eq!(moves.len(), 3);
        assert_eq!(crate::board::format_line(&moves), "e2e4 e7e5 g1f3");

        let replayed = Position::replay(START_FEN, "e2e4 e7e5 g1f3").unwrap();
        assert_eq!(replayed, position);
        assert_eq!(
            replayed.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn test_replay_reports_bad_move_index() {
        let err = Position::replay(START_FEN, "e2e4 e2e4").unwrap_err();
        assert!(matches!(err, LineError::Move { index: 1, .. }));
    }
}
