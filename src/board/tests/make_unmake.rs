//! Make/unmake move tests.

use super::{find_move, sq};
use crate::board::{Cell, Color, Move, MoveError, Piece, Position};
use rand::prelude::*;

const ROUND_TRIP_FENS: &[&str] = &[
    crate::board::START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 7 21",
];

#[test]
fn test_every_legal_move_round_trips() {
    for fen in ROUND_TRIP_FENS {
        let original = Position::from_fen(fen).unwrap();
        for mut mv in original.generate_legal_moves() {
            let mut position = original;
            position.make_move(&mut mv).unwrap();
            assert_ne!(position, original, "{mv} changed nothing in {fen}");
            position.unmake_move(&mv);
            assert_eq!(position, original, "{mv} did not round trip in {fen}");
        }
    }
}

#[test]
fn test_generated_snapshot_matches_fresh_make() {
    let original = Position::from_fen(ROUND_TRIP_FENS[1]).unwrap();
    for generated in original.generate_legal_moves() {
        let mut fresh = Move::new(generated.from(), generated.to(), generated.promotion());
        let mut position = original;
        position.make_move(&mut fresh).unwrap();
        assert_eq!(fresh, generated);
    }
}

#[test]
fn test_en_passant_make_unmake() {
    let original =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let mut mv = find_move(&original, "e5f6").unwrap();
    let mut position = original;
    position.make_move(&mut mv).unwrap();

    assert!(mv.is_en_passant());
    assert_eq!(mv.captured(), Cell::Occupied(Color::Black, Piece::Pawn));
    assert!(position.cell(sq("f5")).is_empty());
    assert!(position.cell(sq("f6")).is(Color::White, Piece::Pawn));

    position.unmake_move(&mv);
    assert_eq!(position, original);
    assert!(position.cell(sq("f5")).is(Color::Black, Piece::Pawn));
    assert!(position.cell(sq("f6")).is_empty());
}

#[test]
fn test_promotion_make_unmake() {
    let original = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mut mv = find_move(&original, "a7a8q").unwrap();
    let mut position = original;
    position.make_move(&mut mv).unwrap();
    assert!(position.cell(sq("a8")).is(Color::White, Piece::Queen));

    position.unmake_move(&mv);
    assert_eq!(position, original);
    assert!(position.cell(sq("a7")).is(Color::White, Piece::Pawn));
}

#[test]
fn test_castle_make_unmake() {
    let original = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    for (uci, rook_from, rook_to) in [("e1g1", "h1", "f1"), ("e1c1", "a1", "d1")] {
        let mut mv = find_move(&original, uci).unwrap();
        let mut position = original;
        position.make_move(&mut mv).unwrap();

        assert!(mv.is_castle());
        assert!(position.cell(sq(rook_from)).is_empty());
        assert!(position.cell(sq(rook_to)).is(Color::White, Piece::Rook));
        assert!(!position.castling_rights().has(Color::White, true));
        assert!(!position.castling_rights().has(Color::White, false));

        position.unmake_move(&mv);
        assert_eq!(position, original);
    }
}

#[test]
fn test_make_move_from_empty_square_fails() {
    let original = Position::new();
    let mut position = original;
    let mut mv = Move::new(sq("e4"), sq("e5"), None);
    assert_eq!(
        position.make_move(&mut mv),
        Err(MoveError::EmptySource { square: sq("e4") })
    );
    assert_eq!(position, original);
}

#[test]
fn test_clocks() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 5 10").unwrap();
    position.play_uci("a1b1").unwrap();
    assert_eq!(position.halfmove_clock(), 6);
    assert_eq!(position.fullmove_number(), 10);

    position.play_uci("a8b8").unwrap();
    assert_eq!(position.halfmove_clock(), 7);
    assert_eq!(position.fullmove_number(), 11);

    position.play_uci("b1b8").unwrap();
    assert_eq!(position.halfmove_clock(), 0, "capture resets the clock");

    let mut pawn_push = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 30 40").unwrap();
    pawn_push.play_uci("e2e3").unwrap();
    assert_eq!(pawn_push.halfmove_clock(), 0);
}

#[test]
fn test_clocks_saturate_at_max() {
    let original = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 4294967295 1").unwrap();
    let mut position = original;
    let mv = position.play_uci("a1a2").unwrap();
    assert_eq!(position.halfmove_clock(), u32::MAX);
    position.unmake_move(&mv);
    assert_eq!(position, original);

    let original = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295").unwrap();
    let mut position = original;
    let mv = position.play_uci("e8e7").unwrap();
    assert_eq!(position.fullmove_number(), u32::MAX);
    assert_eq!(position.to_fen(), "8/4k3/8/8/8/8/8/4K3 w - - 1 4294967295");
    position.unmake_move(&mv);
    assert_eq!(position, original);
}

#[test]
fn test_random_playout_round_trip_state() {
    let initial = Position::new();
    let mut position = initial;
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut history: Vec<(Move, Position)> = Vec::new();

    for _ in 0..200 {
        let moves = position.generate_legal_moves();
        if moves.is_empty() {
            break;
        }
        let mut mv = moves[rng.gen_range(0..moves.len())];
        let before = position;
        position.make_move(&mut mv).unwrap();
        history.push((mv, before));
    }

    while let Some((mv, before)) = history.pop() {
        position.unmake_move(&mv);
        assert_eq!(position, before);
    }

    assert_eq!(position, initial);
}
