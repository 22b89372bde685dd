//! End-to-end scenarios through the public API.

use chess_position::board::{Bitboard, Color, ColoredPiece, Piece, Position, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn file_span(file: &str, from_rank: u8, to_rank: u8) -> Bitboard {
    (from_rank..=to_rank).fold(Bitboard::EMPTY, |acc, rank| {
        acc | sq(&format!("{file}{rank}")).bitboard()
    })
}

#[test]
fn start_position_has_no_checks() {
    let position = Position::new();
    for color in Color::BOTH {
        let info = position.attacking_squares(color);
        assert!(info.critical_attackers.is_empty());
        assert_eq!(info.attacker_count, 0);
    }
    assert!(!position.is_in_check());
    assert!(!position.check_status().in_double_check());
}

#[test]
fn rook_on_open_file_checks_king() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/K3R3 w - - 0 1").unwrap();
    let rook = ColoredPiece::new(Color::White, Piece::Rook);
    assert!(position.legal_moves_for(rook, sq("e1")).contains(sq("e8")));

    let mut position = Position::from_fen("4k3/8/8/8/8/8/8/K6R w - - 0 1").unwrap();
    position.play(Piece::Rook, sq("h1"), sq("e1")).unwrap();

    let status = position.check_status();
    assert_eq!(position.side_to_move(), Color::Black);
    assert!(status.in_check());
    assert!(!status.in_double_check());
    assert_eq!(status.critical_attackers(), sq("e1").bitboard());
    assert_eq!(status.critical_attack_map(), file_span("e", 1, 8));
}

#[test]
fn double_push_and_en_passant_capture() {
    let mut position = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
    position.play(Piece::Pawn, sq("e2"), sq("e4")).unwrap();
    assert_eq!(position.en_passant(), Some(sq("e3")));

    let record = position.play(Piece::Pawn, sq("d4"), sq("e3")).unwrap();
    let capture = record.capture().unwrap();
    assert_eq!(capture.square, sq("e4"));
    assert!(position.piece_at(sq("e4")).is_none());
    assert_eq!(
        position.piece_at(sq("e3")),
        Some(ColoredPiece::new(Color::Black, Piece::Pawn))
    );
    assert!(position
        .pieces_of(ColoredPiece::new(Color::White, Piece::Pawn))
        .is_empty());
}

#[test]
fn undo_twice_after_move_and_null_move() {
    let mut position = Position::new();
    let before = position.clone();
    let knight = ColoredPiece::new(Color::White, Piece::Knight);
    position.apply_move(knight, sq("b1"), sq("c3"));
    position.apply_null_move();
    position.undo_move();
    position.undo_move();
    assert_eq!(position, before);
}

#[test]
fn trial_guard_restores_on_drop() {
    let mut position = Position::new();
    let before = position.clone();
    {
        let mut trial = position.trial();
        trial.play(Piece::Pawn, sq("f2"), sq("f3")).unwrap();
        trial.play(Piece::Pawn, sq("e7"), sq("e5")).unwrap();
        trial.play(Piece::Pawn, sq("g2"), sq("g4")).unwrap();
        trial.play(Piece::Queen, sq("d8"), sq("h4")).unwrap();
        assert!(trial.is_in_check());
        assert!(trial.legal_moves().is_empty());
    }
    assert_eq!(position, before);
}
