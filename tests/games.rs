use serde::Deserialize;

use chess_position::board::{MoveRequest, Position};

#[derive(Deserialize)]
struct GameSet {
    games: Vec<Game>,
}

#[derive(Deserialize)]
struct Game {
    name: String,
    fen: String,
    moves: Vec<String>,
    expected_fen: String,
    in_check: bool,
    rejected: Vec<String>,
}

#[test]
fn recorded_games_replay() {
    let data = include_str!("data/games.json");
    let set: GameSet = serde_json::from_str(data).expect("invalid games.json");

    for game in &set.games {
        let mut position = Position::from_fen(&game.fen).expect("invalid starting FEN");
        for text in &game.moves {
            let request: MoveRequest = text
                .parse()
                .unwrap_or_else(|err| panic!("{}: bad move '{}': {}", game.name, text, err));
            if let Err(err) = position.play_request(&request) {
                panic!("{}: '{}' rejected: {}", game.name, text, err);
            }
        }

        assert_eq!(position.to_fen(), game.expected_fen, "{}", game.name);
        assert_eq!(position.is_in_check(), game.in_check, "{}", game.name);

        let settled = position.clone();
        for text in &game.rejected {
            let accepted = text
                .parse::<MoveRequest>()
                .map(|request| position.play_request(&request).is_ok())
                .unwrap_or(false);
            assert!(!accepted, "{}: '{}' should be rejected", game.name, text);
            assert_eq!(position, settled, "{}: rejection changed the position", game.name);
        }
    }
}
