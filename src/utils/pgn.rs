//! PGN export for finished or ongoing games.
//!
//! Moves are written in coordinate form (`e2e4`) rather than SAN, which PGN
//! readers that accept long algebraic input can replay directly.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_key::MoveKey;
use crate::utils::long_algebraic::move_to_text;

/// Seven-tag roster plus `SetUp`/`FEN` when the game did not start from the
/// standard position.
pub fn standard_headers(
    initial_state: &GameState,
    white: &str,
    black: &str,
    result: &str,
    date: NaiveDate,
) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Chessy Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }
    headers
}

pub fn write_pgn_with_headers(
    initial_state: &GameState,
    move_history: &[MoveKey],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let dark_first = initial_state.side_to_move() == Color::Dark;
    let mut move_number = initial_state.fullmove_number();
    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, key) in move_history.iter().enumerate() {
        let text = move_to_text(key);
        let light_to_move = (ply % 2 == 0) != dark_first;
        if light_to_move {
            movetext_parts.push(format!("{move_number}. {text}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{move_number}... {text}"));
        } else {
            movetext_parts.push(text);
        }
        if !light_to_move {
            move_number += 1;
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
