//! Cheap child ordering for alpha-beta.

use crate::game_state::chess_rules::piece_value;
use crate::game_state::game_state::GameState;
use crate::moves::move_key::MoveKey;
use crate::tables::piece_square_tables::pst_value;

/// Table gain of the piece that moved plus the value of anything it took.
pub fn ordering_score(child: &GameState) -> i32 {
    let Some(last) = child.last_move() else {
        return 0;
    };
    let travel = (pst_value(last.piece, last.to) - pst_value(last.piece, last.from)).abs();
    let capture = last.captured.kind().map_or(0, piece_value);
    travel + capture
}

/// Children sorted by descending [`ordering_score`]; ties keep map order.
pub fn order_moves<'a, I>(children: I) -> Vec<(MoveKey, &'a GameState)>
where
    I: IntoIterator<Item = (&'a MoveKey, &'a GameState)>,
{
    let mut scored: Vec<(i32, MoveKey, &GameState)> = children
        .into_iter()
        .map(|(key, child)| (ordering_score(child), *key, child))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .map(|(_, key, child)| (key, child))
        .collect()
}
