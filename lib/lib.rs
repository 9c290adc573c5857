/// Chess domain types.
pub mod chess;
/// Per-turn orchestration and the full game loop.
pub mod game;
/// Movement generation and legality rules.
pub mod rules;
/// The presentation boundary.
pub mod ui;
