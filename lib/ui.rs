mod console;

pub use console::*;

use crate::chess::{Board, Color, Piece, Promotion, Square};

/// The presentation boundary of the game.
///
/// Implementations supply the players' square selections and render board
/// snapshots and status notices; they hold no game state of their own.
/// Malformed input is re-prompted internally, so an error surfacing here is
/// a transport failure and ends the game.
#[cfg_attr(test, mockall::automock(type Error = std::io::Error;))]
pub trait Ui {
    type Error;

    /// Prompts for the square of the piece to move.
    fn pick_whence(&mut self) -> Result<Square, Self::Error>;

    /// Prompts for the destination square.
    fn pick_whither(&mut self) -> Result<Square, Self::Error>;

    /// Prompts for the piece a pawn of the given [`Color`] is promoted to.
    fn pick_promotion(&mut self, color: Color) -> Result<Promotion, Self::Error>;

    /// Renders the current position.
    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error>;

    /// Renders the pieces captured so far from either color.
    fn show_taken(&mut self, black: &[Piece], white: &[Piece]) -> Result<(), Self::Error>;

    /// Announces whose turn it is.
    fn notice_turn(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Announces that the player to move is in check.
    fn notice_check(&mut self) -> Result<(), Self::Error>;

    /// Announces that the attempted move was rejected.
    fn notice_invalid_move(&mut self) -> Result<(), Self::Error>;

    /// Announces the winner.
    fn notice_winner(&mut self, color: Color) -> Result<(), Self::Error>;
}
