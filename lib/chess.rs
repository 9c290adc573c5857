mod board;
mod color;
mod file;
mod r#move;
mod piece;
mod promotion;
mod rank;
mod role;
mod square;

pub use board::*;
pub use color::*;
pub use file::*;
pub use piece::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
