use crate::chess::{Board, Color, File, Piece, Promotion, Rank, Square};
use crate::ui::Ui;
use derive_more::{DebugCustom, Display, Error, From};
use rustyline::{error::ReadlineError, Config, Editor};
use std::fmt;
use std::io::{self, stdout, Stdout, Write};
use std::str::FromStr;
use tracing::instrument;

/// The reason why reading from or writing to the terminal failed.
#[derive(Debug, Display, Error, From)]
pub struct ConsoleError(io::Error);

impl From<ReadlineError> for ConsoleError {
    fn from(e: ReadlineError) -> Self {
        match e {
            ReadlineError::Io(e) => e.into(),
            ReadlineError::Eof => io::Error::from(io::ErrorKind::UnexpectedEof).into(),
            ReadlineError::Interrupted => io::Error::from(io::ErrorKind::Interrupted).into(),

            #[cfg(unix)]
            ReadlineError::Utf8Error => io::Error::from(io::ErrorKind::InvalidData).into(),

            #[cfg(windows)]
            ReadlineError::Decode(e) => io::Error::new(io::ErrorKind::InvalidData, e).into(),

            e => io::Error::new(io::ErrorKind::Other, e).into(),
        }
    }
}

/// A hot-seat console interface based on [rustyline].
///
/// [rustyline]: https://crates.io/crates/rustyline
#[derive(DebugCustom)]
#[debug(fmt = "Console")]
pub struct Console {
    reader: Editor<()>,
    writer: Stdout,
}

impl Console {
    /// Opens a console interface on the standard streams.
    #[instrument(level = "trace")]
    pub fn new() -> Self {
        Console {
            reader: Editor::with_config(Config::builder().auto_add_history(true).build()),
            writer: stdout(),
        }
    }

    /// Prompts until the input parses, echoing parse errors back.
    fn prompt<T>(&mut self, prompt: &str) -> Result<T, ConsoleError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        loop {
            let line = self.reader.readline(&format!("{} > ", prompt))?;

            match line.trim().parse() {
                Ok(t) => return Ok(t),
                Err(e) => writeln!(self.writer, "{}", e)?,
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::new()
    }
}

impl Ui for Console {
    type Error = ConsoleError;

    #[instrument(level = "trace", skip(self), err)]
    fn pick_whence(&mut self) -> Result<Square, ConsoleError> {
        self.prompt("move from")
    }

    #[instrument(level = "trace", skip(self), err)]
    fn pick_whither(&mut self) -> Result<Square, ConsoleError> {
        self.prompt("move to")
    }

    #[instrument(level = "trace", skip(self), err)]
    fn pick_promotion(&mut self, color: Color) -> Result<Promotion, ConsoleError> {
        writeln!(self.writer, "a {} pawn is promoted", color)?;
        self.prompt("promote to [nbrq]")
    }

    #[instrument(level = "trace", skip(self, board))]
    fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        Ok(writeln!(self.writer, "{}", Frame(board))?)
    }

    #[instrument(level = "trace", skip(self, black, white))]
    fn show_taken(&mut self, black: &[Piece], white: &[Piece]) -> Result<(), ConsoleError> {
        writeln!(self.writer, "black pieces taken: {}", Row(black))?;
        Ok(writeln!(self.writer, "white pieces taken: {}", Row(white))?)
    }

    fn notice_turn(&mut self, color: Color) -> Result<(), ConsoleError> {
        Ok(writeln!(self.writer, "{} to move", color)?)
    }

    fn notice_check(&mut self) -> Result<(), ConsoleError> {
        Ok(writeln!(self.writer, "check!")?)
    }

    fn notice_invalid_move(&mut self) -> Result<(), ConsoleError> {
        Ok(writeln!(self.writer, "invalid move, try again")?)
    }

    fn notice_winner(&mut self, color: Color) -> Result<(), ConsoleError> {
        Ok(writeln!(self.writer, "checkmate! {} wins", color)?)
    }
}

/// Renders a [`Board`] as a framed grid, white's side down.
struct Frame<'a>(&'a Board);

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ruler = "   +---+---+---+---+---+---+---+---+";

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", ruler)?;

        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self.0[Square::new(file, rank)] {
                    Some(piece) => write!(f, " {} |", piece)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "{}", ruler)?;
        }

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        Ok(())
    }
}

/// Renders a row of captured pieces.
struct Row<'a>(&'a [Piece]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }

        for (i, piece) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{}", piece)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Role;
    use test_strategy::proptest;

    #[proptest]
    fn frame_renders_every_rank_label_twice(board: Board) {
        let frame = Frame(&board).to_string();

        for rank in Rank::iter() {
            let label = char::from(rank);
            assert_eq!(frame.chars().filter(|&c| c == label).count(), 2);
        }
    }

    #[proptest]
    fn frame_renders_every_piece_on_the_board(board: Board) {
        let frame = Frame(&board).to_string();

        for sq in Square::iter() {
            if let Some(piece) = board[sq] {
                assert!(frame.contains(&piece.to_string()));
            }
        }
    }

    #[proptest]
    fn empty_row_of_taken_pieces_reads_none(c: Color) {
        assert_eq!(Row(&[]).to_string(), "none");

        let taken = [Piece::new(c, Role::Pawn), Piece::new(c, Role::Queen)];
        assert_eq!(Row(&taken).to_string().split(' ').count(), 2);
    }
}
