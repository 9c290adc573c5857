use crate::chess::{Board, Color, File, Move, Movement, Piece, Rank, Role, Square};
use crate::rules::{self, Castling};
use crate::ui::Ui;
use tracing::{debug, instrument};

/// Holds the state of a game of chess between two hot-seat players.
///
/// The game owns the [`Board`], the capture bookkeeping, and the history of
/// committed [`Movement`]s; the [`Ui`] collaborator supplies the players'
/// selections and renders the progress of the game.
#[derive(Debug)]
pub struct Game<U> {
    board: Board,
    turn: Color,
    history: Vec<Movement>,
    black_taken: Vec<Piece>,
    white_taken: Vec<Piece>,
    ui: U,
}

impl<U: Ui> Game<U> {
    /// Starts a new game from the standard initial position, white to move.
    pub fn new(ui: U) -> Self {
        Game::with_position(Board::default(), Color::White, ui)
    }

    /// Starts a game from an arbitrary position.
    pub fn with_position(board: Board, turn: Color, ui: U) -> Self {
        Game {
            board,
            turn,
            history: Vec::new(),
            black_taken: Vec::new(),
            white_taken: Vec::new(),
            ui,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The pieces captured so far from the given [`Color`].
    pub fn taken(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_taken,
            Color::Black => &self.black_taken,
        }
    }

    /// Plays the game to checkmate and returns the winner.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<Color, U::Error> {
        self.ui.show_board(&self.board)?;
        self.ui.show_taken(&self.black_taken, &self.white_taken)?;

        while !rules::is_checkmate(&self.board, self.turn) {
            self.ui.notice_turn(self.turn)?;

            if rules::in_check(&self.board, self.turn) {
                self.ui.notice_check()?;
            }

            self.advance()?;

            self.ui.show_board(&self.board)?;
            self.ui.show_taken(&self.black_taken, &self.white_taken)?;

            self.turn = !self.turn;
        }

        let winner = !self.turn;
        self.ui.notice_winner(winner)?;
        Ok(winner)
    }

    /// Plays one turn for the player to move.
    ///
    /// Prompts until a move commits that does not leave the mover's own king
    /// attacked; a move that does is rolled back in full, captured piece
    /// included, before re-prompting. Resolves pawn promotion once the move
    /// stands.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn advance(&mut self) -> Result<(), U::Error> {
        loop {
            let whence = self.ui.pick_whence()?;

            if !self.board[whence].is_some_and(|p| p.color() == self.turn) {
                debug!(%whence, "not a piece of the player to move");
                self.ui.notice_invalid_move()?;
                continue;
            }

            let whither = self.ui.pick_whither()?;
            let m = Move::new(whence, whither);

            let (committed, took) = if self.board[whither].is_some() {
                if let Some(castling) = Castling::detect(&self.board, self.turn, whence, whither) {
                    debug!(king = %castling.king, rook = %castling.rook, "castling");
                    self.history.push(self.board.relocate(castling.rook));
                    self.history.push(self.board.relocate(castling.king));
                    (2, false)
                } else {
                    let took = self.try_capture(m);
                    (took as usize, took)
                }
            } else if rules::is_legal(&self.board, m) {
                self.history.push(self.board.relocate(m));
                (1, false)
            } else {
                (0, false)
            };

            if committed > 0 {
                if !rules::in_check(&self.board, self.turn) {
                    break;
                }

                debug!(%m, "the move leaves the king attacked");
                self.rollback(committed, took);
            } else {
                debug!(%m, "illegal move");
            }

            self.ui.notice_invalid_move()?;
        }

        self.promote_pawn()
    }

    /// Commits a capture if `m` legally takes an opposing piece.
    fn try_capture(&mut self, m: Move) -> bool {
        match self.board[m.whither] {
            Some(p) if p.color() != self.turn && rules::is_legal(&self.board, m) => {
                match p.color() {
                    Color::White => self.white_taken.push(p),
                    Color::Black => self.black_taken.push(p),
                }

                self.history.push(self.board.relocate(m));
                true
            }

            _ => false,
        }
    }

    /// Undoes the last `committed` movements and discards the capture they
    /// recorded, if any.
    fn rollback(&mut self, committed: usize, took: bool) {
        for _ in 0..committed {
            if let Some(mv) = self.history.pop() {
                self.board.restore(mv);
            }
        }

        if took {
            match !self.turn {
                Color::White => self.white_taken.pop(),
                Color::Black => self.black_taken.pop(),
            };
        }
    }

    /// Replaces the mover's pawn on the far rank, if any, by the piece of
    /// their choosing.
    fn promote_pawn(&mut self) -> Result<(), U::Error> {
        let far = match self.turn {
            Color::White => Rank::from_index(7),
            Color::Black => Rank::from_index(0),
        };

        let pawn = File::iter().map(|f| Square::new(f, far)).find(|&sq| {
            self.board[sq].is_some_and(|p| p.color() == self.turn && p.role() == Role::Pawn)
        });

        if let Some(sq) = pawn {
            let promotion = self.ui.pick_promotion(self.turn)?;
            debug!(%sq, %promotion, "pawn promoted");

            let mut piece = Piece::new(self.turn, promotion.into());
            piece.set_moved(true);
            self.board.set(sq, piece);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Promotion;
    use crate::ui::MockUi;
    use mockall::Sequence;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn expect_move(ui: &mut MockUi, seq: &mut Sequence, from: &'static str, to: &'static str) {
        ui.expect_pick_whence()
            .once()
            .in_sequence(seq)
            .returning(move || Ok(sq(from)));

        ui.expect_pick_whither()
            .once()
            .in_sequence(seq)
            .returning(move || Ok(sq(to)));
    }

    #[proptest]
    fn pawn_may_advance_two_squares_on_its_first_move() {
        let mut ui = MockUi::new();
        let mut seq = Sequence::new();
        expect_move(&mut ui, &mut seq, "g2", "g4");

        let mut game = Game::new(ui);
        game.advance()?;

        assert_eq!(game.board()[sq("g2")], None);

        let pawn = game.board()[sq("g4")].unwrap();
        assert_eq!((pawn.color(), pawn.role()), (Color::White, Role::Pawn));
        assert!(pawn.has_moved());
        assert!(!rules::in_check(game.board(), Color::Black));
    }

    #[proptest]
    fn selecting_an_empty_or_opposing_square_re_prompts() {
        let mut ui = MockUi::new();
        let mut seq = Sequence::new();

        // An empty square, then an opposing piece, then a legal move.
        ui.expect_pick_whence()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(sq("e4")));

        ui.expect_notice_invalid_move()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        ui.expect_pick_whence()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(sq("e7")));

        ui.expect_notice_invalid_move()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        expect_move(&mut ui, &mut seq, "e2", "e4");

        let mut game = Game::new(ui);
        game.advance()?;

        assert!(game.board()[sq("e4")].is_some());
    }

    #[proptest]
    fn move_that_leaves_the_king_attacked_is_rolled_back() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::new(Color::White, Role::King));
        board.set(sq("e2"), Piece::new(Color::White, Role::Rook));
        board.set(sq("e8"), Piece::new(Color::Black, Role::Rook));
        board.set(sq("g8"), Piece::new(Color::Black, Role::King));

        let mut ui = MockUi::new();
        let mut seq = Sequence::new();

        expect_move(&mut ui, &mut seq, "e2", "a2");

        ui.expect_notice_invalid_move()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        expect_move(&mut ui, &mut seq, "e1", "d1");

        let mut game = Game::with_position(board, Color::White, ui);
        game.advance()?;

        // The pinned rook is back where it stood and the king stepped aside.
        assert!(game.board()[sq("e2")].is_some_and(|p| p.role() == Role::Rook));
        assert_eq!(game.board()[sq("a2")], None);
        assert!(game.board()[sq("d1")].is_some_and(|p| p.role() == Role::King));
    }

    #[proptest]
    fn capture_that_leaves_the_king_attacked_restores_the_captured_piece() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::new(Color::White, Role::King));
        board.set(sq("e2"), Piece::new(Color::White, Role::Rook));
        board.set(sq("e8"), Piece::new(Color::Black, Role::Rook));
        board.set(sq("g8"), Piece::new(Color::Black, Role::King));
        board.set(sq("a2"), Piece::new(Color::Black, Role::Pawn));

        let mut ui = MockUi::new();
        let mut seq = Sequence::new();

        expect_move(&mut ui, &mut seq, "e2", "a2");

        ui.expect_notice_invalid_move()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        expect_move(&mut ui, &mut seq, "e1", "d1");

        let before = board;
        let mut game = Game::with_position(board, Color::White, ui);
        game.advance()?;

        assert_eq!(game.board()[sq("a2")], before[sq("a2")]);
        assert!(game.taken(Color::Black).is_empty());
    }

    #[proptest]
    fn captured_piece_joins_the_taken_list() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::new(Color::White, Role::King));
        board.set(sq("a1"), Piece::new(Color::White, Role::Rook));
        board.set(sq("a7"), Piece::new(Color::Black, Role::Pawn));
        board.set(sq("g8"), Piece::new(Color::Black, Role::King));

        let mut ui = MockUi::new();
        let mut seq = Sequence::new();
        expect_move(&mut ui, &mut seq, "a1", "a7");

        let mut game = Game::with_position(board, Color::White, ui);
        game.advance()?;

        assert_eq!(game.taken(Color::Black).len(), 1);
        assert_eq!(game.taken(Color::Black)[0].role(), Role::Pawn);
        assert!(game.taken(Color::White).is_empty());
        assert!(game.board()[sq("a7")].is_some_and(|p| p.role() == Role::Rook));
    }

    #[proptest]
    fn pawn_reaching_the_far_rank_is_promoted(p: Promotion) {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::new(Color::White, Role::King));
        board.set(sq("a7"), Piece::new(Color::White, Role::Pawn));
        board.set(sq("g8"), Piece::new(Color::Black, Role::King));

        let mut ui = MockUi::new();
        let mut seq = Sequence::new();
        expect_move(&mut ui, &mut seq, "a7", "a8");

        ui.expect_pick_promotion()
            .once()
            .in_sequence(&mut seq)
            .returning(move |_| Ok(p));

        let mut game = Game::with_position(board, Color::White, ui);
        game.advance()?;

        let piece = game.board()[sq("a8")].unwrap();
        assert_eq!((piece.color(), piece.role()), (Color::White, p.into()));
    }

    #[proptest]
    fn castling_commits_both_relocations(c: Color) {
        let (back, front) = match c {
            Color::White => ("1", "2"),
            Color::Black => ("8", "7"),
        };

        let mut board = Board::empty();

        for color in Color::iter() {
            let rank = match color {
                Color::White => "1",
                Color::Black => "8",
            };

            board.set(sq(&format!("e{}", rank)), Piece::new(color, Role::King));
            board.set(sq(&format!("a{}", rank)), Piece::new(color, Role::Rook));
        }

        for f in File::iter() {
            let shield = format!("{}{}", char::from(f), front);
            board.set(sq(&shield), Piece::new(c, Role::Pawn));
        }

        let (from, to) = (format!("e{}", back), format!("a{}", back));

        let mut ui = MockUi::new();
        let mut seq = Sequence::new();

        ui.expect_pick_whence()
            .once()
            .in_sequence(&mut seq)
            .returning(move || Ok(sq(&from)));

        ui.expect_pick_whither()
            .once()
            .in_sequence(&mut seq)
            .returning(move || Ok(sq(&to)));

        let mut game = Game::with_position(board, c, ui);
        game.advance()?;

        let king = game.board()[sq(&format!("c{}", back))].unwrap();
        let rook = game.board()[sq(&format!("d{}", back))].unwrap();
        assert_eq!((king.color(), king.role()), (c, Role::King));
        assert_eq!((rook.color(), rook.role()), (c, Role::Rook));
        assert_eq!(game.board()[sq(&format!("e{}", back))], None);
        assert_eq!(game.board()[sq(&format!("a{}", back))], None);
    }

    #[proptest]
    fn capturing_a_friendly_piece_is_rejected() {
        let mut ui = MockUi::new();
        let mut seq = Sequence::new();

        expect_move(&mut ui, &mut seq, "a1", "a2");

        ui.expect_notice_invalid_move()
            .once()
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        expect_move(&mut ui, &mut seq, "b1", "c3");

        let mut game = Game::new(ui);
        game.advance()?;

        assert!(game.board()[sq("a1")].is_some());
        assert!(game.board()[sq("c3")].is_some_and(|p| p.role() == Role::Knight));
    }
}
