//! A single game session.

use frictionless_board::catalog::classic_board;
use frictionless_board::Board;
use frictionless_core::{Cell, CommandError, Direction, PieceId};

use crate::command::{Command, CommandOutcome, MoveRecord};
use crate::config::{ConfigError, SessionConfig};
use crate::pieces::PieceTable;
use crate::resolver::resolve_move;
use crate::selection::Selection;

/// One board, its pieces and the active-piece selection.
///
/// The board is fixed for the lifetime of the session. Piece positions
/// change only through [`move_piece`](Self::move_piece) (and the
/// commands built on it), one piece per call, so no two pieces ever
/// share a cell and every piece stays on the board.
///
/// # Examples
///
/// ```
/// use frictionless_core::{Cell, Direction};
/// use frictionless_engine::GameSession;
///
/// let mut session = GameSession::classic().unwrap();
/// assert_eq!(session.active_piece().as_str(), "allie");
/// let landed = session.move_active(Direction::Up).unwrap();
/// assert_eq!(landed, Cell::new(2, 0));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    pieces: PieceTable,
    starts: PieceTable,
    selection: Selection,
    initial_active: PieceId,
    move_count: u64,
    last_move: Option<MoveRecord>,
}

impl GameSession {
    /// Start a session on `board` with the pieces in `config`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`SessionConfig::validate`].
    pub fn new(board: Board, config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate(&board)?;
        let initial_active = config
            .initial_active()
            .cloned()
            .ok_or(ConfigError::NoPieces)?;

        let pieces = PieceTable::from_cells(
            config.pieces.into_iter().map(|spec| (spec.id, spec.start)),
            &board,
        )?;
        log::debug!(
            "session started on {n}x{n} board with {} pieces, '{initial_active}' active",
            pieces.len(),
            n = board.grid_size(),
        );
        Ok(Self {
            board,
            starts: pieces.clone(),
            pieces,
            selection: Selection::new(initial_active.clone()),
            initial_active,
            move_count: 0,
            last_move: None,
        })
    }

    /// The classic 8x8 board with the four classic pieces.
    pub fn classic() -> Result<Self, ConfigError> {
        Self::new(classic_board()?, SessionConfig::classic())
    }

    /// The session's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current piece positions.
    pub fn pieces(&self) -> &PieceTable {
        &self.pieces
    }

    /// Current cell of `piece`.
    pub fn position_of(&self, piece: &str) -> Result<Cell, CommandError> {
        self.pieces.get(piece).ok_or_else(|| unknown(piece))
    }

    /// The piece directional input drives.
    pub fn active_piece(&self) -> &PieceId {
        self.selection.active()
    }

    /// Make `piece` the active piece.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownPiece`] if no such piece exists; the
    /// selection is unchanged.
    pub fn select_piece(&mut self, piece: &str) -> Result<(), CommandError> {
        self.select(piece).map(|_| ())
    }

    fn select(&mut self, piece: &str) -> Result<PieceId, CommandError> {
        let id = match self.pieces.id(piece) {
            Some(id) => id.clone(),
            None => {
                log::debug!("rejected selection of unknown piece '{piece}'");
                return Err(unknown(piece));
            }
        };
        let previous = self.selection.select(id);
        log::debug!("active piece '{previous}' -> '{piece}'");
        Ok(previous)
    }

    /// Ordered goal candidates for `piece`, possibly empty.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownPiece`] if no such piece exists.
    pub fn goals_for(&self, piece: &str) -> Result<&[Cell], CommandError> {
        if !self.pieces.contains(piece) {
            return Err(unknown(piece));
        }
        Ok(self.board.goals_for(piece))
    }

    /// Whether `piece` stands on one of its goal candidates.
    pub fn is_on_goal(&self, piece: &str) -> Result<bool, CommandError> {
        let cell = self.position_of(piece)?;
        Ok(self.board.is_goal(piece, cell))
    }

    /// Slide `piece` in `direction` and return where it landed.
    ///
    /// A move into an adjacent wall, piece or the perimeter leaves the
    /// piece where it is and is not counted.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownPiece`] if no such piece exists; nothing
    /// changes.
    pub fn move_piece(&mut self, piece: &str, direction: Direction) -> Result<Cell, CommandError> {
        self.slide(piece, direction).map(|record| record.to)
    }

    /// Slide the active piece in `direction`.
    pub fn move_active(&mut self, direction: Direction) -> Result<Cell, CommandError> {
        let active = self.selection.active().clone();
        self.move_piece(active.as_str(), direction)
    }

    fn slide(&mut self, piece: &str, direction: Direction) -> Result<MoveRecord, CommandError> {
        let from = match self.pieces.get(piece) {
            Some(cell) => cell,
            None => {
                log::debug!("rejected move of unknown piece '{piece}'");
                return Err(unknown(piece));
            }
        };
        let to = resolve_move(piece, direction, &self.board, &self.pieces)?;
        let record = MoveRecord {
            piece: piece.into(),
            direction,
            from,
            to,
        };
        if !record.moved() {
            log::trace!("'{piece}' is blocked moving {direction} at {from}");
            return Ok(record);
        }
        self.pieces.set(piece, to);
        self.move_count += 1;
        self.last_move = Some(record.clone());
        log::debug!(
            "move {}: {record} ({} cells)",
            self.move_count,
            record.distance()
        );
        Ok(record)
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownPiece`] for a command naming a piece that
    /// does not exist; the session is unchanged.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, CommandError> {
        match command {
            Command::Move { piece, direction } => {
                let piece = piece.unwrap_or_else(|| self.selection.active().clone());
                self.slide(piece.as_str(), direction)
                    .map(CommandOutcome::Moved)
            }
            Command::Select(piece) => {
                let previous = self.select(piece.as_str())?;
                Ok(CommandOutcome::Selected {
                    previous,
                    active: piece,
                })
            }
        }
    }

    /// Number of moves that changed a piece's cell.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// The most recent move that changed a piece's cell.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Put every piece back on its starting cell and reselect the
    /// initially active piece. The board is unchanged.
    pub fn reset(&mut self) {
        self.pieces = self.starts.clone();
        self.selection = Selection::new(self.initial_active.clone());
        self.move_count = 0;
        self.last_move = None;
        log::debug!("session reset");
    }
}

fn unknown(piece: &str) -> CommandError {
    CommandError::UnknownPiece { id: piece.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PieceSpec;
    use frictionless_core::Wall;

    fn session(
        walls: impl IntoIterator<Item = Wall>,
        pieces: &[(&str, (u32, u32))],
    ) -> GameSession {
        let board = Board::fixed(8, walls, [("a", Cell::new(3, 2))]).unwrap();
        let config = SessionConfig::new(
            pieces
                .iter()
                .map(|&(id, cell)| PieceSpec::new(id, cell.into())),
        );
        GameSession::new(board, config).unwrap()
    }

    #[test]
    fn up_to_horizontal_wall() {
        let mut s = session([Wall::horizontal(3, 2)], &[("a", (3, 5))]);
        assert_eq!(s.move_piece("a", Direction::Up), Ok(Cell::new(3, 2)));
        assert_eq!(s.position_of("a"), Ok(Cell::new(3, 2)));
        assert_eq!(s.is_on_goal("a"), Ok(true));
    }

    #[test]
    fn right_to_vertical_wall() {
        let mut s = session([Wall::vertical(6, 5)], &[("a", (3, 5))]);
        assert_eq!(s.move_piece("a", Direction::Right), Ok(Cell::new(5, 5)));
    }

    #[test]
    fn down_onto_other_piece() {
        let mut s = session([], &[("a", (3, 3)), ("b", (3, 6))]);
        assert_eq!(s.move_piece("a", Direction::Down), Ok(Cell::new(3, 5)));
        assert_eq!(s.position_of("b"), Ok(Cell::new(3, 6)));
    }

    #[test]
    fn blocked_move_is_not_counted() {
        let mut s = session([Wall::vertical(6, 5)], &[("a", (3, 5))]);
        s.move_piece("a", Direction::Right).unwrap();
        assert_eq!(s.move_count(), 1);
        let before = s.pieces().clone();
        assert_eq!(s.move_piece("a", Direction::Right), Ok(Cell::new(5, 5)));
        assert_eq!(s.pieces(), &before);
        assert_eq!(s.move_count(), 1);
    }

    #[test]
    fn unknown_piece_changes_nothing() {
        let mut s = session([], &[("a", (3, 3))]);
        let err = s.move_piece("zz", Direction::Up).unwrap_err();
        assert_eq!(err, CommandError::UnknownPiece { id: "zz".into() });
        assert_eq!(s.position_of("a"), Ok(Cell::new(3, 3)));
        assert_eq!(s.move_count(), 0);
        assert!(s.select_piece("zz").is_err());
        assert_eq!(s.active_piece().as_str(), "a");
        assert!(s.goals_for("zz").is_err());
    }

    #[test]
    fn selection_drives_move_active() {
        let mut s = session([], &[("a", (3, 3)), ("b", (5, 5))]);
        s.select_piece("b").unwrap();
        assert_eq!(s.active_piece().as_str(), "b");
        assert_eq!(s.move_active(Direction::Left), Ok(Cell::new(0, 5)));
        assert_eq!(s.position_of("a"), Ok(Cell::new(3, 3)));
    }

    #[test]
    fn goals_for_known_piece_without_goals_is_empty() {
        let s = session([], &[("a", (0, 0)), ("b", (1, 1))]);
        assert_eq!(s.goals_for("a"), Ok(&[Cell::new(3, 2)][..]));
        assert_eq!(s.goals_for("b"), Ok(&[][..]));
    }

    #[test]
    fn apply_routes_commands() {
        let mut s = session([], &[("a", (3, 3)), ("b", (5, 5))]);
        let outcome = s.apply(Command::move_active(Direction::Up)).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Moved(MoveRecord {
                piece: "a".into(),
                direction: Direction::Up,
                from: Cell::new(3, 3),
                to: Cell::new(3, 0),
            })
        );
        let outcome = s.apply(Command::select("b")).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Selected {
                previous: "a".into(),
                active: "b".into()
            }
        );
        let outcome = s.apply(Command::move_piece("a", Direction::Right)).unwrap();
        assert!(matches!(outcome, CommandOutcome::Moved(r) if r.to == Cell::new(7, 0)));
        assert_eq!(s.last_move().unwrap().piece.as_str(), "a");
        assert_eq!(s.move_count(), 2);
    }

    #[test]
    fn reset_restores_start() {
        let mut s = session([], &[("a", (3, 3)), ("b", (5, 5))]);
        s.move_piece("a", Direction::Up).unwrap();
        s.select_piece("b").unwrap();
        s.reset();
        assert_eq!(s.position_of("a"), Ok(Cell::new(3, 3)));
        assert_eq!(s.active_piece().as_str(), "a");
        assert_eq!(s.move_count(), 0);
        assert!(s.last_move().is_none());
    }

    #[test]
    fn classic_session_starts_on_classic_cells() {
        let s = GameSession::classic().unwrap();
        assert_eq!(s.board().grid_size(), 8);
        assert_eq!(s.pieces().len(), 4);
        assert_eq!(s.position_of("frida"), Ok(Cell::new(5, 5)));
        assert_eq!(s.goals_for("saul"), Ok(&[Cell::new(1, 2)][..]));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let board = Board::empty(8).unwrap();
        let config = SessionConfig::new([PieceSpec::new("a", Cell::new(9, 9))]);
        assert!(matches!(
            GameSession::new(board, config),
            Err(ConfigError::StartOutOfBounds { .. })
        ));
    }
}
