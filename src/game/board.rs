use super::player::Seat;
use crate::error::GameError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
pub const WIN_LENGTH: usize = 4;

/// Line directions checked from each candidate start cell, as (row, col)
/// steps: horizontal, vertical, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Seat),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Board size in columns (`width`) and rows (`height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Dimensions { width, height }
    }

    /// Both sides must be non-zero and the cell count must be allocatable.
    pub fn validate(self) -> Result<Self, GameError> {
        let cells = self.width.checked_mul(self.height);
        match cells {
            Some(cells) if cells > 0 && cells <= isize::MAX as usize => Ok(self),
            _ => Err(GameError::InvalidConfiguration {
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Only meaningful for dimensions that passed [`Dimensions::validate`].
    pub fn cell_count(self) -> usize {
        self.width * self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// A board coordinate. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Fails without allocating if either
    /// dimension is zero or the cell count overflows.
    pub fn new(dims: Dimensions) -> Result<Self, GameError> {
        let dims = dims.validate()?;
        Ok(Board {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Like [`Board::get`], but `None` for coordinates off the board.
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.dims.height || col >= self.dims.width {
            return None;
        }
        Some(self.get(row, col))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.width + col
    }

    /// Lowest empty row in a column, scanning bottom-up. `None` if the column
    /// is full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.dims.width {
            return None;
        }
        (0..self.dims.height)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.dims.width {
            return 0;
        }
        (0..self.dims.height)
            .filter(|&row| !self.get(row, col).is_empty())
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Result<usize, MoveError> {
        if col >= self.dims.width {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull)?;
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Occupied(seat);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether `seat` owns four in a row anywhere on the board.
    ///
    /// Every cell is treated as the start of a candidate line in each of the
    /// four directions; the scan stops at the first complete line.
    pub fn has_four(&self, seat: Seat) -> bool {
        let target = Cell::Occupied(seat);
        (0..self.dims.height).any(|row| {
            (0..self.dims.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.line_owned_by(row, col, dr, dc, target))
            })
        })
    }

    fn line_owned_by(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..WIN_LENGTH as isize).all(|k| {
            self.try_get(row as isize + k * dr, col as isize + k * dc) == Some(target)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            dims: Dimensions::default(),
            cells: vec![Cell::Empty; Dimensions::default().cell_count()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Seat = Seat::First;
    const YELLOW: Seat = Seat::Second;

    fn board(width: usize, height: usize) -> Board {
        Board::new(Dimensions::new(width, height)).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..board.height() {
            for col in 0..board.width() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(Dimensions::new(0, 6)),
            Err(GameError::InvalidConfiguration { width: 0, height: 6 })
        );
        assert!(Board::new(Dimensions::new(7, 0)).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Board::new(Dimensions::new(usize::MAX, 2)),
            Err(GameError::InvalidConfiguration {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(Dimensions::new(2, usize::MAX / 2 + 1).validate().is_err());
        assert!(Dimensions::new(1, 65535).validate().is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, RED).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Occupied(RED));

        let row = board.drop_piece(3, YELLOW).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Occupied(YELLOW));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..board.height() {
            board.drop_piece(0, RED).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_empty_row(0), None);
        assert_eq!(board.drop_piece(0, YELLOW), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, RED), Err(MoveError::InvalidColumn));
        assert!(board.is_column_full(7));
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = board(3, 2);
        for col in 0..3 {
            for _ in 0..2 {
                assert!(!board.is_full());
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, RED).unwrap();
        }
        assert!(board.has_four(RED));
        assert!(!board.has_four(YELLOW));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = Board::default();
        for col in 3..7 {
            board.drop_piece(col, YELLOW).unwrap();
        }
        assert!(board.has_four(YELLOW));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, YELLOW).unwrap();
        }
        assert!(board.has_four(YELLOW));
    }

    #[test]
    fn test_vertical_win_reaching_top_row() {
        let mut board = Board::default();
        board.drop_piece(6, RED).unwrap();
        board.drop_piece(6, RED).unwrap();
        for _ in 0..4 {
            board.drop_piece(6, YELLOW).unwrap();
        }
        assert_eq!(board.get(0, 6), Cell::Occupied(YELLOW));
        assert!(board.has_four(YELLOW));
        assert!(!board.has_four(RED));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Create diagonal / pattern
        board.drop_piece(0, RED).unwrap();

        board.drop_piece(1, YELLOW).unwrap();
        board.drop_piece(1, RED).unwrap();

        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        assert!(!board.has_four(RED));
        board.drop_piece(3, RED).unwrap();

        assert!(board.has_four(RED));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Create diagonal \ pattern ending in the bottom-right corner
        board.drop_piece(6, RED).unwrap();

        board.drop_piece(5, YELLOW).unwrap();
        board.drop_piece(5, RED).unwrap();

        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        assert!(!board.has_four(RED));
        board.drop_piece(3, RED).unwrap();

        assert!(board.has_four(RED));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, RED).unwrap();
        }
        assert!(!board.has_four(RED));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::default();
        for col in [0, 1, 3, 4] {
            board.drop_piece(col, RED).unwrap();
        }
        board.drop_piece(2, YELLOW).unwrap();
        assert!(!board.has_four(RED));
    }

    #[test]
    fn test_line_does_not_wrap_between_rows() {
        // (4, 5), (4, 6), (5, 0), (5, 1) are consecutive in storage only.
        let mut board = Board::default();
        board.drop_piece(5, YELLOW).unwrap();
        board.drop_piece(5, RED).unwrap();
        board.drop_piece(6, YELLOW).unwrap();
        board.drop_piece(6, RED).unwrap();
        board.drop_piece(0, RED).unwrap();
        board.drop_piece(1, RED).unwrap();
        assert_eq!(board.get(4, 6), Cell::Occupied(RED));
        assert_eq!(board.get(5, 0), Cell::Occupied(RED));
        assert!(!board.has_four(RED));
    }

    #[test]
    fn test_board_too_small_for_any_line() {
        let mut board = board(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.has_four(RED));
    }

    #[test]
    fn test_single_row_board() {
        let mut board = board(4, 1);
        for col in 0..4 {
            board.drop_piece(col, YELLOW).unwrap();
        }
        assert!(board.has_four(YELLOW));
        assert!(board.is_full());
    }

    #[test]
    fn test_try_get_off_board() {
        let board = Board::default();
        assert_eq!(board.try_get(-1, 0), None);
        assert_eq!(board.try_get(0, -1), None);
        assert_eq!(board.try_get(6, 0), None);
        assert_eq!(board.try_get(0, 7), None);
        assert_eq!(board.try_get(5, 6), Some(Cell::Empty));
    }
}
