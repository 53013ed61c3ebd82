use rand::{seq::SliceRandom, Rng};
use std::fmt;

pub const GRID_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Square,
    Rectangle,
    Circle,
    Diamond,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Square, Shape::Rectangle, Shape::Circle, Shape::Diamond];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl TileColor {
    pub const ALL: [TileColor; 4] = [
        TileColor::Red,
        TileColor::Green,
        TileColor::Blue,
        TileColor::Yellow,
    ];
}

/// One grid cell's content: a shape drawn in one of the palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub shape: Shape,
    pub color: TileColor,
}

/// The puzzle board. Exactly one cell is empty at all times, and
/// `(empty_row, empty_col)` always points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    board: [[Option<Tile>; GRID_SIZE]; GRID_SIZE],
    empty_row: usize,
    empty_col: usize,
}

impl Puzzle {
    /// Builds a freshly shuffled board.
    ///
    /// All 16 (shape, color) combinations go into a pool, the pool is
    /// permuted, and tiles are assigned in row-major order. The bottom-right
    /// cell stays empty, so 15 of the 16 combinations land on the board and
    /// one sits out.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut pool = Vec::with_capacity(Shape::ALL.len() * TileColor::ALL.len());
        for shape in Shape::ALL {
            for color in TileColor::ALL {
                pool.push(Tile { shape, color });
            }
        }
        pool.shuffle(rng);

        let mut board = [[None; GRID_SIZE]; GRID_SIZE];
        let mut next = pool.into_iter();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if row == GRID_SIZE - 1 && col == GRID_SIZE - 1 {
                    continue; // the empty slot
                }
                board[row][col] = next.next();
            }
        }

        Self {
            board,
            empty_row: GRID_SIZE - 1,
            empty_col: GRID_SIZE - 1,
        }
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.board[row][col]
    }

    pub fn empty_pos(&self) -> (usize, usize) {
        (self.empty_row, self.empty_col)
    }

    /// Attempts to slide the tile at `(row, col)` into the empty slot.
    ///
    /// Only a cell orthogonally adjacent to the empty slot can move. Clicks
    /// out of bounds, on the empty slot itself, or on any non-adjacent cell
    /// leave the board untouched and return false.
    pub fn try_slide(&mut self, row: usize, col: usize) -> bool {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return false;
        }
        let adjacent = (row == self.empty_row && col.abs_diff(self.empty_col) == 1)
            || (col == self.empty_col && row.abs_diff(self.empty_row) == 1);
        if !adjacent {
            return false;
        }

        self.board[self.empty_row][self.empty_col] = self.board[row][col].take();
        self.empty_row = row;
        self.empty_col = col;
        true
    }

    /// The win condition: every row except the last is shape-uniform over its
    /// occupied cells, and every column's colors match the color of that
    /// column's last-row tile. A column whose last-row cell is empty is
    /// exempt from the color check.
    pub fn is_solved(&self) -> bool {
        for row in 0..GRID_SIZE - 1 {
            let mut row_shape = None;
            for cell in self.board[row].iter().flatten() {
                match row_shape {
                    None => row_shape = Some(cell.shape),
                    Some(shape) if shape != cell.shape => return false,
                    Some(_) => {}
                }
            }
        }

        for col in 0..GRID_SIZE {
            let Some(anchor) = self.board[GRID_SIZE - 1][col] else {
                continue;
            };
            for row in 0..GRID_SIZE - 1 {
                if let Some(tile) = self.board[row][col] {
                    if tile.color != anchor.color {
                        return false;
                    }
                }
            }
        }

        true
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            for cell in row {
                match cell {
                    Some(tile) => {
                        let s = match tile.shape {
                            Shape::Square => 'S',
                            Shape::Rectangle => 'R',
                            Shape::Circle => 'C',
                            Shape::Diamond => 'D',
                        };
                        let c = match tile.color {
                            TileColor::Red => 'r',
                            TileColor::Green => 'g',
                            TileColor::Blue => 'b',
                            TileColor::Yellow => 'y',
                        };
                        write!(f, "{}{} ", s, c)?;
                    }
                    None => write!(f, ".. ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Row r is all Shape::ALL[r] (last row mixed by construction is fine),
    /// column c is all TileColor::ALL[c], empty at the bottom-right.
    /// Satisfies both win conditions.
    fn solved_puzzle() -> Puzzle {
        let mut board = [[None; GRID_SIZE]; GRID_SIZE];
        for (row, cells) in board.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if row == GRID_SIZE - 1 && col == GRID_SIZE - 1 {
                    continue;
                }
                *cell = Some(Tile {
                    shape: Shape::ALL[row],
                    color: TileColor::ALL[col],
                });
            }
        }
        Puzzle {
            board,
            empty_row: GRID_SIZE - 1,
            empty_col: GRID_SIZE - 1,
        }
    }

    #[test]
    fn shuffled_board_has_one_empty_cell_and_distinct_tiles() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = Puzzle::shuffled(&mut rng);

            assert_eq!(puzzle.empty_pos(), (GRID_SIZE - 1, GRID_SIZE - 1));

            let mut tiles = HashSet::new();
            let mut empty_count = 0;
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    match puzzle.tile(row, col) {
                        Some(tile) => {
                            assert!(tiles.insert(tile), "duplicate tile {:?}\n{}", tile, puzzle);
                        }
                        None => empty_count += 1,
                    }
                }
            }
            assert_eq!(empty_count, 1);
            assert_eq!(tiles.len(), GRID_SIZE * GRID_SIZE - 1);
        }
    }

    #[test]
    fn solved_when_rows_shape_uniform_and_columns_color_match() {
        assert!(solved_puzzle().is_solved());
    }

    #[test]
    fn one_mismatched_shape_breaks_the_solve() {
        let mut puzzle = solved_puzzle();
        puzzle.board[1][1].as_mut().unwrap().shape = Shape::Diamond;
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn one_mismatched_color_breaks_the_solve() {
        let mut puzzle = solved_puzzle();
        puzzle.board[0][2].as_mut().unwrap().color = TileColor::Red;
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn column_without_last_row_anchor_is_exempt_from_color_check() {
        let mut puzzle = solved_puzzle();
        // The empty slot sits at the bottom of the last column, so its colors
        // have no reference and may disagree freely.
        puzzle.board[0][GRID_SIZE - 1].as_mut().unwrap().color = TileColor::Red;
        assert!(puzzle.is_solved());
    }

    #[test]
    fn row_with_empty_cell_is_uniform_over_remaining_tiles() {
        // Hole inside row 1 instead of the last row: the three tiles left
        // there still share a shape, and column 3's new last-row anchor
        // matches the colors above it.
        let mut puzzle = solved_puzzle();
        puzzle.board[3][3] = puzzle.board[1][3].take();
        puzzle.empty_row = 1;
        puzzle.empty_col = 3;
        assert!(puzzle.is_solved());
    }

    #[test]
    fn non_adjacent_click_changes_nothing() {
        let mut puzzle = solved_puzzle();
        let before = puzzle.clone();
        assert!(!puzzle.try_slide(1, 1));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn click_on_empty_cell_changes_nothing() {
        let mut puzzle = solved_puzzle();
        let before = puzzle.clone();
        assert!(!puzzle.try_slide(GRID_SIZE - 1, GRID_SIZE - 1));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn diagonal_neighbor_changes_nothing() {
        let mut puzzle = solved_puzzle();
        let before = puzzle.clone();
        assert!(!puzzle.try_slide(2, 2));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn out_of_bounds_click_changes_nothing() {
        let mut puzzle = solved_puzzle();
        let before = puzzle.clone();
        assert!(!puzzle.try_slide(GRID_SIZE, 0));
        assert!(!puzzle.try_slide(0, usize::MAX));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn adjacent_click_swaps_with_empty_and_moves_tracker() {
        let mut puzzle = solved_puzzle();
        let moved = puzzle.tile(3, 2).unwrap();

        assert!(puzzle.try_slide(3, 2));

        assert_eq!(puzzle.tile(3, 3), Some(moved));
        assert_eq!(puzzle.tile(3, 2), None);
        assert_eq!(puzzle.empty_pos(), (3, 2));
    }

    #[test]
    fn sliding_back_restores_the_board() {
        let mut puzzle = solved_puzzle();
        let before = puzzle.clone();
        assert!(puzzle.try_slide(3, 2));
        assert!(puzzle.try_slide(3, 3));
        assert_eq!(puzzle, before);
    }
}
