use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimension(String),
    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Fixed-size rectangular board of alive/dead cells.
///
/// Dimensions are set once at construction and never change. A generation
/// step reads from a `snapshot()` of this state and writes a fresh grid, so
/// no rule evaluation ever observes a partially updated board.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>, // cells[row][col], row = vertical axis
}

impl GridState {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension(format!(
                "{}x{} grid has no cells",
                rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![false; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        self.cells[row][col] = alive;
        Ok(())
    }

    /// Deep copy used as the read-only source for a generation step.
    pub fn snapshot(&self) -> GridState {
        self.clone()
    }

    /// Read-only view for the renderer.
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Kills every cell without touching anything else.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = false;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| !c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = GridState::new(4, 6).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert!(grid.is_empty());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            GridState::new(0, 5),
            Err(GridError::InvalidDimension(_))
        ));
        assert!(matches!(
            GridState::new(5, 0),
            Err(GridError::InvalidDimension(_))
        ));
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = GridState::new(3, 3).unwrap();
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            grid.set(0, 3, true),
            Err(GridError::OutOfBounds { row: 0, col: 3 })
        );
        grid.set(2, 1, true).unwrap();
        assert!(grid.get(2, 1).unwrap());
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let mut grid = GridState::new(2, 2).unwrap();
        grid.set(0, 0, true).unwrap();
        let snap = grid.snapshot();
        grid.set(0, 0, false).unwrap();
        assert!(snap.get(0, 0).unwrap());
        assert!(!grid.get(0, 0).unwrap());
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = GridState::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        grid.set(2, 0, true).unwrap();
        grid.clear();
        assert!(grid.is_empty());
    }
}
