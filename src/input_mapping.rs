use crate::grid::GridError;

/// Converts pointer pixel coordinates into grid cell indices.
///
/// This is the only place pixel-to-cell conversion exists; click handling
/// and hover preview both go through it, so the two paths can never disagree
/// about which axis is the row and which is the column.
pub struct InputMapper {
    cell_size: u32,
    rows: usize,
    cols: usize,
}

impl InputMapper {
    pub fn new(cell_size: u32, rows: usize, cols: usize) -> Self {
        Self {
            cell_size,
            rows,
            cols,
        }
    }

    /// Maps a pointer position to (row, col): vertical pixel coordinate to
    /// row, horizontal to column. Positions outside the grid are reported as
    /// `OutOfBounds` for the caller to ignore.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> Result<(usize, usize), GridError> {
        if x < 0.0 || y < 0.0 {
            return Err(GridError::OutOfBounds { row: 0, col: 0 });
        }
        let row = (y / self.cell_size as f64).floor() as usize;
        let col = (x / self.cell_size as f64).floor() as usize;
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_maps_to_row_and_x_maps_to_col() {
        let mapper = InputMapper::new(50, 10, 10);
        let (row, col) = mapper.pixel_to_cell(50.0 * 2.0 + 1.0, 50.0 * 3.0 + 1.0).unwrap();
        assert_eq!((row, col), (3, 2));
    }

    #[test]
    fn cell_boundaries_floor_downward() {
        let mapper = InputMapper::new(20, 5, 5);
        assert_eq!(mapper.pixel_to_cell(0.0, 0.0).unwrap(), (0, 0));
        assert_eq!(mapper.pixel_to_cell(19.9, 19.9).unwrap(), (0, 0));
        assert_eq!(mapper.pixel_to_cell(20.0, 20.0).unwrap(), (1, 1));
    }

    #[test]
    fn positions_outside_the_grid_are_out_of_bounds() {
        let mapper = InputMapper::new(20, 5, 5);
        assert!(mapper.pixel_to_cell(100.0, 50.0).is_err());
        assert!(mapper.pixel_to_cell(50.0, 100.0).is_err());
        assert!(mapper.pixel_to_cell(-1.0, 10.0).is_err());
        assert!(mapper.pixel_to_cell(10.0, -0.5).is_err());
    }
}
