use crate::clock::TickScheduler;
use crate::grid::{GridError, GridState};
use crate::input_mapping::InputMapper;
use crate::rules;

/// Owns the board, the run flag, and the generation clock.
///
/// Everything the window loop does lands here: pointer events mutate or
/// preview cells, each frame pumps the clock, and the renderer reads the
/// grid back out. The grid is never handed out mutably, so nothing outside
/// this struct can interleave writes with a generation step.
pub struct SimulationController {
    grid: GridState,
    mapper: InputMapper,
    clock: TickScheduler,
    hover: Option<(usize, usize)>,
    cell_size: u32,
    generation: u64,
}

impl SimulationController {
    /// `width` and `height` are the board surface in pixels; `cell_size`
    /// must evenly divide both. Violations are fatal at construction.
    pub fn new(
        width: u32,
        height: u32,
        cell_size: u32,
        tick_interval_ms: f64,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 || cell_size == 0 {
            return Err(GridError::InvalidDimension(format!(
                "width {}, height {}, cell size {} must all be positive",
                width, height, cell_size
            )));
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(GridError::InvalidDimension(format!(
                "cell size {} does not evenly divide {}x{}",
                cell_size, width, height
            )));
        }
        if !(tick_interval_ms > 0.0) {
            return Err(GridError::InvalidDimension(format!(
                "tick interval {} ms must be positive",
                tick_interval_ms
            )));
        }
        let rows = (height / cell_size) as usize;
        let cols = (width / cell_size) as usize;
        Ok(Self {
            grid: GridState::new(rows, cols)?,
            mapper: InputMapper::new(cell_size, rows, cols),
            clock: TickScheduler::new(tick_interval_ms),
            hover: None,
            cell_size,
            generation: 0,
        })
    }

    /// Click sets the cell alive. Clicking a live cell is a no-op rather
    /// than a toggle-off. Clicks outside the grid are ignored.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if let Ok((row, col)) = self.mapper.pixel_to_cell(x, y) {
            // set() cannot fail here, the mapper already bounds-checked
            let _ = self.grid.set(row, col, true);
            log::debug!("cell ({}, {}) set alive", row, col);
        }
    }

    /// Records the hover cell for preview highlighting only. Moving off the
    /// grid clears the preview; the grid itself is never touched.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.hover = self.mapper.pixel_to_cell(x, y).ok();
    }

    /// Pumped once per animation frame by the host loop. Returns true when
    /// a generation step ran, so the caller knows a redraw is due.
    pub fn on_frame(&mut self, delta_ms: f64) -> bool {
        self.clock.advance(delta_ms);
        if self.clock.should_step() {
            self.grid = rules::step_generation(&self.grid);
            self.generation += 1;
            log::debug!("advanced to generation {}", self.generation);
            true
        } else {
            false
        }
    }

    pub fn toggle_running(&mut self) {
        self.clock.toggle_running();
        log::info!(
            "simulation {}",
            if self.clock.is_running() { "running" } else { "paused" }
        );
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        log::info!("board cleared at generation {}", self.generation);
    }

    pub fn current_grid(&self) -> &GridState {
        &self.grid
    }

    pub fn hover_cell(&self) -> Option<(usize, usize)> {
        self.hover
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
