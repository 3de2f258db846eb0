use crate::grid::GridState;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const GRID_LINE: [u8; 4] = [0, 0, 0, 255];
const LIVE_CELL: [u8; 4] = [0, 0, 0, 255];
const HOVER_CELL: [u8; 4] = [235, 235, 235, 255]; // #ebebeb

/// CPU framebuffer renderer for the board.
///
/// The logical framebuffer is fixed at the board's pixel dimensions; an OS
/// window resize only rescales the surface, never the board.
pub struct BoardRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl BoardRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Draws the lattice, fills live cells, and highlights the hover cell.
    /// Read-only over the grid.
    pub fn render(&mut self, grid: &GridState, hover: Option<(usize, usize)>, cell_size: u32) {
        let width = self.width;
        let height = self.height;
        let frame = self.pixels.frame_mut();

        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND);
        }

        if let Some((row, col)) = hover {
            let x = col as u32 * cell_size;
            let y = row as u32 * cell_size;
            Self::fill_rect(frame, width, height, x, y, cell_size, cell_size, HOVER_CELL);
        }

        for (row, cells) in grid.cells().iter().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                if alive {
                    let x = col as u32 * cell_size;
                    let y = row as u32 * cell_size;
                    Self::fill_rect(
                        frame, width, height, x, y, cell_size, cell_size, LIVE_CELL,
                    );
                }
            }
        }

        // lattice strokes on top so cell edges stay visible
        for row in 0..=grid.rows() as u32 {
            let y = (row * cell_size).min(height.saturating_sub(1));
            Self::fill_rect(frame, width, height, 0, y, width, 1, GRID_LINE);
        }
        for col in 0..=grid.cols() as u32 {
            let x = (col * cell_size).min(width.saturating_sub(1));
            Self::fill_rect(frame, width, height, x, 0, 1, height, GRID_LINE);
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn fill_rect(
        frame: &mut [u8],
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: [u8; 4],
    ) {
        for dy in 0..h {
            for dx in 0..w {
                let px = x + dx;
                let py = y + dy;

                if px < width && py < height {
                    let index = ((py * width + px) * 4) as usize;
                    if index + 3 < frame.len() {
                        frame[index..index + 4].copy_from_slice(&color);
                    }
                }
            }
        }
    }
}
