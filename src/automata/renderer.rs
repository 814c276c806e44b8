//! Paints a grid into an RGBA8 frame.

use log::trace;

use crate::automata::grid::AutomatonGrid;
use crate::automata::palette::PaletteConfig;
use crate::traits_and_structs::error::{BannerError, Result};
use crate::traits_and_structs::surface::Surface;

/// Stateless painter. Every call repaints the whole frame.
pub struct Renderer;

impl Renderer {
    /// Fails with `SurfaceUnavailable` when the frame does not hold
    /// `width * height` RGBA pixels.
    pub fn check<S: Surface + ?Sized>(surface: &mut S) -> Result<()> {
        let (width, height) = surface.size();
        let expected = width as usize * height as usize * 4;
        let found = surface.frame_mut().len();
        if found != expected {
            return Err(BannerError::SurfaceUnavailable(format!(
                "{}x{} surface has a {} byte frame, expected {}",
                width, height, found, expected
            )));
        }
        Ok(())
    }

    /// Background first, then live cells, then grid lines on top.
    pub fn paint<S: Surface + ?Sized>(
        grid: &AutomatonGrid,
        palette: &PaletteConfig,
        surface: &mut S,
    ) -> Result<()> {
        Renderer::check(surface)?;
        let (width, height) = surface.size();
        let mut frame = Frame {
            pixels: surface.frame_mut(),
            width: width as usize,
            height: height as usize,
        };

        frame.clear(palette.background_color().to_rgba());

        let cell = palette.cell_size() as usize;
        let fill = palette.cell_color().to_rgba();
        for (row, col) in grid.live_cells() {
            frame.fill_rect(col * cell, row * cell, cell, cell, fill);
        }

        if let Some(line) = palette.grid_color() {
            frame.grid_lines(grid.width(), grid.height(), cell, line.to_rgba());
        }
        trace!(
            "painted generation {} ({} live) onto {}x{}",
            grid.generation(),
            grid.live_count(),
            width,
            height
        );
        Ok(())
    }
}

struct Frame<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl Frame<'_> {
    fn clear(&mut self, color: [u8; 4]) {
        for pix in self.pixels.chunks_exact_mut(4) {
            pix.copy_from_slice(&color);
        }
    }

    fn put(&mut self, x: isize, y: isize, color: [u8; 4]) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            if x < self.width && y < self.height {
                let i = (x + y * self.width) * 4;
                self.pixels[i..i + 4].copy_from_slice(&color);
            }
        }
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: [u8; 4]) {
        let x_end = (x + w).min(self.width);
        for py in y..(y + h).min(self.height) {
            let start = (x.min(x_end) + py * self.width) * 4;
            let end = (x_end + py * self.width) * 4;
            for pix in self.pixels[start..end].chunks_exact_mut(4) {
                pix.copy_from_slice(&color);
            }
        }
    }

    /// One-pixel lines on every cell boundary of a `cols x rows` grid,
    /// clipped to the frame.
    fn grid_lines(&mut self, cols: usize, rows: usize, cell: usize, color: [u8; 4]) {
        if self.width == 0 || self.height == 0 || cols == 0 || rows == 0 {
            return;
        }
        let to_x = (cols * cell).min(self.width - 1) as isize;
        let to_y = (rows * cell).min(self.height - 1) as isize;

        for c in 0..=cols {
            let x = (c * cell) as isize;
            if x > to_x {
                break;
            }
            for (px, py) in line_drawing::Bresenham::new((x, 0), (x, to_y)) {
                self.put(px, py, color);
            }
        }
        for r in 0..=rows {
            let y = (r * cell) as isize;
            if y > to_y {
                break;
            }
            for (px, py) in line_drawing::Bresenham::new((0, y), (to_x, y)) {
                self.put(px, py, color);
            }
        }
    }
}
