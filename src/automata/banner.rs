//! The public entry point: text in, generations out.

use std::cell::{RefCell, RefMut};
use std::rc::{Rc, Weak};

use log::debug;

use crate::automata::glyphs::{BitmapFont, GlyphSampler};
use crate::automata::grid::{AutomatonGrid, EdgePolicy};
use crate::automata::optimizer::{OptimizerConfig, PrimeOptimizer};
use crate::automata::palette::PaletteConfig;
use crate::automata::rasterizer::{TextAlign, TextRasterizer};
use crate::automata::renderer::Renderer;
use crate::traits_and_structs::error::{BannerError, Result};
use crate::traits_and_structs::surface::Surface;

/// How rendered text becomes the first generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Glyph ink cells are seeded as they are and decay under the rules.
    #[default]
    Literal,
    /// Each glyph is rebuilt from still lifes and period-2 oscillators, so
    /// the text keeps its shape.
    Oscillators(OptimizerConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Unseeded,
    Seeded,
}

/// A Game of Life banner bound to a drawing surface.
///
/// The banner owns its grid and palette. The surface belongs to the host;
/// the banner only keeps a weak handle and reports `SurfaceUnavailable` once
/// the host has dropped it.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use banner_of_life::{Banner, Canvas};
///
/// let canvas = Rc::new(RefCell::new(Canvas::new(512, 128)));
/// let mut banner = Banner::new(&canvas).unwrap();
/// banner.set_cell_size(8).unwrap();
/// banner.set_font_size(60).unwrap();
/// banner.set_grid_color("#DCDCDC").unwrap();
/// banner.render("R").unwrap();
/// banner.tick().unwrap();
/// ```
pub struct Banner<S: Surface> {
    surface: Weak<RefCell<S>>,
    surface_size: (u32, u32),
    grid: AutomatonGrid,
    palette: PaletteConfig,
    align: TextAlign,
    seed_mode: SeedMode,
    sampler: Box<dyn GlyphSampler>,
    phase: Phase,
    text: Option<String>,
}

impl<S: Surface> Banner<S> {
    /// Reads the surface size once and derives an all-dead grid from it.
    pub fn new(surface: &Rc<RefCell<S>>) -> Result<Self> {
        let surface_size = surface
            .try_borrow()
            .map_err(|_| unavailable("surface is borrowed elsewhere"))?
            .size();
        let palette = PaletteConfig::default();
        let (width, height) = grid_dimensions(surface_size, palette.cell_size());
        debug!(
            "banner on {}x{} surface, {}x{} cells",
            surface_size.0, surface_size.1, width, height
        );
        Ok(Self {
            surface: Rc::downgrade(surface),
            surface_size,
            grid: AutomatonGrid::new(width, height),
            palette,
            align: TextAlign::default(),
            seed_mode: SeedMode::default(),
            sampler: Box::new(BitmapFont),
            phase: Phase::Unseeded,
            text: None,
        })
    }

    pub fn grid(&self) -> &AutomatonGrid {
        &self.grid
    }

    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    pub fn is_seeded(&self) -> bool {
        self.phase == Phase::Seeded
    }

    /// The text of the last successful `render`.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn text_align(&self) -> TextAlign {
        self.align
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.grid.edge_policy()
    }

    /// Changing the size re-derives the grid from the surface and clears
    /// it; the banner needs a new `render` before it can tick again.
    pub fn set_cell_size<I: TryInto<u32> + Copy + std::fmt::Display>(&mut self, px: I) -> Result<()> {
        let before = self.palette.cell_size();
        self.palette.set_cell_size(px)?;
        if self.palette.cell_size() != before {
            self.rederive_grid();
        }
        Ok(())
    }

    pub fn set_font_size<I: TryInto<u32> + Copy + std::fmt::Display>(&mut self, px: I) -> Result<()> {
        self.palette.set_font_size(px)
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<()> {
        self.palette.set_background_color(color)
    }

    pub fn set_cell_color(&mut self, color: &str) -> Result<()> {
        self.palette.set_cell_color(color)
    }

    pub fn set_grid_color(&mut self, color: &str) -> Result<()> {
        self.palette.set_grid_color(color)
    }

    pub fn clear_grid_color(&mut self) {
        self.palette.clear_grid_color()
    }

    /// Applies from the next generation on; live cells are kept.
    pub fn set_edge_policy(&mut self, edge_policy: EdgePolicy) {
        self.grid.set_edge_policy(edge_policy)
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn set_seed_mode(&mut self, seed_mode: SeedMode) {
        self.seed_mode = seed_mode;
    }

    pub fn set_glyph_sampler<G: GlyphSampler + 'static>(&mut self, sampler: G) {
        self.sampler = Box::new(sampler);
    }

    /// Re-reads the surface size. If the grid dimensions change, the grid is
    /// cleared and the banner is unseeded.
    pub fn surface_resized(&mut self) -> Result<()> {
        let surface = self.upgrade()?;
        let size = borrow(&surface)?.size();
        self.surface_size = size;
        if grid_dimensions(size, self.palette.cell_size()) != self.grid.dimensions() {
            self.rederive_grid();
        }
        Ok(())
    }

    /// Seeds the grid from `text`, discarding any previous generations, and
    /// paints it.
    pub fn render(&mut self, text: &str) -> Result<()> {
        let surface = self.upgrade()?;
        let mut surface = borrow(&surface)?;
        Renderer::check(&mut *surface)?;

        let (width, height) = self.grid.dimensions();
        let rasterizer = TextRasterizer::new(self.palette.font_size(), self.palette.cell_size())
            .with_align(self.align);
        let literal = rasterizer.rasterize(&*self.sampler, text, width, height);
        let pattern = match self.seed_mode {
            SeedMode::Literal => literal,
            SeedMode::Oscillators(config) => PrimeOptimizer::new(&config)
                .approximate(&literal, &rasterizer.layout(text, width, height)),
        };
        self.grid.seed(&pattern)?;
        self.phase = Phase::Seeded;
        self.text = Some(text.to_owned());
        debug!("rendered {:?} ({:?})", text, self.seed_mode);

        Renderer::paint(&self.grid, &self.palette, &mut *surface)
    }

    /// Advances one generation and paints it.
    pub fn tick(&mut self) -> Result<()> {
        if self.phase == Phase::Unseeded {
            return Err(BannerError::NotSeeded);
        }
        let surface = self.upgrade()?;
        let mut surface = borrow(&surface)?;
        Renderer::check(&mut *surface)?;

        self.grid.advance();
        Renderer::paint(&self.grid, &self.palette, &mut *surface)
    }

    /// Paints the current generation again, e.g. after a palette change.
    pub fn redraw(&self) -> Result<()> {
        let surface = self.upgrade()?;
        let mut surface = borrow(&surface)?;
        Renderer::paint(&self.grid, &self.palette, &mut *surface)
    }

    fn rederive_grid(&mut self) {
        let (width, height) = grid_dimensions(self.surface_size, self.palette.cell_size());
        self.grid.resize(width, height);
        self.phase = Phase::Unseeded;
    }

    fn upgrade(&self) -> Result<Rc<RefCell<S>>> {
        self.surface
            .upgrade()
            .ok_or_else(|| unavailable("surface has been dropped"))
    }
}

fn borrow<S>(surface: &Rc<RefCell<S>>) -> Result<RefMut<'_, S>> {
    surface
        .try_borrow_mut()
        .map_err(|_| unavailable("surface is borrowed elsewhere"))
}

fn unavailable(why: &str) -> BannerError {
    BannerError::SurfaceUnavailable(why.to_owned())
}

fn grid_dimensions((width, height): (u32, u32), cell_size: u32) -> (usize, usize) {
    let cell_size = cell_size.max(1);
    ((width / cell_size) as usize, (height / cell_size) as usize)
}
