//! Turns a line of text into the initial live cells of a grid.

use log::debug;

use crate::automata::glyphs::{GlyphSampler, ADVANCE_COLS, ADVANCE_ROWS};
use crate::automata::pattern::Pattern;

/// Horizontal placement of the line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// First character starts at column 0.
    #[default]
    Left,
    /// The whole line is centered; a line wider than the grid falls back to `Left`.
    Center,
}

/// The cells one character occupies. May run past the right or bottom edge
/// of the grid; only the part inside is rasterized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphBlock {
    pub ch: char,
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl GlyphBlock {
    /// Whether `(row, col)` lies in this block.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.height).contains(&row)
            && (self.col..self.col + self.width).contains(&col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRasterizer {
    font_size_px: u32,
    cell_size_px: u32,
    align: TextAlign,
}

impl TextRasterizer {
    pub fn new(font_size_px: u32, cell_size_px: u32) -> Self {
        Self {
            font_size_px,
            cell_size_px: cell_size_px.max(1),
            align: TextAlign::default(),
        }
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// `(width, height)` in cells of one character block.
    ///
    /// The height is the font size measured in cells; the width follows the
    /// aspect of the glyph advance box.
    pub fn block_size(&self) -> (usize, usize) {
        let height = ((self.font_size_px / self.cell_size_px) as usize).max(1);
        let width = (height * ADVANCE_COLS / ADVANCE_ROWS).max(1);
        (width, height)
    }

    /// Places characters left to right. Characters starting at or past the
    /// right edge are dropped.
    pub fn layout(&self, text: &str, width: usize, height: usize) -> Vec<GlyphBlock> {
        let (block_w, block_h) = self.block_size();
        let line_w = text.chars().count() * block_w;
        let left = match self.align {
            TextAlign::Center if line_w < width => (width - line_w) / 2,
            _ => 0,
        };
        let top = height.saturating_sub(block_h) / 2;

        text.chars()
            .enumerate()
            .map(|(i, ch)| GlyphBlock {
                ch,
                row: top,
                col: left + i * block_w,
                width: block_w,
                height: block_h,
            })
            .take_while(|block| block.col < width)
            .collect()
    }

    /// Samples each cell center of each character block. Cells outside every
    /// block are dead.
    pub fn rasterize<G: GlyphSampler + ?Sized>(
        &self,
        sampler: &G,
        text: &str,
        width: usize,
        height: usize,
    ) -> Pattern {
        let blocks = self.layout(text, width, height);
        let mut pattern = Pattern::new(width, height);
        for block in &blocks {
            for r in 0..block.height {
                let row = block.row + r;
                if row >= height {
                    break;
                }
                let y = (r as f32 + 0.5) / block.height as f32;
                for c in 0..block.width {
                    let col = block.col + c;
                    if col >= width {
                        break;
                    }
                    let x = (c as f32 + 0.5) / block.width as f32;
                    if sampler.covers(block.ch, x, y) {
                        pattern.set(row, col, true);
                    }
                }
            }
        }
        let dropped = text.chars().count() - blocks.len();
        if dropped > 0 {
            debug!("text wider than the grid, {} characters truncated", dropped);
        }
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automata::glyphs::BitmapFont;

    #[test]
    fn block_follows_font_over_cell_size() {
        assert_eq!(TextRasterizer::new(60, 8).block_size(), (5, 7));
        assert_eq!(TextRasterizer::new(40, 4).block_size(), (7, 10));
        assert_eq!(TextRasterizer::new(64, 4).block_size(), (12, 16));
        // font smaller than a cell still gets one cell
        assert_eq!(TextRasterizer::new(3, 8).block_size(), (1, 1));
    }

    #[test]
    fn empty_text_is_all_dead() {
        let p = TextRasterizer::new(60, 8).rasterize(&BitmapFont, "", 64, 16);
        assert_eq!(p.dimensions(), (64, 16));
        assert!(p.is_empty());
    }

    #[test]
    fn capital_r_on_banner_grid() {
        let p = TextRasterizer::new(60, 8).rasterize(&BitmapFont, "R", 64, 16);
        let expected = Pattern::from_ascii(
            "
            ###..
            #..#.
            #..#.
            #....
            #.#..
            #..#.
            .....
            ",
        )
        .unwrap();
        // block is vertically centered: (16 - 7) / 2
        for row in 0..16 {
            for col in 0..64 {
                let inside = (4..11).contains(&row) && col < 5;
                let want = inside && expected.get(row - 4, col);
                assert_eq!(p.get(row, col), want, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn characters_are_laid_left_to_right() {
        let r = TextRasterizer::new(60, 8);
        let blocks = r.layout("AB", 64, 16);
        assert_eq!(blocks.len(), 2);
        assert_eq!((blocks[0].col, blocks[1].col), (0, 5));
        let p = r.rasterize(&BitmapFont, "AB", 64, 16);
        let b_alone = r.rasterize(&BitmapFont, " B", 64, 16);
        for (row, col) in b_alone.live_cells() {
            assert!(p.get(row, col));
        }
        assert!(p.live_cells().all(|(_, col)| col < 10));
    }

    #[test]
    fn overflow_is_truncated_silently() {
        let r = TextRasterizer::new(60, 8);
        // 7 cells wide: one full block and two columns of the next
        let blocks = r.layout("HHHH", 7, 16);
        assert_eq!(blocks.len(), 2);
        let p = r.rasterize(&BitmapFont, "HHHH", 7, 16);
        assert_eq!(p.dimensions(), (7, 16));
        // left stem of the second H is visible in column 5
        assert!(p.get(4, 5));
    }

    #[test]
    fn tall_font_is_clipped_at_the_bottom() {
        let r = TextRasterizer::new(160, 8);
        let p = r.rasterize(&BitmapFont, "I", 40, 10);
        assert_eq!(r.layout("I", 40, 10)[0].row, 0);
        assert_eq!(p.dimensions(), (40, 10));
        assert!(!p.is_empty());
    }

    #[test]
    fn centered_line() {
        let r = TextRasterizer::new(60, 8).with_align(TextAlign::Center);
        let blocks = r.layout("HI", 64, 16);
        assert_eq!(blocks[0].col, (64 - 10) / 2);
        // wider than the grid: back to the left edge
        let blocks = r.layout("HELLO WORLD, HELLO AGAIN", 64, 16);
        assert_eq!(blocks[0].col, 0);
    }

    #[test]
    fn unsupported_characters_leave_blank_blocks() {
        let r = TextRasterizer::new(60, 8);
        let p = r.rasterize(&BitmapFont, "é", 64, 16);
        assert!(p.is_empty());
        let blocks = r.layout("éR", 64, 16);
        assert_eq!(blocks[1].col, 5);
    }

    #[test]
    fn sampler_sees_cell_centers() {
        let seen = std::cell::RefCell::new(Vec::new());
        let recorder = |_: char, x: f32, y: f32| {
            seen.borrow_mut().push((x, y));
            false
        };
        TextRasterizer::new(16, 8).rasterize(&recorder, "x", 10, 10);
        // 2 cells tall, 1 wide
        assert_eq!(*seen.borrow(), vec![(0.5, 0.25), (0.5, 0.75)]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::automata::glyphs::BitmapFont;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rasterizing_is_deterministic(
            text in "[ -~]{0,12}",
            font in 1_u32..120,
            cell in 1_u32..16,
            w in 0_usize..80,
            h in 0_usize..30,
        ) {
            let r = TextRasterizer::new(font, cell);
            prop_assert_eq!(
                r.rasterize(&BitmapFont, &text, w, h),
                r.rasterize(&BitmapFont, &text, w, h)
            );
        }

        #[test]
        fn live_cells_stay_inside_blocks(
            text in "[A-Za-z0-9 ]{0,8}",
            font in 1_u32..120,
            cell in 1_u32..16,
            w in 1_usize..80,
            h in 1_usize..30,
        ) {
            let r = TextRasterizer::new(font, cell);
            let blocks = r.layout(&text, w, h);
            let p = r.rasterize(&BitmapFont, &text, w, h);
            for (row, col) in p.live_cells() {
                prop_assert!(blocks.iter().any(|b| b.contains(row, col)));
            }
        }
    }
}
