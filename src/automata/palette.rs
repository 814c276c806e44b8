use log::warn;

use crate::traits_and_structs::color::Color;
use crate::traits_and_structs::error::{BannerError, Result};

pub const DEFAULT_CELL_SIZE: u32 = 4;
pub const DEFAULT_FONT_SIZE: u32 = 40;

/// Sizes and colors used to lay out and paint a banner.
///
/// Every setter validates its argument and leaves the old value in place on
/// failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteConfig {
    cell_size_px: u32,
    font_size_px: u32,
    background_color: Color,
    cell_color: Color,
    grid_color: Option<Color>,
}

impl Default for PaletteConfig {
    /// 4px cells, 40px font, black cells on white, no grid lines.
    fn default() -> Self {
        Self {
            cell_size_px: DEFAULT_CELL_SIZE,
            font_size_px: DEFAULT_FONT_SIZE,
            background_color: Color::WHITE,
            cell_color: Color::BLACK,
            grid_color: None,
        }
    }
}

impl PaletteConfig {
    pub fn cell_size(&self) -> u32 {
        self.cell_size_px
    }

    pub fn font_size(&self) -> u32 {
        self.font_size_px
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn cell_color(&self) -> Color {
        self.cell_color
    }

    pub fn grid_color(&self) -> Option<Color> {
        self.grid_color
    }

    pub fn set_cell_size<I: TryInto<u32> + Copy + std::fmt::Display>(&mut self, px: I) -> Result<()> {
        self.cell_size_px = positive_px("cell size", px)?;
        Ok(())
    }

    pub fn set_font_size<I: TryInto<u32> + Copy + std::fmt::Display>(&mut self, px: I) -> Result<()> {
        self.font_size_px = positive_px("font size", px)?;
        Ok(())
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<()> {
        self.background_color = parse_color("background", color)?;
        Ok(())
    }

    pub fn set_cell_color(&mut self, color: &str) -> Result<()> {
        self.cell_color = parse_color("cell", color)?;
        Ok(())
    }

    pub fn set_grid_color(&mut self, color: &str) -> Result<()> {
        self.grid_color = Some(parse_color("grid", color)?);
        Ok(())
    }

    /// Stops drawing grid lines.
    pub fn clear_grid_color(&mut self) {
        self.grid_color = None;
    }
}

fn positive_px<I: TryInto<u32> + Copy + std::fmt::Display>(what: &str, px: I) -> Result<u32> {
    match px.try_into() {
        Ok(v) if v > 0 => Ok(v),
        _ => {
            warn!("rejected {} {}", what, px);
            Err(BannerError::InvalidConfig(format!(
                "{} must be a positive number of pixels, got {}",
                what, px
            )))
        }
    }
}

fn parse_color(what: &str, color: &str) -> Result<Color> {
    color.parse().map_err(|e| {
        warn!("rejected {} color {:?}", what, color);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = PaletteConfig::default();
        assert_eq!(p.cell_size(), 4);
        assert_eq!(p.font_size(), 40);
        assert_eq!(p.background_color(), Color::WHITE);
        assert_eq!(p.cell_color(), Color::BLACK);
        assert_eq!(p.grid_color(), None);
    }

    #[test]
    fn sizes_must_be_positive() {
        let mut p = PaletteConfig::default();
        assert!(matches!(p.set_cell_size(0), Err(BannerError::InvalidConfig(_))));
        assert!(matches!(p.set_cell_size(-5), Err(BannerError::InvalidConfig(_))));
        assert!(matches!(p.set_font_size(0_u64), Err(BannerError::InvalidConfig(_))));
        assert!(matches!(
            p.set_font_size(u64::MAX),
            Err(BannerError::InvalidConfig(_))
        ));
        assert_eq!(p, PaletteConfig::default());

        p.set_cell_size(8).unwrap();
        p.set_font_size(60_usize).unwrap();
        assert_eq!((p.cell_size(), p.font_size()), (8, 60));
    }

    #[test]
    fn bad_color_keeps_previous() {
        let mut p = PaletteConfig::default();
        p.set_grid_color("#DCDCDC").unwrap();
        assert!(p.set_grid_color("nope").is_err());
        assert!(p.set_cell_color("#12").is_err());
        assert_eq!(p.grid_color(), Some(Color::rgb(0xdc, 0xdc, 0xdc)));
        assert_eq!(p.cell_color(), Color::BLACK);
        p.clear_grid_color();
        assert_eq!(p.grid_color(), None);
    }

    #[test]
    fn reference_configuration() {
        let mut p = PaletteConfig::default();
        p.set_cell_size(8).unwrap();
        p.set_font_size(60).unwrap();
        p.set_background_color("White").unwrap();
        p.set_cell_color("Black").unwrap();
        p.set_grid_color("#DCDCDC").unwrap();
        assert_eq!(p.background_color(), Color::WHITE);
    }
}
