use crate::traits_and_structs::color::Color;

/// A pixel target the banner paints into.
///
/// The frame is RGBA8, row-major, `width * height * 4` bytes long, the same
/// layout `pixels::Pixels::get_frame` hands out.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    fn frame_mut(&mut self) -> &mut [u8];
}

/// An in-memory surface, for headless rendering and tests.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    frame: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Resizes the canvas; contents are cleared to transparent black.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Canvas::new(width, height);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (x as usize + y as usize * self.width as usize) * 4;
        let p = &self.frame[i..i + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    pub fn frame(&self) -> &[u8] {
        &self.frame
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.frame
    }
}
