//! RGBA colors parsed from CSS-style names or hex strings.

use std::fmt;
use std::str::FromStr;

use crate::traits_and_structs::error::BannerError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Byte order of an RGBA8 frame.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 | 4 => {
                // #rgb expands each digit: f -> ff
                let mut c = [0xff_u8; 4];
                for (i, slot) in c.iter_mut().enumerate().take(digits.len()) {
                    *slot = nibble(i)? * 0x11;
                }
                Some(Color::rgba(c[0], c[1], c[2], c[3]))
            }
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let c = match lower.as_str() {
            "black" => Color::rgb(0, 0, 0),
            "white" => Color::rgb(255, 255, 255),
            "red" => Color::rgb(255, 0, 0),
            "lime" => Color::rgb(0, 255, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "cyan" | "aqua" => Color::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            "silver" => Color::rgb(192, 192, 192),
            "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
            "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
            "dimgray" | "dimgrey" => Color::rgb(105, 105, 105),
            "gainsboro" => Color::rgb(220, 220, 220),
            "whitesmoke" => Color::rgb(245, 245, 245),
            "maroon" => Color::rgb(128, 0, 0),
            "olive" => Color::rgb(128, 128, 0),
            "navy" => Color::rgb(0, 0, 128),
            "teal" => Color::rgb(0, 128, 128),
            "purple" => Color::rgb(128, 0, 128),
            "orange" => Color::rgb(255, 165, 0),
            "pink" => Color::rgb(255, 192, 203),
            "brown" => Color::rgb(165, 42, 42),
            "gold" => Color::rgb(255, 215, 0),
            "indigo" => Color::rgb(75, 0, 130),
            "violet" => Color::rgb(238, 130, 238),
            "crimson" => Color::rgb(220, 20, 60),
            "coral" => Color::rgb(255, 127, 80),
            "salmon" => Color::rgb(250, 128, 114),
            "tomato" => Color::rgb(255, 99, 71),
            "skyblue" => Color::rgb(135, 206, 235),
            "steelblue" => Color::rgb(70, 130, 180),
            "forestgreen" => Color::rgb(34, 139, 34),
            "seagreen" => Color::rgb(46, 139, 87),
            "ivory" => Color::rgb(255, 255, 240),
            "beige" => Color::rgb(245, 245, 220),
            "transparent" => Color::rgba(0, 0, 0, 0),
            _ => return None,
        };
        Some(c)
    }
}

impl FromStr for Color {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(digits) => Color::from_hex(digits),
            None => Color::from_name(trimmed),
        };
        parsed.ok_or_else(|| BannerError::InvalidConfig(format!("unrecognized color {:?}", s)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("White".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("BLACK".parse::<Color>(), Ok(Color::BLACK));
        assert_eq!("grey".parse::<Color>(), "Gray".parse::<Color>());
    }

    #[test]
    fn hex_forms() {
        assert_eq!("#DCDCDC".parse::<Color>(), Ok(Color::rgb(0xdc, 0xdc, 0xdc)));
        assert_eq!("#fff".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("#f008".parse::<Color>(), Ok(Color::rgba(0xff, 0, 0, 0x88)));
        assert_eq!("#11223344".parse::<Color>(), Ok(Color::rgba(0x11, 0x22, 0x33, 0x44)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "blurple", "#ffé"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(BannerError::InvalidConfig(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn display_round_trips_through_hex() {
        let c = Color::rgb(0xdc, 0xdc, 0xdc);
        assert_eq!(c.to_string(), "#dcdcdc");
        assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }
}
