//! RGB colors and the fixed scene palette.
//!
//! Colors are authored as 8-bit RGB triples and packed into ARGB8888 only
//! when written to the frame buffer.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs into ARGB8888 with an opaque alpha channel.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }
}

pub const BACKGROUND: Color = Color::rgb(30, 80, 100);

pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const ORANGE: Color = Color::rgb(255, 127, 0);
