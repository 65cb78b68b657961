//! Owned pixel storage.
//!
//! Provides the [`Renderer`] struct which owns the color buffer, clears it
//! between frames and hands out [`FrameBuffer`] views for rasterization.

use super::framebuffer::FrameBuffer;
use crate::colors::{self, Color};

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    /// Color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(Color::from_argb(
                self.color_buffer[(y * self.width + x) as usize],
            ))
        } else {
            None
        }
    }

    /// The frame as ARGB8888 bytes, ready for a streaming texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding or invalid bit patterns, u8 has alignment
        // 1, and the length covers exactly the same allocation.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copies the frame into an RGB image for saving to disk.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = Color::from_argb(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgb([c.r, c.g, c.b])
        })
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }
}
