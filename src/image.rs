//! Owned image frames and annotation drawing.
//!
//! This module provides:
//!
//! - The [`Frame`] type, an owned RGBA image of fixed per-session resolution.
//! - The [`Color`] type used by all drawing operations.
//! - The [`draw`] submodule with freestanding functions to annotate a frame.
//!
//! Frames are mutated in place for annotation only and are never persisted.

pub mod draw;

use std::{fmt, ops::Index};

use embedded_graphics::{pixelcolor::raw::RawU32, prelude::PixelColor};
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::resolution::Resolution;

/// An 8-bit sRGB image with alpha channel.
#[derive(Clone)]
pub struct Frame {
    buf: RgbaImage,
}

impl Frame {
    /// Creates a frame of the given resolution, filled with opaque black.
    pub fn new(resolution: Resolution) -> Self {
        Self {
            buf: ImageBuffer::from_pixel(
                resolution.width(),
                resolution.height(),
                Rgba([0, 0, 0, 255]),
            ),
        }
    }

    /// Returns the width of this frame, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.buf.width()
    }

    /// Returns the height of this frame, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.buf.height()
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width(), self.height())
    }

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside of the frame.
    pub fn get(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *self.buf.get_pixel(x, y);
        Color([r, g, b, a])
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside of the frame.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.buf.put_pixel(x, y, Rgba(color.0));
    }

    /// Fills the whole frame with `color`.
    pub fn fill(&mut self, color: Color) {
        for pixel in self.buf.pixels_mut() {
            *pixel = Rgba(color.0);
        }
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({}x{})", self.width(), self.height())
    }
}

/// An 8-bit RGBA color.
///
/// Colors are always in the sRGB color space and use non-premultiplied alpha.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Color(pub(crate) [u8; 4]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);
    pub const YELLOW: Self = Self([255, 255, 0, 255]);
    pub const MAGENTA: Self = Self([255, 0, 255, 255]);
    pub const CYAN: Self = Self([0, 255, 255, 255]);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r(),
            self.g(),
            self.b(),
            self.a(),
        )
    }
}

impl Index<usize> for Color {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl PixelColor for Color {
    type Raw = RawU32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set() {
        let mut frame = Frame::new(Resolution::new(4, 4));
        assert_eq!(frame.get(0, 0), Color::BLACK);
        frame.set(2, 3, Color::MAGENTA);
        assert_eq!(frame.get(2, 3), Color::MAGENTA);
        assert_eq!(frame.get(3, 2), Color::BLACK);
    }

    #[test]
    fn fill() {
        let mut frame = Frame::new(Resolution::new(2, 2));
        frame.fill(Color::CYAN);
        assert_eq!(frame.get(1, 1), Color::CYAN);
    }
}
