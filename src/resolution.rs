//! Types for representing image resolutions.

use std::fmt;

/// Resolution (`width x height`) of an image, window, or camera mode.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Quarter-1080p resolution: `960x540`
    pub const RES_QHD: Self = Self {
        width: 960,
        height: 540,
    };

    /// Creates a new [`Resolution`] of `width x height`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width != 0 && height != 0,
            "attempted to create a resolution with 0 width or height"
        );
        Self { width, height }
    }

    /// Returns the width of this [`Resolution`].
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of this [`Resolution`].
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Converts normalized `[0, 1]` image coordinates into pixel coordinates.
    ///
    /// Values outside of `[0, 1]` are mapped accordingly and end up outside of
    /// the image bounds.
    #[inline]
    pub fn to_pixel_coords(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.width as f32, y * self.height as f32)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
