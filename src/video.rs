//! Video sources feeding the tracking pipelines.

use crate::image::{Color, Frame};
use crate::resolution::Resolution;

/// A blocking source of image frames.
///
/// Real implementations wrap a camera device. The pipeline treats a `None`
/// read as end-of-stream and does not distinguish it from a capture failure;
/// either ends the loop.
pub trait VideoSource {
    /// Blocks until the next frame is available.
    ///
    /// Returns `None` when the stream has ended or the capture failed.
    fn read(&mut self) -> Option<Frame>;

    /// Releases the underlying capture resource.
    ///
    /// The pipeline calls this exactly once, on every exit path.
    fn release(&mut self);
}

impl<S: VideoSource + ?Sized> VideoSource for &mut S {
    fn read(&mut self) -> Option<Frame> {
        (**self).read()
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// A camera stand-in producing a fixed number of uniform frames.
///
/// Used by the demo binaries and tests; it needs no device access and ends
/// the stream after the configured frame budget, which also serves as the
/// demos' quit condition.
#[derive(Debug)]
pub struct SyntheticVideo {
    resolution: Resolution,
    remaining: u32,
    background: Color,
}

impl SyntheticVideo {
    /// Creates a source yielding `frames` frames of the given resolution.
    pub fn new(resolution: Resolution, frames: u32) -> Self {
        Self {
            resolution,
            remaining: frames,
            background: Color::from_rgb8(24, 24, 24),
        }
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }
}

impl VideoSource for SyntheticVideo {
    fn read(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut frame = Frame::new(self.resolution);
        frame.fill(self.background);
        Some(frame)
    }

    fn release(&mut self) {
        log::debug!("synthetic video source released");
    }
}
