//! The capture/detect/update/present main loop.
//!
//! The loop is single-threaded and blocking: each iteration blocks on frame
//! capture, then detection, then presentation. Stages hand data to each other
//! explicitly (frame in, annotated frame plus derived value out), which keeps
//! the aggregation and mapping logic testable without any rendering surface.

use crate::detection::HandDetector;
use crate::hand::HandObservation;
use crate::image::Frame;
use crate::video::VideoSource;

/// Decision returned by the presenter after each displayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Stop the loop, e.g. because the quit key was pressed.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopping,
    Stopped,
}

/// Drives a video source and detector through the main loop.
///
/// The source is the only exclusive resource; [`Pipeline::run`] releases it
/// exactly once, on every exit path. A failed or exhausted read ends the loop
/// unconditionally; there is no retry logic.
pub struct Pipeline<S, D> {
    source: S,
    detector: D,
    final_update: bool,
}

impl<S: VideoSource, D: HandDetector> Pipeline<S, D> {
    pub fn new(source: S, detector: D) -> Self {
        Self {
            source,
            detector,
            final_update: false,
        }
    }

    /// Requests one final detect/update pass after the loop has been told to
    /// stop, before the source is released. The presenter does not run for
    /// this pass.
    pub fn final_update_on_exit(mut self, enabled: bool) -> Self {
        self.final_update = enabled;
        self
    }

    /// Runs the loop until the presenter requests a quit or the source runs
    /// out of frames.
    ///
    /// `update` receives each captured frame for annotation along with the
    /// detected hands, and returns a derived value that is handed to
    /// `present` together with the annotated frame.
    pub fn run<T, U, P>(mut self, mut update: U, mut present: P)
    where
        U: FnMut(&mut Frame, &[HandObservation]) -> T,
        P: FnMut(&Frame, T) -> Control,
    {
        let mut state = LoopState::Running;
        loop {
            state = match state {
                LoopState::Running => match self.source.read() {
                    Some(mut frame) => {
                        let hands = self.detector.detect(&frame);
                        let derived = update(&mut frame, &hands);
                        match present(&frame, derived) {
                            Control::Continue => LoopState::Running,
                            Control::Quit => LoopState::Stopping,
                        }
                    }
                    None => LoopState::Stopping,
                },
                LoopState::Stopping => {
                    if self.final_update {
                        if let Some(mut frame) = self.source.read() {
                            let hands = self.detector.detect(&frame);
                            update(&mut frame, &hands);
                        }
                    }
                    self.source.release();
                    LoopState::Stopped
                }
                LoopState::Stopped => break,
            };
        }
    }
}
