//! Hand detection seam and a scripted stand-in detector.
//!
//! Actual landmark inference is delegated to an external detector; this
//! module only defines the trait the pipeline consumes, plus a deterministic
//! scripted implementation used by the demo binaries and tests.

use crate::hand::{HandObservation, NUM_LANDMARKS};
use crate::image::Frame;
use crate::landmark::Landmarks;

/// Per-frame hand landmark detection.
pub trait HandDetector {
    /// Returns the hands detected in `frame`, zero or more.
    ///
    /// Landmark positions are in normalized image coordinates.
    fn detect(&mut self, frame: &Frame) -> Vec<HandObservation>;
}

impl<D: HandDetector + ?Sized> HandDetector for &mut D {
    fn detect(&mut self, frame: &Frame) -> Vec<HandObservation> {
        (**self).detect(frame)
    }
}

/// Landmark offsets from the palm center, roughly an upright open hand.
///
/// Ordered like `LandmarkIdx`: wrist, then thumb, index, middle, ring and
/// pinky from base joint to tip.
const HAND_TEMPLATE: [[f32; 3]; NUM_LANDMARKS] = [
    [0.000, 0.120, 0.000],
    [-0.060, 0.090, -0.010],
    [-0.095, 0.050, -0.020],
    [-0.120, 0.010, -0.030],
    [-0.140, -0.020, -0.040],
    [-0.060, -0.020, -0.010],
    [-0.070, -0.070, -0.020],
    [-0.075, -0.105, -0.030],
    [-0.080, -0.140, -0.040],
    [-0.020, -0.030, -0.010],
    [-0.022, -0.085, -0.020],
    [-0.024, -0.125, -0.030],
    [-0.026, -0.160, -0.040],
    [0.020, -0.025, -0.010],
    [0.026, -0.075, -0.020],
    [0.030, -0.110, -0.030],
    [0.034, -0.145, -0.040],
    [0.060, -0.010, -0.010],
    [0.070, -0.050, -0.020],
    [0.076, -0.080, -0.030],
    [0.082, -0.105, -0.040],
];

/// A deterministic detector that reports one synthetic hand per frame.
///
/// The hand's palm center follows a circle around the image center; the
/// landmarks are a fixed open-hand template around that point, clamped to
/// `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ScriptedHands {
    radius: f32,
    step: f32,
    frame: u32,
}

impl ScriptedHands {
    /// Creates a detector whose hand circles the image center.
    ///
    /// `radius` is in normalized coordinates, `step` is the angle advance per
    /// frame in radians.
    pub fn circle(radius: f32, step: f32) -> Self {
        Self {
            radius,
            step,
            frame: 0,
        }
    }

    /// Creates a detector whose hand stays at the image center.
    pub fn stationary() -> Self {
        Self::circle(0.0, 0.0)
    }
}

impl HandDetector for ScriptedHands {
    fn detect(&mut self, _frame: &Frame) -> Vec<HandObservation> {
        let angle = self.frame as f32 * self.step;
        self.frame += 1;

        let cx = 0.5 + self.radius * angle.cos();
        let cy = 0.5 + self.radius * angle.sin();

        let landmarks = Landmarks::from_positions(HAND_TEMPLATE.iter().map(|[dx, dy, dz]| {
            [
                (cx + dx).clamp(0.0, 1.0),
                (cy + dy).clamp(0.0, 1.0),
                *dz,
            ]
        }));
        vec![HandObservation::new(landmarks)]
    }
}

#[cfg(test)]
mod tests {
    use crate::resolution::Resolution;

    use super::*;

    #[test]
    fn scripted_hand_is_well_formed() {
        let mut detector = ScriptedHands::circle(0.2, 0.1);
        let frame = Frame::new(Resolution::new(64, 48));

        for _ in 0..100 {
            let hands = detector.detect(&frame);
            assert_eq!(hands.len(), 1);
            let landmarks = hands[0].landmarks();
            assert_eq!(landmarks.len(), NUM_LANDMARKS);
            for pos in landmarks.positions() {
                assert!((0.0..=1.0).contains(&pos[0]));
                assert!((0.0..=1.0).contains(&pos[1]));
            }
        }
    }

    #[test]
    fn stationary_hand_does_not_move() {
        let mut detector = ScriptedHands::stationary();
        let frame = Frame::new(Resolution::new(64, 48));
        let first = detector.detect(&frame).remove(0);
        let second = detector.detect(&frame).remove(0);
        assert_eq!(first, second);
    }
}
