//! Hand observations and their landmark topology.

use crate::image::{draw, Color, Frame};
use crate::landmark::{Landmarks, Position};

/// The number of landmarks in a [`HandObservation`], one per anatomical point.
pub const NUM_LANDMARKS: usize = 21;

/// Names for the hand pose landmarks.
///
/// `Cmc`/`Mcp`/`Ip`/`Pip`/`Dip` refer to the thumb and finger joints
/// (carpometacarpal, metacarpophalangeal, interphalangeal), `Tip` to the
/// fingertip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

const PALM_LANDMARKS: &[LandmarkIdx] = {
    use LandmarkIdx::*;
    &[
        Wrist,
        ThumbCmc,
        IndexFingerMcp,
        MiddleFingerMcp,
        RingFingerMcp,
        PinkyMcp,
    ]
};

const CONNECTIVITY: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

/// The full set of landmarks for one detected hand in one frame.
///
/// Positions use normalized image coordinates (see the crate-level docs).
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    landmarks: Landmarks,
}

impl HandObservation {
    /// Wraps a landmark collection as a hand observation.
    ///
    /// # Panics
    ///
    /// Panics if `landmarks` does not contain exactly [`NUM_LANDMARKS`]
    /// entries.
    pub fn new(landmarks: Landmarks) -> Self {
        assert_eq!(
            landmarks.len(),
            NUM_LANDMARKS,
            "a hand observation requires exactly {NUM_LANDMARKS} landmarks"
        );
        Self { landmarks }
    }

    #[inline]
    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    /// Returns the position of a named landmark.
    #[inline]
    pub fn position(&self, idx: LandmarkIdx) -> Position {
        self.landmarks.positions()[idx as usize]
    }

    /// Computes the center position of the hand's palm by averaging some of
    /// the landmarks.
    pub fn palm_center(&self) -> Position {
        let mut pos = [0.0; 3];
        for lm in PALM_LANDMARKS {
            let p = self.position(*lm);
            pos[0] += p[0];
            pos[1] += p[1];
            pos[2] += p[2];
        }

        let count = PALM_LANDMARKS.len() as f32;
        [pos[0] / count, pos[1] / count, pos[2] / count]
    }

    /// Draws the hand skeleton onto `frame`.
    ///
    /// Landmark positions are converted from normalized coordinates to the
    /// frame's pixel coordinates.
    pub fn draw(&self, frame: &mut Frame) {
        let res = frame.resolution();
        for (a, b) in CONNECTIVITY {
            let [ax, ay, _] = self.position(*a);
            let [bx, by, _] = self.position(*b);
            let (ax, ay) = res.to_pixel_coords(ax, ay);
            let (bx, by) = res.to_pixel_coords(bx, by);

            draw::line(frame, ax as i32, ay as i32, bx as i32, by as i32).color(Color::GREEN);
        }
        for pos in self.landmarks.positions() {
            let (x, y) = res.to_pixel_coords(pos[0], pos[1]);
            draw::marker(frame, x as i32, y as i32);
        }
    }
}
