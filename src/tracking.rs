//! Reduction of hand observations to a representative point, and mapping of
//! position deltas to output actions.

use crate::hand::{HandObservation, LandmarkIdx};
use crate::landmark::Position;

/// Policy for reducing a [`HandObservation`] to a single representative point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregation {
    /// The arithmetic mean of all landmark positions.
    Mean,
    /// The position of a single named landmark.
    Single(LandmarkIdx),
    /// The average of the landmarks surrounding the palm.
    PalmCenter,
}

impl Aggregation {
    /// Computes the representative point of `observation` under this policy.
    pub fn apply(&self, observation: &HandObservation) -> Position {
        match self {
            Aggregation::Mean => observation.landmarks().average_position(),
            Aggregation::Single(idx) => observation.position(*idx),
            Aggregation::PalmCenter => observation.palm_center(),
        }
    }
}

/// Maps frame-to-frame position deltas to relative pointer displacements.
///
/// The previous position is threaded through this value explicitly: until the
/// first observation has been recorded, [`RelativeMotion::update`] records the
/// position and emits nothing.
#[derive(Debug, Clone)]
pub struct RelativeMotion {
    prev: Option<(f32, f32)>,
    multiplier: f32,
}

impl RelativeMotion {
    /// Creates a mapper that scales every delta by `multiplier`.
    pub fn new(multiplier: f32) -> Self {
        Self {
            prev: None,
            multiplier,
        }
    }

    /// Feeds the current representative point, in pixel coordinates.
    ///
    /// Returns the scaled displacement relative to the previous point, or
    /// `None` if this is the first point observed. The current point always
    /// replaces the previous one.
    pub fn update(&mut self, current: (f32, f32)) -> Option<(f32, f32)> {
        let delta = self.prev.map(|(px, py)| {
            (
                (current.0 - px) * self.multiplier,
                (current.1 - py) * self.multiplier,
            )
        });
        self.prev = Some(current);
        delta
    }

    /// Forgets the previously recorded position.
    pub fn reset(&mut self) {
        self.prev = None;
    }
}

/// Maps positions to scaled offsets from a fixed calibration baseline.
#[derive(Debug, Clone, Copy)]
pub struct BaselineRelative {
    baseline: Position,
    multiplier: f32,
}

impl BaselineRelative {
    /// Creates a mapper around the given baseline.
    pub fn new(baseline: Position, multiplier: f32) -> Self {
        Self {
            baseline,
            multiplier,
        }
    }

    #[inline]
    pub fn baseline(&self) -> Position {
        self.baseline
    }

    /// Computes the per-axis scaled offset of `position` from the baseline.
    pub fn offset(&self, position: Position) -> Position {
        [
            (position[0] - self.baseline[0]) * self.multiplier,
            (position[1] - self.baseline[1]) * self.multiplier,
            (position[2] - self.baseline[2]) * self.multiplier,
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::landmark::Landmarks;

    use super::*;

    fn observation(positions: impl IntoIterator<Item = Position>) -> HandObservation {
        HandObservation::new(Landmarks::from_positions(positions))
    }

    #[test]
    fn no_motion_on_first_observation() {
        let mut motion = RelativeMotion::new(3.0);
        assert_eq!(motion.update((100.0, 100.0)), None);
    }

    #[test]
    fn scaled_delta() {
        let mut motion = RelativeMotion::new(3.0);
        motion.update((100.0, 100.0));
        assert_eq!(motion.update((110.0, 95.0)), Some((30.0, -15.0)));
    }

    #[test]
    fn previous_point_always_overwritten() {
        let mut motion = RelativeMotion::new(1.0);
        motion.update((0.0, 0.0));
        motion.update((10.0, 10.0));
        assert_eq!(motion.update((10.0, 10.0)), Some((0.0, 0.0)));
    }

    #[test]
    fn reset_suppresses_next_delta() {
        let mut motion = RelativeMotion::new(2.0);
        motion.update((5.0, 5.0));
        motion.reset();
        assert_eq!(motion.update((50.0, 50.0)), None);
        assert_eq!(motion.update((51.0, 50.0)), Some((2.0, 0.0)));
    }

    #[test]
    fn baseline_offset_is_scaled_per_axis() {
        let mapper = BaselineRelative::new([0.5, 0.5, 0.0], 2.5);
        let offset = mapper.offset([0.7, 0.4, -0.2]);
        assert_relative_eq!(offset[0], 0.5);
        assert_relative_eq!(offset[1], -0.25);
        assert_relative_eq!(offset[2], -0.5);
    }

    #[test]
    fn aggregation_single_picks_named_landmark() {
        let mut positions = vec![[0.0, 0.0, 0.0]; crate::hand::NUM_LANDMARKS];
        positions[LandmarkIdx::IndexFingerTip as usize] = [0.9, 0.1, 0.0];
        let obs = observation(positions);

        let point = Aggregation::Single(LandmarkIdx::IndexFingerTip).apply(&obs);
        assert_eq!(point, [0.9, 0.1, 0.0]);
    }

    #[test]
    fn aggregation_mean_matches_average() {
        let positions = (0..crate::hand::NUM_LANDMARKS)
            .map(|i| [i as f32 / 21.0, 0.5, 0.0])
            .collect::<Vec<_>>();
        let obs = observation(positions);

        assert_eq!(
            Aggregation::Mean.apply(&obs),
            obs.landmarks().average_position()
        );
    }
}
