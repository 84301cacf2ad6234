//! Baseline calibration for baseline-relative tracking.

use anyhow::bail;

use crate::detection::HandDetector;
use crate::landmark::Position;
use crate::tracking::Aggregation;
use crate::video::VideoSource;

/// Accumulates representative points over a fixed number of frames and
/// averages them into a baseline.
///
/// The average is always taken over the *configured frame count*: frames in
/// which no hand was detected still count towards the denominator and pull
/// the baseline towards zero.
#[derive(Debug, Clone)]
pub struct Calibrator {
    frame_count: u32,
    frames_seen: u32,
    detections: u32,
    sum: [f32; 3],
}

impl Calibrator {
    /// Creates a calibrator that runs for `frame_count` frames.
    ///
    /// # Panics
    ///
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: u32) -> Self {
        assert!(frame_count != 0, "calibration requires at least one frame");
        Self {
            frame_count,
            frames_seen: 0,
            detections: 0,
            sum: [0.0; 3],
        }
    }

    /// Records the outcome of one frame.
    ///
    /// `sample` is the frame's aggregated hand position, or `None` if no hand
    /// was detected in it. Calls after [`Calibrator::is_complete`] returns
    /// `true` are ignored.
    pub fn push(&mut self, sample: Option<Position>) {
        if self.is_complete() {
            return;
        }

        self.frames_seen += 1;
        if let Some([x, y, z]) = sample {
            self.detections += 1;
            self.sum[0] += x;
            self.sum[1] += y;
            self.sum[2] += z;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.frames_seen == self.frame_count
    }

    #[inline]
    pub fn frames_seen(&self) -> u32 {
        self.frames_seen
    }

    /// The number of calibration frames that contained a detected hand.
    #[inline]
    pub fn detections(&self) -> u32 {
        self.detections
    }

    /// Returns the averaged baseline.
    ///
    /// # Panics
    ///
    /// Panics if calibration has not run for the configured number of frames
    /// yet.
    pub fn baseline(&self) -> Position {
        assert!(
            self.is_complete(),
            "baseline requested after {} of {} calibration frames",
            self.frames_seen,
            self.frame_count
        );

        let n = self.frame_count as f32;
        [self.sum[0] / n, self.sum[1] / n, self.sum[2] / n]
    }
}

/// Runs the calibration phase against a video source and detector.
///
/// Captures `frame_count` frames, aggregates the first detected hand of each
/// frame under `aggregation`, and returns the averaged baseline. The source
/// is *not* released on success; the caller hands it to the main loop
/// afterwards. If the stream ends before calibration completes, the source is
/// released and an error is returned.
pub fn calibrate<S, D>(
    source: &mut S,
    detector: &mut D,
    aggregation: Aggregation,
    frame_count: u32,
) -> anyhow::Result<Position>
where
    S: VideoSource,
    D: HandDetector,
{
    let mut calibrator = Calibrator::new(frame_count);
    while !calibrator.is_complete() {
        let Some(frame) = source.read() else {
            source.release();
            bail!(
                "video stream ended after {} of {} calibration frames",
                calibrator.frames_seen(),
                frame_count
            );
        };

        let hands = detector.detect(&frame);
        calibrator.push(hands.first().map(|hand| aggregation.apply(hand)));
    }

    let baseline = calibrator.baseline();
    log::debug!(
        "calibrated over {} frames ({} with a detected hand): baseline [{:.4}, {:.4}, {:.4}]",
        calibrator.frames_seen(),
        calibrator.detections(),
        baseline[0],
        baseline[1],
        baseline[2],
    );
    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn constant_position_yields_exact_baseline() {
        let mut calibrator = Calibrator::new(50);
        for _ in 0..50 {
            calibrator.push(Some([0.5, 0.5, 0.0]));
        }
        assert!(calibrator.is_complete());
        assert_eq!(calibrator.baseline(), [0.5, 0.5, 0.0]);
    }

    #[test]
    fn undetected_frames_still_count_towards_the_denominator() {
        let mut calibrator = Calibrator::new(50);
        for i in 0..50 {
            calibrator.push((i % 2 == 0).then_some([1.0, 1.0, 0.0]));
        }

        // 25 detections averaged over all 50 frames.
        let baseline = calibrator.baseline();
        assert_relative_eq!(baseline[0], 0.5);
        assert_relative_eq!(baseline[1], 0.5);
        assert_eq!(calibrator.detections(), 25);
    }

    #[test]
    fn pushes_after_completion_are_ignored() {
        let mut calibrator = Calibrator::new(2);
        calibrator.push(Some([1.0, 0.0, 0.0]));
        calibrator.push(Some([1.0, 0.0, 0.0]));
        calibrator.push(Some([100.0, 100.0, 100.0]));
        assert_eq!(calibrator.frames_seen(), 2);
        assert_eq!(calibrator.baseline(), [1.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "baseline requested after")]
    fn incomplete_baseline_fails_fast() {
        let mut calibrator = Calibrator::new(10);
        calibrator.push(Some([0.5, 0.5, 0.0]));
        calibrator.baseline();
    }
}
