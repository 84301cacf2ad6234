use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;

use manus::calibration::calibrate;
use manus::detection::{HandDetector, ScriptedHands};
use manus::hand::{HandObservation, NUM_LANDMARKS};
use manus::image::Frame;
use manus::landmark::{Landmarks, Position};
use manus::pipeline::{Control, Pipeline};
use manus::resolution::Resolution;
use manus::tracking::{Aggregation, RelativeMotion};
use manus::video::VideoSource;

/// Video source that counts release calls.
struct CountingVideo {
    remaining: u32,
    releases: Rc<Cell<u32>>,
}

impl CountingVideo {
    fn new(frames: u32) -> (Self, Rc<Cell<u32>>) {
        let releases = Rc::new(Cell::new(0));
        (
            Self {
                remaining: frames,
                releases: releases.clone(),
            },
            releases,
        )
    }
}

impl VideoSource for CountingVideo {
    fn read(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Frame::new(Resolution::new(64, 48)))
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// Detector reporting one hand at a fixed position every frame.
struct ConstantHand(Position);

impl HandDetector for ConstantHand {
    fn detect(&mut self, _frame: &Frame) -> Vec<HandObservation> {
        vec![HandObservation::new(Landmarks::from_positions(
            std::iter::repeat(self.0).take(NUM_LANDMARKS),
        ))]
    }
}

/// Detector that never reports a hand.
struct NoHands;

impl HandDetector for NoHands {
    fn detect(&mut self, _frame: &Frame) -> Vec<HandObservation> {
        Vec::new()
    }
}

#[test]
fn quit_releases_the_source_exactly_once() {
    for quit_at in [1, 2, 7] {
        let (video, releases) = CountingVideo::new(100);
        let mut presented = 0;
        Pipeline::new(video, NoHands).run(
            |_frame, _hands| (),
            |_frame, ()| {
                presented += 1;
                if presented == quit_at {
                    Control::Quit
                } else {
                    Control::Continue
                }
            },
        );

        assert_eq!(presented, quit_at);
        assert_eq!(releases.get(), 1, "quit at iteration {quit_at}");
    }
}

#[test]
fn end_of_stream_releases_the_source_exactly_once() {
    let (video, releases) = CountingVideo::new(4);
    let mut presented = 0;
    Pipeline::new(video, NoHands).run(
        |_frame, _hands| (),
        |_frame, ()| {
            presented += 1;
            Control::Continue
        },
    );

    assert_eq!(presented, 4);
    assert_eq!(releases.get(), 1);
}

#[test]
fn final_update_still_releases_exactly_once() {
    let (video, releases) = CountingVideo::new(10);
    let mut updates = 0;
    let mut presented = 0;
    Pipeline::new(video, ConstantHand([0.5, 0.5, 0.0]))
        .final_update_on_exit(true)
        .run(
            |_frame, hands| {
                assert_eq!(hands.len(), 1);
                updates += 1;
            },
            |_frame, ()| {
                presented += 1;
                if presented == 3 {
                    Control::Quit
                } else {
                    Control::Continue
                }
            },
        );

    assert_eq!(updates, 4, "one extra update pass before release");
    assert_eq!(releases.get(), 1);
}

#[test]
fn no_motion_is_emitted_on_the_first_detected_frame() {
    let (video, _releases) = CountingVideo::new(3);
    let mut motion = RelativeMotion::new(3.0);
    let mut emitted = Vec::new();
    let mut frame_no = 0;

    Pipeline::new(video, ScriptedHands::circle(0.2, 0.3)).run(
        |frame, hands| {
            frame_no += 1;
            if let Some(hand) = hands.first() {
                let [x, y, _] = Aggregation::PalmCenter.apply(hand);
                let point = frame.resolution().to_pixel_coords(x, y);
                if let Some(delta) = motion.update(point) {
                    emitted.push((frame_no, delta));
                }
            }
        },
        |_frame, ()| Control::Continue,
    );

    assert_eq!(frame_no, 3);
    // Frame 1 only records the position; frames 2 and 3 emit displacements.
    assert_eq!(emitted.len(), 2);
    assert_eq!(emitted[0].0, 2);
}

#[test]
fn calibration_over_constant_position() {
    let (mut video, releases) = CountingVideo::new(60);
    let mut detector = ConstantHand([0.25, 0.75, -0.1]);

    let baseline = calibrate(&mut video, &mut detector, Aggregation::Mean, 50).unwrap();
    assert_relative_eq!(baseline[0], 0.25, epsilon = 1e-5);
    assert_relative_eq!(baseline[1], 0.75, epsilon = 1e-5);
    assert_relative_eq!(baseline[2], -0.1, epsilon = 1e-5);
    assert_eq!(releases.get(), 0, "source stays open for the main loop");

    // The remaining frames then flow through the main loop, which releases.
    Pipeline::new(video, detector).run(|_f, _h| (), |_f, ()| Control::Continue);
    assert_eq!(releases.get(), 1);
}

#[test]
fn calibration_on_short_stream_fails_and_releases() {
    let (mut video, releases) = CountingVideo::new(10);
    let mut detector = NoHands;

    let err = calibrate(&mut video, &mut detector, Aggregation::Mean, 50).unwrap_err();
    assert!(err.to_string().contains("10 of 50"));
    assert_eq!(releases.get(), 1);
}
