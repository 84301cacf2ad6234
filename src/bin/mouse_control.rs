//! Moves the OS pointer relative to the motion of the index finger tip.
//!
//! Each frame, the index finger tip's position is converted to pixel
//! coordinates and the delta to the previous frame is emitted as relative
//! pointer motion, scaled by a fixed multiplier. The first frame with a
//! detected hand only records the position.

use manus::detection::ScriptedHands;
use manus::hand::LandmarkIdx;
use manus::pipeline::{Control, Pipeline};
use manus::pointer::{EnigoPointer, Pointer};
use manus::resolution::Resolution;
use manus::timer::FpsCounter;
use manus::tracking::{Aggregation, RelativeMotion};
use manus::video::SyntheticVideo;

const MOTION_MULTIPLIER: f32 = 3.0;
const FRAME_BUDGET: u32 = 300;

fn main() -> anyhow::Result<()> {
    manus::init_logger!();

    let video = SyntheticVideo::new(Resolution::new(640, 480), FRAME_BUDGET);
    let hands = ScriptedHands::circle(0.2, 0.05);

    let aggregation = Aggregation::Single(LandmarkIdx::IndexFingerTip);
    let mut motion = RelativeMotion::new(MOTION_MULTIPLIER);
    let mut pointer = EnigoPointer::new();
    let mut fps = FpsCounter::new("mouse control");

    Pipeline::new(video, hands).run(
        |frame, hands| {
            for hand in hands {
                hand.draw(frame);
            }
            if let Some(hand) = hands.first() {
                let [x, y, _] = aggregation.apply(hand);
                let point = frame.resolution().to_pixel_coords(x, y);
                if let Some((dx, dy)) = motion.update(point) {
                    pointer.move_relative(dx, dy);
                }
            }
        },
        |_frame, ()| {
            fps.tick();
            Control::Continue
        },
    );

    Ok(())
}
