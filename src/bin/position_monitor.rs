//! Displays the hand position relative to a calibrated baseline.
//!
//! A short calibration phase averages the mean hand position over a fixed
//! number of frames. Afterwards, each frame's offset from that baseline is
//! scaled, drawn onto the annotated frame, shown as a live status line, and
//! appended to rolling per-axis sample windows rendered as sparklines.

use std::io::{self, Write};

use itertools::{Itertools, MinMaxResult};

use manus::calibration::calibrate;
use manus::detection::ScriptedHands;
use manus::image::{draw, Color};
use manus::landmark::Position;
use manus::pipeline::{Control, Pipeline};
use manus::resolution::Resolution;
use manus::timer::FpsCounter;
use manus::tracking::{Aggregation, BaselineRelative};
use manus::video::SyntheticVideo;
use manus::window::SampleWindow;

const CALIBRATION_FRAMES: u32 = 50;
const OFFSET_MULTIPLIER: f32 = 2.5;
const WINDOW_CAPACITY: usize = 50;
const FRAME_BUDGET: u32 = 400;

fn main() -> anyhow::Result<()> {
    manus::init_logger!();

    let mut video = SyntheticVideo::new(Resolution::RES_QHD, FRAME_BUDGET);
    let mut hands = ScriptedHands::circle(0.15, 0.04);
    let aggregation = Aggregation::Mean;

    let baseline = calibrate(&mut video, &mut hands, aggregation, CALIBRATION_FRAMES)?;
    println!(
        "calibration baseline: x={:.4} y={:.4} z={:.4}",
        baseline[0], baseline[1], baseline[2]
    );

    let mapper = BaselineRelative::new(baseline, OFFSET_MULTIPLIER);
    let mut windows = [
        SampleWindow::new(WINDOW_CAPACITY),
        SampleWindow::new(WINDOW_CAPACITY),
        SampleWindow::new(WINDOW_CAPACITY),
    ];
    let mut fps = FpsCounter::new("position monitor");

    Pipeline::new(video, hands)
        .final_update_on_exit(true)
        .run(
            |frame, hands| {
                for hand in hands {
                    hand.draw(frame);
                }
                let offset = hands
                    .first()
                    .map(|hand| mapper.offset(aggregation.apply(hand)));
                if let Some(offset) = offset {
                    let x = frame.width() as i32 / 2;
                    draw::text(frame, x, 4, &offset_label(offset))
                        .align_top()
                        .color(Color::WHITE);
                }
                offset
            },
            |_frame, offset: Option<Position>| {
                if let Some(offset) = offset {
                    for (window, value) in windows.iter_mut().zip(offset) {
                        window.push(value);
                    }
                    print!("\r{}", status_line(offset, &windows));
                    io::stdout().flush().ok();
                }
                fps.tick();
                Control::Continue
            },
        );
    println!();

    Ok(())
}

fn offset_label(offset: Position) -> String {
    format!(
        "x={:+.3} y={:+.3} z={:+.3}",
        offset[0], offset[1], offset[2]
    )
}

/// Renders the current offset plus one sparkline per axis.
fn status_line(offset: Position, windows: &[SampleWindow; 3]) -> String {
    format!(
        "{}  x[{}] y[{}] z[{}]",
        offset_label(offset),
        sparkline(&windows[0]),
        sparkline(&windows[1]),
        sparkline(&windows[2]),
    )
}

/// Renders the window's samples as a row of block glyphs, oldest first.
fn sparkline(window: &SampleWindow) -> String {
    const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let (min, max) = match window.iter().minmax() {
        MinMaxResult::NoElements => return String::new(),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let range = max - min;

    window
        .iter()
        .map(|value| {
            if range == 0.0 {
                GLYPHS[0]
            } else {
                let level = ((value - min) / range * (GLYPHS.len() - 1) as f32).round() as usize;
                GLYPHS[level.min(GLYPHS.len() - 1)]
            }
        })
        .collect()
}
