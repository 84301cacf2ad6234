//! Hand-landmark driven tracking pipelines.
//!
//! This crate contains the shared plumbing for two small demo pipelines:
//!
//! - `mouse_control`: the position of a single hand landmark is turned into
//!   relative pointer motion.
//! - `position_monitor`: the averaged hand position is compared against a
//!   baseline established during a short calibration phase, and the scaled
//!   offset is displayed along with a rolling window of recent samples.
//!
//! # Coordinates
//!
//! Landmark positions use normalized image coordinates: X and Y are in
//! `[0, 1]` with Y pointing *down* (image convention), Z is a relative depth
//! estimate with no fixed unit. [`Resolution::to_pixel_coords`] converts the
//! X/Y part into pixel coordinates.
//!
//! # External collaborators
//!
//! Camera capture and landmark inference are not implemented here. They enter
//! the pipeline through the [`video::VideoSource`] and
//! [`detection::HandDetector`] traits; deterministic synthetic implementations
//! of both are provided so the demo binaries and tests run without a camera
//! or a model file.
//!
//! [`Resolution::to_pixel_coords`]: resolution::Resolution::to_pixel_coords

use log::LevelFilter;

pub mod calibration;
pub mod detection;
pub mod hand;
pub mod image;
pub mod landmark;
pub mod pipeline;
pub mod pointer;
pub mod resolution;
pub mod timer;
pub mod tracking;
pub mod video;
pub mod window;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; the
/// `RUST_LOG` environment variable can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
