#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

//! # Kinematica
//!
//! Closed-form kinematics for one-dimensional uniformly accelerated motion.
//!
//! Kinematica provides:
//! - **MotionParams**: validated motion parameters (initial velocity,
//!   acceleration, duration, time step)
//! - **SampleSeries**: the precomputed time/displacement sample pair,
//!   evaluated pointwise via S = ut + ½at²
//! - **render_frame**: a pure per-frame transition over a [`ViewState`],
//!   ready to be driven by any fixed-cadence playback loop
//!
//! ## Sampling Example
//!
//! ```rust
//! use kinematica::{MotionParams, SampleSeries};
//!
//! // u = 5 m/s, a = 2 m/s², 10 seconds sampled every 100 ms
//! let params = MotionParams::new(5.0, 2.0, 10.0, 0.1)?;
//! let series = SampleSeries::compute(&params);
//!
//! assert_eq!(series.len(), 100);
//! let (t, s) = series.get(10).unwrap();
//! assert_eq!(t, 1.0);
//! assert_eq!(s, 6.0); // 5·1 + ½·2·1²
//! # Ok::<(), kinematica::Error>(())
//! ```
//!
//! ## Playback Example
//!
//! ```rust
//! use kinematica::{render_frame, MotionParams, SampleSeries, ViewState};
//!
//! let params = MotionParams::default();
//! let series = SampleSeries::compute(&params);
//! let mut view = ViewState::new();
//!
//! // One call per tick; the driver owns the frame index.
//! for i in 0..series.len() {
//!     view = render_frame(i, &series, view);
//! }
//!
//! assert_eq!(view.traced(), series.len() - 1);
//! assert!(view.marker().is_some());
//! ```
//!
//! The crate performs no I/O and holds no timers; drawing the state and
//! advancing the frame index belong to the caller.

mod error;
mod frame;
mod params;
mod series;

pub use error::{Error, Result};
pub use frame::{render_frame, ViewState};
pub use params::MotionParams;
pub use series::SampleSeries;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::frame::{render_frame, ViewState};
    pub use crate::params::MotionParams;
    pub use crate::series::SampleSeries;
}
