//! Validated motion parameters and closed-form evaluation.

use crate::error::{Error, Result};

/// Parameters of a uniformly accelerated motion run.
///
/// A `MotionParams` value is immutable and always valid: construction via
/// [`MotionParams::new`] rejects non-finite inputs and non-positive
/// `duration`/`time_step`, so downstream sampling never has to re-check.
///
/// # Example
///
/// ```rust
/// use kinematica::MotionParams;
///
/// let params = MotionParams::new(5.0, 2.0, 10.0, 0.1)?;
/// assert_eq!(params.displacement_at(1.0), 6.0);
/// assert_eq!(params.velocity_at(1.0), 7.0);
/// # Ok::<(), kinematica::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    initial_velocity: f64,
    acceleration: f64,
    duration: f64,
    time_step: f64,
}

impl MotionParams {
    /// Creates validated motion parameters.
    ///
    /// # Arguments
    ///
    /// * `initial_velocity` - Velocity at t = 0, in m/s (any finite value)
    /// * `acceleration` - Constant acceleration, in m/s² (any finite value)
    /// * `duration` - Total simulated time, in seconds (> 0)
    /// * `time_step` - Sampling interval, in seconds (> 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] if any argument is NaN or infinite, and
    /// [`Error::NonPositive`] if `duration` or `time_step` is not strictly
    /// positive.
    pub fn new(
        initial_velocity: f64,
        acceleration: f64,
        duration: f64,
        time_step: f64,
    ) -> Result<Self> {
        let named = [
            ("initial_velocity", initial_velocity),
            ("acceleration", acceleration),
            ("duration", duration),
            ("time_step", time_step),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(Error::NonFinite { name, value });
            }
        }
        if duration <= 0.0 {
            return Err(Error::NonPositive {
                name: "duration",
                value: duration,
            });
        }
        if time_step <= 0.0 {
            return Err(Error::NonPositive {
                name: "time_step",
                value: time_step,
            });
        }

        Ok(Self {
            initial_velocity,
            acceleration,
            duration,
            time_step,
        })
    }

    /// Returns the initial velocity u, in m/s.
    #[inline]
    pub const fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Returns the constant acceleration a, in m/s².
    #[inline]
    pub const fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Returns the total simulated duration, in seconds.
    #[inline]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the sampling time step, in seconds.
    #[inline]
    pub const fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Displacement from the start position at time `t`, per S = ut + ½at².
    #[inline]
    pub fn displacement_at(&self, t: f64) -> f64 {
        self.initial_velocity * t + 0.5 * self.acceleration * t * t
    }

    /// Instantaneous velocity at time `t`, per v = u + at.
    #[inline]
    pub fn velocity_at(&self, t: f64) -> f64 {
        self.initial_velocity + self.acceleration * t
    }

    /// Number of samples over the duration: `floor(duration / time_step)`.
    ///
    /// Sample times form the half-open range `0, dt, 2·dt, ..` strictly
    /// below `duration`.
    #[inline]
    pub fn sample_count(&self) -> usize {
        (self.duration / self.time_step).floor() as usize
    }
}

impl Default for MotionParams {
    /// Reference parameters: u = 5 m/s, a = 2 m/s², 10 s sampled at 100 ms.
    fn default() -> Self {
        Self {
            initial_velocity: 5.0,
            acceleration: 2.0,
            duration: 10.0,
            time_step: 0.1,
        }
    }
}
