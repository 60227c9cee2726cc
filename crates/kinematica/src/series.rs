//! Precomputed time/displacement sample pair.

use crate::params::MotionParams;

/// The precomputed, immutable sample series for one motion run.
///
/// Two parallel ordered sequences of equal length `N = floor(duration /
/// time_step)`: `times[k] = k·dt` and `displacements[k] = u·t + ½·a·t²`.
/// The series is computed once, before playback begins, and only read
/// afterwards — one value is the ground truth for every frame.
///
/// Negative acceleration can make `displacements` non-monotonic. That is
/// accepted physics behavior, not an error.
///
/// # Example
///
/// ```rust
/// use kinematica::{MotionParams, SampleSeries};
///
/// let series = SampleSeries::compute(&MotionParams::default());
/// assert_eq!(series.len(), 100);
/// assert_eq!(series.times()[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    times: Vec<f64>,
    displacements: Vec<f64>,
}

impl SampleSeries {
    /// Evaluates the closed-form kinematics equation over the sample grid.
    ///
    /// Pure and deterministic: identical parameters produce an identical
    /// series. Runs in O(N) with no other side effects.
    pub fn compute(params: &MotionParams) -> Self {
        let n = params.sample_count();
        let dt = params.time_step();

        let mut times = Vec::with_capacity(n);
        let mut displacements = Vec::with_capacity(n);
        for k in 0..n {
            let t = k as f64 * dt;
            times.push(t);
            displacements.push(params.displacement_at(t));
        }

        Self {
            times,
            displacements,
        }
    }

    /// Number of samples in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series holds no samples (time step exceeds
    /// the duration).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The time samples, in seconds.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The displacement samples, in meters.
    #[inline]
    pub fn displacements(&self) -> &[f64] {
        &self.displacements
    }

    /// Returns the `(time, displacement)` pair at sample `k`, or `None`
    /// past the end of the series.
    #[inline]
    pub fn get(&self, k: usize) -> Option<(f64, f64)> {
        Some((*self.times.get(k)?, *self.displacements.get(k)?))
    }

    /// Largest displacement reached over the run, or `None` for an empty
    /// series. Drives the view ranges of both playback panels.
    pub fn max_displacement(&self) -> Option<f64> {
        self.displacements.iter().copied().reduce(f64::max)
    }
}
