//! Pure per-frame view-state transition.
//!
//! The playback driver owns the frame index and the clock; this module owns
//! what a frame *means*: which sample the track marker sits on, how much of
//! the curve has been traced, and what the HUD label reads. The state is a
//! plain value passed in and returned, so the transition stays a pure,
//! testable function — applying it to a drawing surface is the driver's job.

use crate::series::SampleSeries;

/// The visual elements of the two playback views, as a value.
///
/// - **marker**: track position of the moving point (its ordinate is fixed
///   at zero on the track)
/// - **traced**: how many samples of the displacement curve are visible
/// - **label**: the HUD time/displacement readout
///
/// A fresh state renders nothing; fold [`render_frame`] over it to play.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    marker: Option<f64>,
    traced: usize,
    label: Option<String>,
}

impl ViewState {
    /// Creates an empty view state: no marker, no curve, no label.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: None,
            traced: 0,
            label: None,
        }
    }

    /// Current marker displacement on the track, if a frame has placed one.
    #[inline]
    pub const fn marker(&self) -> Option<f64> {
        self.marker
    }

    /// Number of samples of the curve traced so far.
    #[inline]
    pub const fn traced(&self) -> usize {
        self.traced
    }

    /// The HUD label text, if a frame has set one.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The traced curve prefix as parallel `(times, displacements)` slices.
    ///
    /// The prefix length is clamped to the series length, so the slices are
    /// always in bounds even if the state was advanced past the end.
    #[inline]
    pub fn traced_points<'s>(&self, series: &'s SampleSeries) -> (&'s [f64], &'s [f64]) {
        let n = self.traced.min(series.len());
        (&series.times()[..n], &series.displacements()[..n])
    }
}

/// Advances a [`ViewState`] to frame `i`.
///
/// Per call:
///
/// 1. The traced curve becomes the prefix `times[0..i)` /
///    `displacements[0..i)`, clamped to the series length.
/// 2. When `i` is in range, the marker moves to `displacements[i]` and the
///    label is reformatted for `times[i]` / `displacements[i]`.
/// 3. When `i` is past the end — the driver may tick once past the final
///    frame — marker and label are left untouched and the full curve stays
///    traced. The call never panics, for any `i`.
///
/// The transition is idempotent: identical `(i, series, view)` inputs
/// produce identical results.
///
/// # Example
///
/// ```rust
/// use kinematica::{render_frame, MotionParams, SampleSeries, ViewState};
///
/// let series = SampleSeries::compute(&MotionParams::default());
/// let view = render_frame(10, &series, ViewState::new());
///
/// assert_eq!(view.marker(), Some(6.0));
/// assert_eq!(view.label(), Some("t = 1.0 s\nS = 6.0 m"));
/// ```
pub fn render_frame(i: usize, series: &SampleSeries, view: ViewState) -> ViewState {
    let mut view = view;
    view.traced = i.min(series.len());
    if let Some((t, s)) = series.get(i) {
        view.marker = Some(s);
        view.label = Some(format!("t = {t:.1} s\nS = {s:.1} m"));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MotionParams;

    fn reference() -> SampleSeries {
        SampleSeries::compute(&MotionParams::default())
    }

    #[test]
    fn test_fresh_state_renders_nothing() {
        let view = ViewState::new();
        assert_eq!(view.marker(), None);
        assert_eq!(view.traced(), 0);
        assert_eq!(view.label(), None);
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_first_frame_places_marker_at_origin() {
        let series = reference();
        let view = render_frame(0, &series, ViewState::new());
        assert_eq!(view.marker(), Some(0.0));
        assert_eq!(view.traced(), 0); // prefix [0..0) is empty
        assert_eq!(view.label(), Some("t = 0.0 s\nS = 0.0 m"));
    }

    #[test]
    fn test_reference_label_at_frame_ten() {
        let series = reference();
        let view = render_frame(10, &series, ViewState::new());
        assert_eq!(view.label(), Some("t = 1.0 s\nS = 6.0 m"));
        assert_eq!(view.marker(), Some(6.0));
        assert_eq!(view.traced(), 10);
    }

    #[test]
    fn test_final_frame_uses_last_valid_sample() {
        let series = reference();
        let n = series.len();
        let view = render_frame(n - 1, &series, ViewState::new());
        let (_, last) = series.get(n - 1).unwrap();
        assert_eq!(view.marker(), Some(last));
        assert_eq!(view.traced(), n - 1);
        assert!(view.label().is_some());
    }

    #[test]
    fn test_one_past_end_clamps_curve_and_keeps_marker() {
        let series = reference();
        let n = series.len();
        let at_end = render_frame(n - 1, &series, ViewState::new());
        let past = render_frame(n, &series, at_end.clone());

        // Marker and label frozen at the last valid sample
        assert_eq!(past.marker(), at_end.marker());
        assert_eq!(past.label(), at_end.label());
        // Full curve traced, in bounds
        assert_eq!(past.traced(), n);
        let (times, displacements) = past.traced_points(&series);
        assert_eq!(times.len(), n);
        assert_eq!(displacements.len(), n);
    }

    #[test]
    fn test_far_past_end_never_panics() {
        let series = reference();
        let view = render_frame(series.len() * 10, &series, ViewState::new());
        assert_eq!(view.traced(), series.len());
        assert_eq!(view.marker(), None); // nothing had placed a marker before
    }

    #[test]
    fn test_render_is_idempotent() {
        let series = reference();
        let base = render_frame(42, &series, ViewState::new());
        let once = render_frame(7, &series, base.clone());
        let twice = render_frame(7, &series, base);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_series_is_inert() {
        let params = MotionParams::new(5.0, 2.0, 1.0, 2.0).unwrap();
        let series = SampleSeries::compute(&params);
        let view = render_frame(0, &series, ViewState::new());
        assert_eq!(view.marker(), None);
        assert_eq!(view.label(), None);
        assert_eq!(view.traced_points(&series), (&[][..], &[][..]));
    }

    #[test]
    fn test_traced_points_match_prefix() {
        let series = reference();
        let view = render_frame(25, &series, ViewState::new());
        let (times, displacements) = view.traced_points(&series);
        assert_eq!(times, &series.times()[..25]);
        assert_eq!(displacements, &series.displacements()[..25]);
    }
}
