//! Terminal rendering of the two playback panels.
//!
//! The screen mirrors the reference presentation: a "real-world" track on
//! top with a red marker at the current displacement, and below it the
//! time-vs-displacement chart with a blue traced curve and the HUD label in
//! its upper-left corner. Both view ranges derive from the run's maximum
//! displacement scaled by 1.1; samples outside the visible range are
//! clipped rather than rescaled.

use crossterm::style::Stylize;
use kinematica::{MotionParams, SampleSeries, ViewState};
use unicode_width::UnicodeWidthStr;

/// Narrowest total width the panels are laid out for.
const MIN_WIDTH: usize = 40;
/// Columns beyond this stay blank on very wide terminals.
const MAX_WIDTH: usize = 120;
/// Width of the y-label gutter left of each panel's plot area.
const GUTTER: usize = 8;
/// Chart plot height bounds, in rows.
const MIN_CHART_HEIGHT: usize = 4;
const MAX_CHART_HEIGHT: usize = 10;
/// Grid ticks along the track rail.
const TRACK_TICKS: usize = 5;

/// Track marker glyph (the reference plots a red circle).
const MARKER: char = '●';
/// Curve glyph (the reference plots a blue line).
const CURVE_DOT: char = '•';

/// Renders the full screen: track panel, chart panel, status line.
pub fn render_screen(
    params: &MotionParams,
    series: &SampleSeries,
    view: &ViewState,
    status: &str,
    size: (u16, u16),
    color: bool,
) -> String {
    let total = (size.0 as usize).clamp(MIN_WIDTH, MAX_WIDTH);
    let plot_width = total - GUTTER - 1;
    let chart_height =
        (size.1 as usize).saturating_sub(14).clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT);
    let span = axis_span(series);
    let theme = Theme { color };

    let mut lines = Vec::new();
    lines.extend(track_panel(params, view, span, plot_width, total, &theme));
    lines.push(String::new());
    lines.extend(chart_panel(
        params,
        series,
        view,
        span,
        plot_width,
        chart_height,
        &theme,
    ));
    lines.push(String::new());
    lines.push(theme.dim(status.to_string()));
    lines.join("\n")
}

/// Shared view range for both panels.
///
/// Matches the reference: the range tops out at `max(S) * 1.1`, even when a
/// decelerating run later leaves it. A run that never goes positive gets a
/// unit span so the panels stay drawable.
fn axis_span(series: &SampleSeries) -> f64 {
    match series.max_displacement() {
        Some(max) if max > 0.0 => max * 1.1,
        _ => 1.0,
    }
}

/// Maps a value in `[0, span]` to a column, or `None` when it is outside
/// the visible range.
fn column_for(value: f64, span: f64, width: usize) -> Option<usize> {
    if !(0.0..=span).contains(&value) {
        return None;
    }
    Some((value / span * (width - 1) as f64).round() as usize)
}

/// Maps a displacement in `[0, span]` to a plot row (row 0 at the top), or
/// `None` when it is outside the visible range.
fn row_for(s: f64, span: f64, height: usize) -> Option<usize> {
    if !(0.0..=span).contains(&s) {
        return None;
    }
    Some(((1.0 - s / span) * (height - 1) as f64).round() as usize)
}

fn track_panel(
    params: &MotionParams,
    view: &ViewState,
    span: f64,
    width: usize,
    total: usize,
    theme: &Theme,
) -> Vec<String> {
    let title = format!(
        "Real-World Motion: u={} m/s, a={} m/s²",
        params.initial_velocity(),
        params.acceleration()
    );

    let mut marker_row = vec![' '; width];
    if let Some(col) = view.marker().and_then(|s| column_for(s, span, width)) {
        marker_row[col] = MARKER;
    }

    let mut rail = vec!['─'; width];
    for k in 1..TRACK_TICKS {
        rail[k * (width - 1) / TRACK_TICKS] = '┬';
    }
    rail[0] = '├';
    rail[width - 1] = '┤';

    let mut axis_row = vec![' '; width];
    let max_label = format!("{span:.1}");
    overlay(
        &mut axis_row,
        width.saturating_sub(max_label.chars().count()),
        &max_label,
    );
    overlay(&mut axis_row, 0, "0");

    let gutter = " ".repeat(GUTTER + 1);
    vec![
        theme.heading(center(&title, total)),
        theme.paint_marker(format!("{gutter}{}", String::from_iter(marker_row))),
        format!("{gutter}{}", String::from_iter(rail)),
        format!("{gutter}{}", String::from_iter(axis_row)),
        center("Distance (meters)", total),
    ]
}

fn chart_panel(
    params: &MotionParams,
    series: &SampleSeries,
    view: &ViewState,
    span: f64,
    width: usize,
    height: usize,
    theme: &Theme,
) -> Vec<String> {
    let mut grid = vec![vec![' '; width]; height];

    let (times, displacements) = view.traced_points(series);
    for (&t, &s) in times.iter().zip(displacements) {
        let (Some(col), Some(row)) = (
            column_for(t, params.duration(), width),
            row_for(s, span, height),
        ) else {
            continue;
        };
        grid[row][col] = CURVE_DOT;
    }

    // HUD label overlays the upper-left corner, as in the reference plot
    if let Some(label) = view.label() {
        for (r, line) in label.lines().enumerate().take(grid.len()) {
            overlay(&mut grid[r], 1, line);
        }
    }

    let total = GUTTER + 1 + width;
    let mut lines = vec![
        theme.heading(center("The Math: S = ut + ½at²", total)),
        "Displacement (S)".to_string(),
    ];

    for (r, row) in grid.iter().enumerate() {
        let (y_label, border) = if r == 0 {
            (y_axis_label(span), '┤')
        } else if r == height - 1 {
            (y_axis_label(0.0), '┤')
        } else {
            (" ".repeat(GUTTER), '│')
        };
        let body: String = row.iter().collect();
        lines.push(theme.paint_curve(format!("{y_label}{border}{body}")));
    }

    lines.push(format!("{}└{}", " ".repeat(GUTTER), "─".repeat(width)));

    let mut x_labels = vec![' '; width];
    let caption = "Time (s)";
    overlay(
        &mut x_labels,
        width.saturating_sub(caption.len()) / 2,
        caption,
    );
    let t_label = format!("{}", params.duration());
    overlay(
        &mut x_labels,
        width.saturating_sub(t_label.chars().count()),
        &t_label,
    );
    overlay(&mut x_labels, 0, "0");
    lines.push(format!(
        "{} {}",
        " ".repeat(GUTTER),
        String::from_iter(x_labels)
    ));

    lines
}

/// Right-aligns a displacement value into the chart gutter.
fn y_axis_label(value: f64) -> String {
    format!("{value:>width$.1}", width = GUTTER)
}

/// Writes `text` into `row` starting at `col`, clipping at the row end.
fn overlay(row: &mut [char], col: usize, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        let Some(cell) = row.get_mut(col + i) else {
            break;
        };
        *cell = ch;
    }
}

/// Centers `text` within `total` display columns.
fn center(text: &str, total: usize) -> String {
    let pad = total.saturating_sub(UnicodeWidthStr::width(text)) / 2;
    format!("{}{text}", " ".repeat(pad))
}

/// Styling toggle: paints the reference colors (red marker, blue curve)
/// unless color output is disabled.
struct Theme {
    color: bool,
}

impl Theme {
    fn heading(&self, line: String) -> String {
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }

    fn dim(&self, line: String) -> String {
        if self.color {
            line.dim().to_string()
        } else {
            line
        }
    }

    fn paint_marker(&self, line: String) -> String {
        if self.color && line.contains(MARKER) {
            line.replace(MARKER, &MARKER.red().to_string())
        } else {
            line
        }
    }

    fn paint_curve(&self, line: String) -> String {
        if self.color && line.contains(CURVE_DOT) {
            line.replace(CURVE_DOT, &CURVE_DOT.blue().to_string())
        } else {
            line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinematica::{render_frame, ViewState};
    use proptest::prelude::*;

    const SIZE: (u16, u16) = (80, 24);

    fn reference() -> (MotionParams, SampleSeries) {
        let params = MotionParams::default();
        let series = SampleSeries::compute(&params);
        (params, series)
    }

    fn screen_at(frame: usize, color: bool) -> String {
        let (params, series) = reference();
        let view = render_frame(frame, &series, ViewState::new());
        render_screen(&params, &series, &view, "status line", SIZE, color)
    }

    #[test]
    fn test_screen_carries_both_panel_titles() {
        let screen = screen_at(10, false);
        assert!(screen.contains("Real-World Motion: u=5 m/s, a=2 m/s²"));
        assert!(screen.contains("The Math: S = ut + ½at²"));
        assert!(screen.contains("Distance (meters)"));
        assert!(screen.contains("Displacement (S)"));
        assert!(screen.contains("Time (s)"));
        assert!(screen.contains("status line"));
    }

    #[test]
    fn test_hud_label_lands_in_the_chart() {
        let screen = screen_at(10, false);
        assert!(screen.contains("t = 1.0 s"));
        assert!(screen.contains("S = 6.0 m"));
    }

    #[test]
    fn test_marker_starts_at_the_left_edge_of_the_track() {
        let screen = screen_at(0, false);
        let marker_line = screen
            .lines()
            .find(|line| line.contains(MARKER))
            .expect("marker row missing");
        assert_eq!(marker_line.chars().position(|c| c == MARKER), Some(GUTTER + 1));
    }

    #[test]
    fn test_marker_moves_right_as_displacement_grows() {
        let at = |frame| {
            screen_at(frame, false)
                .lines()
                .find_map(|line| line.chars().position(|c| c == MARKER))
                .expect("marker row missing")
        };
        let early = at(10);
        let late = at(99);
        assert!(late > early);
    }

    #[test]
    fn test_negative_displacement_is_clipped_from_the_track() {
        let params = MotionParams::new(-3.0, 0.0, 2.0, 0.1).unwrap();
        let series = SampleSeries::compute(&params);
        let view = render_frame(5, &series, ViewState::new());
        let screen = render_screen(&params, &series, &view, "", SIZE, false);
        assert!(!screen.contains(MARKER));
    }

    #[test]
    fn test_curve_is_traced_only_up_to_the_current_frame() {
        let fresh = screen_at(0, false);
        assert!(!fresh.contains(CURVE_DOT)); // prefix [0..0) traces nothing

        let later = screen_at(60, false);
        assert!(later.contains(CURVE_DOT));
    }

    #[test]
    fn test_color_toggle_controls_escape_sequences() {
        assert!(!screen_at(10, false).contains('\u{1b}'));
        assert!(screen_at(10, true).contains("\u{1b}["));
    }

    #[test]
    fn test_axis_span_falls_back_for_non_positive_runs() {
        let params = MotionParams::new(-3.0, 0.0, 2.0, 0.1).unwrap();
        let series = SampleSeries::compute(&params);
        assert_eq!(axis_span(&series), 1.0);

        let (_, reference_series) = reference();
        let expected = reference_series.max_displacement().unwrap() * 1.1;
        assert!((axis_span(&reference_series) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_terminal_still_renders() {
        let (params, series) = reference();
        let view = render_frame(50, &series, ViewState::new());
        let screen = render_screen(&params, &series, &view, "status", (0, 0), false);
        assert!(!screen.is_empty());
        for line in screen.lines() {
            assert!(line.chars().count() <= MIN_WIDTH + GUTTER + 2);
        }
    }

    proptest! {
        #[test]
        fn column_mapping_stays_in_bounds(
            value in -1e3f64..1e3,
            span in 0.1f64..1e3,
            width in 1usize..200,
        ) {
            if let Some(col) = column_for(value, span, width) {
                prop_assert!(col < width);
            }
        }

        #[test]
        fn row_mapping_stays_in_bounds(
            s in -1e3f64..1e3,
            span in 0.1f64..1e3,
            height in 1usize..50,
        ) {
            if let Some(row) = row_for(s, span, height) {
                prop_assert!(row < height);
            }
        }

        #[test]
        fn render_screen_never_panics(
            frame in 0usize..300,
            cols in 0u16..200,
            rows in 0u16..60,
        ) {
            let (params, series) = reference();
            let view = render_frame(frame, &series, ViewState::new());
            let screen = render_screen(&params, &series, &view, "status", (cols, rows), false);
            prop_assert!(!screen.is_empty());
        }
    }
}
