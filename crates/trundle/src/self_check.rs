//! Headless self-check: render representative frames without a terminal.
//!
//! Probes the frames that exercise every boundary of the frame transition
//! (first, middle, last, one-past-end) and verifies the rendered screens
//! carry the expected elements. Used by CI; touches no terminal state.

use anyhow::ensure;
use kinematica::{render_frame, MotionParams, SampleSeries, ViewState};

use crate::config::Config;
use crate::views;

/// Fixed layout for headless rendering.
const PROBE_SIZE: (u16, u16) = (80, 24);

/// Runs the self-check against an already-computed series and prints a
/// short report to stdout.
///
/// # Errors
///
/// Fails if any probe frame renders without the elements it must carry
/// (marker, HUD label, full traced curve at the end).
pub fn run(params: &MotionParams, series: &SampleSeries, config: &Config) -> anyhow::Result<()> {
    let n = series.len();
    println!("trundle self-check");
    println!(
        "  parameters: u={} m/s a={} m/s² duration={} s dt={} s",
        params.initial_velocity(),
        params.acceleration(),
        params.duration(),
        params.time_step()
    );
    println!("  samples: {n}");
    println!("  interval: {} ms", config.interval_ms);

    for i in probe_frames(n) {
        let view = render_frame(i, series, ViewState::new());
        let screen = views::render_screen(
            params,
            series,
            &view,
            &format!("probe frame {i}"),
            PROBE_SIZE,
            false,
        );
        ensure!(!screen.is_empty(), "frame {i} rendered an empty screen");

        if i < n {
            ensure!(view.marker().is_some(), "frame {i} is missing its marker");
            ensure!(
                screen.contains("t = "),
                "frame {i} is missing the HUD label"
            );
        } else {
            ensure!(
                view.traced() == n,
                "frame {i} should trace the full curve, traced {}",
                view.traced()
            );
        }
        println!("  probe frame {i}: ok ({} lines)", screen.lines().count());
    }

    println!("self-check passed");
    Ok(())
}

/// First, middle, last, and one-past-end, deduplicated for short runs.
fn probe_frames(n: usize) -> Vec<usize> {
    if n == 0 {
        return vec![0];
    }
    let mut probes = vec![0, n / 2, n - 1, n];
    probes.dedup();
    probes
}
