#![forbid(unsafe_code)]

//! # Trundle
//!
//! Animated uniformly-accelerated motion in your terminal.
//!
//! ## Usage
//!
//! ```bash
//! trundle                      # the reference run: u=5 m/s, a=2 m/s²
//! trundle -u 12 -a -3 --once   # a braking run, single pass
//! trundle --config motion.toml # parameters from a file
//! trundle --self-check         # headless render probe for CI
//! ```

use anyhow::Context;
use clap::Parser;
use kinematica::{MotionParams, SampleSeries};
use tracing_subscriber::EnvFilter;
use trundle::app::App;
use trundle::cli::Cli;
use trundle::config::Config;
use trundle::program::Program;
use trundle::self_check;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("failed to resolve configuration")?;
    init_logging(&config)?;

    let params = MotionParams::new(
        config.initial_velocity,
        config.acceleration,
        config.duration,
        config.time_step,
    )
    .context("invalid motion parameters")?;

    let series = SampleSeries::compute(&params);
    tracing::info!(
        samples = series.len(),
        interval_ms = config.interval_ms,
        looping = config.looping,
        "sample series computed"
    );

    if config.self_check {
        return self_check::run(&params, &series, &config);
    }

    let app = App::new(params, series, &config);
    let program = if config.alt_screen {
        Program::new(app).with_alt_screen()
    } else {
        Program::new(app).without_alt_screen()
    };
    program.run().context("playback failed")?;
    Ok(())
}

/// Installs the tracing subscriber.
///
/// In self-check mode logs go to stderr; during playback they go to a log
/// file (only when verbosity was requested) so output never corrupts the
/// terminal display. `RUST_LOG` overrides the verbosity-derived filter.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    if config.self_check {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else if config.verbosity > 0 {
        let file = std::fs::File::create("trundle.log")
            .context("failed to create trundle.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    }
    Ok(())
}
