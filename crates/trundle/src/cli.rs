//! Command-line interface for trundle.
//!
//! Defines the CLI contract using clap derive macros. Every flag has an
//! environment-variable twin with the `TRUNDLE_` prefix, so scripted runs
//! can configure playback without touching the argument list.
//!
//! # Examples
//!
//! ```bash
//! # Play the reference run (u = 5 m/s, a = 2 m/s², 10 s at 100 ms steps)
//! trundle
//!
//! # A braking run, played once instead of looping
//! trundle -u 12 -a -3 --once
//!
//! # Parameters from a file, headless check for CI
//! trundle --config motion.toml --self-check
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Terminal playback of uniformly accelerated motion.
///
/// Computes S = ut + ½at² over a fixed time horizon and animates two
/// synchronized views: a point moving along a track, and the
/// time-vs-displacement curve traced frame by frame.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "trundle",
    author,
    version,
    about = "Animated uniformly-accelerated motion in your terminal",
    long_about = "Computes S = ut + ½at² over a fixed time horizon and renders two \
                  synchronized animated views: a simulated point moving along a track, and \
                  a time-vs-displacement curve traced frame by frame."
)]
pub struct Cli {
    /// Initial velocity u, in m/s
    #[arg(short = 'u', long, env = "TRUNDLE_INITIAL_VELOCITY", allow_hyphen_values = true)]
    pub initial_velocity: Option<f64>,

    /// Constant acceleration a, in m/s²
    #[arg(short = 'a', long, env = "TRUNDLE_ACCELERATION", allow_hyphen_values = true)]
    pub acceleration: Option<f64>,

    /// Total simulated time, in seconds
    #[arg(short = 't', long, env = "TRUNDLE_DURATION", allow_hyphen_values = true)]
    pub duration: Option<f64>,

    /// Sampling time step, in seconds
    #[arg(long, env = "TRUNDLE_TIME_STEP", allow_hyphen_values = true)]
    pub time_step: Option<f64>,

    /// Milliseconds between animation frames
    #[arg(long, env = "TRUNDLE_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Play a single pass and freeze on the final frame instead of looping
    #[arg(long, env = "TRUNDLE_ONCE")]
    pub once: bool,

    /// Run in the main terminal buffer instead of the alternate screen
    ///
    /// Useful for debugging; the final frame stays in the scrollback
    #[arg(long, env = "TRUNDLE_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Force color output off
    ///
    /// Respects the `NO_COLOR` convention
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Render representative frames headlessly and exit
    ///
    /// Touches no terminal state; useful for CI validation
    #[arg(long)]
    pub self_check: bool,

    /// Path to a TOML parameter file
    #[arg(long, short = 'c', env = "TRUNDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["trundle"]);
        assert_eq!(cli.initial_velocity, None);
        assert_eq!(cli.interval_ms, None);
        assert!(!cli.once);
        assert!(!cli.self_check);
    }

    #[test]
    fn test_cli_parses_negative_values() {
        let cli = Cli::parse_from(["trundle", "-u", "-5.5", "-a", "-9.81"]);
        assert_eq!(cli.initial_velocity, Some(-5.5));
        assert_eq!(cli.acceleration, Some(-9.81));
    }

    #[test]
    fn test_cli_parses_playback_flags() {
        let cli = Cli::parse_from(["trundle", "--once", "--interval-ms", "20", "-vv"]);
        assert!(cli.once);
        assert_eq!(cli.interval_ms, Some(20));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_verify_contract() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
