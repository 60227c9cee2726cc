//! Runtime configuration for trundle.
//!
//! The [`Config`] struct is the single source of truth for all runtime
//! options, independent of how they were specified. Resolution order:
//! built-in defaults (the reference run), then an optional TOML file, then
//! CLI flags / environment variables. Later layers win.
//!
//! File format:
//!
//! ```toml
//! [motion]
//! initial_velocity = 5.0   # m/s
//! acceleration = 2.0       # m/s²
//! duration = 10.0          # seconds
//! time_step = 0.1          # seconds
//!
//! [playback]
//! interval_ms = 50
//! loop = true
//! ```

use std::fs;
use std::time::Duration;

use anyhow::{ensure, Context};
use serde::Deserialize;

use crate::cli::Cli;

/// Resolved runtime configuration.
///
/// Always internally consistent once [`Config::resolve`] returns; the
/// motion parameters themselves are validated separately by
/// `kinematica::MotionParams::new` at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial velocity u, in m/s.
    pub initial_velocity: f64,
    /// Constant acceleration a, in m/s².
    pub acceleration: f64,
    /// Total simulated time, in seconds.
    pub duration: f64,
    /// Sampling time step, in seconds.
    pub time_step: f64,
    /// Milliseconds between animation frames.
    pub interval_ms: u64,
    /// Whether playback wraps back to frame 0 after the final frame.
    pub looping: bool,
    /// Whether to use the alternate screen buffer.
    pub alt_screen: bool,
    /// Whether color output is enabled.
    pub color: bool,
    /// Whether running in headless self-check mode.
    pub self_check: bool,
    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    /// The reference run: u = 5 m/s, a = 2 m/s², 10 s sampled at 100 ms,
    /// one frame every 50 ms, looping, colored, on the alternate screen.
    fn default() -> Self {
        Self {
            initial_velocity: 5.0,
            acceleration: 2.0,
            duration: 10.0,
            time_step: 0.1,
            interval_ms: 50,
            looping: true,
            alt_screen: true,
            color: true,
            self_check: false,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Resolves the effective configuration from defaults, the optional
    /// config file, and CLI flags, in that order.
    ///
    /// # Errors
    ///
    /// Fails if the config file cannot be read or parsed, or if the merged
    /// result is unusable (zero frame interval).
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let file: FileConfig = toml::from_str(&text)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            config.apply_file(&file);
        }

        config.apply_cli(cli);
        ensure!(config.interval_ms > 0, "interval-ms must be at least 1");
        Ok(config)
    }

    /// The playback tick interval.
    #[inline]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Default log directive for the configured verbosity, used when
    /// `RUST_LOG` is unset.
    pub const fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn apply_file(&mut self, file: &FileConfig) {
        if let Some(motion) = &file.motion {
            if let Some(u) = motion.initial_velocity {
                self.initial_velocity = u;
            }
            if let Some(a) = motion.acceleration {
                self.acceleration = a;
            }
            if let Some(t_max) = motion.duration {
                self.duration = t_max;
            }
            if let Some(dt) = motion.time_step {
                self.time_step = dt;
            }
        }
        if let Some(playback) = &file.playback {
            if let Some(interval_ms) = playback.interval_ms {
                self.interval_ms = interval_ms;
            }
            if let Some(looping) = playback.looping {
                self.looping = looping;
            }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(u) = cli.initial_velocity {
            self.initial_velocity = u;
        }
        if let Some(a) = cli.acceleration {
            self.acceleration = a;
        }
        if let Some(t_max) = cli.duration {
            self.duration = t_max;
        }
        if let Some(dt) = cli.time_step {
            self.time_step = dt;
        }
        if let Some(interval_ms) = cli.interval_ms {
            self.interval_ms = interval_ms;
        }
        if cli.once {
            self.looping = false;
        }
        if cli.no_alt_screen {
            self.alt_screen = false;
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.self_check {
            self.self_check = true;
        }
        self.verbosity = self.verbosity.max(cli.verbose);
    }
}

/// On-disk configuration schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    motion: Option<MotionSection>,
    playback: Option<PlaybackSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MotionSection {
    initial_velocity: Option<f64>,
    acceleration: Option<f64>,
    duration: Option<f64>,
    time_step: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlaybackSection {
    interval_ms: Option<u64>,
    #[serde(rename = "loop")]
    looping: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["trundle"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_defaults_are_the_reference_run() {
        let config = Config::resolve(&cli(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let config =
            Config::resolve(&cli(&["-u", "0", "-a", "-9.81", "--once", "--no-color"])).unwrap();
        assert_eq!(config.initial_velocity, 0.0);
        assert_eq!(config.acceleration, -9.81);
        assert!(!config.looping);
        assert!(!config.color);
        // Untouched fields keep their defaults
        assert_eq!(config.duration, 10.0);
        assert_eq!(config.interval_ms, 50);
    }

    #[test]
    fn test_file_layer_applies_between_defaults_and_cli() {
        let file: FileConfig = toml::from_str(
            "[motion]\nduration = 4.0\ntime_step = 0.5\n\n[playback]\ninterval_ms = 100\nloop = false\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_file(&file);
        assert_eq!(config.duration, 4.0);
        assert_eq!(config.time_step, 0.5);
        assert_eq!(config.interval_ms, 100);
        assert!(!config.looping);

        // CLI wins over the file
        config.apply_cli(&cli(&["-t", "2"]));
        assert_eq!(config.duration, 2.0);
        assert_eq!(config.time_step, 0.5);
    }

    #[test]
    fn test_partial_file_sections_are_accepted() {
        let file: FileConfig = toml::from_str("[motion]\nacceleration = 0.0\n").unwrap();
        let mut config = Config::default();
        config.apply_file(&file);
        assert_eq!(config.acceleration, 0.0);
        assert_eq!(config.initial_velocity, 5.0);
    }

    #[test]
    fn test_unknown_file_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[motion]\nvelocity = 1.0\n").is_err());
        assert!(toml::from_str::<FileConfig>("[misc]\nx = 1\n").is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = Config::resolve(&cli(&["--interval-ms", "0"])).unwrap_err();
        assert!(err.to_string().contains("interval-ms"));
    }

    #[test]
    fn test_log_directive_tracks_verbosity() {
        let mut config = Config::default();
        assert_eq!(config.log_directive(), "warn");
        config.verbosity = 1;
        assert_eq!(config.log_directive(), "info");
        config.verbosity = 5;
        assert_eq!(config.log_directive(), "trace");
    }
}
