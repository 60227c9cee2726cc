//! The playback model: frame advancement, loop semantics, and quit keys.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kinematica::{render_frame, MotionParams, SampleSeries, ViewState};

use crate::config::Config;
use crate::program::{Cmd, Model, Msg};
use crate::views;

/// Terminal size assumed until the first resize event arrives.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// The playback application.
///
/// Owns the frame index and folds the pure frame transition over the view
/// state once per tick. The sample series itself is immutable for the whole
/// run; only the index, the view state, and the terminal size change.
pub struct App {
    params: MotionParams,
    series: SampleSeries,
    view: ViewState,
    frame: usize,
    interval: Duration,
    looping: bool,
    finished: bool,
    color: bool,
    size: (u16, u16),
}

impl App {
    /// Creates the app with frame 0 already rendered, so the first draw
    /// shows the marker at the start of the track.
    pub fn new(params: MotionParams, series: SampleSeries, config: &Config) -> Self {
        let view = render_frame(0, &series, ViewState::new());
        Self {
            params,
            series,
            view,
            frame: 0,
            interval: config.interval(),
            looping: config.looping,
            finished: false,
            color: config.color,
            size: DEFAULT_SIZE,
        }
    }

    /// Current frame index.
    pub const fn frame(&self) -> usize {
        self.frame
    }

    /// Whether a single-pass run has reached its final frame.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances to the next frame.
    ///
    /// Indices run 0..N-1 and then either wrap back to 0 (looping, the
    /// default) or take one final step to N — the full-curve frame — and
    /// freeze there.
    fn advance(&mut self) {
        if self.finished {
            return;
        }

        let n = self.series.len();
        let next = self.frame + 1;
        if next < n {
            self.frame = next;
        } else if self.looping {
            tracing::debug!(samples = n, "loop restart");
            self.frame = 0;
        } else {
            self.frame = n;
            self.finished = true;
            tracing::debug!(samples = n, "single pass finished");
        }

        self.view = render_frame(self.frame, &self.series, std::mem::take(&mut self.view));
    }

    fn status(&self) -> String {
        let n = self.series.len();
        if self.finished {
            format!("done · {n} samples · press q to quit")
        } else {
            format!("frame {:>3}/{} · press q to quit", self.frame, n)
        }
    }

    fn is_quit_key(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        Some(Cmd::Tick(self.interval))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Tick => {
                self.advance();
                if self.finished {
                    None
                } else {
                    Some(Cmd::Tick(self.interval))
                }
            }
            Msg::Key(key) => {
                if Self::is_quit_key(key) {
                    Some(Cmd::Quit)
                } else {
                    None
                }
            }
            Msg::Resize(width, height) => {
                self.size = (width, height);
                None
            }
        }
    }

    fn view(&self) -> String {
        views::render_screen(
            &self.params,
            &self.series,
            &self.view,
            &self.status(),
            self.size,
            self.color,
        )
    }
}
