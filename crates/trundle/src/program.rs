//! Program lifecycle and the tick-driven event loop.
//!
//! A deliberately small Elm-style runtime: the [`Model`] owns all state and
//! is advanced purely through [`Msg`] values; the only side effects are the
//! [`Cmd`]s it hands back (schedule the next tick, quit). The loop polls
//! terminal events with a deadline so a single thread serves both input
//! and the playback timer — exactly one producer of ticks, one consumer.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

/// Errors that can occur while running the playback program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable raw mode; the terminal may not support it.
    #[error("failed to enable raw mode: {source}")]
    RawMode {
        /// Underlying terminal error.
        source: io::Error,
    },

    /// Failed to enter the alternate screen buffer.
    #[error("failed to enter alternate screen: {source}")]
    AltScreen {
        /// Underlying terminal error.
        source: io::Error,
    },

    /// Failed to poll or read terminal events.
    #[error("failed to poll terminal events: {source}")]
    EventPoll {
        /// Underlying terminal error.
        source: io::Error,
    },
}

/// Result alias for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Poll granularity while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Messages delivered to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// The playback timer fired.
    Tick,
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
}

/// Follow-up work requested by the model after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Schedule the next playback tick after the given delay.
    Tick(Duration),
    /// Stop the program and restore the terminal.
    Quit,
}

/// The model trait for the playback program.
pub trait Model {
    /// Initialize the model and return an optional startup command.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a follow-up command.
    fn update(&mut self, msg: Msg) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// Must be a pure function with no side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone, Copy)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self { alt_screen: true }
    }
}

/// Restores the terminal when dropped, so teardown also happens on error
/// and panic unwinding paths.
struct TerminalGuard {
    alt_screen: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
        if self.alt_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
    }
}

/// The playback program runner.
///
/// Owns terminal setup and teardown, the event/tick loop, and rendering.
///
/// # Example
///
/// ```rust,ignore
/// let final_model = Program::new(app).with_alt_screen().run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Creates a new program around the given model. The alternate screen
    /// is used by default.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Enables the alternate screen buffer.
    #[must_use]
    pub const fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Runs in the main terminal buffer, leaving the final frame in the
    /// scrollback.
    #[must_use]
    pub const fn without_alt_screen(mut self) -> Self {
        self.options.alt_screen = false;
        self
    }

    /// Runs the program to completion and returns the final model.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be put into raw mode, the alternate
    /// screen cannot be entered, or event polling / rendering hits an I/O
    /// error. The terminal is restored in every case.
    pub fn run(self) -> Result<M> {
        enable_raw_mode().map_err(|source| Error::RawMode { source })?;
        let mut guard = TerminalGuard { alt_screen: false };

        let mut stdout = io::stdout();
        if self.options.alt_screen {
            execute!(stdout, EnterAlternateScreen)
                .map_err(|source| Error::AltScreen { source })?;
            guard.alt_screen = true;
        }
        execute!(stdout, Hide)?;
        tracing::debug!(alt_screen = guard.alt_screen, "terminal ready");

        let result = self.event_loop(&mut stdout);
        drop(guard);
        tracing::debug!("terminal restored");
        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let mut next_tick = match self.model.init() {
            Some(Cmd::Tick(delay)) => Some(Instant::now() + delay),
            Some(Cmd::Quit) => return Ok(self.model),
            None => None,
        };

        let mut last_view = String::new();
        draw(writer, self.model.view(), &mut last_view)?;

        loop {
            let timeout = next_tick
                .map_or(IDLE_POLL, |at| at.saturating_duration_since(Instant::now()));

            let msg = if event::poll(timeout).map_err(|source| Error::EventPoll { source })? {
                match event::read().map_err(|source| Error::EventPoll { source })? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
                    Event::Resize(width, height) => Some(Msg::Resize(width, height)),
                    _ => None,
                }
            } else if next_tick.is_some_and(|at| Instant::now() >= at) {
                next_tick = None;
                Some(Msg::Tick)
            } else {
                None
            };

            let Some(msg) = msg else { continue };

            match self.model.update(msg) {
                Some(Cmd::Quit) => return Ok(self.model),
                Some(Cmd::Tick(delay)) => next_tick = Some(Instant::now() + delay),
                None => {}
            }
            draw(writer, self.model.view(), &mut last_view)?;
        }
    }
}

/// Writes a view to the terminal, skipping the write when nothing changed.
///
/// Raw mode disables output post-processing, so line feeds are written as
/// explicit CRLF pairs.
fn draw<W: Write>(writer: &mut W, view: String, last_view: &mut String) -> Result<()> {
    if view == *last_view {
        return Ok(());
    }

    queue!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
    for (i, line) in view.lines().enumerate() {
        if i > 0 {
            writer.write_all(b"\r\n")?;
        }
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    *last_view = view;
    Ok(())
}
