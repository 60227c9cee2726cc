#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::suboptimal_flops)]

//! # Trundle
//!
//! Terminal playback of one-dimensional uniformly accelerated motion.
//!
//! Trundle drives a [`kinematica`] sample series through two synchronized
//! terminal views: a "real-world" track with a moving marker, and a
//! time-vs-displacement chart traced frame by frame. The sample series is
//! computed once at startup; the playback loop then calls the pure frame
//! transition on a fixed cadence and draws the resulting state.
//!
//! Modules:
//!
//! - [`cli`] — command-line contract (clap derive)
//! - [`config`] — runtime configuration, merged from defaults, an optional
//!   TOML file, and CLI flags
//! - [`program`] — terminal lifecycle and the tick-driven event loop
//! - [`app`] — the playback model (frame advancement, loop semantics,
//!   quit keys)
//! - [`views`] — the two panels rendered as text
//! - [`self_check`] — headless rendering probe for CI

pub mod app;
pub mod cli;
pub mod config;
pub mod program;
pub mod self_check;
pub mod views;
