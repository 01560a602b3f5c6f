//! **termstack**: small automation utilities for a scriptable terminal
//! application.
//!
//! Two one-shot tools share this crate:
//!
//! * `set-color-preset <NAME>` applies a named color preset to every saved
//!   profile ([`theme`]).
//! * `stack-windows` arranges up to eight terminal windows into three
//!   stacked columns ([`arranger`]).
//!
//! # Architecture
//!
//! The crate is organised around two traits:
//!
//! * [`traits::TerminalHost`]: the host's scripting interface, so the
//!   arrangement and theming logic is not coupled to any transport.
//! * [`traits::DisplayBoundsProbe`]: how the screen size is discovered, so
//!   the off-screen clamping heuristic can be replaced without touching the
//!   stacking code.
//!
//! The concrete host backend lives in [`host`] (JSON lines over a Unix
//! socket); screen probes live in [`probe`].

pub mod arranger;
pub mod config;
pub mod host;
pub mod layout;
pub mod model;
pub mod probe;
pub mod slots;
pub mod theme;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
