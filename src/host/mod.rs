//! Terminal-host backends.
//!
//! This module provides the concrete [`TerminalHost`](crate::traits::TerminalHost)
//! implementation that talks to a running terminal application over its
//! control socket.
//!
//! Nothing outside this module should know about the wire format.

pub mod protocol;
pub mod socket;
