//! Wire format of the host control socket.
//!
//! Every request is a single line of JSON followed by `\n`; the host answers
//! each request with exactly one line:
//!
//! ```json
//! {"ColorPreset":{"name":"Solarized Dark"}}
//! {"Ok":{"name":"Solarized Dark"}}
//!
//! {"SetWindowFrame":{"window":"w1","frame":{"origin":{"x":0,"y":780},"size":{"width":600,"height":300}}}}
//! {"Ok":null}
//!
//! "TerminalWindows"
//! {"Error":"not authorized"}
//! ```

use crate::model::{Frame, GridSize};
use serde::{Deserialize, Serialize};

/// A request to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Request {
    /// Resolve a color preset by name.
    ColorPreset { name: String },
    /// List every profile in partial form.
    PartialProfiles,
    /// Fetch a complete profile.
    FullProfile { guid: String },
    /// Set the color preset of a profile.
    SetColorPreset { guid: String, preset: String },
    /// List open terminal windows.
    TerminalWindows,
    GetWindowFrame { window: String },
    SetWindowFrame { window: String, frame: Frame },
    /// Set a session's preferred character grid.
    SetPreferredSize { session: String, grid: GridSize },
    /// Recompute a tab's window frame from its sessions' grids.
    UpdateLayout { tab: String },
}

/// The host's answer to one [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    Ok(serde_json::Value),
    Error(String),
}
