//! Types shared by every part of termstack.
//!
//! These mirror the handful of host objects the utilities touch: color
//! presets, profiles, windows with their current tab, and window frames.
//! All of them are owned by the host; termstack only holds copies of the
//! identifiers and geometry it needs for the next request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in screen coordinates.
///
/// The host uses a bottom-left origin: `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A size in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A window's position and size.
///
/// `origin` is the bottom-left corner, so the top edge is
/// `origin.y + size.height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Y coordinate of the top edge.
    pub fn top(&self) -> i32 {
        self.origin.y + self.size.height
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }
}

/// Preferred character grid of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self { columns: 80, rows: 24 }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// A named color preset as resolved by the host's preset registry.
///
/// The contents are opaque to termstack; only the name travels back to the
/// host when the preset is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPreset {
    pub name: String,
}

/// A profile as listed by the host, before the full object is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProfile {
    pub guid: String,
    pub name: String,
}

/// A complete profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub guid: String,
    pub name: String,
}

/// The tab currently shown by a window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    /// Session ids in this tab.
    #[serde(default)]
    pub sessions: Vec<String>,
}

/// A terminal window known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalWindow {
    /// Opaque host id used to address the window in requests.
    pub id: String,
    /// Host-assigned ordinal, 0-based.
    pub number: usize,
    pub current_tab: Tab,
}
