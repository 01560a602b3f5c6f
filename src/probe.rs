//! Screen-bounds discovery.
//!
//! [`ClampProbe`] derives the screen size indirectly: it pushes a window far
//! off screen and reads back where the host actually put it.  The host keeps
//! the top edge on screen and leaves a fixed sliver of the window visible
//! horizontally, and the sliver is the same width on the left and the right
//! edge.  This only holds for a single display.
//!
//! [`FixedBounds`] skips all of that and returns configured values.

use crate::model::TerminalWindow;
use crate::traits::{DisplayBoundsProbe, TerminalHost};
use log::info;
use serde::{Deserialize, Serialize};

/// Usable screen area, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    /// Right edge of the screen.
    pub max_x: i32,
    /// Top edge of the screen (`y` grows upward).
    pub max_y: i32,
}

/// Errors produced while probing the screen.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError<E: std::error::Error + 'static> {
    /// The host returned an error while the window was being moved.
    #[error(transparent)]
    Host(E),
    /// The host accepted an off-screen x coordinate, so nothing can be
    /// inferred from it.
    #[error("host did not clamp the probe window (x = {x})")]
    NotClamped { x: i32 },
}

/// Default distance used to push the probe window off screen.
pub const DEFAULT_PROBE_OFFSET: u32 = 99_999;

/// Single-monitor heuristic based on the host's frame clamping.
#[derive(Debug, Clone, Copy)]
pub struct ClampProbe {
    offset: i32,
}

impl Default for ClampProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_OFFSET)
    }
}

impl ClampProbe {
    /// Create a probe that moves the window `offset` units past the screen.
    ///
    /// The offset is capped at `i32::MAX` so it can always be negated.
    pub fn new(offset: u32) -> Self {
        let offset = i32::try_from(offset).unwrap_or(i32::MAX);
        Self { offset }
    }
}

impl DisplayBoundsProbe for ClampProbe {
    fn screen_bounds<H: TerminalHost>(
        &self,
        host: &H,
        window: &TerminalWindow,
    ) -> Result<ScreenBounds, ProbeError<H::Error>> {
        let mut frame = host.window_frame(window).map_err(ProbeError::Host)?;

        // Far left and far up: the host pins the top edge to the screen top.
        frame.origin.x = -self.offset;
        frame.origin.y = self.offset;
        host.set_window_frame(window, frame)
            .map_err(ProbeError::Host)?;
        let mut frame = host.window_frame(window).map_err(ProbeError::Host)?;
        let max_y = frame.top();

        if frame.origin.x >= 0 {
            return Err(ProbeError::NotClamped { x: frame.origin.x });
        }
        let min_x_visible = frame.size.width + frame.origin.x;

        // Far right: the same sliver stays visible on this side.
        frame.origin.x = self.offset;
        host.set_window_frame(window, frame)
            .map_err(ProbeError::Host)?;
        let frame = host.window_frame(window).map_err(ProbeError::Host)?;
        let max_x = frame.origin.x + min_x_visible;

        info!(
            "probe: right-clamped x {}, visible sliver {}",
            frame.origin.x, min_x_visible
        );
        info!("max x,y {} {}", max_x, max_y);
        Ok(ScreenBounds { max_x, max_y })
    }
}

/// Bounds supplied up front; no window is touched.
#[derive(Debug, Clone, Copy)]
pub struct FixedBounds(pub ScreenBounds);

impl DisplayBoundsProbe for FixedBounds {
    fn screen_bounds<H: TerminalHost>(
        &self,
        _host: &H,
        _window: &TerminalWindow,
    ) -> Result<ScreenBounds, ProbeError<H::Error>> {
        Ok(self.0)
    }
}
