//! Column stacking.
//!
//! A column is filled from the top down.  Each window's top edge sits one
//! `gap` below the previous window's bottom edge; an empty slot advances the
//! cursor by `default_height` as if a window were there.
//!
//! The arithmetic lives in [`ColumnCursor`], which knows nothing about the
//! host.  [`stack_windows_down`] drives it against a [`TerminalHost`].

use crate::model::{Frame, Point, Size, TerminalWindow};
use crate::traits::TerminalHost;
use log::info;

/// Units of empty space between stacked windows.
pub const DEFAULT_GAP: i32 = 1;

/// Where a column sits and how it is aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Left edge of every window, or the right edge when `flush_right`.
    pub x: i32,
    /// Top edge of the first slot.
    pub init_y: i32,
    pub flush_right: bool,
}

/// Running position while walking down a column.
#[derive(Debug, Clone)]
pub struct ColumnCursor {
    spec: ColumnSpec,
    default_height: i32,
    gap: i32,
    last_y: i32,
}

impl ColumnCursor {
    pub fn new(spec: ColumnSpec, default_height: i32, gap: i32) -> Self {
        Self {
            spec,
            default_height,
            gap,
            last_y: spec.init_y,
        }
    }

    /// Origin for the next window of `size`, advancing past it.
    pub fn place(&mut self, size: Size) -> Point {
        let x = if self.spec.flush_right {
            self.spec.x - size.width
        } else {
            self.spec.x
        };
        let y = self.last_y - size.height;
        self.last_y = y - self.gap;
        Point { x, y }
    }

    /// Advance past an empty slot.
    pub fn skip(&mut self) {
        self.last_y -= self.default_height + self.gap;
    }

    /// Top edge the next window would get.
    pub fn next_top(&self) -> i32 {
        self.last_y
    }
}

/// Stack `windows` down a column, moving each present window into place.
///
/// Returns the frames that were applied, in slot order.
pub fn stack_windows_down<H: TerminalHost>(
    host: &H,
    windows: &[Option<TerminalWindow>],
    spec: ColumnSpec,
    default_height: i32,
    gap: i32,
) -> Result<Vec<(usize, Frame)>, H::Error> {
    let mut cursor = ColumnCursor::new(spec, default_height, gap);
    let mut applied = Vec::new();
    for window in windows {
        match window {
            Some(window) => {
                let mut frame = host.window_frame(window)?;
                frame.origin = cursor.place(frame.size);
                host.set_window_frame(window, frame)?;
                info!("window {} -> {}", window.number, frame.origin);
                applied.push((window.number, frame));
            }
            None => cursor.skip(),
        }
    }
    Ok(applied)
}
