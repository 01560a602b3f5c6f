//! The window arranger.
//!
//! [`arrange`] pins every slotted window to a fixed character grid, works out
//! a common window size and the screen bounds, then stacks the slots into
//! three columns:
//!
//! * slots 0–2 down the left edge of the screen,
//! * slots 3–5 down the right edge, right-aligned,
//! * slots 6–7 in a third column offset into the screen and half a window
//!   below the top.

use crate::layout::{stack_windows_down, ColumnSpec, DEFAULT_GAP};
use crate::model::{Frame, GridSize, Size};
use crate::probe::{ProbeError, ScreenBounds};
use crate::slots::{WindowSlots, LEFT_COLUMN, OFFSET_COLUMN, RIGHT_COLUMN};
use crate::traits::{DisplayBoundsProbe, TerminalHost};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Possible errors from the arranger.
#[derive(Debug, thiserror::Error)]
pub enum ArrangeError<E: std::error::Error + 'static> {
    /// The host returned an error.
    #[error("host error: {0}")]
    Host(E),
    /// None of the slots holds a window.
    #[error("no terminal windows to arrange")]
    NoWindows,
    /// The screen bounds could not be determined.
    #[error("screen probe failed: {0}")]
    Probe(ProbeError<E>),
}

/// Placement of the offset third column, relative to the common window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetColumn {
    /// Left edge as a fraction of the default width.
    pub x_factor: f64,
    /// Distance below the screen top as a fraction of the default height.
    pub y_factor: f64,
}

impl Default for OffsetColumn {
    fn default() -> Self {
        Self {
            x_factor: 0.8,
            y_factor: 0.5,
        }
    }
}

/// Tunables for [`arrange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrangeOptions {
    pub grid: GridSize,
    pub gap: i32,
    pub offset_column: OffsetColumn,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            gap: DEFAULT_GAP,
            offset_column: OffsetColumn::default(),
        }
    }
}

/// What [`arrange`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangeReport {
    /// Smallest width and height among the arranged windows.
    pub default_size: Size,
    pub bounds: ScreenBounds,
    /// Final frame of each arranged window, keyed by window number.
    pub placed: Vec<(usize, Frame)>,
}

/// Arrange the first eight terminal windows.
///
/// Requests are issued strictly in order.  A failure part-way leaves the
/// windows moved so far where they are.
pub fn arrange<H, P>(
    host: &H,
    probe: &P,
    options: &ArrangeOptions,
) -> Result<ArrangeReport, ArrangeError<H::Error>>
where
    H: TerminalHost,
    P: DisplayBoundsProbe,
{
    let windows = host.terminal_windows().map_err(ArrangeError::Host)?;
    debug!("host reports {} terminal window(s)", windows.len());
    let slots = WindowSlots::from_windows(windows);

    let default_size = normalize_sizes(host, &slots, options.grid)?;
    info!("def WxH {} {}", default_size.width, default_size.height);

    let probe_window = slots.first_present().ok_or(ArrangeError::NoWindows)?;
    let bounds = probe
        .screen_bounds(host, probe_window)
        .map_err(ArrangeError::Probe)?;

    let columns = [
        (
            LEFT_COLUMN,
            ColumnSpec {
                x: 0,
                init_y: bounds.max_y,
                flush_right: false,
            },
        ),
        (
            RIGHT_COLUMN,
            ColumnSpec {
                x: bounds.max_x,
                init_y: bounds.max_y,
                flush_right: true,
            },
        ),
        (
            OFFSET_COLUMN,
            offset_column_spec(bounds, default_size, options.offset_column),
        ),
    ];

    let mut placed = Vec::new();
    for (range, spec) in columns {
        let applied = stack_windows_down(
            host,
            slots.column(range),
            spec,
            default_size.height,
            options.gap,
        )
        .map_err(ArrangeError::Host)?;
        placed.extend(applied);
    }

    Ok(ArrangeReport {
        default_size,
        bounds,
        placed,
    })
}

/// Pin every session to `grid`, let the host resize the windows, and return
/// the smallest resulting width and height.
///
/// Taking the minimum keeps one oversized window from stretching the space
/// reserved for empty slots.
fn normalize_sizes<H: TerminalHost>(
    host: &H,
    slots: &WindowSlots,
    grid: GridSize,
) -> Result<Size, ArrangeError<H::Error>> {
    let mut default_size: Option<Size> = None;
    for window in slots.present() {
        let tab = &window.current_tab;
        for session in &tab.sessions {
            host.set_preferred_size(session, grid)
                .map_err(ArrangeError::Host)?;
        }
        host.update_layout(&tab.id).map_err(ArrangeError::Host)?;
        let frame = host.window_frame(window).map_err(ArrangeError::Host)?;
        debug!("window {} laid out at {:?}", window.number, frame);

        default_size = Some(match default_size {
            Some(d) => Size {
                width: d.width.min(frame.size.width),
                height: d.height.min(frame.size.height),
            },
            None => frame.size,
        });
    }
    default_size.ok_or(ArrangeError::NoWindows)
}

fn offset_column_spec(bounds: ScreenBounds, default_size: Size, offset: OffsetColumn) -> ColumnSpec {
    ColumnSpec {
        x: (f64::from(default_size.width) * offset.x_factor) as i32,
        init_y: (f64::from(bounds.max_y) - offset.y_factor * f64::from(default_size.height)) as i32,
        flush_right: false,
    }
}
