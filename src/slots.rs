//! Fixed window slots.
//!
//! The arranger works on eight slots.  Window `n` (the host's ordinal) lands
//! in slot `n`; windows numbered eight or higher are left alone.  Empty slots
//! still take up room in their column so later windows keep their place.

use crate::model::TerminalWindow;
use std::ops::Range;

/// Number of slots.
pub const SLOT_COUNT: usize = 8;

/// Slots of the left column.
pub const LEFT_COLUMN: Range<usize> = 0..3;
/// Slots of the right column.
pub const RIGHT_COLUMN: Range<usize> = 3..6;
/// Slots of the offset third column.
pub const OFFSET_COLUMN: Range<usize> = 6..SLOT_COUNT;

/// Mapping from host ordinal to an optional window.
#[derive(Debug, Clone, Default)]
pub struct WindowSlots {
    slots: [Option<TerminalWindow>; SLOT_COUNT],
}

impl WindowSlots {
    /// Place `windows` into their slots.
    ///
    /// If the host reports two windows with the same number, the later one
    /// wins.
    pub fn from_windows(windows: impl IntoIterator<Item = TerminalWindow>) -> Self {
        let mut slots = Self::default();
        for window in windows {
            if let Some(slot) = slots.slots.get_mut(window.number) {
                *slot = Some(window);
            }
        }
        slots
    }

    pub fn get(&self, index: usize) -> Option<&TerminalWindow> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// The slots in `range`, empty ones included.  A range reaching past
    /// the last slot yields no slots.
    pub fn column(&self, range: Range<usize>) -> &[Option<TerminalWindow>] {
        self.slots.get(range).unwrap_or(&[])
    }

    /// Occupied slots in slot order.
    pub fn present(&self) -> impl Iterator<Item = &TerminalWindow> {
        self.slots.iter().flatten()
    }

    /// The lowest-numbered occupied slot.
    pub fn first_present(&self) -> Option<&TerminalWindow> {
        self.present().next()
    }

    pub fn is_empty(&self) -> bool {
        self.first_present().is_none()
    }
}
