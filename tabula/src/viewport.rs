//! Which slice of rows is visible.
//!
//! The active row may be expanded by caller content whose height is only
//! known once it has been drawn. The height measured in one frame is used
//! when placing the window in the next, so an expansion settles one frame
//! after it changes.

use std::ops::Range;

/// Scroll position of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row.
    pub start: usize,
    /// Focused row, kept inside the visible range.
    pub active_row: usize,
    /// Lines the active row's expansion took in the previous frame.
    pub extra_height: usize,
}

impl Viewport {
    pub fn new(start: usize, active_row: usize, extra_height: usize) -> Self {
        Self {
            start,
            active_row,
            extra_height,
        }
    }

    /// Move the window so the active row is visible and return the rows to
    /// draw.
    ///
    /// `capacity` is the number of body lines available. `extra_height` is
    /// read, not reset; the caller zeroes it before drawing the frame.
    pub fn resolve(&mut self, len: usize, capacity: usize) -> Range<usize> {
        if len == 0 {
            self.start = 0;
            self.active_row = 0;
            return 0..0;
        }
        self.start = self.start.min(len - 1);
        if capacity == 0 {
            self.active_row = self.active_row.min(len - 1);
            self.start = self.active_row;
            return self.start..self.start;
        }

        let tentative_end = self.end_for(self.start + capacity.min(len), len);
        self.start = if self.active_row == 0 {
            0
        } else if self.active_row < self.start {
            self.active_row
        } else {
            // cannot scroll past the last row; still scroll forward onto it
            self.active_row = self.active_row.min(len - 1);
            if self.active_row >= tentative_end {
                self.start + (self.active_row - tentative_end + 1)
            } else {
                self.start
            }
        };
        // an expansion taller than the window would otherwise push the
        // start past the active row
        self.start = self.start.min(self.active_row);

        let end = self
            .end_for(self.start + capacity, len)
            .max(self.active_row + 1)
            .min(len);
        self.start..end
    }

    /// Reserve room for the expansion when the active row sits at the
    /// bottom of the window.
    fn end_for(&self, end: usize, len: usize) -> usize {
        let end = if self.active_row + self.extra_height >= end.saturating_sub(1) {
            end.saturating_sub(self.extra_height)
        } else {
            end
        };
        end.min(len)
    }
}
