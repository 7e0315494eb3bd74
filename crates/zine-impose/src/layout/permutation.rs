//! Mini zine page order
//!
//! A landscape sheet folded in half lengthwise, cut along the centre between
//! the two middle panels and then accordion-folded, reads in this order:
//!
//! ```text
//!   +-----+-----+-----+-----+
//!   | 8↓  | 1↓  | 2↓  | 3↓  |   row 0, printed upside down
//!   +-----+--- cut ---+-----+
//!   |  7  |  6  |  5  |  4  |   row 1
//!   +-----+-----+-----+-----+
//! ```
//!
//! The mapping is a property of the fold topology, not of the request.

/// Physical slot (row-major, 0..8) for each logical page (1..=8, by index).
pub const ZINE_PAGE_ORDER: [usize; 8] = [1, 2, 3, 7, 6, 5, 4, 0];

/// Logical page number → physical slot index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePermutation {
    table: &'static [usize],
}

impl PagePermutation {
    /// The fixed booklet imposition for the mini zine
    pub fn mini_zine() -> Self {
        Self {
            table: &ZINE_PAGE_ORDER,
        }
    }

    /// Number of logical pages covered
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Slot for a 1-based logical page number
    pub fn slot_for(&self, logical_page: usize) -> Option<usize> {
        logical_page
            .checked_sub(1)
            .and_then(|idx| self.table.get(idx).copied())
    }

    /// 1-based logical page printed in a slot
    pub fn page_for(&self, slot: usize) -> Option<usize> {
        self.table
            .iter()
            .position(|&s| s == slot)
            .map(|idx| idx + 1)
    }

    /// True if every slot 0..len is hit exactly once
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.table.len()];
        for &slot in self.table {
            match seen.get_mut(slot) {
                Some(hit) if !*hit => *hit = true,
                _ => return false,
            }
        }
        true
    }
}
