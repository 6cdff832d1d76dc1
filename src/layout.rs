//! Row planning and row geometry.
//!
//! The item grid packs items into rows of at most `ROW_ITEM_LIMIT` cells.
//! Every row is filled to capacity except possibly the last, which holds
//! the remainder. An under-full row is centered: a half-slot spacer is
//! added on each side and the content width shrinks by one slot, so the
//! short row's cells keep the same width as a full row's.
//!
//! Both functions are pure; all the widget's horizontal arithmetic lives
//! here so the painting code works with pre-computed pixel offsets.

/// Compute the number of cells on each row.
///
/// Every row holds exactly `capacity` items except the last, which holds
/// the remainder (`capacity` itself on exact multiples). An empty item
/// list yields no rows.
pub fn plan_rows(item_count: usize, capacity: usize) -> Vec<usize> {
    debug_assert!(capacity >= 1, "row capacity must be at least 1");

    let mut rows = Vec::with_capacity(item_count.div_ceil(capacity.max(1)));
    let mut remaining = item_count;
    while remaining > 0 {
        let row = remaining.min(capacity);
        rows.push(row);
        remaining -= row;
    }
    rows
}

/// Horizontal geometry of one item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    /// Pixels of spacer before the first cell (and implicitly after the
    /// last). Zero for full rows.
    pub leading_spacer: u32,
    /// Width of each cell on this row, in pixels.
    pub cell_width: u32,
}

/// Compute the geometry for a row holding `cells_in_row` of a possible
/// `capacity` cells across `row_width` pixels.
///
/// A full row divides the width evenly. A short row gives up one slot of
/// width (`row_width / capacity`), half on each side, and divides the
/// rest among its cells.
pub fn row_geometry(row_width: u32, capacity: usize, cells_in_row: usize) -> RowGeometry {
    debug_assert!(cells_in_row >= 1 && cells_in_row <= capacity);

    let capacity = capacity as u32;
    let cells = cells_in_row as u32;

    if cells < capacity {
        let slot = row_width / capacity;
        RowGeometry {
            leading_spacer: slot / 2,
            cell_width: (row_width - slot) / cells,
        }
    } else {
        RowGeometry {
            leading_spacer: 0,
            cell_width: row_width / capacity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
