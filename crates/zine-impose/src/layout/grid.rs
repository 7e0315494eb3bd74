//! Grid layout calculation
//!
//! Page geometry is fixed per mode: margins and gutters are constants, and
//! the cell size falls out of whatever space remains.

use crate::constants::*;
use crate::types::LayoutMode;

use super::{GridPosition, PageGeometry, Rect};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the page geometry for a layout mode.
pub fn create_page_geometry(mode: LayoutMode) -> PageGeometry {
    let (page_width_pt, page_height_pt) = mode.page_dimensions_pt();

    let GridConfig {
        cols,
        rows,
        margin_side,
        margin_top,
        margin_bottom,
        gutter,
    } = grid_config(mode);

    let usable_width = page_width_pt - 2.0 * margin_side - (cols - 1) as f32 * gutter;
    let usable_height = page_height_pt - margin_top - margin_bottom - (rows - 1) as f32 * gutter;

    PageGeometry {
        page_width_pt,
        page_height_pt,
        margin_top_pt: margin_top,
        margin_bottom_pt: margin_bottom,
        margin_side_pt: margin_side,
        column_gutter_pt: gutter,
        row_gutter_pt: gutter,
        cols,
        rows,
        cell_width_pt: usable_width / cols as f32,
        cell_height_pt: usable_height / rows as f32,
    }
}

struct GridConfig {
    cols: usize,
    rows: usize,
    margin_side: f32,
    margin_top: f32,
    margin_bottom: f32,
    gutter: f32,
}

fn grid_config(mode: LayoutMode) -> GridConfig {
    match mode {
        LayoutMode::SingleSheet => GridConfig {
            cols: SHEET_COLUMNS,
            rows: SHEET_ROWS,
            margin_side: SHEET_SIDE_MARGIN,
            margin_top: SHEET_TOP_MARGIN,
            margin_bottom: SHEET_BOTTOM_MARGIN,
            gutter: SHEET_GUTTER,
        },
        LayoutMode::MiniZine => GridConfig {
            cols: ZINE_COLUMNS,
            rows: ZINE_ROWS,
            margin_side: ZINE_SIDE_MARGIN,
            margin_top: ZINE_TOP_MARGIN,
            margin_bottom: ZINE_BOTTOM_MARGIN,
            gutter: ZINE_GUTTER,
        },
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of the cell at the given grid position.
///
/// Row 0 is the top row, so y is measured down from the top margin and then
/// flipped into PDF's bottom-up coordinates.
pub fn cell_bounds(geometry: &PageGeometry, pos: GridPosition) -> Rect {
    let x = geometry.margin_side_pt
        + pos.col as f32 * (geometry.cell_width_pt + geometry.column_gutter_pt);

    let top = geometry.page_height_pt
        - geometry.margin_top_pt
        - pos.row as f32 * (geometry.cell_height_pt + geometry.row_gutter_pt);

    Rect::new(
        x,
        top - geometry.cell_height_pt,
        geometry.cell_width_pt,
        geometry.cell_height_pt,
    )
}

// =============================================================================
// Tests
// =============================================================================
