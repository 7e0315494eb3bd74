//! Panel layout planning
//!
//! `plan` is the single entry point: everything about the page, the grid,
//! the page order and the rotation follows from the mode alone.

use log::debug;

use crate::types::LayoutMode;

use super::{
    GridPosition, PageGeometry, PagePermutation, Panel, RotationRule, cell_bounds,
    create_page_geometry,
};

/// Everything the composer needs to know about where things go
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub mode: LayoutMode,
    pub geometry: PageGeometry,
    /// `None` means logical order equals row-major slot order
    pub permutation: Option<PagePermutation>,
    pub rotation: RotationRule,
}

/// Plan the page for a layout mode.
pub fn plan(mode: LayoutMode) -> LayoutPlan {
    let geometry = create_page_geometry(mode);

    let (permutation, rotation) = match mode {
        LayoutMode::SingleSheet => (None, RotationRule::None),
        LayoutMode::MiniZine => (
            Some(PagePermutation::mini_zine()),
            RotationRule::TopRowInverted,
        ),
    };

    debug!(
        "Planned {} layout: {}x{} grid, cell {:.1}x{:.1}pt",
        mode.token(),
        geometry.cols,
        geometry.rows,
        geometry.cell_width_pt,
        geometry.cell_height_pt
    );

    LayoutPlan {
        mode,
        geometry,
        permutation,
        rotation,
    }
}

impl LayoutPlan {
    /// Maximum number of logical pages (and images) on the sheet
    pub fn capacity(&self) -> usize {
        self.geometry.cell_count()
    }

    /// Physical slot for a 1-based logical page number
    pub fn slot_for_page(&self, logical_page: usize) -> Option<usize> {
        match &self.permutation {
            Some(perm) => perm.slot_for(logical_page),
            None => (1..=self.capacity())
                .contains(&logical_page)
                .then(|| logical_page - 1),
        }
    }

    /// Resolve a slot to its panel
    pub fn panel(&self, slot: usize) -> Option<Panel> {
        let position = self.geometry.position_of(slot)?;
        Some(self.panel_at(position))
    }

    /// Resolve a 1-based logical page to its panel
    pub fn panel_for_page(&self, logical_page: usize) -> Option<Panel> {
        self.slot_for_page(logical_page)
            .and_then(|slot| self.panel(slot))
    }

    /// All panels in row-major order
    pub fn panels(&self) -> Vec<Panel> {
        (0..self.capacity())
            .filter_map(|slot| self.panel(slot))
            .collect()
    }

    fn panel_at(&self, position: GridPosition) -> Panel {
        Panel {
            slot: self.geometry.slot_of(position),
            position,
            rect: cell_bounds(&self.geometry, position),
            rotated180: self.rotation.is_rotated(position),
        }
    }
}
