//! Layout data types
//!
//! These types sit between the planner (which only knows the mode) and the
//! composer (which knows the images).

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in points, origin at the bottom-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// True if the two rectangles share any area (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// True if `other` lies fully inside `self`, with a small tolerance
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }
}

/// Which panels are printed upside down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationRule {
    /// Nothing is rotated
    None,
    /// Every panel in row 0 is rotated 180°
    TopRowInverted,
}

impl RotationRule {
    pub fn is_rotated(self, pos: GridPosition) -> bool {
        match self {
            RotationRule::None => false,
            RotationRule::TopRowInverted => pos.row == 0,
        }
    }
}

/// Fixed page and grid measurements for one layout mode
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    /// Left and right margin
    pub margin_side_pt: f32,
    /// Space between adjacent columns
    pub column_gutter_pt: f32,
    /// Space between adjacent rows
    pub row_gutter_pt: f32,
    pub cols: usize,
    pub rows: usize,
    pub cell_width_pt: f32,
    pub cell_height_pt: f32,
}

impl PageGeometry {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Grid position of a row-major slot index
    pub fn position_of(&self, slot: usize) -> Option<GridPosition> {
        (slot < self.cell_count()).then(|| GridPosition::new(slot / self.cols, slot % self.cols))
    }

    /// Row-major slot index of a grid position
    pub fn slot_of(&self, pos: GridPosition) -> usize {
        pos.row * self.cols + pos.col
    }

    /// The area inside the page margins
    pub fn usable_area(&self) -> Rect {
        Rect::new(
            self.margin_side_pt,
            self.margin_bottom_pt,
            self.page_width_pt - 2.0 * self.margin_side_pt,
            self.page_height_pt - self.margin_top_pt - self.margin_bottom_pt,
        )
    }

    pub fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width_pt, self.page_height_pt)
    }
}

/// One grid cell, resolved to page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Row-major index (0 = top-left)
    pub slot: usize,
    pub position: GridPosition,
    pub rect: Rect,
    pub rotated180: bool,
}
