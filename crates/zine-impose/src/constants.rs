//! Shared constants for zine layout
//!
//! Every measurement is in PDF points (1/72 inch). None of these are user
//! configurable: the geometry is fully determined by the layout mode.

// =============================================================================
// Paper
// =============================================================================

/// US Letter width in points (8.5")
pub const LETTER_WIDTH_PT: f32 = 612.0;

/// US Letter height in points (11")
pub const LETTER_HEIGHT_PT: f32 = 792.0;

// =============================================================================
// Single sheet grid (portrait, 3 x 4)
// =============================================================================

pub const SHEET_COLUMNS: usize = 3;
pub const SHEET_ROWS: usize = 4;
pub const SHEET_SIDE_MARGIN: f32 = 36.0;
/// Larger head margin so the sheet has room to be held/pinned
pub const SHEET_TOP_MARGIN: f32 = 54.0;
pub const SHEET_BOTTOM_MARGIN: f32 = 36.0;
pub const SHEET_GUTTER: f32 = 12.0;

// =============================================================================
// Mini zine grid (landscape, 4 x 2)
// =============================================================================

pub const ZINE_COLUMNS: usize = 4;
pub const ZINE_ROWS: usize = 2;
pub const ZINE_SIDE_MARGIN: f32 = 18.0;
pub const ZINE_TOP_MARGIN: f32 = 18.0;
pub const ZINE_BOTTOM_MARGIN: f32 = 18.0;
pub const ZINE_GUTTER: f32 = 6.0;

// =============================================================================
// Text
// =============================================================================

/// Line height = round(font size * LINE_SPACING)
pub const LINE_SPACING: f32 = 1.2;

/// Smallest font size the auto-fit search will consider
pub const MIN_FONT_SIZE: u32 = 6;

/// Largest font size the auto-fit search will consider
pub const MAX_FONT_SIZE: u32 = 72;

/// Helvetica ascender as a fraction of the em
pub const HELVETICA_ASCENT: f32 = 0.718;

/// Helvetica descender depth as a fraction of the em
pub const HELVETICA_DESCENT: f32 = 0.207;

// =============================================================================
// Panel overlays
// =============================================================================

pub const DEFAULT_COVER_CAPTION: &str = "My Mini Zine";
pub const DEFAULT_BACK_CAPTION: &str = "made with photo-zine";

pub const COVER_CAPTION_FONT_SIZE: u32 = 18;
pub const BACK_CAPTION_FONT_SIZE: u32 = 9;

/// Cover caption centre, as a fraction of panel height above its bottom edge
pub const COVER_CAPTION_ANCHOR: f32 = 0.72;

/// Gap between the back caption strip and the panel's bottom edge
pub const BACK_CAPTION_OFFSET: f32 = 10.0;

/// Padding between caption text and the edge of its background strip
pub const CAPTION_PADDING: f32 = 4.0;

/// Fill grey for caption strips (1.0 = white)
pub const CAPTION_BACKGROUND_GRAY: f32 = 0.96;

pub const MAX_CAPTION_CHARS: usize = 64;

// =============================================================================
// Back text page
// =============================================================================

/// Inset of the usable text rectangle from every page edge
pub const BACK_TEXT_MARGIN: f32 = 54.0;

pub const MAX_BACK_TEXT_CHARS: usize = 10_000;

// =============================================================================
// Strokes
// =============================================================================

pub const PANEL_BORDER_WIDTH: f32 = 0.5;
pub const PANEL_BORDER_GRAY: f32 = 0.75;

pub const FOLD_LINE_WIDTH: f32 = 0.5;
pub const CUT_LINE_WIDTH: f32 = 0.75;

/// Dash pattern for fold lines: 6pt dash, 3pt gap
pub const FOLD_DASH_PATTERN: [f32; 2] = [6.0, 3.0];
