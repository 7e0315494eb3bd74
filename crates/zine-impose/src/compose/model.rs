//! Composed document model
//!
//! The composer produces this description of every page; the renderer turns
//! it into PDF objects. Nothing here references the PDF library.

use crate::layout::{Rect, Transform};
use crate::text::TextFit;
use crate::types::LayoutMode;

/// One photo drawn on a page
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDraw {
    /// Position of the image in the request (0-based)
    pub image_index: usize,
    /// 1-based reading-order page
    pub logical_page: usize,
    /// Physical row-major slot
    pub slot: usize,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Aspect-fit rectangle, centred in the panel
    pub rect: Rect,
    pub rotated180: bool,
}

impl ImageDraw {
    /// `cm` matrix mapping the image's unit square onto the page
    pub fn transform(&self) -> Transform {
        Transform::image_placement(&self.rect, self.rotated180)
    }
}

/// A single line of text, optionally on a background strip and flipped
/// in place about a pivot
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub font_size: f32,
    /// Left edge of the text
    pub x: f32,
    pub baseline: f32,
    /// Opaque strip drawn behind the text
    pub background: Option<Rect>,
    /// Centre of the 180° rotation, if any
    pub rotation_pivot: Option<(f32, f32)>,
}

impl TextDraw {
    pub fn transform(&self) -> Option<Transform> {
        self.rotation_pivot
            .map(|(cx, cy)| Transform::rotate_180_about(cx, cy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Vector strokes: panel borders and fold/cut guides
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Rect {
        rect: Rect,
        width: f32,
        /// 0.0 = black, 1.0 = white
        gray: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        style: LineStyle,
    },
}

/// Everything drawn on one page, in paint order: images, strokes, text
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub width_pt: f32,
    pub height_pt: f32,
    pub images: Vec<ImageDraw>,
    pub strokes: Vec<Stroke>,
    pub texts: Vec<TextDraw>,
}

impl GeneratedPage {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
            images: Vec::new(),
            strokes: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// The image placed in a slot, if any
    pub fn image_in_slot(&self, slot: usize) -> Option<&ImageDraw> {
        self.images.iter().find(|draw| draw.slot == slot)
    }

    /// Slots that received an image, in draw order
    pub fn populated_slots(&self) -> Vec<usize> {
        self.images.iter().map(|draw| draw.slot).collect()
    }
}

/// The composed document for one request
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub mode: LayoutMode,
    pub pages: Vec<GeneratedPage>,
    /// Indices of images skipped for an unsupported declared format
    pub skipped: Vec<usize>,
    /// Number of images beyond the mode's maximum
    pub ignored: usize,
    /// Fit result for the back-text page, when one was added
    pub back_text: Option<TextFit>,
}

impl GeneratedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn images_placed(&self) -> usize {
        self.pages.iter().map(|page| page.images.len()).sum()
    }
}
