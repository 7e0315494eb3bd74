//! Panel overlays for the mini zine
//!
//! Captions on the front and back covers, thin borders around every panel,
//! and optional fold/cut guides.

use crate::constants::*;
use crate::layout::{GridPosition, LayoutPlan, Panel, Rect, cell_bounds};
use crate::text::{TextMeasure, largest_fitting};

use super::{LineStyle, Stroke, TextDraw};

/// Where a caption sits inside its panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptionAnchor {
    /// Text box vertically centred at this fraction of the panel height
    Fraction(f32),
    /// Background strip bottom this far above the panel's bottom edge
    Bottom(f32),
}

/// Build a caption on an opaque strip, shrunk below `preferred_size` if the
/// text would not fit the panel width. The caption inherits the panel's
/// rotation, pivoting about the panel centre.
pub fn caption(
    panel: &Panel,
    text: &str,
    preferred_size: u32,
    anchor: CaptionAnchor,
    measure: &impl TextMeasure,
) -> TextDraw {
    let available = panel.rect.width - 4.0 * CAPTION_PADDING;
    let size = largest_fitting(1, preferred_size, |s| {
        measure.text_width(text, s as f32) <= available
    })
    .unwrap_or(1) as f32;

    let text_width = measure.text_width(text, size);
    let ascent = HELVETICA_ASCENT * size;
    let descent = HELVETICA_DESCENT * size;

    let baseline = match anchor {
        CaptionAnchor::Fraction(fraction) => {
            let center_y = panel.rect.y + fraction * panel.rect.height;
            center_y - (ascent - descent) / 2.0
        }
        CaptionAnchor::Bottom(offset) => panel.rect.y + offset + CAPTION_PADDING + descent,
    };
    let x = panel.rect.center_x() - text_width / 2.0;

    let background = Rect::new(
        x - CAPTION_PADDING,
        baseline - descent - CAPTION_PADDING,
        text_width + 2.0 * CAPTION_PADDING,
        ascent + descent + 2.0 * CAPTION_PADDING,
    );

    TextDraw {
        text: text.to_string(),
        font_size: size,
        x,
        baseline,
        background: Some(background),
        rotation_pivot: panel.rotated180.then(|| panel.rect.center()),
    }
}

/// Front cover caption (logical page 1) and back cover caption (page 8)
pub fn cover_captions(
    plan: &LayoutPlan,
    cover_text: &str,
    back_text: &str,
    measure: &impl TextMeasure,
) -> Vec<TextDraw> {
    let mut captions = Vec::new();

    if let Some(panel) = plan.panel_for_page(1) {
        captions.push(caption(
            &panel,
            cover_text,
            COVER_CAPTION_FONT_SIZE,
            CaptionAnchor::Fraction(COVER_CAPTION_ANCHOR),
            measure,
        ));
    }

    if let Some(panel) = plan.panel_for_page(plan.capacity()) {
        captions.push(caption(
            &panel,
            back_text,
            BACK_CAPTION_FONT_SIZE,
            CaptionAnchor::Bottom(BACK_CAPTION_OFFSET),
            measure,
        ));
    }

    captions
}

/// Thin outline around every panel
pub fn panel_borders(plan: &LayoutPlan) -> Vec<Stroke> {
    plan.panels()
        .into_iter()
        .map(|panel| Stroke::Rect {
            rect: panel.rect,
            width: PANEL_BORDER_WIDTH,
            gray: PANEL_BORDER_GRAY,
        })
        .collect()
}

/// Fold and cut guides.
///
/// Vertical folds run down the middle of every column gutter. The horizontal
/// centre line is a solid cut across the two middle columns and a dashed
/// fold outside them.
pub fn fold_guides(plan: &LayoutPlan) -> Vec<Stroke> {
    let geometry = &plan.geometry;
    let usable = geometry.usable_area();
    let mut strokes = Vec::new();

    let boundary_x = |col: usize| {
        cell_bounds(geometry, GridPosition::new(0, col)).x - geometry.column_gutter_pt / 2.0
    };

    for col in 1..geometry.cols {
        let x = boundary_x(col);
        strokes.push(Stroke::Line {
            from: (x, usable.y),
            to: (x, usable.top()),
            width: FOLD_LINE_WIDTH,
            style: LineStyle::Dashed,
        });
    }

    if geometry.rows < 2 {
        return strokes;
    }

    let center_y =
        cell_bounds(geometry, GridPosition::new(1, 0)).top() + geometry.row_gutter_pt / 2.0;
    let cut_start = boundary_x(1);
    let cut_end = boundary_x(geometry.cols - 1);

    strokes.push(Stroke::Line {
        from: (usable.x, center_y),
        to: (cut_start, center_y),
        width: FOLD_LINE_WIDTH,
        style: LineStyle::Dashed,
    });
    strokes.push(Stroke::Line {
        from: (cut_start, center_y),
        to: (cut_end, center_y),
        width: CUT_LINE_WIDTH,
        style: LineStyle::Solid,
    });
    strokes.push(Stroke::Line {
        from: (cut_end, center_y),
        to: (usable.right(), center_y),
        width: FOLD_LINE_WIDTH,
        style: LineStyle::Dashed,
    });

    strokes
}
