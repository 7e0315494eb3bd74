use log::debug;

use crate::constants::{BACK_TEXT_MARGIN, HELVETICA_ASCENT, HELVETICA_DESCENT};
use crate::layout::PageGeometry;
use crate::text::{TextFit, TextMeasure, fit_text};

use super::{GeneratedPage, TextDraw};

/// Build the back-text page: the text is auto-fit to the page inset by
/// `BACK_TEXT_MARGIN`, left aligned and vertically centred.
pub fn back_text_page(
    geometry: &PageGeometry,
    text: &str,
    measure: &impl TextMeasure,
) -> (GeneratedPage, TextFit) {
    let area = geometry.page_rect().inset(BACK_TEXT_MARGIN);
    let fit = fit_text(text, area.width, area.height, measure);

    debug!(
        "Back text: {} lines at {}pt (line height {}){}",
        fit.lines.len(),
        fit.font_size,
        fit.line_height,
        if fit.truncated { ", truncated" } else { "" }
    );

    let size = fit.font_size as f32;
    let line_height = fit.line_height as f32;
    let top = area.y + (area.height + fit.block_height()) / 2.0;
    // Baseline offset that centres the glyph box within its line slot
    let inner = (line_height + (HELVETICA_ASCENT - HELVETICA_DESCENT) * size) / 2.0;

    let mut page = GeneratedPage::new(geometry.page_width_pt, geometry.page_height_pt);
    page.texts = fit
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| TextDraw {
            text: line.clone(),
            font_size: size,
            x: area.x,
            baseline: top - i as f32 * line_height - inner,
            background: None,
            rotation_pivot: None,
        })
        .collect();

    (page, fit)
}
