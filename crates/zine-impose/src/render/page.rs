//! Content stream generation for composed pages

use crate::compose::{GeneratedPage, ImageDraw, LineStyle, Stroke, TextDraw};
use crate::constants::{CAPTION_BACKGROUND_GRAY, FOLD_DASH_PATTERN};

use super::{FONT_RESOURCE, image_name};

/// Build the content stream for one page: images first, then strokes, then
/// text on top.
pub fn page_content(page: &GeneratedPage) -> String {
    let mut ops = String::new();

    for draw in &page.images {
        ops.push_str(&image_command(draw));
    }
    for stroke in &page.strokes {
        ops.push_str(&stroke_command(stroke));
    }
    for text in &page.texts {
        ops.push_str(&text_command(text));
    }

    ops
}

/// Encode text for a WinAnsi Helvetica string.
///
/// Printable Latin-1 passes through as-is; anything else becomes `?`.
pub fn text_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x20..=0x7E | 0xA0..=0xFF => ch as u32 as u8,
            _ => b'?',
        })
        .collect()
}

// =============================================================================
// Helper Functions
// =============================================================================

fn image_command(draw: &ImageDraw) -> String {
    let [a, b, c, d, e, f] = draw.transform().to_array();
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a,
        b,
        c,
        d,
        e,
        f,
        image_name(draw.image_index)
    )
}

fn stroke_command(stroke: &Stroke) -> String {
    match stroke {
        Stroke::Rect { rect, width, gray } => format!(
            "q {} w {} G [] 0 d {} {} {} {} re S Q\n",
            width, gray, rect.x, rect.y, rect.width, rect.height
        ),
        Stroke::Line {
            from,
            to,
            width,
            style,
        } => {
            let dash = match style {
                LineStyle::Solid => "[] 0 d".to_string(),
                LineStyle::Dashed => {
                    format!("[{} {}] 0 d", FOLD_DASH_PATTERN[0], FOLD_DASH_PATTERN[1])
                }
            };
            format!(
                "q {} w 0 G {} {} {} m {} {} l S Q\n",
                width, dash, from.0, from.1, to.0, to.1
            )
        }
    }
}

fn text_command(text: &TextDraw) -> String {
    let mut ops = String::from("q\n");

    if let Some(transform) = text.transform() {
        let [a, b, c, d, e, f] = transform.to_array();
        ops.push_str(&format!("{} {} {} {} {} {} cm\n", a, b, c, d, e, f));
    }

    if let Some(strip) = text.background {
        ops.push_str(&format!(
            "{} g {} {} {} {} re f\n",
            CAPTION_BACKGROUND_GRAY, strip.x, strip.y, strip.width, strip.height
        ));
    }

    ops.push_str(&format!(
        "0 g BT /{} {} Tf {} {} Td <{}> Tj ET\nQ\n",
        FONT_RESOURCE,
        text.font_size,
        text.x,
        text.baseline,
        hex(&text_bytes(&text.text))
    ));

    ops
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
