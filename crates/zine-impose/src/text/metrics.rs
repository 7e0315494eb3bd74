//! Text width measurement
//!
//! Wrapping and fitting only ever ask one question: how wide is this string
//! at this size? Anything that can answer it can drive the layout.

/// Width measurement capability used by word wrap and auto-fit
pub trait TextMeasure {
    /// Rendered width of `text` at `font_size`, in points
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        (**self).text_width(text, font_size)
    }
}

/// Advance widths of the built-in Helvetica font (AFM units per 1000 em)
/// for the printable ASCII range 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Glyphs outside the table are measured at a full em so a line can only
/// come out narrower than measured, never wider.
const FALLBACK_WIDTH: u16 = 1000;

/// Metrics for the standard Type1 Helvetica used in the output
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

impl Helvetica {
    fn advance(ch: char) -> u16 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            HELVETICA_WIDTHS[(code - 0x20) as usize]
        } else {
            FALLBACK_WIDTH
        }
    }
}

impl TextMeasure for Helvetica {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| Helvetica::advance(ch) as u32).sum();
        units as f32 / 1000.0 * font_size
    }
}
