use crate::constants::{LINE_SPACING, MAX_FONT_SIZE, MIN_FONT_SIZE};

use super::{TextMeasure, wrap_text};

/// A block of wrapped text sized to fit a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct TextFit {
    pub font_size: u32,
    /// Baseline-to-baseline distance
    pub line_height: u32,
    pub lines: Vec<String>,
    /// True when even the smallest size overflowed and lines were dropped.
    ///
    /// Dropped lines include any single word wider than the box at the
    /// smallest size, so every kept line still fits the width.
    pub truncated: bool,
}

impl TextFit {
    pub fn block_height(&self) -> f32 {
        (self.lines.len() as u32 * self.line_height) as f32
    }
}

/// Line height for a font size: `round(size * LINE_SPACING)`
pub fn line_height_for(font_size: u32) -> u32 {
    (font_size as f32 * LINE_SPACING).round() as u32
}

/// Binary search for the largest size in `[lo, hi]` for which `fits` holds.
///
/// `fits` must be monotone: true up to some size and false above it.
pub fn largest_fitting(lo: u32, hi: u32, mut fits: impl FnMut(u32) -> bool) -> Option<u32> {
    let (mut lo, mut hi) = (lo as i64, hi as i64);
    let mut best = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if fits(mid as u32) {
            best = Some(mid as u32);
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    best
}

/// Wrap at `font_size` and return the lines only if the block fits.
fn layout_at(
    text: &str,
    font_size: u32,
    max_width: f32,
    max_height: f32,
    measure: &impl TextMeasure,
) -> Option<Vec<String>> {
    let size = font_size as f32;
    let lines = wrap_text(text, max_width, size, measure);

    let block_height = (lines.len() as u32 * line_height_for(font_size)) as f32;
    if block_height > max_height {
        return None;
    }
    if lines
        .iter()
        .any(|line| measure.text_width(line, size) > max_width)
    {
        return None;
    }

    Some(lines)
}

/// Choose the largest font size in the default range whose wrapped text fits
/// `max_width` x `max_height`.
pub fn fit_text(
    text: &str,
    max_width: f32,
    max_height: f32,
    measure: &impl TextMeasure,
) -> TextFit {
    fit_text_in_range(
        text,
        max_width,
        max_height,
        MIN_FONT_SIZE,
        MAX_FONT_SIZE,
        measure,
    )
}

/// Same as [`fit_text`] with explicit size bounds.
///
/// If nothing in range fits, the minimum size is used: lines wider than
/// `max_width` are dropped and the rest cut down to the rows that fit
/// vertically.
pub fn fit_text_in_range(
    text: &str,
    max_width: f32,
    max_height: f32,
    min_size: u32,
    max_size: u32,
    measure: &impl TextMeasure,
) -> TextFit {
    let fitted = largest_fitting(min_size, max_size, |size| {
        layout_at(text, size, max_width, max_height, measure).is_some()
    })
    .and_then(|size| {
        layout_at(text, size, max_width, max_height, measure).map(|lines| (size, lines))
    });

    if let Some((font_size, lines)) = fitted {
        return TextFit {
            font_size,
            line_height: line_height_for(font_size),
            lines,
            truncated: false,
        };
    }

    let font_size = min_size;
    let line_height = line_height_for(font_size);
    let mut lines = wrap_text(text, max_width, font_size as f32, measure);
    lines.retain(|line| measure.text_width(line, font_size as f32) <= max_width);
    let rows = if line_height == 0 {
        lines.len()
    } else {
        (max_height / line_height as f32).floor().max(0.0) as usize
    };
    lines.truncate(rows);

    TextFit {
        font_size,
        line_height,
        lines,
        truncated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Helvetica;

    struct Monospace;

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size
        }
    }

    #[test]
    fn test_line_height_rounding() {
        assert_eq!(line_height_for(10), 12);
        assert_eq!(line_height_for(72), 86);
        assert_eq!(line_height_for(6), 7);
        assert_eq!(line_height_for(13), 16);
    }

    #[test]
    fn test_largest_fitting_finds_boundary() {
        for limit in 6..=72 {
            assert_eq!(largest_fitting(6, 72, |s| s <= limit), Some(limit));
        }
        assert_eq!(largest_fitting(6, 72, |_| false), None);
        assert_eq!(largest_fitting(6, 72, |_| true), Some(72));
        assert_eq!(largest_fitting(10, 9, |_| true), None);
    }

    #[test]
    fn test_largest_fitting_call_count() {
        let mut calls = 0;
        largest_fitting(1, 1024, |s| {
            calls += 1;
            s <= 700
        });
        assert!(calls <= 11, "{calls} calls");
    }

    #[test]
    fn test_empty_text_takes_max_size() {
        let fit = fit_text("", 720.0, 540.0, &Helvetica);
        assert_eq!(fit.font_size, MAX_FONT_SIZE);
        assert_eq!(fit.lines, vec![String::new()]);
        assert!(!fit.truncated);
    }

    #[test]
    fn test_single_word_limited_by_width() {
        // 5 chars: 5 * size <= 100 => size 20
        let fit = fit_text("hello", 100.0, 1000.0, &Monospace);
        assert_eq!(fit.font_size, 20);
        assert_eq!(fit.lines, vec!["hello"]);
    }

    #[test]
    fn test_height_limits_size() {
        // One line at size s needs round(1.2 s) <= 30 => s <= 25
        let fit = fit_text("a", 1000.0, 30.0, &Monospace);
        assert_eq!(fit.font_size, 25);
        assert_eq!(fit.line_height, 30);
    }

    #[test]
    fn test_chosen_size_is_maximal() {
        let text = "tiny folded books are a joy to hand out at a party";
        let fit = fit_text(text, 200.0, 120.0, &Helvetica);
        assert!(!fit.truncated);
        assert!(fit.font_size < MAX_FONT_SIZE);

        // One size up no longer fits
        assert!(layout_at(text, fit.font_size + 1, 200.0, 120.0, &Helvetica).is_none());
    }

    #[test]
    fn test_overflow_falls_back_to_min_and_truncates() {
        let text = "word ".repeat(500);
        let fit = fit_text(&text, 100.0, 50.0, &Helvetica);
        assert!(fit.truncated);
        assert_eq!(fit.font_size, MIN_FONT_SIZE);
        assert!(fit.block_height() <= 50.0);
        assert!(!fit.lines.is_empty());
    }

    #[test]
    fn test_overwide_word_is_dropped_at_min_size() {
        // 40 chars at 6pt is 240 wide, far past the 100pt box
        let text = format!("fits {} also fits", "w".repeat(40));
        let fit = fit_text(&text, 100.0, 200.0, &Monospace);
        assert!(fit.truncated);
        assert_eq!(fit.font_size, MIN_FONT_SIZE);
        assert_eq!(fit.lines, vec!["fits".to_string(), "also fits".to_string()]);
        for line in &fit.lines {
            assert!(Monospace.text_width(line, fit.font_size as f32) <= 100.0);
        }
    }
}
