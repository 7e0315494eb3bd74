use super::TextMeasure;

/// Greedy word wrap.
///
/// Words are whitespace-delimited and packed onto a line while the joined
/// line still measures within `max_width`. A word that is wider than
/// `max_width` on its own gets a line to itself; words are never broken.
/// Empty or all-whitespace input yields a single empty line.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    measure: &impl TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure.text_width(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Helvetica;

    /// Every character is exactly one em wide
    struct Monospace;

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size
        }
    }

    #[test]
    fn test_empty_is_one_blank_line() {
        assert_eq!(wrap_text("", 100.0, 10.0, &Monospace), vec![String::new()]);
        assert_eq!(wrap_text(" \n\t ", 100.0, 10.0, &Monospace), vec![String::new()]);
    }

    #[test]
    fn test_greedy_packing() {
        // 10 chars per line at size 1
        let lines = wrap_text("aaa bbb ccc ddd", 10.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        let lines = wrap_text("aaaa bbbbb", 10.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["aaaa bbbbb"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = wrap_text("hi extraordinarily ok", 5.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["hi", "extraordinarily", "ok"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let lines = wrap_text("  one \n\n two\tthree  ", 100.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn test_lines_within_width() {
        let text = "The quick brown fox jumps over the lazy dog while the photographer \
                    folds another tiny booklet out of a single sheet of paper";
        let measure = Helvetica;
        for size in [8.0, 12.0, 20.0] {
            for line in wrap_text(text, 150.0, size, &measure) {
                assert!(measure.text_width(&line, size) <= 150.0, "{line:?} at {size}");
            }
        }
    }
}
