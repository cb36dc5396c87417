//! Text Module - Word wrapping and truncation.
//!
//! Wrapping works against a caller-supplied measure function so the same
//! logic serves any backend: modals wrap their message through
//! `Surface::measure_text`, tests wrap through a fixed-width closure.

// =============================================================================
// WORD WRAP
// =============================================================================

/// Wrap `text` into lines no wider than `max_width`.
///
/// Breaks at whitespace; a single word wider than `max_width` gets its
/// own line rather than being split mid-word. Explicit `\n` always
/// starts a new line. Empty input produces no lines.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    if text.is_empty() {
        return vec![];
    }
    if max_width <= 0.0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Truncate `text` to `max_width`, appending an ellipsis when cut.
///
/// Returns the input unchanged if it already fits.
pub fn truncate_text<F>(text: &str, max_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    if measure(text) <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "\u{2026}";
    let mut out = String::new();
    for c in text.chars() {
        let mut candidate = out.clone();
        candidate.push(c);
        candidate.push_str(ELLIPSIS);
        if measure(&candidate) > max_width {
            break;
        }
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // 10px per char makes widths easy to reason about
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_text("", 100.0, measure).is_empty());
    }

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap_text("hello world", 200.0, measure), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        // "hello world again" at 110px: "hello", "world", "again" each 50px,
        // "hello world" = 110px fits, adding "again" would be 170px
        let lines = wrap_text("hello world again", 110.0, measure);
        assert_eq!(lines, vec!["hello world", "again"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = wrap_text("a extraordinarily b", 80.0, measure);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_explicit_newlines() {
        let lines = wrap_text("one\ntwo three", 500.0, measure);
        assert_eq!(lines, vec!["one", "two three"]);
    }

    #[test]
    fn test_zero_width_keeps_lines_intact() {
        let lines = wrap_text("a b c", 0.0, measure);
        assert_eq!(lines, vec!["a b c"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("short", 100.0, measure), "short");

        let cut = truncate_text("hello world", 60.0, measure);
        assert!(cut.ends_with('\u{2026}'));
        assert!(measure(&cut) <= 60.0);
    }
}
