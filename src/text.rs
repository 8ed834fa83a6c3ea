//! Greedy word wrapping for the now-playing panel.
//!
//! Titles can be arbitrarily long, so input past `TRUNCATE_AT` chars is cut
//! and suffixed with `ELLIPSIS` before it is split into lines.

/// Inputs longer than this (in chars) are truncated before wrapping.
pub const TRUNCATE_AT: usize = 75;
/// Appended to truncated input.
pub const ELLIPSIS: &str = "...";

/// Wrap `text` on spaces into lines of at most `max_len` chars.
pub fn wrap_words(text: &str, max_len: usize) -> Vec<String> {
    wrap(text, max_len, ' ')
}

/// Wrap `text` into lines of at most `max_len` chars, breaking after the last
/// `delimiter` in each window.
///
/// Delimiters stay at the end of the line they close, so joining the result
/// gives back the (possibly truncated) input. A window without a usable
/// delimiter is hard-broken at `max_len`.
pub fn wrap(text: &str, max_len: usize, delimiter: char) -> Vec<String> {
    let max_len = max_len.max(1);

    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() > TRUNCATE_AT {
        chars.truncate(TRUNCATE_AT);
        chars.extend(ELLIPSIS.chars());
    }

    let len = chars.len();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < len {
        let window_end = start + max_len - 1;
        let end = if window_end >= len - 1 {
            // Everything left fits on this line.
            len - 1
        } else {
            let mut brk = window_end;
            while brk > start && chars[brk] != delimiter {
                brk -= 1;
            }
            // A break at the window start would produce an empty-looking line.
            if brk == start { window_end } else { brk }
        };

        lines.push(chars[start..=end].iter().collect());
        start = end + 1;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_lines() {
        for n in [1, 5, 20, 100] {
            assert!(wrap_words("", n).is_empty());
        }
    }

    #[test]
    fn short_input_is_a_single_line() {
        assert_eq!(wrap_words("Hello", 20), vec!["Hello".to_string()]);
        assert_eq!(wrap_words("exactly twenty chars", 20), vec!["exactly twenty chars"]);
    }

    #[test]
    fn breaks_after_last_space_in_window() {
        let lines = wrap_words("Despite Everything, It's Still You", 20);
        assert_eq!(lines, vec!["Despite Everything, ", "It's Still You"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.concat(), "Despite Everything, It's Still You");
    }

    #[test]
    fn hard_breaks_when_no_delimiter_fits() {
        let lines = wrap_words("abcdefghijklmnopqrstuvwxyz", 10);
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "uvwxyz"]);
    }

    #[test]
    fn delimiter_at_window_start_is_not_a_break_point() {
        // Second window starts on the space; the only delimiter is at its start.
        let lines = wrap("abcd efghijklmn", 4, ' ');
        assert_eq!(lines, vec!["abcd", " efg", "hijk", "lmn"]);
    }

    #[test]
    fn long_input_is_truncated_with_ellipsis() {
        let text = "x".repeat(120);
        let lines = wrap_words(&text, 30);
        let joined = lines.concat();
        assert_eq!(joined.chars().count(), TRUNCATE_AT + ELLIPSIS.len());
        assert!(joined.ends_with(ELLIPSIS));
        assert_eq!(&joined[..TRUNCATE_AT], &text[..TRUNCATE_AT]);
    }

    #[test]
    fn exactly_limit_is_not_truncated() {
        let text = "y".repeat(TRUNCATE_AT);
        assert_eq!(wrap_words(&text, 100), vec![text.clone()]);
    }

    #[test]
    fn no_line_exceeds_max_len() {
        let inputs = [
            "The quick brown fox jumps over the lazy dog",
            "  leading and  double  spaces ",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z a b c d e f g h i j k l m n o",
            "Ünïcödé wörds wïth äccents ánd mörë",
        ];
        for text in inputs {
            for max in 1..=25 {
                for line in wrap_words(text, max) {
                    assert!(line.chars().count() <= max, "{line:?} longer than {max}");
                }
            }
        }
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrap_words("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn custom_delimiter() {
        assert_eq!(wrap("alpha-beta-gamma", 11, '-'), vec!["alpha-beta-", "gamma"]);
    }
}
