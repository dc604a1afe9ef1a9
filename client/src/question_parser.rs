use once_cell::sync::Lazy;
use regex::Regex;

// LF, CRLF, CR and the Unicode line separators (VT, FF, FS, GS, RS, NEL, LS, PS).
static LINE_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

// Unicode whitespace plus the information separators FS, GS, RS and US.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

pub fn is_blank(text: &str) -> bool {
    strip(text).is_empty()
}

/// Splits the text area into one question per line, dropping blank lines.
/// Order is kept because answers are matched to questions by position.
pub fn parse_questions(raw: &str) -> Vec<String> {
    LINE_BREAK_RE
        .split(raw)
        .map(strip)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped_in_order() {
        assert_eq!(parse_questions("A?\n\nB?\n  \nC?"), vec!["A?", "B?", "C?"]);
    }

    #[test]
    fn lines_are_trimmed() {
        assert_eq!(
            parse_questions("  What is covered?  \n\tWhat is excluded?"),
            vec!["What is covered?", "What is excluded?"]
        );
    }

    #[test]
    fn windows_and_unicode_breaks_split() {
        assert_eq!(parse_questions("one\r\ntwo\rthree"), vec!["one", "two", "three"]);
        assert_eq!(parse_questions("one\u{2028}two\u{85}three"), vec!["one", "two", "three"]);
    }

    #[test]
    fn whitespace_only_input_has_no_questions() {
        assert!(parse_questions(" \n\t\n").is_empty());
        assert!(parse_questions("").is_empty());
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn information_separators_are_stripped() {
        assert!(parse_questions("\u{1c}\n\u{1e}\u{1f}").is_empty());
        assert_eq!(parse_questions("\u{1f}A?\u{1f}\u{1d}B?"), vec!["A?", "B?"]);
        assert!(is_blank("\u{1c}\u{1f} "));
    }
}
