//! Cleanup for process output that is about to be shown to a user or stored.

/// Strip control characters and normalize boundary whitespace.
///
/// - Control characters (C0, DEL and C1) are removed, except `\t`, `\n` and `\r`.
/// - All leading whitespace is removed.
/// - Only a trailing run of `\n`/`\r` is removed; trailing spaces and tabs
///   are kept because fixed-width output depends on them.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| !is_stripped_control(*c)).collect();
    cleaned
        .trim_start()
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

/// [`sanitize`] for values that may be absent. `None` yields an empty string.
pub fn sanitize_opt(text: Option<&str>) -> String {
    text.map(sanitize).unwrap_or_default()
}

fn is_stripped_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_asymmetrically() {
        assert_eq!(sanitize("  Hello World  \t\n"), "Hello World  \t");
    }

    #[test]
    fn empty_and_absent_inputs() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize_opt(None), "");
        assert_eq!(sanitize_opt(Some(" x\n")), "x");
    }

    #[test]
    fn removes_control_bytes_but_keeps_layout_whitespace() {
        let input = "a\u{0}b\u{7}c\td\u{1b}[31me\u{7f}\r\nf";
        assert_eq!(sanitize(input), "abc\td[31me\r\nf");
    }

    #[test]
    fn removes_c1_controls() {
        assert_eq!(sanitize("a\u{9b}31mb\u{85}c\u{90}"), "a31mbc");
    }

    #[test]
    fn leading_whitespace_of_any_kind_is_trimmed() {
        assert_eq!(sanitize("\n\r\t \u{a0}value"), "value");
    }

    #[test]
    fn trailing_newline_run_is_trimmed_through_mixed_endings() {
        assert_eq!(sanitize("done\r\n\n\r\n"), "done");
        assert_eq!(sanitize("done \n\t\n"), "done \n\t");
    }

    #[test]
    fn control_bytes_are_removed_before_trimming() {
        assert_eq!(sanitize("\u{1}  start"), "start");
        assert_eq!(sanitize("end\n\u{0}"), "end");
    }

    #[test]
    fn only_control_characters_yields_empty() {
        assert_eq!(sanitize("\u{0}\u{1}\u{2}\n\r"), "");
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(sanitize("héllo wörld ✓\n"), "héllo wörld ✓");
    }
}
