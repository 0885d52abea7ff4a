//! Boundary scanning: computing where a detected function ends
//!
//! Given the line a function starts on, the scanner walks forward tracking
//! brace depth over raw characters. Braces inside string or comment
//! literals are counted like any other brace; this is a lexical heuristic,
//! not a parser.

/// Find the inclusive end line of the function starting at `start`.
///
/// The first `{` opens the body; the span ends on the line where the brace
/// depth returns to zero. A line containing a `;` before any brace has
/// opened ends the span there instead, which covers bodiless signatures
/// (interface methods, abstract declarations).
///
/// Returns `None` when the document ends before either condition is met:
/// the declaration never closed, so the caller should not record a span
/// for it. `Some(end)` can equal `start` for a function that opens and
/// closes its body on one line.
pub fn find_span_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut opened = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => {
                    depth -= 1;
                    if opened && depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }

        if !opened && line.contains(';') {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_body() {
        let lines = vec!["function a() {", "  return 1;", "}"];
        assert_eq!(find_span_end(&lines, 0), Some(2));
    }

    #[test]
    fn test_single_line_body() {
        let lines = vec!["function a() { return 1; }"];
        assert_eq!(find_span_end(&lines, 0), Some(0));
    }

    #[test]
    fn test_nested_braces() {
        let lines = vec![
            "function a() {",
            "  if (x) {",
            "    while (y) {",
            "    }",
            "  }",
            "}",
            "function b() {}",
        ];
        assert_eq!(find_span_end(&lines, 0), Some(5));
    }

    #[test]
    fn test_semicolon_terminated_signature() {
        let lines = vec!["    void doWork(int n);", "    void other() {", "    }"];
        assert_eq!(find_span_end(&lines, 0), Some(0));
    }

    #[test]
    fn test_signature_spanning_lines_before_brace() {
        let lines = vec!["function a(", "  x,", "  y", ") {", "  return x;", "}"];
        assert_eq!(find_span_end(&lines, 0), Some(5));
    }

    #[test]
    fn test_unterminated_body_returns_none() {
        let lines = vec!["function a() {", "  return 1;"];
        assert_eq!(find_span_end(&lines, 0), None);
    }

    #[test]
    fn test_empty_input_returns_none() {
        let lines: Vec<&str> = vec![];
        assert_eq!(find_span_end(&lines, 0), None);
    }

    #[test]
    fn test_starts_mid_document() {
        let lines = vec!["const x = 1;", "function a() {", "}", "const y = 2;"];
        assert_eq!(find_span_end(&lines, 1), Some(2));
    }

    #[test]
    fn test_brace_in_string_counts() {
        // Raw-character counting: the `{` inside the string literal opens a
        // level, so the span runs one closing brace further than the real
        // function body.
        let lines = vec![
            "function a() {",
            "  return \"{\";",
            "}",
            "}",
        ];
        assert_eq!(find_span_end(&lines, 0), Some(3));
    }

    #[test]
    fn test_semicolon_after_open_brace_does_not_terminate() {
        let lines = vec!["function a() {", "  let x = 1;", "  return x;", "}"];
        assert_eq!(find_span_end(&lines, 0), Some(3));
    }
}
