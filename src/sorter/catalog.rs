//! Catalog construction: one forward walk collecting function spans

use crate::profiles::LanguageProfile;

use super::scanner::find_span_end;

/// One detected function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    /// Extracted identifier, or the `unknown` placeholder.
    pub name: String,
    /// Verbatim text of the span, newline-joined.
    pub full_text: String,
    /// Zero-based first line of the span.
    pub start_line: usize,
    /// Zero-based last line of the span, inclusive. Always >= `start_line`.
    pub end_line: usize,
    /// Leading whitespace of the start line. Not used by reconstruction,
    /// retained for fidelity.
    pub indent: String,
}

/// Walk the document once and collect every function span in source order.
///
/// The cursor advances past each claimed span, so start patterns appearing
/// inside an already-recorded function are never reconsidered. A match
/// whose body never closes before end of document produces no record; the
/// walk resumes on the following line.
///
/// The result is non-overlapping and ordered by `start_line`.
pub fn build_catalog(lines: &[&str], profile: &LanguageProfile) -> Vec<FunctionInfo> {
    let mut catalog = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let Some(start) = profile.match_start(lines[cursor]) else {
            cursor += 1;
            continue;
        };

        match find_span_end(lines, cursor) {
            Some(end) => {
                catalog.push(FunctionInfo {
                    name: start.name,
                    full_text: lines[cursor..=end].join("\n"),
                    start_line: cursor,
                    end_line: end,
                    indent: start.indent,
                });
                cursor = end + 1;
            }
            None => {
                cursor += 1;
            }
        }
    }

    catalog
}

/// Stable sort by name, case-insensitive; ties keep source order.
pub fn sort_catalog(catalog: &mut [FunctionInfo]) {
    catalog.sort_by_cached_key(|f| f.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use crate::language::Language;

    use super::*;

    fn js_catalog(lines: &[&str]) -> Vec<FunctionInfo> {
        build_catalog(lines, LanguageProfile::for_language(Language::JavaScript))
    }

    #[test]
    fn test_collects_in_source_order() {
        let lines = vec![
            "function zeta() {",
            "}",
            "",
            "function alpha() {",
            "}",
        ];
        let catalog = js_catalog(&lines);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "zeta");
        assert_eq!(catalog[0].start_line, 0);
        assert_eq!(catalog[0].end_line, 1);
        assert_eq!(catalog[1].name, "alpha");
        assert_eq!(catalog[1].start_line, 3);
        assert_eq!(catalog[1].end_line, 4);
    }

    #[test]
    fn test_full_text_is_verbatim() {
        let lines = vec!["function a() {", "    return 1;", "}"];
        let catalog = js_catalog(&lines);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].full_text, "function a() {\n    return 1;\n}");
    }

    #[test]
    fn test_single_line_function_recorded() {
        let lines = vec!["function a() { return 1; }"];
        let catalog = js_catalog(&lines);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].start_line, 0);
        assert_eq!(catalog[0].end_line, 0);
    }

    #[test]
    fn test_nested_starts_not_reconsidered() {
        // The inner assignment would match on its own, but it sits inside
        // the outer function's claimed span.
        let lines = vec![
            "function outer() {",
            "  inner = () => {",
            "  };",
            "}",
            "function after() {",
            "}",
        ];
        let catalog = js_catalog(&lines);
        let names: Vec<&str> = catalog.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "after"]);
    }

    #[test]
    fn test_unterminated_function_not_recorded() {
        let lines = vec!["function broken() {", "  return 1;"];
        let catalog = js_catalog(&lines);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty_catalog() {
        let lines = vec!["// just a comment", "const x = 1;", ""];
        assert!(js_catalog(&lines).is_empty());
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let lines = vec![
            "function a() {",
            "}",
            "function b() {",
            "}",
            "function c() {",
            "}",
        ];
        let catalog = js_catalog(&lines);
        assert_eq!(catalog.len(), 3);
        for pair in catalog.windows(2) {
            assert!(pair[0].end_line < pair[1].start_line);
        }
    }

    #[test]
    fn test_indent_recorded() {
        let lines = vec!["class A {", "    public function m() {", "    }", "}"];
        let catalog = build_catalog(&lines, LanguageProfile::for_language(Language::Php));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].indent, "    ");
    }

    #[test]
    fn test_sort_catalog_case_insensitive() {
        let lines = vec![
            "function Banana() {",
            "}",
            "function apple() {",
            "}",
            "function Cherry() {",
            "}",
        ];
        let mut catalog = js_catalog(&lines);
        sort_catalog(&mut catalog);
        let names: Vec<&str> = catalog.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_catalog_stable_on_ties() {
        let lines = vec![
            "function dup() {",
            "  return 1;",
            "}",
            "function DUP() {",
            "  return 2;",
            "}",
        ];
        let mut catalog = js_catalog(&lines);
        sort_catalog(&mut catalog);
        assert_eq!(catalog[0].name, "dup");
        assert_eq!(catalog[1].name, "DUP");
    }
}
