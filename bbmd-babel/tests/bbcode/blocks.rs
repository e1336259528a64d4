//! Block constructs: quotes, lists and headings reflow their lines.

use bbmd_babel::convert;

#[test]
fn test_simple_quote_multi_line() {
    let out = convert("[quote]line1\nline2[/quote]");
    assert_eq!(out, "> line1\n> line2");
    for line in out.lines().filter(|line| !line.is_empty()) {
        assert!(line.starts_with("> "), "unquoted line: {line:?}");
    }
}

#[test]
fn test_quote_starts_on_its_own_line() {
    assert_eq!(
        convert("Intro[quote]x[/quote]after"),
        "Intro\n> x\nafter"
    );
}

#[test]
fn test_quote_body_is_trimmed() {
    assert_eq!(convert("[quote]\n  hi  \n[/quote]"), "> hi");
}

#[test]
fn test_attributed_quote() {
    let out = convert("[quote=Bob]hi[/quote]");
    assert_eq!(out, "> **Bob:**\n> hi");

    let lines: Vec<_> = out.lines().collect();
    let author = lines
        .iter()
        .position(|line| line.contains("> **Bob:**"))
        .expect("author line");
    assert_eq!(lines[author + 1], "> hi");
}

#[test]
fn test_attributed_quote_multi_line() {
    assert_eq!(
        convert("[quote=Anna]one\ntwo[/quote]"),
        "> **Anna:**\n> one\n> two"
    );
}

#[test]
fn test_unordered_list() {
    let out = convert("[list][*]a[*]b[/list]");
    assert_eq!(out, "- a\n- b");
    let lines: Vec<_> = out.lines().collect();
    assert!(lines.contains(&"- a"));
    assert!(lines.contains(&"- b"));
}

#[test]
fn test_unordered_list_over_lines() {
    assert_eq!(
        convert("[list]\n[*]one\n[*]two\n[/list]"),
        "- one\n- two"
    );
}

#[test]
fn test_ordered_list() {
    let out = convert("[list=1][*]a[*]b[/list]");
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines, vec!["1. a", "2. b"]);
}

#[test]
fn test_ordered_list_numbers_consecutively() {
    assert_eq!(
        convert("[list=1][*]a[*]b[*]c[/list]"),
        "1. a\n2. b\n3. c"
    );
}

#[test]
fn test_list_keeps_text_before_first_item() {
    assert_eq!(
        convert("[list]Groceries:[*]milk[*]eggs[/list]"),
        "Groceries:\n- milk\n- eggs"
    );
}

#[test]
fn test_empty_list_disappears() {
    assert_eq!(convert("[list][/list]"), "");
    assert_eq!(convert("[list][*] [*][/list]"), "");
}

#[test]
fn test_inline_tags_inside_list_items() {
    assert_eq!(
        convert("[list][*][b]a[/b][*][url=http://x.com]x[/url][/list]"),
        "- **a**\n- [x](http://x.com)"
    );
}

#[test]
fn test_heading_levels() {
    assert!(convert("[h1]Title[/h1]").lines().any(|l| l == "# Title"));
    assert!(convert("[h2]Title[/h2]").lines().any(|l| l == "## Title"));
    assert!(convert("[h3]Title[/h3]").lines().any(|l| l == "### Title"));
}

#[test]
fn test_heading_gets_its_own_line() {
    assert_eq!(convert("Intro[h2]Sub[/h2]Body"), "Intro\n## Sub\nBody");
}

#[test]
fn test_unknown_heading_level_passes_through() {
    assert_eq!(convert("[h4]x[/h4]"), "[h4]x[/h4]");
}
