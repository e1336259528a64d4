//! Inline tags: one pass, one template each.

use bbmd_babel::convert;

#[test]
fn test_bold() {
    assert_eq!(convert("[b]hi[/b]"), "**hi**");
}

#[test]
fn test_italic() {
    assert_eq!(convert("[i]hi[/i]"), "*hi*");
}

#[test]
fn test_underline_is_raw_html() {
    assert_eq!(convert("[u]hi[/u]"), "<u>hi</u>");
}

#[test]
fn test_strikethrough() {
    assert_eq!(convert("[s]gone[/s]"), "~~gone~~");
}

#[test]
fn test_inline_code() {
    assert_eq!(convert("run [code]x = 1[/code] now"), "run `x = 1` now");
}

#[test]
fn test_pre_becomes_fenced_block() {
    assert_eq!(
        convert("[pre]fn main() {\n    run();\n}[/pre]"),
        "```\nfn main() {\n    run();\n}\n```"
    );
}

#[test]
fn test_link_with_text() {
    assert_eq!(
        convert("[url=http://x.com]Click[/url]"),
        "[Click](http://x.com)"
    );
}

#[test]
fn test_bare_link() {
    assert_eq!(convert("[url]http://x.com[/url]"), "<http://x.com>");
}

#[test]
fn test_image() {
    assert_eq!(
        convert("[img]http://x.com/a.png[/img]"),
        "![](http://x.com/a.png)"
    );
}

#[test]
fn test_image_with_alt() {
    assert_eq!(
        convert("[img=Logo]http://x.com/a.png[/img]"),
        "![Logo](http://x.com/a.png)"
    );
}

#[test]
fn test_color_passthrough() {
    assert_eq!(
        convert("[color=red]hi[/color]"),
        r#"<span style="color:red">hi</span>"#
    );
}

#[test]
fn test_size_stripped() {
    assert_eq!(convert("[size=14]hi[/size]"), "hi");
}

#[test]
fn test_alignment() {
    assert_eq!(convert("[center]hi[/center]"), "<center>hi</center>");
    assert_eq!(convert("[left]hi[/left]"), "hi");
    assert_eq!(convert("[right]hi[/right]"), r#"<div align="right">hi</div>"#);
}

#[test]
fn test_tag_names_are_case_insensitive() {
    assert_eq!(convert("[B]hi[/B]"), "**hi**");
    assert_eq!(convert("[b]hi[/B]"), "**hi**");
    assert_eq!(
        convert("[URL=http://x.com]Click[/Url]"),
        "[Click](http://x.com)"
    );
}

#[test]
fn test_several_tags_in_one_line() {
    assert_eq!(
        convert("[b]bold[/b], [i]italic[/i] and [url]http://x.com[/url]"),
        "**bold**, *italic* and <http://x.com>"
    );
}

#[test]
fn test_unmatched_tag_passthrough() {
    assert_eq!(convert("[b]unclosed"), "[b]unclosed");
    assert_eq!(convert("closed only[/i]"), "closed only[/i]");
}

#[test]
fn test_plain_text_is_trimmed() {
    assert_eq!(convert("  hello world \n"), "hello world");
    assert_eq!(convert(""), "");
    assert_eq!(convert(" \n\t "), "");
}

#[test]
fn test_unknown_tags_pass_through() {
    assert_eq!(convert("[spoiler]x[/spoiler]"), "[spoiler]x[/spoiler]");
    assert_eq!(convert("he said [sic]"), "he said [sic]");
}
