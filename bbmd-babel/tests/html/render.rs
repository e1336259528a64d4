use bbmd_babel::formats::html::{render_html, HtmlOptions};
use bbmd_babel::FormatRegistry;
use std::collections::HashMap;

fn bbcode_to_html(source: &str) -> String {
    FormatRegistry::default()
        .convert(source, "bbcode", "html", &HashMap::new())
        .expect("bbcode converts to html")
}

#[test]
fn test_inline_markup_renders() {
    let html = bbcode_to_html("[b]a[/b] [i]b[/i] [s]c[/s] [code]d[/code]");
    assert!(html.contains("<strong>a</strong>"));
    assert!(html.contains("<em>b</em>"));
    assert!(html.contains("<del>c</del>"));
    assert!(html.contains("<code>d</code>"));
}

#[test]
fn test_raw_html_constructs_survive() {
    let html = bbcode_to_html("[u]under[/u] [color=red]red[/color]");
    assert!(html.contains("<u>under</u>"));
    assert!(html.contains(r#"<span style="color:red">red</span>"#));
}

#[test]
fn test_links_and_images_render() {
    let html = bbcode_to_html("[url]http://x.com[/url] [img=Logo]http://x.com/a.png[/img]");
    assert!(html.contains(r#"<a href="http://x.com">http://x.com</a>"#));
    assert!(html.contains(r#"src="http://x.com/a.png""#));
    assert!(html.contains(r#"alt="Logo""#));
}

#[test]
fn test_quote_renders_as_blockquote() {
    let html = bbcode_to_html("[quote=Bob]hi[/quote]");
    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<strong>Bob:</strong>"));
}

#[test]
fn test_lists_render() {
    let unordered = bbcode_to_html("[list][*]a[*]b[/list]");
    assert!(unordered.contains("<ul>"));
    assert!(unordered.contains("<li>a</li>"));

    let ordered = bbcode_to_html("[list=1][*]a[*]b[/list]");
    assert!(ordered.contains("<ol>"));
    assert!(ordered.contains("<li>b</li>"));
}

#[test]
fn test_heading_renders() {
    assert!(bbcode_to_html("[h2]Sub[/h2]").contains("<h2>Sub</h2>"));
}

#[test]
fn test_render_without_raw_html() {
    let options = HtmlOptions {
        allow_raw_html: false,
        hardbreaks: false,
    };
    let html = render_html("<u>x</u>", options);
    assert!(!html.contains("<u>"));
}
