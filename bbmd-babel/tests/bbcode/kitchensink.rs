//! Whole-post conversions from fixtures.

use crate::common::read_fixture;
use bbmd_babel::{convert, convert_with_trace, has_markup};
use insta::assert_snapshot;

#[test]
fn test_kitchensink_post() {
    let source = read_fixture("kitchensink.bbcode");
    assert!(has_markup(&source));

    let markdown = convert(&source);
    assert_snapshot!(markdown, @r"
    # Welcome back

    It has been a **long** time. Here is what *changed*:

    - New [theme](https://example.com/theme)
    - Comments are ~~closed~~ open again


    > **Anna:**
    > Great to see you posting again!
    > Keep it up.

    <center>![Sunset](https://example.com/sunset.jpg)</center>
    ");
}

#[test]
fn test_kitchensink_trace() {
    let source = read_fixture("kitchensink.bbcode");
    let (markdown, trace) = convert_with_trace(&source);
    assert_eq!(markdown, convert(&source));

    let fired: Vec<_> = trace.iter().map(|hit| hit.rule).collect();
    assert_eq!(
        fired,
        vec![
            "bold",
            "italic",
            "strikethrough",
            "link",
            "image-alt",
            "quote-author",
            "list",
            "heading-1",
            "center",
        ]
    );
    assert!(trace.iter().all(|hit| hit.matches == 1));
}

#[test]
fn test_plain_post() {
    let source = read_fixture("plain.bbcode");
    assert!(!has_markup(&source));
    assert_eq!(convert(&source), "Just a short note, no markup at all.");
}
