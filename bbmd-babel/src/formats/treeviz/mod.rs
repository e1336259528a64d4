//! Treeviz for converted Markdown
//!
//! Shows how a CommonMark renderer will read the converter's output, which is
//! the quickest way to spot a rule that produced text Markdown does not
//! recognise (a quote that did not start on its own line, a list glued to a
//! paragraph).
//!
//! One node per line, two columns of indentation per level:
//!
//! ```text
//! ⧉ Document
//! ├─ ¶ Paragraph
//! │ ├─ 𝐁 Strong
//! │ │ └─ ◦ hi
//! │ └─ ◦  there
//! └─ ☰ List (2 items)
//! ```
//!
//! Labels longer than 30 characters are truncated with `…`.

use super::common::comrak_options;
use super::icons::get_icon;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};

const LABEL_WIDTH: usize = 30;

/// Render the Markdown node tree of `markdown`.
pub fn to_treeviz_str(markdown: &str) -> String {
    let arena = Arena::new();
    let options = comrak_options(true, false);
    let root = parse_document(&arena, markdown, &options);

    let (node_type, label) = describe(root);
    let mut output = format!("{} {}\n", get_icon(node_type), label);
    format_children(root, "", &mut output);
    output
}

fn format_children<'a>(node: &'a AstNode<'a>, prefix: &str, output: &mut String) {
    let children: Vec<_> = node.children().collect();
    let count = children.len();
    for (index, child) in children.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        let (node_type, label) = describe(child);
        output.push_str(&format!(
            "{prefix}{connector} {} {}\n",
            get_icon(node_type),
            truncate(&label)
        ));
        let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
        format_children(child, &child_prefix, output);
    }
}

fn describe<'a>(node: &'a AstNode<'a>) -> (&'static str, String) {
    match &node.data.borrow().value {
        NodeValue::Document => ("Document", "Document".to_string()),
        NodeValue::Heading(heading) => ("Heading", format!("Heading h{}", heading.level)),
        NodeValue::Paragraph => ("Paragraph", "Paragraph".to_string()),
        NodeValue::BlockQuote => ("BlockQuote", "BlockQuote".to_string()),
        NodeValue::List(list) => {
            let kind = match list.list_type {
                comrak::nodes::ListType::Ordered => "OrderedList",
                comrak::nodes::ListType::Bullet => "List",
            };
            (
                "List",
                format!("{kind} ({} items)", node.children().count()),
            )
        }
        NodeValue::Item(_) => ("Item", "Item".to_string()),
        NodeValue::CodeBlock(block) => ("CodeBlock", first_line(&block.literal)),
        NodeValue::HtmlBlock(block) => ("HtmlBlock", first_line(&block.literal)),
        NodeValue::Text(text) => ("Text", text.to_string()),
        NodeValue::SoftBreak => ("SoftBreak", "SoftBreak".to_string()),
        NodeValue::LineBreak => ("LineBreak", "LineBreak".to_string()),
        NodeValue::Emph => ("Emph", "Emph".to_string()),
        NodeValue::Strong => ("Strong", "Strong".to_string()),
        NodeValue::Strikethrough => ("Strikethrough", "Strikethrough".to_string()),
        NodeValue::Code(code) => ("Code", code.literal.clone()),
        NodeValue::HtmlInline(html) => ("HtmlInline", html.to_string()),
        NodeValue::Link(link) => ("Link", link.url.clone()),
        NodeValue::Image(link) => ("Image", link.url.clone()),
        _ => ("Other", "Other".to_string()),
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").to_string()
}

fn truncate(label: &str) -> String {
    if label.chars().count() > LABEL_WIDTH {
        let cut: String = label.chars().take(LABEL_WIDTH - 1).collect();
        format!("{cut}…")
    } else {
        label.to_string()
    }
}
