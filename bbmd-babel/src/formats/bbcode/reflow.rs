//! Block rewrites that need more than a replacement template
//!
//! Quotes and lists change the line structure of their body, so they are
//! built from the captures. Each block is surrounded by newlines so it
//! starts on a line of its own; the final trim removes the ones at the edges.

use regex::Captures;

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

pub(crate) fn quote(caps: &Captures<'_>) -> String {
    format!("\n{}\n", quote_lines(group(caps, 1)))
}

pub(crate) fn attributed_quote(caps: &Captures<'_>) -> String {
    let author = group(caps, 1).trim();
    format!("\n> **{author}:**\n{}\n", quote_lines(group(caps, 2)))
}

fn quote_lines(body: &str) -> String {
    body.trim()
        .lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn unordered_list(caps: &Captures<'_>) -> String {
    let (lead, items) = split_items(group(caps, 1));
    let lines = items.into_iter().map(|item| format!("- {item}"));
    block(lead, lines)
}

pub(crate) fn ordered_list(caps: &Captures<'_>) -> String {
    let (lead, items) = split_items(group(caps, 1));
    let lines = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {item}", index + 1));
    block(lead, lines)
}

/// Split a list body on `[*]`. Whatever precedes the first marker is
/// returned separately; blank items are dropped.
fn split_items(body: &str) -> (Option<&str>, Vec<&str>) {
    let mut segments = body.split("[*]");
    let lead = segments
        .next()
        .map(str::trim)
        .filter(|text| !text.is_empty());
    let items = segments
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();
    (lead, items)
}

fn block(lead: Option<&str>, lines: impl Iterator<Item = String>) -> String {
    let mut out = String::from("\n");
    if let Some(lead) = lead {
        out.push_str(lead);
        out.push('\n');
    }
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
