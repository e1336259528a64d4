//! The BBCode substitution table
//!
//! Every rule is one regex pass over the whole text. Rules run in table
//! order and each pass finishes before the next starts, so a later rule sees
//! the output of the earlier ones. Patterns are non-greedy, case-insensitive
//! and let `.` match newlines.

use super::reflow;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// What a rule writes in place of a match.
pub(crate) enum Action {
    /// `regex` replacement template (`${1}` refers to the first group).
    Template(&'static str),
    /// Builds the replacement from the captures (multi-line constructs).
    Reflow(fn(&Captures<'_>) -> String),
}

pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub action: Action,
}

impl Rule {
    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Rule {
            name,
            pattern: compile(name, pattern),
            action: Action::Template(template),
        }
    }

    fn reflow(name: &'static str, pattern: &str, build: fn(&Captures<'_>) -> String) -> Self {
        Rule {
            name,
            pattern: compile(name, pattern),
            action: Action::Reflow(build),
        }
    }

    /// Run one pass of this rule, returning the rewritten text and the
    /// number of matches replaced.
    pub(crate) fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut hits = 0;
        let rewritten = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            hits += 1;
            match &self.action {
                Action::Template(template) => {
                    let mut dst = String::new();
                    caps.expand(template, &mut dst);
                    dst
                }
                Action::Reflow(build) => build(caps),
            }
        });
        (rewritten, hits)
    }
}

fn compile(name: &str, pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern for rule '{name}': {e}"))
}

/// `[tag]…[/tag]`, body in group 1.
fn pair(tag: &str) -> String {
    format!(r"(?is)\[{tag}\](.*?)\[/{tag}\]")
}

/// `[tag=VALUE]…[/tag]`, value in group 1 and body in group 2.
fn valued_pair(tag: &str) -> String {
    format!(r"(?is)\[{tag}=([^\]]+)\](.*?)\[/{tag}\]")
}

pub(crate) static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::template("bold", &pair("b"), "**${1}**"),
        Rule::template("italic", &pair("i"), "*${1}*"),
        Rule::template("underline", &pair("u"), "<u>${1}</u>"),
        Rule::template("strikethrough", &pair("s"), "~~${1}~~"),
        Rule::template("code", &pair("code"), "`${1}`"),
        Rule::template("pre", &pair("pre"), "```\n${1}\n```"),
        Rule::template("link", &valued_pair("url"), "[${2}](${1})"),
        Rule::template("autolink", &pair("url"), "<${1}>"),
        Rule::template("image", &pair("img"), "![](${1})"),
        Rule::template("image-alt", &valued_pair("img"), "![${1}](${2})"),
        Rule::reflow("quote", &pair("quote"), reflow::quote),
        Rule::reflow("quote-author", &valued_pair("quote"), reflow::attributed_quote),
        Rule::reflow("list", &pair("list"), reflow::unordered_list),
        Rule::reflow(
            "ordered-list",
            r"(?is)\[list=1\](.*?)\[/list\]",
            reflow::ordered_list,
        ),
        Rule::template("heading-1", &pair("h1"), "\n# ${1}\n"),
        Rule::template("heading-2", &pair("h2"), "\n## ${1}\n"),
        Rule::template("heading-3", &pair("h3"), "\n### ${1}\n"),
        Rule::template(
            "color",
            &valued_pair("color"),
            "<span style=\"color:${1}\">${2}</span>",
        ),
        Rule::template("size", &valued_pair("size"), "${2}"),
        Rule::template("center", &pair("center"), "<center>${1}</center>"),
        Rule::template("left", &pair("left"), "${1}"),
        Rule::template("right", &pair("right"), "<div align=\"right\">${1}</div>"),
    ]
});

/// Any opening or closing tag the table knows about.
pub(crate) static KNOWN_TAG: Lazy<Regex> = Lazy::new(|| {
    compile(
        "known-tag",
        r"(?i)\[/?(?:b|i|u|s|code|pre|url|img|quote|list|h[1-3]|color|size|center|left|right)(?:=[^\]\n]*)?\]",
    )
});
