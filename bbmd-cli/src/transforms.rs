//! CLI-specific transforms
//!
//! This module defines the views `bbmd inspect` can print for a BBCode file.
//! None of them write anything; they exist to answer "what will the migration
//! do to this post?" before running it.
//!
//! ## Transforms
//!
//! - `trace-simple`: which conversion rules fired, and how many times, in
//!   application order
//! - `trace-json`: the same trace as JSON
//! - `md-ast`: node tree of the converted Markdown, as a CommonMark renderer
//!   will read it
//!
//! ## Extra Parameters
//!
//! - `all-rules`: when set to "true", `trace-simple` also lists the rules
//!   that did not match (with a count of 0)
//!
//! Example: `bbmd inspect post.bbcode trace-simple --extra-all-rules`

use bbmd_babel::formats::treeviz::to_treeviz_str;
use bbmd_babel::{convert, convert_with_trace, rule_names, RuleHit};
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["trace-simple", "trace-json", "md-ast"];

/// Transform used by `bbmd inspect` when none is given.
pub const DEFAULT_TRANSFORM: &str = "md-ast";

/// Execute a named transform on a source file with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("[b]hi[/b]", "trace-simple", &HashMap::new())?;
/// assert_eq!(output, "bold  1\n");
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "trace-simple" => {
            let (_, trace) = convert_with_trace(source);
            let all_rules = extra_params
                .get("all-rules")
                .map(|raw| parse_flag("all-rules", raw))
                .transpose()?
                .unwrap_or(false);
            Ok(trace_to_simple(&trace, all_rules))
        }
        "trace-json" => {
            let (_, trace) = convert_with_trace(source);
            let json = serde_json::to_string_pretty(&trace)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            Ok(format!("{json}\n"))
        }
        "md-ast" => Ok(to_treeviz_str(&convert(source))),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn trace_to_simple(trace: &[RuleHit], all_rules: bool) -> String {
    let rows: Vec<(&str, usize)> = if all_rules {
        rule_names()
            .into_iter()
            .map(|name| {
                let matches = trace
                    .iter()
                    .find(|hit| hit.rule == name)
                    .map_or(0, |hit| hit.matches);
                (name, matches)
            })
            .collect()
    } else {
        trace.iter().map(|hit| (hit.rule, hit.matches)).collect()
    };

    if rows.is_empty() {
        return "no rules matched\n".to_string();
    }

    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (name, matches) in rows {
        output.push_str(&format!("{name:<width$}  {matches}\n"));
    }
    output
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(format!("Invalid boolean value '{other}' for --extra-{key}")),
    }
}
