//! Icon mapping for the Markdown tree visualization

/// Get the Unicode icon for a given Markdown node type
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "List" => "☰",
        "Item" => "•",
        "BlockQuote" => "\"",
        "CodeBlock" => "𝒱",
        "HtmlBlock" | "HtmlInline" => "‹›",
        "Text" => "◦",
        "SoftBreak" | "LineBreak" => "↵",
        "Emph" => "𝐼",
        "Strong" => "𝐁",
        "Strikethrough" => "∼",
        "Code" => "ƒ",
        "Link" => "⊕",
        "Image" => "▣",
        _ => "○",
    }
}
