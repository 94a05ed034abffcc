//! HTML serialization of a [`Document`].

use super::{Document, DocumentError, NodeId};
use std::fmt::Write;

const VOID_TAGS: &[&str] = &["input", "br", "img", "hr", "meta"];

/// Renders the attached tree as indented HTML, text and attributes escaped.
pub fn to_html(doc: &Document) -> Result<String, DocumentError> {
    let mut out = String::new();
    write_node(doc, doc.root(), 0, &mut out)?;
    Ok(out)
}

fn write_node(
    doc: &Document,
    id: NodeId,
    depth: usize,
    out: &mut String,
) -> Result<(), DocumentError> {
    let element = doc.element(id)?;
    let indent = "  ".repeat(depth);

    // Writing into a String cannot fail.
    let _ = write!(out, "{}<{}", indent, element.tag());
    if let Some(id) = element.id() {
        let _ = write!(out, " id=\"{}\"", escape(id));
    }
    if !element.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes().join(" ")));
    }
    for (name, value) in element.attributes() {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag()) {
        out.push('\n');
        return Ok(());
    }

    let children = doc.children(id)?;
    if children.is_empty() {
        let _ = writeln!(out, "{}</{}>", escape(element.text()), element.tag());
        return Ok(());
    }

    out.push('\n');
    if !element.text().is_empty() {
        let _ = writeln!(out, "{}  {}", indent, escape(element.text()));
    }
    for child in children {
        write_node(doc, *child, depth + 1, out)?;
    }
    let _ = writeln!(out, "{}</{}>", indent, element.tag());
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
