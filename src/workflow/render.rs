//! Block-style YAML emitter for workflow documents
//!
//! Output layout follows the GitHub Actions convention: two spaces per
//! mapping level, sequence items at their parent key's indentation, and
//! plain scalars wherever YAML allows them. Only string, mapping and
//! sequence nodes are emitted; the document model never produces others.

use super::schema::Workflow;
use crate::error::{Result, WorkflowError};
use serde_yaml::{Mapping, Value};
use tracing::debug;

const INDENT: usize = 2;

/// Characters that cannot start a plain scalar
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
    '`',
];

/// Serializes a workflow; the result carries no trailing newline
pub fn render(workflow: &Workflow) -> Result<String> {
    let value = serde_yaml::to_value(workflow)?;
    let yaml = render_value(&value)?;
    debug!(workflow = %workflow.name, bytes = yaml.len(), "Rendered workflow");
    Ok(yaml)
}

/// Serializes a raw YAML tree with the same layout rules as [`render`]
pub fn render_value(value: &Value) -> Result<String> {
    let mut lines = Vec::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => emit_mapping(map, 0, &mut lines)?,
        Value::Sequence(seq) if !seq.is_empty() => emit_sequence(seq, 0, &mut lines)?,
        other => lines.push(inline(other)?),
    }
    Ok(lines.join("\n"))
}

fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

/// Single-line form of a scalar or an empty collection
fn inline(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(scalar(s)),
        Value::Mapping(map) if map.is_empty() => Ok("{}".to_string()),
        Value::Sequence(seq) if seq.is_empty() => Ok("[]".to_string()),
        other => Err(WorkflowError::UnsupportedNodeType(node_kind(other))),
    }
}

fn emit_mapping(map: &Mapping, indent: usize, out: &mut Vec<String>) -> Result<()> {
    let pad = " ".repeat(indent);

    for (key, value) in map {
        let key = match key {
            Value::String(k) => scalar(k),
            other => return Err(WorkflowError::UnsupportedNodeType(node_kind(other))),
        };

        match value {
            Value::Mapping(child) if !child.is_empty() => {
                out.push(format!("{}{}:", pad, key));
                emit_mapping(child, indent + INDENT, out)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push(format!("{}{}:", pad, key));
                emit_sequence(items, indent, out)?;
            }
            other => out.push(format!("{}{}: {}", pad, key, inline(other)?)),
        }
    }

    Ok(())
}

fn emit_sequence(items: &[Value], indent: usize, out: &mut Vec<String>) -> Result<()> {
    let pad = " ".repeat(indent);
    let nested = indent + INDENT;

    for item in items {
        let mut block = Vec::new();
        match item {
            Value::Mapping(map) if !map.is_empty() => emit_mapping(map, nested, &mut block)?,
            Value::Sequence(seq) if !seq.is_empty() => emit_sequence(seq, nested, &mut block)?,
            other => {
                out.push(format!("{}- {}", pad, inline(other)?));
                continue;
            }
        }

        // first line of the nested block moves onto the dash
        let mut block = block.into_iter();
        if let Some(first) = block.next() {
            out.push(format!("{}- {}", pad, &first[nested..]));
        }
        out.extend(block);
    }

    Ok(())
}

/// Plain, single-quoted or double-quoted form of a string
fn scalar(s: &str) -> String {
    if s.chars().any(|c| (c.is_control() && c != '\t') || BREAKS.contains(&c)) {
        double_quoted(s)
    } else if needs_quotes(s) {
        format!("'{}'", s.replace('\'', "''"))
    } else {
        s.to_string()
    }
}

/// Line and paragraph separators plus the byte order mark
const BREAKS: [char; 3] = ['\u{2028}', '\u{2029}', '\u{FEFF}'];

/// Spellings a YAML reader resolves to null
const NULL_WORDS: [&str; 4] = ["~", "null", "Null", "NULL"];

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || NULL_WORDS.contains(&s)
        || s.trim() != s
        || s.starts_with(INDICATORS)
        || s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
        || s.contains('\t')
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            '\u{FEFF}' => out.push_str("\\uFEFF"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
