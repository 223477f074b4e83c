//! @ai:module:intent Format document trees as sorted text lines or JSON
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, render_text, render_json, format_doc
//! @ai:module:depends_on document, error
//! @ai:module:stateless true

use crate::document::{DocTree, ModuleDoc, OptionEntry, SectionValue};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a module document in the requested format
/// @ai:effects pure
pub fn format_doc(doc: &dyn ModuleDoc, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(doc.to_text()),
        OutputFormat::Json => doc.to_json(false),
        OutputFormat::JsonPretty => doc.to_json(true),
    }
}

/// @ai:intent Render one `Name: Value` line per section, sorted by name
/// @ai:effects pure
pub fn render_text(tree: &DocTree) -> String {
    tree.iter()
        .map(|(section, value)| format!("{}: {}", section, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// @ai:intent Render the tree as a JSON object keyed by section name
/// @ai:effects pure
pub fn render_json(tree: &DocTree, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

impl fmt::Display for SectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionValue::Text(text) => f.write_str(text),
            SectionValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, item)?;
                }
                f.write_str("]")
            }
            SectionValue::Options(entries) => {
                f.write_str("{")?;
                for (idx, entry) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", entry)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_quoted(f, &self.name)?;
        f.write_str(", ")?;
        write_quoted(f, &self.kind)?;
        f.write_str("): ")?;
        write_quoted(f, &self.description)
    }
}

/// @ai:intent Write a string literal, single-quoted unless only double quotes avoid escaping
/// @ai:example ("it's") -> "\"it's\""
/// @ai:effects pure
fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for c in value.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}
