//! @ai:module:intent Define the document tree and the module documentation abstraction
//! @ai:module:layer domain
//! @ai:module:public_api DocTree, SectionValue, OptionEntry, ModuleDoc, TaggedSourceDoc
//! @ai:module:depends_on section, builder, output
//! @ai:module:stateless true

use crate::builder::build_tree;
use crate::error::Result;
use crate::output;
use crate::scanner::AnnotationLine;
use crate::section::Section;
use serde::Serialize;
use std::collections::BTreeMap;

/// @ai:intent A documented option keyed by name and type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl OptionEntry {
    /// @ai:intent Check whether this entry has the given (name, type) key
    /// @ai:effects pure
    pub fn has_key(&self, name: &str, kind: &str) -> bool {
        self.name == name && self.kind == kind
    }
}

/// @ai:intent Parsed content of one section, shaped by its class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    Text(String),
    List(Vec<String>),
    Options(Vec<OptionEntry>),
}

impl SectionValue {
    /// @ai:intent Add an option entry, replacing the description of an existing key in place
    /// @ai:pre self is SectionValue::Options
    /// @ai:effects pure
    pub fn insert_option(&mut self, entry: OptionEntry) {
        if let SectionValue::Options(entries) = self {
            match entries
                .iter_mut()
                .find(|e| e.has_key(&entry.name, &entry.kind))
            {
                Some(existing) => existing.description = entry.description,
                None => entries.push(entry),
            }
        }
    }
}

/// Mapping from section to its value, iterated in section-name order.
pub type DocTree = BTreeMap<Section, SectionValue>;

/// @ai:intent Common capability of every module documentation representation
///
/// Only source-derived documents exist today. A binary-derived document
/// would be another implementor of this trait.
pub trait ModuleDoc {
    /// @ai:intent Module name the document describes
    fn name(&self) -> &str;

    /// @ai:intent Finished, read-only document tree
    fn tree(&self) -> &DocTree;

    /// @ai:intent Render as sorted `Name: Value` lines
    /// @ai:effects pure
    fn to_text(&self) -> String {
        output::render_text(self.tree())
    }

    /// @ai:intent Render the tree as JSON
    /// @ai:effects pure
    fn to_json(&self, pretty: bool) -> Result<String> {
        output::render_json(self.tree(), pretty)
    }
}

/// @ai:intent Documentation built from `*%*` tagged lines in a module source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSourceDoc {
    name: String,
    tree: DocTree,
}

impl TaggedSourceDoc {
    /// @ai:intent Parse annotation lines into a document for the named module
    /// @ai:post on error no document is produced
    /// @ai:effects io:read
    pub fn parse<I>(name: impl Into<String>, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<AnnotationLine>>,
    {
        Ok(Self {
            name: name.into(),
            tree: build_tree(lines)?,
        })
    }
}

impl ModuleDoc for TaggedSourceDoc {
    fn name(&self) -> &str {
        &self.name
    }

    fn tree(&self) -> &DocTree {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_str;

    fn entry(name: &str, kind: &str, description: &str) -> OptionEntry {
        OptionEntry {
            name: name.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_insert_option_replaces_in_place() {
        let mut value = SectionValue::Options(Vec::new());
        value.insert_option(entry("a", "int", "first"));
        value.insert_option(entry("b", "int", "second"));
        value.insert_option(entry("a", "int", "updated"));

        assert_eq!(
            value,
            SectionValue::Options(vec![entry("a", "int", "updated"), entry("b", "int", "second")])
        );
    }

    #[test]
    fn test_same_name_different_type_is_distinct() {
        let mut value = SectionValue::Options(Vec::new());
        value.insert_option(entry("a", "int", "x"));
        value.insert_option(entry("a", "string", "y"));

        match value {
            SectionValue::Options(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_tagged_source_doc_renders_text() {
        let doc = TaggedSourceDoc::parse(
            "null",
            scan_str("*%* DESCRIPTION\n*%* Does nothing.\n*%*/"),
        )
        .unwrap();

        assert_eq!(doc.name(), "null");
        assert_eq!(doc.to_text(), "DESCRIPTION: Does nothing.");
    }
}
