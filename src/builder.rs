//! @ai:module:intent Classify annotation lines into sections and build the document tree
//! @ai:module:layer application
//! @ai:module:public_api build_tree, parse_option_block
//! @ai:module:depends_on scanner, section, document, error
//! @ai:module:stateless true

use crate::document::{DocTree, OptionEntry, SectionValue};
use crate::error::{Error, Result};
use crate::scanner::AnnotationLine;
use crate::section::{Section, SectionClass};
use std::iter::Peekable;
use tracing::{debug, trace};

/// Literal that replaces a `*` preference marker.
const PREFERRED_SUFFIX: &str = " (preferred)";

/// @ai:intent Consume annotation lines to completion and build the document tree
/// @ai:post every key of the tree is a recognized section
/// @ai:post lines before the first header are dropped
/// @ai:effects pure
pub fn build_tree<I>(lines: I) -> Result<DocTree>
where
    I: IntoIterator<Item = Result<AnnotationLine>>,
{
    let mut lines = lines.into_iter().peekable();
    let mut tree = DocTree::new();
    let mut current: Option<Section> = None;

    while let Some(line) = lines.next() {
        let line = line?;

        if let Some(section) = Section::lookup(&line.text) {
            debug!(line = line.line_number, section = %section, "entering section");
            current = Some(section);
            continue;
        }

        let Some(section) = current else {
            trace!(line = line.line_number, "dropping line outside any section");
            continue;
        };

        match section.class() {
            SectionClass::Text => match tree.get_mut(&section) {
                Some(SectionValue::Text(text)) => {
                    text.push(' ');
                    text.push_str(&line.text);
                }
                _ => {
                    tree.insert(section, SectionValue::Text(line.text));
                }
            },
            SectionClass::List => {
                tree.insert(section, SectionValue::List(explode_list(&line.text)));
            }
            SectionClass::Options => {
                let entry = parse_option_block(&line, &mut lines)?;
                debug!(name = %entry.name, kind = %entry.kind, "parsed option");
                tree.entry(section)
                    .or_insert_with(|| SectionValue::Options(Vec::new()))
                    .insert_option(entry);
            }
        }
    }

    Ok(tree)
}

/// @ai:intent Parse one option block starting at its key line
/// @ai:pre key is the `<name> <type>` line of the block
/// @ai:post the next section header, if any, is left unconsumed in lines
/// @ai:example ("speed (int)", ["Fast."]) -> OptionEntry { speed, int, "Fast." }
/// @ai:effects pure
pub fn parse_option_block<I>(key: &AnnotationLine, lines: &mut Peekable<I>) -> Result<OptionEntry>
where
    I: Iterator<Item = Result<AnnotationLine>>,
{
    let tokens: Vec<&str> = key.text.split_whitespace().collect();
    let [name, kind] = tokens.as_slice() else {
        return Err(Error::MalformedOptionKey {
            line: key.line_number,
            text: key.text.clone(),
            tokens: tokens.len(),
        });
    };

    let mut description = Vec::new();
    while let Some(line) = lines.next_if(|next| !is_header(next)) {
        description.push(mark_description(&line?.text));
    }

    Ok(OptionEntry {
        name: expand_preferred(name),
        kind: expand_preferred(kind.trim_matches(|c: char| c == '(' || c == ')')),
        description: description.join(" "),
    })
}

fn is_header(line: &Result<AnnotationLine>) -> bool {
    matches!(line, Ok(line) if Section::lookup(&line.text).is_some())
}

/// @ai:intent Split a list line on commas, expanding preference markers
/// @ai:example ("mpeg,avi*") -> ["mpeg", "avi (preferred)"]
/// @ai:effects pure
fn explode_list(line: &str) -> Vec<String> {
    line.split(',').map(expand_preferred).collect()
}

fn expand_preferred(token: &str) -> String {
    token.replace('*', PREFERRED_SUFFIX)
}

/// @ai:intent Expand markers inside option description text
///
/// A word led by `*` is a marker word and becomes `(word)`; any other `*`
/// expands like in lists.
/// @ai:example ("Slow. *preferred") -> "Slow. (preferred)"
/// @ai:effects pure
fn mark_description(line: &str) -> String {
    line.split(' ')
        .map(|word| match word.strip_prefix('*') {
            Some("") => PREFERRED_SUFFIX.trim_start().to_string(),
            Some(rest) => format!("({})", rest.replace('*', "")),
            None => expand_preferred(word),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_str;
    use pretty_assertions::assert_eq;

    fn build(input: &str) -> Result<DocTree> {
        build_tree(scan_str(input))
    }

    fn text(value: &str) -> SectionValue {
        SectionValue::Text(value.to_string())
    }

    fn list(values: &[&str]) -> SectionValue {
        SectionValue::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn option(name: &str, kind: &str, description: &str) -> OptionEntry {
        OptionEntry {
            name: name.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_text_section_accumulates() {
        let tree = build("*%* DESCRIPTION\n*%* Hello\n*%* World").unwrap();
        assert_eq!(tree.get(&Section::Description), Some(&text("Hello World")));
    }

    #[test]
    fn test_text_section_reentry_appends() {
        let tree = build(
            "*%* DESCRIPTION\n*%* Hello\n*%* DEPENDS\n*%* libfoo\n*%* DESCRIPTION\n*%* again",
        )
        .unwrap();
        assert_eq!(tree.get(&Section::Description), Some(&text("Hello again")));
        assert_eq!(tree.get(&Section::Depends), Some(&text("libfoo")));
    }

    #[test]
    fn test_list_section_last_line_wins() {
        let tree = build("*%* MEDIA\n*%* A,B\n*%* C").unwrap();
        assert_eq!(tree.get(&Section::Media), Some(&list(&["C"])));
    }

    #[test]
    fn test_list_preference_expansion() {
        let tree = build("*%* INPUT\n*%* yuv420p,rgb24*").unwrap();
        assert_eq!(
            tree.get(&Section::Input),
            Some(&list(&["yuv420p", "rgb24 (preferred)"]))
        );
    }

    #[test]
    fn test_list_tokens_are_not_trimmed() {
        let tree = build("*%* OUTPUT\n*%* a, b").unwrap();
        assert_eq!(tree.get(&Section::Output), Some(&list(&["a", " b"])));
    }

    #[test]
    fn test_lines_before_header_are_dropped() {
        let tree = build("*%* stray text\n*%* PROCESSING\n*%* audio").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&Section::Processing), Some(&text("audio")));
    }

    #[test]
    fn test_header_without_content_adds_nothing() {
        let tree = build("*%* DESCRIPTION\n*%* MEDIA").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_option_block() {
        let tree = build(
            "*%* DESCRIPTION\n*%* A sample module.\n*%* OPTION\n*%* speed (int)\n*%* Controls processing speed. *preferred\n*%*/",
        )
        .unwrap();

        assert_eq!(tree.get(&Section::Description), Some(&text("A sample module.")));
        assert_eq!(
            tree.get(&Section::Option),
            Some(&SectionValue::Options(vec![option(
                "speed",
                "int",
                "Controls processing speed. (preferred)"
            )]))
        );
    }

    #[test]
    fn test_option_block_stops_at_header_without_consuming_it() {
        let tree = build(
            "*%* OPTION\n*%* level (int)\n*%* Strength\n*%* of effect.\n*%* MEDIA\n*%* video",
        )
        .unwrap();

        assert_eq!(
            tree.get(&Section::Option),
            Some(&SectionValue::Options(vec![option("level", "int", "Strength of effect.")]))
        );
        assert_eq!(tree.get(&Section::Media), Some(&list(&["video"])));
    }

    #[test]
    fn test_multiple_option_blocks() {
        let tree = build(
            "*%* OPTION\n*%* width (int)\n*%* Width.\n*%* OPTION\n*%* fast* (bool)\n*%* Go fast.",
        )
        .unwrap();

        assert_eq!(
            tree.get(&Section::Option),
            Some(&SectionValue::Options(vec![
                option("width", "int", "Width."),
                option("fast (preferred)", "bool", "Go fast."),
            ]))
        );
    }

    #[test]
    fn test_option_without_description() {
        let tree = build("*%* OPTION\n*%* verbose (flag)").unwrap();
        assert_eq!(
            tree.get(&Section::Option),
            Some(&SectionValue::Options(vec![option("verbose", "flag", "")]))
        );
    }

    #[test]
    fn test_malformed_option_key_is_reported() {
        let err = build("*%* OPTION\n*%* speed is (int)\n*%* text").unwrap_err();
        match err {
            Error::MalformedOptionKey { line, text, tokens } => {
                assert_eq!(line, 2);
                assert_eq!(text, "speed is (int)");
                assert_eq!(tokens, 3);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_single_token_option_key_is_reported() {
        let err = build("*%* OPTION\n*%* speed").unwrap_err();
        assert!(matches!(err, Error::MalformedOptionKey { tokens: 1, .. }));
    }

    #[test]
    fn test_rebuild_is_structurally_equal() {
        let input = "*%* DESCRIPTION\n*%* x\n*%* MEDIA\n*%* a,b*\n*%* OPTION\n*%* n (t)\n*%* d";
        assert_eq!(build(input).unwrap(), build(input).unwrap());
    }

    #[test]
    fn test_mark_description() {
        assert_eq!(mark_description("Slow. *preferred"), "Slow. (preferred)");
        assert_eq!(mark_description("fast* mode"), "fast (preferred) mode");
        assert_eq!(mark_description("default *"), "default (preferred)");
        assert_eq!(mark_description("plain text"), "plain text");
    }
}
