//! @ai:module:intent Define the fixed whitelist of documentation sections and their classes
//! @ai:module:layer domain
//! @ai:module:public_api Section, SectionClass
//! @ai:module:stateless true

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// @ai:intent How the content lines of a section are accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionClass {
    /// Free text, lines space-joined
    Text,
    /// Comma-separated tokens, last line wins
    List,
    /// Keyed option blocks
    Options,
}

/// @ai:intent A recognized section header of the annotation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Description,
    BuildDepends,
    Depends,
    Processing,
    Media,
    Input,
    Output,
    Option,
}

const SECTIONS: &[Section] = &[
    Section::Description,
    Section::BuildDepends,
    Section::Depends,
    Section::Processing,
    Section::Media,
    Section::Input,
    Section::Output,
    Section::Option,
];

impl Section {
    /// @ai:intent Match a trimmed annotation line against the header whitelist
    /// @ai:example ("OPTION") -> Some(Section::Option)
    /// @ai:example ("option") -> None
    /// @ai:effects pure
    pub fn lookup(line: &str) -> Option<Section> {
        Self::all().find(|section| section.as_str() == line)
    }

    /// @ai:intent Get the header text of this section
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Description => "DESCRIPTION",
            Section::BuildDepends => "BUILD-DEPENDS",
            Section::Depends => "DEPENDS",
            Section::Processing => "PROCESSING",
            Section::Media => "MEDIA",
            Section::Input => "INPUT",
            Section::Output => "OUTPUT",
            Section::Option => "OPTION",
        }
    }

    /// @ai:intent Get the accumulation class of this section
    /// @ai:effects pure
    pub fn class(&self) -> SectionClass {
        match self {
            Section::Description
            | Section::BuildDepends
            | Section::Depends
            | Section::Processing => SectionClass::Text,
            Section::Media | Section::Input | Section::Output => SectionClass::List,
            Section::Option => SectionClass::Options,
        }
    }

    /// @ai:intent Iterate over every recognized section in declaration order
    pub fn all() -> impl Iterator<Item = Section> {
        SECTIONS.iter().copied()
    }
}

impl Ord for Section {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Section {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Section::lookup("DESCRIPTION"), Some(Section::Description));
        assert_eq!(Section::lookup("BUILD-DEPENDS"), Some(Section::BuildDepends));
        assert_eq!(Section::lookup("description"), None);
        assert_eq!(Section::lookup("DESCRIPTION "), None);
        assert_eq!(Section::lookup("NOTES"), None);
    }

    #[test]
    fn test_classes_partition_whitelist() {
        let text: Vec<_> = Section::all()
            .filter(|s| s.class() == SectionClass::Text)
            .map(|s| s.as_str())
            .collect();
        assert_eq!(text, vec!["DESCRIPTION", "BUILD-DEPENDS", "DEPENDS", "PROCESSING"]);
        assert_eq!(Section::Media.class(), SectionClass::List);
        assert_eq!(Section::Input.class(), SectionClass::List);
        assert_eq!(Section::Output.class(), SectionClass::List);
        assert_eq!(Section::Option.class(), SectionClass::Options);
    }

    #[test]
    fn test_order_follows_name() {
        let mut sections: Vec<_> = Section::all().collect();
        sections.sort();
        let names: Vec<_> = sections.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "BUILD-DEPENDS",
                "DEPENDS",
                "DESCRIPTION",
                "INPUT",
                "MEDIA",
                "OPTION",
                "OUTPUT",
                "PROCESSING"
            ]
        );
    }
}
