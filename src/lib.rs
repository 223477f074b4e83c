//! @ai:module:intent Library for extracting tagged module documentation from sources
//! @ai:module:layer infrastructure
//! @ai:module:public_api analysis, builder, config, document, error, output, scanner, section, source
//! @ai:module:stateless true
//!
//! # tcmodhelp
//!
//! Module sources carry their documentation in comment lines tagged with
//! `*%*`, grouped under section headers and closed by `*%*/`:
//!
//! ```text
//! /*
//!  *%* DESCRIPTION
//!  *%* A sample module.
//!  *%* OPTION
//!  *%* speed (int)
//!  *%* Controls processing speed. *preferred
//!  *%*/
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tcmodhelp::{scan_str, ModuleDoc, TaggedSourceDoc};
//!
//! let source = "*%* DESCRIPTION\n*%* A sample module.\n*%*/";
//! let doc = TaggedSourceDoc::parse("sample", scan_str(source)).unwrap();
//! assert_eq!(doc.to_text(), "DESCRIPTION: A sample module.");
//! ```

pub mod analysis;
pub mod builder;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod scanner;
pub mod section;
pub mod source;

pub use analysis::{analyze, analyze_reader, AnalysisMode};
pub use builder::{build_tree, parse_option_block};
pub use config::{ModhelpConfig, OutputConfig, SourceConfig};
pub use document::{DocTree, ModuleDoc, OptionEntry, SectionValue, TaggedSourceDoc};
pub use error::{Error, Result};
pub use output::{format_doc, render_json, render_text, OutputFormat};
pub use scanner::{scan_reader, scan_str, AnnotationLine, TaggedSource};
pub use section::{Section, SectionClass};
pub use source::{locate_source, open_source, ModuleQuery};
