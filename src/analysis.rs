//! @ai:module:intent Select how a module is analysed and produce its documentation
//! @ai:module:layer application
//! @ai:module:public_api AnalysisMode, analyze
//! @ai:module:depends_on document, scanner, source, error

use crate::document::{ModuleDoc, TaggedSourceDoc};
use crate::error::{Error, Result};
use crate::scanner::scan_reader;
use crate::source::{open_source, ModuleQuery};
use std::io::BufRead;
use tracing::info;

/// @ai:intent Where module documentation is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Tagged comments in the module source
    Source,
    /// Module objects, not implemented
    Binary,
}

/// @ai:intent Build the documentation of the selected module
/// @ai:post Binary mode always fails with Error::Unsupported
/// @ai:effects fs:read, io:read
pub fn analyze(mode: AnalysisMode, query: &ModuleQuery) -> Result<Box<dyn ModuleDoc>> {
    match mode {
        AnalysisMode::Binary => Err(Error::Unsupported("binary")),
        AnalysisMode::Source => {
            let reader = open_source(query)?;
            Ok(Box::new(analyze_reader(&query.name, reader)?))
        }
    }
}

/// @ai:intent Parse tagged documentation of a module from any reader
/// @ai:effects io:read
pub fn analyze_reader<R: BufRead>(name: &str, reader: R) -> Result<TaggedSourceDoc> {
    let doc = TaggedSourceDoc::parse(name, scan_reader(reader))?;
    info!(module = name, sections = doc.tree().len(), "parsed module documentation");
    Ok(doc)
}
