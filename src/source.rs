//! @ai:module:intent Locate and open the source text of a selected module
//! @ai:module:layer infrastructure
//! @ai:module:public_api ModuleQuery, locate_source, open_source
//! @ai:module:depends_on error

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// @ai:intent Selection of one module by name and type under a search path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleQuery {
    pub name: String,
    pub kind: String,
    pub search_path: PathBuf,
    pub max_depth: usize,
}

impl ModuleQuery {
    /// @ai:intent Source file name of the module, e.g. `filter_null.c`
    /// @ai:example (name "null", kind "filter") -> "filter_null.c"
    /// @ai:effects pure
    pub fn file_name(&self) -> String {
        format!("{}_{}.c", self.kind, self.name)
    }
}

/// @ai:intent Find the shallowest source file matching the query
/// @ai:post result is None if no file matches within max_depth
/// @ai:effects fs:read
pub fn locate_source(query: &ModuleQuery) -> Option<PathBuf> {
    let file_name = query.file_name();
    debug!(path = %query.search_path.display(), file = %file_name, "searching module source");

    WalkDir::new(&query.search_path)
        .max_depth(query.max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name().to_str() == Some(file_name.as_str()))
        .min_by_key(|e| e.depth())
        .map(|e| e.into_path())
}

/// @ai:intent Open the module source file, or standard input when none is found
/// @ai:effects fs:read, io:read
pub fn open_source(query: &ModuleQuery) -> Result<Box<dyn BufRead>> {
    match locate_source(query) {
        Some(path) => {
            info!(path = %path.display(), "reading module source");
            open_file(&path)
        }
        None => {
            info!(file = %query.file_name(), "module source not found, reading standard input");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
