//! @ai:module:intent Isolate tagged annotation lines from an arbitrary line stream
//! @ai:module:layer application
//! @ai:module:public_api TaggedSource, AnnotationLine, scan_str, scan_reader
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::io::{self, BufRead};
use tracing::debug;

/// Marks a line as carrying documentation payload.
pub const DOC_MARKER: &str = "*%*";

/// Ends the annotation block.
pub const END_SENTINEL: &str = "*%*/";

/// The marker must start within this many leading characters.
const MARKER_WINDOW: usize = 4;

/// @ai:intent A single annotation payload with the source line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationLine {
    pub line_number: usize,
    pub text: String,
}

impl AnnotationLine {
    /// @ai:intent Create a new AnnotationLine
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// @ai:intent Lazy, single-pass filter from raw lines to annotation lines
///
/// Stops for good at the end sentinel, at the end of the underlying
/// stream, or after reporting the first I/O error.
pub struct TaggedSource<I> {
    lines: I,
    line_number: usize,
    done: bool,
}

impl<I> TaggedSource<I> {
    /// @ai:intent Wrap a fallible line iterator
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_number: 0,
            done: false,
        }
    }
}

/// @ai:intent Scan annotation lines out of in-memory text
/// @ai:effects pure
pub fn scan_str(text: &str) -> TaggedSource<impl Iterator<Item = io::Result<&str>>> {
    TaggedSource::new(text.lines().map(Ok))
}

/// @ai:intent Scan annotation lines out of a buffered reader
/// @ai:effects io:read
pub fn scan_reader<R: BufRead>(reader: R) -> TaggedSource<io::Lines<R>> {
    TaggedSource::new(reader.lines())
}

/// Outcome of classifying one raw line.
#[derive(Debug, PartialEq, Eq)]
enum Scanned<'a> {
    Skip,
    End,
    Payload(&'a str),
}

/// @ai:intent Classify one raw line as skipped, terminating or payload
/// @ai:effects pure
fn scan_line(raw: &str) -> Scanned<'_> {
    let line = raw.trim();
    if line == END_SENTINEL {
        return Scanned::End;
    }

    let window_end = line
        .char_indices()
        .nth(MARKER_WINDOW)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    if !line[..window_end].contains(DOC_MARKER) {
        return Scanned::Skip;
    }

    let payload = line[window_end..].trim();
    if payload.is_empty() {
        return Scanned::Skip;
    }
    if payload == END_SENTINEL {
        return Scanned::End;
    }

    let payload = match payload.find('#') {
        Some(idx) => payload[..idx].trim(),
        None => payload,
    };
    if payload.is_empty() {
        Scanned::Skip
    } else {
        Scanned::Payload(payload)
    }
}

impl<I, L> Iterator for TaggedSource<I>
where
    I: Iterator<Item = io::Result<L>>,
    L: AsRef<str>,
{
    type Item = Result<AnnotationLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for raw in self.lines.by_ref() {
            self.line_number += 1;
            let raw = match raw {
                Ok(raw) => raw,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
            };

            match scan_line(raw.as_ref()) {
                Scanned::Skip => continue,
                Scanned::End => {
                    debug!(line = self.line_number, "end of annotation block");
                    self.done = true;
                    return None;
                }
                Scanned::Payload(text) => {
                    return Some(Ok(AnnotationLine::new(self.line_number, text)));
                }
            }
        }

        self.done = true;
        None
    }
}
