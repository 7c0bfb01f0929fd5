//! Document parsing orchestration.
//!
//! Runs the three ingestion stages in strict order: scan/build over the
//! whole document, then reference resolution, then hand back the
//! finished graph. Each stage completes before the next begins, and the
//! returned resource is never mutated again.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use super::builder::GraphBuilder;
use super::error::Result;
use super::models::LexicalResource;
use super::resolve;
use super::scan::{RawEvent, Scanner};

/// Parses a WN-LMF document from a file on disk.
///
/// # Arguments
/// * `path` - File path to the WN-LMF XML document
///
/// # Errors
/// Returns an error if:
/// - The file cannot be opened or read
/// - The XML is malformed or the document structure is invalid
/// - The stream produces an event kind outside the structural model
pub fn parse_file(path: impl AsRef<Path>) -> Result<LexicalResource> {
    let path = path.as_ref();
    info!("Opening WN-LMF document: {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parses a WN-LMF document held in memory.
pub fn parse_str(document: &str) -> Result<LexicalResource> {
    parse_reader(document.as_bytes())
}

/// Parses a WN-LMF document from any buffered reader.
///
/// The source is consumed exactly once; it is released when this
/// function returns, on success and on the first fatal error alike.
pub fn parse_reader<R: BufRead>(source: R) -> Result<LexicalResource> {
    let mut scanner = Scanner::new(source);
    let mut builder = GraphBuilder::new();

    loop {
        match scanner.next_event()? {
            RawEvent::Open(tag) => builder.open_element(tag)?,
            RawEvent::Close(name) => builder.close_element(&name)?,
            RawEvent::Text(text) => builder.text(&text),
            RawEvent::Eof => break,
        }
    }

    let (mut resource, ids) = builder.finish()?;
    resolve::link_references(&mut resource, &ids);

    info!(
        "Document parsed: {} lexicons, {} entries, {} senses, {} synsets",
        resource.lexicons.len(),
        resource.entry_count(),
        resource.sense_count(),
        resource.synset_count()
    );

    Ok(resource)
}
