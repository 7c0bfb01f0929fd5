//! Core WN-LMF reader module

pub mod models;
pub mod error;
mod scan;
mod builder;
mod resolve;
mod parser;
mod index;
mod lookup;

use std::path::Path;
use models::*;

pub use error::{LmfError, Result};
pub use index::DictionaryIndex;
pub use lookup::{search, DefBlock, Word, WordEntry};
pub use parser::{parse_file, parse_reader, parse_str};

/// The main dictionary over a parsed WN-LMF document.
///
/// Bundles the resolved resource with its lookup indices so callers can
/// go from a file path to answered queries in two calls. Construction
/// runs the full ingestion pipeline (parse, resolve, index) to
/// completion; afterwards the dictionary is read-only and lookups may
/// run concurrently.
#[derive(Debug)]
pub struct Dictionary {
    resource: LexicalResource,
    index: DictionaryIndex,
}

impl Dictionary {
    /// Read a WN-LMF document from the given path and index it.
    ///
    /// # Arguments
    /// * `path` - File path to the WN-LMF XML document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The XML is malformed or the document structure is invalid
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let resource = parser::parse_file(path)?;
        Ok(Self::new(resource))
    }

    /// Index an already-parsed resource.
    pub fn new(resource: LexicalResource) -> Self {
        let index = DictionaryIndex::build(&resource);
        Self { resource, index }
    }

    /// Look up a word by exact spelling, falling back to alternate
    /// forms.
    ///
    /// # Errors
    /// Returns [`LmfError::WordNotFound`] when neither the primary nor
    /// the alias index knows the query.
    pub fn search(&self, query: &str) -> Result<Word> {
        lookup::search(&self.resource, &self.index, query)
    }

    /// The underlying parsed resource.
    pub fn resource(&self) -> &LexicalResource {
        &self.resource
    }

    /// The lookup indices built over the resource.
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }
}

/// Parses and indexes a WN-LMF document held in memory.
impl std::str::FromStr for Dictionary {
    type Err = LmfError;

    fn from_str(document: &str) -> Result<Self> {
        let resource = parser::parse_str(document)?;
        Ok(Self::new(resource))
    }
}
