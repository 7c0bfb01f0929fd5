//! # lmf-reader
//!
//! A reader for WordNet-LMF lexical resource documents.
//!
//! Ingests the XML document into an in-memory cross-referenced graph,
//! resolves forward references once the whole document has been
//! consumed, then builds headword and alternate-form indices and
//! answers exact-word lookups over them.
pub mod lmf;

// Re-export the main types for convenience
pub use lmf::{
    error::{LmfError, Result},
    models::{
        Form, Lemma, LexicalEntry, LexicalResource, Lexicon, PartOfSpeech, RelationType, Sense,
        SenseRelation, Synset, SynsetRelation,
    },
    parse_file, parse_reader, parse_str, search, DefBlock, Dictionary, DictionaryIndex, Word,
    WordEntry,
};
