//! Query answering over the built indices.
//!
//! Lookup is a pure read: nothing is mutated, and identical queries
//! against an unchanged index return structurally equal results.

use log::debug;

use super::error::{LmfError, Result};
use super::index::DictionaryIndex;
use super::models::{LexicalResource, PartOfSpeech};

/// Definitions and usage examples drawn from one sense's synset.
///
/// A sense whose synset reference never resolved contributes an empty
/// block, so the sense itself stays visible in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefBlock {
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
}

/// One matched lexical entry, projected for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub written_form: String,
    pub part_of_speech: PartOfSpeech,
    /// One block per sense of the entry, in document order.
    pub definitions: Vec<DefBlock>,
}

/// The full answer to one query: every entry matching the word, in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub entries: Vec<WordEntry>,
}

/// Looks up `query` and projects every matching entry.
///
/// `index` must have been built over this same `resource`; the entry
/// indices it stores are only meaningful against the arenas they were
/// minted for. [`Dictionary`](super::Dictionary) keeps the pair together.
///
/// The primary index is consulted first. On a miss the query is treated
/// as an alternate spelling: the alias index maps it to a canonical
/// form and the primary index is retried. A second miss is a
/// [`LmfError::WordNotFound`].
///
/// # Errors
/// Returns [`LmfError::WordNotFound`] when neither index knows the
/// query. The miss is a per-call outcome; it never affects the indices
/// or later calls.
pub fn search(
    resource: &LexicalResource,
    index: &DictionaryIndex,
    query: &str,
) -> Result<Word> {
    let matches = match index.entries_for(query) {
        Some(matches) => matches,
        None => {
            let canonical = index
                .canonical_for(query)
                .ok_or_else(|| LmfError::WordNotFound(query.to_string()))?;
            debug!("query {:?} is an alternate form of {:?}", query, canonical);
            index
                .entries_for(canonical)
                .ok_or_else(|| LmfError::WordNotFound(query.to_string()))?
        }
    };

    let mut entries = Vec::with_capacity(matches.len());
    for &entry_idx in matches {
        let entry = resource.entry(entry_idx);

        let mut definitions = Vec::with_capacity(entry.senses.len());
        for &sense_idx in &entry.senses {
            let sense = resource.sense(sense_idx);
            let block = match sense.synset {
                Some(synset_idx) => {
                    let synset = resource.synset(synset_idx);
                    DefBlock {
                        definitions: synset.definitions.clone(),
                        examples: synset.examples.clone(),
                    }
                }
                None => DefBlock::default(),
            };
            definitions.push(block);
        }

        entries.push(WordEntry {
            written_form: entry.lemma.written_form.clone(),
            part_of_speech: entry.lemma.part_of_speech,
            definitions,
        });
    }

    Ok(Word { entries })
}
