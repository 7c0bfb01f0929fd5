//! Headword and alternate-form indexing over a parsed resource.

use std::collections::HashMap;

use log::{info, warn};

use super::models::{EntryIdx, LexicalResource};

/// Lookup indices derived from a resolved [`LexicalResource`].
///
/// Built once after parsing and read-only thereafter. Two maps are kept:
/// - primary: canonical written form to the entries sharing it, in
///   document order (homographs group under one key)
/// - aliases: alternate written form to the canonical form it inflects
///
/// Only the first lexicon of the resource is indexed when several are
/// present. That limitation is deliberate and documented here rather
/// than silently widened.
#[derive(Debug)]
pub struct DictionaryIndex {
    primary: HashMap<String, Vec<EntryIdx>>,
    aliases: HashMap<String, String>,
}

impl DictionaryIndex {
    /// Builds both indices in one pass over the first lexicon's entries.
    ///
    /// Each entry is indexed exactly once under its lemma's written
    /// form. A form spelled identically to its own lemma contributes no
    /// alias; on alias collisions the last declaration wins. A resource
    /// with no lexicons yields an empty index.
    pub fn build(resource: &LexicalResource) -> Self {
        info!("Building dictionary index");

        let mut primary: HashMap<String, Vec<EntryIdx>> = HashMap::new();
        let mut aliases: HashMap<String, String> = HashMap::new();

        let lexicon = match resource.lexicons.first() {
            Some(lexicon) => lexicon,
            None => {
                warn!("document contains no lexicons, the index will be empty");
                return Self { primary, aliases };
            }
        };

        for &entry_idx in &lexicon.entries {
            let entry = resource.entry(entry_idx);
            primary
                .entry(entry.lemma.written_form.clone())
                .or_default()
                .push(entry_idx);

            for form in &entry.forms {
                if form.written_form != entry.lemma.written_form {
                    aliases.insert(form.written_form.clone(), entry.lemma.written_form.clone());
                }
            }
        }

        info!(
            "Index built: {} headwords, {} alternate forms",
            primary.len(),
            aliases.len()
        );

        Self { primary, aliases }
    }

    /// Entries whose lemma is written exactly `written_form`, in
    /// document order.
    pub fn entries_for(&self, written_form: &str) -> Option<&[EntryIdx]> {
        self.primary.get(written_form).map(Vec::as_slice)
    }

    /// The canonical written form behind the alternate spelling
    /// `alias`, if one was indexed.
    pub fn canonical_for(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Number of distinct headwords in the primary index.
    pub fn headword_count(&self) -> usize {
        self.primary.len()
    }

    /// Number of alternate spellings in the alias index.
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}
