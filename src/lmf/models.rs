//! Core data structures for the WN-LMF lexical resource model.
//!
//! This module defines the fundamental types used throughout the library:
//! - The document graph (lexicons, entries, senses, synsets)
//! - Typed arena indices used for all cross-references
//! - Part-of-speech and relation-type code tables
//!
//! Relations between senses and between synsets form cycles, and many
//! senses share one synset. All such references are therefore stored as
//! arena indices into vectors owned by [`LexicalResource`] rather than as
//! owning pointers. Indices are minted only by the parser, for the
//! resource that owns them.

/// Index of a [`LexicalEntry`] in its owning [`LexicalResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryIdx(pub(crate) usize);

/// Index of a [`Sense`] in its owning [`LexicalResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseIdx(pub(crate) usize);

/// Index of a [`Synset`] in its owning [`LexicalResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynsetIdx(pub(crate) usize);

/// Root of a parsed WN-LMF document.
///
/// Owns every node of the graph. Lexicons hold their entries and synsets
/// as indices into the shared arenas, and once parsing returns the whole
/// structure is read-only, so lookups may run concurrently without
/// locking.
#[derive(Debug, Default)]
pub struct LexicalResource {
    /// Lexicons in document order.
    pub lexicons: Vec<Lexicon>,
    pub(crate) entries: Vec<LexicalEntry>,
    pub(crate) senses: Vec<Sense>,
    pub(crate) synsets: Vec<Synset>,
}

impl LexicalResource {
    /// Returns the lexical entry at `idx`.
    pub fn entry(&self, idx: EntryIdx) -> &LexicalEntry {
        &self.entries[idx.0]
    }

    /// Returns the sense at `idx`.
    pub fn sense(&self, idx: SenseIdx) -> &Sense {
        &self.senses[idx.0]
    }

    /// Returns the synset at `idx`.
    pub fn synset(&self, idx: SynsetIdx) -> &Synset {
        &self.synsets[idx.0]
    }

    /// Total number of lexical entries across all lexicons.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of senses across all lexicons.
    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    /// Total number of synsets across all lexicons.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }
}

/// Top-level collection of entries and synsets for one language/edition.
#[derive(Debug, Default)]
pub struct Lexicon {
    pub id: String,
    pub label: String,
    pub language: String,
    pub email: String,
    pub license: String,
    pub version: String,
    /// External lexicons this one depends on.
    pub requires: Vec<Requires>,
    /// Entries owned by this lexicon, in document order.
    pub entries: Vec<EntryIdx>,
    /// Synsets owned by this lexicon, in document order.
    pub synsets: Vec<SynsetIdx>,
    pub syntactic_behaviours: Vec<SyntacticBehaviour>,
}

/// A dependency declaration on another lexicon.
#[derive(Debug, Default)]
pub struct Requires {
    pub id: String,
    pub version: String,
}

/// A headword entry pairing a lemma with its alternate forms and senses.
#[derive(Debug)]
pub struct LexicalEntry {
    pub id: String,
    /// The canonical citation form. Every entry has exactly one.
    pub lemma: Lemma,
    /// Alternate or inflected spellings, in document order.
    pub forms: Vec<Form>,
    /// Senses of this entry, in document order.
    pub senses: Vec<SenseIdx>,
    pub syntactic_behaviours: Vec<SyntacticBehaviour>,
}

/// The canonical spelling and part of speech of an entry.
#[derive(Debug, Default)]
pub struct Lemma {
    pub written_form: String,
    pub part_of_speech: PartOfSpeech,
    pub pronunciations: Vec<String>,
    pub tags: Vec<Tag>,
}

/// An alternate or inflected spelling of the owning entry's lemma.
#[derive(Debug, Default)]
pub struct Form {
    pub written_form: String,
    pub pronunciations: Vec<String>,
    pub tags: Vec<Tag>,
}

/// A categorized annotation on a lemma or form.
#[derive(Debug, Default)]
pub struct Tag {
    pub category: String,
    pub value: String,
}

/// A subcategorization frame attached to an entry or lexicon.
#[derive(Debug, Default)]
pub struct SyntacticBehaviour {
    pub subcategorization_frame: String,
}

/// One meaning of an entry, linked to a synset.
#[derive(Debug, Default)]
pub struct Sense {
    pub id: String,
    /// Synset id exactly as declared on the `synset` attribute.
    pub synset_id: String,
    /// Resolved synset reference. `None` when the declared id never
    /// appeared in the document.
    pub synset: Option<SynsetIdx>,
    pub relations: Vec<SenseRelation>,
    pub examples: Vec<String>,
    pub counts: Vec<String>,
}

/// A set of senses sharing one meaning, carrying its definitions.
#[derive(Debug, Default)]
pub struct Synset {
    pub id: String,
    /// Inter-lingual index identifier, linking this synset across
    /// languages.
    pub ili: String,
    pub definitions: Vec<String>,
    pub ili_definition: Option<String>,
    pub relations: Vec<SynsetRelation>,
    pub examples: Vec<String>,
}

/// A typed edge from one sense to another.
#[derive(Debug)]
pub struct SenseRelation {
    pub rel_type: RelationType,
    /// Target sense id exactly as declared on the `target` attribute.
    pub target_id: String,
    /// Resolved target. `None` when the declared id never appeared in
    /// the document.
    pub target: Option<SenseIdx>,
}

/// A typed edge from one synset to another.
#[derive(Debug)]
pub struct SynsetRelation {
    pub rel_type: RelationType,
    /// Target synset id exactly as declared on the `target` attribute.
    pub target_id: String,
    /// Resolved target. `None` when the declared id never appeared in
    /// the document.
    pub target: Option<SynsetIdx>,
}

/// Part of speech of a lemma, decoded from its single-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    AdjectiveSatellite,
    Conjunction,
    Adposition,
    Other,
    #[default]
    Unknown,
}

impl PartOfSpeech {
    /// Decodes a WN-LMF part-of-speech code.
    ///
    /// Unmapped codes decode to [`PartOfSpeech::Unknown`]; decoding
    /// never fails.
    pub fn from_code(code: char) -> Self {
        match code {
            'n' => PartOfSpeech::Noun,
            'v' => PartOfSpeech::Verb,
            'a' => PartOfSpeech::Adjective,
            'r' => PartOfSpeech::Adverb,
            's' => PartOfSpeech::AdjectiveSatellite,
            'c' => PartOfSpeech::Conjunction,
            'p' => PartOfSpeech::Adposition,
            'x' => PartOfSpeech::Other,
            _ => PartOfSpeech::Unknown,
        }
    }

    /// Human-readable label for this part of speech.
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::AdjectiveSatellite => "Adjective Satellite",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Adposition => "Adposition",
            PartOfSpeech::Other => "Other",
            PartOfSpeech::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of a sense or synset relation, decoded from its `relType` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationType {
    Antonym,
    Also,
    Participle,
    Pertainym,
    Derivation,
    DomainTopic,
    HasDomainTopic,
    DomainRegion,
    HasDomainRegion,
    Exemplifies,
    IsExemplifiedBy,
    Similar,
    Other,
    SimpleAspectIp,
}

impl RelationType {
    /// Decodes a WN-LMF `relType` name.
    ///
    /// Unmapped names decode to [`RelationType::Other`]; decoding never
    /// fails.
    pub fn from_code(code: &str) -> Self {
        match code {
            "antonym" => RelationType::Antonym,
            "also" => RelationType::Also,
            "participle" => RelationType::Participle,
            "pertainym" => RelationType::Pertainym,
            "derivation" => RelationType::Derivation,
            "domain_topic" => RelationType::DomainTopic,
            "has_domain_topic" => RelationType::HasDomainTopic,
            "domain_region" => RelationType::DomainRegion,
            "has_domain_region" => RelationType::HasDomainRegion,
            "exemplifies" => RelationType::Exemplifies,
            "is_exemplified_by" => RelationType::IsExemplifiedBy,
            "similar" => RelationType::Similar,
            "other" => RelationType::Other,
            "simple_aspect_ip" => RelationType::SimpleAspectIp,
            _ => RelationType::Other,
        }
    }

    /// The WN-LMF `relType` name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Antonym => "antonym",
            RelationType::Also => "also",
            RelationType::Participle => "participle",
            RelationType::Pertainym => "pertainym",
            RelationType::Derivation => "derivation",
            RelationType::DomainTopic => "domain_topic",
            RelationType::HasDomainTopic => "has_domain_topic",
            RelationType::DomainRegion => "domain_region",
            RelationType::HasDomainRegion => "has_domain_region",
            RelationType::Exemplifies => "exemplifies",
            RelationType::IsExemplifiedBy => "is_exemplified_by",
            RelationType::Similar => "similar",
            RelationType::Other => "other",
            RelationType::SimpleAspectIp => "simple_aspect_ip",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
