//! Graph construction from the structural event stream.
//!
//! The builder materializes typed nodes from open events, routes bare
//! character data by which text container is currently open, attaches
//! completed nodes to their parents on close events, and records sense
//! and synset ids for the resolution pass that runs after the document
//! is consumed.
//!
//! Unknown elements and attributes are ignored. A recognized element in
//! the wrong place, a nested duplicate of a container that cannot nest,
//! or an entry without a lemma abort the parse with a structural error.

use std::collections::HashMap;

use super::error::{LmfError, Result};
use super::models::{
    EntryIdx, Form, Lemma, LexicalEntry, LexicalResource, Lexicon, PartOfSpeech, RelationType,
    Requires, Sense, SenseIdx, SenseRelation, Synset, SynsetIdx, SynsetRelation,
    SyntacticBehaviour, Tag,
};
use super::scan::OpenTag;

/// Sense and synset id registries accumulated during parsing.
///
/// Maps each declared id to its arena index. Later declarations of the
/// same id replace earlier ones. The registries feed the resolution
/// pass and are discarded once it completes.
#[derive(Default)]
pub struct IdRegistry {
    pub senses: HashMap<String, SenseIdx>,
    pub synsets: HashMap<String, SynsetIdx>,
}

/// A lexical entry under construction.
///
/// The lemma arrives as a child element, so it stays optional until the
/// entry closes; an entry that closes without one is a structural error.
#[derive(Default)]
struct EntryDraft {
    id: String,
    lemma: Option<Lemma>,
    forms: Vec<Form>,
    senses: Vec<SenseIdx>,
    syntactic_behaviours: Vec<SyntacticBehaviour>,
}

/// Stateful consumer of open/close/text events.
///
/// One slot per container kind doubles as the context flag for routing
/// bare text: `Some` means that element is currently open.
#[derive(Default)]
pub struct GraphBuilder {
    resource: LexicalResource,
    ids: IdRegistry,

    lexicon: Option<Lexicon>,
    entry: Option<EntryDraft>,
    lemma: Option<Lemma>,
    form: Option<Form>,
    sense: Option<Sense>,
    synset: Option<Synset>,
    requires: Option<Requires>,
    tag: Option<Tag>,

    definition: Option<String>,
    ili_definition: Option<String>,
    example: Option<String>,
    pronunciation: Option<String>,
    count: Option<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles an element-open event.
    ///
    /// # Errors
    /// Returns [`LmfError::Structural`] when a recognized element opens
    /// outside its required container or nests inside itself.
    pub fn open_element(&mut self, tag: OpenTag) -> Result<()> {
        match tag.name.as_str() {
            "Lexicon" => self.open_lexicon(tag),
            "Requires" => self.open_requires(tag),
            "LexicalEntry" => self.open_entry(tag),
            "Lemma" => self.open_lemma(tag),
            "Form" => self.open_form(tag),
            "Tag" => self.open_tag_annotation(tag),
            "SyntacticBehaviour" => self.open_syntactic_behaviour(tag),
            "Synset" => self.open_synset(tag),
            "Sense" => self.open_sense(tag),
            "SenseRelation" => self.open_sense_relation(tag),
            "SynsetRelation" => self.open_synset_relation(tag),
            "Definition" => {
                open_text_container(&mut self.definition, self.synset.is_some(), "Definition", "<Synset>")
            }
            "ILIDefinition" => open_text_container(
                &mut self.ili_definition,
                self.synset.is_some(),
                "ILIDefinition",
                "<Synset>",
            ),
            "Example" => open_text_container(
                &mut self.example,
                self.sense.is_some() || self.synset.is_some(),
                "Example",
                "<Sense> or <Synset>",
            ),
            "Pronunciation" => open_text_container(
                &mut self.pronunciation,
                self.lemma.is_some() || self.form.is_some(),
                "Pronunciation",
                "<Lemma> or <Form>",
            ),
            "Count" => open_text_container(&mut self.count, self.sense.is_some(), "Count", "<Sense>"),
            _ => Ok(()),
        }
    }

    /// Handles an element-close event, attaching the completed node to
    /// its parent in document order.
    ///
    /// Closing a synset or sense also registers its id for the
    /// resolution pass.
    pub fn close_element(&mut self, name: &str) -> Result<()> {
        match name {
            "Lexicon" => self.close_lexicon(),
            "Requires" => self.close_requires(),
            "LexicalEntry" => self.close_entry(),
            "Lemma" => self.close_lemma(),
            "Form" => self.close_form(),
            "Tag" => self.close_tag_annotation(),
            "Synset" => self.close_synset(),
            "Sense" => self.close_sense(),
            "Definition" => self.close_definition(),
            "ILIDefinition" => self.close_ili_definition(),
            "Example" => self.close_example(),
            "Pronunciation" => self.close_pronunciation(),
            "Count" => self.close_count(),
            _ => Ok(()),
        }
    }

    /// Routes bare character data to every open text container.
    ///
    /// A later write replaces an earlier one within the same container.
    /// Text arriving while no container is open is discarded.
    pub fn text(&mut self, text: &str) {
        if let Some(value) = self.definition.as_mut() {
            *value = text.to_string();
        }
        if let Some(value) = self.ili_definition.as_mut() {
            *value = text.to_string();
        }
        if let Some(value) = self.example.as_mut() {
            *value = text.to_string();
        }
        if let Some(value) = self.pronunciation.as_mut() {
            *value = text.to_string();
        }
        if let Some(value) = self.count.as_mut() {
            *value = text.to_string();
        }
        if let Some(tag) = self.tag.as_mut() {
            tag.value = text.to_string();
        }
    }

    /// Consumes the builder, yielding the assembled graph and the id
    /// registries for the resolution pass.
    ///
    /// # Errors
    /// Returns [`LmfError::Structural`] when the document ended while a
    /// container was still open, so a truncated document never yields a
    /// partial graph.
    pub fn finish(self) -> Result<(LexicalResource, IdRegistry)> {
        if let Some(name) = self.open_container_name() {
            return Err(LmfError::Structural(format!(
                "document ended with <{}> still open",
                name
            )));
        }
        Ok((self.resource, self.ids))
    }

    /// Name of the innermost container still open, if any.
    fn open_container_name(&self) -> Option<&'static str> {
        if self.definition.is_some() {
            Some("Definition")
        } else if self.ili_definition.is_some() {
            Some("ILIDefinition")
        } else if self.example.is_some() {
            Some("Example")
        } else if self.pronunciation.is_some() {
            Some("Pronunciation")
        } else if self.count.is_some() {
            Some("Count")
        } else if self.tag.is_some() {
            Some("Tag")
        } else if self.lemma.is_some() {
            Some("Lemma")
        } else if self.form.is_some() {
            Some("Form")
        } else if self.requires.is_some() {
            Some("Requires")
        } else if self.sense.is_some() {
            Some("Sense")
        } else if self.synset.is_some() {
            Some("Synset")
        } else if self.entry.is_some() {
            Some("LexicalEntry")
        } else if self.lexicon.is_some() {
            Some("Lexicon")
        } else {
            None
        }
    }

    // --- Open handlers ---

    fn open_lexicon(&mut self, tag: OpenTag) -> Result<()> {
        if self.lexicon.is_some() {
            return Err(nested("Lexicon"));
        }
        let mut lexicon = Lexicon::default();
        for (key, value) in tag.attrs {
            match key.as_str() {
                "id" => lexicon.id = value,
                "label" => lexicon.label = value,
                "language" => lexicon.language = value,
                "email" => lexicon.email = value,
                "license" => lexicon.license = value,
                "version" => lexicon.version = value,
                _ => {}
            }
        }
        self.lexicon = Some(lexicon);
        Ok(())
    }

    fn open_requires(&mut self, tag: OpenTag) -> Result<()> {
        if self.lexicon.is_none() {
            return Err(misplaced("Requires", "<Lexicon>"));
        }
        if self.requires.is_some() {
            return Err(nested("Requires"));
        }
        let mut requires = Requires::default();
        for (key, value) in tag.attrs {
            match key.as_str() {
                "id" => requires.id = value,
                "version" => requires.version = value,
                _ => {}
            }
        }
        self.requires = Some(requires);
        Ok(())
    }

    fn open_entry(&mut self, tag: OpenTag) -> Result<()> {
        if self.lexicon.is_none() {
            return Err(misplaced("LexicalEntry", "<Lexicon>"));
        }
        if self.entry.is_some() {
            return Err(nested("LexicalEntry"));
        }
        self.entry = Some(EntryDraft {
            id: attr(tag, "id"),
            ..EntryDraft::default()
        });
        Ok(())
    }

    fn open_lemma(&mut self, tag: OpenTag) -> Result<()> {
        if self.entry.is_none() {
            return Err(misplaced("Lemma", "<LexicalEntry>"));
        }
        if self.lemma.is_some() {
            return Err(nested("Lemma"));
        }
        let mut lemma = Lemma::default();
        for (key, value) in tag.attrs {
            match key.as_str() {
                "writtenForm" => lemma.written_form = value,
                "partOfSpeech" => {
                    lemma.part_of_speech = value
                        .chars()
                        .next()
                        .map(PartOfSpeech::from_code)
                        .unwrap_or_default();
                }
                _ => {}
            }
        }
        self.lemma = Some(lemma);
        Ok(())
    }

    fn open_form(&mut self, tag: OpenTag) -> Result<()> {
        if self.entry.is_none() {
            return Err(misplaced("Form", "<LexicalEntry>"));
        }
        if self.form.is_some() {
            return Err(nested("Form"));
        }
        self.form = Some(Form {
            written_form: attr(tag, "writtenForm"),
            ..Form::default()
        });
        Ok(())
    }

    fn open_tag_annotation(&mut self, tag: OpenTag) -> Result<()> {
        if self.lemma.is_none() && self.form.is_none() {
            return Err(misplaced("Tag", "<Lemma> or <Form>"));
        }
        if self.tag.is_some() {
            return Err(nested("Tag"));
        }
        self.tag = Some(Tag {
            category: attr(tag, "category"),
            ..Tag::default()
        });
        Ok(())
    }

    /// Syntactic behaviours carry no children, so they attach as soon
    /// as they open: to the open entry if any, otherwise to the lexicon.
    fn open_syntactic_behaviour(&mut self, tag: OpenTag) -> Result<()> {
        let behaviour = SyntacticBehaviour {
            subcategorization_frame: attr(tag, "subcategorizationFrame"),
        };
        if let Some(entry) = self.entry.as_mut() {
            entry.syntactic_behaviours.push(behaviour);
        } else if let Some(lexicon) = self.lexicon.as_mut() {
            lexicon.syntactic_behaviours.push(behaviour);
        } else {
            return Err(misplaced("SyntacticBehaviour", "<Lexicon>"));
        }
        Ok(())
    }

    fn open_synset(&mut self, tag: OpenTag) -> Result<()> {
        if self.lexicon.is_none() {
            return Err(misplaced("Synset", "<Lexicon>"));
        }
        if self.synset.is_some() {
            return Err(nested("Synset"));
        }
        let mut synset = Synset::default();
        for (key, value) in tag.attrs {
            match key.as_str() {
                "id" => synset.id = value,
                "ili" => synset.ili = value,
                _ => {}
            }
        }
        self.synset = Some(synset);
        Ok(())
    }

    fn open_sense(&mut self, tag: OpenTag) -> Result<()> {
        if self.entry.is_none() {
            return Err(misplaced("Sense", "<LexicalEntry>"));
        }
        if self.sense.is_some() {
            return Err(nested("Sense"));
        }
        let mut sense = Sense::default();
        for (key, value) in tag.attrs {
            match key.as_str() {
                "id" => sense.id = value,
                "synset" => sense.synset_id = value,
                _ => {}
            }
        }
        self.sense = Some(sense);
        Ok(())
    }

    /// Relations attach to their owner when they open, carrying the
    /// declared target id with an empty resolved target. Targets may
    /// legally point at ids declared later in the document.
    fn open_sense_relation(&mut self, tag: OpenTag) -> Result<()> {
        let sense = self
            .sense
            .as_mut()
            .ok_or_else(|| misplaced("SenseRelation", "<Sense>"))?;
        let (rel_type, target_id) = relation_attrs(tag);
        sense.relations.push(SenseRelation {
            rel_type,
            target_id,
            target: None,
        });
        Ok(())
    }

    fn open_synset_relation(&mut self, tag: OpenTag) -> Result<()> {
        let synset = self
            .synset
            .as_mut()
            .ok_or_else(|| misplaced("SynsetRelation", "<Synset>"))?;
        let (rel_type, target_id) = relation_attrs(tag);
        synset.relations.push(SynsetRelation {
            rel_type,
            target_id,
            target: None,
        });
        Ok(())
    }

    // --- Close handlers ---

    fn close_lexicon(&mut self) -> Result<()> {
        let lexicon = self.lexicon.take().ok_or_else(|| unopened("Lexicon"))?;
        self.resource.lexicons.push(lexicon);
        Ok(())
    }

    fn close_requires(&mut self) -> Result<()> {
        let requires = self.requires.take().ok_or_else(|| unopened("Requires"))?;
        let lexicon = self
            .lexicon
            .as_mut()
            .ok_or_else(|| misplaced("Requires", "<Lexicon>"))?;
        lexicon.requires.push(requires);
        Ok(())
    }

    fn close_entry(&mut self) -> Result<()> {
        let draft = self.entry.take().ok_or_else(|| unopened("LexicalEntry"))?;
        let EntryDraft {
            id,
            lemma,
            forms,
            senses,
            syntactic_behaviours,
        } = draft;
        let lemma = lemma.ok_or_else(|| {
            LmfError::Structural(format!("<LexicalEntry> '{}' closed without a <Lemma>", id))
        })?;
        let lexicon = self
            .lexicon
            .as_mut()
            .ok_or_else(|| misplaced("LexicalEntry", "<Lexicon>"))?;
        let idx = EntryIdx(self.resource.entries.len());
        self.resource.entries.push(LexicalEntry {
            id,
            lemma,
            forms,
            senses,
            syntactic_behaviours,
        });
        lexicon.entries.push(idx);
        Ok(())
    }

    fn close_lemma(&mut self) -> Result<()> {
        let lemma = self.lemma.take().ok_or_else(|| unopened("Lemma"))?;
        let entry = self
            .entry
            .as_mut()
            .ok_or_else(|| misplaced("Lemma", "<LexicalEntry>"))?;
        entry.lemma = Some(lemma);
        Ok(())
    }

    fn close_form(&mut self) -> Result<()> {
        let form = self.form.take().ok_or_else(|| unopened("Form"))?;
        let entry = self
            .entry
            .as_mut()
            .ok_or_else(|| misplaced("Form", "<LexicalEntry>"))?;
        entry.forms.push(form);
        Ok(())
    }

    fn close_tag_annotation(&mut self) -> Result<()> {
        let annotation = self.tag.take().ok_or_else(|| unopened("Tag"))?;
        if let Some(lemma) = self.lemma.as_mut() {
            lemma.tags.push(annotation);
        } else if let Some(form) = self.form.as_mut() {
            form.tags.push(annotation);
        } else {
            return Err(misplaced("Tag", "<Lemma> or <Form>"));
        }
        Ok(())
    }

    fn close_synset(&mut self) -> Result<()> {
        let synset = self.synset.take().ok_or_else(|| unopened("Synset"))?;
        let lexicon = self
            .lexicon
            .as_mut()
            .ok_or_else(|| misplaced("Synset", "<Lexicon>"))?;
        let idx = SynsetIdx(self.resource.synsets.len());
        self.ids.synsets.insert(synset.id.clone(), idx);
        self.resource.synsets.push(synset);
        lexicon.synsets.push(idx);
        Ok(())
    }

    fn close_sense(&mut self) -> Result<()> {
        let sense = self.sense.take().ok_or_else(|| unopened("Sense"))?;
        let entry = self
            .entry
            .as_mut()
            .ok_or_else(|| misplaced("Sense", "<LexicalEntry>"))?;
        let idx = SenseIdx(self.resource.senses.len());
        self.ids.senses.insert(sense.id.clone(), idx);
        self.resource.senses.push(sense);
        entry.senses.push(idx);
        Ok(())
    }

    fn close_definition(&mut self) -> Result<()> {
        let text = self.definition.take().ok_or_else(|| unopened("Definition"))?;
        let synset = self
            .synset
            .as_mut()
            .ok_or_else(|| misplaced("Definition", "<Synset>"))?;
        synset.definitions.push(text);
        Ok(())
    }

    fn close_ili_definition(&mut self) -> Result<()> {
        let text = self
            .ili_definition
            .take()
            .ok_or_else(|| unopened("ILIDefinition"))?;
        let synset = self
            .synset
            .as_mut()
            .ok_or_else(|| misplaced("ILIDefinition", "<Synset>"))?;
        synset.ili_definition = Some(text);
        Ok(())
    }

    fn close_example(&mut self) -> Result<()> {
        let text = self.example.take().ok_or_else(|| unopened("Example"))?;
        if let Some(sense) = self.sense.as_mut() {
            sense.examples.push(text);
        } else if let Some(synset) = self.synset.as_mut() {
            synset.examples.push(text);
        } else {
            return Err(misplaced("Example", "<Sense> or <Synset>"));
        }
        Ok(())
    }

    fn close_pronunciation(&mut self) -> Result<()> {
        let text = self
            .pronunciation
            .take()
            .ok_or_else(|| unopened("Pronunciation"))?;
        if let Some(lemma) = self.lemma.as_mut() {
            lemma.pronunciations.push(text);
        } else if let Some(form) = self.form.as_mut() {
            form.pronunciations.push(text);
        } else {
            return Err(misplaced("Pronunciation", "<Lemma> or <Form>"));
        }
        Ok(())
    }

    fn close_count(&mut self) -> Result<()> {
        let text = self.count.take().ok_or_else(|| unopened("Count"))?;
        let sense = self
            .sense
            .as_mut()
            .ok_or_else(|| misplaced("Count", "<Sense>"))?;
        sense.counts.push(text);
        Ok(())
    }
}

// --- Shared helpers ---

fn open_text_container(
    slot: &mut Option<String>,
    parent_present: bool,
    element: &str,
    parent: &str,
) -> Result<()> {
    if !parent_present {
        return Err(misplaced(element, parent));
    }
    if slot.is_some() {
        return Err(nested(element));
    }
    *slot = Some(String::new());
    Ok(())
}

/// Value of the attribute `name`, or empty when absent.
fn attr(tag: OpenTag, name: &str) -> String {
    tag.attrs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Decoded `relType` and declared `target` id of a relation tag.
fn relation_attrs(tag: OpenTag) -> (RelationType, String) {
    let mut rel_type = RelationType::Other;
    let mut target_id = String::new();
    for (key, value) in tag.attrs {
        match key.as_str() {
            "relType" => rel_type = RelationType::from_code(&value),
            "target" => target_id = value,
            _ => {}
        }
    }
    (rel_type, target_id)
}

fn nested(element: &str) -> LmfError {
    LmfError::Structural(format!("nested <{}> element", element))
}

fn misplaced(element: &str, parent: &str) -> LmfError {
    LmfError::Structural(format!("<{}> outside {}", element, parent))
}

fn unopened(element: &str) -> LmfError {
    LmfError::Structural(format!("closed <{}> that was never opened", element))
}
