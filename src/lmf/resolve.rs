//! Deferred resolution of relation targets and sense-to-synset links.
//!
//! Relations may legally point at ids declared later in the document,
//! so no link is followed while parsing. Once the whole document has
//! been consumed this module patches the graph in place from the id
//! registries, in three independent passes:
//! 1. every sense relation target, from the sense-id registry
//! 2. every synset relation target, from the synset-id registry
//! 3. every sense's synset reference, from the synset-id registry
//!
//! No pass depends on another's output. An id that was never declared
//! leaves its reference empty; the miss is logged but never fails the
//! parse.

use log::{debug, warn};

use super::builder::IdRegistry;
use super::models::LexicalResource;

/// Patches all deferred references in `resource` from the registries.
pub fn link_references(resource: &mut LexicalResource, ids: &IdRegistry) {
    let mut dangling = 0usize;
    for sense in &mut resource.senses {
        for relation in &mut sense.relations {
            relation.target = ids.senses.get(&relation.target_id).copied();
            if relation.target.is_none() {
                debug!(
                    "sense relation ({}) targets undeclared sense id {:?}",
                    relation.rel_type, relation.target_id
                );
                dangling += 1;
            }
        }
    }
    if dangling > 0 {
        warn!("{} sense relation(s) target sense ids never declared in the document", dangling);
    }

    let mut dangling = 0usize;
    for synset in &mut resource.synsets {
        for relation in &mut synset.relations {
            relation.target = ids.synsets.get(&relation.target_id).copied();
            if relation.target.is_none() {
                debug!(
                    "synset relation ({}) targets undeclared synset id {:?}",
                    relation.rel_type, relation.target_id
                );
                dangling += 1;
            }
        }
    }
    if dangling > 0 {
        warn!("{} synset relation(s) target synset ids never declared in the document", dangling);
    }

    let mut dangling = 0usize;
    for sense in &mut resource.senses {
        sense.synset = ids.synsets.get(&sense.synset_id).copied();
        if sense.synset.is_none() {
            debug!(
                "sense {:?} references undeclared synset id {:?}",
                sense.id, sense.synset_id
            );
            dangling += 1;
        }
    }
    if dangling > 0 {
        warn!("{} sense(s) reference synset ids never declared in the document", dangling);
    }
}
