use super::annotation::{Annotation, AnnotationMap};
use serde::Serialize;

/// Where an entry lives in the host: the named multi-model collection and
/// its 1-based ordinal (model/state number) inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    pub collection: String,
    pub ordinal: usize,
}

impl Identity {
    pub fn new(collection: impl Into<String>, ordinal: usize) -> Self {
        Self {
            collection: collection.into(),
            ordinal,
        }
    }
}

/// One docked model: its annotations, its identity and its raw coordinate
/// payload.
///
/// Entries are created by [`DockedStore::load`](crate::DockedStore::load)
/// only; the payload travels with its metadata so the two can never drift
/// apart.
///
/// Serializes flat as `collection`, `ordinal` and `annotations`; the payload
/// is left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockedEntry {
    #[serde(flatten)]
    pub(crate) identity: Identity,
    pub(crate) annotations: AnnotationMap,
    #[serde(skip)]
    pub(crate) payload: String,
}

impl DockedEntry {
    pub(crate) fn new(annotations: AnnotationMap, identity: Identity, payload: String) -> Self {
        Self {
            annotations,
            identity,
            payload,
        }
    }

    #[inline]
    pub fn annotations(&self) -> &AnnotationMap {
        &self.annotations
    }

    /// Value of `name`; a name this entry never saw reads as absent.
    #[inline]
    pub fn annotation(&self, name: &str) -> Annotation {
        self.annotations
            .get(name)
            .copied()
            .unwrap_or(Annotation::Absent)
    }

    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[inline]
    pub fn collection(&self) -> &str {
        &self.identity.collection
    }

    #[inline]
    pub fn ordinal(&self) -> usize {
        self.identity.ordinal
    }

    /// Coordinate lines of this model, terminated by the model-end marker.
    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// A named multi-model text block handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub models: usize,
    pub text: String,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            models: 0,
            text: String::new(),
        }
    }

    pub fn push(&mut self, payload: &str) {
        self.text.push_str(payload);
        self.models += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models == 0
    }
}
