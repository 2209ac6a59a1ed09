//! The docked-entry store.
//!
//! A [`DockedStore`] holds every model of the most recent load operation as
//! an ordered list of [`DockedEntry`] values. Each entry carries its
//! annotations, its identity in the host (collection name and ordinal) and
//! its coordinate payload, so metadata and coordinates cannot fall out of
//! step under removal or sorting.
//!
//! # Operations
//!
//! - [`DockedStore::load`] — replace the contents from Dock4 text and split
//!   them into output collections according to a [`PartitionMode`]
//! - [`DockedStore::remove_at`] — drop one entry and close the ordinal and
//!   cluster-rank gaps it leaves
//! - [`DockedStore::sort_by`] — stable reorder by one annotation field
//!
//! # Invariants
//!
//! After `load` and after `remove_at` with renumbering, the ordinals within
//! every collection name are exactly `1..=n`. After `load`, every entry has
//! the same annotation key set.

mod error;
mod partition;
mod sort;

pub use error::Error;

use crate::io::dock4;
use crate::model::annotation::{self, Annotation, CLUSTER, CLUSTER_RANK};
use crate::model::entry::{Collection, DockedEntry, Identity};
use crate::model::mode::PartitionMode;
use indexmap::IndexSet;

/// Ordered, index-addressable collection of docked entries.
///
/// # Examples
///
/// ```
/// use viewdock::{DockedStore, PartitionMode};
///
/// let text = "\
/// REMARK Cluster: 0
/// REMARK ClusterRank: 0
/// REMARK deltaG: -7.2
/// ATOM      1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
/// REMARK Cluster: 0
/// REMARK ClusterRank: 1
/// REMARK deltaG: -6.8
/// ATOM      1  C1  LIG A   1       1.000   0.000   0.000  1.00  0.00           C
/// ";
///
/// let mut store = DockedStore::new();
/// let collections = store.load(text.lines(), "ligands", PartitionMode::AllOne)?;
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(collections.len(), 1);
/// assert_eq!(collections[0].name, "ligands");
/// assert_eq!(collections[0].models, 2);
///
/// store.sort_by("deltaG", false)?;
/// assert_eq!(store.entries()[0].ordinal(), 1);
///
/// let removed = store.remove_at(0, true)?;
/// assert_eq!(removed.ordinal(), 1);
/// assert_eq!(store.entries()[0].ordinal(), 1);
/// # Ok::<(), viewdock::StoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DockedStore {
    entries: Vec<DockedEntry>,
}

impl DockedStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[DockedEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&DockedEntry> {
        self.entries.get(index)
    }

    /// Coordinate payloads, index-aligned with [`entries`](Self::entries).
    pub fn payloads(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(DockedEntry::payload)
    }

    /// Annotation names present in at least one entry, in first-seen order.
    pub fn schema(&self) -> IndexSet<&str> {
        self.entries
            .iter()
            .flat_map(|e| e.annotations.keys().map(String::as_str))
            .collect()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.annotations.contains_key(name))
    }

    /// Collection names currently in use, in order of first appearance.
    pub fn collections(&self) -> IndexSet<&str> {
        self.entries.iter().map(DockedEntry::collection).collect()
    }

    /// Replaces the store contents with the models found in `lines`.
    ///
    /// Lines are trimmed and blank ones dropped before segmentation. Each
    /// coordinate payload becomes one entry named `name` with ordinals in
    /// file order; annotation maps are equalized across the batch, and the
    /// batch is then partitioned according to `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingClusterFields`] if `mode` needs the cluster
    /// annotations and the batch lacks them. The parsed entries are kept,
    /// unpartitioned, and no collections are produced.
    pub fn load<I, S>(
        &mut self,
        lines: I,
        name: &str,
        mode: PartitionMode,
    ) -> Result<Vec<Collection>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        let mut entries: Vec<DockedEntry> = dock4::models(&lines)
            .into_iter()
            .enumerate()
            .map(|(i, model)| {
                DockedEntry::new(model.annotations, Identity::new(name, i + 1), model.payload)
            })
            .collect();

        annotation::equalize(entries.iter_mut().map(|e| &mut e.annotations));

        self.entries = entries;

        match partition::partition(&mut self.entries, name, mode) {
            Ok(collections) => {
                log::info!(
                    "loaded {} entries as '{name}' ({mode}), {} collection(s)",
                    self.entries.len(),
                    collections.len()
                );
                Ok(collections)
            }
            Err(e) => {
                log::warn!("failed splitting '{name}' while loading: {e}");
                Err(e)
            }
        }
    }

    /// Removes the entry at `index`.
    ///
    /// With `renumber`, entries of the same collection whose ordinal was
    /// above the removed one move down by one. If the store carries both
    /// `Cluster` and `ClusterRank`, entries of the same cluster ranked below
    /// the removed one also move up one rank.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] and leaves the store untouched if
    /// `index >= len()`.
    pub fn remove_at(&mut self, index: usize, renumber: bool) -> Result<DockedEntry, Error> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let clustered = self.has_field(CLUSTER) && self.has_field(CLUSTER_RANK);
        let removed = self.entries.remove(index);

        if renumber {
            if clustered {
                self.close_rank_gap(&removed);
            }
            self.close_ordinal_gap(&removed);
        }

        log::debug!(
            "removed entry {index} ({} #{})",
            removed.collection(),
            removed.ordinal()
        );
        Ok(removed)
    }

    fn close_rank_gap(&mut self, removed: &DockedEntry) {
        let cluster = removed.annotation(CLUSTER);
        let Some(rank) = removed.annotation(CLUSTER_RANK).as_integer() else {
            return;
        };

        for entry in &mut self.entries {
            if entry.annotation(CLUSTER) != cluster {
                continue;
            }
            if let Some(Annotation::Integer(r)) = entry.annotations.get_mut(CLUSTER_RANK) {
                if *r > rank {
                    *r -= 1;
                }
            }
        }
    }

    fn close_ordinal_gap(&mut self, removed: &DockedEntry) {
        for entry in &mut self.entries {
            if entry.identity.collection == removed.identity.collection
                && entry.identity.ordinal > removed.identity.ordinal
            {
                entry.identity.ordinal -= 1;
            }
        }
    }

    /// Stable sort by the value of `field`; ordinals are not touched.
    ///
    /// Absent values sort as least.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] without reordering anything if no
    /// entry carries `field`.
    pub fn sort_by(&mut self, field: &str, descending: bool) -> Result<(), Error> {
        if !self.has_field(field) {
            return Err(Error::UnknownField(field.to_string()));
        }

        self.entries
            .sort_by(|a, b| sort::compare(a, b, field, descending));
        Ok(())
    }

    /// Output collections for the current contents, grouped by collection
    /// name and ordered by ordinal.
    pub fn render(&self) -> Vec<Collection> {
        partition::collect(&self.entries)
    }
}
