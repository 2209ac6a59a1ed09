//! Error types for the docked-entry store.

use crate::model::mode::PartitionMode;
use thiserror::Error;

/// Errors raised by [`DockedStore`](super::DockedStore) operations.
///
/// None of them leave the store half-mutated: a failed sort or removal
/// changes nothing, and a failed partition leaves the freshly loaded
/// entries in place, unpartitioned.
#[derive(Debug, Error)]
pub enum Error {
    /// A clustering partition mode was requested but the loaded entries do
    /// not carry both `Cluster` and `ClusterRank`.
    #[error("cannot split in '{mode}' mode: missing 'Cluster' or 'ClusterRank' annotations")]
    MissingClusterFields {
        /// The requested mode.
        mode: PartitionMode,
    },

    /// The annotation name is not present in any stored entry.
    #[error("unknown annotation field '{0}'")]
    UnknownField(String),

    /// Index past the end of the store.
    #[error("entry index {index} is out of range (store holds {len} entries)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of stored entries.
        len: usize,
    },
}
