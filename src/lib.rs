//! An ordered, re-indexable store for batches of molecular docking results.
//!
//! Docking engines such as SwissDock emit their poses as one concatenated
//! multi-model PDB stream, each model preceded by `REMARK <name> : <value>`
//! lines that carry its scores and cluster membership. `viewdock` splits
//! such a stream into entries, groups them into named multi-model
//! collections for a visualization host, and keeps per-entry metadata and
//! coordinates consistent while entries are sorted or removed.
//!
//! # Features
//!
//! - **Annotation parsing** — `REMARK` score lines become typed values;
//!   `Cluster` and `ClusterRank` are integers, everything else floating point
//! - **Segmentation** — coordinate runs are cut into one payload per model
//!   and paired with the annotations preceding them
//! - **Partitioning** — load everything as one collection, only the best pose
//!   of each cluster, or one collection per cluster
//! - **Re-indexing** — removal closes the gaps left in ordinals and cluster
//!   ranks; sorting by any annotation is stable with absent values least
//! - **Manifests** — SwissDock ChimeraX files are resolved to their target and
//!   cluster through a pluggable [`io::Fetcher`]
//!
//! # Quick Start
//!
//! ```
//! use viewdock::{Collection, DockedStore, PartitionMode};
//! use viewdock::io::load_dock4;
//!
//! let text = "\
//! REMARK Cluster: 0
//! REMARK ClusterRank: 0
//! REMARK deltaG: -8.02
//! ATOM      1  C1  LIG A   1      12.104  -3.511   4.982  1.00  0.00           C
//! REMARK Cluster: 0
//! REMARK ClusterRank: 1
//! REMARK deltaG: -7.66
//! ATOM      1  C1  LIG A   1      12.431  -3.102   5.417  1.00  0.00           C
//! REMARK Cluster: 1
//! REMARK ClusterRank: 0
//! REMARK deltaG: -7.31
//! ATOM      1  C1  LIG A   1       2.880   9.045  -1.370  1.00  0.00           C
//! ";
//!
//! let mut store = DockedStore::new();
//! let mut host: Vec<Collection> = Vec::new();
//! load_dock4(text.as_bytes(), &mut store, "ligands", PartitionMode::AllByCluster, &mut host)?;
//!
//! // One multi-model object per cluster
//! assert_eq!(host.len(), 2);
//! assert_eq!(host[0].name, "ligands-0");
//! assert_eq!(host[0].models, 2);
//! assert_eq!(host[1].name, "ligands-1");
//!
//! // Drop the best pose of cluster 0; its sibling becomes rank 0, model 1
//! store.remove_at(0, true)?;
//! let next = &store.entries()[0];
//! assert_eq!(next.ordinal(), 1);
//! assert_eq!(next.annotation("ClusterRank").as_integer(), Some(0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Dock4 parsing, ChimeraX manifests, PDB output and the
//!   renderer/fetcher seams
//! - [`DockedStore`] — Load, sort and remove operations
//!
//! # Data Types
//!
//! - [`DockedEntry`] — Annotations, identity and coordinates of one model
//! - [`Identity`] — Collection name and 1-based ordinal in the host
//! - [`Annotation`] — Integer, floating-point or absent annotation value
//! - [`Collection`] — Named multi-model text handed to the host
//! - [`PartitionMode`] — How a load is split into collections

mod model;
mod store;

pub mod io;

pub use model::annotation::{
    Annotation, AnnotationMap, CLUSTER, CLUSTER_RANK, INTEGER_FIELDS, is_integer_field,
};
pub use model::entry::{Collection, DockedEntry, Identity};
pub use model::mode::{ParsePartitionModeError, PartitionMode};

pub use store::DockedStore;
pub use store::Error as StoreError;
