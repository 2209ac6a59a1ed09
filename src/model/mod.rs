//! Core data types for docked structures.
//!
//! - [`annotation`] – Typed scoring annotations (`REMARK name : value`) and
//!   the distinguished `Cluster`/`ClusterRank` fields.
//! - [`entry`] – Docked entries, their host identity, and the output
//!   collections handed to the renderer.
//! - [`mode`] – Partition mode selector.

pub mod annotation;
pub mod entry;
pub mod mode;
