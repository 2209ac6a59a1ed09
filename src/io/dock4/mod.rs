//! SwissDock "Dock4" cluster files: PDB text where each model's coordinate
//! records are preceded by `REMARK <name> : <value>` scoring lines.

pub mod remark;
pub mod segment;

pub use segment::{Block, MODEL_END, Model, models, segment};
