mod session;

pub use session::{SessionConfig, SortConfig, load_session};

use std::path::PathBuf;

use viewdock::PartitionMode;

use crate::cli::{EditOptions, LoadOptions};

pub const DEFAULT_OUTPUT_DIR: &str = ".";

pub fn build_mode(opts: &LoadOptions, session: &SessionConfig) -> PartitionMode {
    opts.mode
        .map(PartitionMode::from)
        .or(session.mode)
        .unwrap_or_default()
}

pub fn build_name(opts: &LoadOptions, session: &SessionConfig) -> Option<String> {
    opts.name.clone().or_else(|| session.name.clone())
}

pub fn build_output_dir(output: Option<&PathBuf>, session: &SessionConfig) -> PathBuf {
    output
        .cloned()
        .or_else(|| session.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

pub fn build_sort(opts: &EditOptions, session: &SessionConfig) -> Option<SortConfig> {
    match &opts.sort {
        Some(field) => Some(SortConfig {
            field: field.clone(),
            descending: opts.desc,
        }),
        None => session.sort.clone(),
    }
}
