use std::path::{Path, PathBuf};

/// Collection name implied by an input path: the file name up to its first
/// `.` (`clusters.dock4.pdb` → `clusters`).
pub fn collection_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy();
    let stem = file_name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

pub fn collection_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.pdb"))
}
