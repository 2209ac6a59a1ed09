use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use viewdock::Collection;
use viewdock::io::{Renderer, pdb};

use crate::util::path::collection_file;

/// Writes every rendered collection to `<dir>/<name>.pdb`.
pub struct DirectoryRenderer {
    dir: PathBuf,
    written: Vec<(PathBuf, usize)>,
}

impl DirectoryRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, with their model counts.
    pub fn written(&self) -> &[(PathBuf, usize)] {
        &self.written
    }
}

impl Renderer for DirectoryRenderer {
    type Error = io::Error;

    fn render(&mut self, collection: &Collection) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.dir)?;
        let path = collection_file(&self.dir, &collection.name);

        let mut writer = BufWriter::new(File::create(&path)?);
        pdb::write_collection(&mut writer, collection).map_err(|e| match e {
            viewdock::io::Error::Io { source } => source,
            other => io::Error::other(other.to_string()),
        })?;
        writer.flush()?;

        self.written.push((path, collection.models));
        Ok(())
    }
}
