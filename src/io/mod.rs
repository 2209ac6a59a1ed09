use std::convert::Infallible;
use std::fmt;
use std::io::BufRead;

pub mod chimerax;
pub mod dock4;
pub mod error;
pub mod pdb;

pub use error::Error;

use crate::model::entry::Collection;
use crate::model::mode::PartitionMode;
use crate::store::DockedStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Dock4,
    Chimerax,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Dock4 => write!(f, "Dock4 PDB"),
            Format::Chimerax => write!(f, "ChimeraX manifest"),
        }
    }
}

/// The host capability that turns structural text into a named multi-model
/// object. This is the only call made into the rendering host.
pub trait Renderer {
    type Error: fmt::Display;

    fn render(&mut self, collection: &Collection) -> Result<(), Self::Error>;
}

/// Collects rendered collections in memory.
impl Renderer for Vec<Collection> {
    type Error = Infallible;

    fn render(&mut self, collection: &Collection) -> Result<(), Self::Error> {
        self.push(collection.clone());
        Ok(())
    }
}

/// Retrieves the text behind a remote reference.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, Error>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String, Error>,
{
    fn fetch(&self, url: &str) -> Result<String, Error> {
        self(url)
    }
}

pub fn render_all<'a, R, I>(renderer: &mut R, collections: I) -> Result<(), Error>
where
    R: Renderer + ?Sized,
    I: IntoIterator<Item = &'a Collection>,
{
    for collection in collections {
        renderer
            .render(collection)
            .map_err(|e| Error::render(&collection.name, e.to_string()))?;
        log::debug!(
            "rendered '{}' ({} model(s))",
            collection.name,
            collection.models
        );
    }
    Ok(())
}

/// Reads a Dock4 cluster file into `store` and renders the resulting
/// collections.
///
/// A clustering `mode` on a file without cluster annotations still leaves
/// the parsed entries in `store`; nothing is rendered and the store error is
/// returned.
pub fn load_dock4<B, R>(
    reader: B,
    store: &mut DockedStore,
    name: &str,
    mode: PartitionMode,
    renderer: &mut R,
) -> Result<(), Error>
where
    B: BufRead,
    R: Renderer + ?Sized,
{
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let collections = store.load(&lines, name, mode)?;
    render_all(renderer, &collections)
}

pub use chimerax::load as load_chimerax;
