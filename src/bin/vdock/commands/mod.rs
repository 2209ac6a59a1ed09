mod inspect;
mod load;

use inspect::run_inspect;
use load::run_load;

use std::io::Read;

use anyhow::{Context, Result, bail};

use viewdock::io::{self as dock_io, Format, Renderer};
use viewdock::{DockedStore, PartitionMode};

use crate::cli::{Command, IoOptions, LoadOptions};
use crate::config::{SessionConfig, build_mode, build_name};
use crate::display::Context as DisplayContext;
use crate::io::{HttpFetcher, infer_input_format, open_input, stdin_is_tty};
use crate::util::path::collection_name;

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Load(args) => run_load(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}

/// What a source resolved to before it was read.
struct Source {
    format: Format,
    name: String,
    mode: PartitionMode,
}

fn resolve_source(io: &IoOptions, load: &LoadOptions, session: &SessionConfig) -> Result<Source> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: vdock <COMMAND> -i <INPUT> or pipe data via stdin with --infmt."
        );
    }

    let format = match (io.input_format, io.input.as_deref()) {
        (Some(f), _) => Format::from(f),
        (None, Some(path)) => infer_input_format(path).with_context(|| {
            format!(
                "Cannot infer input format from '{}'. Use --infmt to specify.",
                path.display()
            )
        })?,
        (None, None) => bail!("Reading from stdin requires --infmt"),
    };

    let name = match build_name(load, session)
        .or_else(|| io.input.as_deref().and_then(collection_name))
    {
        Some(name) => name,
        None if format == Format::Chimerax => dock_io::chimerax::CLUSTER_NAME.to_string(),
        None => bail!("Cannot derive a collection name from stdin. Use --name to specify."),
    };

    Ok(Source {
        format,
        name,
        mode: build_mode(load, session),
    })
}

/// Reads the resolved source into a fresh store, sending every output
/// collection to `renderer`.
fn read_source<R>(io: &IoOptions, source: &Source, renderer: &mut R) -> Result<DockedStore>
where
    R: Renderer + ?Sized,
{
    let mut input = open_input(io.input.as_deref())?;
    let mut store = DockedStore::new();

    match source.format {
        Format::Dock4 => {
            dock_io::load_dock4(input, &mut store, &source.name, source.mode, renderer)
                .with_context(|| format!("Failed to load '{}'", source.name))?;
        }
        Format::Chimerax => {
            if source.mode != PartitionMode::AllOne {
                log::warn!(
                    "partition mode '{}' is ignored for ChimeraX manifests",
                    source.mode
                );
            }
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .context("Failed to read ChimeraX manifest")?;
            dock_io::load_chimerax(&text, &HttpFetcher::new(), &mut store, renderer)
                .context("Failed to load ChimeraX manifest")?;
        }
    }

    Ok(store)
}
