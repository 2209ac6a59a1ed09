use anyhow::{Context, Result};

use viewdock::Collection;
use viewdock::io::{Format, render_all};

use crate::cli::LoadArgs;
use crate::config::{build_output_dir, load_session};
use crate::display::{Context as DisplayContext, Progress, print_load_summary, print_written_files};
use crate::io::DirectoryRenderer;
use crate::util::convert::mode_description;

use super::{Source, read_source, resolve_source};

const TOTAL_STEPS: u8 = 2;

pub fn run_load(args: LoadArgs, ctx: DisplayContext) -> Result<()> {
    let session = load_session(args.io.config.as_deref())?;
    let source = resolve_source(&args.io, &args.load, &session)?;
    let output_dir = build_output_dir(args.output.as_ref(), &session);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading docking results");
    let mut collections: Vec<Collection> = Vec::new();
    let store = read_source(&args.io, &source, &mut collections)?;
    let read_details = build_read_substeps(&args, &source);
    progress.complete_step("Reading docking results", &read_details);

    progress.step("Writing collections");
    let mut renderer = DirectoryRenderer::new(&output_dir);
    render_all(&mut renderer, &collections).with_context(|| {
        format!("Failed to write collections to {}", output_dir.display())
    })?;
    let write_details: Vec<String> = renderer
        .written()
        .iter()
        .map(|(path, models)| format!("{} ({} models)", path.display(), models))
        .collect();
    progress.complete_step("Writing collections", &write_details);

    progress.finish();

    if ctx.interactive {
        let mut stderr = std::io::stderr().lock();
        print_load_summary(&mut stderr, &store, &source.mode.to_string());
        print_written_files(&mut stderr, renderer.written());
    } else {
        for (path, _) in renderer.written() {
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn build_read_substeps(args: &LoadArgs, source: &Source) -> Vec<String> {
    let origin = args
        .io
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let mut steps = vec![format!("Parse {} from {}", source.format, origin)];
    match source.format {
        Format::Dock4 => steps.push(format!(
            "Split '{}': {}",
            source.name,
            mode_description(source.mode)
        )),
        Format::Chimerax => steps.push("Fetch target and cluster".to_string()),
    }
    steps
}
