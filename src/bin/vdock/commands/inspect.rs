use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use viewdock::{Collection, DockedEntry, DockedStore};

use crate::cli::{EditOptions, InspectArgs};
use crate::config::{SessionConfig, build_sort, load_session};
use crate::display::{Context as DisplayContext, Progress, print_entries, print_load_summary};

use super::{read_source, resolve_source};

const TOTAL_STEPS: u8 = 2;

pub fn run_inspect(args: InspectArgs, ctx: DisplayContext) -> Result<()> {
    let session = load_session(args.io.config.as_deref())?;
    let source = resolve_source(&args.io, &args.load, &session)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading docking results");
    let mut collections: Vec<Collection> = Vec::new();
    let mut store = read_source(&args.io, &source, &mut collections)?;
    progress.complete_step(
        "Reading docking results",
        &[format!(
            "{} entries in {} collection(s)",
            store.len(),
            collections.len()
        )],
    );

    progress.step("Applying edits");
    let edit_details = apply_edits(&mut store, &args.edit, &session)?;
    progress.complete_step("Applying edits", &edit_details);

    progress.finish();

    if ctx.interactive {
        print_load_summary(&mut io::stderr().lock(), &store, &source.mode.to_string());
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        let text = serde_json::to_string_pretty(&entries_json(&store)?)
            .context("Failed to serialize entries")?;
        writeln!(stdout, "{text}")?;
    } else {
        print_entries(&mut stdout, &store);
    }

    Ok(())
}

/// Removals run first, in the order given, then the sort.
fn apply_edits(
    store: &mut DockedStore,
    edit: &EditOptions,
    session: &SessionConfig,
) -> Result<Vec<String>> {
    let renumber = !edit.no_renumber;
    let mut details = Vec::new();

    for &index in &edit.remove {
        let removed = store
            .remove_at(index, renumber)
            .with_context(|| format!("Cannot remove entry {index}"))?;
        details.push(format!(
            "Remove entry {index} ({} #{})",
            removed.collection(),
            removed.ordinal()
        ));
    }

    if let Some(sort) = build_sort(edit, session) {
        store
            .sort_by(&sort.field, sort.descending)
            .with_context(|| format!("Cannot sort by '{}'", sort.field))?;
        details.push(format!(
            "Sort by {} ({})",
            sort.field,
            if sort.descending { "descending" } else { "ascending" }
        ));
    }

    if details.is_empty() {
        details.push("No edits requested".to_string());
    }
    Ok(details)
}

#[derive(Serialize)]
struct EntryRow<'a> {
    index: usize,
    #[serde(flatten)]
    entry: &'a DockedEntry,
}

fn entries_json(store: &DockedStore) -> Result<serde_json::Value> {
    let rows: Vec<EntryRow> = store
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| EntryRow { index, entry })
        .collect();
    serde_json::to_value(rows).context("Failed to serialize entries")
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewdock::PartitionMode;

    const TEXT: &str = "\
REMARK Cluster: 0
REMARK ClusterRank: 0
REMARK deltaG: -7.5
ATOM 1
REMARK Cluster: 0
REMARK ClusterRank: 1
REMARK deltaG: -8.0
ATOM 2
REMARK Cluster: 1
REMARK ClusterRank: 0
REMARK deltaG: -6.0
ATOM 3";

    fn store() -> DockedStore {
        let mut store = DockedStore::new();
        store
            .load(TEXT.lines(), "lig", PartitionMode::AllByCluster)
            .unwrap();
        store
    }

    fn edits(remove: Vec<usize>, sort: Option<&str>, desc: bool) -> EditOptions {
        EditOptions {
            remove,
            no_renumber: false,
            sort: sort.map(str::to_string),
            desc,
        }
    }

    #[test]
    fn removal_then_sort() {
        let mut store = store();
        let details = apply_edits(
            &mut store,
            &edits(vec![0], Some("deltaG"), false),
            &SessionConfig::default(),
        )
        .unwrap();

        assert_eq!(details.len(), 2);
        let order: Vec<(&str, usize)> = store
            .entries()
            .iter()
            .map(|e| (e.collection(), e.ordinal()))
            .collect();
        assert_eq!(order, vec![("lig-0", 1), ("lig-1", 1)]);
        assert_eq!(store.entries()[0].annotation("ClusterRank").as_integer(), Some(0));
    }

    #[test]
    fn session_sort_applies_without_flag() {
        let mut store = store();
        let session = SessionConfig::from_toml("[sort]\nfield = \"deltaG\"\ndescending = true")
            .unwrap();
        apply_edits(&mut store, &edits(vec![], None, false), &session).unwrap();

        let scores: Vec<f64> = store
            .entries()
            .iter()
            .filter_map(|e| e.annotation("deltaG").as_f64())
            .collect();
        assert_eq!(scores, vec![-6.0, -7.5, -8.0]);
    }

    #[test]
    fn bad_index_and_field_are_errors() {
        let mut store = store();
        let session = SessionConfig::default();
        assert!(apply_edits(&mut store, &edits(vec![9], None, false), &session).is_err());
        assert!(apply_edits(&mut store, &edits(vec![], Some("score"), false), &session).is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn json_rows_carry_identity_and_annotations() {
        let value = entries_json(&store()).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["index"], 1);
        assert!(rows[1].get("payload").is_none());
        assert_eq!(rows[1]["collection"], "lig-0");
        assert_eq!(rows[1]["ordinal"], 2);
        assert_eq!(rows[1]["annotations"]["ClusterRank"], 1);
        assert_eq!(rows[2]["annotations"]["deltaG"], -6.0);
    }
}
