use std::io::Write;
use std::path::PathBuf;

use viewdock::DockedStore;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const INDEX_W: usize = 5;
const COLLECTION_W: usize = 16;
const ORDINAL_W: usize = 7;
const FIELD_W: usize = 11;

pub fn print_load_summary(out: &mut impl Write, store: &DockedStore, mode: &str) {
    let schema: Vec<&str> = store.schema().into_iter().collect();
    let rows = vec![
        ("Entries", format!("{}", store.len())),
        ("Collections", format!("{}", store.collections().len())),
        ("Partition", mode.to_string()),
        (
            "Fields",
            if schema.is_empty() {
                "none".to_string()
            } else {
                schema.join(", ")
            },
        ),
    ];

    print_kv_table(out, "Docking Summary", &rows);
}

pub fn print_written_files(out: &mut impl Write, files: &[(PathBuf, usize)]) {
    let rows: Vec<(String, String)> = files
        .iter()
        .map(|(path, models)| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (name, format!("{models} models"))
        })
        .collect();
    let rows: Vec<(&str, String)> = rows.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();

    print_kv_table(out, "Written Collections", &rows);
}

/// Prints one row per entry: store index, collection, ordinal and every
/// annotation field, in schema order.
pub fn print_entries(out: &mut impl Write, store: &DockedStore) {
    let schema: Vec<&str> = store.schema().into_iter().collect();

    let mut header = format!(
        "{:>INDEX_W$}  {:<COLLECTION_W$}  {:>ORDINAL_W$}",
        "#", "Collection", "Ordinal"
    );
    for field in &schema {
        header.push_str(&format!("  {:>FIELD_W$}", truncate(field, FIELD_W)));
    }
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "─".repeat(header.chars().count()));

    for (i, entry) in store.entries().iter().enumerate() {
        let mut row = format!(
            "{:>INDEX_W$}  {:<COLLECTION_W$}  {:>ORDINAL_W$}",
            i,
            truncate(entry.collection(), COLLECTION_W),
            entry.ordinal()
        );
        for field in &schema {
            let value = entry.annotation(field);
            let cell = match value.as_integer() {
                Some(v) => v.to_string(),
                None => match value.as_f64() {
                    Some(v) => format!("{v:.3}"),
                    None => "-".to_string(),
                },
            };
            row.push_str(&format!("  {:>FIELD_W$}", truncate(&cell, FIELD_W)));
        }
        let _ = writeln!(out, "{}", row);
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
