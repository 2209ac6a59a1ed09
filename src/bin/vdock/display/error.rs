use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<viewdock::io::Error>() {
            io_hints(e, &mut hints);
            break;
        }
        if let Some(e) = cause.downcast_ref::<viewdock::StoreError>() {
            store_hints(e, &mut hints);
            break;
        }
        if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            std_io_hints(e, &mut hints);
            break;
        }
    }

    hints
}

fn io_hints(err: &viewdock::io::Error, hints: &mut Vec<String>) {
    use viewdock::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Manifest { found } => {
            hints.push(format!(
                "The manifest references {found} PDB file(s); a SwissDock manifest references a target and a cluster"
            ));
            hints.push("Check that the file is the .chimerax file downloaded from SwissDock".into());
        }
        IoError::Fetch { .. } => {
            hints.push("Bad server response. SwissDock keeps results only for a limited time; the job may be too old".into());
            hints.push("Download the cluster file and load it with --infmt dock4 instead".into());
        }
        IoError::Render { .. } => {
            hints.push("Check that the output directory is writable (-o/--output)".into());
        }
        IoError::Store(e) => store_hints(e, hints),
    }
}

fn store_hints(err: &viewdock::StoreError, hints: &mut Vec<String>) {
    use viewdock::StoreError;

    match err {
        StoreError::MissingClusterFields { .. } => {
            hints.push("The input has no 'REMARK Cluster' / 'REMARK ClusterRank' lines".into());
            hints.push("Use --mode all-one to load every entry in a single collection".into());
        }
        StoreError::UnknownField(_) => {
            hints.push("Sort fields are REMARK names and are case-sensitive".into());
            hints.push("Run 'vdock inspect' to list the available fields".into());
        }
        StoreError::IndexOutOfRange { len, .. } => {
            hints.push(format!("Valid indices are 0..{len}; indices shift after each removal"));
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("Input is not valid UTF-8 text".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}
