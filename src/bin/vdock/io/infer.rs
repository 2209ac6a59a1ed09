use std::path::Path;

use viewdock::io::Format;

pub fn input(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "pdb" | "ent" | "dock4" => Some(Format::Dock4),
        "chimerax" | "cxc" => Some(Format::Chimerax),
        _ => None,
    }
}
