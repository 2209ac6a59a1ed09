use crate::io::dock4::MODEL_END;
use crate::io::error::Error;
use crate::model::entry::Collection;
use std::io::Write;

/// Writes a collection as a multi-model PDB stream.
///
/// Every payload terminated by `ENDMDL` gets a numbered `MODEL` record in
/// front of it; text that is not split into models (a single target
/// structure) is written as is. The stream ends with one `END` record.
pub fn write<W: Write>(mut writer: W, collection: &Collection) -> Result<(), Error> {
    let terminator = format!("{MODEL_END}\n");
    let mut model = 0usize;
    let mut ended = false;

    for chunk in collection.text.split_inclusive(terminator.as_str()) {
        if chunk.ends_with(terminator.as_str()) {
            model += 1;
            writeln!(writer, "MODEL     {model:>4}")?;
        }
        writer.write_all(chunk.as_bytes())?;
        if !chunk.ends_with('\n') {
            writeln!(writer)?;
        }
        ended = chunk.lines().last().is_some_and(|l| l.trim() == "END");
    }

    if !ended {
        writeln!(writer, "END")?;
    }
    Ok(())
}
