use super::remark;
use crate::model::annotation::AnnotationMap;

/// Record keywords that carry atomic coordinates.
pub const COORDINATE_RECORDS: [&str; 2] = ["ATOM", "HETATM"];

/// Line appended to every coordinate payload.
pub const MODEL_END: &str = "ENDMDL";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A contiguous run of annotation lines, last write wins on repeated names.
    Annotations(AnnotationMap),
    /// A contiguous run of coordinate lines, newline-joined and terminated by
    /// [`MODEL_END`].
    Coordinates(String),
}

/// A coordinate payload paired with the annotation set that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub annotations: AnnotationMap,
    pub payload: String,
}

pub fn is_coordinate_line(line: &str) -> bool {
    line.split_whitespace().next().is_some_and(|keyword| {
        COORDINATE_RECORDS
            .iter()
            .any(|record| keyword.eq_ignore_ascii_case(record))
    })
}

fn is_remark_line(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("REMARK"))
}

/// Splits lines into annotation and coordinate blocks in a single forward
/// pass. Lines of any other kind are skipped.
///
/// `REMARK` lines that carry no annotation are skipped inside an annotation
/// run without closing it.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = lines.iter().map(AsRef::as_ref).peekable();

    while let Some(line) = lines.next() {
        if let Some((name, value)) = remark::parse(line) {
            let mut annotations = AnnotationMap::new();
            annotations.insert(name, value);
            while let Some(next) = lines.next_if(|next| is_remark_line(next)) {
                if let Some((name, value)) = remark::parse(next) {
                    annotations.insert(name, value);
                }
            }
            blocks.push(Block::Annotations(annotations));
        } else if is_coordinate_line(line) {
            let mut payload = String::from(line);
            while let Some(next) = lines.next_if(|next| is_coordinate_line(next)) {
                payload.push('\n');
                payload.push_str(next);
            }
            payload.push('\n');
            payload.push_str(MODEL_END);
            payload.push('\n');
            blocks.push(Block::Coordinates(payload));
        }
    }

    blocks
}

/// Pairs every coordinate block with the most recent annotation set, or an
/// empty map if none was seen yet.
pub fn models<S: AsRef<str>>(lines: &[S]) -> Vec<Model> {
    let mut current = AnnotationMap::new();
    let mut models = Vec::new();

    for block in segment(lines) {
        match block {
            Block::Annotations(annotations) => current = annotations,
            Block::Coordinates(payload) => models.push(Model {
                annotations: current.clone(),
                payload,
            }),
        }
    }

    log::debug!("segmented {} coordinate payload(s)", models.len());
    models
}
