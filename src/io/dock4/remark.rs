use crate::model::annotation::{Annotation, is_integer_field};
use regex::Regex;
use std::sync::LazyLock;

static REMARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^REMARK\b\s+(\w+)\s*:\s*([-+]?\d+\.?\d*)").expect("valid remark pattern")
});

/// Parses a `REMARK <name> : <number>` line into a typed annotation.
///
/// Returns `None` for any line that is not an annotation; the caller decides
/// whether that matters.
pub fn parse(line: &str) -> Option<(String, Annotation)> {
    let caps = REMARK_RE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let literal = caps.get(2)?.as_str();

    let value = if is_integer_field(name) {
        match parse_integer(literal) {
            Some(v) => Annotation::Integer(v),
            None => {
                log::warn!("ignoring non-integral value '{literal}' for '{name}'");
                return None;
            }
        }
    } else {
        Annotation::Float(literal.parse::<f64>().ok()?)
    };

    Some((name.to_string(), value))
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
const I64_LOWER: f64 = i64::MIN as f64;
const I64_UPPER: f64 = i64::MAX as f64;

fn parse_integer(literal: &str) -> Option<i64> {
    literal.parse::<i64>().ok().or_else(|| {
        literal
            .parse::<f64>()
            .ok()
            .filter(|v| v.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(v))
            .map(|v| v as i64)
    })
}
