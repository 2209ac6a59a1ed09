use crate::model::entry::DockedEntry;
use std::cmp::Ordering;

/// Orders two entries by the value of `field`.
///
/// Absent values are least, so they lead an ascending order and trail a
/// descending one. Equal keys compare equal in both directions, which keeps
/// a stable sort stable.
pub fn compare(a: &DockedEntry, b: &DockedEntry, field: &str, descending: bool) -> Ordering {
    let ord = a.annotation(field).total_cmp(&b.annotation(field));
    if descending { ord.reverse() } else { ord }
}
