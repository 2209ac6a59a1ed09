use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Cluster identifier assigned by the docking engine.
pub const CLUSTER: &str = "Cluster";

/// Rank of a model within its cluster, `0` being the best-scored member.
pub const CLUSTER_RANK: &str = "ClusterRank";

/// Annotation names whose values are parsed as integers; every other name
/// carries a floating-point value.
pub const INTEGER_FIELDS: [&str; 2] = [CLUSTER, CLUSTER_RANK];

/// Per-model annotations keyed by name, in first-seen order.
pub type AnnotationMap = IndexMap<String, Annotation>;

/// A scalar annotation value.
///
/// `Absent` fills the keys an entry lacks after its load operation has been
/// equalized, so every entry of one load shares a key set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Annotation {
    Integer(i64),
    Float(f64),
    Absent,
}

impl Annotation {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Annotation::Absent)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Annotation::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Annotation::Integer(v) => Some(v as f64),
            Annotation::Float(v) => Some(v),
            Annotation::Absent => None,
        }
    }

    /// Total order over annotation values. `Absent` is less than any value;
    /// integers compare exactly, mixed pairs compare as `f64`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Annotation::Absent, Annotation::Absent) => Ordering::Equal,
            (Annotation::Absent, _) => Ordering::Less,
            (_, Annotation::Absent) => Ordering::Greater,
            (Annotation::Integer(a), Annotation::Integer(b)) => a.cmp(b),
            (a, b) => {
                let a = a.as_f64().unwrap_or(f64::NEG_INFINITY);
                let b = b.as_f64().unwrap_or(f64::NEG_INFINITY);
                a.total_cmp(&b)
            }
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Integer(v) => write!(f, "{v}"),
            Annotation::Float(v) => write!(f, "{v}"),
            Annotation::Absent => write!(f, "none"),
        }
    }
}

/// Returns `true` if values under `name` are parsed as integers.
#[inline]
pub fn is_integer_field(name: &str) -> bool {
    INTEGER_FIELDS.contains(&name)
}

/// Extends every map with the keys present in any sibling, filling the gaps
/// with [`Annotation::Absent`].
pub fn equalize<'a, I>(maps: I)
where
    I: IntoIterator<Item = &'a mut AnnotationMap>,
{
    let mut maps: Vec<&mut AnnotationMap> = maps.into_iter().collect();

    let keys: IndexSet<String> = maps
        .iter()
        .flat_map(|map| map.keys().cloned())
        .collect();

    for map in maps.iter_mut() {
        for key in &keys {
            map.entry(key.clone()).or_insert(Annotation::Absent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, Annotation)]) -> AnnotationMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn absent_sorts_below_every_value() {
        let absent = Annotation::Absent;
        assert_eq!(absent.total_cmp(&Annotation::Float(-1e9)), Ordering::Less);
        assert_eq!(absent.total_cmp(&Annotation::Integer(i64::MIN)), Ordering::Less);
        assert_eq!(Annotation::Float(0.0).total_cmp(&absent), Ordering::Greater);
        assert_eq!(absent.total_cmp(&Annotation::Absent), Ordering::Equal);
    }

    #[test]
    fn mixed_numeric_values_compare_by_magnitude() {
        assert_eq!(
            Annotation::Integer(2).total_cmp(&Annotation::Float(1.5)),
            Ordering::Greater
        );
        assert_eq!(
            Annotation::Float(-3.25).total_cmp(&Annotation::Float(-3.0)),
            Ordering::Less
        );
    }

    #[test]
    fn integer_fields_are_the_cluster_pair() {
        assert!(is_integer_field("Cluster"));
        assert!(is_integer_field("ClusterRank"));
        assert!(!is_integer_field("cluster"));
        assert!(!is_integer_field("deltaG"));
    }

    #[test]
    fn equalize_fills_missing_keys_with_absent() {
        let mut a = map(&[("deltaG", Annotation::Float(-7.1))]);
        let mut b = map(&[("FullFitness", Annotation::Float(-1200.5))]);
        let mut c = AnnotationMap::new();

        equalize([&mut a, &mut b, &mut c]);

        for m in [&a, &b, &c] {
            assert_eq!(m.len(), 2);
            assert!(m.contains_key("deltaG"));
            assert!(m.contains_key("FullFitness"));
        }
        assert_eq!(a["FullFitness"], Annotation::Absent);
        assert_eq!(b["deltaG"], Annotation::Absent);
        assert_eq!(b["FullFitness"], Annotation::Float(-1200.5));
        assert!(c.values().all(Annotation::is_absent));
    }

    #[test]
    fn equalize_handles_wide_disjoint_key_sets() {
        let mut maps: Vec<AnnotationMap> = (0..4)
            .map(|m| {
                (0..500)
                    .map(|k| (format!("f{m}_{k}"), Annotation::Float(k as f64)))
                    .collect()
            })
            .collect();

        equalize(maps.iter_mut());

        let first: Vec<&String> = maps[0].keys().collect();
        assert_eq!(first.len(), 2000);
        assert_eq!(first[500].as_str(), "f1_0");
        for m in &maps[1..] {
            assert_eq!(m.keys().collect::<Vec<_>>(), first);
        }
        assert_eq!(maps[3]["f0_7"], Annotation::Absent);
        assert_eq!(maps[3]["f3_7"], Annotation::Float(7.0));
    }

    #[test]
    fn display_renders_absent_as_none() {
        assert_eq!(Annotation::Integer(3).to_string(), "3");
        assert_eq!(Annotation::Float(-7.25).to_string(), "-7.25");
        assert_eq!(Annotation::Absent.to_string(), "none");
    }
}
