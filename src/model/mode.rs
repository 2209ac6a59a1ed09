use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid partition mode: '{0}' (expected all-one, first-of-cluster or all-by-cluster)")]
pub struct ParsePartitionModeError(String);

/// How a freshly loaded batch of entries is filtered and grouped into
/// output collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartitionMode {
    /// Every entry in one collection under the load's name.
    #[default]
    #[serde(alias = "0")]
    AllOne,
    /// Only the best-ranked entry of each cluster (`ClusterRank == 0`).
    #[serde(alias = "1")]
    FirstOfCluster,
    /// Every entry, one collection per `Cluster` value.
    #[serde(alias = "2")]
    AllByCluster,
}

impl PartitionMode {
    /// Returns `true` if this mode needs the `Cluster`/`ClusterRank` fields.
    #[inline]
    pub fn requires_clusters(&self) -> bool {
        !matches!(self, PartitionMode::AllOne)
    }
}

impl fmt::Display for PartitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionMode::AllOne => write!(f, "all-one"),
            PartitionMode::FirstOfCluster => write!(f, "first-of-cluster"),
            PartitionMode::AllByCluster => write!(f, "all-by-cluster"),
        }
    }
}

impl FromStr for PartitionMode {
    type Err = ParsePartitionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "all-one" | "all_one" => Ok(PartitionMode::AllOne),
            "1" | "first-of-cluster" | "first_of_cluster" => Ok(PartitionMode::FirstOfCluster),
            "2" | "all-by-cluster" | "all_by_cluster" => Ok(PartitionMode::AllByCluster),
            _ => Err(ParsePartitionModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_numeric_selectors() {
        assert_eq!("all-one".parse(), Ok(PartitionMode::AllOne));
        assert_eq!("FIRST_OF_CLUSTER".parse(), Ok(PartitionMode::FirstOfCluster));
        assert_eq!(" all-by-cluster ".parse(), Ok(PartitionMode::AllByCluster));
        assert_eq!("0".parse(), Ok(PartitionMode::AllOne));
        assert_eq!("1".parse(), Ok(PartitionMode::FirstOfCluster));
        assert_eq!("2".parse(), Ok(PartitionMode::AllByCluster));
    }

    #[test]
    fn rejects_unknown_selectors() {
        for bad in ["3", "", "cluster", "-1", "all"] {
            let err = bad.parse::<PartitionMode>().unwrap_err();
            assert!(err.to_string().contains("invalid partition mode"));
        }
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for mode in [
            PartitionMode::AllOne,
            PartitionMode::FirstOfCluster,
            PartitionMode::AllByCluster,
        ] {
            assert_eq!(mode.to_string().parse::<PartitionMode>(), Ok(mode));
        }
    }

    #[test]
    fn only_all_one_skips_cluster_fields() {
        assert!(!PartitionMode::AllOne.requires_clusters());
        assert!(PartitionMode::FirstOfCluster.requires_clusters());
        assert!(PartitionMode::AllByCluster.requires_clusters());
    }
}
