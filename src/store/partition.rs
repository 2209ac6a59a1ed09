use super::error::Error;
use crate::model::annotation::{Annotation, CLUSTER, CLUSTER_RANK};
use crate::model::entry::{Collection, DockedEntry};
use crate::model::mode::PartitionMode;
use indexmap::IndexMap;

/// Filters and regroups freshly loaded entries according to `mode`, and
/// returns the output collections in emission order.
///
/// On a schema error `entries` is left exactly as loaded.
pub fn partition(
    entries: &mut Vec<DockedEntry>,
    name: &str,
    mode: PartitionMode,
) -> Result<Vec<Collection>, Error> {
    if mode.requires_clusters() && !has_cluster_fields(entries) {
        return Err(Error::MissingClusterFields { mode });
    }

    match mode {
        PartitionMode::AllOne => {}
        PartitionMode::FirstOfCluster => first_of_cluster(entries),
        PartitionMode::AllByCluster => by_cluster(entries, name),
    }

    Ok(collect(entries))
}

fn has_cluster_fields(entries: &[DockedEntry]) -> bool {
    let has = |field: &str| entries.iter().any(|e| e.annotations.contains_key(field));
    has(CLUSTER) && has(CLUSTER_RANK)
}

fn first_of_cluster(entries: &mut Vec<DockedEntry>) {
    entries.retain(|e| e.annotation(CLUSTER_RANK) == Annotation::Integer(0));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.identity.ordinal = i + 1;
    }
}

fn by_cluster(entries: &mut [DockedEntry], name: &str) {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for entry in entries.iter_mut() {
        let collection = format!("{name}-{}", entry.annotation(CLUSTER));
        let count = counts.entry(collection.clone()).or_insert(0);
        *count += 1;
        entry.identity.collection = collection;
        entry.identity.ordinal = *count;
    }
}

/// Groups entries by collection name, in order of first appearance, with
/// members ordered by ordinal.
pub(crate) fn collect(entries: &[DockedEntry]) -> Vec<Collection> {
    let mut groups: IndexMap<&str, Vec<&DockedEntry>> = IndexMap::new();
    for entry in entries {
        groups.entry(entry.collection()).or_default().push(entry);
    }

    groups
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by_key(|e| e.ordinal());
            let mut collection = Collection::new(name);
            for member in members {
                collection.push(member.payload());
            }
            collection
        })
        .filter(|c| !c.is_empty())
        .collect()
}
