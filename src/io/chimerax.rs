//! UCSF ChimeraX web-data manifests as written by SwissDock.
//!
//! The manifest is a small XML document that references two remote PDB
//! files: the target structure and the cluster of docked ligands. Both are
//! fetched before anything is committed, so a failure leaves the caller's
//! store and renderer untouched.

use super::{Fetcher, Renderer, error::Error, render_all};
use crate::model::entry::Collection;
use crate::model::mode::PartitionMode;
use crate::store::DockedStore;
use regex::Regex;
use std::sync::LazyLock;

/// Collection name given to the target structure.
pub const TARGET_NAME: &str = "target";

/// Collection name given to the docked cluster.
pub const CLUSTER_NAME: &str = "cluster";

static PDB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"(https?://[^"\s]+\.pdb)""#).expect("valid manifest url pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub target_url: String,
    pub cluster_url: String,
}

/// Every quoted coordinate-file URL in the document, in order.
pub fn references(text: &str) -> Vec<&str> {
    PDB_URL_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn parse(text: &str) -> Result<Manifest, Error> {
    match references(text).as_slice() {
        [target, cluster] => Ok(Manifest {
            target_url: target.to_string(),
            cluster_url: cluster.to_string(),
        }),
        other => Err(Error::Manifest { found: other.len() }),
    }
}

/// Fetches the target and cluster named by a manifest, renders the target
/// as [`TARGET_NAME`] and the cluster as [`CLUSTER_NAME`], and replaces the
/// contents of `store` with the cluster entries.
///
/// Both downloads and the cluster parse happen before the first render
/// call, and the store is only replaced once every render call has
/// succeeded. Render calls are not undone: if the cluster render fails, the
/// host keeps the target it was already given.
pub fn load<F, R>(
    text: &str,
    fetcher: &F,
    store: &mut DockedStore,
    renderer: &mut R,
) -> Result<(), Error>
where
    F: Fetcher + ?Sized,
    R: Renderer + ?Sized,
{
    let manifest = parse(text)?;

    log::debug!("fetching target from {}", manifest.target_url);
    let target = fetcher.fetch(&manifest.target_url)?;
    log::debug!("fetching cluster from {}", manifest.cluster_url);
    let cluster = fetcher.fetch(&manifest.cluster_url)?;

    let mut staged = DockedStore::new();
    let collections = staged.load(cluster.lines(), CLUSTER_NAME, PartitionMode::AllOne)?;

    let target = Collection {
        name: TARGET_NAME.to_string(),
        models: 1,
        text: target,
    };
    render_all(renderer, std::iter::once(&target).chain(&collections))?;

    *store = staged;
    log::info!(
        "loaded manifest: target + {} docked entries",
        store.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"<?xml version="1.0"?>
<ChimeraPuppet type="std_webdata">
<web_files>
<file  name="target.pdb" format="text" loc="http://www.swissdock.ch/files/tmp/1a2b/target.pdb"/>
<file  name="clusters.dock4.pdb" format="text" loc="http://www.swissdock.ch/files/tmp/1a2b/clusters.dock4.pdb"/>
</web_files>
<commands>
  <py_cmd>import ViewDock</py_cmd>
</commands>
</ChimeraPuppet>"#;

    const TARGET_URL: &str = "http://www.swissdock.ch/files/tmp/1a2b/target.pdb";
    const CLUSTER_URL: &str = "http://www.swissdock.ch/files/tmp/1a2b/clusters.dock4.pdb";

    const CLUSTER_PDB: &str = "\
REMARK Cluster: 0
REMARK ClusterRank: 0
REMARK deltaG: -8.1
ATOM      1  C1  LIG A   1       0.000   0.000   0.000  1.00  0.00           C
REMARK Cluster: 1
REMARK ClusterRank: 0
REMARK deltaG: -7.4
ATOM      1  C1  LIG A   1       3.000   0.000   0.000  1.00  0.00           C
";

    fn fake_fetch(url: &str) -> Result<String, Error> {
        match url {
            TARGET_URL => Ok("ATOM      1  N   ALA A   1\nEND\n".to_string()),
            CLUSTER_URL => Ok(CLUSTER_PDB.to_string()),
            _ => Err(Error::fetch(url, "HTTP 404")),
        }
    }

    fn manifest_with(urls: &[&str]) -> String {
        urls.iter()
            .map(|u| format!("<file loc=\"{u}\"/>\n"))
            .collect()
    }

    #[test]
    fn parses_target_and_cluster_urls() {
        let manifest = parse(MANIFEST).unwrap();
        assert_eq!(manifest.target_url, TARGET_URL);
        assert_eq!(manifest.cluster_url, CLUSTER_URL);
    }

    #[test]
    fn requires_exactly_two_references() {
        for n in [0usize, 1, 3] {
            let urls: Vec<String> = (0..n).map(|i| format!("https://host/{i}.pdb")).collect();
            let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
            let err = parse(&manifest_with(&refs)).unwrap_err();
            assert!(matches!(err, Error::Manifest { found } if found == n));
        }
        assert!(parse(&manifest_with(&["https://a/x.pdb", "https://a/y.PDB"])).is_ok());
    }

    #[test]
    fn ignores_unquoted_and_non_coordinate_urls() {
        let text = r#"see http://a/x.pdb and "http://a/readme.txt" "ftp://a/y.pdb""#;
        assert!(references(text).is_empty());
    }

    #[test]
    fn load_renders_target_then_cluster() {
        let mut store = DockedStore::new();
        let mut rendered: Vec<Collection> = Vec::new();

        load(MANIFEST, &fake_fetch, &mut store, &mut rendered).unwrap();

        let names: Vec<&str> = rendered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![TARGET_NAME, CLUSTER_NAME]);
        assert_eq!(rendered[1].models, 2);
        assert_eq!(store.len(), 2);
        assert!(store.entries().iter().all(|e| e.collection() == CLUSTER_NAME));
    }

    #[test]
    fn failed_fetch_commits_nothing() {
        let mut store = DockedStore::new();
        store
            .load(CLUSTER_PDB.lines(), "previous", PartitionMode::AllOne)
            .unwrap();
        let mut rendered: Vec<Collection> = Vec::new();

        let broken = MANIFEST.replace("clusters.dock4.pdb\"", "gone.pdb\"");
        let err = load(&broken, &fake_fetch, &mut store, &mut rendered).unwrap_err();

        assert!(matches!(err, Error::Fetch { .. }));
        assert!(rendered.is_empty());
        assert!(store.entries().iter().all(|e| e.collection() == "previous"));
    }

    /// Records what it is given and refuses the cluster.
    struct RefusesCluster(Vec<String>);

    impl Renderer for RefusesCluster {
        type Error = &'static str;

        fn render(&mut self, collection: &Collection) -> Result<(), Self::Error> {
            if collection.name == CLUSTER_NAME {
                return Err("no room for cluster");
            }
            self.0.push(collection.name.clone());
            Ok(())
        }
    }

    #[test]
    fn failed_cluster_render_keeps_previous_store() {
        let mut store = DockedStore::new();
        store
            .load(CLUSTER_PDB.lines(), "previous", PartitionMode::AllOne)
            .unwrap();
        let mut renderer = RefusesCluster(Vec::new());

        let err = load(MANIFEST, &fake_fetch, &mut store, &mut renderer).unwrap_err();

        assert!(matches!(&err, Error::Render { name, .. } if name == CLUSTER_NAME));
        assert_eq!(renderer.0, vec![TARGET_NAME.to_string()]);
        assert!(store.entries().iter().all(|e| e.collection() == "previous"));
    }

    #[test]
    fn malformed_manifest_fetches_nothing() {
        let fetch_panics = |_: &str| -> Result<String, Error> { panic!("must not fetch") };
        let mut store = DockedStore::new();
        let mut rendered: Vec<Collection> = Vec::new();

        let err = load("<empty/>", &fetch_panics, &mut store, &mut rendered).unwrap_err();
        assert!(matches!(err, Error::Manifest { found: 0 }));
    }
}
