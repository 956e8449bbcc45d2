//! JSON seed format for the initial tree.
//!
//! A seed is a list of nested node documents grafted under the fixed root;
//! it never replaces the root itself. Scalar fields default so folder
//! entries can stay terse.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FsError;
use crate::tree::{Node, NodeId, NodeKind, Tree};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedNode {
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub children: Vec<SeedNode>,
}

/// Load a seed document from a JSON file.
pub fn load(path: &Path) -> Result<Vec<SeedNode>, FsError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Attach every seed entry (and its descendants) under `parent`.
pub fn graft(tree: &mut Tree, parent: NodeId, nodes: &[SeedNode]) -> Result<(), FsError> {
    for seed in nodes {
        let node = match seed.kind {
            NodeKind::Folder => Node::folder(&seed.name),
            NodeKind::File => Node::file(
                &seed.name,
                seed.size,
                &seed.extension,
                &seed.last_modified,
            ),
        };
        let id = tree.create(parent, node)?;
        graft(tree, id, &seed.children)?;
    }
    Ok(())
}

/// Build a whole tree from a seed document.
pub fn build(nodes: &[SeedNode]) -> Result<Tree, FsError> {
    let mut tree = Tree::new();
    let root = tree.root();
    graft(&mut tree, root, nodes)?;
    Ok(tree)
}

/// The built-in demo hierarchy:
/// `Root → Downloads → Study Materials → {File1, File2}`.
pub fn sample() -> Vec<SeedNode> {
    vec![SeedNode {
        name: "Downloads".to_string(),
        kind: NodeKind::Folder,
        size: 0,
        extension: String::new(),
        last_modified: String::new(),
        children: vec![SeedNode {
            name: "Study Materials".to_string(),
            kind: NodeKind::Folder,
            size: 0,
            extension: String::new(),
            last_modified: String::new(),
            children: vec![
                SeedNode {
                    name: "File1".to_string(),
                    kind: NodeKind::File,
                    size: 100,
                    extension: ".txt".to_string(),
                    last_modified: "2022-01-01".to_string(),
                    children: Vec::new(),
                },
                SeedNode {
                    name: "File2".to_string(),
                    kind: NodeKind::File,
                    size: 200,
                    extension: ".pdf".to_string(),
                    last_modified: "2022-01-02".to_string(),
                    children: Vec::new(),
                },
            ],
        }],
    }]
}

// ── Tests ───────────────────────────────────────────────────────────────────
