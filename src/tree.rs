use serde::{Deserialize, Serialize};

use crate::error::FsError;

// ── Node types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Folder,
    File,
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Folder => "Folder",
            Self::File => "File",
        }
    }
}

/// Handle into the tree's arena. Stable for the life of the node; a freed
/// id no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub extension: String,
    pub last_modified: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            size: 0,
            extension: String::new(),
            last_modified: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn file(
        name: impl Into<String>,
        size: u64,
        extension: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            size,
            extension: extension.into(),
            last_modified: last_modified.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

// Detached clone of a subtree, used by copy so the source shape is fixed
// before any insertion happens (copying into a descendant of the source
// would otherwise observe its own partial output).
struct SubtreeClone {
    node: Node,
    children: Vec<SubtreeClone>,
}

// ── Tree ────────────────────────────────────────────────────────────────────

/// A single rooted tree of file/folder nodes backed by an arena.
///
/// Slot 0 is the root (a folder named "Root"), created at construction and
/// never removable. The parent back-reference is a plain index: navigation
/// only, never ownership. Sibling names are not required to be unique;
/// lookups resolve to the first pre-order match.
pub struct Tree {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            slots: vec![Some(Node::folder("Root"))],
            free: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    fn resolve(&self, id: NodeId) -> Result<&Node, FsError> {
        self.get(id)
            .ok_or_else(|| FsError::NotFound(format!("No such node: {:?}", id)))
    }

    fn resolve_mut(&mut self, id: NodeId) -> Result<&mut Node, FsError> {
        self.get_mut(id)
            .ok_or_else(|| FsError::NotFound(format!("No such node: {:?}", id)))
    }

    fn assert_is_folder(node: &Node) -> Result<(), FsError> {
        if !node.is_folder() {
            return Err(FsError::NotAFolder(node.name.clone()));
        }
        Ok(())
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// True if `id` equals `ancestor` or lies anywhere below it.
    fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.get(c).and_then(|n| n.parent);
        }
        false
    }

    // -- Structural operations --------------------------------------------

    /// Attach a fresh node under `parent`, returning its id.
    pub fn create(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, FsError> {
        self.resolve(parent)?;
        node.parent = Some(parent);
        node.children.clear();
        let id = self.alloc(node);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    /// Remove the subtree rooted at `id`: detach it from its parent's
    /// children list, then free every slot it occupied. The root is not
    /// removable.
    pub fn remove(&mut self, id: NodeId) -> Result<(), FsError> {
        if id == self.root() {
            return Err(FsError::InvalidOperation(
                "Cannot remove the root folder.".to_string(),
            ));
        }
        let parent = self.resolve(id)?.parent;
        if let Some(p) = parent.and_then(|p| self.get_mut(p)) {
            p.children.retain(|child| *child != id);
        }

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.slots[current.0].take() {
                pending.extend(node.children);
                self.free.push(current.0);
            }
        }
        Ok(())
    }

    pub fn rename(&mut self, id: NodeId, new_name: impl Into<String>) -> Result<(), FsError> {
        self.resolve_mut(id)?.name = new_name.into();
        Ok(())
    }

    /// Re-parent `src` under `dst` without copying. Rejects moving the
    /// root, and rejects any destination inside the source subtree (the
    /// cycle guard).
    pub fn move_node(&mut self, src: NodeId, dst: NodeId) -> Result<(), FsError> {
        let src_parent = self.resolve(src)?.parent.ok_or_else(|| {
            FsError::InvalidOperation("Cannot move the root folder.".to_string())
        })?;
        Self::assert_is_folder(self.resolve(dst)?)?;
        if self.is_within(dst, src) {
            return Err(FsError::InvalidOperation(
                "Cannot move a folder into its own subtree.".to_string(),
            ));
        }

        if let Some(p) = self.get_mut(src_parent) {
            p.children.retain(|child| *child != src);
        }
        if let Some(d) = self.get_mut(dst) {
            d.children.push(src);
        }
        if let Some(n) = self.get_mut(src) {
            n.parent = Some(dst);
        }
        Ok(())
    }

    /// Deep-clone the subtree at `src` under `dst`. The clone shares no
    /// nodes with the source; scalar fields are copied, structure is
    /// rebuilt with fresh ids.
    pub fn copy_node(&mut self, src: NodeId, dst: NodeId) -> Result<NodeId, FsError> {
        Self::assert_is_folder(self.resolve(dst)?)?;
        let snapshot = self
            .clone_subtree(src)
            .ok_or_else(|| FsError::NotFound(format!("No such node: {:?}", src)))?;
        Ok(self.materialize(snapshot, dst))
    }

    fn clone_subtree(&self, id: NodeId) -> Option<SubtreeClone> {
        let node = self.get(id)?.clone();
        let children = node
            .children
            .iter()
            .filter_map(|child| self.clone_subtree(*child))
            .collect();
        Some(SubtreeClone { node, children })
    }

    fn materialize(&mut self, snapshot: SubtreeClone, parent: NodeId) -> NodeId {
        let mut node = snapshot.node;
        node.parent = Some(parent);
        node.children = Vec::new();
        let id = self.alloc(node);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(id);
        }
        for child in snapshot.children {
            self.materialize(child, id);
        }
        id
    }

    // -- Queries -----------------------------------------------------------

    /// Height of the subtree at `id`, counting the node itself: 1 for a
    /// leaf, 0 for a stale id.
    pub fn max_depth(&self, id: NodeId) -> usize {
        match self.get(id) {
            None => 0,
            Some(node) => {
                1 + node
                    .children
                    .iter()
                    .map(|child| self.max_depth(*child))
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Pre-order depth-first search for the first node named `name`,
    /// starting at (and including) `start`.
    pub fn find(&self, start: NodeId, name: &str) -> Option<NodeId> {
        let node = self.get(start)?;
        if node.name == name {
            return Some(start);
        }
        for child in &node.children {
            if let Some(found) = self.find(*child, name) {
                return Some(found);
            }
        }
        None
    }

    /// Full path from the root, names joined with `/`. The root's path is
    /// its own name.
    pub fn path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(c) = current {
            match self.get(c) {
                Some(node) => {
                    names.push(node.name.clone());
                    current = node.parent;
                }
                None => break,
            }
        }
        names.reverse();
        names.join("/")
    }

    /// One `"<name> (<kind>)"` line per direct child, in insertion order.
    pub fn children_lines(&self, id: NodeId) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(node) = self.get(id) {
            for child in &node.children {
                if let Some(c) = self.get(*child) {
                    lines.push(format!("{} ({})", c.name, c.kind.as_str()));
                }
            }
        }
        lines
    }

    /// Pre-order listing of the whole subtree, the node itself included,
    /// indented two spaces per level.
    pub fn subtree_lines(&self, id: NodeId) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_subtree(id, 0, &mut lines);
        lines
    }

    fn collect_subtree(&self, id: NodeId, level: usize, lines: &mut Vec<String>) {
        if let Some(node) = self.get(id) {
            lines.push(format!(
                "{}{} ({})",
                "  ".repeat(level),
                node.name,
                node.kind.as_str()
            ));
            for child in &node.children {
                self.collect_subtree(*child, level + 1, lines);
            }
        }
    }

    /// Labeled detail lines for one node.
    pub fn details(&self, id: NodeId) -> Result<String, FsError> {
        let node = self.resolve(id)?;
        Ok(format!(
            "Name: {}\nType: {}\nSize: {}\nExtension: {}\nLast Modified: {}",
            node.name,
            node.kind.as_str(),
            node.size,
            node.extension,
            node.last_modified
        ))
    }

    /// True if the cursor-style id `id` sits inside the subtree at `top`
    /// (including `top` itself).
    pub fn subtree_contains(&self, top: NodeId, id: NodeId) -> bool {
        self.is_within(id, top)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
