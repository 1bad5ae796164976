use std::collections::BTreeMap;

use crate::error::MiningError;

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// The root sentinel always sits at index 0.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPNode {
    /// `None` only for the root sentinel.
    pub item: Option<usize>,
    pub count: usize,
    /// Non-owning back link, used for upward walks.
    pub parent: Option<NodeId>,
    pub children: BTreeMap<usize, NodeId>,
    /// Position of `item` in the header table the tree was built with.
    pub position: Option<usize>,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
            position: None,
        }
    }

    pub fn new_item(item: usize, count: usize, parent: NodeId, position: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: BTreeMap::new(),
            position: Some(position),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeShape {
    /// Nothing below the root.
    Empty,
    /// One chain from the root to a single leaf.
    SinglePath,
    Branching,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPTree {
    nodes: Vec<FPNode>,
    leaf_count: usize,
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            leaf_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> Result<&FPNode, MiningError> {
        self.nodes.get(id).ok_or(MiningError::DanglingNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut FPNode, MiningError> {
        self.nodes.get_mut(id).ok_or(MiningError::DanglingNode(id))
    }

    /// Number of leaves, maintained incrementally while children are added.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn shape(&self) -> TreeShape {
        match self.leaf_count {
            0 => TreeShape::Empty,
            1 => TreeShape::SinglePath,
            _ => TreeShape::Branching,
        }
    }

    /// Moves from `parent` to its child labelled `item`, adding `count` to an
    /// existing child or creating a new one. Returns the child and whether it
    /// was created.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        item: usize,
        count: usize,
        position: usize,
    ) -> Result<(NodeId, bool), MiningError> {
        let existing = self.node(parent)?.children.get(&item).copied();
        if let Some(child) = existing {
            self.node_mut(child)?.count += count;
            return Ok((child, false));
        }

        let child = self.nodes.len();
        let parent_node = self.node_mut(parent)?;
        // A leaf that gains its first child hands its leaf status down.
        let extends_leaf = !parent_node.is_root() && parent_node.children.is_empty();
        parent_node.children.insert(item, child);
        if !extends_leaf {
            self.leaf_count += 1;
        }

        self.nodes.push(FPNode::new_item(item, count, parent, position));
        Ok((child, true))
    }

    /// Nodes from the root's child down to the leaf. Only meaningful for a
    /// [`TreeShape::SinglePath`] tree; elsewhere the first child is followed.
    pub fn single_path(&self) -> Result<Vec<NodeId>, MiningError> {
        let mut path = Vec::new();
        let mut current = self.root();

        while let Some(&child) = current.children.values().next() {
            path.push(child);
            current = self.node(child)?;
        }
        Ok(path)
    }

    /// Ancestors of `id` excluding the node itself and the root, ordered
    /// from the root downwards.
    pub fn ancestors(&self, id: NodeId) -> Result<Vec<NodeId>, MiningError> {
        let mut chain = Vec::new();
        let mut current = self.node(id)?.parent;

        while let Some(ancestor) = current {
            let node = self.node(ancestor)?;
            if node.is_root() {
                break;
            }
            chain.push(ancestor);
            current = node.parent;
        }

        chain.reverse();
        Ok(chain)
    }
}
