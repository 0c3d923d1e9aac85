//! Binary search tree
//!
//! Nodes live in a dense arena (`Vec<BstNode<K>>`) and refer to each other
//! by [`NodeId`]. `left`/`right` are the owning edges; `parent` is a plain
//! back-reference used for splicing and never for ownership. Removing a node
//! swaps the last arena slot into its place and patches the moved node's
//! neighbours, so ids are only stable between mutations.
//!
//! # Deletion
//!
//! [`Bst::delete`] handles the three textbook cases and reports which one ran:
//! - leaf: unlink it
//! - one child: splice the child into the parent's slot
//! - two children: copy the in-order successor's key into the node, then
//!   splice out the successor (which has no left child)
//!
//! # Equality
//!
//! Two trees are equal when they have the same shape and the same key at
//! every position. Arena ids play no part.
//!
//! # Exact restore
//!
//! [`Bst::subtree`] captures a [`TreeShape`] and [`Bst::replace_subtree`]
//! puts one back into a [`Slot`]. The command history uses the pair to undo a
//! delete without re-inserting keys, so the original arrangement comes back.

use crate::errors::StructureError;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// Index of a node in the arena
pub type NodeId = usize;

/// A tree node
#[derive(Debug, Clone)]
pub struct BstNode<K> {
    pub key: K,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    /// Non-owning back-reference
    pub parent: Option<NodeId>,
}

/// Which textbook case a delete went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<K> {
    Leaf,
    OneChild,
    /// The deleted node took over the successor's key
    TwoChildren { successor: K },
}

/// Owned, id-free copy of a subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeShape<K> {
    pub key: K,
    pub left: Option<Box<TreeShape<K>>>,
    pub right: Option<Box<TreeShape<K>>>,
}

impl<K> TreeShape<K> {
    /// Number of nodes in the shape
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.size())
            + self.right.as_ref().map_or(0, |r| r.size())
    }
}

/// Where a subtree hangs: the root, or a child edge of the node holding a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    Root,
    Left(K),
    Right(K),
}

/// Tree traversal orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl Traversal {
    pub fn label(self) -> &'static str {
        match self {
            Traversal::InOrder => "in-order",
            Traversal::PreOrder => "pre-order",
            Traversal::PostOrder => "post-order",
            Traversal::LevelOrder => "level-order",
        }
    }

    /// Cycle to the next order (for the UI)
    pub fn next(self) -> Self {
        match self {
            Traversal::InOrder => Traversal::PreOrder,
            Traversal::PreOrder => Traversal::PostOrder,
            Traversal::PostOrder => Traversal::LevelOrder,
            Traversal::LevelOrder => Traversal::InOrder,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary search tree with unique keys
#[derive(Debug, Clone)]
pub struct Bst<K> {
    nodes: Vec<BstNode<K>>,
    root: Option<NodeId>,
}

impl<K> Bst<K> {
    pub fn new() -> Self {
        Bst {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&BstNode<K>> {
        self.nodes.get(id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&id| [self.nodes[id].left, self.nodes[id].right])
                .flatten()
                .collect();
        }
        height
    }

    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            tree: self,
            stack: Vec::new(),
            cursor: self.root,
            last: None,
        }
    }

    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder {
            tree: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Lazily visit keys in the given order
    pub fn traverse(&self, order: Traversal) -> Box<dyn Iterator<Item = &K> + '_> {
        match order {
            Traversal::InOrder => Box::new(self.in_order()),
            Traversal::PreOrder => Box::new(self.pre_order()),
            Traversal::PostOrder => Box::new(self.post_order()),
            Traversal::LevelOrder => Box::new(self.level_order()),
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn alloc(&mut self, key: K, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(BstNode {
            key,
            left: None,
            right: None,
            parent,
        });
        self.nodes.len() - 1
    }

    /// Point whatever referenced `old` as a child at `new` instead
    fn relink(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.nodes[p].left == Some(old) {
                    self.nodes[p].left = new;
                } else {
                    self.nodes[p].right = new;
                }
            }
        }
        if let Some(child) = new {
            self.nodes[child].parent = parent;
        }
    }

    /// Remove a node that has at most one child, lifting the child into its
    /// place
    fn splice(&mut self, id: NodeId) -> K {
        let node = &self.nodes[id];
        let child = node.left.or(node.right);
        let parent = node.parent;
        self.relink(parent, id, child);
        self.release(id)
    }

    /// Drop a detached node from the arena, moving the last node into its slot
    fn release(&mut self, id: NodeId) -> K {
        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(id);
        if id != last {
            self.patch_moved(last, id);
        }
        removed.key
    }

    /// Detach and free the whole subtree under `id`
    fn release_subtree(&mut self, id: NodeId) {
        let parent = self.nodes[id].parent;
        self.relink(parent, id, None);
        let mut pending = vec![id];
        let mut doomed = Vec::new();
        while let Some(next) = pending.pop() {
            doomed.push(next);
            let node = &self.nodes[next];
            pending.extend(node.left);
            pending.extend(node.right);
        }
        // Highest ids first so swap_remove never moves a node still queued
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for doomed_id in doomed {
            let last = self.nodes.len() - 1;
            self.nodes.swap_remove(doomed_id);
            if doomed_id != last {
                self.patch_moved(last, doomed_id);
            }
        }
    }

    /// Fix references after the node at `from` was moved to `to`
    fn patch_moved(&mut self, from: NodeId, to: NodeId) {
        let moved = &self.nodes[to];
        let (parent, left, right) = (moved.parent, moved.left, moved.right);
        match parent {
            None => self.root = Some(to),
            Some(p) => {
                if self.nodes[p].left == Some(from) {
                    self.nodes[p].left = Some(to);
                } else {
                    self.nodes[p].right = Some(to);
                }
            }
        }
        for child in [left, right].into_iter().flatten() {
            self.nodes[child].parent = Some(to);
        }
    }

    fn graft(&mut self, shape: TreeShape<K>, parent: Option<NodeId>) -> NodeId {
        let TreeShape { key, left, right } = shape;
        let id = self.alloc(key, parent);
        if let Some(left) = left {
            let child = self.graft(*left, Some(id));
            self.nodes[id].left = Some(child);
        }
        if let Some(right) = right {
            let child = self.graft(*right, Some(id));
            self.nodes[id].right = Some(child);
        }
        id
    }
}

impl<K: Clone> Bst<K> {
    /// Id-free copy of the subtree rooted at `id`
    pub fn subtree(&self, id: NodeId) -> Option<TreeShape<K>> {
        let node = self.nodes.get(id)?;
        Some(TreeShape {
            key: node.key.clone(),
            left: node.left.and_then(|l| self.subtree(l)).map(Box::new),
            right: node.right.and_then(|r| self.subtree(r)).map(Box::new),
        })
    }

    /// Id-free copy of the whole tree
    pub fn shape(&self) -> Option<TreeShape<K>> {
        self.root.and_then(|root| self.subtree(root))
    }
}

impl<K: Ord + Clone> Bst<K> {
    /// Build a height-balanced tree from sorted, de-duplicated keys by
    /// picking midpoints recursively
    pub fn from_sorted_balanced(keys: &[K]) -> Self {
        fn build<K: Clone>(keys: &[K]) -> Option<Box<TreeShape<K>>> {
            if keys.is_empty() {
                return None;
            }
            let mid = (keys.len() - 1) / 2;
            Some(Box::new(TreeShape {
                key: keys[mid].clone(),
                left: build(&keys[..mid]),
                right: build(&keys[mid + 1..]),
            }))
        }

        let mut sorted = keys.to_vec();
        sorted.sort();
        sorted.dedup();
        let mut tree = Bst::new();
        if let Some(shape) = build(&sorted) {
            let root = tree.graft(*shape, None);
            tree.root = Some(root);
        }
        tree
    }

    /// Insert a key. Duplicates are ignored and reported with `false`.
    pub fn insert(&mut self, key: K) -> bool {
        let Some(mut current) = self.root else {
            let id = self.alloc(key, None);
            self.root = Some(id);
            return true;
        };
        loop {
            match key.cmp(&self.nodes[current].key) {
                Ordering::Less => match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        let id = self.alloc(key, Some(current));
                        self.nodes[current].left = Some(id);
                        return true;
                    }
                },
                Ordering::Greater => match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        let id = self.alloc(key, Some(current));
                        self.nodes[current].right = Some(id);
                        return true;
                    }
                },
                Ordering::Equal => return false,
            }
        }
    }

    /// Id of the node holding `key`, O(h)
    pub fn search(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            current = match key.cmp(&self.nodes[id].key) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Keys compared on the way down while looking for `key`, each with the
    /// comparison result. Ends at the match or at the last node before
    /// falling off the tree.
    pub fn search_path(&self, key: &K) -> Vec<(K, Ordering)> {
        let mut path = Vec::new();
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            let ordering = key.cmp(&node.key);
            path.push((node.key.clone(), ordering));
            current = match ordering {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => None,
            };
        }
        path
    }

    pub fn min(&self) -> Option<&K> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].key)
    }

    /// Where the node holding `key` hangs
    pub fn slot_of(&self, key: &K) -> Option<Slot<K>> {
        let id = self.search(key)?;
        Some(match self.nodes[id].parent {
            None => Slot::Root,
            Some(p) if self.nodes[p].left == Some(id) => Slot::Left(self.nodes[p].key.clone()),
            Some(p) => Slot::Right(self.nodes[p].key.clone()),
        })
    }

    /// Delete `key`, returning which case applied
    pub fn delete(&mut self, key: &K) -> Result<Removal<K>, StructureError>
    where
        K: fmt::Display,
    {
        let id = self
            .search(key)
            .ok_or_else(|| StructureError::not_found(key, "tree"))?;
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                let successor_key = self.splice(successor);
                // splice may have moved `id` if it was the last arena slot
                let target = if id == self.nodes.len() { successor } else { id };
                self.nodes[target].key = successor_key.clone();
                Ok(Removal::TwoChildren {
                    successor: successor_key,
                })
            }
            (None, None) => {
                self.splice(id);
                Ok(Removal::Leaf)
            }
            _ => {
                self.splice(id);
                Ok(Removal::OneChild)
            }
        }
    }

    /// Replace whatever hangs in `slot` with `shape` (or with nothing).
    /// Fails with `NotFound` if the slot's parent key is not in the tree.
    pub fn replace_subtree(
        &mut self,
        slot: &Slot<K>,
        shape: Option<TreeShape<K>>,
    ) -> Result<(), StructureError>
    where
        K: fmt::Display,
    {
        let parent = match slot {
            Slot::Root => None,
            Slot::Left(parent_key) | Slot::Right(parent_key) => Some(
                self.search(parent_key)
                    .ok_or_else(|| StructureError::not_found(parent_key, "tree"))?,
            ),
        };
        let current = match (slot, parent) {
            (Slot::Left(_), Some(p)) => self.nodes[p].left,
            (Slot::Right(_), Some(p)) => self.nodes[p].right,
            _ => self.root,
        };
        // Releasing nodes shuffles ids, so re-resolve the parent afterwards
        let parent_key = parent.map(|p| self.nodes[p].key.clone());
        if let Some(old) = current {
            self.release_subtree(old);
        }
        let parent = parent_key.and_then(|k| self.search(&k));
        if let Some(shape) = shape {
            let id = self.graft(shape, parent);
            match (slot, parent) {
                (Slot::Left(_), Some(p)) => self.nodes[p].left = Some(id),
                (Slot::Right(_), Some(p)) => self.nodes[p].right = Some(id),
                _ => self.root = Some(id),
            }
        }
        Ok(())
    }
}

impl<K> Default for Bst<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq> PartialEq for Bst<K> {
    fn eq(&self, other: &Self) -> bool {
        fn same<K: PartialEq>(
            a: &Bst<K>,
            x: Option<NodeId>,
            b: &Bst<K>,
            y: Option<NodeId>,
        ) -> bool {
            match (x, y) {
                (None, None) => true,
                (Some(x), Some(y)) => {
                    let (m, n) = (&a.nodes[x], &b.nodes[y]);
                    m.key == n.key && same(a, m.left, b, n.left) && same(a, m.right, b, n.right)
                }
                _ => false,
            }
        }
        self.len() == other.len() && same(self, self.root, other, other.root)
    }
}

impl<K: Eq> Eq for Bst<K> {}

impl<K: Ord + Clone> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Bst::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

/// Left, node, right
pub struct InOrder<'a, K> {
    tree: &'a Bst<K>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.cursor {
            self.stack.push(id);
            self.cursor = self.tree.nodes[id].left;
        }
        let id = self.stack.pop()?;
        self.cursor = self.tree.nodes[id].right;
        Some(&self.tree.nodes[id].key)
    }
}

/// Node, left, right
pub struct PreOrder<'a, K> {
    tree: &'a Bst<K>,
    stack: Vec<NodeId>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.key)
    }
}

/// Left, right, node
pub struct PostOrder<'a, K> {
    tree: &'a Bst<K>,
    stack: Vec<NodeId>,
    cursor: Option<NodeId>,
    last: Option<NodeId>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.cursor {
                self.stack.push(id);
                self.cursor = self.tree.nodes[id].left;
                continue;
            }
            let &top = self.stack.last()?;
            let right = self.tree.nodes[top].right;
            if right.is_some() && right != self.last {
                self.cursor = right;
                continue;
            }
            self.stack.pop();
            self.last = Some(top);
            return Some(&self.tree.nodes[top].key);
        }
    }
}

/// Breadth first, left to right
pub struct LevelOrder<'a, K> {
    tree: &'a Bst<K>,
    queue: VecDeque<NodeId>,
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = &self.tree.nodes[id];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.key)
    }
}
