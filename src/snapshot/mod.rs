// Structure snapshots handed to the renderer

use crate::structures::bst::{Bst, NodeId};
use crate::structures::linked_list::LinkedList;
use crate::structures::queue::{Queue, TwoStackQueue};
use crate::structures::stack::Stack;
use crate::structures::{StructureKind, Value, Workbench};

/// Copy of one structure at a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Stack(Stack<Value>),
    Queue(Queue<Value>),
    TwoStackQueue(TwoStackQueue<Value>),
    LinkedList(LinkedList<Value>),
    Bst(Bst<Value>),
}

impl Snapshot {
    /// Copy the structure `kind` out of the workbench
    pub fn capture(workbench: &Workbench, kind: StructureKind) -> Self {
        match kind {
            StructureKind::Stack => Snapshot::Stack(workbench.stack.clone()),
            StructureKind::Queue => Snapshot::Queue(workbench.queue.clone()),
            StructureKind::TwoStackQueue => {
                Snapshot::TwoStackQueue(workbench.two_stack_queue.clone())
            }
            StructureKind::LinkedList => Snapshot::LinkedList(workbench.list.clone()),
            StructureKind::Bst => Snapshot::Bst(workbench.bst.clone()),
        }
    }

    /// Put this copy back in place of the live structure
    pub fn restore_into(&self, workbench: &mut Workbench) {
        match self {
            Snapshot::Stack(s) => workbench.stack = s.clone(),
            Snapshot::Queue(q) => workbench.queue = q.clone(),
            Snapshot::TwoStackQueue(q) => workbench.two_stack_queue = q.clone(),
            Snapshot::LinkedList(l) => workbench.list = l.clone(),
            Snapshot::Bst(t) => workbench.bst = t.clone(),
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Snapshot::Stack(_) => StructureKind::Stack,
            Snapshot::Queue(_) => StructureKind::Queue,
            Snapshot::TwoStackQueue(_) => StructureKind::TwoStackQueue,
            Snapshot::LinkedList(_) => StructureKind::LinkedList,
            Snapshot::Bst(_) => StructureKind::Bst,
        }
    }

    /// Number of elements in the copy
    pub fn len(&self) -> usize {
        match self {
            Snapshot::Stack(s) => s.len(),
            Snapshot::Queue(q) => q.len(),
            Snapshot::TwoStackQueue(q) => q.len(),
            Snapshot::LinkedList(l) => l.len(),
            Snapshot::Bst(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A tree node placed on a grid: one column per in-order position, one row
/// per depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedNode {
    pub key: Value,
    pub column: usize,
    pub depth: usize,
    pub parent_column: Option<usize>,
}

/// Lay the tree out so every key gets its own column, in sorted order, and
/// children sit one row below their parent
pub fn tree_layout(tree: &Bst<Value>) -> Vec<PlacedNode> {
    // In-order position of every node, indexed by arena id
    let mut columns = vec![0; tree.len()];
    let mut pending = Vec::new();
    let mut cursor = tree.root();
    let mut next_column = 0;
    while cursor.is_some() || !pending.is_empty() {
        while let Some(id) = cursor {
            pending.push(id);
            cursor = tree.node(id).and_then(|n| n.left);
        }
        if let Some(id) = pending.pop() {
            columns[id] = next_column;
            next_column += 1;
            cursor = tree.node(id).and_then(|n| n.right);
        }
    }

    let mut out = Vec::with_capacity(tree.len());
    let mut frontier: Vec<(NodeId, usize)> = tree.root().map(|r| (r, 0)).into_iter().collect();
    while let Some((id, depth)) = frontier.pop() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        out.push(PlacedNode {
            key: node.key,
            column: columns[id],
            depth,
            parent_column: node.parent.map(|p| columns[p]),
        });
        frontier.extend(node.right.map(|r| (r, depth + 1)));
        frontier.extend(node.left.map(|l| (l, depth + 1)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_columns_follow_sorted_order() {
        let tree: Bst<Value> = [50, 30, 70, 20, 40].into_iter().collect();
        let mut layout = tree_layout(&tree);
        layout.sort_by_key(|p| p.column);
        let keys: Vec<Value> = layout.iter().map(|p| p.key).collect();
        assert_eq!(keys, vec![20, 30, 40, 50, 70]);

        let root = layout.iter().find(|p| p.key == 50).unwrap();
        assert_eq!((root.depth, root.parent_column), (0, None));
        let left = layout.iter().find(|p| p.key == 30).unwrap();
        assert_eq!(left.parent_column, Some(root.column));
        let leaf = layout.iter().find(|p| p.key == 20).unwrap();
        assert_eq!((leaf.depth, leaf.parent_column), (2, Some(left.column)));
    }
}
