//! Search nodes and the arena that owns them.

use crate::layout::Layout;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A layout reached during search, with its costs and the node it was
/// expanded from.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub layout: Layout,
    /// `None` only for the initial layout.
    pub parent: Option<NodeId>,
    /// Heuristic estimate of the remaining moves.
    pub h: u64,
    /// Moves taken from the initial layout.
    pub g: u64,
}

impl SearchNode {
    pub fn root(layout: Layout, h: u64) -> Self {
        Self {
            layout,
            parent: None,
            h,
            g: 0,
        }
    }

    /// Frontier priority, `g + h`.
    pub fn f(&self) -> u64 {
        self.g.saturating_add(self.h)
    }
}

/// Append-only store of every node created by one search.
///
/// A parent is always pushed before its children, so parent links point
/// strictly backwards and can never form a cycle.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.map_or(true, |p| p.0 < self.nodes.len()));
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena. Use [`NodeArena::try_get`]
    /// for ids of unknown origin.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn try_get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Layouts from the root down to `id`, inclusive at both ends.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    pub fn path(&self, id: NodeId) -> Vec<Layout> {
        let mut path = Vec::with_capacity(self.get(id).g as usize + 1);
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.layout.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Move;

    #[test]
    fn f_is_sum_of_g_and_h() {
        let node = SearchNode {
            layout: Layout::goal(2).unwrap(),
            parent: None,
            h: 7,
            g: 3,
        };
        assert_eq!(node.f(), 10);
    }

    #[test]
    fn path_runs_from_root_to_node() {
        let start = Layout::goal(3).unwrap();
        let second = start.apply(Move::Right).unwrap();
        let third = second.apply(Move::Down).unwrap();

        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(start.clone(), 0));
        let mid = arena.push(SearchNode {
            layout: second.clone(),
            parent: Some(root),
            h: 1,
            g: 1,
        });
        let leaf = arena.push(SearchNode {
            layout: third.clone(),
            parent: Some(mid),
            h: 2,
            g: 2,
        });

        assert_eq!(arena.path(leaf), vec![start.clone(), second, third]);
        assert_eq!(arena.path(root), vec![start]);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn try_get_rejects_foreign_ids() {
        let mut big = NodeArena::new();
        let mut small = NodeArena::new();
        small.push(SearchNode::root(Layout::goal(2).unwrap(), 0));
        big.push(SearchNode::root(Layout::goal(2).unwrap(), 0));
        let foreign = big.push(SearchNode::root(Layout::goal(2).unwrap(), 0));

        assert!(small.try_get(foreign).is_none());
        assert!(big.try_get(foreign).is_some());
    }

    #[test]
    fn f_saturates_instead_of_overflowing() {
        let node = SearchNode {
            layout: Layout::goal(1).unwrap(),
            parent: None,
            h: u64::MAX,
            g: 1,
        };
        assert_eq!(node.f(), u64::MAX);
    }
}
