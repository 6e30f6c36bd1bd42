//! Generic traversal over a user-supplied adjacency.

use adjgraph::graph::{bfs, dfs, Adjacency};

/// Infinite binary tree: n -> 2n, 2n + 1, truncated below `limit`.
struct BinaryTree {
    limit: u32,
}

impl Adjacency for BinaryTree {
    type Vertex = u32;

    fn contains(&self, v: &u32) -> bool {
        (1..self.limit).contains(v)
    }

    fn successors(&self, v: &u32) -> Vec<u32> {
        [2 * v, 2 * v + 1]
            .into_iter()
            .filter(|c| self.contains(c))
            .collect()
    }
}

#[test]
fn test_custom_adjacency_dfs_is_preorder() {
    let tree = BinaryTree { limit: 8 };
    assert_eq!(dfs(&tree, &1, None), vec![1, 2, 4, 5, 3, 6, 7]);
}

#[test]
fn test_custom_adjacency_bfs_is_level_order() {
    let tree = BinaryTree { limit: 8 };
    assert_eq!(bfs(&tree, &1, None), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(bfs(&tree, &1, Some(&5)), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_custom_adjacency_absent_start() {
    let tree = BinaryTree { limit: 8 };
    assert!(dfs(&tree, &0, None).is_empty());
    assert!(bfs(&tree, &9, None).is_empty());
}
