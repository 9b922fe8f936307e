//! Binary tree with optional children
//!
//! Children are owned `Box` links, so a tree can only be assembled from
//! already-built subtrees and never contains a cycle.

use std::fmt::{self, Display};

use termtree::Tree as DisplayTree;

/// Placeholder rendered for an absent child.
pub const ABSENT: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub value: T,
    pub left: Option<Box<Tree<T>>>,
    pub right: Option<Box<Tree<T>>>,
}

impl<T> Tree<T> {
    pub fn new(value: T, left: Option<Tree<T>>, right: Option<Tree<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    /// Height of the tree; a single node has depth 1.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |t| t.depth());
        let right = self.right.as_ref().map_or(0, |t| t.depth());
        1 + left.max(right)
    }

    /// Values of nodes without children, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        match (&self.left, &self.right) {
            (None, None) => vec![&self.value],
            (left, right) => {
                let mut leaves = Vec::new();
                if let Some(l) = left {
                    leaves.extend(l.leaf_values());
                }
                if let Some(r) = right {
                    leaves.extend(r.leaf_values());
                }
                leaves
            }
        }
    }
}

impl<T: Display> Tree<T> {
    /// Renders as `(value left right)` with `.` for absent children.
    pub fn show(&self) -> String {
        format!(
            "({} {} {})",
            self.value,
            show_child(&self.left),
            show_child(&self.right)
        )
    }
}

fn show_child<T: Display>(child: &Option<Box<Tree<T>>>) -> String {
    match child {
        Some(t) => t.show(),
        None => ABSENT.to_string(),
    }
}

impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

/// Conversion into a box-drawing tree for terminal display.
pub trait TreeConvert {
    fn to_display_tree(&self) -> DisplayTree<String>;
}

impl<T: Display> TreeConvert for Tree<T> {
    fn to_display_tree(&self) -> DisplayTree<String> {
        let root = DisplayTree::new(self.value.to_string());
        if self.left.is_none() && self.right.is_none() {
            return root;
        }

        // Both slots are kept so left and right stay distinguishable.
        let leaves: Vec<_> = [&self.left, &self.right]
            .into_iter()
            .map(|child| match child {
                Some(t) => t.to_display_tree(),
                None => DisplayTree::new(ABSENT.to_string()),
            })
            .collect();

        root.with_leaves(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<i32> {
        let a = Tree::leaf(5);
        let a = Tree::new(1, Some(a), None);
        Tree::new(2, Some(Tree::leaf(4)), Some(a))
    }

    #[test]
    fn given_leaf_when_show_then_both_children_are_placeholders() {
        assert_eq!(Tree::leaf(5).show(), "(5 . .)");
    }

    #[test]
    fn given_nested_tree_when_show_then_renders_recursively() {
        assert_eq!(sample().show(), "(2 (4 . .) (1 (5 . .) .))");
    }

    #[test]
    fn given_nested_tree_when_depth_then_counts_levels() {
        assert_eq!(Tree::leaf('x').depth(), 1);
        assert_eq!(sample().depth(), 3);
    }

    #[test]
    fn given_nested_tree_when_leaf_values_then_left_to_right() {
        assert_eq!(sample().leaf_values(), vec![&4, &5]);
    }

    #[test]
    fn given_tree_when_display_tree_then_absent_slots_are_kept() {
        let rendered = Tree::new(1, Some(Tree::leaf(5)), None)
            .to_display_tree()
            .to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with('5'));
        assert!(lines[2].ends_with('.'));
    }
}
