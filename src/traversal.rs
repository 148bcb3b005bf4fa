//! The traversal family. Every traversal copies the keys out into a `Vec` and leaves the tree
//! untouched, so calling one twice on an unmodified tree gives the same answer.
//!
//! Preorder, inorder and postorder each come in two flavours: a recursive one, which uses the
//! call stack and so is limited by the height of the tree, and an iterative one, which keeps its
//! own stack on the heap and is safe for trees of any shape.

use std::collections::VecDeque;

use crate::tree::{Link, Node, Tree};

impl<K: Clone> Tree<K> {
    /// The keys in ascending order (left subtree, node, right subtree), by recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<i32> = [50, 30, 20, 40, 70, 60, 80].iter().copied().collect();
    ///
    /// assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
    /// ```
    pub fn inorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        inorder(&self.root, &mut keys);
        keys
    }

    /// The keys with every node before its subtrees (node, left subtree, right subtree), by
    /// recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<i32> = [50, 30, 20, 40, 70, 60, 80].iter().copied().collect();
    ///
    /// assert_eq!(tree.preorder(), vec![50, 30, 20, 40, 70, 60, 80]);
    /// ```
    pub fn preorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        preorder(&self.root, &mut keys);
        keys
    }

    /// The keys with every node after its subtrees (left subtree, right subtree, node), by
    /// recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<i32> = [50, 30, 20, 40, 70, 60, 80].iter().copied().collect();
    ///
    /// assert_eq!(tree.postorder(), vec![20, 40, 30, 60, 80, 70, 50]);
    /// ```
    pub fn postorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        postorder(&self.root, &mut keys);
        keys
    }

    /// Same order as [`Tree::inorder`] but collected from [`Tree::iter`], which keeps the
    /// ancestors still waiting for their right subtree on an explicit stack.
    pub fn inorder_iterative(&self) -> Vec<K> {
        self.iter().cloned().collect()
    }

    /// Same order as [`Tree::preorder`] using an explicit stack. The right child is pushed
    /// before the left one so the left subtree is popped, and visited, first.
    pub fn preorder_iterative(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }

        keys
    }

    /// Same order as [`Tree::postorder`] using two stacks. Popping from the first stack visits
    /// node, right, left; pushing those onto the second stack and draining it reverses that into
    /// left, right, node.
    pub fn postorder_iterative(&self) -> Vec<K> {
        let mut pending: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        let mut visited = Vec::with_capacity(self.len());
        while let Some(node) = pending.pop() {
            visited.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        let mut keys = Vec::with_capacity(visited.len());
        while let Some(node) = visited.pop() {
            keys.push(node.key.clone());
        }
        keys
    }

    /// The keys level by level from the root down, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<i32> = [50, 30, 20, 40, 70, 60, 80].iter().copied().collect();
    ///
    /// assert_eq!(tree.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
    /// ```
    pub fn level_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            keys.push(node.key.clone());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }

        keys
    }
}

impl<K> Tree<K> {
    /// A lazy iterator over references to the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<i32> = [2, 3, 1].iter().copied().collect();
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Inorder iterator returned by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet. Their left subtrees have already been pushed.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

fn inorder<K: Clone>(link: &Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = link {
        inorder(&node.left, keys);
        keys.push(node.key.clone());
        inorder(&node.right, keys);
    }
}

fn preorder<K: Clone>(link: &Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = link {
        keys.push(node.key.clone());
        preorder(&node.left, keys);
        preorder(&node.right, keys);
    }
}

fn postorder<K: Clone>(link: &Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = link {
        postorder(&node.left, keys);
        postorder(&node.right, keys);
        keys.push(node.key.clone());
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;

    fn sorted(mut keys: Vec<i8>) -> Vec<i8> {
        keys.sort_unstable();
        keys
    }

    quickcheck::quickcheck! {
        fn all_traversals_hold_the_same_keys(xs: Vec<i8>) -> bool {
            let tree: Tree<i8> = xs.into_iter().collect();
            let expected = tree.inorder();

            [
                tree.preorder(),
                tree.postorder(),
                tree.inorder_iterative(),
                tree.preorder_iterative(),
                tree.postorder_iterative(),
                tree.level_order(),
            ]
            .iter()
            .all(|keys| sorted(keys.clone()) == expected)
        }
    }

    quickcheck::quickcheck! {
        fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
            let tree: Tree<i8> = xs.into_iter().collect();

            tree.inorder().windows(2).all(|pair| pair[0] < pair[1])
        }
    }
}
