//! A mutable BST with exclusively owned nodes. Every parent owns its children through a `Box` so
//! restructuring during deletion is just moving subtrees between slots.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.search(&1));
//!
//! // Inserting the same key again leaves the tree untouched.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::trace;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. This can be used for inserting, searching and deleting
/// keys, rebuilding into a minimal-height shape, and walking the keys in any of the classic
/// traversal orders (see the traversal methods).
///
/// The tree does not rebalance itself. Inserting keys in sorted order produces a tree as tall as
/// it has keys; [`Tree::build_balanced`] is the way to get a short tree.
pub struct Tree<K> {
    pub(crate) root: Link<K>,
    len: usize,
}

pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop recurses once per level which blows the stack on a tree built from sorted
    // inserts, so we unlink nodes onto a heap allocated stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the key into the tree. Returns `true` if a new node was added and `false` if the
    /// key was already present, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [50, 30, 70] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert!(!tree.insert(30));
    /// assert_eq!(tree.inorder(), vec![30, 50, 70]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new_boxed(key));

        self.len += 1;
        trace!("inserted node, tree now holds {} keys", self.len);
        true
    }

    /// Whether a node with exactly this key is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.search(&40));
    ///
    /// tree.insert(40);
    /// assert!(tree.search(&40));
    /// assert!(!tree.search(&90));
    /// ```
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Deletes the node containing the given key. Returns `true` if a node was removed; deleting
    /// a key that isn't in the tree does nothing and returns `false`.
    ///
    /// A node with two children takes the key of its inorder successor (the smallest key in its
    /// right subtree) and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [50, 30, 70, 60, 80].iter().copied().collect();
    ///
    /// assert!(tree.delete(&50));
    /// assert_eq!(tree.preorder(), vec![60, 30, 70, 80]);
    ///
    /// assert!(!tree.delete(&50));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = delete(&mut self.root, key);
        if deleted {
            self.len -= 1;
            trace!("deleted node, tree now holds {} keys", self.len);
        }

        deleted
    }

    /// Throws away the contents of the tree and rebuilds it from `sorted`, which must be in
    /// strictly ascending order. The middle key of every range (the lower one for even lengths)
    /// becomes the root of that range so the result has the minimal height of
    /// `⌈log₂(n + 1)⌉`.
    ///
    /// # Panics
    ///
    /// In debug builds, if `sorted` is not strictly ascending. Release builds trust the caller:
    /// an unsorted slice gives a tree that breaks the ordering invariant, after which `search`
    /// and `delete` may miss keys that are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(99);
    ///
    /// tree.build_balanced(&[10, 20, 30, 40, 50, 60, 70]);
    ///
    /// assert!(!tree.search(&99));
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.level_order(), vec![40, 20, 60, 10, 30, 50, 70]);
    /// ```
    pub fn build_balanced(&mut self, sorted: &[K])
    where
        K: Ord + Clone,
    {
        debug_assert!(
            sorted.windows(2).all(|pair| pair[0] < pair[1]),
            "`build_balanced` needs strictly ascending keys"
        );

        *self = Self {
            root: build(sorted),
            len: sorted.len(),
        };
        trace!("rebuilt tree from {} sorted keys", self.len);
    }

    /// Convenience for [`Tree::build_balanced`] on a new tree.
    pub fn from_sorted(sorted: &[K]) -> Self
    where
        K: Ord + Clone,
    {
        let mut tree = Self::new();
        tree.build_balanced(sorted);
        tree
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1. Walks the tree with its own stack, so any shape is fine.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Whether the heights of the left and right subtrees of every node differ by at most one.
    ///
    /// This is a single recursive pass that gives up at the first unbalanced subtree. It recurses
    /// once per level, so like the recursive traversals it needs a call stack as deep as the tree
    /// is tall.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(3);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root).is_some()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// Removes the node holding `key` from the subtree in `slot`, returning whether it was found.
fn delete<K: Ord>(mut slot: &mut Link<K>, key: &K) -> bool {
    // Only borrow mutably once we know we're descending, so the slot holding the key is still
    // free to be overwritten below.
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return false,
        };
        if ordering == Ordering::Equal {
            break;
        }
        if let Some(node) = slot {
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    let Some(node) = slot.as_mut() else {
        return false;
    };
    if node.left.is_none() {
        let right = node.right.take();
        *slot = right;
    } else if node.right.is_none() {
        let left = node.left.take();
        *slot = left;
    } else if let Some(successor) = take_min(&mut node.right) {
        node.key = successor;
    }
    true
}

/// Unlinks the leftmost node of the subtree, splicing its right child into its place, and
/// returns its key. `None` only for an empty subtree.
fn take_min<K>(mut slot: &mut Link<K>) -> Option<K> {
    while slot.as_deref()?.left.is_some() {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }

    let min = slot.take()?;
    let Node { key, right, .. } = *min;
    *slot = right;
    Some(key)
}

fn build<K: Clone>(sorted: &[K]) -> Link<K> {
    if sorted.is_empty() {
        return None;
    }

    let mid = (sorted.len() - 1) / 2;
    Some(Box::new(Node {
        key: sorted[mid].clone(),
        left: build(&sorted[..mid]),
        right: build(&sorted[mid + 1..]),
    }))
}

fn height<K>(link: &Link<K>) -> usize {
    let mut tallest = 0;
    let mut stack: Vec<(&Node<K>, usize)> = link.as_deref().into_iter().map(|n| (n, 1)).collect();
    while let Some((node, depth)) = stack.pop() {
        tallest = tallest.max(depth);
        stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
        stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
    }

    tallest
}

/// The height of the subtree, or `None` as soon as any node below is out of balance.
fn balanced_height<K>(link: &Link<K>) -> Option<usize> {
    let Some(node) = link else {
        return Some(0);
    };
    let left = balanced_height(&node.left)?;
    let right = balanced_height(&node.right)?;
    if left.abs_diff(right) > 1 {
        return None;
    }

    Some(left.max(right) + 1)
}
