//! This crate exposes a mutable Binary Search Tree (BST) over unique keys, along with the two
//! small containers it is usually taught alongside: a stack and a queue.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`Tree`] does not rebalance itself, so
//! inserting keys in sorted order gives a tree whose height is the number of keys. Building
//! from a sorted slice with [`Tree::build_balanced`] instead limits the height to
//! `⌈log₂(N + 1)⌉` where `N` is the number of keys.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree, then the subtree
//! root, then the right subtree. [`Tree`] offers that and the other classic traversal orders,
//! each in a recursive and an iterative form.
//!
//! ## Stack and Queue
//!
//! [`Stack`] and [`Queue`] are thin wrappers around a `VecDeque`. Asking either for an item
//! when it is empty fails with [`EmptyStructureError`] rather than returning a sentinel.
//!
//! ## Logging
//!
//! Structural changes to a tree are reported at `trace` level and empty-container errors at
//! `debug` level through the [`log`] facade. The crate never installs a logger itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod queue;
pub mod stack;
pub mod traversal;
pub mod tree;

pub use error::EmptyStructureError;
pub use queue::Queue;
pub use stack::Stack;
pub use traversal::Iter;
pub use tree::Tree;
