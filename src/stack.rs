//! A LIFO stack on top of a `VecDeque`.
//!
//! # Examples
//!
//! ```
//! use bst::{EmptyStructureError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//!
//! assert_eq!(stack.peek(), Ok(&20));
//! assert_eq!(stack.pop(), Ok(20));
//! assert_eq!(stack.pop(), Ok(10));
//!
//! // Empty stacks complain instead of handing back a sentinel.
//! assert_eq!(stack.pop(), Err(EmptyStructureError::Stack));
//! ```

use std::collections::VecDeque;

use log::debug;

use crate::error::EmptyStructureError;

/// A last in, first out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: VecDeque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Result<T, EmptyStructureError> {
        self.items.pop_back().ok_or_else(|| {
            debug!("pop on an empty stack");
            EmptyStructureError::Stack
        })
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStructureError> {
        self.items.back().ok_or_else(|| {
            debug!("peek on an empty stack");
            EmptyStructureError::Stack
        })
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reverses `text` by pushing every character onto a [`Stack`] and popping them back off.
///
/// # Examples
///
/// ```
/// assert_eq!(bst::stack::reverse("Hello, World!"), "!dlroW ,olleH");
/// ```
pub fn reverse(text: &str) -> String {
    let mut stack = Stack::new();
    for ch in text.chars() {
        stack.push(ch);
    }

    let mut reversed = String::with_capacity(text.len());
    while let Ok(ch) = stack.pop() {
        reversed.push(ch);
    }
    reversed
}
