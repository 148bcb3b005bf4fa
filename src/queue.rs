//! A FIFO queue on top of a `VecDeque`.
//!
//! # Examples
//!
//! ```
//! use bst::{EmptyStructureError, Queue};
//!
//! let mut queue = Queue::new();
//! queue.enqueue("Task 1");
//! queue.enqueue("Task 2");
//!
//! assert_eq!(queue.to_string(), "[Task 1, Task 2]");
//! assert_eq!(queue.dequeue(), Ok("Task 1"));
//! assert_eq!(queue.dequeue(), Ok("Task 2"));
//! assert_eq!(queue.dequeue(), Err(EmptyStructureError::Queue));
//! ```

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::error::EmptyStructureError;

/// A first in, first out container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T, EmptyStructureError> {
        self.items.pop_front().ok_or_else(|| {
            debug!("dequeue on an empty queue");
            EmptyStructureError::Queue
        })
    }

    /// Returns the front item without removing it.
    pub fn peek(&self) -> Result<&T, EmptyStructureError> {
        self.items.front().ok_or_else(|| {
            debug!("peek on an empty queue");
            EmptyStructureError::Queue
        })
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items waiting in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Renders front to back as `[a, b, c]`.
impl<T> fmt::Display for Queue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        for task in ["Task 1", "Task 2", "Task 3"] {
            queue.enqueue(task.to_string());
        }

        assert_eq!(queue.to_string(), "[Task 1, Task 2, Task 3]");
        assert_eq!(queue.peek().map(String::as_str), Ok("Task 1"));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue().as_deref(), Ok("Task 1"));
        assert_eq!(queue.dequeue().as_deref(), Ok("Task 2"));
        assert_eq!(queue.dequeue().as_deref(), Ok("Task 3"));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: Queue<u8> = Queue::default();

        assert_eq!(queue.to_string(), "[]");
        assert_eq!(queue.peek(), Err(EmptyStructureError::Queue));
        assert_eq!(queue.dequeue(), Err(EmptyStructureError::Queue));
    }
}
