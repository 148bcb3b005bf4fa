//! Errors for the containers that can be asked for an element they don't have.

use thiserror::Error;

/// Returned when popping, peeking or dequeuing from a container that holds nothing. The
/// variant names the container so callers juggling both can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyStructureError {
    /// A [`Stack`](crate::Stack) was empty.
    #[error("stack is empty")]
    Stack,
    /// A [`Queue`](crate::Queue) was empty.
    #[error("queue is empty")]
    Queue,
}
