use std::fmt;
use thiserror::Error;

/// Errors raised by [`Deque`](crate::Deque) and its cursors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A backing buffer of `requested` slots could not be allocated.
    /// Growth that would overflow `usize` reports `usize::MAX`.
    #[error("unable to allocate a buffer of {requested} slots")]
    Allocation { requested: usize },

    /// An element was requested from, or removed from, an empty deque.
    #[error("unable to {access} an empty deque")]
    EmptyContainer { access: Access },

    /// A cursor was requested past the end of the deque.
    #[error("cursor offset {offset} is out of bounds for a deque of length {len}")]
    InvalidArgument { offset: usize, len: usize },
}

/// The operation that found the deque empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    PopFront,
    PopBack,
    Front,
    Back,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Access::PopFront => "pop from the front of",
            Access::PopBack => "pop from the back of",
            Access::Front | Access::Back => "access data from",
        };
        f.write_str(text)
    }
}
