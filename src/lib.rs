//! A [`Deque`] is a double-ended queue stored in a growable circular buffer.
//!
//! Elements can be pushed and popped at both ends in constant time. When the buffer is full it doubles,
//! moving the elements to the start of the new buffer in front-to-back order.
//! Allocation failure and access to an empty deque are reported through [`DequeError`] rather than aborting.
//!
//! ```
//! use circdeque::Deque;
//! let mut deque = Deque::new();
//! deque.push_back(2).unwrap();
//! deque.push_front(1).unwrap();
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert!(deque.pop_back().is_err());
//! ```

pub mod cursor;
pub mod deque;
pub mod error;
pub mod settings;


pub use cursor::{Cursor, CursorMut};
pub use deque::Deque;
pub use error::{Access, DequeError};
pub use settings::{Compact, CopyBehavior, Verbatim};
