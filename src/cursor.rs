//! Forward cursors over a [`Deque`](crate::Deque).
//!
//! A cursor is a logical position: offset `0` is the front element and offset `len` is the end.
//! Each offset maps to the physical slot `(first + offset) % capacity`, so walking a cursor
//! follows the deque's front-to-back order even when the elements wrap around the buffer.
//! For a walk over the raw buffer in physical order use [`Deque::as_slots`](crate::Deque::as_slots).
//!
//! A cursor borrows its deque. Pushing can reallocate the buffer, so the deque cannot be pushed to
//! while any cursor over it is alive.

use crate::deque::wrap_add;
use std::fmt::Debug;

/// A shared forward cursor. Also an [`Iterator`] over the remaining elements.
///
/// # Examples
/// ```
/// # use circdeque::Deque;
/// let mut deque = Deque::new();
/// deque.try_extend([1, 2, 3]).unwrap();
/// let mut cursor = deque.cursor();
/// let end = deque.end_cursor();
/// let mut seen = Vec::new();
/// while cursor != end {
///     seen.push(*cursor.get().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub struct Cursor<'a, T> {
    slots: &'a [T],
    first: usize,
    len: usize,
    offset: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [T], first: usize, len: usize, offset: usize) -> Self {
        Cursor {
            slots,
            first,
            len,
            offset,
        }
    }

    /// The element under the cursor, or `None` at the end position or for a default cursor.
    pub fn get(&self) -> Option<&'a T> {
        let slots = self.slots;
        self.physical_slot().map(|slot| &slots[slot])
    }

    /// Steps to the next element. An end cursor stays at the end.
    pub fn advance(&mut self) -> &mut Self {
        if self.offset < self.len {
            self.offset += 1;
        }
        self
    }

    /// Steps to the next element and returns the cursor as it was before the step.
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }

    /// The logical position, counted from the front.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The physical buffer slot under the cursor, or `None` at the end position.
    pub fn physical_slot(&self) -> Option<usize> {
        if self.offset < self.len {
            Some(wrap_add(self.slots.len(), self.first, self.offset))
        } else {
            None
        }
    }
}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Cursor {
            slots: &[],
            first: 0,
            len: 0,
            offset: 0,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

// Same buffer and same position. Cursors that hold no elements compare by position only.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slots.as_ptr(), other.slots.as_ptr()) && self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("len", &self.len)
            .field("slot", &self.physical_slot())
            .finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

/// A forward cursor that hands out mutable references.
///
/// # Examples
/// ```
/// # use circdeque::Deque;
/// let mut deque = Deque::new();
/// deque.try_extend([1, 2, 3]).unwrap();
/// let mut cursor = deque.cursor_mut();
/// while let Some(item) = cursor.get_mut() {
///     *item *= 10;
///     cursor.advance();
/// }
/// assert_eq!(format!("{:?}", deque), "[10, 20, 30]");
/// ```
pub struct CursorMut<'a, T> {
    slots: &'a mut [T],
    first: usize,
    len: usize,
    offset: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [T], first: usize, len: usize) -> Self {
        CursorMut {
            slots,
            first,
            len,
            offset: 0,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_end() {
            return None;
        }
        let slot = wrap_add(self.slots.len(), self.first, self.offset);
        Some(&mut self.slots[slot])
    }

    pub fn advance(&mut self) -> &mut Self {
        if !self.is_end() {
            self.offset += 1;
        }
        self
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_end(&self) -> bool {
        self.offset >= self.len
    }
}
