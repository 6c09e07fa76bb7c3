//! A [`Deque`] is a double-ended queue stored in a circular buffer.
//! Pushing and popping at either end is constant time, and a full buffer doubles its capacity,
//! so a sequence of pushes costs amortized O(1) per element.

use crate::cursor::{Cursor, CursorMut};
use crate::error::{Access, DequeError};
use crate::settings::{CopyBehavior, Verbatim};
use std::alloc::Layout;
use std::fmt::Debug;

/// A double-ended queue backed by a growable circular buffer.
///
/// The live elements occupy `len` slots starting at physical slot `first` and wrapping around the end
/// of the buffer. When the buffer is full the next push doubles the capacity and moves the elements,
/// in logical order, to the start of the new buffer.
///
/// # Examples
/// ```
/// use circdeque::Deque;
/// let mut deque = Deque::new();
/// deque.push_back(1).unwrap();
/// deque.push_back(2).unwrap();
/// deque.push_front(0).unwrap();
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque.front(), Ok(&0));
/// assert_eq!(deque.back(), Ok(&2));
/// ```
///
/// # Aliasing
/// Any push may reallocate the buffer. References returned by [`front`](Deque::front) and
/// [`back`](Deque::back), and every [`Cursor`], borrow the deque, so they cannot be held across a push.
///
/// # Copy Behavior
/// The default ([`Verbatim`]) copies the entire backing array together with the raw `first`/`last`
/// indices, so a copy has the same physical layout as its source.
/// [`Compact`](crate::settings::Compact) instead moves the live elements of the copy to slot 0,
/// which is the layout growth produces.
pub struct Deque<T, C = Verbatim>
where
    C: CopyBehavior,
{
    pub(crate) slots: Box<[T]>,
    pub(crate) first: usize,
    pub(crate) last: usize,
    pub(crate) len: usize,
    pub(crate) copy_behavior: C,
}

impl<T> Deque<T, Verbatim> {
    /// Creates a new, empty `Deque` without allocating.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let deque: Deque<i32> = Deque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Deque {
            slots: Box::default(),
            first: 0,
            last: 0,
            len: 0,
            copy_behavior: Verbatim,
        }
    }
}

impl<T: Default> Deque<T, Verbatim> {
    /// Creates an empty `Deque` with `cap` default-constructed slots.
    /// A capacity of 0 is identical to [`Deque::new`].
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if the allocator refuses the buffer.
    ///
    /// # Panics
    /// Panics if `cap` slots of `T` would exceed `isize::MAX` bytes.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let deque: Deque<u8> = Deque::with_capacity(4).unwrap();
    /// assert_eq!(deque.capacity(), 4);
    /// assert_eq!(deque.len(), 0);
    /// ```
    pub fn with_capacity(cap: usize) -> Result<Self, DequeError> {
        assert!(Layout::array::<T>(cap).is_ok(), "capacity overflow");
        if cap == 0 {
            return Ok(Deque::new());
        }
        Ok(Deque {
            slots: allocate(cap)?,
            first: 0,
            last: 0,
            len: 0,
            copy_behavior: Verbatim,
        })
    }
}

impl<T, C> Deque<T, C>
where
    C: CopyBehavior,
{
    /// Changes the copy behavior of the `Deque` without touching its buffer.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::{Compact, Deque};
    /// let mut deque = Deque::new().with_copy_behavior::<Compact>();
    /// deque.push_back(1).unwrap();
    /// assert_eq!(deque.clone().front(), Ok(&1));
    /// ```
    pub fn with_copy_behavior<D>(self) -> Deque<T, D>
    where
        D: CopyBehavior,
    {
        Deque {
            slots: self.slots,
            first: self.first,
            last: self.last,
            len: self.len,
            copy_behavior: D::default(),
        }
    }

    /// Returns the number of elements in the `Deque`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `Deque` holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Forgets every element while keeping the buffer.
    /// Old values stay in their slots until they are overwritten or the `Deque` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(1).unwrap();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.len = 0;
        self.first = 0;
        self.last = 0;
    }

    /// Returns the element at the front.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the `Deque` is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::Front,
            });
        }
        Ok(&self.slots[self.first])
    }

    /// Mutable counterpart of [`front`](Deque::front).
    pub fn front_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::Front,
            });
        }
        Ok(&mut self.slots[self.first])
    }

    /// Returns the element at the back.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the `Deque` is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::Back,
            });
        }
        Ok(&self.slots[self.back_slot()])
    }

    /// Mutable counterpart of [`back`](Deque::back).
    pub fn back_mut(&mut self) -> Result<&mut T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::Back,
            });
        }
        let slot = self.back_slot();
        Ok(&mut self.slots[slot])
    }

    /// The whole backing buffer in physical order, including slots that hold no live element.
    /// Only equal to the logical order when the elements do not wrap and start at slot 0.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque: Deque<i32> = Deque::with_capacity(3).unwrap();
    /// deque.push_front(1).unwrap();
    /// assert_eq!(deque.as_slots(), &[0, 0, 1]);
    /// ```
    pub fn as_slots(&self) -> &[T] {
        &self.slots
    }

    /// A cursor positioned at the front element. Walks the elements in logical order.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(2).unwrap();
    /// deque.push_front(1).unwrap();
    /// assert_eq!(deque.cursor().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.slots, self.first, self.len, 0)
    }

    /// A cursor positioned one past the back element.
    pub fn end_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.slots, self.first, self.len, self.len)
    }

    /// A cursor positioned at logical `offset`; `offset == len()` is the end position.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidArgument`] if `offset > len()`.
    pub fn cursor_at(&self, offset: usize) -> Result<Cursor<'_, T>, DequeError> {
        if offset > self.len {
            return Err(DequeError::InvalidArgument {
                offset,
                len: self.len,
            });
        }
        Ok(Cursor::new(&self.slots, self.first, self.len, offset))
    }

    /// A cursor at the front element that hands out mutable references.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(&mut self.slots, self.first, self.len)
    }

    /// Iterates over the elements from front to back.
    pub fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    fn back_slot(&self) -> usize {
        wrap_sub(self.capacity(), self.last, 1)
    }
}

impl<T, C> Deque<T, C>
where
    T: Default,
    C: CopyBehavior,
{
    // Doubles the capacity (an empty buffer becomes a single slot) and moves the
    // elements in logical order to slots 0..len of the new buffer.
    // The old buffer is released only after the new one is in place.
    fn grow(&mut self) -> Result<(), DequeError> {
        let old_cap = self.capacity();
        let new_cap = grown_capacity(old_cap)?;
        let mut slots = allocate::<T>(new_cap)?;
        for (offset, slot) in slots.iter_mut().take(self.len).enumerate() {
            let idx = wrap_add(old_cap, self.first, offset);
            *slot = std::mem::take(&mut self.slots[idx]);
        }
        tracing::trace!(old_cap, new_cap, len = self.len, "growing deque");
        self.slots = slots;
        self.first = 0;
        self.last = self.len;
        Ok(())
    }

    fn reserve_one(&mut self) -> Result<(), DequeError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        Ok(())
    }

    /// Pushes an element to the back of the `Deque`, growing the buffer if it is full.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if growing fails; the `Deque` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(42).unwrap();
    /// deque.push_back(10).unwrap();
    /// assert_eq!(deque.back(), Ok(&10));
    /// ```
    pub fn push_back(&mut self, item: T) -> Result<(), DequeError> {
        self.reserve_one()?;
        self.slots[self.last] = item;
        self.last = wrap_add(self.capacity(), self.last, 1);
        self.len += 1;
        Ok(())
    }

    /// Pushes an element to the front of the `Deque`, growing the buffer if it is full.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if growing fails; the `Deque` is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_front(42).unwrap();
    /// deque.push_front(10).unwrap();
    /// assert_eq!(deque.front(), Ok(&10));
    /// ```
    pub fn push_front(&mut self, item: T) -> Result<(), DequeError> {
        self.reserve_one()?;
        self.first = wrap_sub(self.capacity(), self.first, 1);
        self.slots[self.first] = item;
        self.len += 1;
        Ok(())
    }

    /// Removes the front element and returns it. The vacated slot is left holding `T::default()`.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(42).unwrap();
    /// assert_eq!(deque.pop_front(), Ok(42));
    /// assert!(deque.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::PopFront,
            });
        }
        let item = std::mem::take(&mut self.slots[self.first]);
        self.first = wrap_add(self.capacity(), self.first, 1);
        self.len -= 1;
        Ok(item)
    }

    /// Removes the back element and returns it. The vacated slot is left holding `T::default()`.
    ///
    /// # Errors
    /// Returns [`DequeError::EmptyContainer`] if the `Deque` is empty.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.push_back(42).unwrap();
    /// deque.push_back(10).unwrap();
    /// assert_eq!(deque.pop_back(), Ok(10));
    /// assert_eq!(deque.pop_back(), Ok(42));
    /// assert!(deque.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer {
                access: Access::PopBack,
            });
        }
        self.last = self.back_slot();
        self.len -= 1;
        Ok(std::mem::take(&mut self.slots[self.last]))
    }

    /// Pushes every item of `iter` to the back, stopping at the first failure.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut deque = Deque::new();
    /// deque.try_extend([1, 2, 3]).unwrap();
    /// assert_eq!(deque.len(), 3);
    /// assert_eq!(deque.capacity(), 4);
    /// ```
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), DequeError>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            self.push_back(item)?;
        }
        Ok(())
    }
}

impl<T, C> Deque<T, C>
where
    T: Clone + Default,
    C: CopyBehavior,
{
    /// Deep-copies the `Deque`, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if the copy's buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, DequeError> {
        let cap = self.capacity();
        let mut slots = Vec::new();
        slots.try_reserve_exact(cap).map_err(|_err| {
            tracing::debug!(requested = cap, "copy allocation refused");
            DequeError::Allocation { requested: cap }
        })?;
        Ok(self.copy_into(slots))
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    /// The new buffer is allocated before the old one is released, so on failure `self` is untouched.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if the copy's buffer cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// # use circdeque::Deque;
    /// let mut source = Deque::new();
    /// source.push_back(1).unwrap();
    /// let mut target = Deque::new();
    /// target.push_back(9).unwrap();
    /// target.try_clone_from(&source).unwrap();
    /// assert_eq!(target, source);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), DequeError> {
        *self = source.try_clone()?;
        Ok(())
    }

    fn copy_into(&self, mut slots: Vec<T>) -> Self {
        let cap = self.capacity();
        tracing::trace!(cap, len = self.len, relinearize = C::RELINEARIZE, "copying deque");
        if C::RELINEARIZE {
            slots.extend(self.iter().cloned());
            slots.resize_with(cap, T::default);
            Deque {
                slots: slots.into_boxed_slice(),
                first: 0,
                last: wrap_add(cap, self.len, 0),
                len: self.len,
                copy_behavior: self.copy_behavior,
            }
        } else {
            slots.extend_from_slice(&self.slots);
            Deque {
                slots: slots.into_boxed_slice(),
                first: self.first,
                last: self.last,
                len: self.len,
                copy_behavior: self.copy_behavior,
            }
        }
    }
}

impl<T, C> Clone for Deque<T, C>
where
    T: Clone + Default,
    C: CopyBehavior,
{
    fn clone(&self) -> Self {
        self.copy_into(Vec::with_capacity(self.capacity()))
    }
}

impl<T, C> Default for Deque<T, C>
where
    C: CopyBehavior,
{
    fn default() -> Self {
        Deque {
            slots: Box::default(),
            first: 0,
            last: 0,
            len: 0,
            copy_behavior: C::default(),
        }
    }
}

impl<T: Debug, C> Debug for Deque<T, C>
where
    C: CopyBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Compares logical contents only; capacity and physical layout are ignored.
impl<T, C> PartialEq for Deque<T, C>
where
    T: PartialEq,
    C: CopyBehavior,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for Deque<T, C>
where
    T: Eq,
    C: CopyBehavior,
{
}

impl<'a, T, C> IntoIterator for &'a Deque<T, C>
where
    C: CopyBehavior,
{
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for Deque<T, C>
where
    T: serde::Serialize,
    C: CopyBehavior,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'src, T, C> serde::Deserialize<'src> for Deque<T, C>
where
    T: serde::Deserialize<'src> + Default,
    C: CopyBehavior,
{
    fn deserialize<D: serde::Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut deque = Deque::default();
        deque
            .try_extend(items)
            .map_err(<D::Error as serde::de::Error>::custom)?;
        Ok(deque)
    }
}

/// Allocates `cap` default-constructed slots, reporting allocator refusal as an error.
fn allocate<T: Default>(cap: usize) -> Result<Box<[T]>, DequeError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(cap).map_err(|_err| {
        tracing::debug!(requested = cap, "buffer allocation refused");
        DequeError::Allocation { requested: cap }
    })?;
    slots.resize_with(cap, T::default);
    Ok(slots.into_boxed_slice())
}

fn grown_capacity(cap: usize) -> Result<usize, DequeError> {
    if cap == 0 {
        return Ok(1);
    }
    cap.checked_mul(2).ok_or(DequeError::Allocation {
        requested: usize::MAX,
    })
}

pub(crate) fn wrap_add(cap: usize, idx: usize, offset: usize) -> usize {
    if cap == 0 {
        0
    } else {
        (idx + offset) % cap
    }
}

fn wrap_sub(cap: usize, idx: usize, offset: usize) -> usize {
    if cap == 0 {
        0
    } else {
        (idx + cap - offset % cap) % cap
    }
}

#[cfg(test)]
mod deque_tests {
    use super::*;
    use crate::settings::Compact;

    fn drain_front<T: Default, C: CopyBehavior>(deque: &mut Deque<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = deque.pop_front() {
            out.push(item);
        }
        out
    }

    fn drain_back<T: Default, C: CopyBehavior>(deque: &mut Deque<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = deque.pop_back() {
            out.push(item);
        }
        out
    }

    // a wrapped, full deque of capacity 4: slots [2, 3, 0, 1], first = 2, last = 2
    fn wrapped() -> Deque<i32> {
        let mut deque = Deque::with_capacity(4).unwrap();
        deque.push_back(2).unwrap();
        deque.push_back(3).unwrap();
        deque.push_front(1).unwrap();
        deque.push_front(0).unwrap();
        deque
    }

    #[test]
    pub fn push_pop_scenario() {
        let mut deque = Deque::new();
        deque.push_back(1).unwrap();
        deque.push_back(2).unwrap();
        deque.push_front(0).unwrap();
        assert_eq!(deque.len(), 3);
        assert_eq!(deque.front(), Ok(&0));
        assert_eq!(deque.back(), Ok(&2));

        deque.pop_front().unwrap();
        assert_eq!(deque.front(), Ok(&1));
        deque.pop_back().unwrap();
        assert_eq!(deque.back(), Ok(&1));
        assert_eq!(deque.len(), 1);
    }

    #[test]
    pub fn zero_capacity_is_default() {
        let deque: Deque<i32> = Deque::with_capacity(0).unwrap();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 0);
        assert!(deque.as_slots().is_empty());
        assert_eq!(deque, Deque::new());
    }

    #[test]
    pub fn sized_constructor_default_slots() {
        let deque: Deque<String> = Deque::with_capacity(3).unwrap();
        assert_eq!(deque.capacity(), 3);
        assert!(deque.is_empty());
        assert!(deque.as_slots().iter().all(String::is_empty));
    }

    #[test]
    pub fn single_slot_growth() {
        let mut deque = Deque::with_capacity(1).unwrap();
        deque.push_back('a').unwrap();
        assert_eq!(deque.capacity(), 1);
        deque.push_back('b').unwrap();
        assert_eq!(deque.capacity(), 2);
        assert_eq!(deque.front(), Ok(&'a'));
        assert_eq!(deque.back(), Ok(&'b'));
    }

    #[test]
    pub fn first_push_allocates_one_slot() {
        let mut deque = Deque::new();
        deque.push_front(5).unwrap();
        assert_eq!(deque.capacity(), 1);
        assert_eq!(deque.front(), Ok(&5));
        assert_eq!(deque.back(), Ok(&5));
    }

    #[test]
    pub fn push_back_order() {
        let mut deque = Deque::new();
        for i in 0..10 {
            deque.push_back(i).unwrap();
            assert_eq!(deque.len(), i as usize + 1);
            assert_eq!(deque.front(), Ok(&0));
            assert_eq!(deque.back(), Ok(&i));
        }
        assert_eq!(drain_front(&mut deque), (0..10).collect::<Vec<_>>());
    }

    #[test]
    pub fn push_front_order() {
        let mut deque = Deque::new();
        for i in 0..10 {
            deque.push_front(i).unwrap();
            assert_eq!(deque.front(), Ok(&i));
            assert_eq!(deque.back(), Ok(&0));
        }
        assert_eq!(drain_back(&mut deque), (0..10).collect::<Vec<_>>());
    }

    #[test]
    pub fn interleaved_symmetry() {
        let mut from_front = Deque::new();
        for i in 0..17 {
            if i % 3 == 0 {
                from_front.push_front(i).unwrap();
            } else {
                from_front.push_back(i).unwrap();
            }
        }
        let mut from_back = from_front.clone();
        let mut forward = drain_front(&mut from_front);
        let backward = drain_back(&mut from_back);
        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    pub fn growth_doubles_and_keeps_order() {
        let mut deque = Deque::new();
        let mut caps = Vec::new();
        for i in 0..33 {
            if i % 2 == 0 {
                deque.push_back(i).unwrap();
            } else {
                deque.push_front(i).unwrap();
            }
            if caps.last() != Some(&deque.capacity()) {
                caps.push(deque.capacity());
            }
        }
        assert_eq!(caps, vec![1, 2, 4, 8, 16, 32, 64]);
        assert_eq!(deque.len(), 33);

        let mut expected: Vec<i32> = (0..33).filter(|i| i % 2 == 1).rev().collect();
        expected.extend((0..33).filter(|i| i % 2 == 0));
        assert_eq!(drain_front(&mut deque), expected);
    }

    #[test]
    pub fn growth_relinearizes_wrapped_buffer() {
        let mut deque = wrapped();
        assert_eq!(deque.as_slots(), &[2, 3, 0, 1]);
        assert_eq!((deque.first, deque.last), (2, 2));

        deque.push_back(4).unwrap();
        assert_eq!(deque.capacity(), 8);
        assert_eq!(deque.first, 0);
        assert_eq!(deque.last, 5);
        assert_eq!(&deque.as_slots()[..5], &[0, 1, 2, 3, 4]);
    }

    #[test]
    pub fn pop_back_wraps_to_end() {
        let mut deque = Deque::with_capacity(3).unwrap();
        deque.push_back(1).unwrap();
        deque.push_back(2).unwrap();
        deque.push_back(3).unwrap();
        assert_eq!(deque.last, 0);
        assert_eq!(deque.back(), Ok(&3));
        assert_eq!(deque.pop_back(), Ok(3));
        assert_eq!(deque.last, 2);
        assert_eq!(deque.back(), Ok(&2));
        deque.push_back(7).unwrap();
        assert_eq!(deque.capacity(), 3);
        assert_eq!(drain_front(&mut deque), vec![1, 2, 7]);
    }

    #[test]
    pub fn empty_access_fails() {
        let mut deque: Deque<i32> = Deque::new();
        assert_eq!(
            deque.pop_front(),
            Err(DequeError::EmptyContainer {
                access: Access::PopFront
            })
        );
        assert_eq!(
            deque.pop_back(),
            Err(DequeError::EmptyContainer {
                access: Access::PopBack
            })
        );
        assert_eq!(
            deque.front(),
            Err(DequeError::EmptyContainer {
                access: Access::Front
            })
        );
        assert_eq!(
            deque.back(),
            Err(DequeError::EmptyContainer {
                access: Access::Back
            })
        );
        assert!(deque.front_mut().is_err());
        assert!(deque.back_mut().is_err());

        deque.push_back(1).unwrap();
        deque.pop_back().unwrap();
        assert!(deque.front().is_err());
        assert!(deque.pop_front().is_err());
    }

    #[test]
    pub fn clear_keeps_buffer_and_stale_values() {
        let mut deque = wrapped();
        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.capacity(), 4);
        assert_eq!((deque.first, deque.last), (0, 0));
        assert_eq!(deque.as_slots(), &[2, 3, 0, 1]);

        deque.push_back(9).unwrap();
        assert_eq!(deque.as_slots(), &[9, 3, 0, 1]);
        assert_eq!(deque.front(), Ok(&9));
    }

    #[test]
    pub fn front_and_back_mut() {
        let mut deque = wrapped();
        *deque.front_mut().unwrap() = 10;
        *deque.back_mut().unwrap() = 30;
        assert_eq!(drain_front(&mut deque), vec![10, 1, 2, 30]);
    }

    #[test]
    pub fn verbatim_copy_keeps_layout() {
        let source = wrapped();
        let copy = source.clone();
        assert_eq!(copy.as_slots(), source.as_slots());
        assert_eq!((copy.first, copy.last), (source.first, source.last));
        assert_eq!(copy.capacity(), source.capacity());
        assert_eq!(copy, source);
    }

    #[test]
    pub fn compact_copy_relinearizes() {
        let source = wrapped().with_copy_behavior::<Compact>();
        let copy = source.try_clone().unwrap();
        assert_eq!(copy.as_slots(), &[0, 1, 2, 3]);
        assert_eq!((copy.first, copy.last), (0, 0));
        assert_eq!(copy.capacity(), 4);
        assert_eq!(copy, source);

        let mut partial = Deque::with_capacity(4).unwrap().with_copy_behavior::<Compact>();
        partial.push_front(1).unwrap();
        partial.push_front(0).unwrap();
        let copy = partial.clone();
        assert_eq!(copy.as_slots(), &[0, 1, 0, 0]);
        assert_eq!((copy.first, copy.last), (0, 2));
    }

    #[test]
    pub fn copies_are_independent() {
        let mut original = wrapped();
        let mut copy = original.clone();
        copy.push_back(4).unwrap();
        *copy.front_mut().unwrap() = -1;
        original.pop_back().unwrap();

        assert_eq!(drain_front(&mut original), vec![0, 1, 2]);
        assert_eq!(drain_front(&mut copy), vec![-1, 1, 2, 3, 4]);
    }

    #[test]
    pub fn clone_from_replaces_target() {
        let source = wrapped();
        let mut target = Deque::with_capacity(16).unwrap();
        target.push_back(99).unwrap();
        target.try_clone_from(&source).unwrap();
        assert_eq!(target.capacity(), 4);
        assert_eq!(target, source);

        let empty: Deque<i32> = Deque::new();
        target.try_clone_from(&empty).unwrap();
        assert!(target.is_empty());
        assert_eq!(target.capacity(), 0);
    }

    #[test]
    pub fn clone_of_empty_is_unallocated() {
        let empty: Deque<String> = Deque::new();
        let copy = empty.try_clone().unwrap();
        assert_eq!(copy.capacity(), 0);
        assert!(copy.is_empty());
    }

    #[test]
    pub fn equality_ignores_layout() {
        let mut a = Deque::new();
        a.try_extend([0, 1, 2, 3]).unwrap();
        let b = wrapped();
        assert_eq!(a, b);
        a.push_back(4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    pub fn debug_uses_logical_order() {
        assert_eq!(format!("{:?}", wrapped()), "[0, 1, 2, 3]");
        assert_eq!(format!("{:?}", Deque::<u8>::new()), "[]");
    }

    #[test]
    pub fn zero_sized_elements() {
        let mut deque = Deque::new();
        for _ in 0..5 {
            deque.push_back(()).unwrap();
        }
        assert_eq!(deque.len(), 5);
        assert_eq!(deque.capacity(), 8);
        assert_eq!(deque.pop_front(), Ok(()));
        assert_eq!(deque.len(), 4);
    }

    #[test]
    pub fn grown_capacity_overflow() {
        assert_eq!(grown_capacity(0), Ok(1));
        assert_eq!(grown_capacity(3), Ok(6));
        assert_eq!(
            grown_capacity(usize::MAX / 2 + 1),
            Err(DequeError::Allocation {
                requested: usize::MAX
            })
        );
    }

    #[test]
    pub fn allocation_refusal_is_an_error() {
        assert_eq!(
            allocate::<u64>(usize::MAX / 8),
            Err(DequeError::Allocation {
                requested: usize::MAX / 8
            })
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    pub fn oversized_capacity_panics() {
        let _ = Deque::<u64>::with_capacity(usize::MAX);
    }

    #[test]
    pub fn wrap_helpers() {
        assert_eq!(wrap_add(4, 3, 1), 0);
        assert_eq!(wrap_add(4, 1, 2), 3);
        assert_eq!(wrap_sub(4, 0, 1), 3);
        assert_eq!(wrap_sub(4, 2, 1), 1);
        assert_eq!(wrap_add(0, 5, 1), 0);
        assert_eq!(wrap_sub(0, 0, 1), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    pub fn serde_logical_order() {
        let deque = wrapped();
        let json = serde_json::to_string(&deque).unwrap();
        assert_eq!(json, "[0,1,2,3]");
        let back: Deque<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deque);
        assert_eq!(back.as_slots(), &[0, 1, 2, 3]);
    }
}
