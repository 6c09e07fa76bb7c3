use std::fmt::Debug;

/// Copies keep the whole backing array and the raw `first`/`last` indices.
#[derive(Copy, Clone, Debug, Default)]
pub struct Verbatim;

/// Copies keep the capacity but move the live elements to the start of the buffer,
/// the same way growth re-linearizes them.
#[derive(Copy, Clone, Debug, Default)]
pub struct Compact;

/// Selects how [`Deque`](crate::Deque) lays out a copy of itself.
pub trait CopyBehavior: seal_copy_behavior::Sealed + Debug + Copy + Default {}
pub(crate) mod seal_copy_behavior {
    pub trait Sealed {
        const RELINEARIZE: bool;
    }
}

impl CopyBehavior for Verbatim {}
impl CopyBehavior for Compact {}

impl seal_copy_behavior::Sealed for Verbatim {
    const RELINEARIZE: bool = false;
}
impl seal_copy_behavior::Sealed for Compact {
    const RELINEARIZE: bool = true;
}
