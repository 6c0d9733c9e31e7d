use core::cell::UnsafeCell;

/// Static memory cell standing in for a hardware register.
///
/// Registers declared with `sim` in [`reg!`](crate::reg!) point here instead
/// of their hardware address, so the access paths can be exercised on a host
/// machine. The cell is accessed with the same volatile and atomic operations
/// as a real register.
#[repr(transparent)]
pub struct SimWord<T>(UnsafeCell<T>);

// SAFETY: concurrent accesses go through the register access paths, which use
// volatile or atomic operations on a word-sized, word-aligned cell.
unsafe impl<T: Send> Sync for SimWord<T> {}

impl<T> SimWord<T> {
    /// Creates a cell holding the reset value `reset`.
    pub const fn new(reset: T) -> Self {
        Self(UnsafeCell::new(reset))
    }

    /// Returns a pointer to the word.
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.0.get()
    }
}
