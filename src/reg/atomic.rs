//! Lock-free masked updates of a shared register word.
//!
//! The word may be modified concurrently by a preempting context, usually an
//! interrupt handler configuring another bit range of the same register. The
//! update reads the word, computes the candidate, and stores it only if the
//! word was not touched in between, repeating otherwise. On ARMv7-M a weak
//! compare-exchange compiles to the `ldrex`/`strex` pair, so the retry is
//! triggered by the exclusive monitor.

use crate::reg::raw::RegRaw;
use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

/// A memory word supporting exclusive load and conditional store.
pub trait AtomicWord {
    /// Raw word type.
    type Raw: RegRaw;

    /// Loads the current word.
    fn load(&self) -> Self::Raw;

    /// Stores `new` if the word still equals `current`.
    ///
    /// Returns the previous word on success and the observed word on failure.
    /// May fail spuriously.
    fn compare_exchange_weak(
        &self,
        current: Self::Raw,
        new: Self::Raw,
    ) -> Result<Self::Raw, Self::Raw>;
}

macro_rules! atomic_word {
    ($int:ty, $atomic:ty) => {
        impl AtomicWord for $atomic {
            type Raw = $int;

            #[inline]
            fn load(&self) -> $int {
                <$atomic>::load(self, Ordering::Relaxed)
            }

            #[inline]
            fn compare_exchange_weak(&self, current: $int, new: $int) -> Result<$int, $int> {
                <$atomic>::compare_exchange_weak(
                    self,
                    current,
                    new,
                    Ordering::Relaxed,
                    Ordering::Relaxed,
                )
            }
        }
    };
}

atomic_word!(u32, AtomicU32);
atomic_word!(u16, AtomicU16);

/// Compare-and-retry updater of a bit range within one word.
pub struct AtomicFieldUpdater<'a, A: AtomicWord + ?Sized> {
    word: &'a A,
}

impl<'a, A: AtomicWord + ?Sized> AtomicFieldUpdater<'a, A> {
    /// Creates an updater for `word`.
    #[inline]
    pub fn new(word: &'a A) -> Self {
        Self { word }
    }

    /// Replaces the bits selected by `mask` with `value << offset`.
    ///
    /// `mask` is already shifted to `offset`. `value` must fit in the mask.
    /// Repeats until the conditional store succeeds, with no bound on the
    /// number of attempts.
    #[inline]
    pub fn update(&self, mask: A::Raw, offset: u32, value: A::Raw) {
        let mut current = self.word.load();
        loop {
            let candidate = current & !mask | value << offset;
            match self.word.compare_exchange_weak(current, candidate) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }
}
