use core::cell::{Cell, RefCell};
use drone_capreg::reg::{AtomicFieldUpdater, AtomicWord, RegRaw};
use std::collections::VecDeque;

/// Word whose conditional stores are preceded by scripted handler writes.
struct Preempted {
    word: Cell<u32>,
    isr: RefCell<VecDeque<Option<u32>>>,
    attempts: Cell<usize>,
}

impl Preempted {
    fn new(word: u32, isr: impl IntoIterator<Item = Option<u32>>) -> Self {
        Self {
            word: Cell::new(word),
            isr: RefCell::new(isr.into_iter().collect()),
            attempts: Cell::new(0),
        }
    }
}

impl AtomicWord for Preempted {
    type Raw = u32;

    fn load(&self) -> u32 {
        self.word.get()
    }

    fn compare_exchange_weak(&self, current: u32, new: u32) -> Result<u32, u32> {
        self.attempts.set(self.attempts.get() + 1);
        if let Some(isr) = self.isr.borrow_mut().pop_front().flatten() {
            self.word.set(isr);
        }
        let observed = self.word.get();
        if observed == current {
            self.word.set(new);
            Ok(observed)
        } else {
            Err(observed)
        }
    }
}

#[test]
fn uncontended() {
    let word = Preempted::new(0xA000_0000, []);
    AtomicFieldUpdater::new(&word).update(u32::mask(28, 4), 28, 0b0011);
    assert_eq!(word.attempts.get(), 1);
    assert_eq!(word.word.get(), 0x3000_0000);
}

#[test]
fn preempted_outside_mask() {
    let word = Preempted::new(0x4444_4444, [Some(0x4444_4484)]);
    AtomicFieldUpdater::new(&word).update(u32::mask(0, 4), 0, 0b0011);
    assert_eq!(word.attempts.get(), 2);
    assert_eq!(word.word.get(), 0x4444_4483);
}

#[test]
fn preempted_inside_mask() {
    let word = Preempted::new(0x4444_4444, [Some(0x4444_4441)]);
    AtomicFieldUpdater::new(&word).update(u32::mask(0, 4), 0, 0b0011);
    assert_eq!(word.attempts.get(), 2);
    assert_eq!(word.word.get(), 0x4444_4443);
}

#[test]
fn preempted_repeatedly() {
    let word = Preempted::new(0, [Some(0x10), Some(0x30), None, Some(0x70)]);
    AtomicFieldUpdater::new(&word).update(u32::mask(0, 4), 0, 0xF);
    assert_eq!(word.attempts.get(), 3);
    assert_eq!(word.word.get(), 0x3F);
}
