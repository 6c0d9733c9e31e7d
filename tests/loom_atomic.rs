#![cfg(loom)]

use drone_capreg::reg::{AtomicFieldUpdater, AtomicWord, RegRaw};
use loom::sync::atomic::AtomicU32;
use loom::sync::Arc;
use std::sync::atomic::Ordering;

struct LoomWord(AtomicU32);

impl AtomicWord for LoomWord {
    type Raw = u32;

    fn load(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    fn compare_exchange_weak(&self, current: u32, new: u32) -> Result<u32, u32> {
        self.0.compare_exchange_weak(current, new, Ordering::Relaxed, Ordering::Relaxed)
    }
}

#[test]
fn loom_disjoint_fields() {
    loom::model(|| {
        let word = Arc::new(LoomWord(AtomicU32::new(0x4444_4444)));
        let low = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || AtomicFieldUpdater::new(&*word).update(u32::mask(0, 4), 0, 0b0011)
        });
        let high = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || AtomicFieldUpdater::new(&*word).update(u32::mask(28, 4), 28, 0b1000)
        });
        low.join().unwrap();
        high.join().unwrap();
        assert_eq!(word.load(), 0x8444_4443);
    });
}

#[test]
fn loom_same_field() {
    loom::model(|| {
        let word = Arc::new(LoomWord(AtomicU32::new(0xFFFF_0000)));
        let first = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || AtomicFieldUpdater::new(&*word).update(u32::mask(4, 4), 4, 0x1)
        });
        AtomicFieldUpdater::new(&*word).update(u32::mask(4, 4), 4, 0x2);
        first.join().unwrap();
        let result = word.load();
        assert_eq!(result & !u32::mask(4, 4), 0xFFFF_0000);
        assert!(result == 0xFFFF_0010 || result == 0xFFFF_0020);
    });
}
