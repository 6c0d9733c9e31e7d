//! Capability-checked memory-mapped registers for microcontrollers.
//!
//! Registers, their bit fields, named field values and GPIO pins are
//! zero-sized tokens. Each token carries a [capability](reg::cap) stating
//! whether it may be read, written or used for configuration, and every
//! operation is available only on tokens granted the matching capability.
//! Violations are compile errors, and checked accesses compile down to plain
//! volatile loads and stores.
//!
//! # Modules
//!
//! * [`reg`] - registers, fields, field values and field sets, declared with
//!   the [`reg!`] macro;
//! * [`reg::atomic`] - interrupt-safe field updates over an exclusive monitor;
//! * [`gpio`] - ports and pins built on the registers.
//!
//! # Host Testing
//!
//! Registers declared with a `sim` reset value are backed by a static word
//! instead of their hardware address, so the same access paths run under
//! `cargo test` on a workstation.
//!
//! # Features
//!
//! * `defmt` - implements `defmt::Format` for values, sets and pins.

#![warn(missing_docs)]
#![cfg_attr(not(test), no_std)]

pub mod gpio;
pub mod reg;

#[doc(hidden)]
pub mod reexport;

#[doc(no_inline)]
pub use typenum;
