//! Memory-mapped registers prelude.

#[doc(no_inline)]
pub use crate::reg::cap::{
    All, Config, Configurable, Grants, Nothing, Read, ReadConfig, ReadWrite, Readable, Write,
    WriteConfig, Writable,
};
#[doc(no_inline)]
pub use crate::reg::{
    FieldValue, FieldValues, RReg, RRegField, ReadableValues, Reg, RegField, RegFieldSet,
    RegSchema, RwReg, RwRegAtomic, WReg, WRegField, WRegFieldAtomic, WritableValues,
};
