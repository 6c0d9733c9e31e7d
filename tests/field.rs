use drone_capreg::reg::prelude::*;

drone_capreg::reg! {
    pub mod TEST_FIELDS;
    0xDEAD_BE00 u32 ReadWrite sim 0;
    BIT0 { 0 1 ReadWrite }
    PAIR { 1 2 ReadWrite }
    BYTE { 8 8 ReadWrite }
    TOP { 31 1 ReadWrite }
}

drone_capreg::reg! {
    pub mod TEST_WIDE_U32;
    0xDEAD_BE04 u32 ReadWrite sim 0x1234_5678;
    ALL { 0 32 ReadWrite }
}

drone_capreg::reg! {
    pub mod TEST_WIDE_U16;
    0xDEAD_BE08 u16 ReadWrite sim 0x1234;
    ALL { 0 16 ReadWrite }
}

drone_capreg::reg! {
    pub mod TEST_CRH;
    0xDEAD_BE0C u32 ReadWrite sim 0xA000_0000;
    CNF_MODE15 { 28 4 ReadWrite; OUT_PP_50MHZ = 0b0011 }
}

drone_capreg::reg! {
    pub mod TEST_MIXED;
    0xDEAD_BE10 u32 ReadWrite sim 0x0000_00F0;
    STATUS { 4 4 Read }
    CONTROL { 0 4 Write }
}

drone_capreg::reg! {
    pub mod TEST_ATOMIC_FIELD;
    0xDEAD_BE14 u16 ReadWrite sim 0xFFFF;
    MID { 4 8 ReadWrite }
}

#[test]
fn masks() {
    assert_eq!(test_fields::Bit0::mask(), 0x0000_0001);
    assert_eq!(test_fields::Pair::mask(), 0x0000_0006);
    assert_eq!(test_fields::Byte::mask(), 0x0000_FF00);
    assert_eq!(test_fields::Top::mask(), 0x8000_0000);
    assert_eq!(test_wide_u32::All::mask(), 0xFFFF_FFFF);
    assert_eq!(test_wide_u16::All::mask(), 0xFFFF);
}

#[test]
fn round_trip() {
    test_fields::Bit0.set(1);
    test_fields::Pair.set(0b10);
    test_fields::Byte.set(0xA5);
    test_fields::Top.set(1);
    assert_eq!(test_fields::Bit0.get(), 1);
    assert_eq!(test_fields::Pair.get(), 0b10);
    assert_eq!(test_fields::Byte.get(), 0xA5);
    assert_eq!(test_fields::Top.get(), 1);
    assert_eq!(test_fields::Reg.get(), 0x8000_A505);
    test_fields::Pair.set(0b01);
    assert_eq!(test_fields::Reg.get(), 0x8000_A503);
    test_fields::Top.set(0);
    assert_eq!(test_fields::Reg.get(), 0x0000_A503);
}

#[test]
fn full_width() {
    assert_eq!(test_wide_u32::All.get(), 0x1234_5678);
    test_wide_u32::All.set(0xFFFF_FFFF);
    assert_eq!(test_wide_u32::All.get(), 0xFFFF_FFFF);
    assert_eq!(test_wide_u16::All.get(), 0x1234);
    test_wide_u16::All.set(0xBEEF);
    assert_eq!(test_wide_u16::Reg.get(), 0xBEEF);
}

#[test]
fn nibble_preserves_other_bits() {
    test_crh::CnfMode15.set_atomic(0b0011);
    assert_eq!(test_crh::Reg.get(), 0x3000_0000);
    test_crh::Reg.set(0x0FFF_FFFF);
    test_crh::cnf_mode15::OUT_PP_50MHZ.set();
    assert_eq!(test_crh::Reg.get(), 0x3FFF_FFFF);
    assert!(test_crh::cnf_mode15::OUT_PP_50MHZ.is_set());
}

#[test]
fn field_capabilities_are_independent() {
    assert_eq!(test_mixed::Status.get(), 0xF);
    test_mixed::Control.set(0x9);
    assert_eq!(test_mixed::Reg.get(), 0x0000_00F9);
}

#[test]
fn atomic_u16() {
    test_atomic_field::Mid.set_atomic(0);
    assert_eq!(test_atomic_field::Reg.get(), 0xF00F);
    test_atomic_field::Reg.modify_atomic(0x000F, 0, 0x3);
    assert_eq!(test_atomic_field::Reg.get(), 0xF003);
}
