use drone_capreg::reg::prelude::*;

drone_capreg::reg! {
    /// Port configuration register low.
    pub mod GPIOA_CRL;
    0x4001_0800 u32 ReadWrite sim 0x4444_4444;
    CRL0 { 0 4 ReadWrite; IN_FLOAT = 0b0100, OUT_PP_50MHZ = 0b0011 }
    CRL1 { 4 4 ReadWrite; IN_FLOAT = 0b0100, OUT_PP_2MHZ = 0b0010 }
    CRL7 { 28 4 ReadWrite; IN_ANALOG = 0b0000, IN_FLOAT = 0b0100 }
}

drone_capreg::reg! {
    /// Port configuration register high.
    pub mod GPIOA_CRH;
    0x4001_0804 u32 ReadWrite sim 0x4444_4444;
    CRH0 { 0 4 ReadWrite; OUT_PP_50MHZ = 0b0011 }
    CRH7 { 28 4 ReadWrite; OUT_PP_2MHZ = 0b0010 }
}

drone_capreg::reg! {
    pub mod TEST_STATUS;
    0xDEAD_BE20 u32 Read sim 0x0000_0105;
    READY { 0 1 Read; NO = 0, YES = 1 }
    MODE { 1 2 Read; IDLE = 0b00, RUN = 0b10 }
    ERROR { 8 1 Read; NO = 0, YES = 1 }
}

drone_capreg::reg! {
    pub mod TEST_MIXED_SET;
    0xDEAD_BE24 u32 ReadWrite sim 0x0000_0001;
    READY { 0 1 Read; NO = 0, YES = 1 }
    ENABLE { 1 1 ReadWrite; OFF = 0, ON = 1 }
    MODE { 4 2 ReadWrite; SLOW = 0b01, FAST = 0b10 }
}

#[test]
fn value_bits() {
    assert_eq!(gpioa_crl::crl7::IN_FLOAT.value(), 0b0100);
    assert_eq!(gpioa_crl::crl7::IN_FLOAT.mask(), 0xF000_0000);
    assert_eq!(gpioa_crl::crl7::IN_FLOAT.bits(), 0x4000_0000);
    assert_ne!(gpioa_crl::crl0::IN_FLOAT, gpioa_crl::crl0::OUT_PP_50MHZ);
}

#[test]
fn set_preserves_other_fields() {
    let set = gpioa_crl::Set::new((
        gpioa_crl::crl0::OUT_PP_50MHZ,
        gpioa_crl::crl1::OUT_PP_2MHZ,
        gpioa_crl::crl7::IN_ANALOG,
    ));
    assert_eq!(set.mask(), 0xF000_00FF);
    assert_eq!(set.bits(), 0x0000_0023);
    set.set();
    assert_eq!(gpioa_crl::Reg.get(), 0x0444_4423);
    assert!(set.is_set());
    gpioa_crl::crl1::IN_FLOAT.set();
    assert!(!set.is_set());
    assert!(gpioa_crl::crl0::OUT_PP_50MHZ.is_set());
    assert!(gpioa_crl::crl1::IN_FLOAT.is_set());
    assert_eq!(gpioa_crl::Reg.get(), 0x0444_4443);
}

#[test]
fn nested_sets() {
    let set = gpioa_crh::Set::new(((gpioa_crh::crh0::OUT_PP_50MHZ,), gpioa_crh::crh7::OUT_PP_2MHZ));
    set.set();
    assert_eq!(gpioa_crh::Reg.get(), 0x2444_4443);
    assert_eq!(set.values().1, gpioa_crh::crh7::OUT_PP_2MHZ);
}

#[test]
fn is_set_on_read_only() {
    assert!(test_status::ready::YES.is_set());
    assert!(test_status::mode::RUN.is_set());
    assert!(test_status::error::YES.is_set());
    assert!(test_status::Set::new((test_status::ready::YES, test_status::mode::RUN)).is_set());
    assert!(!test_status::Set::new((test_status::ready::YES, test_status::mode::IDLE)).is_set());
    assert!(test_status::error::NO.is_set_in(0x0000_0005));
}

#[test]
fn member_field_access() {
    let config = test_mixed_set::Set::new((test_mixed_set::enable::ON, test_mixed_set::mode::FAST));
    config.set();
    assert_eq!(test_mixed_set::Reg.get(), 0x0000_0023);
    let running = test_mixed_set::Set::new((test_mixed_set::ready::YES, config.values()));
    assert!(running.is_set());
    assert_eq!(running.mask(), 0x0000_0033);
    test_mixed_set::mode::SLOW.set();
    assert!(!running.is_set());
    assert!(test_mixed_set::ready::YES.is_set());
}
