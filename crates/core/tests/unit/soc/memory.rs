//! # Memory Buffer Tests
//!
//! Bounds checking, little-endian word layout, and image placement.

use proptest::prelude::*;
use tinyvm_core::VmError;
use tinyvm_core::soc::Memory;

const SIZE: usize = 0x1000;

#[test]
fn test_new_memory_is_zeroed() {
    let mem = Memory::new(SIZE);
    assert_eq!(mem.len(), SIZE);
    assert!(!mem.is_empty());
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_empty_memory_rejects_everything() {
    let mem = Memory::new(0);
    assert!(mem.is_empty());
    assert!(matches!(mem.read_u8(0), Err(VmError::AddressOutOfRange { addr: 0, size: 0 })));
}

#[test]
fn test_last_word_is_accessible() {
    let mut mem = Memory::new(SIZE);
    mem.write_u32(SIZE as u32 - 4, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read_u32(SIZE as u32 - 4).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn test_straddling_read_names_first_bad_byte() {
    let mem = Memory::new(SIZE);
    let result = mem.read_u32(SIZE as u32 - 2);
    assert!(matches!(
        result,
        Err(VmError::AddressOutOfRange { addr, size }) if addr == SIZE as u64 && size == SIZE
    ));
}

#[test]
fn test_load_image_places_bytes() {
    let mut mem = Memory::new(SIZE);
    mem.load_image(0x10, &[1, 2, 3]).unwrap();
    assert_eq!(&mem.as_slice()[0x10..0x13], &[1, 2, 3]);
}

#[test]
fn test_load_image_too_large_writes_nothing() {
    let mut mem = Memory::new(SIZE);
    let image = vec![0xFF; 32];

    let result = mem.load_image(SIZE as u32 - 16, &image);

    assert!(matches!(result, Err(VmError::ImageTooLarge { len: 32, .. })));
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_word_at_address_100() {
    let mut mem = Memory::new(SIZE);
    mem.write_u32(100, 0x1234_5678).unwrap();
    assert_eq!(mem.read_u32(100).unwrap(), 0x1234_5678);
    assert_eq!(mem.read_u8(100).unwrap(), 0x78);
    assert_eq!(mem.read_u8(103).unwrap(), 0x12);
}

proptest! {
    #[test]
    fn prop_word_round_trip(addr in 0u32..=(SIZE as u32 - 4), val: u32) {
        let mut mem = Memory::new(SIZE);
        mem.write_u32(addr, val).unwrap();
        prop_assert_eq!(mem.read_u32(addr).unwrap(), val);
    }

    #[test]
    fn prop_word_is_little_endian(addr in 0u32..=(SIZE as u32 - 4), val: u32) {
        let mut mem = Memory::new(SIZE);
        mem.write_u32(addr, val).unwrap();
        for (i, expected) in val.to_le_bytes().into_iter().enumerate() {
            prop_assert_eq!(mem.read_u8(addr + i as u32).unwrap(), expected);
        }
    }

    #[test]
    fn prop_out_of_range_bytes_fail(addr in (SIZE as u32)..) {
        let mut mem = Memory::new(SIZE);
        prop_assert!(mem.read_u8(addr).is_err_and(|e| e.is_out_of_range()));
        prop_assert!(mem.write_u8(addr, 1).is_err());
        prop_assert!(mem.as_slice().iter().all(|&b| b == 0));
    }
}
