//! Unit tests for the single-pin read-modify-write helpers
//!
//! These helpers derive the written DATAO byte from the DATAI level
//! observed at call time, not from a software shadow of the last write.
//! The tests pin that behavior down for both looped-back output pins and
//! externally driven input pins.

use crate::common::{create_mock_bank, Operation};

const DATAI: u16 = 0x0000;
const DATAO: u16 = 0x0004;

#[test]
fn test_set_pin_changes_only_target_bit() {
    let (mut gpio, _interface) = create_mock_bank();

    gpio.set_direction(0xFF).unwrap();

    for pin in 0..8u8 {
        gpio.write(0xA0).unwrap();
        gpio.set_pin(pin).unwrap();
        assert_eq!(gpio.read().unwrap(), 0xA0 | (1 << pin));
    }
}

#[test]
fn test_clear_pin_changes_only_target_bit() {
    let (mut gpio, _interface) = create_mock_bank();

    gpio.set_direction(0xFF).unwrap();

    for pin in 0..8u8 {
        gpio.write(0xFF).unwrap();
        gpio.clear_pin(pin).unwrap();
        assert_eq!(gpio.read().unwrap(), 0xFF & !(1 << pin));
    }
}

#[test]
fn test_toggle_pin_flips_only_target_bit() {
    let (mut gpio, _interface) = create_mock_bank();

    gpio.set_direction(0xFF).unwrap();
    gpio.write(0x55).unwrap();

    gpio.toggle_pin(0).unwrap();
    assert_eq!(gpio.read().unwrap(), 0x54);

    gpio.toggle_pin(0).unwrap();
    assert_eq!(gpio.read().unwrap(), 0x55);

    gpio.toggle_pin(7).unwrap();
    assert_eq!(gpio.read().unwrap(), 0xD5);
}

#[test]
fn test_pin_helper_is_one_read_one_write() {
    let (mut gpio, interface) = create_mock_bank();

    gpio.set_direction(0xFF).unwrap();
    gpio.write(0x00).unwrap();
    interface.clear_operations();

    gpio.set_pin(3).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::ReadRegister {
                address: DATAI,
                value: 0x00,
            },
            Operation::WriteRegister {
                address: DATAO,
                value: 0x08,
            },
        ]
    );
}

#[test]
fn test_set_pin_folds_external_level_into_written_byte() {
    let (mut gpio, interface) = create_mock_bank();

    // Pin 0 is the only output; pin 7 is driven high externally
    gpio.set_direction(0x01).unwrap();
    interface.drive_lines(0x80);

    gpio.set_pin(0).unwrap();

    // The helper read the line state (0x80), set bit 0 and wrote the
    // result, so the external level of pin 7 now sits in DATAO too
    assert_eq!(interface.register(DATAO), 0x81);
    assert_eq!(gpio.read().unwrap(), 0x81);
}

#[test]
fn test_toggle_of_input_pin_follows_line_not_latch() {
    let (mut gpio, interface) = create_mock_bank();

    gpio.set_direction(0x00).unwrap();
    interface.drive_line(3, true);

    // Each toggle reads the externally held line, so DATAO does not
    // oscillate: the flipped line level is written out both times
    gpio.toggle_pin(3).unwrap();
    assert_eq!(interface.register(DATAO), 0x00);

    gpio.toggle_pin(3).unwrap();
    assert_eq!(interface.register(DATAO), 0x00);

    // On a looped-back output pin the same call does oscillate
    gpio.set_direction(0x08).unwrap();
    gpio.toggle_pin(3).unwrap();
    assert_eq!(interface.register(DATAO), 0x08);
    gpio.toggle_pin(3).unwrap();
    assert_eq!(interface.register(DATAO), 0x00);
}

#[test]
#[should_panic]
fn test_set_pin_rejects_out_of_range_pin() {
    let (mut gpio, _interface) = create_mock_bank();
    let _ = gpio.set_pin(8);
}
