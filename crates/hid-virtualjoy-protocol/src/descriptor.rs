//! HID report descriptor generation
//!
//! The descriptor is built from the named constants in
//! [`crate::layout::fields`], so the schema announced to the host and
//! the bytes the encoder emits share one source of truth instead of
//! two hand-maintained copies.
//!
//! Item prefix bytes follow the HID 1.11 short-item encoding; the
//! collection structure matches a conventional joystick application
//! collection (buttons, simulation controls, hats, pointer).

use crate::layout::{REPORT_ID, fields};

/// Short-item prefix bytes (HID 1.11, section 6.2.2.2).
mod item {
    pub const USAGE_PAGE: u8 = 0x05;
    pub const USAGE: u8 = 0x09;
    pub const USAGE_MINIMUM: u8 = 0x19;
    pub const USAGE_MAXIMUM: u8 = 0x29;
    pub const LOGICAL_MINIMUM: u8 = 0x15;
    pub const LOGICAL_MAXIMUM: u8 = 0x25;
    pub const LOGICAL_MAXIMUM_U16: u8 = 0x26;
    pub const PHYSICAL_MINIMUM: u8 = 0x35;
    pub const PHYSICAL_MAXIMUM_U16: u8 = 0x46;
    pub const UNIT_EXPONENT: u8 = 0x55;
    pub const UNIT: u8 = 0x65;
    pub const REPORT_SIZE: u8 = 0x75;
    pub const REPORT_ID: u8 = 0x85;
    pub const REPORT_COUNT: u8 = 0x95;
    pub const INPUT: u8 = 0x81;
    pub const COLLECTION: u8 = 0xA1;
    pub const END_COLLECTION: u8 = 0xC0;
}

mod page {
    pub const GENERIC_DESKTOP: u8 = 0x01;
    pub const SIMULATION_CONTROLS: u8 = 0x02;
    pub const BUTTON: u8 = 0x09;
}

mod usage {
    pub const POINTER: u8 = 0x01;
    pub const JOYSTICK: u8 = 0x04;
    pub const HAT_SWITCH: u8 = 0x39;
    pub const STEERING: u8 = 0xBA;
    pub const THROTTLE: u8 = 0xBB;

    /// Generic Desktop axis usages X, Y, Z, Rx, Ry, Rz.
    pub const AXES: [u8; 6] = [0x30, 0x31, 0x32, 0x33, 0x34, 0x35];
}

const COLLECTION_APPLICATION: u8 = 0x01;
const COLLECTION_PHYSICAL: u8 = 0x00;
const INPUT_DATA_VAR_ABS: u8 = 0x02;

/// Unit: English rotation, angular position (degrees).
const UNIT_DEGREES: u8 = 0x14;

/// Build the report descriptor for the 13-byte joystick report.
///
/// The result is deterministic and should be registered with the
/// transport exactly once, before the first report is sent.
pub fn report_descriptor() -> Vec<u8> {
    let buttons = fields::BUTTONS;
    let throttle = fields::THROTTLE;
    let rudder = fields::RUDDER;
    let hats = fields::HATS;
    let pointer = fields::POINTER;

    let mut d = Vec::with_capacity(128);

    d.extend_from_slice(&[item::USAGE_PAGE, page::GENERIC_DESKTOP]);
    d.extend_from_slice(&[item::USAGE, usage::JOYSTICK]);
    d.extend_from_slice(&[item::COLLECTION, COLLECTION_APPLICATION]);
    d.extend_from_slice(&[item::REPORT_ID, REPORT_ID]);

    // 32 one-bit buttons.
    d.extend_from_slice(&[item::USAGE_PAGE, page::BUTTON]);
    d.extend_from_slice(&[item::USAGE_MINIMUM, 0x01]);
    d.extend_from_slice(&[item::USAGE_MAXIMUM, buttons.count as u8]);
    d.extend_from_slice(&[item::LOGICAL_MINIMUM, 0x00]);
    d.extend_from_slice(&[item::LOGICAL_MAXIMUM, 0x01]);
    d.extend_from_slice(&[item::REPORT_SIZE, buttons.bits as u8]);
    d.extend_from_slice(&[item::REPORT_COUNT, buttons.count as u8]);
    d.extend_from_slice(&[item::UNIT_EXPONENT, 0x00]);
    d.extend_from_slice(&[item::UNIT, 0x00]);
    d.extend_from_slice(&[item::INPUT, INPUT_DATA_VAR_ABS]);

    // Throttle and steering, one byte each.
    d.extend_from_slice(&[item::USAGE_PAGE, page::SIMULATION_CONTROLS]);
    d.extend_from_slice(&[item::LOGICAL_MINIMUM, 0x00]);
    d.extend_from_slice(&[item::LOGICAL_MAXIMUM_U16, 0xFF, 0x00]);
    d.extend_from_slice(&[item::COLLECTION, COLLECTION_PHYSICAL]);
    d.extend_from_slice(&[item::USAGE, usage::THROTTLE]);
    d.extend_from_slice(&[item::USAGE, usage::STEERING]);
    d.extend_from_slice(&[item::REPORT_SIZE, throttle.bits as u8]);
    d.extend_from_slice(&[
        item::REPORT_COUNT,
        (throttle.count + rudder.count) as u8,
    ]);
    d.extend_from_slice(&[item::INPUT, INPUT_DATA_VAR_ABS]);
    d.push(item::END_COLLECTION);

    // Two 4-bit hat switches, 0-7 mapped onto 0-315 degrees.
    d.extend_from_slice(&[item::USAGE_PAGE, page::GENERIC_DESKTOP]);
    for _ in 0..hats.count {
        d.extend_from_slice(&[item::USAGE, usage::HAT_SWITCH]);
        d.extend_from_slice(&[item::LOGICAL_MINIMUM, 0x00]);
        d.extend_from_slice(&[item::LOGICAL_MAXIMUM, 0x07]);
        d.extend_from_slice(&[item::PHYSICAL_MINIMUM, 0x00]);
        d.extend_from_slice(&[item::PHYSICAL_MAXIMUM_U16, 0x3B, 0x01]);
        d.extend_from_slice(&[item::UNIT, UNIT_DEGREES]);
        d.extend_from_slice(&[item::REPORT_SIZE, hats.bits as u8]);
        d.extend_from_slice(&[item::REPORT_COUNT, 0x01]);
        d.extend_from_slice(&[item::INPUT, INPUT_DATA_VAR_ABS]);
    }

    // Six 8-bit pointer axes.
    d.extend_from_slice(&[item::LOGICAL_MINIMUM, 0x00]);
    d.extend_from_slice(&[item::LOGICAL_MAXIMUM_U16, 0xFF, 0x00]);
    d.extend_from_slice(&[item::REPORT_SIZE, pointer.bits as u8]);
    d.extend_from_slice(&[item::USAGE, usage::POINTER]);
    d.extend_from_slice(&[item::COLLECTION, COLLECTION_PHYSICAL]);
    for axis_usage in usage::AXES.iter().take(pointer.count) {
        d.extend_from_slice(&[item::USAGE, *axis_usage]);
    }
    d.extend_from_slice(&[item::REPORT_COUNT, pointer.count as u8]);
    d.extend_from_slice(&[item::INPUT, INPUT_DATA_VAR_ABS]);
    d.push(item::END_COLLECTION);

    d.push(item::END_COLLECTION);

    d
}
