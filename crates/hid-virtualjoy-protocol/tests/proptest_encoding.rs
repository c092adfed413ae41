//! Property-based tests for the joystick report byte layout.
//!
//! Uses proptest with 500 cases to verify that every field of
//! [`JoystickState`] lands on the byte positions published in
//! `layout::offsets`, and nowhere else.

use hid_virtualjoy_protocol::{Axis, JoystickState, offsets};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bytes 0-3 encode the button mask little-endian.
    #[test]
    fn prop_buttons_encode_little_endian(buttons in 0u32..=u32::MAX) {
        let mut state = JoystickState::new();
        state.buttons = buttons;
        let report = state.encode();
        prop_assert_eq!(
            &report[offsets::BUTTONS..offsets::BUTTONS + offsets::BUTTONS_LEN],
            &buttons.to_le_bytes(),
            "buttons must occupy bytes 0-3 little-endian"
        );
    }

    /// Byte 4 is throttle, byte 5 is rudder, verbatim.
    #[test]
    fn prop_simulation_controls_bytes(throttle in 0u8..=255, rudder in 0u8..=255) {
        let mut state = JoystickState::new();
        state.set_axis(Axis::Throttle, throttle);
        state.set_axis(Axis::Rudder, rudder);
        let report = state.encode();
        prop_assert_eq!(report[offsets::THROTTLE], throttle);
        prop_assert_eq!(report[offsets::RUDDER], rudder);
    }

    /// Byte 6 packs hat1 into the low nibble and hat2 into the high
    /// nibble, each masked to 4 bits.
    #[test]
    fn prop_hat_packing(hat1 in 0u8..=255, hat2 in 0u8..=255) {
        let mut state = JoystickState::new();
        state.set_axis(Axis::Hat1, hat1);
        state.set_axis(Axis::Hat2, hat2);
        let report = state.encode();
        prop_assert_eq!(
            report[offsets::HATS],
            ((hat2 & 0x0F) << 4) | (hat1 & 0x0F)
        );
    }

    /// Bytes 7-12 carry the pointer axes in X, Y, Z, Rx, Ry, Rz order.
    #[test]
    fn prop_pointer_axis_bytes(values in proptest::array::uniform6(0u8..=255)) {
        let mut state = JoystickState::new();
        let order = [Axis::X, Axis::Y, Axis::Z, Axis::RotX, Axis::RotY, Axis::RotZ];
        for (axis, value) in order.iter().zip(values.iter()) {
            state.set_axis(*axis, *value);
        }
        let report = state.encode();
        prop_assert_eq!(&report[offsets::X..=offsets::ROT_Z], &values[..]);
    }

    /// Setting one axis changes at most one byte of the report.
    #[test]
    fn prop_set_axis_changes_at_most_one_byte(
        axis in proptest::sample::select(&Axis::ALL[..]),
        value in 0u8..=255,
    ) {
        let baseline = JoystickState::new().encode();
        let mut state = JoystickState::new();
        state.set_axis(axis, value);
        let report = state.encode();

        let changed = baseline
            .iter()
            .zip(report.iter())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(changed <= 1, "one axis write flipped {changed} bytes");
    }

    /// Encoding is a pure function of state.
    #[test]
    fn prop_encoding_deterministic(
        buttons in 0u32..=u32::MAX,
        axes in proptest::array::uniform8(0u8..=255),
        hats in proptest::array::uniform2(0u8..=15),
    ) {
        let mut state = JoystickState::new();
        state.buttons = buttons;
        let order = [
            Axis::X, Axis::Y, Axis::Z, Axis::RotX,
            Axis::RotY, Axis::RotZ, Axis::Throttle, Axis::Rudder,
        ];
        for (axis, value) in order.iter().zip(axes.iter()) {
            state.set_axis(*axis, *value);
        }
        state.set_axis(Axis::Hat1, hats[0]);
        state.set_axis(Axis::Hat2, hats[1]);

        prop_assert_eq!(state.encode(), state.encode());
    }

    /// Unknown raw axis IDs are rejected typed, never mapped.
    #[test]
    fn prop_invalid_axis_ids_rejected(id in 10u8..=255) {
        prop_assert!(Axis::try_from(id).is_err());
    }
}
