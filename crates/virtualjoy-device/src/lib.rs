//! Virtual USB HID joystick device
//!
//! Owns one [`JoystickState`] and one transport. Every public mutation
//! re-encodes the full state and pushes it to the host immediately;
//! there is no batching, dirty-tracking, or background task. The
//! transport's status is propagated to the caller of every operation.
//!
//! ```
//! use virtualjoy_device::VirtualJoystick;
//! use virtualjoy_hid_common::mock::MockTransport;
//! use hid_virtualjoy_protocol::Axis;
//!
//! let transport = MockTransport::new();
//! let mut joystick = VirtualJoystick::new(transport.clone())?;
//! joystick.begin()?;
//! joystick.set_axis(Axis::Throttle, 0xC0)?;
//! joystick.button_press(3)?;
//! assert_eq!(transport.sent_count(), 4);
//! # Ok::<(), virtualjoy_device::DeviceError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device;

pub use device::*;

use hid_virtualjoy_protocol::ProtocolError;
use thiserror::Error;
use virtualjoy_hid_common::TransportError;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: DeviceError = ProtocolError::InvalidAxisId(99).into();
        assert!(matches!(
            err,
            DeviceError::Protocol(ProtocolError::InvalidAxisId(99))
        ));

        let err: DeviceError = TransportError::Disconnected.into();
        assert!(matches!(
            err,
            DeviceError::Transport(TransportError::Disconnected)
        ));
    }
}
