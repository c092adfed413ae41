//! HID protocol implementation for the VirtualJoy game controller
//!
//! This crate owns the wire contract between the virtual joystick and a
//! USB host: the declarative report layout, the in-memory state, the
//! bit-exact 13-byte encoder, and the report descriptor generated from
//! the same layout. Transport and device lifecycle live elsewhere.
//!
//! ## Report shape
//! - 32 one-bit buttons
//! - throttle and rudder (Simulation Controls page)
//! - two 4-bit hat switches packed into one byte
//! - six 8-bit pointer axes (X, Y, Z, Rx, Ry, Rz)

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod descriptor;
pub mod layout;
pub mod state;

pub use descriptor::*;
pub use layout::*;
pub use state::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid button index: {0}")]
    InvalidButtonIndex(usize),

    #[error("Invalid axis identifier: {0}")]
    InvalidAxisId(u8),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

pub const MAX_BUTTONS: usize = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MAX_BUTTONS, 32);
        assert_eq!(layout::REPORT_LEN, 13);
    }

    #[test]
    fn test_error_display() {
        let err = ProtocolError::InvalidButtonIndex(40);
        assert_eq!(format!("{}", err), "Invalid button index: 40");

        let err = ProtocolError::InvalidAxisId(99);
        assert_eq!(format!("{}", err), "Invalid axis identifier: 99");
    }
}
