//! Joystick state and report encoding

use serde::{Deserialize, Serialize};

use crate::layout::REPORT_LEN;
use crate::{MAX_BUTTONS, ProtocolError, ProtocolResult};

/// Rest value for the bidirectional pointer X/Y axes.
pub const AXIS_CENTER: u8 = 0x80;

/// Rest value for every other axis and both hats.
pub const AXIS_ZERO: u8 = 0x00;

/// Closed set of axis identifiers accepted by the mutation API.
///
/// Raw IDs (for callers holding wire-level identifiers) match the
/// discriminants: X=0 through Hat2=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
    RotX = 3,
    RotY = 4,
    RotZ = 5,
    Throttle = 6,
    Rudder = 7,
    Hat1 = 8,
    Hat2 = 9,
}

impl Axis {
    pub const ALL: [Axis; 10] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::RotX,
        Axis::RotY,
        Axis::RotZ,
        Axis::Throttle,
        Axis::Rudder,
        Axis::Hat1,
        Axis::Hat2,
    ];

    /// The value this axis reports when no displacement is present:
    /// center for pointer X/Y, zero for everything else.
    pub fn rest_value(self) -> u8 {
        match self {
            Axis::X | Axis::Y => AXIS_CENTER,
            _ => AXIS_ZERO,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Axis {
    type Error = ProtocolError;

    fn try_from(id: u8) -> ProtocolResult<Self> {
        match id {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            3 => Ok(Axis::RotX),
            4 => Ok(Axis::RotY),
            5 => Ok(Axis::RotZ),
            6 => Ok(Axis::Throttle),
            7 => Ok(Axis::Rudder),
            8 => Ok(Axis::Hat1),
            9 => Ok(Axis::Hat2),
            _ => Err(ProtocolError::InvalidAxisId(id)),
        }
    }
}

/// Complete input state of the virtual joystick.
///
/// Every encoded report byte is a pure function of this struct; there
/// is no carried-over encoding state. `Default` is the rest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoystickState {
    /// Bit `i` holds button `i`, for `i` in `0..32`.
    pub buttons: u32,
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub rot_x: u8,
    pub rot_y: u8,
    pub rot_z: u8,
    pub throttle: u8,
    pub rudder: u8,
    /// 4-bit direction, masked at encode time.
    pub hat1: u8,
    pub hat2: u8,
}

impl JoystickState {
    pub fn new() -> Self {
        Self {
            buttons: 0,
            x: AXIS_CENTER,
            y: AXIS_CENTER,
            z: AXIS_ZERO,
            rot_x: AXIS_ZERO,
            rot_y: AXIS_ZERO,
            rot_z: AXIS_ZERO,
            throttle: AXIS_ZERO,
            rudder: AXIS_ZERO,
            hat1: AXIS_ZERO,
            hat2: AXIS_ZERO,
        }
    }

    /// Restore every field to its rest value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Set button `index` (0-31) pressed.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidButtonIndex`] for `index >= 32`;
    /// the state is untouched.
    pub fn button_down(&mut self, index: usize) -> ProtocolResult<()> {
        if index >= MAX_BUTTONS {
            return Err(ProtocolError::InvalidButtonIndex(index));
        }
        self.buttons |= 1 << index;
        Ok(())
    }

    /// Set button `index` (0-31) released.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidButtonIndex`] for `index >= 32`;
    /// the state is untouched.
    pub fn button_up(&mut self, index: usize) -> ProtocolResult<()> {
        if index >= MAX_BUTTONS {
            return Err(ProtocolError::InvalidButtonIndex(index));
        }
        self.buttons &= !(1 << index);
        Ok(())
    }

    pub fn button(&self, index: usize) -> bool {
        if index >= MAX_BUTTONS {
            return false;
        }
        (self.buttons & (1 << index)) != 0
    }

    pub fn set_axis(&mut self, axis: Axis, value: u8) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
            Axis::RotX => self.rot_x = value,
            Axis::RotY => self.rot_y = value,
            Axis::RotZ => self.rot_z = value,
            Axis::Throttle => self.throttle = value,
            Axis::Rudder => self.rudder = value,
            Axis::Hat1 => self.hat1 = value,
            Axis::Hat2 => self.hat2 = value,
        }
    }

    pub fn reset_axis(&mut self, axis: Axis) {
        self.set_axis(axis, axis.rest_value());
    }

    pub fn axis(&self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::RotX => self.rot_x,
            Axis::RotY => self.rot_y,
            Axis::RotZ => self.rot_z,
            Axis::Throttle => self.throttle,
            Axis::Rudder => self.rudder,
            Axis::Hat1 => self.hat1,
            Axis::Hat2 => self.hat2,
        }
    }

    /// Encode the state into the canonical 13-byte report.
    ///
    /// Layout per [`crate::layout::offsets`]: button mask little-endian
    /// at 0-3, throttle at 4, rudder at 5, packed hats at 6 (hat1 in
    /// the low nibble, hat2 in the high nibble), pointer axes at 7-12.
    pub fn encode(&self) -> [u8; REPORT_LEN] {
        let [b0, b1, b2, b3] = self.buttons.to_le_bytes();
        [
            b0,
            b1,
            b2,
            b3,
            self.throttle,
            self.rudder,
            ((self.hat2 & 0x0F) << 4) | (self.hat1 & 0x0F),
            self.x,
            self.y,
            self.z,
            self.rot_x,
            self.rot_y,
            self.rot_z,
        ]
    }
}

impl Default for JoystickState {
    fn default() -> Self {
        Self::new()
    }
}
