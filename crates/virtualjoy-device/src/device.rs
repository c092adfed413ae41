//! Device object and mutation API

use tracing::{debug, trace, warn};

use hid_virtualjoy_protocol::{Axis, JoystickState, REPORT_ID, report_descriptor};
use virtualjoy_hid_common::HidTransport;

use crate::DeviceResult;

/// A virtual HID joystick bound to a transport.
///
/// Construction registers the report descriptor with the transport, so
/// the device is host-visible before the first report. The state is
/// exclusively owned; mutators take `&mut self`, making each
/// mutate-encode-transmit sequence a critical section by construction.
pub struct VirtualJoystick<T: HidTransport> {
    state: JoystickState,
    transport: T,
}

impl<T: HidTransport> VirtualJoystick<T> {
    /// Create the device and register its report descriptor.
    ///
    /// No report is sent yet; call [`begin`] to transmit the initial
    /// rest state.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport rejects the descriptor.
    ///
    /// [`begin`]: VirtualJoystick::begin
    pub fn new(mut transport: T) -> DeviceResult<Self> {
        let descriptor = report_descriptor();
        transport.register_descriptor(&descriptor)?;
        debug!(
            descriptor_len = descriptor.len(),
            report_id = REPORT_ID,
            "registered joystick report descriptor"
        );

        Ok(Self {
            state: JoystickState::new(),
            transport,
        })
    }

    /// Establish the rest state and transmit the first report.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport refuses the transfer.
    pub fn begin(&mut self) -> DeviceResult<()> {
        self.release_all()
    }

    /// Lifecycle placeholder for symmetry with [`begin`]; currently a
    /// no-op since the transport owns all teardown.
    ///
    /// [`begin`]: VirtualJoystick::begin
    pub fn end(&mut self) {}

    /// Press button `index` (0-31) and transmit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DeviceError::Protocol`] for `index >= 32` (no
    /// state change, nothing sent) or the transport's error.
    pub fn button_down(&mut self, index: usize) -> DeviceResult<()> {
        self.state.button_down(index)?;
        trace!(index, "button down");
        self.send()
    }

    /// Release button `index` (0-31) and transmit.
    ///
    /// # Errors
    ///
    /// Same as [`button_down`].
    ///
    /// [`button_down`]: VirtualJoystick::button_down
    pub fn button_up(&mut self, index: usize) -> DeviceResult<()> {
        self.state.button_up(index)?;
        trace!(index, "button up");
        self.send()
    }

    /// Press and immediately release button `index`, transmitting two
    /// reports back-to-back.
    ///
    /// # Errors
    ///
    /// The down phase's error surfaces first; if the down phase
    /// succeeds, the up phase's error surfaces.
    pub fn button_press(&mut self, index: usize) -> DeviceResult<()> {
        self.button_down(index)?;
        self.button_up(index)
    }

    /// Write `value` to `axis` and transmit.
    ///
    /// # Errors
    ///
    /// Returns the transport's error when the transfer fails.
    pub fn set_axis(&mut self, axis: Axis, value: u8) -> DeviceResult<()> {
        self.state.set_axis(axis, value);
        trace!(?axis, value, "axis set");
        self.send()
    }

    /// [`set_axis`] for callers holding a raw wire-level axis ID.
    ///
    /// # Errors
    ///
    /// An unknown ID yields [`crate::DeviceError::Protocol`] with no
    /// state mutation and no transmit.
    ///
    /// [`set_axis`]: VirtualJoystick::set_axis
    pub fn set_axis_raw(&mut self, axis_id: u8, value: u8) -> DeviceResult<()> {
        let axis = Axis::try_from(axis_id)?;
        self.set_axis(axis, value)
    }

    /// Restore `axis` to its rest value and transmit.
    ///
    /// # Errors
    ///
    /// Returns the transport's error when the transfer fails.
    pub fn reset_axis(&mut self, axis: Axis) -> DeviceResult<()> {
        self.set_axis(axis, axis.rest_value())
    }

    /// [`reset_axis`] for callers holding a raw wire-level axis ID.
    ///
    /// # Errors
    ///
    /// Same unknown-ID behavior as [`set_axis_raw`].
    ///
    /// [`reset_axis`]: VirtualJoystick::reset_axis
    /// [`set_axis_raw`]: VirtualJoystick::set_axis_raw
    pub fn reset_axis_raw(&mut self, axis_id: u8) -> DeviceResult<()> {
        let axis = Axis::try_from(axis_id)?;
        self.reset_axis(axis)
    }

    /// Reset every button, axis, and hat to rest values, then transmit
    /// once.
    ///
    /// # Errors
    ///
    /// Returns the transport's error when the transfer fails.
    pub fn release_all(&mut self) -> DeviceResult<()> {
        self.state.reset();
        debug!("released all controls");
        self.send()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &JoystickState {
        &self.state
    }

    fn send(&mut self) -> DeviceResult<()> {
        let report = self.state.encode();
        if let Err(err) = self.transport.send_report(REPORT_ID, &report) {
            warn!(%err, "report transmission failed");
            return Err(err.into());
        }
        Ok(())
    }
}
