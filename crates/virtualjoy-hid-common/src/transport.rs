//! HID transport traits
//!
//! A virtual device talks to the host through two calls: it registers
//! its report descriptor once, then pushes input reports. Everything
//! else about the USB stack (enumeration, interface composition,
//! polling) lives behind this seam.

use crate::{TransportError, TransportResult};

/// Device-side view of a USB HID transport.
///
/// Implementations are expected to accept exactly one descriptor
/// registration before the first report is sent.
pub trait HidTransport: Send {
    /// Register the device's report descriptor with the transport's
    /// descriptor table. Must be called before [`send_report`].
    ///
    /// # Errors
    ///
    /// Returns an error when the transport rejects the descriptor or a
    /// descriptor was already registered.
    ///
    /// [`send_report`]: HidTransport::send_report
    fn register_descriptor(&mut self, descriptor: &[u8]) -> TransportResult<()>;

    /// Transmit one input report under `report_id`.
    ///
    /// Returns the number of payload bytes accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when the transport is disconnected or refuses
    /// the transfer.
    fn send_report(&mut self, report_id: u8, payload: &[u8]) -> TransportResult<usize>;
}

pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recording transport for tests.
    ///
    /// Clones share state, so tests can keep a handle for inspection
    /// while the device owns the transport it was constructed with.
    #[derive(Clone)]
    pub struct MockTransport {
        descriptor: Arc<Mutex<Option<Vec<u8>>>>,
        sent: Arc<Mutex<Vec<(u8, Vec<u8>)>>>,
        connected: Arc<Mutex<bool>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                descriptor: Arc::new(Mutex::new(None)),
                sent: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
            }
        }

        /// The descriptor registered so far, if any.
        pub fn registered_descriptor(&self) -> Option<Vec<u8>> {
            let descriptor = self.descriptor.lock().unwrap_or_else(|e| e.into_inner());
            descriptor.clone()
        }

        /// Every report sent so far, as `(report_id, payload)` pairs in
        /// transmission order.
        pub fn sent_reports(&self) -> Vec<(u8, Vec<u8>)> {
            let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.clone()
        }

        /// Payload of the most recently sent report.
        pub fn last_report(&self) -> Option<Vec<u8>> {
            let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.last().map(|(_, payload)| payload.clone())
        }

        pub fn sent_count(&self) -> usize {
            let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.len()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    impl HidTransport for MockTransport {
        fn register_descriptor(&mut self, descriptor: &[u8]) -> TransportResult<()> {
            if !self.is_connected() {
                return Err(TransportError::Disconnected);
            }

            let mut slot = self.descriptor.lock().unwrap_or_else(|e| e.into_inner());
            if slot.is_some() {
                return Err(TransportError::DescriptorAlreadyRegistered);
            }
            *slot = Some(descriptor.to_vec());
            Ok(())
        }

        fn send_report(&mut self, report_id: u8, payload: &[u8]) -> TransportResult<usize> {
            if !self.is_connected() {
                return Err(TransportError::Disconnected);
            }

            let descriptor = self.descriptor.lock().unwrap_or_else(|e| e.into_inner());
            if descriptor.is_none() {
                return Err(TransportError::SendError(
                    "No descriptor registered".to_string(),
                ));
            }
            drop(descriptor);

            let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
            sent.push((report_id, payload.to_vec()));
            Ok(payload.len())
        }
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }
}
