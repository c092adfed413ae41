//! Common transport utilities for virtual HID device implementations
//!
//! This crate provides the device-to-host transport seam shared by
//! virtual HID devices: descriptor registration, report transmission,
//! and a recording mock for tests.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod transport;

pub use transport::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Descriptor rejected by transport: {0}")]
    DescriptorRejected(String),

    #[error("Descriptor already registered")]
    DescriptorAlreadyRegistered,

    #[error("Failed to send report: {0}")]
    SendError(String),

    #[error("Transport disconnected")]
    Disconnected,
}

pub type TransportResult<T> = Result<T, TransportError>;
