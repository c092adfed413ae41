//! Declarative report layout.
//!
//! The named constants in [`fields`] are the single description of the
//! wire format; `REPORT_FIELDS` lists them in wire order. The encoder
//! offsets in [`offsets`] and the report descriptor in
//! [`crate::descriptor`] both follow them; tests assert they cannot
//! drift apart.

/// Report ID under which every input report is transmitted.
pub const REPORT_ID: u8 = 0x04;

/// Total encoded report length in bytes, excluding the report ID.
pub const REPORT_LEN: usize = 13;

/// One field group of the input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportField {
    pub name: &'static str,
    /// Width of a single element in bits.
    pub bits: usize,
    /// Number of consecutive elements of this width.
    pub count: usize,
}

impl ReportField {
    pub const fn total_bits(&self) -> usize {
        self.bits * self.count
    }
}

/// The field groups of the report, addressable by name.
pub mod fields {
    use super::ReportField;

    pub const BUTTONS: ReportField = ReportField {
        name: "buttons",
        bits: 1,
        count: 32,
    };
    pub const THROTTLE: ReportField = ReportField {
        name: "throttle",
        bits: 8,
        count: 1,
    };
    pub const RUDDER: ReportField = ReportField {
        name: "rudder",
        bits: 8,
        count: 1,
    };
    pub const HATS: ReportField = ReportField {
        name: "hats",
        bits: 4,
        count: 2,
    };
    pub const POINTER: ReportField = ReportField {
        name: "pointer",
        bits: 8,
        count: 6,
    };
}

/// Wire order of the report: button bitmask, simulation controls,
/// packed hats, pointer axes.
pub const REPORT_FIELDS: &[ReportField] = &[
    fields::BUTTONS,
    fields::THROTTLE,
    fields::RUDDER,
    fields::HATS,
    fields::POINTER,
];

/// Sum of all field widths in bits.
pub const fn total_bits() -> usize {
    fields::BUTTONS.total_bits()
        + fields::THROTTLE.total_bits()
        + fields::RUDDER.total_bits()
        + fields::HATS.total_bits()
        + fields::POINTER.total_bits()
}

// The layout must describe exactly the bytes the encoder emits.
const _: () = assert!(total_bits() == REPORT_LEN * 8);

/// Byte offsets into the encoded report, derived from the field order.
pub mod offsets {
    pub const BUTTONS: usize = 0;
    pub const BUTTONS_LEN: usize = 4;
    pub const THROTTLE: usize = BUTTONS + BUTTONS_LEN;
    pub const RUDDER: usize = THROTTLE + 1;
    pub const HATS: usize = RUDDER + 1;
    pub const X: usize = HATS + 1;
    pub const Y: usize = X + 1;
    pub const Z: usize = Y + 1;
    pub const ROT_X: usize = Z + 1;
    pub const ROT_Y: usize = ROT_X + 1;
    pub const ROT_Z: usize = ROT_Y + 1;
}
