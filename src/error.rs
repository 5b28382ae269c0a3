//! Error types.

use hidapi::HidError;
use thiserror::Error;

use crate::color::Color;
use crate::lighting::Brightness;

/// Rejected command line token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid color '{0}' (expected a color name, [r;g;b] or 0xRRGGBB)")]
    Color(String),

    #[error("invalid brightness '{0}' (expected high, medium, low, off or rgb)")]
    Brightness(String),

    #[error("invalid mode '{0}' (expected normal, gaming, breathe, demo or wave)")]
    Mode(String),

    #[error("invalid brightness or mode '{0}'")]
    BrightnessOrMode(String),

    #[error("invalid color or mode '{0}'")]
    ColorOrMode(String),

    #[error("too many colors: {0} supplied, but only {max} zones exist", max = crate::lighting::Region::ALL.len())]
    TooManyColors(usize),

    #[error("no colors or mode supplied")]
    MissingArgument,
}

/// Inconsistent command parameters that must never reach the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("custom color {color} cannot be combined with brightness '{brightness}'")]
    CustomColorWithLevel { color: Color, brightness: Brightness },

    #[error("invalid region code {0}")]
    InvalidRegion(u8),
}

/// HID device failure.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("unable to access HID: {0}")]
    Init(#[source] HidError),

    #[error("no compatible keyboard found")]
    NotFound,

    #[error("unable to open device: {0} (root permissions required)")]
    Open(#[source] HidError),

    #[error("unable to send feature report: {0}")]
    Transport(#[source] HidError),

    #[error("feature report not written ({written} of {expected} bytes)")]
    NothingWritten { written: usize, expected: usize },

    #[error("device session already closed")]
    Closed,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Device(#[from] DeviceError),
}
