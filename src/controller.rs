//! Keyboard controller abstraction.

use bytes::Bytes;

use crate::error::EncodeError;
use crate::Config;

/// HID keyboard lighting controller.
pub(crate) trait HidController {
    /// HID vendor ID.
    fn vendor_id(&self) -> u16;

    /// HID product ID.
    fn product_id(&self) -> u16;

    /// Convert lighting config to the ordered controller-specific feature reports.
    fn config_bytes(&self, config: &Config) -> Result<Vec<Bytes>, EncodeError>;
}
