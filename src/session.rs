//! Keyboard device session.

use bytes::Bytes;
use hidapi::{HidApi, HidDevice, HidError};
use log::{debug, error, trace};

use crate::controller::HidController;
use crate::error::DeviceError;

/// Sink for HID feature reports.
pub trait FeatureReport {
    /// Send one feature report, returning the number of bytes written.
    fn send_feature_report(&self, data: &[u8]) -> Result<usize, HidError>;
}

impl FeatureReport for HidDevice {
    fn send_feature_report(&self, data: &[u8]) -> Result<usize, HidError> {
        HidDevice::send_feature_report(self, data)?;
        Ok(data.len())
    }
}

/// Exclusive handle to the opened keyboard.
///
/// The device is released when the session is closed or dropped.
pub struct Session<D: FeatureReport = HidDevice> {
    device: Option<D>,
}

impl<D: FeatureReport> Session<D> {
    pub fn new(device: D) -> Self {
        Self { device: Some(device) }
    }

    /// Write a single feature report.
    pub fn send(&mut self, packet: &[u8]) -> Result<usize, DeviceError> {
        let device = self.device.as_ref().ok_or(DeviceError::Closed)?;

        trace!("Sending feature report {:02x?}", packet);

        let written = device.send_feature_report(packet).map_err(DeviceError::Transport)?;
        if written == 0 {
            return Err(DeviceError::NothingWritten { written, expected: packet.len() });
        }

        Ok(written)
    }

    /// Write all packets in order.
    ///
    /// The first failure aborts the remaining packets. Packets sent before it stay applied.
    pub fn apply(&mut self, packets: &[Bytes]) -> Result<(), DeviceError> {
        for (i, packet) in packets.iter().enumerate() {
            if let Err(err) = self.send(packet) {
                error!("Aborting after {} of {} packets: {}", i, packets.len(), err);
                return Err(err);
            }
        }

        Ok(())
    }

    /// Release the device handle.
    pub fn close(&mut self) {
        if self.device.take().is_some() {
            debug!("Closing keyboard session");
        }
    }
}

impl<D: FeatureReport> Drop for Session<D> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Open the keyboard handled by `controller`.
pub fn open_device(api: &HidApi, controller: &dyn HidController) -> Result<Session, DeviceError> {
    let (vendor_id, product_id) = (controller.vendor_id(), controller.product_id());

    let devices = api.device_list().map(|info| (info.vendor_id(), info.product_id()));
    find_device(devices, vendor_id, product_id)?;

    let device = api.open(vendor_id, product_id).map_err(DeviceError::Open)?;
    debug!("Opened keyboard {:04x}:{:04x}", vendor_id, product_id);

    Ok(Session::new(device))
}

/// Look for a device ID in a list of `(vendor_id, product_id)` pairs.
fn find_device<I>(mut devices: I, vendor_id: u16, product_id: u16) -> Result<(), DeviceError>
where
    I: Iterator<Item = (u16, u16)>,
{
    if devices.any(|ids| ids == (vendor_id, product_id)) {
        return Ok(());
    }

    debug!("No HID device {:04x}:{:04x}", vendor_id, product_id);
    Err(DeviceError::NotFound)
}

/// Check whether the keyboard can be opened.
pub fn keyboard_present(api: &HidApi, controller: &dyn HidController) -> bool {
    match open_device(api, controller) {
        Ok(mut session) => {
            session.close();
            true
        },
        Err(err) => {
            debug!("Keyboard not available: {}", err);
            false
        },
    }
}
