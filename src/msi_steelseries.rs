//! SteelSeries keyboard control for MSI gaming notebooks.
//!
//! Every request is an 8 byte feature report:
//!
//! ```text
//! [0x01, 0x02, command, target, payload, payload, payload, 0xec]
//! ```

use std::convert::TryFrom;

use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

use crate::color::{Color, Preset};
use crate::controller::HidController;
use crate::error::EncodeError;
use crate::lighting::{Brightness, Mode, Region};
use crate::Config;

/// Length of every feature report.
pub const FRAME_LEN: usize = 8;

const HEADER: [u8; 2] = [0x01, 0x02];

/// Set a zone to explicit channel values.
const CMD_RGB: u8 = 64;

/// Activate a mode, applying previously set colors.
const CMD_COMMIT: u8 = 65;

/// Set a zone to a builtin preset at a discrete brightness.
const CMD_SET: u8 = 66;

/// End of request marker.
const EOR: u8 = 236;

pub struct MsiSteelSeries;

impl HidController for MsiSteelSeries {
    fn vendor_id(&self) -> u16 {
        0x1770
    }

    fn product_id(&self) -> u16 {
        0xff00
    }

    fn config_bytes(&self, config: &Config) -> Result<Vec<Bytes>, EncodeError> {
        let mut packets = Vec::with_capacity(config.colors.len() + 1);

        // Zone colors only take effect once the mode is committed.
        for (i, color) in config.colors.iter().enumerate() {
            let region = Region::try_from(u8::try_from(i + 1).unwrap_or(u8::MAX))?;
            let (color, brightness) = zone_color(*color, region, config.brightness);
            debug!("Zone {:?}: {} at brightness {}", region, color, brightness);
            packets.push(encode_color(color, region, brightness)?);
        }

        packets.push(encode_mode(config.mode));

        Ok(packets)
    }
}

/// Select the color and brightness used for a zone's color command.
///
/// Optional zones only understand the RGB command and keep their color. On the primary zones
/// `off` disables the color, and custom colors bypass the discrete brightness levels.
fn zone_color(color: Color, region: Region, brightness: Brightness) -> (Color, Brightness) {
    if region.is_optional() {
        (color, Brightness::Rgb)
    } else if brightness == Brightness::Off {
        (Preset::None.into(), Brightness::Off)
    } else if color.is_custom() {
        (color, Brightness::Rgb)
    } else {
        (color, brightness)
    }
}

/// Encode the color of a single zone.
pub fn encode_color(
    color: Color,
    region: Region,
    brightness: Brightness,
) -> Result<Bytes, EncodeError> {
    let mut buf = BytesMut::with_capacity(FRAME_LEN);
    buf.put_slice(&HEADER);

    match brightness.level() {
        None => {
            let rgb = color.rgb();
            buf.put_u8(CMD_RGB);
            buf.put_u8(region.code());
            buf.put_u8(rgb.r);
            buf.put_u8(rgb.g);
            buf.put_u8(rgb.b);
        },
        Some(level) => {
            let preset = match color.preset() {
                Some(_) if brightness == Brightness::Off => Preset::None,
                Some(preset) => preset,
                None => return Err(EncodeError::CustomColorWithLevel { color, brightness }),
            };

            buf.put_u8(CMD_SET);
            buf.put_u8(region.code());
            buf.put_u8(preset.code());
            buf.put_u8(level);
            buf.put_u8(0);
        },
    }

    buf.put_u8(EOR);

    Ok(buf.freeze())
}

/// Encode the mode commit request.
pub fn encode_mode(mode: Mode) -> Bytes {
    let mut buf = BytesMut::with_capacity(FRAME_LEN);
    buf.put_slice(&HEADER);
    buf.put_u8(CMD_COMMIT);
    buf.put_u8(mode.code());

    // Padding.
    buf.put_slice(&[0; 3]);

    buf.put_u8(EOR);

    buf.freeze()
}
