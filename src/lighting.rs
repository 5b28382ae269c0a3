//! Keyboard zones, brightness levels and lighting modes.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{EncodeError, ParseError};

/// Addressable lighting zone.
///
/// Discriminants are the zone codes used on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Region {
    Left = 1,
    Middle = 2,
    Right = 3,
    Logo = 4,
    FrontLeft = 5,
    FrontRight = 6,
    Mouse = 7,
}

impl Region {
    /// All zones in the order colors are assigned to them.
    pub const ALL: [Region; 7] = [
        Region::Left,
        Region::Middle,
        Region::Right,
        Region::Logo,
        Region::FrontLeft,
        Region::FrontRight,
        Region::Mouse,
    ];

    /// Zones present on every keyboard variant.
    pub const PRIMARY: [Region; 3] = [Region::Left, Region::Middle, Region::Right];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Optional zones only understand the raw RGB command.
    pub fn is_optional(self) -> bool {
        !Self::PRIMARY.contains(&self)
    }
}

impl TryFrom<u8> for Region {
    type Error = EncodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.code() == code)
            .ok_or(EncodeError::InvalidRegion(code))
    }
}

/// LED brightness.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Brightness {
    #[default]
    High,
    Medium,
    Low,
    Off,
    /// Brightness is implied by the channels of a custom color.
    Rgb,
}

impl Brightness {
    /// Discrete level code for the preset command, `None` for [`Brightness::Rgb`].
    pub fn level(self) -> Option<u8> {
        match self {
            Self::High => Some(0),
            Self::Medium => Some(1),
            Self::Low => Some(2),
            Self::Off => Some(3),
            Self::Rgb => None,
        }
    }
}

impl FromStr for Brightness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "off" => Ok(Self::Off),
            "rgb" => Ok(Self::Rgb),
            _ => Err(ParseError::Brightness(s.into())),
        }
    }
}

impl Display for Brightness {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Off => "off",
            Self::Rgb => "rgb",
        };
        f.write_str(name)
    }
}

/// Lighting effect.
///
/// Discriminants are the mode codes used on the wire.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal = 1,
    Gaming = 2,
    Breathe = 3,
    Demo = 4,
    Wave = 5,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Normal, Mode::Gaming, Mode::Breathe, Mode::Demo, Mode::Wave];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Gaming mode only lights the left zone.
    pub fn is_single_zone(self) -> bool {
        self == Self::Gaming
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "gaming" => Ok(Self::Gaming),
            "breathe" => Ok(Self::Breathe),
            "demo" => Ok(Self::Demo),
            "wave" => Ok(Self::Wave),
            _ => Err(ParseError::Mode(s.into())),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Gaming => "gaming",
            Self::Breathe => "breathe",
            Self::Demo => "demo",
            Self::Wave => "wave",
        };
        f.write_str(name)
    }
}
