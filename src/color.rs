//! Color parsing.
//!
//! A color is either one of the presets built into the keyboard's color table or a custom RGB
//! triple given as `[r;g;b]` or `0xRRGGBB`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ParseError;
use crate::lighting::Region;

/// RGB color.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse the `0xRRGGBB` notation.
    fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x").filter(|digits| digits.len() == 6)?;

        // `from_str_radix` would also accept a leading sign.
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }

        let mut color = u32::from_str_radix(digits, 16).ok()?;
        let b = (color & 0xff) as u8;
        color >>= 8;
        let g = (color & 0xff) as u8;
        color >>= 8;
        let r = color as u8;
        Some(Rgb { r, g, b })
    }

    /// Parse the `[r;g;b]` notation.
    fn from_brackets(s: &str) -> Option<Self> {
        let channels = s.strip_prefix('[')?.strip_suffix(']')?;

        let mut split = channels.split(';');
        let r = channel(split.next()?)?;
        let g = channel(split.next()?)?;
        let b = channel(split.next()?)?;

        match split.next() {
            Some(_) => None,
            None => Some(Rgb { r, g, b }),
        }
    }
}

/// Parse a single decimal channel value.
fn channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    u8::from_str(s).ok()
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Color from the keyboard's builtin color table.
///
/// Discriminants are the preset codes used on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Preset {
    None = 0,
    Red = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Sky = 5,
    Blue = 6,
    Purple = 7,
    White = 8,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::None,
        Preset::Red,
        Preset::Orange,
        Preset::Yellow,
        Preset::Green,
        Preset::Sky,
        Preset::Blue,
        Preset::Purple,
        Preset::White,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Channel values matching the device's own rendition of the preset.
    pub fn rgb(self) -> Rgb {
        match self {
            Self::None => Rgb::new(0, 0, 0),
            Self::Red => Rgb::new(255, 0, 0),
            Self::Orange => Rgb::new(255, 100, 0),
            Self::Yellow => Rgb::new(255, 255, 0),
            Self::Green => Rgb::new(0, 255, 0),
            Self::Sky => Rgb::new(0, 255, 255),
            Self::Blue => Rgb::new(0, 0, 255),
            Self::Purple => Rgb::new(255, 0, 255),
            Self::White => Rgb::new(255, 255, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Self::None),
            name => Self::ALL.iter().copied().find(|preset| preset.name() == name),
        }
    }
}

/// Lighting color of a single zone.
///
/// Presets always carry their fixed channel values, custom colors carry no preset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    preset: Option<Preset>,
    rgb: Rgb,
}

impl Color {
    pub fn custom(rgb: Rgb) -> Self {
        Self { preset: None, rgb }
    }

    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn is_custom(&self) -> bool {
        self.preset.is_none()
    }
}

impl From<Preset> for Color {
    fn from(preset: Preset) -> Self {
        Self { preset: Some(preset), rgb: preset.rgb() }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(preset) = Preset::from_name(s) {
            return Ok(preset.into());
        }

        Rgb::from_brackets(s)
            .or_else(|| Rgb::from_hex(s))
            .map(Color::custom)
            .ok_or_else(|| ParseError::Color(s.into()))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.preset {
            Some(preset) => f.write_str(preset.name()),
            None => write!(f, "{}", self.rgb),
        }
    }
}

/// Parse a comma separated list of zone colors.
///
/// Colors are assigned to [`Region::ALL`] in order. A single color is repeated for all primary
/// zones unless `expand_single` is `false`.
pub fn parse_color_list(input: &str, expand_single: bool) -> Result<Vec<Color>, ParseError> {
    let colors = input.split(',').map(Color::from_str).collect::<Result<Vec<_>, _>>()?;

    if colors.len() > Region::ALL.len() {
        return Err(ParseError::TooManyColors(colors.len()));
    }

    if expand_single && colors.len() == 1 {
        return Ok(vec![colors[0]; Region::PRIMARY.len()]);
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Color, ParseError> {
        s.parse()
    }

    #[test]
    fn preset_keywords() {
        for preset in Preset::ALL.iter() {
            let color = parse(preset.name()).unwrap();
            assert_eq!(color.preset(), Some(*preset));
            assert_eq!(color.rgb(), preset.rgb());
        }
    }

    #[test]
    fn preset_table() {
        assert_eq!(parse("none").unwrap().rgb(), Rgb::new(0, 0, 0));
        assert_eq!(parse("off").unwrap(), Color::from(Preset::None));
        assert_eq!(parse("red").unwrap().rgb(), Rgb::new(255, 0, 0));
        assert_eq!(parse("orange").unwrap().rgb(), Rgb::new(255, 100, 0));
        assert_eq!(parse("yellow").unwrap().rgb(), Rgb::new(255, 255, 0));
        assert_eq!(parse("green").unwrap().rgb(), Rgb::new(0, 255, 0));
        assert_eq!(parse("sky").unwrap().rgb(), Rgb::new(0, 255, 255));
        assert_eq!(parse("blue").unwrap().rgb(), Rgb::new(0, 0, 255));
        assert_eq!(parse("purple").unwrap().rgb(), Rgb::new(255, 0, 255));
        assert_eq!(parse("white").unwrap().rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        for input in ["Red", "RED", "Off", "cyan", "blu", ""] {
            assert_eq!(parse(input), Err(ParseError::Color(input.into())));
        }
    }

    #[test]
    fn bracket_notation() {
        let color = parse("[12;0;255]").unwrap();
        assert!(color.is_custom());
        assert_eq!(color.preset(), None);
        assert_eq!(color.rgb(), Rgb::new(12, 0, 255));

        assert_eq!(parse("[007;08;9]").unwrap().rgb(), Rgb::new(7, 8, 9));
    }

    #[test]
    fn bracket_notation_errors() {
        for input in [
            "[300;0;0]",
            "[-1;0;0]",
            "[10;10]",
            "[1;2;3;4]",
            "[1;2;3]x",
            "x[1;2;3]",
            "[1;2;3",
            "1;2;3]",
            "[;2;3]",
            "[1; 2;3]",
            "[+1;2;3]",
            "[a;b;c]",
            "[]",
        ] {
            assert_eq!(parse(input), Err(ParseError::Color(input.into())), "{}", input);
        }
    }

    #[test]
    fn hex_notation() {
        let color = parse("0xAABBCC").unwrap();
        assert!(color.is_custom());
        assert_eq!(color.rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(parse("0xaabbcc").unwrap(), color);
    }

    #[test]
    fn hex_notation_errors() {
        for input in ["0xZZZZZZ", "0xAABBC", "0xAABBCCD", "AABBCC", "#AABBCC", "0x+ABBCC", "0XAABBCC"]
        {
            assert_eq!(parse(input), Err(ParseError::Color(input.into())), "{}", input);
        }
    }

    #[test]
    fn display() {
        assert_eq!(Color::from(Preset::Sky).to_string(), "sky");
        assert_eq!(Color::custom(Rgb::new(1, 0xab, 255)).to_string(), "0x01abff");
    }

    #[test]
    fn single_color_fills_primary_zones() {
        let colors = parse_color_list("red", true).unwrap();
        assert_eq!(colors, vec![Color::from(Preset::Red); 3]);
    }

    #[test]
    fn single_color_for_single_zone_mode() {
        let colors = parse_color_list("red", false).unwrap();
        assert_eq!(colors, vec![Color::from(Preset::Red)]);
    }

    #[test]
    fn colors_assigned_positionally() {
        let colors = parse_color_list("red,[1;2;3],0x0000ff,none", true).unwrap();
        assert_eq!(colors, vec![
            Color::from(Preset::Red),
            Color::custom(Rgb::new(1, 2, 3)),
            Color::custom(Rgb::new(0, 0, 255)),
            Color::from(Preset::None),
        ]);
    }

    #[test]
    fn seven_colors_accepted() {
        let colors = parse_color_list("red,red,red,red,red,red,red", true).unwrap();
        assert_eq!(colors.len(), Region::ALL.len());
    }

    #[test]
    fn more_than_seven_colors_rejected() {
        let err = parse_color_list("red,red,red,red,red,red,red,red", true).unwrap_err();
        assert_eq!(err, ParseError::TooManyColors(8));
    }

    #[test]
    fn malformed_color_aborts_list() {
        let err = parse_color_list("red,green,purpel", true).unwrap_err();
        assert_eq!(err, ParseError::Color("purpel".into()));

        let err = parse_color_list("red, green", true).unwrap_err();
        assert_eq!(err, ParseError::Color(" green".into()));

        let err = parse_color_list("red,,blue", true).unwrap_err();
        assert_eq!(err, ParseError::Color("".into()));
    }
}
