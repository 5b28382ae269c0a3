//! MSI keyboard light manager.
//!
//! Configures the SteelSeries RGB keyboard found in MSI gaming notebooks through HID feature
//! reports.

use std::process;

use clap::{crate_description, crate_name, crate_version, Arg, ArgMatches, Command};
use hidapi::HidApi;
use log::info;

use crate::color::{parse_color_list, Color};
use crate::controller::HidController;
use crate::error::{DeviceError, Error, ParseError};
use crate::lighting::{Brightness, Mode};
use crate::msi_steelseries::MsiSteelSeries;

mod color;
mod controller;
mod error;
mod lighting;
mod msi_steelseries;
mod session;

/// New lighting config.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    /// Zone colors in region order; empty to keep the current colors.
    colors: Vec<Color>,
    brightness: Brightness,
    mode: Mode,
}

impl Config {
    fn from_cli(matches: &ArgMatches) -> Result<Self, ParseError> {
        let colors = matches.get_one::<String>("colors").ok_or(ParseError::MissingArgument)?;
        let brightness = matches.get_one::<String>("brightness");
        let mode = matches.get_one::<String>("mode");
        Self::from_args(colors, brightness.map(String::as_str), mode.map(String::as_str))
    }

    fn from_args(
        colors: &str,
        brightness: Option<&str>,
        mode: Option<&str>,
    ) -> Result<Self, ParseError> {
        let single_argument = brightness.is_none();
        let (brightness, mode) = match (brightness, mode) {
            (Some(brightness), Some(mode)) => {
                (brightness.parse::<Brightness>()?, mode.parse::<Mode>()?)
            },
            (Some(arg), None) => brightness_or_mode(arg)?,
            _ => (Brightness::default(), Mode::default()),
        };

        match parse_color_list(colors, !mode.is_single_zone()) {
            Ok(colors) => Ok(Config { colors, brightness, mode }),
            // A lone keyword might only select a mode.
            Err(_) if single_argument && is_keyword(colors) => match colors.parse::<Mode>() {
                Ok(mode) => Ok(Config { colors: Vec::new(), brightness, mode }),
                Err(_) => Err(ParseError::ColorOrMode(colors.into())),
            },
            Err(err) => Err(err),
        }
    }
}

/// Check if an argument is neither a color list nor a custom color.
fn is_keyword(arg: &str) -> bool {
    !arg.contains(',') && !arg.starts_with('[') && !arg.starts_with("0x")
}

/// Interpret the second argument as brightness, falling back to mode.
fn brightness_or_mode(arg: &str) -> Result<(Brightness, Mode), ParseError> {
    if let Ok(brightness) = arg.parse::<Brightness>() {
        return Ok((brightness, Mode::default()));
    }

    match arg.parse::<Mode>() {
        Ok(mode) => Ok((Brightness::default(), mode)),
        Err(_) => Err(ParseError::BrightnessOrMode(arg.into())),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = cli();
    let result = match cli.subcommand() {
        Some(("test", _)) => keyboard_test(),
        Some(("list", _)) => list(),
        _ => msiklm(&cli),
    };

    if let Err(err) = result {
        eprintln!("\x1b[31mError:\x1b[0m {err}");
        process::exit(1);
    }
}

/// Apply the lighting config from the CLI.
fn msiklm(matches: &ArgMatches) -> Result<(), Error> {
    let config = Config::from_cli(matches)?;
    write_config(&config, &MsiSteelSeries)?;
    println!("\x1b[32mSuccessfully applied changes.\x1b[0m");
    Ok(())
}

/// Write a config to the HID bus.
fn write_config(config: &Config, controller: &dyn HidController) -> Result<(), Error> {
    // Get all byte packets before touching the device.
    let packets = controller.config_bytes(config)?;

    let api = HidApi::new().map_err(DeviceError::Init)?;
    let mut session = session::open_device(&api, controller)?;

    session.apply(&packets)?;
    info!("Applied {} packets", packets.len());

    Ok(())
}

/// Check for a compatible keyboard.
fn keyboard_test() -> Result<(), Error> {
    let api = HidApi::new().map_err(DeviceError::Init)?;

    if session::keyboard_present(&api, &MsiSteelSeries) {
        println!("\x1b[35mCompatible keyboard found!\x1b[0m");
        Ok(())
    } else {
        Err(DeviceError::NotFound.into())
    }
}

/// Print all HID devices.
fn list() -> Result<(), Error> {
    let api = HidApi::new().map_err(DeviceError::Init)?;

    let mut devices = api.device_list().peekable();
    if devices.peek().is_none() {
        println!("No HID device found!");
        return Ok(());
    }

    for device in devices {
        println!("Device: {}", device.product_string().unwrap_or_default());
        println!("    Vendor ID:        {:#06x}", device.vendor_id());
        println!("    Product ID:       {:#06x}", device.product_id());
        println!("    Serial Number:    {}", device.serial_number().unwrap_or_default());
        println!("    Manufacturer:     {}", device.manufacturer_string().unwrap_or_default());
        println!("    Path:             {}", device.path().to_string_lossy());
        println!("    Interface Number: {}", device.interface_number());
        println!("    Release Number:   {:#06x}", device.release_number());
        println!();
    }

    Ok(())
}

/// Get clap CLI parameters.
fn cli() -> ArgMatches {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .args_conflicts_with_subcommands(true)
        .subcommand(Command::new("test").about("Test if a compatible keyboard is present"))
        .subcommand(Command::new("list").about("List all HID devices"))
        .arg(
            Arg::new("colors")
                .help(
                    "Zone colors: a single color or a comma separated list in the order left, \
                     middle, right, logo, front_left, front_right, mouse [colors: none, off, \
                     red, orange, yellow, green, sky, blue, purple, white, [r;g;b], 0xRRGGBB]; \
                     alternatively a mode to keep the current colors",
                )
                .index(1),
        )
        .arg(
            Arg::new("brightness")
                .help(
                    "Brightness [possible values: high, medium, low, off, rgb]; alternatively \
                     the mode if only two arguments are supplied",
                )
                .index(2),
        )
        .arg(
            Arg::new("mode")
                .help("Lighting mode [possible values: normal, gaming, breathe, demo, wave]")
                .index(3),
        )
        .get_matches()
}
