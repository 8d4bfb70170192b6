use std::path::Path;

use anyhow::{Context, Result};

use crate::dash::{SpeedUnit, SteeringParams};
use crate::io::file_exists;
use crate::resource::PropertyFile;
use crate::tor::DEFAULT_RESUME_DELAY;

/// Application options that can be set via CLI or vehicle config file
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    // Commandline-only options
    pub log_file: Option<String>,
    pub content_dir: Option<String>,
    pub vehicle_config: Option<String>,
    pub tick_hz: u32,
    pub fast: bool,
    pub max_seconds: Option<f64>,
    pub sound_driver: SoundDriver,

    // Commandline and vehicle config options
    pub speed_unit: SpeedUnit,
    pub enable_turn_signals: bool,
    pub turn_signal_duration: f64,
    pub steering: SteeringParams,
    pub char_limit: usize,
    pub resume_delay: f64,
    pub timed_lines: usize,
    pub spoken_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundDriver {
    #[default]
    None,
    Rodio,
}

/// A configuration value that cannot be used
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: {value:?} is not a number")]
    NotANumber { key: String, value: String },
    #[error("{key}: {value:?} is not a boolean")]
    NotABoolean { key: String, value: String },
    #[error("{key}: {value} is out of range ({expected})")]
    OutOfRange {
        key: String,
        value: f64,
        expected: &'static str,
    },
}

impl Default for Options {
    fn default() -> Self {
        Self {
            log_file: None,
            content_dir: None,
            vehicle_config: None,
            tick_hz: 60,
            fast: false,
            max_seconds: None,
            sound_driver: SoundDriver::None,
            speed_unit: SpeedUnit::Mph,
            enable_turn_signals: true,
            turn_signal_duration: 3.0,
            steering: SteeringParams::default(),
            char_limit: 22,
            resume_delay: DEFAULT_RESUME_DELAY,
            timed_lines: 4,
            spoken_lines: 3,
        }
    }
}

/// Load the vehicle config file on top of the defaults.
///
/// No path or a missing file gives the defaults. Values that do not parse
/// are logged and skipped.
pub fn load_config(vehicle_config: &Option<String>) -> Result<Options> {
    let opts = Options::default();
    let Some(path) = vehicle_config else {
        return Ok(opts);
    };
    let path = Path::new(path);
    if !file_exists(path) {
        log::warn!("vehicle config {} not found, using defaults", path.display());
        return Ok(opts);
    }
    let props = PropertyFile::load(path)
        .with_context(|| format!("Failed to read vehicle config {}", path.display()))?;
    if props.is_empty() {
        log::warn!("vehicle config {} has no values", path.display());
    } else {
        log::info!("vehicle config {}: {} values", path.display(), props.len());
    }
    let mut opts = apply_properties(opts, &props);
    opts.vehicle_config = Some(path.display().to_string());
    Ok(opts)
}

/// Override options with the values present in a vehicle config.
pub fn apply_properties(mut opts: Options, props: &PropertyFile) -> Options {
    fn apply<T>(props: &PropertyFile, key: &str, parse: fn(&str, &str) -> Result<T, ConfigError>, slot: &mut T) {
        if let Some(raw) = props.get(key) {
            match parse(key, raw) {
                Ok(value) => *slot = value,
                Err(err) => log::warn!("ignoring vehicle config value: {}", err),
            }
        }
    }

    let mut mph = opts.speed_unit == SpeedUnit::Mph;
    apply(props, "EgoVehicle.SpeedometerInMPH", parse_bool, &mut mph);
    opts.speed_unit = SpeedUnit::from_mph_flag(mph);
    apply(props, "EgoVehicle.EnableTurnSignalAction", parse_bool, &mut opts.enable_turn_signals);
    apply(props, "EgoVehicle.TurnSignalDuration", parse_positive, &mut opts.turn_signal_duration);

    apply(props, "SteeringWheel.MaxSteerAngleDeg", parse_positive, &mut opts.steering.max_angle);
    apply(props, "SteeringWheel.MaxSteerVelocity", parse_positive, &mut opts.steering.max_velocity);
    apply(props, "SteeringWheel.SteeringScale", parse_number, &mut opts.steering.anim_scale);
    apply(props, "VehicleInputs.ScaleSteeringDamping", parse_positive, &mut opts.steering.input_scale);

    apply(props, "Hud.CharacterLimit", parse_char_limit, &mut opts.char_limit);
    apply(props, "Hud.ResumeDelay", parse_non_negative, &mut opts.resume_delay);
    opts
}

pub fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| ConfigError::NotANumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// A finite number greater than zero
pub fn parse_positive(key: &str, value: &str) -> Result<f64, ConfigError> {
    let number = parse_number(key, value)?;
    if !number.is_finite() || number <= 0.0 {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: number,
            expected: "> 0",
        });
    }
    Ok(number)
}

pub fn parse_non_negative(key: &str, value: &str) -> Result<f64, ConfigError> {
    let number = parse_number(key, value)?;
    if !number.is_finite() || number < 0.0 {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: number,
            expected: ">= 0",
        });
    }
    Ok(number)
}

pub fn parse_char_limit(key: &str, value: &str) -> Result<usize, ConfigError> {
    let number = parse_positive(key, value)?;
    if number.fract() != 0.0 {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            value: number,
            expected: "a whole number",
        });
    }
    Ok(number as usize)
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::NotABoolean {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
