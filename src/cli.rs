use crate::config::{parse_char_limit, parse_non_negative, parse_positive, Options, SoundDriver};
use crate::dash::SpeedUnit;
use crate::logging::LogLevel;
use anyhow::{Context, Result};
use clap::Parser;

/// Headless driver for the in-vehicle reading task HUD
#[derive(Parser, Debug, Default)]
#[command(name = "ndrt-hud")]
#[command(version)]
#[command(about = "Runs the secondary-task HUD against the shared signal files", long_about = None)]
pub struct Cli {
    /// Content directory holding ConfigFiles/
    #[arg(short = 'd', long = "content-dir", value_name = "CONTENTDIR")]
    pub content_dir: Option<String>,

    /// INI-style vehicle config file
    #[arg(short = 'c', long = "vehicle-config", value_name = "FILE")]
    pub vehicle_config: Option<String>,

    /// Frame rate of the tick loop
    #[arg(long = "tick-hz", value_name = "HZ")]
    pub tick_hz: Option<u32>,

    /// Run on a simulated clock instead of real time
    #[arg(long)]
    pub fast: bool,

    /// Give up after this many seconds of task time
    #[arg(long = "max-seconds", value_name = "SECONDS")]
    pub max_seconds: Option<String>,

    /// Show speed in km/h
    #[arg(long)]
    pub kph: bool,

    /// Show speed in mph
    #[arg(long)]
    pub mph: bool,

    /// Disable turn signal handling
    #[arg(long = "no-turn-signals")]
    pub no_turn_signals: bool,

    /// Characters per scrolling line
    #[arg(long = "char-limit", value_name = "CHARS")]
    pub char_limit: Option<String>,

    /// Seconds between takeover completion and resuming the task
    #[arg(long = "resume-delay", value_name = "SECONDS")]
    pub resume_delay: Option<String>,

    /// Sound driver (none, rodio)
    #[arg(long, value_name = "DRIVER")]
    pub sound: Option<String>,

    /// Log level (0 = nothing .. 6 = all)
    #[arg(short = 'v', long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<i32>,

    /// Log file path
    #[arg(short, long = "log-file", value_name = "FILE")]
    pub logfile: Option<String>,
}

impl Cli {
    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: Options) -> Result<Options> {
        if let Some(ref dir) = self.content_dir {
            opts.content_dir = Some(dir.clone());
        }

        if let Some(hz) = self.tick_hz {
            if hz == 0 {
                anyhow::bail!("Tick rate must be positive");
            }
            opts.tick_hz = hz;
        }

        if self.fast {
            opts.fast = true;
        }

        if let Some(ref secs) = self.max_seconds {
            opts.max_seconds =
                Some(parse_positive("max-seconds", secs).context("Invalid time limit")?);
        }

        if self.kph && self.mph {
            anyhow::bail!("--kph and --mph are mutually exclusive");
        }
        if self.kph {
            opts.speed_unit = SpeedUnit::Kph;
        }
        if self.mph {
            opts.speed_unit = SpeedUnit::Mph;
        }

        if self.no_turn_signals {
            opts.enable_turn_signals = false;
        }

        if let Some(ref limit) = self.char_limit {
            opts.char_limit =
                parse_char_limit("char-limit", limit).context("Invalid character limit")?;
        }

        if let Some(ref delay) = self.resume_delay {
            opts.resume_delay =
                parse_non_negative("resume-delay", delay).context("Invalid resume delay")?;
        }

        if let Some(ref sound) = self.sound {
            opts.sound_driver = Self::parse_sound_driver(sound)?;
        }

        if let Some(ref log_file) = self.logfile {
            opts.log_file = Some(log_file.clone());
        }

        Ok(opts)
    }

    /// Requested log level, if any
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level.map(LogLevel::from_i32)
    }

    fn parse_sound_driver(s: &str) -> Result<SoundDriver> {
        match s.to_lowercase().as_str() {
            "none" | "nosound" => Ok(SoundDriver::None),
            "rodio" => Ok(SoundDriver::Rodio),
            _ => anyhow::bail!("Invalid sound driver: {}. Valid options: none, rodio", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sound_driver() {
        assert_eq!(Cli::parse_sound_driver("rodio").unwrap(), SoundDriver::Rodio);
        assert_eq!(Cli::parse_sound_driver("NONE").unwrap(), SoundDriver::None);
        assert!(Cli::parse_sound_driver("openal").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let cli = Cli::parse_from([
            "ndrt-hud",
            "--content-dir",
            "/data",
            "--tick-hz",
            "30",
            "--fast",
            "--max-seconds",
            "90",
            "--kph",
            "--no-turn-signals",
            "--char-limit",
            "30",
            "--resume-delay",
            "1.5",
            "--log-file",
            "hud.log",
        ]);
        let opts = cli.merge_into_options(Options::default()).unwrap();
        assert_eq!(opts.content_dir.as_deref(), Some("/data"));
        assert_eq!(opts.tick_hz, 30);
        assert!(opts.fast);
        assert_eq!(opts.max_seconds, Some(90.0));
        assert_eq!(opts.speed_unit, SpeedUnit::Kph);
        assert!(!opts.enable_turn_signals);
        assert_eq!(opts.char_limit, 30);
        assert_eq!(opts.resume_delay, 1.5);
        assert_eq!(opts.log_file.as_deref(), Some("hud.log"));
    }

    #[test]
    fn test_merge_without_flags_keeps_options() {
        let cli = Cli::default();
        let opts = cli.merge_into_options(Options::default()).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let bad = [
            Cli { tick_hz: Some(0), ..Cli::default() },
            Cli { max_seconds: Some("soon".into()), ..Cli::default() },
            Cli { char_limit: Some("0".into()), ..Cli::default() },
            Cli { resume_delay: Some("-1".into()), ..Cli::default() },
            Cli { kph: true, mph: true, ..Cli::default() },
        ];
        for cli in bad {
            assert!(cli.merge_into_options(Options::default()).is_err(), "{cli:?}");
        }
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::parse_from(["ndrt-hud", "--log-level", "5"]);
        assert_eq!(cli.log_level(), Some(LogLevel::Debug));
    }
}
