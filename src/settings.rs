//! Command-line settings
//!
//! Parsing never fails. Bad input is reported as an [`ArgWarning`] and the
//! default stays in place.

use std::fmt;

use crate::consts::DEFAULT_CIRCLE_COUNT;

/// A problem found while reading the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgWarning {
    /// Flag given as the last argument, no value after it
    MissingValue { flag: String },
    /// Value after the flag is not a non-negative integer
    BadValue { flag: String, value: String },
    UnrecognisedFlag(String),
}

impl fmt::Display for ArgWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgWarning::MissingValue { .. } => {
                write!(f, "PARSER: No integer provided! Using default value.")
            }
            ArgWarning::BadValue { .. } => {
                write!(f, "PARSER: Bad integer value provided! Using default value.")
            }
            ArgWarning::UnrecognisedFlag(flag) => {
                write!(f, "PARSER: Unrecognised flag \"{}\".", flag)
            }
        }
    }
}

impl std::error::Error for ArgWarning {}

/// Flags that take an integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueFlag {
    Count,
    Seed,
    Frames,
}

impl ValueFlag {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "--count" | "-c" => Some(ValueFlag::Count),
            "--seed" | "-s" => Some(ValueFlag::Seed),
            "--frames" | "-f" => Some(ValueFlag::Frames),
            _ => None,
        }
    }
}

/// Run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Circles to spawn
    pub circle_count: usize,
    /// RNG seed; random when unset
    pub seed: Option<u64>,
    /// Headless run length in frames; the runner picks a default when unset
    pub frames: Option<u64>,
    /// Hover inspection and frame timing text
    pub show_debug_text: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_count: DEFAULT_CIRCLE_COUNT,
            seed: None,
            frames: None,
            show_debug_text: true,
        }
    }
}

impl Settings {
    /// Read settings from the process arguments, logging every warning
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Parse `args` (program name excluded), logging every warning
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (settings, warnings) = Self::parse(args);
        for warning in &warnings {
            log::warn!("{}", warning);
        }
        settings
    }

    /// Parse `args` and collect warnings instead of logging them
    ///
    /// A missing or bad value stops parsing; the remaining arguments are not
    /// read and their settings keep their defaults.
    pub fn parse<I, S>(args: I) -> (Self, Vec<ArgWarning>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut warnings = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();

            if arg == "--no-debug" {
                settings.show_debug_text = false;
                continue;
            }

            let Some(flag) = ValueFlag::from_str(arg) else {
                warnings.push(ArgWarning::UnrecognisedFlag(arg.to_string()));
                continue;
            };

            let Some(value) = args.next() else {
                warnings.push(ArgWarning::MissingValue {
                    flag: arg.to_string(),
                });
                break;
            };
            let value = value.as_ref().trim();

            let parsed = match flag {
                ValueFlag::Count => value.parse::<usize>().map(|n| settings.circle_count = n),
                ValueFlag::Seed => value.parse::<u64>().map(|n| settings.seed = Some(n)),
                ValueFlag::Frames => value.parse::<u64>().map(|n| settings.frames = Some(n)),
            };
            if parsed.is_err() {
                warnings.push(ArgWarning::BadValue {
                    flag: arg.to_string(),
                    value: value.to_string(),
                });
                break;
            }
        }

        (settings, warnings)
    }
}
