//! Command-line selector vocabulary: field selectors, unit selectors and the
//! informational flags.

use std::fmt;

/// A flag asking for one specific field of the report to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    Temperature,
    FeelsLike,
    MaxTemp,
    MinTemp,
    Condition,
    WindSpeed,
    Clouds,
    Humidity,
    SeaLevel,
}

impl FieldSelector {
    /// All fields in the order the full report prints them.
    pub const fn all() -> &'static [FieldSelector] {
        &[
            FieldSelector::Temperature,
            FieldSelector::FeelsLike,
            FieldSelector::MaxTemp,
            FieldSelector::MinTemp,
            FieldSelector::Condition,
            FieldSelector::WindSpeed,
            FieldSelector::Clouds,
            FieldSelector::Humidity,
            FieldSelector::SeaLevel,
        ]
    }

    pub fn long_flag(&self) -> &'static str {
        match self {
            FieldSelector::Temperature => "--temp",
            FieldSelector::FeelsLike => "--feels-like",
            FieldSelector::MaxTemp => "--maxtemp",
            FieldSelector::MinTemp => "--mintemp",
            FieldSelector::Condition => "--condition",
            FieldSelector::WindSpeed => "--wind-speed",
            FieldSelector::Clouds => "--clouds",
            FieldSelector::Humidity => "--humidity",
            FieldSelector::SeaLevel => "--sea-level",
        }
    }

    pub fn short_flag(&self) -> &'static str {
        match self {
            FieldSelector::Temperature => "-tmp",
            FieldSelector::FeelsLike => "-fl",
            FieldSelector::MaxTemp => "-mtmp",
            FieldSelector::MinTemp => "-mitmp",
            FieldSelector::Condition => "-con",
            FieldSelector::WindSpeed => "-wS",
            FieldSelector::Clouds => "-cl",
            FieldSelector::Humidity => "-hum",
            FieldSelector::SeaLevel => "-sl",
        }
    }

    /// Recognize a command-line token. Flags are case-sensitive (`-wS`).
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "--max-temp" => return Some(FieldSelector::MaxTemp),
            "--min-temp" => return Some(FieldSelector::MinTemp),
            _ => {}
        }

        Self::all()
            .iter()
            .copied()
            .find(|field| field.long_flag() == token || field.short_flag() == token)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_flag())
    }
}

/// Unit system requested from the service and used for the unit labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    #[default]
    Standard,
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Standard => "standard",
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn labels(&self) -> UnitLabels {
        match self {
            UnitSystem::Standard => UnitLabels { temperature: "Kelvin", velocity: "m/s" },
            UnitSystem::Metric => UnitLabels { temperature: "Celsius", velocity: "m/s" },
            UnitSystem::Imperial => UnitLabels { temperature: "Fahrenheit", velocity: "miles/hour" },
        }
    }

    /// Recognize a unit selector flag: the Celsius pair selects metric,
    /// the Fahrenheit pair imperial.
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "--tempC" | "-tmpC" => Some(UnitSystem::Metric),
            "--tempF" | "-tmpF" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "standard" => Ok(UnitSystem::Standard),
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(format!("Unknown unit system '{other}'")),
        }
    }
}

/// Labels printed after temperatures and wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub temperature: &'static str,
    pub velocity: &'static str,
}

/// Unit labels for a unit-system token. Unknown tokens fall back to standard.
pub fn resolve(token: &str) -> UnitLabels {
    UnitSystem::try_from(token).unwrap_or_default().labels()
}

/// Flags that print fixed text and are only valid as the sole argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFlag {
    Help,
    Version,
}

impl InfoFlag {
    pub fn from_flag(token: &str) -> Option<Self> {
        match token {
            "--help" | "-h" => Some(InfoFlag::Help),
            "--version" | "-v" => Some(InfoFlag::Version),
            _ => None,
        }
    }
}
