use std::{fmt, process::ExitCode};

use tracing::debug;
use weathercli_core::{
    FetchError, FormatError, Invocation, Report, UsageError, WeatherFetcher, WeatherQuery,
    format_report, interpret,
};

use crate::output;

pub const HELP: &str = "\
Usage: weathercli [CITY] [OPTION] [etc..]
Special case 1: weathercli [OPTION] : the option must be --help, -h, --version or -v
Special case 2: weathercli : prints this help menu

[etc..] : any number of options may follow the city, e.g. [CITY] [OPTION1] [OPTION2] ...

Unit arguments:

  --tempC  -tmpC   temperatures in Celsius, wind speed in m/s
  --tempF  -tmpF   temperatures in Fahrenheit, wind speed in miles/hour
  Without a unit argument temperatures are in Kelvin and wind speed in m/s.
  When several are given, the last one wins.

Info arguments:

  --temp        -tmp    only output the temperature
  --feels-like  -fl     only output the thermal sensation
  --maxtemp     -mtmp   only output the max temperature
  --mintemp     -mitmp  only output the min temperature
  --condition   -con    only output the weather condition
  --wind-speed  -wS     only output the wind speed
  --clouds      -cl     only output the cloudiness %
  --humidity    -hum    only output the humidity %
  --sea-level   -sl     only output the sea level pressure
  Info arguments are printed in the order given and may be repeated.

Special arguments:

  -h  --help     output this menu
  -v  --version  output version information and exit

Configuration:

  OPENWEATHER_API_KEY   API key (or `api_key` in the weathercli config.toml)

Exit status:

  0  report, help or version printed; also after an unexpected error message
  1  network error or invalid data received
  2  invalid arguments";

pub fn version() -> String {
    format!("weathercli v{}", env!("CARGO_PKG_VERSION"))
}

/// A failure after the arguments were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Network,
    Data,
    Unexpected(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Network => f.write_str("Network error: please check your connection and try again"),
            Failure::Data => f.write_str("Data error: received invalid data from OpenWeather"),
            Failure::Unexpected(description) => {
                write!(f, "An unexpected error occurred: {description}")
            }
        }
    }
}

impl From<FetchError> for Failure {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Transport(_) => Failure::Network,
            FetchError::Decode(_) => Failure::Data,
            other @ (FetchError::Service { .. } | FetchError::Client(_)) => {
                Failure::Unexpected(other.to_string())
            }
        }
    }
}

impl From<FormatError> for Failure {
    fn from(_: FormatError) -> Self {
        Failure::Data
    }
}

/// Result of one invocation, ready to be printed.
#[derive(Debug)]
pub enum Outcome {
    Help,
    Version,
    Usage(UsageError),
    Report(Report),
    Failed(Failure),
}

impl Outcome {
    pub fn status(&self) -> u8 {
        match self {
            Outcome::Help | Outcome::Version | Outcome::Report(_) => 0,
            Outcome::Failed(Failure::Unexpected(_)) => 0,
            Outcome::Usage(_) => 2,
            Outcome::Failed(Failure::Network | Failure::Data) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }

    pub fn emit(&self) {
        match self {
            Outcome::Help => output::info(HELP),
            Outcome::Version => output::info(&version()),
            Outcome::Usage(err) => output::error(err),
            Outcome::Report(report) => output::report(report),
            Outcome::Failed(failure) => output::error(failure),
        }
    }
}

/// One command-line invocation.
#[derive(Debug)]
pub struct Cli {
    args: Vec<String>,
}

impl Cli {
    /// Arguments of the current process, program name excluded.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1).collect())
    }

    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Interpret, fetch and format. `connect` is only called once the
    /// arguments are known to need a fetch.
    pub async fn run<C>(self, connect: C) -> Outcome
    where
        C: FnOnce() -> anyhow::Result<Box<dyn WeatherFetcher>>,
    {
        let (location, selectors) = match interpret(&self.args) {
            Ok(Invocation::Help) => return Outcome::Help,
            Ok(Invocation::Version) => return Outcome::Version,
            Ok(Invocation::Query { location, selectors }) => (location, selectors),
            Err(err) => return Outcome::Usage(err),
        };

        let query = WeatherQuery::build(location, &selectors);

        let fetcher = match connect() {
            Ok(fetcher) => fetcher,
            Err(err) => return Outcome::Failed(Failure::Unexpected(format!("{err:#}"))),
        };

        let record = match fetcher.fetch(&query).await {
            Ok(record) => record,
            Err(err) => {
                debug!(error = %err, query = %query.query_string(), "fetch failed");
                return Outcome::Failed(err.into());
            }
        };

        match format_report(&record, &selectors) {
            Ok(report) => Outcome::Report(report),
            Err(err) => {
                debug!(error = %err, ?record, "record cannot be formatted");
                Outcome::Failed(err.into())
            }
        }
    }
}
