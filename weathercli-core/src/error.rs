use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Command-line misuse. Detected before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Invalid usage: --help, -h, --version, -v must be used alone.")]
    MustBeUsedAlone,

    #[error("The city cannot be empty, execute without arguments to check how to use the app")]
    MissingLocation,

    #[error(
        "Invalid argument {0}: help and version options cannot be used after the city name, \
         execute without arguments to check how to use the app"
    )]
    OptionAfterLocation(String),

    #[error("Unknown argument {0}, execute without arguments to check how to use the app")]
    UnknownArgument(String),
}

/// Failure while retrieving a weather record.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The service answered with something that is not a weather record.
    #[error("malformed response: {0}")]
    Decode(#[source] BoxError),

    /// The service answered with a non-success status.
    #[error("OpenWeather returned {status}: {message}")]
    Service { status: u16, message: String },

    /// The HTTP client or request could not be set up, e.g. a bad base URL.
    #[error("failed to build HTTP request: {0}")]
    Client(#[source] BoxError),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchError::Decode(Box::new(error))
        } else if error.is_builder() {
            FetchError::Client(Box::new(error))
        } else {
            FetchError::Transport(Box::new(error))
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(Box::new(error))
    }
}

/// A weather record lacks a field the report needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("weather record has no `{0}` field")]
    MissingField(&'static str),
}
