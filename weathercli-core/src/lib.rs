//! Core library for the `weathercli` tool.
//!
//! This crate defines:
//! - The command-line selector vocabulary and argument interpretation
//! - Request building and unit resolution
//! - The fetch gateway abstraction and its OpenWeather implementation
//! - Report formatting
//! - Configuration & credentials handling
//!
//! It is used by the `weathercli` binary, which adds terminal rendering.

pub mod args;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod selector;

pub use args::{Invocation, Location, SelectorSet, interpret};
pub use config::Config;
pub use error::{FetchError, FormatError, UsageError};
pub use model::{WeatherQuery, WeatherRecord};
pub use provider::{OpenWeatherFetcher, WeatherFetcher, fetcher_from_config};
pub use report::{LineColor, Report, ReportLine, format_report};
pub use selector::{FieldSelector, UnitLabels, UnitSystem, resolve};
