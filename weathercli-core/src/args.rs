//! Turns the raw argument vector into a location and a validated selector set.

use std::fmt;

use tracing::debug;

use crate::{
    error::UsageError,
    selector::{FieldSelector, InfoFlag, UnitSystem},
};

/// Place name the lookup targets. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    /// Join tokens with single spaces. `None` when the result is blank.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let joined = tokens.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        if joined.trim().is_empty() {
            return None;
        }

        Some(Location(joined))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Field selectors in the order given, plus the unit system picked by the
/// last unit selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorSet {
    fields: Vec<FieldSelector>,
    units: Option<UnitSystem>,
}

impl SelectorSet {
    pub fn new(fields: Vec<FieldSelector>, units: Option<UnitSystem>) -> Self {
        Self { fields, units }
    }

    pub fn fields(&self) -> &[FieldSelector] {
        &self.fields
    }

    /// Unit system explicitly chosen on the command line, if any.
    pub fn requested_units(&self) -> Option<UnitSystem> {
        self.units
    }

    /// Unit system used for display; standard when none was chosen.
    pub fn unit_system(&self) -> UnitSystem {
        self.units.unwrap_or_default()
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// What a command line asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    Query { location: Location, selectors: SelectorSet },
}

/// Interpret a full argument vector (program name excluded).
pub fn interpret<S: AsRef<str>>(args: &[S]) -> Result<Invocation, UsageError> {
    if args.is_empty() {
        return Ok(Invocation::Help);
    }

    if let Some(flag) = args.iter().find_map(|arg| InfoFlag::from_flag(arg.as_ref())) {
        if args.len() != 1 {
            return Err(UsageError::MustBeUsedAlone);
        }
        return Ok(match flag {
            InfoFlag::Help => Invocation::Help,
            InfoFlag::Version => Invocation::Version,
        });
    }

    let split = args
        .iter()
        .position(|arg| arg.as_ref().starts_with('-'))
        .unwrap_or(args.len());
    let (location_tokens, rest) = args.split_at(split);

    let location = Location::from_tokens(location_tokens).ok_or(UsageError::MissingLocation)?;
    let selectors = validate_selectors(rest)?;

    debug!(%location, ?selectors, "interpreted arguments");

    Ok(Invocation::Query { location, selectors })
}

/// Validate the tokens following the location, left to right, stopping at
/// the first invalid one.
pub fn validate_selectors<S: AsRef<str>>(tokens: &[S]) -> Result<SelectorSet, UsageError> {
    let mut fields = Vec::new();
    let mut units = None;

    for token in tokens.iter().map(AsRef::as_ref) {
        if InfoFlag::from_flag(token).is_some() {
            return Err(UsageError::OptionAfterLocation(token.to_owned()));
        }

        if let Some(unit) = UnitSystem::from_flag(token) {
            units = Some(unit);
        } else if let Some(field) = FieldSelector::from_flag(token) {
            fields.push(field);
        } else {
            return Err(UsageError::UnknownArgument(token.to_owned()));
        }
    }

    Ok(SelectorSet::new(fields, units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(args: &[&str]) -> (Location, SelectorSet) {
        match interpret(args).expect("arguments should be valid") {
            Invocation::Query { location, selectors } => (location, selectors),
            other => panic!("expected a query, got {other:?}"),
        }
    }

    #[test]
    fn empty_args_show_help() {
        let args: [&str; 0] = [];
        assert_eq!(interpret(&args), Ok(Invocation::Help));
    }

    #[rstest]
    #[case("--help", Invocation::Help)]
    #[case("-h", Invocation::Help)]
    #[case("--version", Invocation::Version)]
    #[case("-v", Invocation::Version)]
    fn sole_info_flag(#[case] flag: &str, #[case] expected: Invocation) {
        assert_eq!(interpret(&[flag]), Ok(expected));
    }

    #[rstest]
    #[case(&["--help", "Tokyo"])]
    #[case(&["Tokyo", "--help"])]
    #[case(&["Tokyo", "--temp", "-v"])]
    #[case(&["-h", "-v"])]
    fn info_flag_with_anything_else(#[case] args: &[&str]) {
        assert_eq!(interpret(args), Err(UsageError::MustBeUsedAlone));
    }

    #[test]
    fn location_tokens_are_joined() {
        let (location, selectors) = query(&["New", "York", "--temp"]);

        assert_eq!(location.as_str(), "New York");
        assert_eq!(selectors.fields(), &[FieldSelector::Temperature]);
    }

    #[test]
    fn location_only_has_no_selectors() {
        let (location, selectors) = query(&["Tokyo"]);

        assert_eq!(location.as_str(), "Tokyo");
        assert!(!selectors.has_fields());
        assert_eq!(selectors.requested_units(), None);
        assert_eq!(selectors.unit_system(), UnitSystem::Standard);
    }

    #[test]
    fn selector_first_is_missing_location() {
        assert_eq!(interpret(&["--temp", "Tokyo"]), Err(UsageError::MissingLocation));
    }

    #[rstest]
    #[case(&[""])]
    #[case(&["", "--temp"])]
    #[case(&["  ", ""])]
    fn blank_location_is_missing(#[case] args: &[&str]) {
        assert_eq!(interpret(args), Err(UsageError::MissingLocation));
    }

    #[test]
    fn unknown_argument_aborts() {
        assert_eq!(
            interpret(&["Tokyo", "--bogus"]),
            Err(UsageError::UnknownArgument("--bogus".into()))
        );
    }

    #[test]
    fn first_invalid_token_is_reported() {
        assert_eq!(
            interpret(&["Tokyo", "--temp", "--nope", "--worse"]),
            Err(UsageError::UnknownArgument("--nope".into()))
        );
    }

    #[test]
    fn location_word_after_selector_is_unknown() {
        assert_eq!(
            interpret(&["New", "--temp", "York"]),
            Err(UsageError::UnknownArgument("York".into()))
        );
    }

    #[test]
    fn fields_keep_order_and_repeats() {
        let (_, selectors) = query(&["Lima", "--humidity", "-tmp", "--humidity", "-sl"]);

        assert_eq!(
            selectors.fields(),
            &[
                FieldSelector::Humidity,
                FieldSelector::Temperature,
                FieldSelector::Humidity,
                FieldSelector::SeaLevel,
            ]
        );
    }

    #[test]
    fn unit_selectors_are_not_fields() {
        let (_, selectors) = query(&["Oslo", "--tempC", "-tmpF"]);

        assert!(!selectors.has_fields());
        assert_eq!(selectors.requested_units(), Some(UnitSystem::Imperial));
    }

    #[test]
    fn last_unit_selector_wins_when_interleaved() {
        let (_, selectors) = query(&["Tokyo", "--tempF", "--temp", "-tmpC", "--humidity"]);

        assert_eq!(selectors.unit_system(), UnitSystem::Metric);
        assert_eq!(
            selectors.fields(),
            &[FieldSelector::Temperature, FieldSelector::Humidity]
        );
    }

    #[test]
    fn validation_rejects_info_flag_after_location() {
        assert_eq!(
            validate_selectors(&["--temp", "--version"]),
            Err(UsageError::OptionAfterLocation("--version".into()))
        );
    }

    #[test]
    fn validation_of_nothing_is_empty() {
        let tokens: [String; 0] = [];
        assert_eq!(validate_selectors(&tokens), Ok(SelectorSet::default()));
    }

    #[test]
    fn accepts_owned_strings() {
        let args: Vec<String> = vec!["Buenos".into(), "Aires".into(), "-con".into()];
        let invocation = interpret(&args).expect("valid");

        assert_eq!(
            invocation,
            Invocation::Query {
                location: Location::from_tokens(&["Buenos", "Aires"]).expect("non-empty"),
                selectors: SelectorSet::new(vec![FieldSelector::Condition], None),
            }
        );
    }
}
