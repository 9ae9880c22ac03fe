use crate::{
    args::{Location, SelectorSet},
    selector::UnitSystem,
};

/// Outbound query for the current-weather endpoint, minus the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: Location,
    pub units: Option<UnitSystem>,
}

impl WeatherQuery {
    /// Always carries the location; carries a unit system only when one was
    /// selected, leaving the service default in place otherwise.
    pub fn build(location: Location, selectors: &SelectorSet) -> Self {
        Self { location, units: selectors.requested_units() }
    }

    /// Query pairs in request order. Values are not URL-encoded.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("q", self.location.as_str())];
        if let Some(units) = self.units {
            pairs.push(("units", units.as_str()));
        }
        pairs
    }

    /// Human-readable form, e.g. `q=New York&units=imperial`.
    pub fn query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Current conditions for one location.
///
/// Every field is optional: the service omits some of them for some
/// locations, and the formatter decides which ones it cannot do without.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherRecord {
    pub country: Option<String>,
    pub name: Option<String>,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    /// Primary condition label, e.g. "Clouds".
    pub condition: Option<String>,
    pub wind_speed: Option<f64>,
    /// Cloudiness, %.
    pub clouds: Option<u8>,
    /// Relative humidity, %.
    pub humidity: Option<u8>,
    /// Atmospheric pressure at sea level, hPa.
    pub sea_level: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{Invocation, interpret};

    fn build_from(args: &[&str]) -> (WeatherQuery, SelectorSet) {
        match interpret(args).expect("valid arguments") {
            Invocation::Query { location, selectors } => {
                (WeatherQuery::build(location, &selectors), selectors)
            }
            other => panic!("expected a query, got {other:?}"),
        }
    }

    #[test]
    fn imperial_round_trip() {
        let (query, selectors) = build_from(&["New", "York", "--tempF"]);

        assert_eq!(query.query_string(), "q=New York&units=imperial");
        assert_eq!(selectors.unit_system().labels().temperature, "Fahrenheit");
        assert_eq!(selectors.unit_system().labels().velocity, "miles/hour");
    }

    #[test]
    fn no_unit_selector_leaves_units_out() {
        let (query, selectors) = build_from(&["Tokyo", "--temp"]);

        assert_eq!(query.pairs(), vec![("q", "Tokyo")]);
        assert_eq!(query.query_string(), "q=Tokyo");
        assert_eq!(selectors.unit_system(), UnitSystem::Standard);
    }

    #[test]
    fn only_the_last_unit_selector_is_sent() {
        let (query, _) = build_from(&["Paris", "-tmpF", "--clouds", "--tempC"]);

        assert_eq!(query.units, Some(UnitSystem::Metric));
        assert_eq!(query.query_string(), "q=Paris&units=metric");
    }
}
