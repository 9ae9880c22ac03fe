//! Maps a weather record and a selector set to labeled report lines.
//!
//! Color is kept next to the text as a tag so the text itself stays plain;
//! the binary decides how a tag looks on a terminal.

use crate::{
    args::SelectorSet,
    error::FormatError,
    model::WeatherRecord,
    selector::{FieldSelector, UnitLabels},
};

/// Presentation color of one report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Red,
    Yellow,
    Magenta,
    Cyan,
    BrightRed,
    BrightYellow,
    BrightMagenta,
    BrightCyan,
    BrightGreen,
    BrightBlue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub color: LineColor,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Undecorated text of every line.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

type ReadValue = fn(&WeatherRecord, &UnitLabels) -> Result<String, FormatError>;

/// How one field is shown.
#[derive(Clone, Copy)]
pub struct FieldDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: LineColor,
    read: ReadValue,
}

impl FieldDisplay {
    fn render(&self, record: &WeatherRecord, units: &UnitLabels) -> Result<ReportLine, FormatError> {
        let value = (self.read)(record, units)?;
        Ok(ReportLine {
            color: self.color,
            text: format!("[{} {}: {}]", self.label, self.icon, value),
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, FormatError> {
    value.ok_or(FormatError::MissingField(field))
}

impl FieldSelector {
    pub fn display(&self) -> FieldDisplay {
        match self {
            FieldSelector::Temperature => FieldDisplay {
                label: "Temperature",
                icon: "\u{1F321}",
                color: LineColor::BrightYellow,
                read: |r, u| Ok(format!("{} {}", require(r.temp, "main.temp")?, u.temperature)),
            },
            FieldSelector::FeelsLike => FieldDisplay {
                label: "Feels like",
                icon: "\u{1F975}/\u{1F976}",
                color: LineColor::BrightMagenta,
                read: |r, u| {
                    Ok(format!("{} {}", require(r.feels_like, "main.feels_like")?, u.temperature))
                },
            },
            FieldSelector::MaxTemp => FieldDisplay {
                label: "Temp max",
                icon: "\u{1F321}",
                color: LineColor::BrightCyan,
                read: |r, u| {
                    Ok(format!("{} {}", require(r.temp_max, "main.temp_max")?, u.temperature))
                },
            },
            FieldSelector::MinTemp => FieldDisplay {
                label: "Temp min",
                icon: "\u{1F321}",
                color: LineColor::BrightGreen,
                read: |r, u| {
                    Ok(format!("{} {}", require(r.temp_min, "main.temp_min")?, u.temperature))
                },
            },
            FieldSelector::Condition => FieldDisplay {
                label: "Condition",
                icon: "\u{2600}/\u{1F324}",
                color: LineColor::BrightBlue,
                read: |r, _| Ok(require(r.condition.as_deref(), "weather.main")?.to_owned()),
            },
            FieldSelector::WindSpeed => FieldDisplay {
                label: "Wind Speed",
                icon: "\u{1F32C}",
                color: LineColor::Red,
                read: |r, u| Ok(format!("{} {}", require(r.wind_speed, "wind.speed")?, u.velocity)),
            },
            FieldSelector::Clouds => FieldDisplay {
                label: "Clouds",
                icon: "\u{2601}",
                color: LineColor::Yellow,
                read: |r, _| Ok(format!("{} %", require(r.clouds, "clouds.all")?)),
            },
            FieldSelector::Humidity => FieldDisplay {
                label: "Humidity",
                icon: "\u{1F4A7}",
                color: LineColor::Magenta,
                read: |r, _| Ok(format!("{} %", require(r.humidity, "main.humidity")?)),
            },
            FieldSelector::SeaLevel => FieldDisplay {
                label: "Sea Level",
                icon: "\u{1F30A}",
                color: LineColor::Cyan,
                read: |r, _| Ok(format!("{} hPa", require(r.sea_level, "main.sea_level")?)),
            },
        }
    }
}

fn header(record: &WeatherRecord) -> Result<ReportLine, FormatError> {
    let country = require(record.country.as_deref(), "sys.country")?;
    let name = require(record.name.as_deref(), "name")?;

    Ok(ReportLine {
        color: LineColor::BrightRed,
        text: format!("[Current weather in {country},{name}] :"),
    })
}

/// Render the report.
///
/// With field selectors, only those lines are produced, in selector order.
/// Without, the header is followed by every field in canonical order. Unit
/// labels follow the selector set's unit system in both cases.
pub fn format_report(record: &WeatherRecord, selectors: &SelectorSet) -> Result<Report, FormatError> {
    let units = selectors.unit_system().labels();

    let lines = if selectors.has_fields() {
        selectors
            .fields()
            .iter()
            .map(|field| field.display().render(record, &units))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let mut lines = vec![header(record)?];
        for field in FieldSelector::all() {
            lines.push(field.display().render(record, &units)?);
        }
        lines
    };

    Ok(Report { lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::UnitSystem;

    fn tokyo() -> WeatherRecord {
        WeatherRecord {
            country: Some("JP".into()),
            name: Some("Tokyo".into()),
            temp: Some(20.0),
            feels_like: Some(18.0),
            temp_max: Some(22.0),
            temp_min: Some(16.5),
            condition: Some("Clear".into()),
            wind_speed: Some(5.0),
            clouds: Some(10),
            humidity: Some(60),
            sea_level: Some(1013),
        }
    }

    #[test]
    fn full_report_in_canonical_order() {
        let report = format_report(&tokyo(), &SelectorSet::default()).expect("complete record");

        assert_eq!(
            report.texts(),
            vec![
                "[Current weather in JP,Tokyo] :",
                "[Temperature \u{1F321}: 20 Kelvin]",
                "[Feels like \u{1F975}/\u{1F976}: 18 Kelvin]",
                "[Temp max \u{1F321}: 22 Kelvin]",
                "[Temp min \u{1F321}: 16.5 Kelvin]",
                "[Condition \u{2600}/\u{1F324}: Clear]",
                "[Wind Speed \u{1F32C}: 5 m/s]",
                "[Clouds \u{2601}: 10 %]",
                "[Humidity \u{1F4A7}: 60 %]",
                "[Sea Level \u{1F30A}: 1013 hPa]",
            ]
        );
    }

    #[test]
    fn full_report_shape_does_not_depend_on_units() {
        let standard = format_report(&tokyo(), &SelectorSet::default()).expect("report");
        let imperial = format_report(&tokyo(), &SelectorSet::new(vec![], Some(UnitSystem::Imperial)))
            .expect("report");

        assert_eq!(standard.lines().len(), 1 + FieldSelector::all().len());
        assert_eq!(imperial.lines().len(), standard.lines().len());

        let colors = |r: &Report| r.lines().iter().map(|l| l.color).collect::<Vec<_>>();
        assert_eq!(colors(&standard), colors(&imperial));
        assert_eq!(imperial.texts()[1], "[Temperature \u{1F321}: 20 Fahrenheit]");
        assert_eq!(imperial.texts()[6], "[Wind Speed \u{1F32C}: 5 miles/hour]");
    }

    #[test]
    fn selected_fields_in_given_order() {
        let selectors =
            SelectorSet::new(vec![FieldSelector::Temperature, FieldSelector::Humidity], None);
        let report = format_report(&tokyo(), &selectors).expect("report");

        assert_eq!(
            report.texts(),
            vec!["[Temperature \u{1F321}: 20 Kelvin]", "[Humidity \u{1F4A7}: 60 %]"]
        );
        assert_eq!(report.lines()[0].color, LineColor::BrightYellow);
        assert_eq!(report.lines()[1].color, LineColor::Magenta);
    }

    #[test]
    fn repeated_selector_repeats_line() {
        let selectors = SelectorSet::new(
            vec![FieldSelector::Clouds, FieldSelector::Condition, FieldSelector::Clouds],
            Some(UnitSystem::Metric),
        );
        let report = format_report(&tokyo(), &selectors).expect("report");

        assert_eq!(
            report.texts(),
            vec![
                "[Clouds \u{2601}: 10 %]",
                "[Condition \u{2600}/\u{1F324}: Clear]",
                "[Clouds \u{2601}: 10 %]",
            ]
        );
    }

    #[test]
    fn metric_labels_for_selected_temperatures() {
        let selectors = SelectorSet::new(
            vec![FieldSelector::MinTemp, FieldSelector::WindSpeed],
            Some(UnitSystem::Metric),
        );
        let report = format_report(&tokyo(), &selectors).expect("report");

        assert_eq!(
            report.texts(),
            vec!["[Temp min \u{1F321}: 16.5 Celsius]", "[Wind Speed \u{1F32C}: 5 m/s]"]
        );
    }

    #[test]
    fn missing_field_is_an_error_only_when_needed() {
        let record = WeatherRecord { sea_level: None, ..tokyo() };

        let only_temp = SelectorSet::new(vec![FieldSelector::Temperature], None);
        assert!(format_report(&record, &only_temp).is_ok());

        assert_eq!(
            format_report(&record, &SelectorSet::default()),
            Err(FormatError::MissingField("main.sea_level"))
        );
    }

    #[test]
    fn missing_header_field_fails_full_report() {
        let record = WeatherRecord { country: None, ..tokyo() };

        assert_eq!(
            format_report(&record, &SelectorSet::default()),
            Err(FormatError::MissingField("sys.country"))
        );
    }

    #[test]
    fn every_field_has_a_distinct_label() {
        let mut labels: Vec<_> = FieldSelector::all().iter().map(|f| f.display().label).collect();
        labels.sort_unstable();
        labels.dedup();

        assert_eq!(labels.len(), FieldSelector::all().len());
    }
}
