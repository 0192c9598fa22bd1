//! Parsing and display of show start times.

use chrono::NaiveDateTime;

use crate::error::CoreError;
use crate::types::ShowTime;

/// Canonical wire format for start times (`2019-05-21 21:30:00`).
pub const SHOW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Additional formats accepted on input, tried in order after the canonical one.
const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a user-supplied start time.
///
/// Surrounding whitespace is ignored. Fractional seconds are accepted on
/// the ISO forms.
pub fn parse_start_time(input: &str) -> Result<ShowTime, CoreError> {
    let trimmed = input.trim();

    std::iter::once(SHOW_TIME_FORMAT)
        .chain(ACCEPTED_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| trimmed.parse::<NaiveDateTime>().ok())
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid start_time '{trimmed}': expected YYYY-MM-DD HH:MM:SS"
            ))
        })
}

/// Render a start time in the canonical wire format.
pub fn to_wire(time: ShowTime) -> String {
    time.format(SHOW_TIME_FORMAT).to_string()
}

/// Serialize a start time in the canonical wire format.
///
/// For use with `#[serde(serialize_with = "...")]`.
pub fn serialize_wire<S: serde::Serializer>(
    time: &ShowTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_wire(*time))
}

/// Human-readable display styles for start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl DisplayFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

impl std::str::FromStr for DisplayFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "medium" => Ok(Self::Medium),
            other => Err(CoreError::Validation(format!(
                "Unknown display format '{other}'"
            ))),
        }
    }
}

/// Format a start time for display.
pub fn format_show_time(time: ShowTime, format: DisplayFormat) -> String {
    time.format(format.pattern()).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn may_21_2130() -> ShowTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn parses_form_format() {
        assert_eq!(parse_start_time("2019-05-21 21:30:00").unwrap(), may_21_2130());
    }

    #[test]
    fn parses_iso_formats() {
        assert_eq!(parse_start_time("2019-05-21T21:30:00").unwrap(), may_21_2130());
        assert_eq!(parse_start_time("2019-05-21T21:30").unwrap(), may_21_2130());
        assert_eq!(parse_start_time("2019-05-21 21:30").unwrap(), may_21_2130());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_start_time("  2019-05-21 21:30:00\n").unwrap(), may_21_2130());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_start_time("next tuesday").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_date_only() {
        assert!(parse_start_time("2019-05-21").is_err());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(parse_start_time("2019-13-01 10:00:00").is_err());
        assert!(parse_start_time("2019-05-21 25:00:00").is_err());
    }

    #[test]
    fn wire_format_round_trips_through_parse() {
        let wire = to_wire(may_21_2130());
        assert_eq!(wire, "2019-05-21 21:30:00");
        assert_eq!(parse_start_time(&wire).unwrap(), may_21_2130());
    }

    #[test]
    fn full_display() {
        assert_eq!(
            format_show_time(may_21_2130(), DisplayFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn medium_display() {
        assert_eq!(
            format_show_time(may_21_2130(), DisplayFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn display_format_from_str() {
        assert_eq!("full".parse::<DisplayFormat>().unwrap(), DisplayFormat::Full);
        assert_eq!("medium".parse::<DisplayFormat>().unwrap(), DisplayFormat::Medium);
        assert!("short".parse::<DisplayFormat>().is_err());
    }
}
