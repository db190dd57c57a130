// Copyright © 2025 Akira Miyakoda
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum QueryError {
    #[error("Not all request params specified.")]
    MissingParams,
    #[error("Latitude or Longitude are not valid numbers.")]
    InvalidCoordinates,
    #[error("Invalid date. Please specify a date in valid ISO format.")]
    InvalidDate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ParsedQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub date: DateTime<Utc>,
}

impl ParsedQuery {
    pub(crate) fn parse(
        lat: Option<&str>,
        lng: Option<&str>,
        date: Option<&str>,
    ) -> Result<Self, QueryError> {
        let (Some(lat), Some(lng), Some(date)) = (lat, lng, date) else {
            return Err(QueryError::MissingParams);
        };

        let latitude = coordinate(lat).ok_or(QueryError::InvalidCoordinates)?;
        let longitude = coordinate(lng).ok_or(QueryError::InvalidCoordinates)?;
        let date = instant(date).ok_or(QueryError::InvalidDate)?;

        Ok(Self {
            latitude,
            longitude,
            date,
        })
    }
}

// Out-of-range coordinates are accepted as-is and passed through to the
// astronomical library.
fn coordinate(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    // A bare date means midnight UTC.
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn rejects_missing_params() {
        for (lat, lng, date) in [
            (None, Some("-0.12"), Some("2023-06-21")),
            (Some("51.5"), None, Some("2023-06-21")),
            (Some("51.5"), Some("-0.12"), None),
            (None, None, None),
        ] {
            let err = ParsedQuery::parse(lat, lng, date).unwrap_err();
            assert_eq!(err, QueryError::MissingParams);
        }

        assert_eq!(
            QueryError::MissingParams.to_string(),
            "Not all request params specified."
        );
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        for (lat, lng) in [("abc", "-0.12"), ("51.5", "abc"), ("", "-0.12")] {
            let err = ParsedQuery::parse(Some(lat), Some(lng), Some("2023-06-21")).unwrap_err();
            assert_eq!(err, QueryError::InvalidCoordinates);
        }

        assert_eq!(
            QueryError::InvalidCoordinates.to_string(),
            "Latitude or Longitude are not valid numbers."
        );
    }

    #[test]
    fn rejects_nan_coordinates() {
        let err = ParsedQuery::parse(Some("NaN"), Some("-0.12"), Some("2023-06-21")).unwrap_err();
        assert_eq!(err, QueryError::InvalidCoordinates);
    }

    #[test]
    fn accepts_out_of_range_coordinates() {
        let query = ParsedQuery::parse(Some("500"), Some("-200.5"), Some("2023-06-21")).unwrap();

        assert_eq!(query.latitude, 500.0);
        assert_eq!(query.longitude, -200.5);
    }

    #[test]
    fn rejects_unparseable_dates() {
        for date in ["not-a-date", "2023-13-45", "21/06/2023"] {
            let err = ParsedQuery::parse(Some("51.5"), Some("-0.12"), Some(date)).unwrap_err();
            assert_eq!(err, QueryError::InvalidDate);
        }

        assert_eq!(
            QueryError::InvalidDate.to_string(),
            "Invalid date. Please specify a date in valid ISO format."
        );
    }

    #[test]
    fn parses_bare_dates_as_midnight_utc() {
        let query = ParsedQuery::parse(Some("51.5"), Some("-0.12"), Some("2023-06-21")).unwrap();

        assert_eq!(query.latitude, 51.5);
        assert_eq!(query.longitude, -0.12);
        assert_eq!(
            query.date,
            Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parses_full_timestamps() {
        let query =
            ParsedQuery::parse(Some("51.5"), Some("-0.12"), Some("2023-06-21T12:30:00Z")).unwrap();

        assert_eq!(
            query.date,
            Utc.with_ymd_and_hms(2023, 6, 21, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn normalizes_offset_timestamps_to_utc() {
        let query = ParsedQuery::parse(
            Some("51.5"),
            Some("-0.12"),
            Some("2023-06-21T14:30:00+02:00"),
        )
        .unwrap();

        assert_eq!(
            query.date,
            Utc.with_ymd_and_hms(2023, 6, 21, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn checks_gates_in_order() {
        let err = ParsedQuery::parse(None, Some("abc"), Some("not-a-date")).unwrap_err();
        assert_eq!(err, QueryError::MissingParams);

        let err = ParsedQuery::parse(Some("abc"), Some("-0.12"), Some("not-a-date")).unwrap_err();
        assert_eq!(err, QueryError::InvalidCoordinates);
    }
}
