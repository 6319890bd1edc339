//! Catalog helpers.
//!
//! The backend names processed videos `<name>_<YYYYMMDD>_<HHMMSS>_<id>.mp4`;
//! the catalog view shows the embedded stamp as the processing time.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors from filename timestamp extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no processing timestamp in filename: {0}")]
    MissingTimestamp(String),

    #[error("invalid processing timestamp in filename: {0}")]
    InvalidTimestamp(String),
}

/// Extract the processing timestamp embedded in a processed-video filename.
///
/// Looks for an underscore-delimited `_YYYYMMDD_HHMMSS_` stamp and parses it
/// as a naive local datetime. The trailing underscore is part of the naming
/// scheme; a stamp at the very end of the filename does not count.
pub fn processed_at_from_filename(filename: &str) -> Result<NaiveDateTime, CatalogError> {
    let parts: Vec<&str> = filename.split('_').collect();

    for i in 0..parts.len() {
        // Need a segment after the time part, so the stamp ends in '_'.
        if i + 2 >= parts.len() {
            break;
        }
        let (date, time) = (parts[i], parts[i + 1]);
        if date.len() == 8
            && time.len() == 6
            && date.bytes().all(|b| b.is_ascii_digit())
            && time.bytes().all(|b| b.is_ascii_digit())
        {
            let stamp = format!("{date}{time}");
            return NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S")
                .map_err(|_| CatalogError::InvalidTimestamp(filename.to_string()));
        }
    }

    Err(CatalogError::MissingTimestamp(filename.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_extract_processed_at() {
        let dt = processed_at_from_filename("demo_20240315_142530_ab12.mp4").unwrap();
        assert_eq!(
            dt.date(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (14, 25, 30));
    }

    #[test]
    fn test_missing_stamp() {
        assert_eq!(
            processed_at_from_filename("holiday_clip.mp4"),
            Err(CatalogError::MissingTimestamp("holiday_clip.mp4".into()))
        );
    }

    #[test]
    fn test_stamp_requires_trailing_underscore() {
        // Stamp at the very end of the name is not the backend's scheme.
        assert!(matches!(
            processed_at_from_filename("demo_20240315_142530"),
            Err(CatalogError::MissingTimestamp(_))
        ));
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert!(matches!(
            processed_at_from_filename("demo_20241340_142530_x.mp4"),
            Err(CatalogError::InvalidTimestamp(_))
        ));
    }
}
