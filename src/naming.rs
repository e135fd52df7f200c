//! Object naming for archived weather data.
//!
//! Storage keys are derived deterministically from the query tuple so that
//! identical queries overwrite each other instead of accumulating copies.

use chrono::NaiveDate;

/// Every archived object carries this prefix; the listing endpoint filters on it.
pub const WEATHER_PREFIX: &str = "weather_";

/// Derive the storage key for a coordinate and date range.
///
/// Coordinates are fixed to two decimal places with the decimal point
/// replaced by an underscore, dates lose their hyphens:
/// `(52.52, 13.41, "2023-03-01", "2023-03-03")` becomes
/// `weather_lat52_52_lon13_41_from20230301_to20230303.json`.
pub fn storage_key(latitude: f64, longitude: f64, start_date: &str, end_date: &str) -> String {
    let lat = format!("{:.2}", latitude).replace('.', "_");
    let lon = format!("{:.2}", longitude).replace('.', "_");
    let from = start_date.replace('-', "");
    let to = end_date.replace('-', "");
    format!("weather_lat{}_lon{}_from{}_to{}.json", lat, lon, from, to)
}

/// Check that a date string is a real calendar date in zero-padded
/// `YYYY-MM-DD` form.
///
/// The length check is load-bearing: chrono's `%Y-%m-%d` would also accept
/// unpadded forms like `2023-3-1`.
pub fn is_valid_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_storage_key_reference_value() {
        assert_eq!(
            storage_key(52.52, 13.41, "2023-03-01", "2023-03-03"),
            "weather_lat52_52_lon13_41_from20230301_to20230303.json"
        );
    }

    #[test]
    fn test_storage_key_is_deterministic() {
        let first = storage_key(48.8566, 2.3522, "2022-01-01", "2022-01-31");
        let second = storage_key(48.8566, 2.3522, "2022-01-01", "2022-01-31");
        assert_eq!(first, second);
    }

    #[test]
    fn test_storage_key_pads_coordinates_to_two_decimals() {
        assert_eq!(
            storage_key(13.4, -8.0, "2023-03-01", "2023-03-03"),
            "weather_lat13_40_lon-8_00_from20230301_to20230303.json"
        );
    }

    #[test]
    fn test_storage_key_rounds_excess_precision() {
        assert_eq!(
            storage_key(48.8566, 2.3522, "2022-01-01", "2022-01-31"),
            "weather_lat48_86_lon2_35_from20220101_to20220131.json"
        );
    }

    #[test]
    fn test_valid_dates_accepted() {
        assert!(is_valid_date("2023-03-01"));
        assert!(is_valid_date("2000-02-29")); // leap day
        assert!(is_valid_date("1999-12-31"));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(!is_valid_date("2023-15-01")); // no month 15
        assert!(!is_valid_date("2023-02-30")); // no Feb 30
        assert!(!is_valid_date("01-03-2023")); // wrong field order
        assert!(!is_valid_date("2023/03/01")); // wrong separator
        assert!(!is_valid_date("2023-3-01")); // unpadded month
        assert!(!is_valid_date("2023-03-1")); // unpadded day
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("not-a-date"));
    }
}
