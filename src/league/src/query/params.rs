use chrono::NaiveDate;
use log::debug;
use std::str::FromStr;

/// Values that select every row.
const MATCH_ALL: &[&str] = &["todos", "all"];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a raw query value into a filter value.
///
/// Missing, blank, "all" and unparseable values all mean "no filter".
pub fn lenient<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty())?;

    if MATCH_ALL.iter().any(|all| all.eq_ignore_ascii_case(value)) {
        return None;
    }

    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("ignoring invalid '{}' filter value: {}", name, value);
            None
        }
    }
}

pub fn lenient_date(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty())?;

    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            debug!("ignoring invalid '{}' date value: {}", name, value);
            None
        }
    }
}
