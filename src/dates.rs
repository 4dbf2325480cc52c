//! The date format shared by form fields, query strings and the table views.

use serde::{Deserialize, Deserializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The format dates take in form fields and query strings, the same format
/// HTML date inputs submit.
pub(crate) const DATE_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]");

/// `date` formatted for a date input's value attribute or a table cell.
pub(crate) fn date_input_value(date: Date) -> String {
    date.format(&DATE_INPUT_FORMAT).unwrap_or_default()
}

/// Date inputs submit an empty string when cleared, treat that as unset.
pub(crate) fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(text) => Date::parse(text, DATE_INPUT_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod dates_tests {
    use time::macros::date;

    use super::date_input_value;

    #[test]
    fn formats_as_iso_date() {
        assert_eq!(date_input_value(date!(2024 - 01 - 05)), "2024-01-05");
    }
}
