//! Field-level conversions shared by every form.

use core::str::FromStr;

use chrono::NaiveDate;

use assetdesk_core::{DomainError, DomainResult, coerce_amount};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-blank text, trimmed.
pub(crate) fn required(field: &'static str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing_field(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn optional(value: &str) -> String {
    value.trim().to_string()
}

pub(crate) fn required_date(field: &'static str, value: &str) -> DomainResult<NaiveDate> {
    let text = required(field, value)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT)
        .map_err(|e| DomainError::validation(format!("{field}: expected YYYY-MM-DD ({e})")))
}

/// Presence is required; the content is coerced, never rejected.
pub(crate) fn required_amount(field: &'static str, value: &str) -> DomainResult<f64> {
    let text = required(field, value)?;
    Ok(coerce_amount(&text))
}

/// Label-matched enum; blank selects the form default.
pub(crate) fn label_or_default<T>(value: &str) -> DomainResult<T>
where
    T: FromStr<Err = DomainError> + Default,
{
    if value.trim().is_empty() {
        return Ok(T::default());
    }
    value.parse()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
