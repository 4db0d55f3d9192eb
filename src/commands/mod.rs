pub mod show;

use anyhow::{bail, Context, Result};

use crate::locale::BuiltinLocale;
use crate::types::DateParts;

/// Parse an optional date string into raw date parts
///
/// Accepts YYYY-MM-DD or YYYY-MM (day 1). Only the shape is checked here: a
/// well-formed but impossible date such as 2023-02-30 is passed through and
/// the calendar falls back to today. Returns None when no date is given.
pub fn parse_date_parts(date: Option<&str>) -> Result<Option<DateParts>> {
    let Some(date_str) = date else {
        return Ok(None);
    };

    let parts: Vec<&str> = date_str.trim().split('-').collect();
    let (year, month, day) = match parts.as_slice() {
        [y, m, d] => (*y, *m, *d),
        [y, m] => (*y, *m, "1"),
        _ => bail!("Invalid date format '{}'. Use YYYY-MM-DD or YYYY-MM", date_str),
    };

    let year = year
        .parse::<i32>()
        .with_context(|| format!("Invalid year in '{}'", date_str))?;
    let month = month
        .parse::<u32>()
        .with_context(|| format!("Invalid month in '{}'", date_str))?;
    let day = day
        .parse::<u32>()
        .with_context(|| format!("Invalid day in '{}'", date_str))?;

    Ok(Some(DateParts::new(year, month, day)))
}

/// Resolve the label locale: an explicit code, or the environment when empty
pub fn resolve_locale(code: &str) -> Result<BuiltinLocale> {
    if code.trim().is_empty() {
        return Ok(BuiltinLocale::from_env());
    }
    BuiltinLocale::new(code).with_context(|| {
        format!(
            "Unsupported locale '{}'. Available: {}",
            code,
            crate::locale::available_locales().join(", ")
        )
    })
}
