use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

use crate::SummaryError;

/// Converts an ISO formatted timestamp into a human-readable date like
/// `Tuesday 06 July 2021`.
///
/// The date is the one local to the timestamp's offset. Time of day and offset
/// are dropped.
pub fn convert_date(iso_string: &str) -> Result<String, SummaryError> {
    let timestamp =
        OffsetDateTime::parse(iso_string, &Rfc3339).map_err(|source| SummaryError::DateParse {
            input: iso_string.to_string(),
            source,
        })?;

    let readable = format_description!("[weekday repr:long] [day] [month repr:long] [year]");
    Ok(timestamp.date().format(readable)?)
}
