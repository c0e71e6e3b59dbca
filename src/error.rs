use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SummaryError {
    #[error("The list of weather data cannot be empty")]
    #[diagnostic(code(meteo::empty_input))]
    EmptyInput,
    #[error("No valid numeric data found in the list")]
    #[diagnostic(
        code(meteo::no_valid_data),
        help("every value in the series failed to parse as a number")
    )]
    NoValidData,
    #[error("`{value}` is not a number")]
    #[diagnostic(code(meteo::coercion))]
    Coercion { value: String },
    #[error("Bad timestamp `{input}`")]
    #[diagnostic(
        code(meteo::date_parse),
        help("expected something like 2021-07-06T07:00:00+08:00")
    )]
    DateParse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error(transparent)]
    #[diagnostic(code(meteo::date_format))]
    DateFormat(#[from] time::error::Format),
    #[error("Record of `{date}` has no reading at position {position}")]
    #[diagnostic(code(meteo::missing_reading))]
    MissingReading { date: String, position: usize },
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("The file '{}' was not found", .path.display())]
    #[diagnostic(code(meteo::load::not_found))]
    NotFound { path: PathBuf },
    #[error("Could not read '{}'", .path.display())]
    #[diagnostic(code(meteo::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing header row")]
    #[diagnostic(code(meteo::load::missing_header))]
    MissingHeader,
}
