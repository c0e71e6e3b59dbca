use std::{fs, io, mem, path::Path, str::FromStr};

use logos::Logos;
use tracing::{debug, error, warn};

use crate::{LoadError, Reading, WeatherDataset, WeatherRecord};

#[derive(Logos, Debug, PartialEq)]
enum Token {
    #[token(",")]
    Comma,
    #[regex(r"\r?\n")]
    LineBreak,
    // Only a field's first character can open a quote, a later `"` is
    // swallowed by `Bare`. Quoted fields may span lines.
    #[regex(r#""([^"]|"")*""#, |lex| unquote(lex.slice()))]
    Quoted(String),
    #[regex(r#"[^,"\r\n][^,\r\n]*"#, |lex| lex.slice().to_owned())]
    Bare(String),
}

fn unquote(slice: &str) -> String {
    slice[1..slice.len() - 1].replace("\"\"", "\"")
}

#[derive(Debug)]
struct Row {
    line: usize,
    fields: Vec<String>,
}

/// Splits CSV text into rows. Blank lines are dropped and lines the lexer
/// chokes on are logged and dropped.
fn rows(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut lexer = Token::lexer(text);

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut row_line = 1;
    // a line holding only a line break is not a row
    let mut touched = false;
    let mut broken = false;

    while let Some(token) = lexer.next() {
        if !touched && !broken {
            row_line = line;
        }
        match token {
            Ok(Token::Quoted(value)) | Ok(Token::Bare(value)) => {
                field.push_str(&value);
                touched = true;
            }
            Ok(Token::Comma) => {
                fields.push(mem::take(&mut field));
                touched = true;
            }
            Ok(Token::LineBreak) => {
                if broken {
                    warn!(line = row_line, "skipping malformed line");
                } else if touched {
                    fields.push(mem::take(&mut field));
                    rows.push(Row {
                        line: row_line,
                        fields: mem::take(&mut fields),
                    });
                }
                fields.clear();
                field.clear();
                touched = false;
                broken = false;
            }
            Err(()) => broken = true,
        }
        line += lexer.slice().matches('\n').count();
    }

    if broken {
        warn!(line = row_line, "skipping malformed line");
    } else if touched {
        fields.push(field);
        rows.push(Row {
            line: row_line,
            fields,
        });
    }

    rows
}

impl WeatherRecord {
    fn from_row(row: Row) -> Option<Self> {
        let mut fields = row.fields.into_iter();
        let date = fields.next()?;
        let readings = fields
            .filter_map(|value| match value.trim().parse::<i64>() {
                Ok(n) => Some(Reading::Number(n as f64)),
                Err(_) => {
                    warn!(
                        line = row.line,
                        "'{value}' could not be converted to integer and will be skipped"
                    );
                    None
                }
            })
            .collect();
        Some(Self { date, readings })
    }
}

impl FromStr for WeatherDataset {
    type Err = LoadError;

    /// Reads CSV text. The first row is a header, the first field of every
    /// other row is its date and the remaining fields are integer readings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = rows(s).into_iter();
        rows.next().ok_or(LoadError::MissingHeader)?;

        let records = rows.filter_map(WeatherRecord::from_row).collect();
        Ok(Self { records })
    }
}

/// Reads a CSV file of weather records.
pub fn try_load_data_from_csv(path: impl AsRef<Path>) -> Result<WeatherDataset, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset: WeatherDataset = text.parse()?;
    debug!(
        path = %path.display(),
        records = dataset.records.len(),
        "loaded weather data"
    );
    Ok(dataset)
}

/// Same as [`try_load_data_from_csv`] but a file that can't be loaded is
/// logged and gives an empty dataset.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Vec<WeatherRecord> {
    match try_load_data_from_csv(path) {
        Ok(dataset) => dataset.records,
        Err(e) => {
            error!(error = ?e, "{e}");
            Vec::new()
        }
    }
}
