#![forbid(unsafe_code)]

//! Delimited dataset loading.
//!
//! Reads a delimited text file fully into memory as a [`Table`], once per
//! session. The first record is the header and defines column names. Fields
//! follow RFC 4180 quoting: a field wrapped in double quotes may contain the
//! delimiter, newlines, and doubled (`""`) quote characters.
//!
//! # Type inference
//!
//! A column whose every non-empty cell parses as a number becomes a numeric
//! column; anything else stays text. Empty cells load as NaN in numeric
//! columns and as the empty string in text columns. Inference is a property
//! of the whole column, so one stray word demotes the column to text rather
//! than producing mixed types.
//!
//! # Failure Modes
//!
//! | Failure | Error |
//! |---------|-------|
//! | File does not exist | [`DataError::MissingDataset`] |
//! | Unreadable file | [`DataError::Io`] |
//! | No header record | [`DataError::EmptyDataset`] |
//! | Record arity differs from header | [`DataError::RaggedRow`] |
//! | Quote opened but never closed | [`DataError::UnterminatedQuote`] |

use std::fs;
use std::mem;
use std::path::Path;

use crate::error::{DataError, Result};
use crate::table::Table;
use crate::value::Value;

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter. Defaults to `,`.
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Load a delimited file into a [`Table`].
pub fn load_path(path: &Path, opts: &CsvOptions) -> Result<Table> {
    if !path.exists() {
        return Err(DataError::MissingDataset {
            path: path.to_path_buf(),
        });
    }
    let input = fs::read_to_string(path)?;
    build(&input, opts, path)
}

/// Load delimited text into a [`Table`].
pub fn load_str(input: &str, opts: &CsvOptions) -> Result<Table> {
    build(input, opts, Path::new("<memory>"))
}

fn build(input: &str, opts: &CsvOptions, origin: &Path) -> Result<Table> {
    let mut records = parse_records(input, opts.delimiter)?;
    if records.is_empty() {
        return Err(DataError::EmptyDataset {
            path: origin.to_path_buf(),
        });
    }
    let header = records.remove(0);
    let expected = header.len();
    for (i, record) in records.iter().enumerate() {
        if record.len() != expected {
            return Err(DataError::RaggedRow {
                row: i + 1,
                found: record.len(),
                expected,
            });
        }
    }

    // Column-wide numeric inference over non-empty cells.
    let numeric: Vec<bool> = (0..expected)
        .map(|col| {
            let mut any = false;
            for record in &records {
                let cell = record[col].trim();
                if cell.is_empty() {
                    continue;
                }
                if cell.parse::<f64>().is_err() {
                    return false;
                }
                any = true;
            }
            any
        })
        .collect();

    let rows = records
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .enumerate()
                .map(|(col, raw)| {
                    if numeric[col] {
                        let cell = raw.trim();
                        if cell.is_empty() {
                            Value::Num(f64::NAN)
                        } else {
                            // Inference already proved every non-empty cell
                            // in this column parses.
                            Value::Num(cell.parse::<f64>().unwrap_or(f64::NAN))
                        }
                    } else {
                        Value::Str(raw)
                    }
                })
                .collect()
        })
        .collect();

    Table::from_parts(header, rows)
}

/// Split raw input into records of unquoted field strings.
fn parse_records(input: &str, delimiter: char) -> Result<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_row = 0;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_row = records.len();
            }
            '\r' => {
                // Bare CR and CRLF both terminate the record.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                end_record(&mut records, &mut record, &mut field);
            }
            '\n' => end_record(&mut records, &mut record, &mut field),
            c if c == delimiter => record.push(mem::take(&mut field)),
            c => field.push(c),
        }
    }
    if in_quotes {
        return Err(DataError::UnterminatedQuote { row: quote_row });
    }
    // Final record may lack a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(mem::take(&mut field));
        records.push(record);
    }
    Ok(records)
}

fn end_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    // A blank line is not a record.
    if record.is_empty() && field.is_empty() {
        return;
    }
    record.push(mem::take(field));
    records.push(mem::take(record));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRIPS: &str = "\
tripduration,start station name,start station id
312,Grove St PATH,3186
98,Hamilton Park,3203
44,Grove St PATH,3186
";

    #[test]
    fn loads_header_and_rows() {
        let t = load_str(TRIPS, &CsvOptions::default()).unwrap();
        assert_eq!(
            t.columns(),
            ["tripduration", "start station name", "start station id"]
        );
        assert_eq!(t.row_count(), 3);
        assert_eq!(t.cell(0, 0), Some(&Value::Num(312.0)));
        assert_eq!(t.cell(1, 1), Some(&Value::Str("Hamilton Park".into())));
    }

    #[test]
    fn numeric_inference_is_column_wide() {
        let t = load_str("a,b\n1,2\nx,3\n", &CsvOptions::default()).unwrap();
        // Column `a` has a non-numeric cell, so the whole column is text.
        assert_eq!(t.cell(0, 0), Some(&Value::Str("1".into())));
        assert_eq!(t.cell(0, 1), Some(&Value::Num(2.0)));
    }

    #[test]
    fn empty_cell_in_numeric_column_is_nan() {
        let t = load_str("n\n1\n\u{20}\n2\n", &CsvOptions::default()).unwrap();
        assert_eq!(t.row_count(), 3);
        let v = t.cell(1, 0).unwrap();
        assert_eq!(v, &Value::Num(f64::NAN));
    }

    #[test]
    fn quoted_field_with_delimiter_and_newline() {
        let t = load_str(
            "name,note\n\"Grove St, PATH\",\"line one\nline two\"\n",
            &CsvOptions::default(),
        )
        .unwrap();
        assert_eq!(t.cell(0, 0), Some(&Value::Str("Grove St, PATH".into())));
        assert_eq!(t.cell(0, 1), Some(&Value::Str("line one\nline two".into())));
    }

    #[test]
    fn doubled_quotes_unescape() {
        let t = load_str("q\n\"say \"\"hi\"\"\"\n", &CsvOptions::default()).unwrap();
        assert_eq!(t.cell(0, 0), Some(&Value::Str("say \"hi\"".into())));
    }

    #[test]
    fn crlf_records() {
        let t = load_str("a,b\r\n1,2\r\n", &CsvOptions::default()).unwrap();
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.cell(0, 1), Some(&Value::Num(2.0)));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let t = load_str("a\n1\n\n2\n", &CsvOptions::default()).unwrap();
        assert_eq!(t.row_count(), 2);
    }

    #[test]
    fn ragged_row_reports_position() {
        let err = load_str("a,b\n1\n", &CsvOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            DataError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn empty_input_errors() {
        let err = load_str("", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { .. }));
    }

    #[test]
    fn unterminated_quote_errors() {
        let err = load_str("a\n\"open\n", &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::UnterminatedQuote { .. }));
    }

    #[test]
    fn missing_file_errors() {
        let err = load_path(Path::new("/nonexistent/trips.csv"), &CsvOptions::default())
            .unwrap_err();
        assert!(matches!(err, DataError::MissingDataset { .. }));
    }

    #[test]
    fn load_path_round_trip() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(TRIPS.as_bytes()).unwrap();
        let t = load_path(f.path(), &CsvOptions::default()).unwrap();
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn semicolon_delimiter() {
        let t = load_str("a;b\n1;2\n", &CsvOptions { delimiter: ';' }).unwrap();
        assert_eq!(t.cell(0, 1), Some(&Value::Num(2.0)));
    }
}
