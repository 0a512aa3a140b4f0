use std::error::Error;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

/// One CSV data line, addressed by header name.
///
/// Rows share their header. A row shorter than the header simply has no
/// value for the trailing columns; extra fields beyond the header are kept
/// but unreachable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    header: Arc<[String]>,
    values: Vec<String>,
}

impl RawRow {
    /// Build a standalone row from `(column, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            header: pairs.iter().map(|(k, _)| k.to_string()).collect(),
            values: pairs.iter().map(|(_, v)| v.to_string()).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.header
            .iter()
            .position(|name| name == column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    pub fn columns(&self) -> &[String] {
        &self.header
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The reader could not tokenize the text.
    Csv { line: Option<u64>, message: String },
    /// No header line (empty or whitespace-only text).
    MissingHeader,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Csv {
                line: Some(line),
                message,
            } => write!(f, "Malformed CSV at line {}: {}", line, message),
            ParseError::Csv { line: None, message } => write!(f, "Malformed CSV: {}", message),
            ParseError::MissingHeader => write!(f, "CSV has no header line"),
        }
    }
}

impl Error for ParseError {}

pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, ParseError> {
    parse_rows_from_reader(text.as_bytes())
}

/// Split delimited text into header-keyed rows. No value validation happens here.
pub fn parse_rows_from_reader<R: Read>(source: R) -> Result<Vec<RawRow>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut header: Option<Arc<[String]>> = None;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| ParseError::Csv {
            line: e.position().map(|pos| pos.line()),
            message: e.to_string(),
        })?;

        if record.iter().all(str::is_empty) {
            continue;
        }

        match &header {
            None => {
                header = Some(
                    record
                        .iter()
                        .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
                        .collect(),
                );
            }
            Some(names) => rows.push(RawRow {
                header: Arc::clone(names),
                values: record.iter().map(str::to_string).collect(),
            }),
        }
    }

    if header.is_none() {
        return Err(ParseError::MissingHeader);
    }
    Ok(rows)
}
