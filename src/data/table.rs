use crate::error::ExtractError;

// ---------------------------------------------------------------------------
// RawTable – header-indexed row set
// ---------------------------------------------------------------------------

/// The payload as delivered: a header row plus zero or more data rows.
///
/// Rows are kept exactly as split; a malformed line may be shorter than the
/// header, so consumers index with [`string_cell`] / [`numeric_cell`] rather
/// than assuming rectangularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the first non-empty line, in payload order.
    pub headers: Vec<String>,
    /// One entry per non-empty data line, split on the field delimiter.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse the raw delimited payload into a [`RawTable`].
///
/// The first line that is non-empty after trimming becomes the header row;
/// every later non-empty line becomes a data row. Whitespace-only lines are
/// skipped entirely. A trailing `\r` is stripped per line so CRLF payloads
/// parse the same as LF ones.
///
/// Quoted fields are NOT interpreted here: a cell keeps any literal `"`
/// characters, and whichever component reads it as a string strips them
/// (see [`string_cell`]).
///
/// Fails only when the payload has zero non-empty lines. A header with no
/// data rows is a valid empty table.
pub fn parse(raw_text: &str) -> Result<RawTable, ExtractError> {
    let mut lines = raw_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(ExtractError::EmptyPayload)?;
    let headers = split_fields(header_line);
    let rows: Vec<Vec<String>> = lines.map(split_fields).collect();

    Ok(RawTable { headers, rows })
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Cell consumption helpers
// ---------------------------------------------------------------------------

/// Read a string-typed cell.
///
/// Applies the single pass of literal double-quote stripping; a missing cell
/// (short row) reads as the empty string.
pub fn string_cell(row: &[String], index: usize) -> String {
    row.get(index)
        .map(|cell| cell.replace('"', ""))
        .unwrap_or_default()
}

/// Read a numeric cell.
///
/// Missing, empty, and unparsable cells all collapse to `0.0`. This makes a
/// malformed cell indistinguishable from a legitimately-zero value, which is
/// the compatibility policy of the producing system: aggregation never
/// aborts mid-table over partial data.
pub fn numeric_cell(row: &[String], index: usize) -> f64 {
    row.get(index)
        .and_then(|cell| cell.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
