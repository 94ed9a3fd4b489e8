// src/table.rs
//
// Raw tabular input: one header row plus string cells. The schedule and
// ratings normalizers read from this shape and nothing else, so the source
// (local CSV, TSV export, pasted text) is irrelevant past this point.
use std::{fs::File, io, path::Path};

use crate::core::sanitize::normalize_header;
use crate::error::{DataFormatError, LoadError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build from string literals. Mostly for tests and fixtures.
    pub fn from_cells(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| s!(*c)).collect())
                .collect(),
        }
    }

    pub fn from_reader<R: io::Read>(
        table: &'static str,
        reader: R,
        delim: u8,
    ) -> Result<Self, DataFormatError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delim)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let csv_err = |e: csv::Error| DataFormatError::Csv { table, message: e.to_string() };

        let headers = rdr
            .headers()
            .map_err(csv_err)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(csv_err)?;
            if record.iter().all(str::is_empty) { continue; }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Parse in-memory text; tab-delimited if the header line has tabs but no commas.
    pub fn parse(table: &'static str, text: &str) -> Result<Self, DataFormatError> {
        Self::from_reader(table, text.as_bytes(), sniff_delim(text))
    }

    pub fn from_path(table: &'static str, path: &Path) -> Result<Self, LoadError> {
        let io_err = |source: io::Error| LoadError::Io { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(io_err)?;
        let table = Self::from_reader(table, io::BufReader::new(file), delim_for(path))?;
        logd!("Table: {} -> {} rows, {} columns", path.display(), table.rows.len(), table.headers.len());
        Ok(table)
    }

    /// Column index by canonical (title-cased) name.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers.iter().position(|h| normalize_header(h) == wanted)
    }

    /// First matching column among `names`.
    pub fn column_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.column(n))
    }

    pub fn require_column(&self, table: &'static str, name: &str) -> Result<usize, DataFormatError> {
        self.column(name).ok_or_else(|| DataFormatError::MissingColumn {
            table,
            column: normalize_header(name),
        })
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Cell text, or "" for short rows.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.as_str()).unwrap_or("")
}

/// `.tsv`/`.tab` files are tab-delimited; everything else is comma-delimited.
pub fn delim_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    }
}

pub fn sniff_delim(text: &str) -> u8 {
    let first = text.lines().next().unwrap_or("");
    if first.contains('\t') && !first.contains(',') { b'\t' } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_cells_and_skips_blank_lines() {
        let t = RawTable::parse("schedule", "Date,Home Team,Away Team\n\n21/10/2025,\"Lakers, LA\",Warriors\n").unwrap();
        assert_eq!(t.headers, vec!["Date", "Home Team", "Away Team"]);
        assert_eq!(t.rows, vec![vec!["21/10/2025", "Lakers, LA", "Warriors"]]);
    }

    #[test]
    fn tab_separated_text_is_detected() {
        let t = RawTable::parse("ratings", "Team\tTier\nBulls\tPushover\n").unwrap();
        assert_eq!(t.rows[0], vec!["Bulls", "Pushover"]);
    }

    #[test]
    fn column_lookup_ignores_case_and_spacing() {
        let t = RawTable::from_cells(&[" date ", "HOME TEAM", "away team"], &[]);
        assert_eq!(t.column("Date"), Some(0));
        assert_eq!(t.column("Home Team"), Some(1));
        assert_eq!(t.column("away  team"), Some(2));
        assert_eq!(t.column("Venue"), None);
    }

    #[test]
    fn missing_column_names_canonical_form() {
        let t = RawTable::from_cells(&["Home Team"], &[]);
        let err = t.require_column("schedule", "date").unwrap_err();
        assert_eq!(err.to_string(), "schedule: column 'Date' not found");
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let row = vec![s!("x")];
        assert_eq!(cell(&row, 0), "x");
        assert_eq!(cell(&row, 3), "");
    }
}
