use crate::error::ProcResult;
use crate::types::AggregationEntry;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

#[cfg(windows)]
const LINE_TERMINATOR: csv::Terminator = csv::Terminator::CRLF;
#[cfg(not(windows))]
const LINE_TERMINATOR: csv::Terminator = csv::Terminator::Any(b'\n');

/// Write aggregated entries as header-less CSV: `YYYY-MM-DD,CCC,impressions,clicks`.
pub fn write_entries<W: Write>(dest: W, entries: &[AggregationEntry]) -> ProcResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(LINE_TERMINATOR)
        .from_writer(dest);
    for e in entries {
        wtr.serialize(e)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, entries: &[AggregationEntry]) -> ProcResult<()> {
    let file = File::create(path)?;
    write_entries(BufWriter::new(file), entries)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> ProcResult<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Markdown table of the first `max_rows` rows, or `None` when there is nothing to show.
pub fn render_preview<T>(rows: &[T], max_rows: usize) -> Option<String>
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return None;
    }
    Some(Table::new(slice).with(Style::markdown()).to_string())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    match render_preview(rows, max_rows) {
        Some(table_str) => println!("{}\n", table_str),
        None => println!("(no rows)\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entries() -> Vec<AggregationEntry> {
        vec![
            AggregationEntry {
                date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                country: "USA",
                impressions: 150,
                clicks: 10,
            },
            AggregationEntry {
                date: NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
                country: "XXX",
                impressions: 7,
                clicks: 0,
            },
        ]
    }

    #[test]
    fn csv_has_fixed_columns_and_no_header() {
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["2020-01-02,USA,150,10", "2020-01-03,XXX,7,0"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn lines_end_with_newline() {
        let mut buf = Vec::new();
        write_entries(&mut buf, &entries()).unwrap();
        assert_eq!(buf, b"2020-01-02,USA,150,10\n2020-01-03,XXX,7,0\n");
    }

    #[test]
    fn empty_input_writes_empty_file() {
        let mut buf = Vec::new();
        write_entries(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn preview_is_limited_to_max_rows() {
        let table = render_preview(&entries(), 1).unwrap();
        assert!(table.contains("| Date"));
        assert!(table.contains("USA"));
        assert!(!table.contains("XXX"));
        assert!(render_preview::<AggregationEntry>(&[], 5).is_none());
        assert!(render_preview(&entries(), 0).is_none());
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_csv(&path, &entries()).is_err());
    }
}
