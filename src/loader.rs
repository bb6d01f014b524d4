// Run loop: decode the input, validate every line, aggregate the good rows
// and report the bad ones.
use crate::aggregate::Aggregator;
use crate::encoding::read_decoded;
use crate::error::ProcResult;
use crate::output::{write_csv, write_entries};
use crate::processor::process_line;
use crate::resolver::SubdivisionTable;
use crate::types::{AggregationEntry, RunReport, UNKNOWN_COUNTRY};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Decode `input` and aggregate every valid line.
///
/// Each rejected line produces one `Error in line N: ...` message on
/// `diagnostics` and is otherwise ignored. Only decoding and I/O failures
/// end the run.
pub fn load_and_aggregate<R, D>(
    input: R,
    table: &SubdivisionTable,
    diagnostics: &mut D,
) -> ProcResult<(Vec<AggregationEntry>, RunReport)>
where
    R: Read,
    D: Write + ?Sized,
{
    let decoded = read_decoded(input)?;
    info!(encoding = decoded.encoding_name(), "decoded input");

    let mut agg = Aggregator::new();
    let mut report = RunReport {
        encoding: decoded.encoding_name().to_string(),
        ..RunReport::default()
    };

    for (idx, line) in decoded.lines().enumerate() {
        let line_no = idx + 1;
        report.total_lines += 1;
        match process_line(line, table) {
            Ok(row) => {
                if row.country == UNKNOWN_COUNTRY {
                    debug!(line_no, line, "subdivision not in table");
                    report.unknown_country_rows += 1;
                }
                agg.accumulate(&row);
                report.accepted_rows += 1;
            }
            Err(e) => {
                report.rejected_rows += 1;
                writeln!(diagnostics, "Error in line {}: {} [{}]", line_no, e, line)?;
            }
        }
    }

    let entries = agg.drain();
    report.output_rows = entries.len();
    info!(
        lines = report.total_lines,
        accepted = report.accepted_rows,
        rejected = report.rejected_rows,
        output_rows = report.output_rows,
        "aggregated input"
    );
    Ok((entries, report))
}

/// Full pipeline over in-memory or file streams.
pub fn run<R, W, D>(
    input: R,
    output: W,
    table: &SubdivisionTable,
    diagnostics: &mut D,
) -> ProcResult<(Vec<AggregationEntry>, RunReport)>
where
    R: Read,
    W: Write,
    D: Write + ?Sized,
{
    let (entries, report) = load_and_aggregate(input, table, diagnostics)?;
    write_entries(output, &entries)?;
    Ok((entries, report))
}

/// Process `input_path` into `output_path`.
///
/// The output file is only created once the input has been decoded, so an
/// encoding failure leaves no partial output behind.
pub fn process_file<D>(
    input_path: &Path,
    output_path: &Path,
    table: &SubdivisionTable,
    diagnostics: &mut D,
) -> ProcResult<(Vec<AggregationEntry>, RunReport)>
where
    D: Write + ?Sized,
{
    let input = File::open(input_path)?;
    let (entries, report) = load_and_aggregate(input, table, diagnostics)?;
    write_csv(output_path, &entries)?;
    info!(output = %output_path.display(), "wrote aggregated report");
    Ok((entries, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcError;

    fn run_str(input: &str) -> (String, String, RunReport) {
        let table = SubdivisionTable::builtin();
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let (_, report) = run(input.as_bytes(), &mut out, &table, &mut diag).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
            report,
        )
    }

    #[test]
    fn rows_for_same_country_and_day_are_merged() {
        let (out, diag, report) =
            run_str("01/02/2020,California,100,5%\n01/02/2020,Nevada,50,10%\n");
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["2020-01-02,USA,150,10"]);
        assert!(diag.is_empty());
        assert_eq!(report.accepted_rows, 2);
        assert_eq!(report.output_rows, 1);
    }

    #[test]
    fn invalid_row_is_reported_and_skipped() {
        let (out, diag, report) = run_str("13/40/2020,Texas,10,5%\n");
        assert!(out.is_empty());
        assert_eq!(diag.lines().count(), 1);
        assert!(diag.starts_with("Error in line 1: invalid date '13/40/2020'"));
        assert!(diag.contains("[13/40/2020,Texas,10,5%]"));
        assert_eq!(report.rejected_rows, 1);
        assert_eq!(report.accepted_rows, 0);
    }

    #[test]
    fn bad_lines_do_not_stop_the_run() {
        let input = "01/02/2020,Texas,10,5\n\
                     01/02/2020,Texas,-1,5%\n\
                     01/02/2020,Texas,10,10%\n\
                     garbage\n\
                     01/01/2020,Atlantis,20,50%\n";
        let (out, diag, report) = run_str(input);
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["2020-01-01,XXX,20,10", "2020-01-02,USA,10,1"]
        );
        let diag_lines: Vec<&str> = diag.lines().collect();
        assert_eq!(diag_lines.len(), 3);
        assert!(diag_lines[0].starts_with("Error in line 1:"));
        assert!(diag_lines[1].starts_with("Error in line 2:"));
        assert!(diag_lines[2].starts_with("Error in line 4: expected 4 columns, found 1"));
        assert_eq!(report.total_lines, 5);
        assert_eq!(report.unknown_country_rows, 1);
    }

    #[test]
    fn undecodable_input_aborts() {
        let table = SubdivisionTable::builtin();
        let mut diag = Vec::new();
        let err = load_and_aggregate(&b"\xff\xff\xff,\xfe"[..], &table, &mut diag).unwrap_err();
        assert!(matches!(err, ProcError::Encoding(_)));
    }

    #[test]
    fn encoding_failure_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, b"01/02/2020,Z\xfcrich,1,1%\n").unwrap();
        let mut diag = Vec::new();
        let err = process_file(&input, &output, &SubdivisionTable::builtin(), &mut diag);
        assert!(matches!(err, Err(ProcError::Encoding(_))));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("no_such_dir").join("out.csv");
        std::fs::write(&input, "01/02/2020,Texas,10,10%\n").unwrap();
        let mut diag = Vec::new();
        let err = process_file(&input, &output, &SubdivisionTable::builtin(), &mut diag);
        assert!(matches!(err, Err(ProcError::Io(_))));
    }
}
