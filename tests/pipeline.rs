//! End-to-end pipeline tests over real files.

use std::fs;
use std::path::Path;

use proccsv::loader::process_file;
use proccsv::{ProcError, SubdivisionTable};
use tempfile::tempdir;

fn utf16le_with_bom(s: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    out.extend(s.encode_utf16().flat_map(|u| u.to_le_bytes()));
    out
}

fn process(input: &[u8], dir: &Path, name: &str) -> (String, String) {
    let in_path = dir.join(format!("{name}.csv"));
    let out_path = dir.join(format!("{name}_processed.csv"));
    fs::write(&in_path, input).unwrap();
    let mut diag = Vec::new();
    process_file(&in_path, &out_path, &SubdivisionTable::builtin(), &mut diag).unwrap();
    (
        fs::read_to_string(&out_path).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

const REPORT: &str = "\
01/03/2020,Ontario,200,1.5%
01/02/2020,California,100,5%
01/02/2020,Nevada,50,10%
01/02/2020,Bayern,40,25%
01/02/2020,Atlantis,10,10%
01/03/2020,Quebec,100,0.5%
13/40/2020,Texas,10,5%
01/02/2020,Texas,10,5
01/02/2020,Texas,-3,5%
";

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn report_is_aggregated_and_sorted() {
    let dir = tempdir().unwrap();
    let (out, diag) = process(REPORT.as_bytes(), dir.path(), "report");
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "2020-01-02,DEU,40,10",
            "2020-01-02,USA,150,10",
            "2020-01-02,XXX,10,1",
            // 200 * 1.5% = 3, 100 * 0.5% = 0.5 -> 0 (half to even)
            "2020-01-03,CAN,300,3",
        ]
    );
    let diag: Vec<&str> = diag.lines().collect();
    assert_eq!(diag.len(), 3);
    assert!(diag[0].starts_with("Error in line 7: invalid date"));
    assert!(diag[1].starts_with("Error in line 8: invalid ctr"));
    assert!(diag[2].starts_with("Error in line 9: invalid impressions"));
}

#[test]
fn subdivisions_worldwide_resolve_to_their_country() {
    let dir = tempdir().unwrap();
    let input = "\
01/02/2020,Moskva,10,50%
01/02/2020,Lagos,10,50%
01/02/2020,İstanbul,10,50%
01/02/2020,Seoul-teukbyeolsi,10,50%
01/02/2020,Jawa Barat,10,50%
";
    let (out, diag) = process(input.as_bytes(), dir.path(), "world");
    assert!(diag.is_empty());
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "2020-01-02,IDN,10,5",
            "2020-01-02,KOR,10,5",
            "2020-01-02,NGA,10,5",
            "2020-01-02,RUS,10,5",
            "2020-01-02,TUR,10,5",
        ]
    );
}

#[test]
fn only_invalid_rows_gives_empty_output() {
    let dir = tempdir().unwrap();
    let (out, diag) = process(b"13/40/2020,Texas,10,5%\n", dir.path(), "bad");
    assert!(out.is_empty());
    assert_eq!(diag.lines().count(), 1);
}

// ============================================================================
// Encoding and determinism
// ============================================================================

#[test]
fn utf16_input_gives_same_output_as_utf8() {
    let dir = tempdir().unwrap();
    let (out8, diag8) = process(REPORT.as_bytes(), dir.path(), "u8");
    let (out16, diag16) = process(&utf16le_with_bom(REPORT), dir.path(), "u16");
    assert_eq!(out8, out16);
    assert_eq!(diag8, diag16);
}

#[test]
fn identical_input_gives_identical_bytes() {
    let dir = tempdir().unwrap();
    let (a, _) = process(REPORT.as_bytes(), dir.path(), "first");
    let (b, _) = process(REPORT.as_bytes(), dir.path(), "second");
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn crlf_input_is_accepted() {
    let dir = tempdir().unwrap();
    let input = REPORT.replace('\n', "\r\n");
    let (crlf, _) = process(input.as_bytes(), dir.path(), "crlf");
    let (lf, _) = process(REPORT.as_bytes(), dir.path(), "lf");
    assert_eq!(crlf, lf);
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn undecodable_file_is_fatal() {
    let dir = tempdir().unwrap();
    let in_path = dir.path().join("latin1.csv");
    fs::write(&in_path, b"01/02/2020,Z\xfcrich,1,1%\n").unwrap();
    let mut diag = Vec::new();
    let err = process_file(
        &in_path,
        &dir.path().join("out.csv"),
        &SubdivisionTable::builtin(),
        &mut diag,
    )
    .unwrap_err();
    assert!(matches!(err, ProcError::Encoding(_)));
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let mut diag = Vec::new();
    let err = process_file(
        &dir.path().join("nope.csv"),
        &dir.path().join("out.csv"),
        &SubdivisionTable::builtin(),
        &mut diag,
    )
    .unwrap_err();
    assert!(matches!(err, ProcError::Io(_)));
}
