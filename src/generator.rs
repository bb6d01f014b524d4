// Synthetic input files for exercising the pipeline.
use crate::error::{ProcError, ProcResult};
use chrono::{NaiveDate, TimeDelta};
use clap::ValueEnum;
use rand::Rng;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileEncoding {
    #[value(name = "utf-8")]
    Utf8,
    /// Little-endian with a BOM.
    #[value(name = "utf-16")]
    Utf16,
}

impl FileEncoding {
    fn bits(self) -> u8 {
        match self {
            FileEncoding::Utf8 => 8,
            FileEncoding::Utf16 => 16,
        }
    }

    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            FileEncoding::Utf8 => text.as_bytes().to_vec(),
            FileEncoding::Utf16 => {
                let mut out = vec![0xFF, 0xFE];
                out.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));
                out
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub rows: usize,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub encoding: FileEncoding,
}

impl GeneratorSettings {
    pub fn validate(&self) -> ProcResult<()> {
        if self.date_from > self.date_to {
            return Err(ProcError::Settings(format!(
                "date_from {} is after date_to {}",
                self.date_from, self.date_to
            )));
        }
        Ok(())
    }

    /// `test_{rows}_{8|16}.csv`
    pub fn file_name(&self) -> String {
        format!("test_{}_{}.csv", self.rows, self.encoding.bits())
    }
}

/// Random report lines in the input format.
///
/// Dates are uniform over `date_from..=date_to`, impressions over
/// `0..=2000`, CTR over `0.00%..=2.00%`, and subdivisions are drawn from
/// `names`.
pub fn generate_lines<R: Rng>(
    rng: &mut R,
    settings: &GeneratorSettings,
    names: &[&str],
) -> ProcResult<String> {
    settings.validate()?;
    if names.is_empty() {
        return Err(ProcError::Settings("no subdivision names to draw from".to_string()));
    }
    let span = (settings.date_to - settings.date_from).num_days();

    let mut text = String::with_capacity(settings.rows * 40);
    for _ in 0..settings.rows {
        let date = settings.date_from + TimeDelta::days(rng.random_range(0..=span));
        let name = names[rng.random_range(0..names.len())];
        let impressions: u32 = rng.random_range(0..=2000);
        let ctr_hundredths: u32 = rng.random_range(0..=200);
        // Writing into a String cannot fail.
        let _ = writeln!(
            text,
            "{},{},{},{}.{:02}%",
            date.format("%m/%d/%Y"),
            name,
            impressions,
            ctr_hundredths / 100,
            ctr_hundredths % 100
        );
    }
    Ok(text)
}

/// Generate a file into `out_dir` and return its path.
pub fn write_test_file<R: Rng>(
    rng: &mut R,
    settings: &GeneratorSettings,
    names: &[&str],
    out_dir: &Path,
) -> ProcResult<PathBuf> {
    let text = generate_lines(rng, settings, names)?;
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(settings.file_name());
    std::fs::write(&path, settings.encoding.encode(&text))?;
    info!(path = %path.display(), rows = settings.rows, "wrote test file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::process_line;
    use crate::resolver::SubdivisionTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings(rows: usize, encoding: FileEncoding) -> GeneratorSettings {
        GeneratorSettings {
            rows,
            date_from: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2019, 2, 1).unwrap(),
            encoding,
        }
    }

    #[test]
    fn generated_lines_are_all_valid() {
        let table = SubdivisionTable::builtin();
        let s = settings(500, FileEncoding::Utf8);
        let text = generate_lines(&mut StdRng::seed_from_u64(7), &s, table.names()).unwrap();
        assert_eq!(text.lines().count(), 500);
        for line in text.lines() {
            let row = process_line(line, &table).unwrap();
            assert!(row.date >= s.date_from && row.date <= s.date_to);
            assert_ne!(row.country, "XXX", "{line}");
            assert!(row.impressions <= 2000);
        }
    }

    #[test]
    fn same_seed_same_file() {
        let names = ["Texas", "Ontario"];
        let s = settings(50, FileEncoding::Utf8);
        let a = generate_lines(&mut StdRng::seed_from_u64(1), &s, &names).unwrap();
        let b = generate_lines(&mut StdRng::seed_from_u64(1), &s, &names).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reversed_date_range_is_rejected() {
        let mut s = settings(1, FileEncoding::Utf8);
        std::mem::swap(&mut s.date_from, &mut s.date_to);
        let err = generate_lines(&mut StdRng::seed_from_u64(1), &s, &["Texas"]).unwrap_err();
        assert!(matches!(err, ProcError::Settings(_)));
    }

    #[test]
    fn file_names_follow_encoding() {
        assert_eq!(settings(10000, FileEncoding::Utf8).file_name(), "test_10000_8.csv");
        assert_eq!(settings(5, FileEncoding::Utf16).file_name(), "test_5_16.csv");
    }

    #[test]
    fn utf16_file_round_trips_through_decoder() {
        let dir = tempfile::tempdir().unwrap();
        let s = settings(20, FileEncoding::Utf16);
        let path = write_test_file(&mut StdRng::seed_from_u64(3), &s, &["Zürich"], dir.path()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        let decoded = crate::encoding::decode(&bytes).unwrap();
        assert_eq!(decoded.encoding_name(), "UTF-16LE");
        assert_eq!(decoded.lines().count(), 20);
        assert!(decoded.text.contains("Zürich"));
    }
}
