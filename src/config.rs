// Command-line configuration and input/output path handling.
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Aggregate an ad report by date and country.
///
/// Reads a `MM/DD/YYYY,subdivision,impressions,ctr%` CSV (UTF-8 or UTF-16)
/// and writes `YYYY-MM-DD,country,impressions,clicks` sorted by date and
/// country. Rejected lines are listed on stderr.
#[derive(Parser, Debug, Clone)]
#[command(name = "proccsv")]
#[command(version, about)]
pub struct Args {
    /// Input CSV file. If not specified, a file is picked interactively from --input-dir.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory listed for interactive selection.
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory the output file is written to.
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Inserted before the input file's extension to name the output file.
    #[arg(long, default_value = "_processed")]
    pub suffix: String,

    /// Explicit output path; overrides --output-dir and --suffix.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the run counters as JSON to this path.
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Rows shown in the console preview (0 disables it).
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

impl Args {
    /// Where the report for `input` goes.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        match &self.output {
            Some(p) => p.clone(),
            None => self
                .output_dir
                .join(output_file_name(input, &self.suffix)),
        }
    }
}

/// `report.csv` + `_processed` -> `report_processed.csv`; the suffix is
/// appended when there is no extension.
pub fn output_file_name(input: &Path, suffix: &str) -> OsString {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Regular files in `dir`, sorted by name.
pub fn list_input_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Ask the user to pick one of `files` by number.
///
/// Re-prompts on anything that is not a listed number. Returns `None` when
/// the user types `q` or input ends.
pub fn select_input<R, W>(files: &[PathBuf], input: &mut R, out: &mut W) -> io::Result<Option<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "List of files in the input directory:")?;
    for (num, path) in files.iter().enumerate() {
        let name = path.file_name().unwrap_or(path.as_os_str());
        writeln!(out, "[{}] {}", num, name.to_string_lossy())?;
    }
    loop {
        write!(
            out,
            "Select csv file to be processed by specifying its number or press q to exit: "
        )?;
        out.flush()?;
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let choice = buf.trim();
        if choice == "q" {
            return Ok(None);
        }
        if let Some(path) = choice.parse::<usize>().ok().and_then(|n| files.get(n)) {
            return Ok(Some(path.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["proccsv"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.input, None);
        assert_eq!(a.input_dir, PathBuf::from("input"));
        assert_eq!(a.output_dir, PathBuf::from("output"));
        assert_eq!(a.suffix, "_processed");
        assert_eq!(a.preview, 5);
    }

    #[test]
    fn suffix_goes_before_extension() {
        assert_eq!(output_file_name(Path::new("in/report.csv"), "_processed"), "report_processed.csv");
        assert_eq!(output_file_name(Path::new("a.b.csv"), "_x"), "a.b_x.csv");
        assert_eq!(output_file_name(Path::new("report"), "_processed"), "report_processed");
    }

    #[test]
    fn output_path_uses_dir_and_suffix_unless_overridden() {
        let a = args(&["--output-dir", "out"]);
        assert_eq!(
            a.output_path(Path::new("input/test.csv")),
            PathBuf::from("out").join("test_processed.csv")
        );

        let a = args(&["-o", "explicit.csv"]);
        assert_eq!(a.output_path(Path::new("input/test.csv")), PathBuf::from("explicit.csv"));
    }

    #[test]
    fn selection_reprompts_until_valid_number() {
        let files = vec![PathBuf::from("input/a.csv"), PathBuf::from("input/b.csv")];
        let mut input = Cursor::new("x\n7\n1\n");
        let mut out = Vec::new();
        let picked = select_input(&files, &mut input, &mut out).unwrap();
        assert_eq!(picked, Some(PathBuf::from("input/b.csv")));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("[0] a.csv"));
        assert!(shown.contains("[1] b.csv"));
        assert_eq!(shown.matches("press q to exit").count(), 3);
    }

    #[test]
    fn selection_can_be_abandoned() {
        let files = vec![PathBuf::from("a.csv")];
        let mut out = Vec::new();
        assert_eq!(select_input(&files, &mut Cursor::new("q\n"), &mut out).unwrap(), None);
        assert_eq!(select_input(&files, &mut Cursor::new(""), &mut out).unwrap(), None);
    }

    #[test]
    fn listing_skips_directories_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "").unwrap();
        std::fs::write(dir.path().join("a.csv"), "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let files = list_input_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap().to_owned()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }
}
