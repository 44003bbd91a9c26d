use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::table::Table;

// ---------------------------------------------------------------------------
// CSV ingestion and directory scanning
// ---------------------------------------------------------------------------

/// Whether a path carries the `.csv` extension (ASCII case-insensitive).
pub fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// The file stem used as table key; falls back to the full file name when
/// there is no stem (e.g. a bare `.csv`).
pub fn table_key(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Collect all `*.csv` entries in `dir` (non-recursive).
pub fn scan_csv_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_csv(&path) {
            found.push(path);
        }
    }
    Ok(found)
}

/// Load one CSV file into a [`Table`].
///
/// Layout: a header row with column names, then data rows. Every column
/// whose non-empty cells all parse as floats is kept as numeric data.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV '{}'", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading CSV headers of '{}'", path.display()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV row {row_no} of '{}'", path.display()))?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_extension_check_is_case_insensitive() {
        assert!(is_csv(Path::new("/data/a.csv")));
        assert!(is_csv(Path::new("/data/a.CSV")));
        assert!(!is_csv(Path::new("/data/a.txt")));
        assert!(!is_csv(Path::new("/data/a")));
    }

    #[test]
    fn table_key_is_the_file_stem() {
        assert_eq!(table_key(Path::new("/data/run_01.csv")), "run_01");
        assert_eq!(table_key(Path::new("relative.csv")), "relative");
    }

    #[test]
    fn scan_finds_only_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "a.csv", "x\n1\n");
        write_csv(dir.path(), "b.CSV", "x\n1\n");
        write_csv(dir.path(), "notes.txt", "hello");

        let mut names: Vec<String> = scan_csv_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| table_key(p))
            .collect();
        names.sort();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn load_csv_parses_headers_and_numeric_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "emb.csv",
            "UMAP1,UMAP2,label\n0.1,0.2,cell_a\n0.3,0.4,cell_b\n",
        );

        let table = load_csv(&path).unwrap();
        assert_eq!(table.column_names(), &["UMAP1", "UMAP2", "label"]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.numeric_column("UMAP2"), Some(&[0.2, 0.4][..]));
        assert!(table.numeric_column("label").is_none());
    }

    #[test]
    fn load_csv_reports_missing_file() {
        let err = load_csv(Path::new("/nonexistent/nope.csv")).unwrap_err();
        assert!(err.to_string().contains("opening CSV"));
    }
}
