use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Table – one parsed CSV file
// ---------------------------------------------------------------------------

/// A parsed CSV table: header names in file order plus per-column numeric
/// data for every column whose non-empty cells all parse as `f64`.
///
/// Non-numeric columns (e.g. a `label` column) keep their name in
/// `column_names` so they can show up as axis candidates, but they carry no
/// numeric data and cannot be plotted.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// All column names, in header order.
    column_names: Vec<String>,
    /// Fully numeric columns only. Empty cells are stored as NaN.
    numeric: BTreeMap<String, Vec<f64>>,
    /// Number of data rows.
    n_rows: usize,
}

impl Table {
    /// Assemble a table from header names and raw string cells (row-major).
    /// Each row must have exactly `column_names.len()` cells.
    pub fn from_rows(column_names: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let n_rows = rows.len();
        let mut numeric = BTreeMap::new();

        for (col_idx, name) in column_names.iter().enumerate() {
            let mut values = Vec::with_capacity(n_rows);
            let mut all_numeric = true;

            for row in &rows {
                let cell = row.get(col_idx).map(String::as_str).unwrap_or("");
                if cell.trim().is_empty() {
                    values.push(f64::NAN);
                } else if let Ok(v) = cell.trim().parse::<f64>() {
                    values.push(v);
                } else {
                    all_numeric = false;
                    break;
                }
            }

            if all_numeric {
                numeric.insert(name.clone(), values);
            }
        }

        Table {
            column_names,
            numeric,
            n_rows,
        }
    }

    /// All column names in header order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Numeric data for a column, if the column is fully numeric.
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        self.numeric.get(name).map(Vec::as_slice)
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Zip two numeric columns into scatter points, skipping rows where
    /// either coordinate is not finite. `None` if either column is missing
    /// or not numeric.
    pub fn points(&self, x: &str, y: &str) -> Option<Vec<[f64; 2]>> {
        let xs = self.numeric_column(x)?;
        let ys = self.numeric_column(y)?;
        Some(
            xs.iter()
                .zip(ys.iter())
                .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
                .map(|(&xi, &yi)| [xi, yi])
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn numeric_columns_are_detected() {
        let table = Table::from_rows(
            vec!["UMAP1".into(), "UMAP2".into(), "label".into()],
            rows(&[&["1.0", "2.0", "a"], &["3.0", "4.0", "b"]]),
        );
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.numeric_column("UMAP1"), Some(&[1.0, 3.0][..]));
        assert!(table.numeric_column("label").is_none());
        assert_eq!(table.column_names(), &["UMAP1", "UMAP2", "label"]);
    }

    #[test]
    fn empty_cells_become_nan() {
        let table = Table::from_rows(
            vec!["x".into()],
            rows(&[&["1.5"], &[""], &["2.5"]]),
        );
        let col = table.numeric_column("x").unwrap();
        assert!(col[1].is_nan());
        assert_eq!(col[2], 2.5);
    }

    #[test]
    fn points_skip_non_finite_rows() {
        let table = Table::from_rows(
            vec!["x".into(), "y".into()],
            rows(&[&["1.0", "2.0"], &["", "3.0"], &["4.0", "5.0"]]),
        );
        let pts = table.points("x", "y").unwrap();
        assert_eq!(pts, vec![[1.0, 2.0], [4.0, 5.0]]);
    }

    #[test]
    fn points_require_numeric_columns() {
        let table = Table::from_rows(
            vec!["x".into(), "label".into()],
            rows(&[&["1.0", "a"]]),
        );
        assert!(table.points("x", "label").is_none());
        assert!(table.points("x", "missing").is_none());
    }
}
