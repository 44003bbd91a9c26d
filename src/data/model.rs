use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use thiserror::Error;

use super::loader;
use super::table::Table;

// ---------------------------------------------------------------------------
// PathsChanged – event payload, and the publisher delivering it
// ---------------------------------------------------------------------------

/// Emitted after every successful mutation of the model's path set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathsChanged;

/// Ordered list of subscriber callbacks, invoked synchronously on emit.
pub struct Publisher<E> {
    subscribers: Vec<Box<dyn FnMut(&E)>>,
}

impl<E> Default for Publisher<E> {
    fn default() -> Self {
        Publisher {
            subscribers: Vec::new(),
        }
    }
}

impl<E> Publisher<E> {
    /// Register a callback; subscribers run in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Deliver `event` to every subscriber, in order, on the calling thread.
    pub fn emit(&mut self, event: &E) {
        for callback in &mut self.subscribers {
            callback(event);
        }
    }
}

// ---------------------------------------------------------------------------
// Path-set input and model errors
// ---------------------------------------------------------------------------

/// What the user handed to the path setter.
#[derive(Debug, Clone)]
pub enum PathInput {
    /// A directory to scan for `*.csv` entries.
    Directory(PathBuf),
    /// A direct selection of several files.
    Files(Vec<PathBuf>),
    /// A single file.
    File(PathBuf),
}

/// Validation failures of the path setter. Never fatal: the caller turns
/// these into user notifications and the model keeps its previous state.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("'{0}' does not contain any csv")]
    EmptyDirectory(PathBuf),

    #[error("could not read directory '{path}': {source}")]
    UnreadableDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("'{0}' contains at least one file that is not a csv")]
    MixedSelection(PathBuf),

    #[error("'{0}' is not a csv file. Please provide a directory or a csv file.")]
    NotCsv(PathBuf),
}

// ---------------------------------------------------------------------------
// DataModel
// ---------------------------------------------------------------------------

/// Model keeping track of the CSV files that have been loaded and which
/// columns should be used for the plot axes.
///
/// Every instance starts from freshly constructed empty containers; nothing
/// is shared between instances.
pub struct DataModel {
    csv_paths: BTreeSet<PathBuf>,
    tables: BTreeMap<String, Table>,
    axis_columns: Vec<String>,
    column_prefix: String,
    /// Fires after each successful path-set mutation.
    pub paths_changed: Publisher<PathsChanged>,
}

impl Default for DataModel {
    fn default() -> Self {
        DataModel {
            csv_paths: BTreeSet::new(),
            tables: BTreeMap::new(),
            axis_columns: Vec::new(),
            column_prefix: "UMAP".to_string(),
            paths_changed: Publisher::default(),
        }
    }
}

impl DataModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csv_paths(&self) -> &BTreeSet<PathBuf> {
        &self.csv_paths
    }

    /// Add paths to the path set.
    ///
    /// * Directory: scanned for `*.csv`; an empty scan is an error and the
    ///   set stays unchanged.
    /// * Files: if any member lacks the `.csv` extension, none are added.
    /// * File: added only with the `.csv` extension.
    ///
    /// On success, emits exactly one [`PathsChanged`].
    pub fn set_paths(&mut self, input: PathInput) -> Result<(), ModelError> {
        match input {
            PathInput::Directory(dir) => {
                let found = loader::scan_csv_dir(&dir).map_err(|source| {
                    ModelError::UnreadableDirectory {
                        path: dir.clone(),
                        source,
                    }
                })?;
                if found.is_empty() {
                    return Err(ModelError::EmptyDirectory(dir));
                }
                self.csv_paths.extend(found);
            }
            PathInput::Files(paths) => {
                if let Some(bad) = paths.iter().find(|p| !loader::is_csv(p)) {
                    return Err(ModelError::MixedSelection(bad.clone()));
                }
                self.csv_paths.extend(paths);
            }
            PathInput::File(path) => {
                if !loader::is_csv(&path) {
                    return Err(ModelError::NotCsv(path));
                }
                self.csv_paths.insert(path);
            }
        }
        self.paths_changed.emit(&PathsChanged);
        Ok(())
    }

    pub fn tables(&self) -> &BTreeMap<String, Table> {
        &self.tables
    }

    /// Replace the derived table mapping. No validation: the paths behind
    /// it were validated by [`set_paths`](Self::set_paths).
    pub fn set_tables(&mut self, tables: BTreeMap<String, Table>) {
        self.tables = tables;
    }

    pub fn axis_columns(&self) -> &[String] {
        &self.axis_columns
    }

    pub fn set_axis_columns(&mut self, columns: Vec<String>) {
        self.axis_columns = columns;
    }

    pub fn column_prefix(&self) -> &str {
        &self.column_prefix
    }

    pub fn set_column_prefix(&mut self, prefix: String) {
        self.column_prefix = prefix;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    use super::*;

    fn touch_csv(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"x,y\n1,2\n").unwrap();
        path
    }

    fn emit_counter(model: &mut DataModel) -> Rc<RefCell<usize>> {
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        model.paths_changed.subscribe(move |_| *c.borrow_mut() += 1);
        count
    }

    #[test]
    fn default_prefix_is_umap() {
        assert_eq!(DataModel::new().column_prefix(), "UMAP");
    }

    #[test]
    fn directory_scan_adds_all_csvs_and_emits_once() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch_csv(dir.path(), "a.csv");
        let b = touch_csv(dir.path(), "b.csv");

        let mut model = DataModel::new();
        let emitted = emit_counter(&mut model);

        model
            .set_paths(PathInput::Directory(dir.path().to_path_buf()))
            .unwrap();

        assert_eq!(model.csv_paths(), &BTreeSet::from([a, b]));
        assert_eq!(*emitted.borrow(), 1);
    }

    #[test]
    fn empty_directory_is_rejected_and_leaves_set_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = DataModel::new();
        let keep = touch_csv(dir.path(), "keep.csv");
        model.set_paths(PathInput::File(keep.clone())).unwrap();

        let emitted = emit_counter(&mut model);
        let empty = tempfile::tempdir().unwrap();
        let err = model
            .set_paths(PathInput::Directory(empty.path().to_path_buf()))
            .unwrap_err();

        assert!(matches!(err, ModelError::EmptyDirectory(_)));
        assert_eq!(model.csv_paths(), &BTreeSet::from([keep]));
        assert_eq!(*emitted.borrow(), 0);
    }

    #[test]
    fn mixed_selection_adds_nothing() {
        let mut model = DataModel::new();
        let emitted = emit_counter(&mut model);

        let err = model
            .set_paths(PathInput::Files(vec![
                PathBuf::from("/data/good.csv"),
                PathBuf::from("/data/bad.txt"),
            ]))
            .unwrap_err();

        assert!(matches!(err, ModelError::MixedSelection(_)));
        assert!(model.csv_paths().is_empty());
        assert_eq!(*emitted.borrow(), 0);
    }

    #[test]
    fn single_csv_path_is_unioned_in() {
        let mut model = DataModel::new();
        model
            .set_paths(PathInput::File(PathBuf::from("/data/a.csv")))
            .unwrap();
        let before = model.csv_paths().clone();

        model
            .set_paths(PathInput::File(PathBuf::from("/data/b.csv")))
            .unwrap();

        let mut expected = before;
        expected.insert(PathBuf::from("/data/b.csv"));
        assert_eq!(model.csv_paths(), &expected);
    }

    #[test]
    fn single_non_csv_path_is_rejected() {
        let mut model = DataModel::new();
        let err = model
            .set_paths(PathInput::File(PathBuf::from("/data/a.parquet")))
            .unwrap_err();
        assert!(matches!(err, ModelError::NotCsv(_)));
        assert!(model.csv_paths().is_empty());
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut model = DataModel::new();
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            model
                .paths_changed
                .subscribe(move |_| order.borrow_mut().push(tag));
        }

        model
            .set_paths(PathInput::File(PathBuf::from("/data/a.csv")))
            .unwrap();

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut one = DataModel::new();
        one.set_paths(PathInput::File(PathBuf::from("/data/a.csv")))
            .unwrap();
        assert!(DataModel::new().csv_paths().is_empty());
    }
}
