use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::data::loader;
use crate::data::model::{DataModel, PathInput, PathsChanged};
use crate::history::OpenHistory;
use crate::notify::{Notify, Severity};
use crate::surface::{DockRegion, ViewSurface};
use crate::ui::plot::PlotView;

// ---------------------------------------------------------------------------
// DataLoader – reacts to user actions and drives the model
// ---------------------------------------------------------------------------

/// Controller between the loader panel and the [`DataModel`].
///
/// It subscribes to the model's `paths_changed` publisher; the subscriber
/// pushes into a queue that is drained synchronously right after every
/// mutating call, so a path change is fully processed (tables reloaded,
/// axis candidates recomputed) before the next user action arrives.
pub struct DataLoader {
    model: DataModel,
    pending: Rc<RefCell<Vec<PathsChanged>>>,
    /// Text buffer behind the prefix-filter field.
    pub filter_input: String,
    history: OpenHistory,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::with_model(DataModel::new(), OpenHistory::load())
    }

    /// Build around an externally constructed model, e.g. for headless use.
    pub fn with_model(mut model: DataModel, history: OpenHistory) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let queue = pending.clone();
        model
            .paths_changed
            .subscribe(move |event: &PathsChanged| queue.borrow_mut().push(*event));

        let filter_input = model.column_prefix().to_string();
        DataLoader {
            model,
            pending,
            filter_input,
            history,
        }
    }

    pub fn model(&self) -> &DataModel {
        &self.model
    }

    // -- user actions -------------------------------------------------------

    /// Open a folder dialog seeded with the open history. Cancelling is a
    /// silent no-op; a selection is forwarded to the model and recorded in
    /// the history.
    pub fn choose_directory(&mut self, notify: &mut dyn Notify) {
        let mut dialog = rfd::FileDialog::new().set_title("Select folder");
        if let Some(last) = self.history.last_dir() {
            dialog = dialog.set_directory(last);
        }
        let Some(dir) = dialog.pick_folder() else {
            return;
        };
        if self.set_directory(dir.clone(), notify) {
            self.history.update(&dir);
            self.history.save();
        }
    }

    /// Open a multi-file dialog restricted to CSV files.
    pub fn choose_files(&mut self, notify: &mut dyn Notify) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select csv files")
            .add_filter("CSV", &["csv"]);
        if let Some(last) = self.history.last_dir() {
            dialog = dialog.set_directory(last);
        }
        let Some(files) = dialog.pick_files() else {
            return;
        };
        self.set_files(files, notify);
    }

    /// Scan `dir` for CSV files and add them to the path set. Returns
    /// whether the model accepted the directory.
    pub fn set_directory(&mut self, dir: PathBuf, notify: &mut dyn Notify) -> bool {
        let accepted = match self.model.set_paths(PathInput::Directory(dir)) {
            Ok(()) => true,
            Err(e) => {
                notify.notify(Severity::Error, e.to_string());
                false
            }
        };
        self.process_pending(notify);
        accepted
    }

    /// Add directly selected files to the path set.
    pub fn set_files(&mut self, files: Vec<PathBuf>, notify: &mut dyn Notify) -> bool {
        let accepted = match self.model.set_paths(PathInput::Files(files)) {
            Ok(()) => true,
            Err(e) => {
                notify.notify(Severity::Error, e.to_string());
                false
            }
        };
        self.process_pending(notify);
        accepted
    }

    /// Copy the filter field text verbatim into the model.
    pub fn update_filter(&mut self) {
        self.model.set_column_prefix(self.filter_input.clone());
    }

    /// Apply the prefix filter to the axis candidates, warn when fewer than
    /// two columns remain, and attach a plot view regardless (soft
    /// validation: the plot step is never blocked).
    pub fn validate(&mut self, surface: &mut dyn ViewSurface, notify: &mut dyn Notify) {
        let prefix = self.model.column_prefix().to_string();
        if !prefix.is_empty() {
            let cols: Vec<String> = self
                .model
                .axis_columns()
                .iter()
                .filter(|col| col.starts_with(&prefix))
                .cloned()
                .collect();
            if cols.len() >= 2 {
                self.model.set_axis_columns(cols);
            }
        }

        let n_cols = self.model.axis_columns().len();
        if n_cols < 2 {
            notify.notify(
                Severity::Error,
                format!(
                    "After filtering on prefix, there are not enough columns \
                     (2 required). Got {n_cols} columns."
                ),
            );
        }

        let view = PlotView::new(&self.model);
        surface.attach(view, "Embedding plot", DockRegion::Right);
    }

    // -- reactions ----------------------------------------------------------

    /// Drain queued `PathsChanged` events; any number of them triggers one
    /// full rebuild of the derived state.
    fn process_pending(&mut self, notify: &mut dyn Notify) {
        let n_events = self.pending.borrow_mut().drain(..).count();
        if n_events == 0 {
            return;
        }
        self.reload_tables(notify);
    }

    /// Parse every tracked path into a table, keyed by file stem (later
    /// paths with the same stem overwrite earlier ones), then recompute the
    /// axis candidates. Candidate recomputation keeps only the last table's
    /// columns; see DESIGN.md.
    fn reload_tables(&mut self, notify: &mut dyn Notify) {
        let mut tables = BTreeMap::new();
        for path in self.model.csv_paths().clone() {
            match loader::load_csv(&path) {
                Ok(table) => {
                    tables.insert(loader::table_key(&path), table);
                }
                Err(e) => {
                    notify.notify(
                        Severity::Warning,
                        format!("skipping '{}': {e:#}", path.display()),
                    );
                }
            }
        }
        log::info!("loaded {} table(s)", tables.len());

        let mut candidates = Vec::new();
        for table in tables.values() {
            candidates = table.column_names().to_vec();
        }
        self.model.set_tables(tables);
        self.model.set_axis_columns(candidates);
    }
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}
