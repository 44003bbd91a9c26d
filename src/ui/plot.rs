use eframe::egui::{self, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::KeyColors;
use crate::data::model::DataModel;

// ---------------------------------------------------------------------------
// Plot view – selector over loaded tables plus the 2-D point scatter
// ---------------------------------------------------------------------------

/// The scatter panel handed off by the controller's validate step.
///
/// Holds only view state (active table key, colours); the data itself is
/// read from the model each frame, so switching the selector replaces the
/// rendered dataset wholesale.
#[derive(Debug, Clone)]
pub struct PlotView {
    selected: Option<String>,
    colors: KeyColors,
}

impl PlotView {
    /// Build the selector from the model's table keys, defaulting to the
    /// first key in iteration order.
    pub fn new(model: &DataModel) -> Self {
        PlotView {
            selected: model.tables().keys().next().cloned(),
            colors: KeyColors::new(model.tables().keys()),
        }
    }

    /// The active table key.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the X/Y columns for `key`: the first two axis candidates
    /// that are numeric columns of the selected table.
    pub fn axis_pair<'a>(model: &'a DataModel, key: &str) -> Option<(&'a str, &'a str)> {
        let table = model.tables().get(key)?;
        let mut qualifying = model
            .axis_columns()
            .iter()
            .filter(|col| table.numeric_column(col).is_some());
        let x = qualifying.next()?;
        let y = qualifying.next()?;
        Some((x, y))
    }

    /// Render the table selector and the scatter for the active key.
    pub fn ui(&mut self, ui: &mut Ui, model: &DataModel) {
        let keys: Vec<String> = model.tables().keys().cloned().collect();
        if keys.is_empty() {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No tables loaded. Load csvs and validate first.");
            });
            return;
        }

        // ---- Table selector ----
        let current = self
            .selected
            .clone()
            .unwrap_or_else(|| keys[0].clone());
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Table");
            egui::ComboBox::from_id_salt("table_selector")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for key in &keys {
                        if ui.selectable_label(current == *key, key).clicked() {
                            self.selected = Some(key.clone());
                        }
                    }
                });
        });
        let active = self.selected.get_or_insert(current).clone();

        // ---- Scatter ----
        let Some((x_col, y_col)) = Self::axis_pair(model, &active) else {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(format!(
                    "'{active}' has fewer than two numeric axis columns."
                ));
            });
            return;
        };

        let table = &model.tables()[&active];
        let points = table.points(x_col, y_col).unwrap_or_default();
        let color = self.colors.color_for(&active);

        Plot::new("embedding_scatter")
            .legend(Legend::default())
            .x_axis_label(x_col)
            .y_axis_label(y_col)
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true)
            .show(ui, |plot_ui| {
                let plot_points: PlotPoints = points.into();
                plot_ui.points(
                    Points::new(plot_points)
                        .name(&active)
                        .color(color)
                        .radius(2.5),
                );
            });
    }
}
