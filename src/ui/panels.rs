use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::controller::DataLoader;
use crate::notify::{Notifications, Severity};
use crate::surface::PlotSlot;

// ---------------------------------------------------------------------------
// Left side panel – data loading and validation controls
// ---------------------------------------------------------------------------

/// Render the loader panel: directory/file pickers, the axis-prefix filter
/// field, and the validate button that attaches the plot view.
pub fn loader_panel(
    ui: &mut Ui,
    loader: &mut DataLoader,
    surface: &mut PlotSlot,
    notifications: &mut Notifications,
) {
    ui.heading("Data loading");
    ui.separator();

    if ui.button("Load csvs").clicked() {
        loader.choose_directory(notifications);
    }
    if ui.button("Add csv files…").clicked() {
        loader.choose_files(notifications);
    }
    ui.add_space(4.0);

    ui.label("Only use columns for axis with prefix");
    let response = ui.add(
        egui::TextEdit::singleline(&mut loader.filter_input).hint_text("UMAP"),
    );
    if response.lost_focus() {
        loader.update_filter();
    }
    ui.add_space(4.0);

    if ui.button("Validate input and plot").clicked() {
        // The edit may not have lost focus yet; take the field as typed.
        loader.update_filter();
        loader.validate(surface, notifications);
    }
    ui.separator();

    // ---- Loaded files ----
    let n_paths = loader.model().csv_paths().len();
    let n_tables = loader.model().tables().len();
    ui.strong(format!("{n_paths} csv file(s), {n_tables} table(s) loaded"));

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(160.0)
        .show(ui, |ui: &mut Ui| {
            for key in loader.model().tables().keys() {
                ui.label(key);
            }
        });
    ui.separator();

    // ---- Notifications ----
    notifications_list(ui, notifications);
}

fn notifications_list(ui: &mut Ui, notifications: &mut Notifications) {
    let mut clear = false;
    for notification in notifications.iter() {
        let color = match notification.severity {
            Severity::Info => ui.visuals().text_color(),
            Severity::Warning => Color32::YELLOW,
            Severity::Error => Color32::RED,
        };
        ui.label(RichText::new(&notification.message).color(color));
    }
    if notifications.iter().next().is_some() && ui.small_button("Clear").clicked() {
        clear = true;
    }
    if clear {
        notifications.clear();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(
    ui: &mut Ui,
    loader: &mut DataLoader,
    surface: &mut PlotSlot,
    notifications: &mut Notifications,
) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                loader.choose_directory(notifications);
                ui.close_menu();
            }
            if ui.button("Open csv files…").clicked() {
                loader.choose_files(notifications);
                ui.close_menu();
            }
        });

        ui.separator();

        if surface.is_attached() {
            let candidates = loader.model().axis_columns().join(", ");
            ui.label(format!("axis candidates: {candidates}"));
        }
    });
}
