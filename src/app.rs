use eframe::egui;

use crate::controller::DataLoader;
use crate::notify::Notifications;
use crate::surface::PlotSlot;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EmbedScopeApp {
    pub loader: DataLoader,
    pub plot_slot: PlotSlot,
    pub notifications: Notifications,
}

impl Default for EmbedScopeApp {
    fn default() -> Self {
        Self {
            loader: DataLoader::new(),
            plot_slot: PlotSlot::default(),
            notifications: Notifications::default(),
        }
    }
}

impl eframe::App for EmbedScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(
                ui,
                &mut self.loader,
                &mut self.plot_slot,
                &mut self.notifications,
            );
        });

        // ---- Left side panel: loader controls ----
        egui::SidePanel::left("loader_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::loader_panel(
                    ui,
                    &mut self.loader,
                    &mut self.plot_slot,
                    &mut self.notifications,
                );
            });

        // ---- Central panel: attached plot view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.plot_slot.attached_mut() {
                Some((view, title)) => {
                    ui.heading(title);
                    view.ui(ui, self.loader.model());
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.heading("Load csvs and press 'Validate input and plot'");
                    });
                }
            }
        });
    }
}
