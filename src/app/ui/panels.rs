use eframe::egui::{self, Align, Context, Key, Layout, RichText};

use crate::catalog::CatalogSource;

use super::super::actions::MapAction;
use super::super::{ExportStatus, ViewModel};

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &CatalogSource,
        reload_requested: &mut bool,
    ) {
        self.apply(MapAction::Tick {
            now: ctx.input(|input| input.time),
        });

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Detecting Mechanics Visualization");
                    ui.separator();
                    ui.label(format!("catalog: {source}"));
                    ui.label(format!(
                        "visible: {} / {}",
                        self.visible_games().len(),
                        self.catalog.len()
                    ));

                    let reload_label = if self.layout_dirty {
                        "Reload catalog (discards unsaved layout)"
                    } else {
                        "Reload catalog"
                    };
                    if ui.button(reload_label).clicked() {
                        *reload_requested = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        match &self.export_status {
                            Some(ExportStatus::Saved(path)) => {
                                ui.label(format!("saved {}", path.display()));
                            }
                            Some(ExportStatus::Failed(error)) => {
                                ui.colored_label(ui.visuals().error_fg_color, error.as_str());
                            }
                            None => {}
                        }
                        if self.layout_dirty {
                            ui.label(RichText::new("unsaved layout").strong());
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui, &mut actions));

        if let Some(game) = self.selected_game() {
            egui::SidePanel::right("details")
                .resizable(true)
                .default_width(420.0)
                .show(ctx, |ui| self.draw_details(ui, game, &mut actions));

            if ctx.input(|input| input.key_pressed(Key::Escape)) {
                actions.push(MapAction::ClearSelection);
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui, &mut actions));

        self.apply_all(actions);
    }
}
