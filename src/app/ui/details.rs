use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::catalog::Game;
use crate::util::{length_and_year, yes_no};

use super::super::ViewModel;
use super::super::actions::MapAction;

impl ViewModel {
    pub(in crate::app) fn draw_details(
        &self,
        ui: &mut Ui,
        game: &Game,
        actions: &mut Vec<MapAction>,
    ) {
        ui.horizontal(|ui| {
            ui.heading(game.title.as_str());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("\u{2715}").on_hover_text("Close (Esc)").clicked() {
                    actions.push(MapAction::ClearSelection);
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("details_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(image) = game.image_uri() {
                    ui.add(
                        egui::Image::from_uri(image)
                            .max_width(ui.available_width())
                            .corner_radius(8.0),
                    );
                    ui.hyperlink_to("Cover image", image);
                    ui.add_space(4.0);
                }

                ui.label(
                    RichText::new(format!(
                        "{}  ({})",
                        length_and_year(game.length, game.year),
                        game.length_category().label()
                    ))
                    .italics(),
                );
                ui.add_space(6.0);
                if !game.description.is_empty() {
                    ui.label(game.description.as_str());
                    ui.add_space(6.0);
                }

                ui.separator();
                let optional = [
                    ("Designer", game.designer.as_deref()),
                    ("Studio", game.studio.as_deref()),
                    ("Game Jam", game.game_jam.as_deref()),
                ];
                for (label, value) in optional {
                    if let Some(value) = value.filter(|value| !value.is_empty()) {
                        field_row(ui, label, value);
                    }
                }

                let release_status = game
                    .release_status
                    .as_ref()
                    .map_or("Unknown", |status| status.as_str());
                field_row(ui, "Release Status", release_status);
                field_row(ui, "Demo Available", yes_no(game.demo));
                field_row(
                    ui,
                    "Expansions",
                    game.expansions
                        .as_deref()
                        .filter(|value| !value.is_empty())
                        .unwrap_or("None"),
                );
                field_row(ui, "Free", yes_no(game.free));
                field_row(ui, "First Person Motion", yes_no(game.first_person_motion));
                field_row(ui, "Action / Time Pressure", yes_no(game.action_pressure));
                field_row(ui, "Audio Required", yes_no(game.audio_required));

                let links = game.store_links();
                if !links.is_empty() {
                    ui.separator();
                    ui.label(RichText::new("Available On:").strong());
                    for (name, url) in links {
                        ui.hyperlink_to(name, url);
                    }
                }
            });
    }
}

fn field_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{label}:")).strong());
        ui.label(value);
    });
}
