use eframe::egui::{self, Button, Color32, Ui};

use crate::connections::Relation;
use crate::filter::{self, FilterChoice, FilterField};

use super::super::ViewModel;
use super::super::actions::MapAction;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&self, ui: &mut Ui, actions: &mut Vec<MapAction>) {
        ui.heading("Map Controls");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search titles")
            .on_hover_text("Fuzzy-highlight matching games without changing the filters.");
        let mut search = self.search.clone();
        if ui.text_edit_singleline(&mut search).changed() {
            actions.push(MapAction::SetSearch(search));
        }

        ui.separator();
        self.draw_filters(ui, actions);

        ui.separator();
        for relation in Relation::ALL {
            let mut show = self.shows_relation(relation);
            if ui
                .checkbox(&mut show, format!("Show {} Connections", relation.label()))
                .on_hover_text(format!("Link games that share a {} value.", relation.key()))
                .changed()
            {
                actions.push(MapAction::ShowRelation(relation, show));
            }
        }

        let mut show_hidden = self.show_hidden_connections;
        if ui
            .checkbox(&mut show_hidden, "Show connections to filtered games")
            .on_hover_text("Draw faded lines to games hidden by the current filters.")
            .changed()
        {
            actions.push(MapAction::ShowHiddenConnections(show_hidden));
        }

        ui.separator();
        self.draw_layout_controls(ui, actions);
    }

    fn draw_filters(&self, ui: &mut Ui, actions: &mut Vec<MapAction>) {
        egui::Grid::new("filters")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for field in FilterField::ALL {
                    ui.label(field.label());

                    let current = self.filters.choice(field);
                    let mut selected = current.clone();
                    egui::ComboBox::from_id_salt(field.key())
                        .selected_text(current.label())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut selected, FilterChoice::All, filter::ALL);
                            for option in field.options(self.catalog.games()) {
                                let label = option.clone();
                                ui.selectable_value(
                                    &mut selected,
                                    FilterChoice::Value(option),
                                    label,
                                );
                            }
                        });

                    if selected != *current {
                        actions.push(MapAction::SetFilter(field, selected));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        let reset = ui.add_enabled(
            !self.filters.is_unfiltered(),
            Button::new("Reset All Filters"),
        );
        if reset.clicked() {
            actions.push(MapAction::ResetFilters);
        }
    }

    fn draw_layout_controls(&self, ui: &mut Ui, actions: &mut Vec<MapAction>) {
        ui.label("Layout");

        let (label, fill) = if self.edit_mode {
            ("Editing (Drag ON)", Color32::from_rgb(220, 68, 55))
        } else {
            ("View Mode", ui.visuals().widgets.inactive.weak_bg_fill)
        };
        let toggle = ui.add(Button::new(label).fill(fill));
        let toggle = if self.config.edit_mode_enabled {
            toggle.on_hover_text("Toggle dragging of game nodes.")
        } else {
            toggle.on_hover_text("Dragging is disabled in this deployment.")
        };
        if toggle.clicked() {
            actions.push(MapAction::ToggleEditMode);
        }

        if self.edit_mode {
            let save = ui
                .add(Button::new("Save Layout").fill(Color32::from_rgb(46, 160, 90)))
                .on_hover_text(format!(
                    "Write the catalog with current positions to {}.",
                    self.config.export_dir.display()
                ));
            if save.clicked() {
                actions.push(MapAction::Export);
            }
        }

        ui.small("Scroll to zoom, drag to pan, double-click to reset the view.");
    }
}
