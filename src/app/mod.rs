use std::path::PathBuf;

use eframe::egui::{self, Context};

use crate::catalog::{Catalog, CatalogSource, Game, GameId, load_catalog};
use crate::config::MapConfig;
use crate::connections::Relation;
use crate::filter::FilterState;
use crate::positions::PositionMap;

mod actions;
mod canvas;
mod render_utils;
mod ui;
mod viewport;

use viewport::Viewport;

pub struct GameMapApp {
    source: CatalogSource,
    config: MapConfig,
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

/// All interactive state of the map window. Views read it and queue
/// [`actions::MapAction`]s; [`ViewModel::apply`] is the only place it changes.
struct ViewModel {
    catalog: Catalog,
    config: MapConfig,
    filters: FilterState,
    positions: PositionMap,
    selected: Option<GameId>,
    search: String,
    show_designer_lines: bool,
    show_studio_lines: bool,
    show_hidden_connections: bool,
    edit_mode: bool,
    layout_dirty: bool,
    dragging: Option<GameId>,
    viewport: Viewport,
    export_status: Option<ExportStatus>,
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

impl GameMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, source: CatalogSource, config: MapConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let state = Self::load(&source, &config);
        Self {
            source,
            config,
            state,
        }
    }

    fn load(source: &CatalogSource, config: &MapConfig) -> AppState {
        match load_catalog(source) {
            Ok(catalog) => AppState::Ready(Box::new(ViewModel::new(catalog, config.clone()))),
            Err(error) => {
                tracing::error!(%source, "failed to load catalog: {error:#}");
                AppState::Error(format!("{error:#}"))
            }
        }
    }
}

impl eframe::App for GameMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the game catalog");
                    ui.add_space(6.0);
                    ui.label(format!("source: {}", self.source));
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::load(&self.source, &self.config));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                model.show(ctx, &self.source, &mut reload_requested);

                if reload_requested {
                    tracing::info!(source = %self.source, "reloading catalog");
                    transition = Some(Self::load(&self.source, &self.config));
                }
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}

impl ViewModel {
    fn enabled_relations(&self) -> Vec<Relation> {
        Relation::ALL
            .into_iter()
            .filter(|relation| self.shows_relation(*relation))
            .collect()
    }

    fn shows_relation(&self, relation: Relation) -> bool {
        match relation {
            Relation::Designer => self.show_designer_lines,
            Relation::Studio => self.show_studio_lines,
        }
    }

    fn visible_games(&self) -> Vec<&Game> {
        self.filters.apply(self.catalog.games())
    }

    fn selected_game(&self) -> Option<&Game> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// Dragging needs both the deployment flag and the edit-mode toggle.
    fn can_drag(&self) -> bool {
        self.config.edit_mode_enabled && self.edit_mode
    }
}
