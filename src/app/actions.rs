use eframe::egui::Vec2;

use crate::catalog::{Catalog, GameId};
use crate::config::MapConfig;
use crate::connections::Relation;
use crate::export::write_export;
use crate::filter::{FilterChoice, FilterField, FilterState};
use crate::positions::PositionMap;

use super::viewport::Viewport;
use super::{ExportStatus, ViewModel};

#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) enum MapAction {
    SetFilter(FilterField, FilterChoice),
    ResetFilters,
    ShowRelation(Relation, bool),
    ShowHiddenConnections(bool),
    SetSearch(String),
    Select(GameId),
    ClearSelection,
    ToggleEditMode,
    BeginDrag(GameId),
    /// Plane-space movement of the node being dragged.
    DragBy(Vec2),
    EndDrag,
    Pan(Vec2),
    /// Zoom about `anchor`, given relative to the canvas origin.
    ZoomAt {
        anchor: Vec2,
        factor: f32,
    },
    ResetView {
        now: f64,
    },
    Tick {
        now: f64,
    },
    Export,
}

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog, config: MapConfig) -> Self {
        let positions = PositionMap::from_games(catalog.games());
        Self {
            catalog,
            config,
            filters: FilterState::default(),
            positions,
            selected: None,
            search: String::new(),
            show_designer_lines: true,
            show_studio_lines: true,
            show_hidden_connections: false,
            edit_mode: false,
            layout_dirty: false,
            dragging: None,
            viewport: Viewport::default(),
            export_status: None,
        }
    }

    pub(in crate::app) fn apply_all(&mut self, actions: impl IntoIterator<Item = MapAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    pub(in crate::app) fn apply(&mut self, action: MapAction) {
        match action {
            MapAction::SetFilter(field, choice) => {
                tracing::debug!(field = field.key(), value = choice.label(), "filter changed");
                self.filters.set(field, choice);
            }
            MapAction::ResetFilters => {
                tracing::debug!("filters reset");
                self.filters.reset();
            }
            MapAction::ShowRelation(relation, show) => match relation {
                Relation::Designer => self.show_designer_lines = show,
                Relation::Studio => self.show_studio_lines = show,
            },
            MapAction::ShowHiddenConnections(show) => self.show_hidden_connections = show,
            MapAction::SetSearch(search) => self.search = search,
            MapAction::Select(id) => {
                if !self.edit_mode && self.catalog.get(id).is_some() {
                    self.selected = Some(id);
                }
            }
            MapAction::ClearSelection => self.selected = None,
            MapAction::ToggleEditMode => {
                self.edit_mode = !self.edit_mode;
                if !self.edit_mode {
                    self.finish_drag();
                }
            }
            MapAction::BeginDrag(id) => {
                if self.can_drag() && self.catalog.get(id).is_some() {
                    self.dragging = Some(id);
                }
            }
            MapAction::DragBy(delta) => {
                if !self.can_drag() {
                    return;
                }
                let Some(game) = self.dragging.and_then(|id| self.catalog.get(id)) else {
                    return;
                };
                let next = self.positions.resolve(game) + delta;
                self.positions.set(game.id, next);
                self.layout_dirty = true;
            }
            MapAction::EndDrag => self.finish_drag(),
            MapAction::Pan(delta) => self.viewport.pan_by(delta),
            MapAction::ZoomAt { anchor, factor } => self.viewport.zoom_at(anchor, factor),
            MapAction::ResetView { now } => self.viewport.begin_reset(now),
            MapAction::Tick { now } => {
                self.viewport.tick(now);
            }
            MapAction::Export => self.export_layout(),
        }
    }

    fn finish_drag(&mut self) {
        let Some(id) = self.dragging.take() else {
            return;
        };

        if let Some(position) = self.positions.get(id) {
            tracing::info!("Updated {id}: x={}, y={}", position.x, position.y);
        }
    }

    fn export_layout(&mut self) {
        match write_export(
            &self.config.export_dir,
            self.catalog.games(),
            &self.positions,
        ) {
            Ok(path) => {
                self.layout_dirty = false;
                self.export_status = Some(ExportStatus::Saved(path));
            }
            Err(error) => {
                tracing::error!("layout export failed: {error:#}");
                self.export_status = Some(ExportStatus::Failed(format!("{error:#}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use eframe::egui::vec2;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::{Game, test_game};
    use crate::export::EXPORT_FILE_NAME;

    fn catalog() -> Catalog {
        let mut first = test_game(1, "first");
        first.x = 10.0;
        first.y = 10.0;
        first.demo = true;
        let mut second = test_game(2, "second");
        second.x = 200.0;
        second.y = 50.0;
        Catalog::new(vec![first, second]).unwrap()
    }

    fn model(edit_mode_enabled: bool, export_dir: PathBuf) -> ViewModel {
        ViewModel::new(
            catalog(),
            MapConfig {
                edit_mode_enabled,
                export_dir,
            },
        )
    }

    #[test]
    fn drag_moves_node_only_when_enabled_and_editing() {
        let mut view = model(true, PathBuf::from("."));

        view.apply_all([MapAction::BeginDrag(1), MapAction::DragBy(vec2(5.0, 5.0))]);
        assert_eq!(view.positions.get(1), Some(vec2(10.0, 10.0)));
        assert!(!view.layout_dirty);

        view.apply_all([
            MapAction::ToggleEditMode,
            MapAction::BeginDrag(1),
            MapAction::DragBy(vec2(5.0, -2.0)),
            MapAction::DragBy(vec2(1.0, 1.0)),
            MapAction::EndDrag,
        ]);
        assert_eq!(view.positions.get(1), Some(vec2(16.0, 9.0)));
        assert!(view.layout_dirty);
        assert!(view.dragging.is_none());
    }

    #[test]
    fn deployment_flag_off_blocks_dragging_in_edit_mode() {
        let mut view = model(false, PathBuf::from("."));

        view.apply_all([
            MapAction::ToggleEditMode,
            MapAction::BeginDrag(2),
            MapAction::DragBy(vec2(30.0, 30.0)),
            MapAction::EndDrag,
        ]);

        assert!(view.edit_mode);
        assert_eq!(view.positions.get(2), Some(vec2(200.0, 50.0)));
        assert!(!view.layout_dirty);
    }

    #[test]
    fn selection_is_ignored_in_edit_mode() {
        let mut view = model(true, PathBuf::from("."));

        view.apply(MapAction::Select(2));
        assert_eq!(view.selected, Some(2));

        view.apply_all([MapAction::ClearSelection, MapAction::ToggleEditMode]);
        view.apply(MapAction::Select(1));
        assert_eq!(view.selected, None);
    }

    #[test]
    fn unknown_ids_are_not_selected_or_dragged() {
        let mut view = model(true, PathBuf::from("."));
        view.apply(MapAction::Select(99));
        assert!(view.selected.is_none());

        view.apply_all([MapAction::ToggleEditMode, MapAction::BeginDrag(99)]);
        assert!(view.dragging.is_none());
    }

    #[test]
    fn leaving_edit_mode_ends_a_drag() {
        let mut view = model(true, PathBuf::from("."));
        view.apply_all([MapAction::ToggleEditMode, MapAction::BeginDrag(2)]);
        assert_eq!(view.dragging, Some(2));

        view.apply(MapAction::ToggleEditMode);
        assert!(view.dragging.is_none());
    }

    #[test]
    fn filters_and_relation_toggles_update_state() {
        let mut view = model(false, PathBuf::from("."));

        view.apply(MapAction::SetFilter(FilterField::Demo, "Yes".into()));
        let visible = view.visible_games().iter().map(|game| game.id).collect::<Vec<_>>();
        assert_eq!(visible, [1]);

        view.apply_all([
            MapAction::ResetFilters,
            MapAction::ShowRelation(Relation::Designer, false),
        ]);
        assert_eq!(view.visible_games().len(), 2);
        assert_eq!(view.enabled_relations(), [Relation::Studio]);
    }

    #[test]
    fn export_writes_live_positions_and_clears_dirty_flag() {
        let temp = TempDir::new().unwrap();
        let mut view = model(true, temp.path().to_path_buf());

        view.apply_all([
            MapAction::ToggleEditMode,
            MapAction::BeginDrag(2),
            MapAction::DragBy(vec2(-100.0, 25.0)),
            MapAction::EndDrag,
        ]);
        assert!(view.layout_dirty);

        view.apply(MapAction::Export);
        assert!(!view.layout_dirty);
        let expected = temp.path().join(EXPORT_FILE_NAME);
        assert_eq!(view.export_status, Some(ExportStatus::Saved(expected.clone())));

        let exported: Vec<Game> =
            serde_json::from_str(&fs::read_to_string(expected).unwrap()).unwrap();
        assert_eq!(exported.len(), 2);
        assert_eq!((exported[0].x, exported[0].y), (10.0, 10.0));
        assert_eq!((exported[1].x, exported[1].y), (100.0, 75.0));
    }

    #[test]
    fn failed_export_keeps_dirty_flag() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let mut view = model(true, blocker);

        view.apply_all([
            MapAction::ToggleEditMode,
            MapAction::BeginDrag(1),
            MapAction::DragBy(vec2(1.0, 0.0)),
            MapAction::Export,
        ]);

        assert!(view.layout_dirty);
        assert!(matches!(view.export_status, Some(ExportStatus::Failed(_))));
    }
}
