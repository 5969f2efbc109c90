use eframe::egui::{self, Rect, Ui};

use crate::catalog::{Game, GameId};
use crate::connections::NODE_ANCHOR;

use super::super::ViewModel;
use super::super::actions::MapAction;
use super::NODE_SIZE;

impl ViewModel {
    pub(in crate::app) fn handle_canvas_zoom(
        &self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
        actions: &mut Vec<MapAction>,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        actions.push(MapAction::ZoomAt {
            anchor: pointer - rect.left_top(),
            factor,
        });
    }

    /// Primary drag moves the hovered node while editing and pans otherwise;
    /// secondary and middle drags always pan.
    pub(in crate::app) fn handle_canvas_drag(
        &self,
        response: &egui::Response,
        hovered: Option<GameId>,
        actions: &mut Vec<MapAction>,
    ) {
        let mut node_drag = self.dragging.is_some();
        if response.drag_started_by(egui::PointerButton::Primary)
            && self.can_drag()
            && let Some(id) = hovered
        {
            actions.push(MapAction::BeginDrag(id));
            node_drag = true;
        }

        let delta = response.drag_delta();
        if response.dragged_by(egui::PointerButton::Primary) {
            if node_drag {
                actions.push(MapAction::DragBy(delta / self.viewport.zoom()));
            } else {
                actions.push(MapAction::Pan(delta));
            }
        } else if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            actions.push(MapAction::Pan(delta));
        }

        if response.drag_stopped() && node_drag {
            actions.push(MapAction::EndDrag);
        }
    }

    /// Topmost visible card under the pointer. Later cards draw on top.
    pub(in crate::app) fn hovered_game(
        &self,
        ui: &Ui,
        rect: Rect,
        visible: &[&Game],
    ) -> Option<GameId> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        let origin = rect.left_top();
        let world = self.viewport.screen_to_world(origin, pointer);
        visible
            .iter()
            .rev()
            .find(|game| {
                let center = self.positions.resolve(game) + NODE_ANCHOR;
                let half = NODE_SIZE * 0.5;
                (world.x - center.x).abs() <= half.x && (world.y - center.y).abs() <= half.y
            })
            .map(|game| game.id)
    }
}
