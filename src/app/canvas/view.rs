use std::collections::HashSet;

use eframe::egui::load::TexturePoll;
use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
    vec2,
};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::catalog::{Game, GameId};
use crate::connections::{NODE_ANCHOR, layout_connectors};
use crate::util::length_and_year;

use super::super::ViewModel;
use super::super::actions::MapAction;
use super::super::render_utils::{
    INK, MANILA, MANILA_EDGE, SEARCH_MATCH, SELECTED, blend_color, card_color, dim_color,
    draw_background, edge_visible, monogram, relation_color,
};
use super::{FOLDER_LABEL, FOLDER_MIN, FOLDER_SIZE, NODE_SIZE, TITLE_OFFSET};

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

struct NodeStyle {
    hovered: bool,
    selected: bool,
    search_match: bool,
    search_active: bool,
}

impl ViewModel {
    fn search_matches(&self) -> Option<HashSet<GameId>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        Some(
            self.catalog
                .games()
                .iter()
                .filter(|game| fuzzy_match_score(&matcher, &game.title, query).is_some())
                .map(|game| game.id)
                .collect(),
        )
    }

    pub(in crate::app) fn draw_canvas(&self, ui: &mut Ui, actions: &mut Vec<MapAction>) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        let origin = rect.left_top();
        let viewport = self.viewport;
        let zoom = viewport.zoom();

        draw_background(&painter, rect, origin + viewport.pan(), zoom);
        self.draw_folder(&painter, origin);

        let visible = self.visible_games();
        let visible_ids = visible.iter().map(|game| game.id).collect::<HashSet<_>>();
        let hovered = self.hovered_game(ui, rect, &visible);

        self.handle_canvas_zoom(ui, rect, &response, actions);
        self.handle_canvas_drag(&response, hovered, actions);

        if response.double_clicked() {
            actions.push(MapAction::ResetView {
                now: ui.input(|input| input.time),
            });
        } else if response.clicked_by(egui::PointerButton::Primary)
            && let Some(id) = hovered
        {
            actions.push(MapAction::Select(id));
        }

        if self.dragging.is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::Grabbing);
        } else if hovered.is_some() {
            let icon = if self.can_drag() {
                egui::CursorIcon::Grab
            } else {
                egui::CursorIcon::PointingHand
            };
            ui.output_mut(|output| output.cursor_icon = icon);
        }

        let line_width = (3.0 * zoom).clamp(0.8, 9.0);
        for line in layout_connectors(
            self.catalog.games(),
            &self.positions,
            &self.enabled_relations(),
        ) {
            let both_visible =
                visible_ids.contains(&line.from_id) && visible_ids.contains(&line.to_id);
            if !both_visible && !self.show_hidden_connections {
                continue;
            }

            let start = viewport.world_to_screen(origin, line.start);
            let end = viewport.world_to_screen(origin, line.end);
            if !edge_visible(rect, start, end, line_width) {
                continue;
            }

            let base = relation_color(line.relation);
            let color = if both_visible {
                base
            } else {
                dim_color(base, 0.45)
            };
            let touches_selection = self.selected.is_some_and(|id| line.touches(id));
            let width = if touches_selection {
                line_width * 1.5
            } else {
                line_width
            };

            painter.line_segment([start, end], Stroke::new(width, color));
            painter.circle_filled(start, width * 0.5, color);
            painter.circle_filled(end, width * 0.5, color);

            if touches_selection && zoom > 0.45 {
                painter.text(
                    start + (end - start) * 0.5,
                    Align2::CENTER_BOTTOM,
                    &line.group_key,
                    FontId::proportional((11.0 * zoom).max(6.0)),
                    Color32::from_gray(250),
                );
            }
        }

        let search_matches = self.search_matches();
        for game in &visible {
            let style = NodeStyle {
                hovered: hovered == Some(game.id),
                selected: self.selected == Some(game.id),
                search_match: search_matches
                    .as_ref()
                    .is_some_and(|matches| matches.contains(&game.id)),
                search_active: search_matches.is_some(),
            };
            self.draw_node(ui, &painter, rect, game, &style);
        }

        if let Some(game) = hovered.and_then(|id| self.catalog.get(id)) {
            let mut readout = format!(
                "{}  |  {}",
                game.title,
                length_and_year(game.length, game.year)
            );
            if self.can_drag() {
                let position = self.positions.resolve(game);
                readout.push_str(&format!("  |  x {:.0}, y {:.0}", position.x, position.y));
            }
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                readout,
                FontId::proportional(13.0),
                Color32::from_gray(250),
            );
        }

        let empty_message = if self.catalog.is_empty() {
            Some("The catalog has no games.")
        } else if visible.is_empty() {
            Some("No games match the current filters.")
        } else {
            None
        };
        if let Some(message) = empty_message {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                message,
                FontId::proportional(16.0),
                INK,
            );
        }

        if viewport.is_animating() || self.dragging.is_some() {
            ui.ctx().request_repaint();
        }
    }

    fn draw_folder(&self, painter: &Painter, origin: Pos2) {
        let zoom = self.viewport.zoom();
        let min = self.viewport.world_to_screen(origin, FOLDER_MIN);
        let folder = Rect::from_min_size(min, FOLDER_SIZE * zoom);
        if !painter.clip_rect().intersects(folder) {
            return;
        }

        painter.rect_filled(
            folder.translate(vec2(0.0, 6.0) * zoom),
            20.0 * zoom,
            Color32::from_black_alpha(60),
        );
        painter.rect_filled(folder, 20.0 * zoom, MANILA);
        painter.rect_stroke(
            folder,
            20.0 * zoom,
            Stroke::new(4.0 * zoom, MANILA_EDGE),
            StrokeKind::Inside,
        );
        painter.text(
            self.viewport.world_to_screen(origin, FOLDER_LABEL),
            Align2::CENTER_CENTER,
            "Unsorted Games",
            FontId::proportional((28.0 * zoom).max(6.0)),
            INK,
        );
    }

    fn draw_node(&self, ui: &Ui, painter: &Painter, rect: Rect, game: &Game, style: &NodeStyle) {
        let origin = rect.left_top();
        let zoom = self.viewport.zoom();
        let position = self.positions.resolve(game);

        let hover_mix = ui
            .ctx()
            .animate_bool(ui.make_persistent_id(("node-hover", game.id)), style.hovered);
        let selection_mix = ui
            .ctx()
            .animate_bool(ui.make_persistent_id(("node-selection", game.id)), style.selected);

        let center = self.viewport.world_to_screen(origin, position + NODE_ANCHOR);
        let card = Rect::from_center_size(center, NODE_SIZE * zoom * (1.0 + 0.1 * hover_mix));
        let title_pos = self.viewport.world_to_screen(origin, position + TITLE_OFFSET);
        if !rect.intersects(card.expand(60.0 * zoom)) {
            return;
        }

        let rounding = 12.0 * zoom;
        let mut fill = card_color(game.id);
        if style.search_match {
            fill = blend_color(fill, SEARCH_MATCH, 0.35);
        } else if style.search_active {
            fill = dim_color(fill, 0.5);
        }

        painter.rect_filled(
            card.translate(Vec2::splat(3.0 * zoom)),
            rounding,
            Color32::from_black_alpha(70),
        );
        painter.rect_filled(card, rounding, fill);
        let has_cover = self.paint_cover(ui, card, rounding, game, style);
        if has_cover && style.search_match {
            painter.rect_stroke(
                card.expand(2.0 * zoom),
                rounding + 2.0 * zoom,
                Stroke::new(3.0 * zoom.max(0.5), SEARCH_MATCH),
                StrokeKind::Outside,
            );
        }

        let border = blend_color(Color32::WHITE, SELECTED, selection_mix);
        let border_width = (2.0 + selection_mix * 1.5) * zoom.max(0.5);
        painter.rect_stroke(
            card,
            rounding,
            Stroke::new(border_width, border),
            StrokeKind::Inside,
        );
        if selection_mix > 0.0 {
            painter.rect_stroke(
                card.expand(4.0 * zoom),
                rounding + 4.0 * zoom,
                Stroke::new(
                    1.5,
                    Color32::from_rgba_unmultiplied(245, 206, 93, (selection_mix * 170.0) as u8),
                ),
                StrokeKind::Outside,
            );
        }

        if !has_cover {
            painter.text(
                card.center(),
                Align2::CENTER_CENTER,
                monogram(&game.title),
                FontId::proportional((34.0 * zoom * (1.0 + 0.1 * hover_mix)).max(4.0)),
                Color32::from_gray(238),
            );
        }

        let title_color = if style.search_active && !style.search_match {
            dim_color(INK, 0.6)
        } else {
            INK
        };
        painter.text(
            title_pos,
            Align2::CENTER_CENTER,
            &game.title,
            FontId::proportional((12.0 * zoom).max(4.0)),
            title_color,
        );
    }

    /// Paints the cover art into `card` once it has loaded. Returns false while
    /// it is still loading, when it failed, or when the record has none.
    fn paint_cover(
        &self,
        ui: &Ui,
        card: Rect,
        rounding: f32,
        game: &Game,
        style: &NodeStyle,
    ) -> bool {
        let Some(uri) = game.image_uri() else {
            return false;
        };

        let tint = if style.search_active && !style.search_match {
            Color32::from_gray(120)
        } else {
            Color32::WHITE
        };
        let image = egui::Image::from_uri(uri)
            .corner_radius(rounding)
            .tint(tint)
            .fit_to_exact_size(card.size());

        match image.load_for_size(ui.ctx(), card.size()) {
            Ok(TexturePoll::Ready { .. }) => {
                image.paint_at(ui, card);
                true
            }
            Ok(TexturePoll::Pending { .. }) => false,
            Err(error) => {
                tracing::trace!(id = game.id, %uri, "cover image unavailable: {error}");
                false
            }
        }
    }
}
