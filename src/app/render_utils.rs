use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eframe::egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::catalog::GameId;
use crate::connections::Relation;

pub(super) const CORKBOARD: Color32 = Color32::from_rgb(181, 139, 104);
pub(super) const MANILA: Color32 = Color32::from_rgb(243, 226, 179);
pub(super) const MANILA_EDGE: Color32 = Color32::from_rgb(208, 185, 134);
pub(super) const INK: Color32 = Color32::from_rgb(59, 46, 29);
pub(super) const SELECTED: Color32 = Color32::from_rgb(245, 206, 93);
pub(super) const SEARCH_MATCH: Color32 = Color32::from_rgb(103, 196, 255);

const CARD_PALETTE: [Color32; 6] = [
    Color32::from_rgb(94, 70, 48),
    Color32::from_rgb(72, 88, 104),
    Color32::from_rgb(110, 62, 58),
    Color32::from_rgb(63, 92, 74),
    Color32::from_rgb(96, 82, 112),
    Color32::from_rgb(122, 98, 54),
];

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn relation_color(relation: Relation) -> Color32 {
    match relation {
        Relation::Designer => Color32::from_rgba_unmultiplied(30, 110, 255, 166),
        Relation::Studio => Color32::from_rgba_unmultiplied(0, 180, 100, 166),
    }
}

/// Placeholder card tint, stable for a given id.
pub(super) fn card_color(id: GameId) -> Color32 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    CARD_PALETTE[(hasher.finish() % CARD_PALETTE.len() as u64) as usize]
}

/// Corkboard with two offset dot grids that follow the pan.
pub(super) fn draw_background(painter: &Painter, rect: Rect, plane_origin: Pos2, zoom: f32) {
    painter.rect_filled(rect, 0.0, CORKBOARD);

    let step = (18.0 * zoom).max(9.0);
    let dot_radius = (zoom * 0.9).clamp(0.6, 1.6);
    let grids = [
        (Vec2::ZERO, Color32::from_rgb(156, 116, 78)),
        (Vec2::splat(step * 0.5), Color32::from_rgb(163, 123, 82)),
    ];

    for (shift, color) in grids {
        let start = plane_origin + shift;
        let mut y = rect.top() + (start.y - rect.top()).rem_euclid(step);
        while y < rect.bottom() {
            let mut x = rect.left() + (start.x - rect.left()).rem_euclid(step);
            while x < rect.right() {
                painter.circle_filled(Pos2::new(x, y), dot_radius, color);
                x += step;
            }
            y += step;
        }
    }
}

pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let min_x = start.x.min(end.x) - padding;
    let max_x = start.x.max(end.x) + padding;
    let min_y = start.y.min(end.y) - padding;
    let max_y = start.y.max(end.y) + padding;

    if max_x < rect.left() || min_x > rect.right() || max_y < rect.top() || min_y > rect.bottom() {
        return false;
    }

    if rect.contains(start) || rect.contains(end) {
        return true;
    }

    let top_left = rect.left_top();
    let top_right = rect.right_top();
    let bottom_left = rect.left_bottom();
    let bottom_right = rect.right_bottom();

    segments_intersect(start, end, top_left, top_right)
        || segments_intersect(start, end, top_right, bottom_right)
        || segments_intersect(start, end, bottom_right, bottom_left)
        || segments_intersect(start, end, bottom_left, top_left)
}

fn segments_intersect(a1: Pos2, a2: Pos2, b1: Pos2, b2: Pos2) -> bool {
    fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
        let oa = a - o;
        let ob = b - o;
        (oa.x * ob.y) - (oa.y * ob.x)
    }

    let a_min_x = a1.x.min(a2.x);
    let a_max_x = a1.x.max(a2.x);
    let a_min_y = a1.y.min(a2.y);
    let a_max_y = a1.y.max(a2.y);
    let b_min_x = b1.x.min(b2.x);
    let b_max_x = b1.x.max(b2.x);
    let b_min_y = b1.y.min(b2.y);
    let b_max_y = b1.y.max(b2.y);

    if a_max_x < b_min_x || b_max_x < a_min_x || a_max_y < b_min_y || b_max_y < a_min_y {
        return false;
    }

    let c1 = cross(a1, a2, b1);
    let c2 = cross(a1, a2, b2);
    let c3 = cross(b1, b2, a1);
    let c4 = cross(b1, b2, a2);

    (c1 <= 0.0 && c2 >= 0.0 || c1 >= 0.0 && c2 <= 0.0)
        && (c3 <= 0.0 && c4 >= 0.0 || c3 >= 0.0 && c4 <= 0.0)
}

/// Up to two initials from the title, shown on cards without artwork.
pub(super) fn monogram(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
