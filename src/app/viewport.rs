use eframe::egui::{Pos2, Vec2};

pub(in crate::app) const MIN_ZOOM: f32 = 0.2;
pub(in crate::app) const MAX_ZOOM: f32 = 3.0;
const RESET_SECONDS: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ResetAnimation {
    from_pan: Vec2,
    from_zoom: f32,
    started_at: f64,
}

/// Pan and zoom applied to the map plane. The identity transform puts plane
/// origin at the top-left corner of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Viewport {
    pan: Vec2,
    zoom: f32,
    reset: Option<ResetAnimation>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            reset: None,
        }
    }
}

impl Viewport {
    pub(in crate::app) fn zoom(&self) -> f32 {
        self.zoom
    }

    pub(in crate::app) fn pan(&self) -> Vec2 {
        self.pan
    }

    pub(in crate::app) fn is_animating(&self) -> bool {
        self.reset.is_some()
    }

    pub(in crate::app) fn world_to_screen(&self, origin: Pos2, world: Vec2) -> Pos2 {
        origin + self.pan + world * self.zoom
    }

    pub(in crate::app) fn screen_to_world(&self, origin: Pos2, screen: Pos2) -> Vec2 {
        (screen - origin - self.pan) / self.zoom
    }

    pub(in crate::app) fn pan_by(&mut self, delta: Vec2) {
        self.reset = None;
        self.pan += delta;
    }

    /// Scales by `factor` while keeping the plane point under `anchor`
    /// (relative to the canvas origin) fixed on screen.
    pub(in crate::app) fn zoom_at(&mut self, anchor: Vec2, factor: f32) {
        self.reset = None;
        let world = (anchor - self.pan) / self.zoom;
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan = anchor - world * self.zoom;
    }

    pub(in crate::app) fn begin_reset(&mut self, now: f64) {
        if self.pan == Vec2::ZERO && self.zoom == 1.0 {
            self.reset = None;
            return;
        }

        self.reset = Some(ResetAnimation {
            from_pan: self.pan,
            from_zoom: self.zoom,
            started_at: now,
        });
    }

    /// Advances a running reset. Returns true while still animating.
    pub(in crate::app) fn tick(&mut self, now: f64) -> bool {
        let Some(animation) = self.reset else {
            return false;
        };

        let t = ((now - animation.started_at) / RESET_SECONDS).clamp(0.0, 1.0) as f32;
        if t >= 1.0 {
            *self = Self::default();
            return false;
        }

        let eased = ease_cubic_in_out(t);
        self.pan = animation.from_pan * (1.0 - eased);
        self.zoom = animation.from_zoom + (1.0 - animation.from_zoom) * eased;
        true
    }
}

fn ease_cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut viewport = Viewport::default();
        for _ in 0..40 {
            viewport.zoom_at(Vec2::ZERO, 1.15);
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);

        for _ in 0..80 {
            viewport.zoom_at(Vec2::ZERO, 0.85);
        }
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_keeps_anchor_point_fixed() {
        let origin = pos2(20.0, 30.0);
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(15.0, -10.0));

        let anchor = vec2(200.0, 120.0);
        let before = viewport.screen_to_world(origin, origin + anchor);
        viewport.zoom_at(anchor, 1.1);
        let after = viewport.screen_to_world(origin, origin + anchor);

        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn screen_and_world_are_inverse() {
        let origin = pos2(5.0, 5.0);
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(-40.0, 12.0));
        viewport.zoom_at(vec2(100.0, 100.0), 0.9);

        let world = vec2(640.0, 380.0);
        let screen = viewport.world_to_screen(origin, world);
        assert!((viewport.screen_to_world(origin, screen) - world).length() < 1e-3);
    }

    #[test]
    fn reset_animates_back_to_identity() {
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(100.0, 50.0));
        viewport.zoom_at(Vec2::ZERO, 1.1);

        viewport.begin_reset(10.0);
        assert!(viewport.is_animating());

        assert!(viewport.tick(10.25));
        assert!(viewport.pan().length() < vec2(100.0, 50.0).length());

        assert!(!viewport.tick(10.5));
        assert_eq!(viewport, Viewport::default());
    }

    #[test]
    fn panning_cancels_a_running_reset() {
        let mut viewport = Viewport::default();
        viewport.pan_by(vec2(10.0, 0.0));
        viewport.begin_reset(0.0);
        viewport.pan_by(vec2(5.0, 0.0));

        assert!(!viewport.is_animating());
        assert!(!viewport.tick(1.0));
        assert_eq!(viewport.pan(), vec2(15.0, 0.0));
    }

    #[test]
    fn reset_at_identity_is_a_no_op() {
        let mut viewport = Viewport::default();
        viewport.begin_reset(3.0);
        assert!(!viewport.is_animating());
    }
}
