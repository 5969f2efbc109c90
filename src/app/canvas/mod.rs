use eframe::egui::Vec2;

mod interaction;
mod view;

/// Node cards are square, anchored at their top-left plane position.
const NODE_SIZE: Vec2 = Vec2::new(96.0, 96.0);

/// Title position below the card, relative to the node position.
const TITLE_OFFSET: Vec2 = Vec2::new(48.0, 110.0);

/// "Unsorted Games" folder drawn behind the nodes.
const FOLDER_MIN: Vec2 = Vec2::new(200.0, 700.0);
const FOLDER_SIZE: Vec2 = Vec2::new(1200.0, 750.0);
const FOLDER_LABEL: Vec2 = Vec2::new(800.0, 740.0);
