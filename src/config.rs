use std::env;
use std::path::PathBuf;

/// Deployment flag that allows nodes to be dragged.
pub const EDIT_MODE_ENV: &str = "DETECTIVE_MAP_EDIT_MODE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    pub edit_mode_enabled: bool,
    pub export_dir: PathBuf,
}

impl MapConfig {
    pub fn new(edit_mode_flag: bool, export_dir: PathBuf) -> Self {
        let from_env = edit_mode_from_env(env::var(EDIT_MODE_ENV).ok().as_deref());
        Self {
            edit_mode_enabled: edit_mode_flag || from_env,
            export_dir,
        }
    }
}

/// Only the exact string `true` enables editing.
pub fn edit_mode_from_env(value: Option<&str>) -> bool {
    value == Some("true")
}
