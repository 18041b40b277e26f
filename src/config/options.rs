// src/config/options.rs
use std::path::PathBuf;

use super::consts::VISION_MODEL;
use crate::store;

/// Runtime options shared by the GUI and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Backing schedule document (the combined JSON file).
    pub data_path: PathBuf,
    /// Vision model id used by the scrape pipeline.
    pub model: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data_path: store::combined_path(),
            model: s!(VISION_MODEL),
        }
    }
}
