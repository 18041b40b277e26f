// src/config/pools.rs
//
// The injected facility table: display colors and shorthand labels plus the
// published document URL per pool. Read from pools.json when present so
// facilities can be added without touching layout code; the SF Rec & Parks
// set is the compiled-in fallback.

use std::fs;

use serde::{Deserialize, Serialize};

use super::consts::POOLS_CONFIG_FILE;
use crate::grid::GridWindow;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub name: String,
    pub short: String,
    /// "#rrggbb"
    pub color: String,
    /// Published schedule document. Display-only pools have no URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    pub pools: Vec<PoolEntry>,
    #[serde(default)]
    pub window: GridWindow,
}

/// Load pools.json, or fall back to the built-in table.
pub fn load() -> PoolConfig {
    match fs::read_to_string(POOLS_CONFIG_FILE) {
        Ok(text) => match serde_json::from_str::<PoolConfig>(&text) {
            Ok(cfg) if !cfg.pools.is_empty() => {
                logf!("Config: Loaded {} ({} pools)", POOLS_CONFIG_FILE, cfg.pools.len());
                cfg.sanitized()
            }
            Ok(_) => {
                loge!("Config: {} has no pools, using built-in table", POOLS_CONFIG_FILE);
                PoolConfig::builtin()
            }
            Err(e) => {
                loge!("Config: Malformed {}: {}", POOLS_CONFIG_FILE, e);
                PoolConfig::builtin()
            }
        },
        Err(_) => {
            logd!("Config: No {}, using built-in table", POOLS_CONFIG_FILE);
            PoolConfig::builtin()
        }
    }
}

impl PoolConfig {
    /// SF Rec & Parks facilities, colors and shorthands from the site styling.
    pub fn builtin() -> Self {
        const DOC: &str = "https://sfrecpark.org/DocumentCenter/View";
        let entry = |name: &str, short: &str, color: &str, doc_id: Option<u32>| PoolEntry {
            name: s!(name),
            short: s!(short),
            color: s!(color),
            url: doc_id.map(|id| format!("{DOC}/{id}")),
        };
        Self {
            pools: vec![
                entry("Balboa Pool", "Balboa", "#FF6B6B", Some(26439)),
                entry("Rossi Pool", "Rossi", "#4ECDC4", Some(26440)),
                entry("Hamilton Pool", "Hamilton", "#45B7D1", Some(26441)),
                entry("Garfield Pool", "Garfield", "#96CEB4", Some(26442)),
                entry("Mission Pool", "Mission", "#FECA57", Some(26443)),
                entry("Coffman Pool", "Coffman", "#A8E6CF", Some(26444)),
                entry("Martin Luther King Jr. Pool", "MLK", "#FFB347", Some(26445)),
                entry("Sava Pool", "Sava", "#FF9FF3", Some(26446)),
                entry("North Beach Pool", "N.Beach", "#9B59B6", None),
            ],
            window: GridWindow::default(),
        }
    }

    /// Drop an unusable calendar window rather than rendering a broken grid.
    pub fn sanitized(mut self) -> Self {
        if self.window.end_hour <= self.window.start_hour || self.window.end_hour > 23 {
            loge!(
                "Config: Bad window {}..{}, using default",
                self.window.start_hour, self.window.end_hour
            );
            self.window = GridWindow::default();
        }
        self
    }

    /// Find the table entry for a session's pool identifier.
    /// Exact name/short match first (case-insensitive); else the first entry
    /// whose name contains the identifier, so the scraper's normalized keys
    /// ("Balboa", "King") land on their facility.
    pub fn entry_for(&self, pool: &str) -> Option<&PoolEntry> {
        let needle = pool.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.pools
            .iter()
            .find(|p| p.name.to_lowercase() == needle || p.short.to_lowercase() == needle)
            .or_else(|| self.pools.iter().find(|p| p.name.to_lowercase().contains(&needle)))
    }

    pub fn color_of(&self, pool: &str) -> Option<&str> {
        self.entry_for(pool).map(|p| p.color.as_str())
    }

    /// Shorthand label, or the raw identifier when the pool is unknown.
    pub fn label_of<'a>(&'a self, pool: &'a str) -> &'a str {
        self.entry_for(pool).map(|p| p.short.as_str()).unwrap_or(pool)
    }

    /// (name, url) pairs for pools with a published document.
    pub fn scrape_targets(&self) -> Vec<(String, String)> {
        self.pools
            .iter()
            .filter_map(|p| p.url.as_ref().map(|u| (p.name.clone(), u.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_lookup_exact_short_and_substring() {
        let cfg = PoolConfig::builtin();
        assert_eq!(cfg.entry_for("Balboa Pool").unwrap().short, "Balboa");
        assert_eq!(cfg.entry_for("balboa").unwrap().name, "Balboa Pool");
        assert_eq!(cfg.entry_for("King").unwrap().short, "MLK");
        assert!(cfg.entry_for("Atlantis").is_none());
        assert!(cfg.entry_for("").is_none());
    }

    #[test]
    fn unknown_pool_label_falls_back_to_raw_identifier() {
        let cfg = PoolConfig::builtin();
        assert_eq!(cfg.label_of("Atlantis"), "Atlantis");
        assert!(cfg.color_of("Atlantis").is_none());
    }

    #[test]
    fn display_only_pools_are_not_scrape_targets() {
        let cfg = PoolConfig::builtin();
        let targets = cfg.scrape_targets();
        assert_eq!(targets.len(), cfg.pools.len() - 1); // North Beach has no URL
        assert!(targets.iter().all(|(name, _)| name != "North Beach Pool"));
    }

    #[test]
    fn bad_window_is_replaced() {
        let mut cfg = PoolConfig::builtin();
        cfg.window = GridWindow { start_hour: 22, end_hour: 6 };
        assert_eq!(cfg.sanitized().window, GridWindow::default());
    }
}
