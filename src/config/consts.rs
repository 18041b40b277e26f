// src/config/consts.rs

// Local data
pub const DATA_DIR: &str = "data";
pub const COMBINED_FILE: &str = "all-schedules.json";
pub const POOLS_CONFIG_FILE: &str = "pools.json";

// Provider cache
pub const CACHE_TTL_SECS: u64 = 5 * 60;

// Calendar window defaults, end hour inclusive of its :00 slot
pub const GRID_START_HOUR: u8 = 6;
pub const GRID_END_HOUR: u8 = 22;

// Vision extraction
pub const VISION_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const VISION_MODEL: &str = "gpt-4o";
pub const VISION_MAX_TOKENS: u32 = 2000;
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const VISION_TIMEOUT_SECS: u64 = 120; // model calls are slow
pub const USER_AGENT: &str = "poolcal/0.3";

// Concurrency
pub const WORKERS: usize = 2;
pub const REQUEST_PAUSE_MS: u64 = 1500; // be polite

// Display
pub const FALLBACK_COLOR: &str = "#cccccc";
