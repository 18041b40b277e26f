// src/store.rs
use std::{fs, io, path::PathBuf};

use crate::config::consts::{COMBINED_FILE, DATA_DIR};
use crate::schedule::{PoolSchedule, ScheduleDocument};

pub fn data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

/// The combined document the provider reads back.
pub fn combined_path() -> PathBuf {
    data_dir().join(COMBINED_FILE)
}

fn write_pretty<T: serde::Serialize>(path: PathBuf, value: &T) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(&path, json)?;
    Ok(path)
}

pub fn save_document(doc: &ScheduleDocument) -> io::Result<PathBuf> {
    write_pretty(combined_path(), doc)
}

/// One file per facility next to the combined one, e.g.
/// `data/balboa-pool-schedule.json`.
pub fn save_pool_schedule(pool: &PoolSchedule) -> io::Result<PathBuf> {
    let file = format!("{}-schedule.json", slug(&pool.pool_name));
    write_pretty(data_dir().join(file), pool)
}

fn slug(name: &str) -> String {
    let mut out = s!();
    for part in name.split_whitespace() {
        let cleaned: String = part
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if cleaned.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(&cleaned);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slug("Balboa Pool"), "balboa-pool");
        assert_eq!(slug("Martin Luther King Jr. Pool"), "martin-luther-king-jr-pool");
        assert_eq!(slug("  Sava   Pool "), "sava-pool");
    }
}
