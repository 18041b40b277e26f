// src/provider.rs
//
// Loads the combined schedule document with a short-lived cache. Every
// accessor is total: any fetch or parse failure degrades to an empty,
// well-formed document so the calendar always has a valid shape to render.

use std::{
    error::Error,
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::config::consts::CACHE_TTL_SECS;
use crate::core::net;
use crate::schedule::{ScheduleDocument, Session};

/// Where the document comes from. Injected so tests can feed fixtures.
pub trait DocumentSource: Send {
    /// Raw JSON text of the combined document.
    fn fetch(&self) -> Result<String, Box<dyn Error>>;
    /// Human-readable origin, for log lines.
    fn describe(&self) -> String;
}

pub struct FileSource(pub PathBuf);

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<String, Box<dyn Error>> {
        Ok(fs::read_to_string(&self.0)?)
    }
    fn describe(&self) -> String {
        self.0.display().to_string()
    }
}

pub struct HttpSource(pub String);

impl DocumentSource for HttpSource {
    fn fetch(&self) -> Result<String, Box<dyn Error>> {
        net::http_get(&self.0)
    }
    fn describe(&self) -> String {
        self.0.clone()
    }
}

/// Document header fields plus the facility names, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub last_updated: String,
    pub total_pools: usize,
    pub total_sessions: usize,
    pub pool_names: Vec<String>,
}

struct CacheEntry {
    doc: ScheduleDocument,
    fetched_at: Instant,
}

pub struct ScheduleProvider {
    source: Box<dyn DocumentSource>,
    cache: Option<CacheEntry>,
    ttl: Duration,
}

impl ScheduleProvider {
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self::with_ttl(source, Duration::from_secs(CACHE_TTL_SECS))
    }

    pub fn with_ttl(source: Box<dyn DocumentSource>, ttl: Duration) -> Self {
        Self { source, cache: None, ttl }
    }

    /// Cached document while fresh, else a re-fetch. Failures return the
    /// empty document and leave the cache alone, so the next call retries.
    pub fn load(&mut self) -> ScheduleDocument {
        if let Some(entry) = &self.cache {
            if entry.fetched_at.elapsed() < self.ttl {
                return entry.doc.clone();
            }
        }
        match self.fetch_document() {
            Ok(doc) => {
                logf!(
                    "Provider: Loaded {} pools, {} sessions ({})",
                    doc.total_pools, doc.total_sessions,
                    self.source.describe()
                );
                self.cache = Some(CacheEntry { doc: doc.clone(), fetched_at: Instant::now() });
                doc
            }
            Err(e) => {
                loge!("Provider: Load failed: {} ({})", e, self.source.describe());
                ScheduleDocument::empty()
            }
        }
    }

    fn fetch_document(&self) -> Result<ScheduleDocument, Box<dyn Error>> {
        let text = self.source.fetch()?;
        Ok(ScheduleDocument::parse(&text)?)
    }

    /// Every facility's sessions, pools in document order, sessions in
    /// supplied order. No sorting here; the grid relies on this order for
    /// its left-to-right overlap tie-break.
    pub fn all_sessions(&mut self) -> Vec<Session> {
        self.load()
            .pools
            .into_iter()
            .flat_map(|p| p.sessions)
            .collect()
    }

    /// Sessions of the first facility whose name contains `name`,
    /// case-insensitively. Empty when nothing matches.
    pub fn sessions_for(&mut self, name: &str) -> Vec<Session> {
        let needle = name.to_lowercase();
        self.load()
            .pools
            .into_iter()
            .find(|p| p.pool_name.to_lowercase().contains(&needle))
            .map(|p| p.sessions)
            .unwrap_or_default()
    }

    pub fn metadata(&mut self) -> Metadata {
        let doc = self.load();
        Metadata {
            last_updated: doc.last_updated.clone(),
            total_pools: doc.total_pools,
            total_sessions: doc.total_sessions,
            pool_names: doc.pools.iter().map(|p| p.pool_name.clone()).collect(),
        }
    }

    /// Drop the cache so the next load bypasses the TTL check.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
