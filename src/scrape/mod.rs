// src/scrape/mod.rs
mod vision;

pub use vision::normalize_pool_key;

use std::{
    error::Error,
    sync::{Arc, atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use base64::{Engine as _, engine::general_purpose};
use chrono::Utc;

use crate::{
    config::consts::{REQUEST_PAUSE_MS, WORKERS},
    config::pools::PoolConfig,
    core::net,
    progress::Progress,
    schedule::{PoolSchedule, ScheduleDocument},
};

/// Fetch every configured pool's published document, run the vision
/// extraction, and assemble the combined schedule document. Pool order in
/// the result matches the config, whatever order the workers finish in.
pub fn collect_schedules(
    config: &PoolConfig,
    api_key: &str,
    model: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScheduleDocument, Box<dyn Error>> {
    let targets = config.scrape_targets();
    if targets.is_empty() {
        return Err("No pools with a schedule URL configured".into());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(targets.len());
    }

    let targets_arc = Arc::new(targets);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<(usize, PoolSchedule)>();

    let workers = WORKERS.min(targets_arc.len()).max(1);

    for _ in 0..workers {
        let targets = Arc::clone(&targets_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let api_key = s!(api_key);
        let model = s!(model);

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= targets.len() {
                    break;
                }
                let (name, url) = &targets[i];
                let result = process_pool(name, url, &api_key, &model);
                let _ = tx.send((i, result));
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut collected: Vec<(usize, PoolSchedule)> = Vec::with_capacity(targets_arc.len());
    for _ in 0..targets_arc.len() {
        match res_rx.recv() {
            Ok((i, schedule)) => {
                if let Some(p) = progress.as_deref_mut() {
                    if schedule.error.is_none() {
                        p.item_done(&schedule.pool_name);
                    } else {
                        p.item_failed(&schedule.pool_name);
                    }
                }
                collected.push((i, schedule));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Restore config order
    collected.sort_by_key(|(i, _)| *i);
    let pools: Vec<PoolSchedule> = collected.into_iter().map(|(_, s)| s).collect();

    let ok = pools.iter().filter(|p| p.error.is_none()).count();
    logf!("Scrape: Done, {}/{} pools extracted", ok, pools.len());

    Ok(ScheduleDocument::from_pools(pools))
}

/// One pool, fetch through extraction. Failures are folded into the
/// schedule's `error` field; the pool keeps its place in the document.
fn process_pool(name: &str, url: &str, api_key: &str, model: &str) -> PoolSchedule {
    logf!("Scrape: Processing {} ({})", name, url);
    match fetch_and_extract(name, url, api_key, model) {
        Ok(schedule) => {
            logf!("Scrape: {} OK, {} sessions", name, schedule.sessions.len());
            schedule
        }
        Err(e) => {
            loge!("Scrape: {} failed: {}", name, e);
            PoolSchedule {
                pool_name: s!(name),
                sessions: Vec::new(),
                last_updated: Utc::now().to_rfc3339(),
                source: s!(url),
                error: Some(e.to_string()),
            }
        }
    }
}

fn fetch_and_extract(
    name: &str,
    url: &str,
    api_key: &str,
    model: &str,
) -> Result<PoolSchedule, Box<dyn Error>> {
    let bytes = net::http_get_bytes(url)?;
    if bytes.is_empty() {
        return Err("Empty schedule document".into());
    }

    let encoded = general_purpose::STANDARD.encode(&bytes);
    let data_url = format!("data:image/png;base64,{encoded}");

    let extraction = vision::analyze(name, &data_url, api_key, model)?;

    Ok(PoolSchedule {
        pool_name: extraction.pool_name,
        sessions: extraction.sessions,
        last_updated: Utc::now().to_rfc3339(),
        source: s!(url),
        error: None,
    })
}
