// src/gui/actions.rs
//
// Background work kicked off from the UI: document (re)load and the scrape
// pipeline. One worker at a time; buttons are disabled while one is out.

use std::{env, thread};

use crate::{
    config::consts::API_KEY_VAR,
    gui::app::{App, Msg},
    gui::progress::GuiProgress,
    scrape, store,
};

/// Load the document off the UI thread and hand the flattened sessions
/// back. `invalidate` forces a re-fetch past the provider's TTL.
pub fn reload(app: &mut App, invalidate: bool) {
    if app.busy() {
        return;
    }
    app.loading = true;
    app.status("Loading pool schedules…");

    let provider = app.provider.clone();
    let tx = app.tx.clone();

    thread::spawn(move || {
        let mut provider = provider.lock().unwrap();
        if invalidate {
            provider.invalidate();
        }
        let sessions = provider.all_sessions();
        let meta = provider.metadata();
        let _ = tx.send(Msg::Data { sessions, meta });
    });
}

/// Run the full extraction, write the data files, then reload.
pub fn scrape(app: &mut App) {
    if app.busy() {
        return;
    }
    let Ok(api_key) = env::var(API_KEY_VAR) else {
        app.status(format!("Error: {API_KEY_VAR} is not set"));
        return;
    };

    app.running = true;
    logf!("Scrape: Begin, {} targets", app.config.scrape_targets().len());

    let config = app.config.clone();
    let model = app.options.model.clone();
    let provider = app.provider.clone();
    let status = app.status.clone();
    let tx = app.tx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);

        match scrape::collect_schedules(&config, &api_key, &model, Some(&mut prog)) {
            Ok(doc) => {
                for pool in &doc.pools {
                    match store::save_pool_schedule(pool) {
                        Ok(p) => logf!("Store: Saved {}", p.display()),
                        Err(e) => loge!("Store: Save failed for {}: {}", pool.pool_name, e),
                    }
                }
                match store::save_document(&doc) {
                    Ok(p) => logf!("Store: Saved {}", p.display()),
                    Err(e) => {
                        let _ = tx.send(Msg::ScrapeFailed(e.to_string()));
                        return;
                    }
                }

                // fresh data on disk → re-read through the provider
                let mut provider = provider.lock().unwrap();
                provider.invalidate();
                let sessions = provider.all_sessions();
                let meta = provider.metadata();
                let _ = tx.send(Msg::Data { sessions, meta });
            }
            Err(e) => {
                loge!("Scrape: Error: {}", e);
                let _ = tx.send(Msg::ScrapeFailed(e.to_string()));
            }
        }
    });
}
