// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    config::pools::{self, PoolConfig},
    grid::WeekGrid,
    provider::{FileSource, Metadata, ScheduleProvider},
    schedule::Session,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Family Swim Schedule",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )?;
    Ok(())
}

/// Results handed back from background threads.
pub enum Msg {
    Data { sessions: Vec<Session>, meta: Metadata },
    ScrapeFailed(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub options: AppOptions,
    pub config: PoolConfig,

    // current document view
    pub sessions: Vec<Session>,
    pub meta: Option<Metadata>,
    /// Rebuilt only when the session list changes, reused across frames.
    pub grid: Option<WeekGrid>,

    // initial load / scrape in flight
    pub loading: bool,
    pub running: bool,

    // status line (workers write here)
    pub status: Arc<Mutex<String>>,

    // shared with loader/scraper threads
    pub provider: Arc<Mutex<ScheduleProvider>>,
    pub tx: mpsc::Sender<Msg>,
    rx: mpsc::Receiver<Msg>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let config = pools::load();

        let source = FileSource(options.data_path.clone());
        let provider = Arc::new(Mutex::new(ScheduleProvider::new(Box::new(source))));

        let (tx, rx) = mpsc::channel();

        logf!(
            "Init: {} pools configured, window {:02}:00–{:02}:00",
            config.pools.len(), config.window.start_hour, config.window.end_hour
        );

        let mut app = Self {
            options,
            config,
            sessions: Vec::new(),
            meta: None,
            grid: None,
            loading: false,
            running: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            provider,
            tx,
            rx,
        };

        // one initial load per mount
        actions::reload(&mut app, false);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn busy(&self) -> bool {
        self.loading || self.running
    }

    fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::Data { sessions, meta } => {
                logf!("UI: Data applied ({} sessions)", sessions.len());
                let grid = WeekGrid::build(&sessions, &self.config.window);
                if grid.skipped > 0 {
                    self.status(format!("Ready ({} malformed sessions skipped)", grid.skipped));
                } else {
                    self.status("Ready");
                }
                self.sessions = sessions;
                self.meta = Some(meta);
                self.grid = Some(grid);
                self.loading = false;
                self.running = false;
            }
            Msg::ScrapeFailed(e) => {
                self.status(format!("Error: {e}"));
                self.running = false;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(msg) = self.rx.try_recv() {
            self.apply(msg);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::legend::draw(ui, self);

            ui.separator();

            components::calendar::draw(ui, self);
        });

        // keep polling while a worker is out
        if self.busy() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
