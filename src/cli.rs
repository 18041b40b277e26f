// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::consts::API_KEY_VAR,
    config::options::AppOptions,
    config::pools,
    grid::fmt_clock12,
    progress::Progress,
    provider::{FileSource, ScheduleProvider},
    schedule::DAYS,
    scrape, store,
};

pub struct Params {
    pub options: AppOptions,
    pub scrape: bool,
    pub list_pools: bool,
    pub sessions: Option<String>,
}

impl Params {
    fn new() -> Self {
        Self {
            options: AppOptions::default(),
            scrape: false,
            list_pools: false,
            sessions: None,
        }
    }
}

pub fn run_from_args() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;
    run(params)
}

pub fn run(params: Params) -> Result<(), Box<dyn Error>> {
    let config = pools::load();

    if params.list_pools {
        for pool in &config.pools {
            let url = pool.url.as_deref().unwrap_or("-");
            println!("{}\t{}\t{}", pool.short, pool.name, url);
        }
        return Ok(());
    }

    if params.scrape {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| format!("{API_KEY_VAR} is not set"))?;

        let mut prog = StderrProgress::default();
        let doc = scrape::collect_schedules(
            &config,
            &api_key,
            &params.options.model,
            Some(&mut prog),
        )?;

        for pool in &doc.pools {
            let path = store::save_pool_schedule(pool)?;
            eprintln!("Saved {}", path.display());
        }
        let path = store::save_document(&doc)?;
        eprintln!(
            "Saved {} ({} pools, {} sessions)",
            path.display(), doc.total_pools, doc.total_sessions
        );
        return Ok(());
    }

    if let Some(name) = &params.sessions {
        let source = FileSource(params.options.data_path.clone());
        let mut provider = ScheduleProvider::new(Box::new(source));
        let sessions = provider.sessions_for(name);
        if sessions.is_empty() {
            eprintln!("No sessions for \"{name}\"");
            return Ok(());
        }
        for s in sessions {
            let day = DAYS.get(s.day as usize).copied().unwrap_or("?");
            let kind = s.session_type.as_deref().unwrap_or("");
            println!(
                "{day}\t{} – {}\t{kind}",
                fmt_clock12(&s.start_time),
                fmt_clock12(&s.end_time)
            );
        }
        return Ok(());
    }

    // Nothing asked for: show usage.
    eprintln!(include_str!("cli_help.txt"));
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--scrape" => params.scrape = true,
            "--list-pools" => params.list_pools = true,
            "--sessions" => {
                let v = args.next().ok_or("Missing value for --sessions")?;
                params.sessions = Some(v);
            }
            "--data" => {
                let v = args.next().ok_or("Missing value for --data")?;
                params.options.data_path = PathBuf::from(v);
            }
            "--model" => {
                params.options.model = args.next().ok_or("Missing value for --model")?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/// Progress sink for terminal runs.
#[derive(Default)]
struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Extracting {} pool schedules…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("  {} ({}/{})", name, self.done, self.total);
    }
    fn item_failed(&mut self, name: &str) {
        self.done += 1;
        eprintln!("  {} FAILED ({}/{})", name, self.done, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Extraction complete ({}/{})", self.done, self.total);
    }
}
