// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Extracting {} pool schedules…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        self.set_status(format!("Extracted {} ({}/{})", name, self.done, self.total));
    }
    fn item_failed(&mut self, name: &str) {
        self.done += 1;
        self.set_status(format!("{} failed ({}/{})", name, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Extraction complete"));
        } else {
            self.set_status(format!("Extraction complete ({}/{})", self.done, self.total));
        }
    }
}
