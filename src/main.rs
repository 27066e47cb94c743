//! flatdump copies every file under a source directory tree into a single
//! flat destination directory, with a progress bar and a per-file transfer
//! rate readout. Closing the window terminates the process; an in-flight
//! copy is not guaranteed to finish.

mod app;
mod config;
mod error;
mod job;
mod progress;
mod runner;
mod walker;

use crate::app::FlatDumpApp;
use crate::config::Config;
use crate::progress::ProgressInfo;
use eframe;
use std::sync::{Arc, Mutex};

fn main() -> eframe::Result<()> {
    let config = Config::load();
    let progress = Arc::new(Mutex::new(ProgressInfo::default()));
    progress.lock().unwrap().message = "Select directories, then press Copy Files".to_string();
    let logs: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let app = FlatDumpApp::new(config, progress, logs);
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "flatdump",
        native_options,
        Box::new(|_| Box::new(app)),
    )
}
