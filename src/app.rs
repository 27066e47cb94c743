use crate::config::Config;
use crate::job::CopyJob;
use crate::progress::ProgressInfo;
use crate::runner::{CopyEvent, Runner};
use crate::walker;
use eframe::egui::{self, CentralPanel, Context, TextEdit, TopBottomPanel};
use eframe::App;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct FlatDumpApp {
    config: Config,
    source_input: String,
    destination_input: String,
    progress: Arc<Mutex<ProgressInfo>>, // shared progress information
    logs: Arc<Mutex<Vec<String>>>,
    runner: Runner,
}

impl FlatDumpApp {
    pub fn new(
        config: Config,
        progress: Arc<Mutex<ProgressInfo>>,
        logs: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        let source_input = config
            .source
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        let destination_input = config
            .destination
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            config,
            source_input,
            destination_input,
            progress,
            logs,
            runner: Runner::new(),
        }
    }

    fn set_message(&self, message: impl Into<String>) {
        self.progress.lock().unwrap().message = message.into();
    }

    fn start_copy(&mut self) {
        if self.runner.is_active() {
            return;
        }
        if self.source_input.is_empty() || self.destination_input.is_empty() {
            self.set_message("Select both a source and a destination directory");
            return;
        }
        let source = PathBuf::from(&self.source_input);
        let dest = PathBuf::from(&self.destination_input);

        let files = match walker::enumerate(&source) {
            Ok(files) => files,
            Err(e) => {
                self.set_message(format!("Error: {e}"));
                return;
            }
        };
        if files.is_empty() {
            self.set_message("No files found in the source directory");
            return;
        }

        let job = CopyJob::new(source, dest, files);
        self.logs.lock().unwrap().push(format!(
            "Starting copy of {} files from {}",
            job.files.len(),
            job.source.display()
        ));

        let progress = self.progress.clone();
        let logs = self.logs.clone();
        let mut last_file = String::new();
        self.runner.spawn(job, move |event| match event {
            CopyEvent::Progress(info) => {
                if info.current_file != last_file {
                    logs.lock()
                        .unwrap()
                        .push(format!("Copying {}", info.current_file));
                    last_file = info.current_file.clone();
                }
                *progress.lock().unwrap() = info;
            }
            CopyEvent::Done(summary) => {
                let message = format!(
                    "Copied {} files ({} bytes) in {:.1}s",
                    summary.files_copied,
                    summary.bytes_copied,
                    summary.elapsed.as_secs_f64()
                );
                progress.lock().unwrap().message = message.clone();
                logs.lock().unwrap().push(message);
            }
            CopyEvent::Failed(err) => {
                let message = format!("Error copying: {err}");
                progress.lock().unwrap().message = message.clone();
                logs.lock().unwrap().push(message);
            }
        });
    }
}

impl App for FlatDumpApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Source:");
                ui.add(TextEdit::singleline(&mut self.source_input).desired_width(300.0));
            });
            ui.horizontal(|ui| {
                ui.label("Destination:");
                ui.add(TextEdit::singleline(&mut self.destination_input).desired_width(300.0));
                if ui.button("Save").clicked() {
                    if !self.source_input.is_empty() {
                        self.config.source = Some(PathBuf::from(&self.source_input));
                    }
                    if !self.destination_input.is_empty() {
                        self.config.destination = Some(PathBuf::from(&self.destination_input));
                    }
                    self.config.save();
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            let progress = self.progress.lock().unwrap().clone();
            ui.label(progress.message.clone());
            if ui.button("Copy Files").clicked() {
                self.start_copy();
            }
            ui.add(egui::ProgressBar::new(progress.fraction()).show_percentage());
            ui.label(format!("{:.2}% done", progress.percent_done()));
            ui.label(format!("Transfer rate: {:.2} MB/s", progress.rate_mbs));
            ui.label(format!(
                "{} / {} files, {} bytes",
                progress.files_done, progress.files_total, progress.bytes_copied
            ));
            ui.label(
                "Copies all files from the source directory and its subdirectories \
                 into a single destination folder.",
            );

            ui.separator();
            let logs = self.logs.lock().unwrap();
            egui::ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                for log in logs.iter() {
                    ui.label(log);
                }
            });
        });

        // Keep repainting while the worker is running so progress stays live.
        if self.runner.is_active() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
