use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use filetime::FileTime;
use fs_extra::file::{self, CopyOptions};

use crate::error::CopyError;
use crate::job::CopyJob;
use crate::progress::ProgressInfo;

/// What a finished batch amounts to.
#[derive(Debug, Clone, Default)]
pub struct CopySummary {
    pub files_copied: usize,
    pub bytes_copied: u64,
    pub elapsed: Duration,
}

/// Messages the copy worker sends back to whoever started it.
pub enum CopyEvent {
    Progress(ProgressInfo),
    Done(CopySummary),
    Failed(CopyError),
}

/// Copies every file in the job, strictly in sequence, into the flat
/// destination directory. Two sources sharing a basename collapse to one
/// destination file; the later one wins. `on_progress` is invoked with a
/// fresh snapshot after each file. The first failure aborts the remaining
/// batch; files already written stay where they are.
///
/// An empty file list is not an error: the result is a zero summary and the
/// destination is left untouched.
pub fn run<F>(job: &CopyJob, mut on_progress: F) -> Result<CopySummary, CopyError>
where
    F: FnMut(ProgressInfo),
{
    check_destination(&job.dest)?;

    let batch_start = Instant::now();
    let mut state = ProgressInfo {
        files_total: job.files.len(),
        ..Default::default()
    };
    let mut options = CopyOptions::new();
    options.overwrite = true;

    for src in &job.files {
        let name = src.file_name().ok_or_else(|| CopyError::Io {
            path: src.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
        let dest = job.dest.join(name);

        let start = Instant::now();
        let meta = fs::metadata(src).map_err(|source| CopyError::Io {
            path: src.clone(),
            source,
        })?;
        let copied = file::copy(src, &dest, &options).map_err(|source| CopyError::Copy {
            path: src.clone(),
            source,
        })?;
        restore_metadata(&meta, &dest).map_err(|source| CopyError::Io {
            path: dest.clone(),
            source,
        })?;
        let duration = start.elapsed();

        state.files_done += 1;
        state.bytes_copied += copied;
        state.current_file = name.to_string_lossy().into_owned();
        state.message = format!("Copying {}", state.current_file);
        if let Some(rate) = file_rate_mbs(copied, duration) {
            state.rate_mbs = rate;
        }
        on_progress(state.clone());
    }

    Ok(CopySummary {
        files_copied: state.files_done,
        bytes_copied: state.bytes_copied,
        elapsed: batch_start.elapsed(),
    })
}

/// MB/s for a single file: only this file's bytes over only this file's
/// duration, never a running average. None when the measured duration is
/// zero, in which case the caller keeps the previous rate.
fn file_rate_mbs(bytes: u64, duration: Duration) -> Option<f64> {
    if duration > Duration::ZERO {
        Some(bytes as f64 / 1_048_576.0 / duration.as_secs_f64())
    } else {
        None
    }
}

fn check_destination(dest: &Path) -> Result<(), CopyError> {
    match fs::metadata(dest) {
        Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(()),
        _ => Err(CopyError::DestinationNotWritable(dest.to_path_buf())),
    }
}

/// Carries the source's permissions and timestamps onto the freshly written
/// destination file.
fn restore_metadata(meta: &fs::Metadata, dest: &Path) -> std::io::Result<()> {
    fs::set_permissions(dest, meta.permissions())?;
    let atime = FileTime::from_last_access_time(meta);
    let mtime = FileTime::from_last_modification_time(meta);
    filetime::set_file_times(dest, atime, mtime)
}

/// Accepts start requests and runs at most one batch at a time. A request
/// made while a batch is in flight is ignored, not queued.
pub struct Runner {
    active: Arc<AtomicBool>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Spawns a worker thread for the job. Returns false without doing
    /// anything if a batch is already running. Events are delivered on the
    /// worker thread: one `Progress` per file, then `Done` or `Failed`.
    pub fn spawn<F>(&self, job: CopyJob, mut on_event: F) -> bool
    where
        F: FnMut(CopyEvent) + Send + 'static,
    {
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }
        let active = self.active.clone();
        thread::spawn(move || {
            match run(&job, |info| on_event(CopyEvent::Progress(info))) {
                Ok(summary) => on_event(CopyEvent::Done(summary)),
                Err(err) => on_event(CopyEvent::Failed(err)),
            }
            active.store(false, Ordering::SeqCst);
        });
        true
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
