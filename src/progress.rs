/// Snapshot of a running batch, written by the copy worker after every file
/// and cloned by the GUI each frame. Stale reads are fine; this is a display
/// metric, not a correctness value.
#[derive(Clone, Default)]
pub struct ProgressInfo {
    pub message: String,
    pub files_done: usize,
    pub files_total: usize,
    pub bytes_copied: u64,
    pub current_file: String,
    /// Rate of the most recently copied file in MB/s, not a running average.
    pub rate_mbs: f64,
}

impl ProgressInfo {
    pub fn fraction(&self) -> f32 {
        if self.files_total == 0 {
            0.0
        } else {
            self.files_done as f32 / self.files_total as f32
        }
    }

    pub fn percent_done(&self) -> f64 {
        if self.files_total == 0 {
            0.0
        } else {
            self.files_done as f64 / self.files_total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_reports_zero_percent() {
        let info = ProgressInfo::default();
        assert_eq!(info.percent_done(), 0.0);
        assert_eq!(info.fraction(), 0.0);
    }

    #[test]
    fn finished_batch_reports_exactly_one_hundred() {
        let info = ProgressInfo {
            files_done: 7,
            files_total: 7,
            ..Default::default()
        };
        assert_eq!(info.percent_done(), 100.0);
        assert_eq!(info.fraction(), 1.0);
    }
}
