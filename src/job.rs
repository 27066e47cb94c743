use std::path::PathBuf;

/// One batch copy request: the chosen directories plus the files found by
/// traversal, in enumeration order. Dropped once the batch finishes.
#[derive(Clone)]
pub struct CopyJob {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub files: Vec<PathBuf>,
}

impl CopyJob {
    pub fn new(source: PathBuf, dest: PathBuf, files: Vec<PathBuf>) -> Self {
        Self { source, dest, files }
    }
}
