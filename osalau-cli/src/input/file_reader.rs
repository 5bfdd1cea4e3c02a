//! File reading utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens input files for line-oriented reading
pub struct FileReader;

impl FileReader {
    /// Open a file as a buffered line reader
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        Ok(BufReader::new(file))
    }
}
