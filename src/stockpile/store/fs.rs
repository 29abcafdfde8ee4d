use super::{decode_bytes, DataStore, LoadReport};
use crate::codec;
use crate::error::{Result, StockError};
use crate::model::Record;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport {
                first_run: true,
                ..LoadReport::default()
            });
        }
        let content = fs::read(&self.path).map_err(StockError::Io)?;
        Ok(decode_bytes(&content))
    }

    fn save_all(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        // File::create truncates; the handle is closed when the writer drops.
        let file = File::create(&self.path).map_err(StockError::Io)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            writeln!(writer, "{}", codec::encode(record)).map_err(StockError::Io)?;
        }
        writer.flush().map_err(StockError::Io)?;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
