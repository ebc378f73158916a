use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use hop_engine::FrameRecord;

use crate::error::RunnerError;

/// Line-per-step log of the player's position and velocity.
/// One file per run: created (or truncated) on open, appended on every record.
pub struct FrameLog<W: Write> {
    out: BufWriter<W>,
    lines: u64,
}

impl FrameLog<File> {
    /// Truncate or create the log file, creating parent directories as needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RunnerError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        log::info!("frame log: {}", path.display());
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> FrameLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            out: BufWriter::new(writer),
            lines: 0,
        }
    }

    pub fn record(&mut self, record: &FrameRecord) -> Result<(), RunnerError> {
        writeln!(self.out, "{record}")?;
        self.lines += 1;
        Ok(())
    }

    pub fn record_all<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a FrameRecord>,
    ) -> Result<(), RunnerError> {
        for record in records {
            self.record(record)?;
        }
        Ok(())
    }

    /// Lines written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn flush(&mut self) -> Result<(), RunnerError> {
        self.out.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, RunnerError> {
        self.out
            .into_inner()
            .map_err(|e| RunnerError::Io(e.into_error()))
    }
}
