//! Analysis history.
//!
//! Each analysis run appends one `YYYY-MM-DD HH:MM:SS | kind | detail` line
//! to a plain-text file. Once the file holds more than `max_lines` lines it
//! is moved aside to `<name>.<YYYYmmdd-HHMMSS>.bak` and a fresh file is
//! started by the next run. Only run metadata is kept, never the records.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// Default maximum number of lines before rotation.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Default history file, relative to the working directory.
pub const DEFAULT_HISTORY_PATH: &str = ".companion/history.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BACKUP_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// One history line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: NaiveDateTime,
    pub kind: String,
    pub detail: String,
}

impl HistoryEntry {
    /// An entry stamped with the current local time. Line breaks in
    /// `detail` become spaces.
    pub fn now(kind: &str, detail: &str) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            kind: kind.to_string(),
            detail: detail.replace(['\r', '\n'], " "),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.detail
        )
    }
}

/// Split a history line back into its fields. The detail may itself
/// contain ` | ` and may be missing.
pub fn parse_line(line: &str) -> Option<HistoryEntry> {
    let mut fields = line.splitn(3, " | ");
    let timestamp = NaiveDateTime::parse_from_str(fields.next()?, TIMESTAMP_FORMAT).ok()?;
    let kind = fields.next()?.to_string();
    let detail = fields.next().unwrap_or_default().to_string();
    Some(HistoryEntry {
        timestamp,
        kind,
        detail,
    })
}

/// Append-only log of analysis runs.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
    max_lines: usize,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Append a run, creating the parent directory on first use.
    pub fn record(&self, kind: &str, detail: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{}", HistoryEntry::now(kind, detail))?;
        }

        if self.read_all()?.len() > self.max_lines {
            self.rotate()?;
        }
        Ok(())
    }

    /// Every line in the file; a missing file reads as empty.
    pub fn read_all(&self) -> io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// The last `n` lines, oldest first.
    pub fn read_recent(&self, n: usize) -> io::Result<Vec<String>> {
        let mut lines = self.read_all()?;
        let keep_from = lines.len().saturating_sub(n);
        Ok(lines.split_off(keep_from))
    }

    /// The last `n` lines that parse as entries.
    pub fn read_entries(&self, n: usize) -> io::Result<Vec<HistoryEntry>> {
        Ok(self
            .read_recent(n)?
            .iter()
            .filter_map(|line| parse_line(line))
            .collect())
    }

    /// Move the file to a timestamped backup next to it and return the
    /// backup path. Does nothing when the file does not exist.
    pub fn rotate(&self) -> io::Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let name = self
            .path
            .file_name()
            .map_or_else(|| "history.log".into(), |n| n.to_string_lossy());
        let stamp = Local::now().format(BACKUP_STAMP_FORMAT);
        let mut backup = self.path.with_file_name(format!("{}.{}.bak", name, stamp));
        let mut attempt = 1;
        while backup.exists() {
            backup = self
                .path
                .with_file_name(format!("{}.{}-{}.bak", name, stamp, attempt));
            attempt += 1;
        }

        fs::rename(&self.path, &backup)?;
        debug!(backup = %backup.display(), "rotated history");
        Ok(Some(backup))
    }
}
