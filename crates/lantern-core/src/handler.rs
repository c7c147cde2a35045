//! Log record handlers: the console sink and the rotating file sink.
//!
//! Every handler serializes its writes through a mutex so concurrent
//! emissions never interleave bytes within a single record.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use lantern_types::{HandlerConfig, LanternError, Result, Severity, SinkConfig};

use crate::format::Formatter;
use crate::record::Record;
use crate::term;

/// A destination for log records.
pub trait Handler: Send + Sync {
    /// Minimum severity this handler processes.
    fn level(&self) -> Severity;

    /// Write a record to the sink, applying the handler's own threshold.
    fn emit(&self, record: &Record);

    /// Whether this handler writes to the console.
    ///
    /// Used when installing the colorized console formatter, which
    /// replaces existing console handlers on the root logger.
    fn is_console(&self) -> bool {
        false
    }
}

/// Build a handler from its declarative configuration.
pub fn build_handler(config: &HandlerConfig, formatter: Formatter) -> Result<Arc<dyn Handler>> {
    match &config.sink {
        SinkConfig::Console {} => Ok(Arc::new(ConsoleHandler::new(config.level, formatter))),
        SinkConfig::RotatingFile {
            filename,
            max_bytes,
            backup_count,
        } => Ok(Arc::new(RotatingFileHandler::new(
            config.level,
            formatter,
            filename.clone(),
            *max_bytes,
            *backup_count,
        )?)),
    }
}

/// Handler writing formatted records to stderr.
pub struct ConsoleHandler {
    level: Severity,
    formatter: Formatter,
    colorize: bool,
    lock: Mutex<()>,
}

impl ConsoleHandler {
    /// Create a plain console handler.
    pub fn new(level: Severity, formatter: Formatter) -> Self {
        Self {
            level,
            formatter,
            colorize: false,
            lock: Mutex::new(()),
        }
    }

    /// Create a console handler that colors each line by severity.
    pub fn colorized(level: Severity, formatter: Formatter) -> Self {
        Self {
            level,
            formatter,
            colorize: true,
            lock: Mutex::new(()),
        }
    }
}

impl Handler for ConsoleHandler {
    fn level(&self) -> Severity {
        self.level
    }

    fn emit(&self, record: &Record) {
        if record.severity < self.level {
            return;
        }
        let mut line = self.formatter.render(record);
        if self.colorize {
            line = term::paint(record.severity, &line);
        }
        let _guard = self.lock.lock();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
    }

    fn is_console(&self) -> bool {
        true
    }
}

#[derive(Debug)]
struct FileState {
    writer: BufWriter<File>,
    size: u64,
}

/// Handler appending formatted records to a file, rolling it over once it
/// would grow past a size threshold.
///
/// Rollover renames `f` to `f.1`, shifting existing backups up and
/// discarding the oldest beyond `backup_count`. A `backup_count` of 0
/// truncates the file in place; a `max_bytes` of 0 disables rotation.
#[derive(Debug)]
pub struct RotatingFileHandler {
    level: Severity,
    formatter: Formatter,
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    state: Mutex<FileState>,
}

impl RotatingFileHandler {
    /// Open the log file in append mode.
    ///
    /// Parent directories are not created; a missing log directory is an
    /// apply failure the bootstrapper degrades on.
    pub fn new(
        level: Severity,
        formatter: Formatter,
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
    ) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LanternError::ConfigApply(format!(
                    "cannot open log file {}: {}",
                    path.display(),
                    e
                ))
            })?;
        let size = file
            .metadata()
            .map_err(|e| LanternError::ConfigApply(e.to_string()))?
            .len();

        Ok(Self {
            level,
            formatter,
            path,
            max_bytes,
            backup_count,
            state: Mutex::new(FileState {
                writer: BufWriter::new(file),
                size,
            }),
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn try_emit(&self, record: &Record) -> io::Result<()> {
        let line = format!("{}\n", self.formatter.render(record));
        let mut state = self.state.lock();

        if self.max_bytes > 0 && state.size > 0 && state.size + line.len() as u64 > self.max_bytes
        {
            self.rollover(&mut state)?;
        }

        state.writer.write_all(line.as_bytes())?;
        state.writer.flush()?;
        state.size += line.len() as u64;
        Ok(())
    }

    fn rollover(&self, state: &mut FileState) -> io::Result<()> {
        state.writer.flush()?;

        if self.backup_count > 0 {
            let oldest = self.backup_path(self.backup_count);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for i in (1..self.backup_count).rev() {
                let src = self.backup_path(i);
                if src.exists() {
                    fs::rename(&src, self.backup_path(i + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            state.writer = BufWriter::new(file);
        } else {
            let file = OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&self.path)?;
            state.writer = BufWriter::new(file);
        }

        state.size = 0;
        Ok(())
    }
}

impl Handler for RotatingFileHandler {
    fn level(&self) -> Severity {
        self.level
    }

    fn emit(&self, record: &Record) {
        if record.severity < self.level {
            return;
        }
        if let Err(e) = self.try_emit(record) {
            eprintln!(
                "lantern: failed to write log record to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for RotatingFileHandler {
    fn drop(&mut self) {
        let _ = self.state.lock().writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CallSite;
    use tempfile::TempDir;

    fn record(severity: Severity, message: &str) -> Record {
        Record::new(
            severity,
            CallSite {
                module: "test",
                file: "handler.rs",
                line: 1,
            },
            message.to_string(),
        )
    }

    fn message_formatter() -> Formatter {
        Formatter::new("{message}")
    }

    #[test]
    fn appends_records_to_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.log");

        let handler =
            RotatingFileHandler::new(Severity::Debug, message_formatter(), &path, 0, 0).unwrap();
        handler.emit(&record(Severity::Info, "first"));
        handler.emit(&record(Severity::Info, "second"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn handler_threshold_filters_records() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.log");

        let handler =
            RotatingFileHandler::new(Severity::Warning, message_formatter(), &path, 0, 0).unwrap();
        handler.emit(&record(Severity::Info, "dropped"));
        handler.emit(&record(Severity::Error, "kept"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "kept\n");
    }

    #[test]
    fn rotation_keeps_at_most_backup_count_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.log");

        // Each record is 11 bytes with its newline; two fit under the
        // threshold, the third triggers a rollover.
        let handler =
            RotatingFileHandler::new(Severity::Debug, message_formatter(), &path, 25, 2).unwrap();
        for i in 1..=8 {
            handler.emit(&record(Severity::Info, &format!("record-{:03}", i)));
        }

        let active = fs::read_to_string(&path).unwrap();
        assert_eq!(active, "record-007\nrecord-008\n");

        let backup1 = fs::read_to_string(path.with_extension("log.1")).unwrap();
        assert_eq!(backup1, "record-005\nrecord-006\n");

        let backup2 = fs::read_to_string(path.with_extension("log.2")).unwrap();
        assert_eq!(backup2, "record-003\nrecord-004\n");

        // Oldest records fell off the end
        assert!(!path.with_extension("log.3").exists());
    }

    #[test]
    fn zero_backup_count_truncates_in_place() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.log");

        let handler =
            RotatingFileHandler::new(Severity::Debug, message_formatter(), &path, 25, 0).unwrap();
        for i in 1..=3 {
            handler.emit(&record(Severity::Info, &format!("record-{:03}", i)));
        }

        let active = fs::read_to_string(&path).unwrap();
        assert_eq!(active, "record-003\n");
        assert!(!path.with_extension("log.1").exists());
    }

    #[test]
    fn missing_log_directory_is_an_apply_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("test.log");

        let err = RotatingFileHandler::new(Severity::Debug, message_formatter(), &path, 0, 0)
            .unwrap_err();
        assert!(matches!(err, LanternError::ConfigApply(_)));
    }

    #[test]
    fn oversized_records_still_land_in_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.log");

        let handler =
            RotatingFileHandler::new(Severity::Debug, message_formatter(), &path, 8, 1).unwrap();
        handler.emit(&record(Severity::Info, "longer than the threshold"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("longer than the threshold"));
    }
}
