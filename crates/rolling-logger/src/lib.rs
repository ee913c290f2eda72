//! Rolling Logger
//!
//! Writes `tracing` (and bridged `log`) records to `<dir>/<app>.log`, rotating to
//! `<app>.1.log`, `<app>.2.log`, ... once the active file grows past a size limit.
//! The most recent lines are also kept in a circular buffer so the app can show
//! them without touching the filesystem.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Size at which the active log file is rotated
const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Number of files kept on disk, including the active one
const MAX_FILES: usize = 3;
/// Lines kept in memory for `recent_lines`
const BUFFER_LINES: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

static SHARED: OnceLock<Arc<Mutex<LogSink>>> = OnceLock::new();

/// Initialize the global logger.
///
/// Records at INFO and above go to stderr and to the rolling file in `log_dir`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    let file = RollingFile::open(log_dir.as_ref(), app_name, MAX_FILE_BYTES, MAX_FILES)?;
    let sink = Arc::new(Mutex::new(LogSink::new(file, BUFFER_LINES)));
    SHARED
        .set(sink.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SinkWriter(sink)),
        );

    // logcat owns the `log` facade on Android; tracing events still reach the file.
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name.to_string()),
        );
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|_| LoggerError::AlreadyInitialized)?;
    }

    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::util::SubscriberInitExt;
        subscriber
            .try_init()
            .map_err(|_| LoggerError::AlreadyInitialized)?;
    }

    tracing::info!(
        "[{}] {} logger started",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        app_name
    );
    Ok(())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_init()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent `n` log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines(n: usize) -> Vec<String> {
    match SHARED.get() {
        Some(sink) => match sink.lock() {
            Ok(sink) => sink.recent(n),
            Err(_) => Vec::new(),
        },
        None => Vec::new(),
    }
}

fn ensure_init() -> Result<(), LoggerError> {
    if SHARED.get().is_some() {
        Ok(())
    } else {
        Err(LoggerError::NotInitialized)
    }
}

// ========================
// File rotation
// ========================

struct RollingFile {
    dir: PathBuf,
    name: String,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
}

impl RollingFile {
    fn open(dir: &Path, name: &str, max_bytes: u64, max_files: usize) -> Result<Self, LoggerError> {
        fs::create_dir_all(dir).map_err(|source| LoggerError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = Self::path_for(dir, name, 0);
        let file = Self::open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            dir: dir.to_path_buf(),
            name: name.to_string(),
            file,
            written,
            max_bytes,
            max_files: max_files.max(1),
        })
    }

    fn path_for(dir: &Path, name: &str, index: usize) -> PathBuf {
        if index == 0 {
            dir.join(format!("{}.log", name))
        } else {
            dir.join(format!("{}.{}.log", name, index))
        }
    }

    fn open_append(path: &Path) -> Result<File, LoggerError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let oldest = Self::path_for(&self.dir, &self.name, self.max_files - 1);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.max_files - 1).rev() {
            let from = Self::path_for(&self.dir, &self.name, index);
            if from.exists() {
                fs::rename(&from, Self::path_for(&self.dir, &self.name, index + 1))?;
            }
        }
        let active = Self::path_for(&self.dir, &self.name, 0);
        self.file = Self::open_append(&active).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.written = 0;
        Ok(())
    }

    fn write_record(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }
}

// ========================
// Sink (file + circular buffer)
// ========================

struct LogSink {
    file: RollingFile,
    recent: VecDeque<String>,
    capacity: usize,
}

impl LogSink {
    fn new(file: RollingFile, capacity: usize) -> Self {
        Self {
            file,
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, buf: &[u8]) -> io::Result<()> {
        for line in String::from_utf8_lossy(buf).lines() {
            if line.is_empty() {
                continue;
            }
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
        self.file.write_record(buf)
    }

    fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.recent.len().saturating_sub(n);
        self.recent.iter().skip(skip).cloned().collect()
    }
}

#[derive(Clone)]
struct SinkWriter(Arc<Mutex<LogSink>>);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        sink.push(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut sink = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        sink.file.file.flush()
    }
}

impl<'a> MakeWriter<'a> for SinkWriter {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
