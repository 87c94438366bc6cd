//! Console Logger
//!
//! Installs a `tracing` subscriber for the demo pages.
//! Every formatted line goes to the browser console (wasm32) or stderr,
//! and the most recent lines are kept in a circular buffer so a page can
//! show them without opening the dev tools.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept by the global ring
pub const DEFAULT_CAPACITY: usize = 200;

static RING: OnceLock<Arc<LogRing>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Bounded buffer of formatted log lines, oldest evicted first
#[derive(Debug)]
pub struct LogRing {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl LogRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

/// `MakeWriter` handing out one [`ConsoleLine`] per event
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    ring: Arc<LogRing>,
    echo: bool,
}

impl ConsoleMakeWriter {
    pub fn new(ring: Arc<LogRing>) -> Self {
        Self { ring, echo: true }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(self.ring.clone(), Level::INFO, self.echo)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(self.ring.clone(), *meta.level(), self.echo)
    }
}

/// Buffers one formatted event and emits it when dropped
pub struct ConsoleLine {
    ring: Arc<LogRing>,
    level: Level,
    echo: bool,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(ring: Arc<LogRing>, level: Level, echo: bool) -> Self {
        Self {
            ring,
            level,
            echo,
            buf: Vec::new(),
        }
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        if text.is_empty() {
            return;
        }
        if self.echo {
            emit(self.level, text);
        }
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        self.ring.push(format!("[{}] {}", stamp, text));
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    let value = text.into();
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{}", text);
}

/// Install the global subscriber for `app_name`
///
/// Fails if another subscriber is already installed.
pub fn init_logger(app_name: &str) -> Result<(), LoggerError> {
    let ring = RING
        .get_or_init(|| Arc::new(LogRing::new(DEFAULT_CAPACITY)))
        .clone();
    install(ConsoleMakeWriter::new(ring))?;
    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

// The browser has no system clock for the fmt timer, the ring stamps lines instead.
#[cfg(target_arch = "wasm32")]
fn install(writer: ConsoleMakeWriter) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .without_time()
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn install(writer: ConsoleMakeWriter) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))
}

/// Lines captured since [`init_logger`], oldest first
pub fn recent_lines() -> Vec<String> {
    RING.get().map(|ring| ring.snapshot()).unwrap_or_default()
}
