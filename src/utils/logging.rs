use chrono::Local;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum number of log lines kept for the plugin log panel
const MAX_LOG_ENTRIES: usize = 1000;

/// Env var holding the tracing filter directive
pub const LOG_FILTER_ENV: &str = "T3S_LOG";

/// Env var that echoes every captured line to stderr
pub const LOG_ECHO_ENV: &str = "T3S_DEBUG";

/// A captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Level, target: &str, message: String) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            level: level.to_string().to_uppercase(),
            target: target.to_string(),
            message,
        }
    }

    /// Format for the log panel
    pub fn format_for_display(&self) -> String {
        format!(
            "[{}] {} [{}] {}",
            self.timestamp, self.level, self.target, self.message
        )
    }

    /// Parse one line of the compact fmt layer output: "LEVEL target: message"
    pub fn parse_compact(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let levels = [
            ("TRACE ", Level::TRACE),
            ("DEBUG ", Level::DEBUG),
            ("INFO ", Level::INFO),
            ("WARN ", Level::WARN),
            ("ERROR ", Level::ERROR),
        ];

        let Some((level, rest)) = levels
            .iter()
            .find_map(|(tag, level)| line.strip_prefix(tag).map(|rest| (*level, rest.trim())))
        else {
            return Some(Self::new(Level::INFO, "general", line.to_string()));
        };

        // Targets never contain spaces; anything else is part of the message
        let (target, message) = match rest.split_once(':') {
            Some((target, message)) if !target.contains(' ') => (target, message.trim()),
            _ => ("general", rest),
        };

        Some(Self::new(level, target, message.to_string()))
    }
}

/// Thread-safe ring buffer of recent log lines
#[derive(Clone, Default)]
pub struct LogRingBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogRingBuffer {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// The last `count` entries, oldest first
    pub fn get_recent(&self, count: usize) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| {
                let start = entries.len().saturating_sub(count);
                entries.iter().skip(start).cloned().collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// fmt writer that feeds the ring buffer
#[derive(Clone)]
pub struct RingBufferWriter {
    buffer: LogRingBuffer,
    echo: bool,
}

impl RingBufferWriter {
    pub fn new(buffer: LogRingBuffer) -> Self {
        Self {
            buffer,
            echo: std::env::var(LOG_ECHO_ENV).is_ok(),
        }
    }
}

impl std::io::Write for RingBufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(text) = std::str::from_utf8(buf) {
            for line in text.lines() {
                if let Some(entry) = LogEntry::parse_compact(line) {
                    if self.echo {
                        eprintln!("{}", entry.format_for_display());
                    }
                    self.buffer.push(entry);
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RingBufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

static LOG_BUFFER: OnceLock<LogRingBuffer> = OnceLock::new();

/// The process-wide log buffer, created on first use
pub fn log_buffer() -> LogRingBuffer {
    LOG_BUFFER.get_or_init(LogRingBuffer::new).clone()
}

/// Install the tracing subscriber that captures into the ring buffer.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() -> LogRingBuffer {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let buffer = log_buffer();

    let fmt_layer = fmt::layer()
        .with_writer(RingBufferWriter::new(buffer.clone()))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .without_time()
        .compact();

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(target: "system", "Logging initialized");
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_line() {
        let entry = LogEntry::parse_compact("DEBUG debounce: scheduled key=completion").unwrap();
        assert_eq!(entry.level, "DEBUG");
        assert_eq!(entry.target, "debounce");
        assert_eq!(entry.message, "scheduled key=completion");
    }

    #[test]
    fn test_parse_compact_without_target() {
        let entry = LogEntry::parse_compact("WARN something odd: happened").unwrap();
        assert_eq!(entry.level, "WARN");
        assert_eq!(entry.target, "general");
        assert_eq!(entry.message, "something odd: happened");
    }

    #[test]
    fn test_parse_compact_no_level() {
        let entry = LogEntry::parse_compact("plain text").unwrap();
        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.message, "plain text");
        assert!(LogEntry::parse_compact("   ").is_none());
    }

    #[test]
    fn test_ring_buffer_caps_entries() {
        let buffer = LogRingBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            buffer.push(LogEntry::new(Level::INFO, "test", format!("line {}", i)));
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);

        let recent = buffer.get_recent(2);
        assert_eq!(recent[0].message, format!("line {}", MAX_LOG_ENTRIES + 3));
        assert_eq!(recent[1].message, format!("line {}", MAX_LOG_ENTRIES + 4));

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_splits_lines() {
        use std::io::Write;

        let buffer = LogRingBuffer::new();
        let mut writer = RingBufferWriter {
            buffer: buffer.clone(),
            echo: false,
        };
        writer
            .write_all(b"INFO t3s: first\nERROR files: second\n")
            .unwrap();

        let entries = buffer.get_recent(10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].level, "ERROR");
        assert_eq!(entries[1].target, "files");
    }
}
