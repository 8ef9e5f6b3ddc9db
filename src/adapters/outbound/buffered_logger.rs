use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

enum Level {
    Info,
    Warn,
    Error,
}

struct LogLine {
    level: Level,
    msg: String,
}

/// Non-blocking logger for the hot loop. Lines are handed to `sink` from a
/// background task; when the buffer is full the line is dropped and counted.
pub struct BufferedLogger {
    sender: mpsc::Sender<LogLine>,
    dropped: AtomicU64,
}

impl BufferedLogger {
    fn enqueue(&self, level: Level, msg: &str) {
        let line = LogLine {
            level,
            msg: msg.to_string(),
        };
        if self.sender.try_send(line).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) {
        self.enqueue(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.enqueue(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.enqueue(Level::Error, msg);
    }
}

/// Must be called inside a tokio runtime.
pub fn init_buffered_logger(sink: DynLogger, capacity: usize) -> Arc<BufferedLogger> {
    let (tx, mut rx) = mpsc::channel::<LogLine>(capacity.max(1));

    tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            match line.level {
                Level::Info => sink.info(&line.msg),
                Level::Warn => sink.warn(&line.msg),
                Level::Error => sink.error(&line.msg),
            }
        }
    });

    Arc::new(BufferedLogger {
        sender: tx,
        dropped: AtomicU64::new(0),
    })
}
