//! Print handler: the interpreter's output sink seam.
//!
//! `print` commands emit whole lines, synchronously and in document order.
//! The sink is swappable so tests can capture output instead of writing to
//! stdout. Enum dispatch keeps the hot path free of vtable indirection.

use parking_lot::Mutex;
use std::sync::Arc;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Emit one line.
    pub fn println(&self, line: &str) {
        println!("{line}");
    }
}

/// Print handler that captures output to a buffer, for tests.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Emit one line into the buffer.
    pub fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything emitted so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drop captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout(StdoutPrintHandler),
    /// Captures to a buffer (tests).
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Emit one line.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.output(),
        }
    }
}

/// Shared print handler that can be handed to an interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create the default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
