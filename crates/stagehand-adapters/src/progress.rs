//! Progress sink adapters implementing the core `ProgressSink` port.

use std::sync::{Arc, Mutex};

use stagehand_core::application::ports::ProgressSink;
use tracing::info;

/// Collects progress lines in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notices emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressSink for BufferSink {
    fn notice(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Routes progress lines into the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for TracingSink {
    fn notice(&self, message: &str) {
        info!("{}", message.trim_start());
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_preserves_order() {
        let sink = BufferSink::new();
        sink.notice("first");
        sink.notice("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }
}
