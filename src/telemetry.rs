//! Session telemetry events and sinks.
//!
//! The review client records how long each server round-trip took so slow
//! queues and slow classification endpoints can be spotted while debugging.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the review session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a successful fetch of the next pending edit.
    EditLoaded {
        /// Identifier of the loaded edit.
        edit_id: u64,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
    /// Records an accepted classification submission.
    ClassificationSubmitted {
        /// Identifier of the classified edit.
        edit_id: u64,
        /// Label sent to the server.
        classification: String,
        /// Whether the submission carried the confirmation flag.
        confirmed: bool,
        /// Whether the server asked for a confirmed resubmission.
        require_confirmation: bool,
        /// Round-trip latency in milliseconds.
        latency_ms: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{TelemetryEvent, TelemetrySink};

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        events: std::sync::Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingSink {
        pub(crate) fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingSink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .expect("events mutex should be available")
                .push(event);
        }
    }
}
