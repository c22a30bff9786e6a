//! Operational telemetry events and sinks.
//!
//! Events stay on the local machine. The binary writes them to stderr as
//! JSON lines so a session can be reconstructed when debugging.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// A structured telemetry event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A login completed and its session was stored.
    LoginSucceeded {
        /// Display name of the signed-in user.
        user: String,
    },
    /// The persisted session was cleared by a logout.
    SessionCleared,
    /// A review passed validation and was handed off.
    ReviewSubmitted {
        /// Star rating, 1 to 5.
        rating: u8,
        /// Number of attached media files.
        media_count: usize,
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

/// Writes events to stderr as JSON lines.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln!(io::stderr().lock(), "{serialised}");
    }
}

/// Keeps events in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct InMemoryTelemetrySink {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl InMemoryTelemetrySink {
    /// Removes and returns every recorded event.
    #[must_use]
    pub fn take(&self) -> Vec<TelemetryEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl TelemetrySink for InMemoryTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{InMemoryTelemetrySink, TelemetryEvent, TelemetrySink};

    #[test]
    fn in_memory_sink_returns_events_in_order() {
        let sink = InMemoryTelemetrySink::default();
        sink.record(TelemetryEvent::SessionCleared);
        sink.record(TelemetryEvent::ReviewSubmitted {
            rating: 4,
            media_count: 2,
        });

        assert_eq!(
            sink.take(),
            vec![
                TelemetryEvent::SessionCleared,
                TelemetryEvent::ReviewSubmitted {
                    rating: 4,
                    media_count: 2,
                },
            ]
        );
        assert!(sink.take().is_empty());
    }

    #[rstest]
    #[case(
        TelemetryEvent::LoginSucceeded { user: "Ayu".to_owned() },
        r#"{"type":"login_succeeded","user":"Ayu"}"#
    )]
    #[case(TelemetryEvent::SessionCleared, r#"{"type":"session_cleared"}"#)]
    #[case(
        TelemetryEvent::ReviewSubmitted { rating: 5, media_count: 0 },
        r#"{"type":"review_submitted","rating":5,"media_count":0}"#
    )]
    fn events_serialise_as_tagged_json(#[case] event: TelemetryEvent, #[case] expected: &str) {
        let encoded = serde_json::to_string(&event).expect("event should serialise");

        assert_eq!(encoded, expected);
    }
}
