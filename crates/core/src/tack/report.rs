//! Telemetry events raised by the tack state machine
//!
//! The core never talks to a ground station directly. Notable events
//! are handed to a [`SailTelemetry`] sink supplied by the caller and
//! forwarded from there to whatever link the platform has.

/// Notable sailing events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SailEvent {
    /// A tack was triggered and the heading is now pinned
    TackStarted,
    /// A tack ran out of time and was abandoned
    TackTimedOut,
    /// A motor mode change was rejected for lack of a thrust source
    MotorUnavailable,
}

/// Sink for sailing events and counters.
///
/// Implementations typically forward [`SailEvent`]s as status text and
/// feed the tack counter into the vehicle statistics. Methods take
/// `&mut self` so recording needs no interior mutability.
pub trait SailTelemetry {
    /// Report a notable event.
    fn notify(&mut self, event: SailEvent);

    /// Count one triggered tack.
    fn record_tack(&mut self);
}

/// Sink that discards everything, for hosts without a telemetry link.
pub struct NullTelemetry;

impl SailTelemetry for NullTelemetry {
    fn notify(&mut self, _event: SailEvent) {}

    fn record_tack(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_telemetry_accepts_events() {
        let mut sink = NullTelemetry;
        sink.notify(SailEvent::TackStarted);
        sink.notify(SailEvent::TackTimedOut);
        sink.record_tack();
    }

    #[test]
    fn test_event_debug_names() {
        extern crate std;
        use std::format;
        assert_eq!(format!("{:?}", SailEvent::TackStarted), "TackStarted");
        assert_eq!(format!("{:?}", SailEvent::MotorUnavailable), "MotorUnavailable");
    }
}
