//! Mutable state carried across tack maneuvers
//!
//! A tack is not instantaneous: once triggered, the target heading is
//! pinned here and held across update cycles until the vehicle comes
//! about or gives up. The session also remembers when the last tack
//! ended so retries can be rate limited, and holds any pending user
//! tack request until the decision logic consumes it.

/// State of the current and most recent tack maneuvers.
///
/// All timestamps come from the caller's monotonic millisecond clock.
pub struct TackSession {
    /// True while a tack target heading is pinned
    tacking: bool,
    /// Pinned target heading, radians, valid while `tacking`
    tack_heading_rad: f32,
    /// When the running tack was triggered, valid while `tacking`
    started_ms: u64,
    /// When the last tack ended, zero before the first tack
    cleared_ms: u64,
    /// Pending user tack request, consumed by the decision logic
    request_ms: Option<u64>,
    /// True once motor assistance was engaged to push the tack through
    assist: bool,
}

impl TackSession {
    pub fn new() -> Self {
        Self {
            tacking: false,
            tack_heading_rad: 0.0,
            started_ms: 0,
            cleared_ms: 0,
            request_ms: None,
            assist: false,
        }
    }

    /// True while a tack is in progress.
    pub fn tacking(&self) -> bool {
        self.tacking
    }

    /// Pinned target heading while a tack is in progress.
    pub fn heading_rad(&self) -> Option<f32> {
        if self.tacking {
            Some(self.tack_heading_rad)
        } else {
            None
        }
    }

    /// True while motor assistance is engaged for the running tack.
    pub fn assist_engaged(&self) -> bool {
        self.assist
    }

    /// Pin a tack toward `heading_rad`.
    pub(crate) fn begin(&mut self, heading_rad: f32, now_ms: u64) {
        self.tacking = true;
        self.tack_heading_rad = heading_rad;
        self.started_ms = now_ms;
    }

    /// End the running tack, discarding any pending request.
    pub(crate) fn clear(&mut self, now_ms: u64) {
        self.tacking = false;
        self.assist = false;
        self.request_ms = None;
        self.cleared_ms = now_ms;
    }

    /// Record a user tack request.
    pub(crate) fn request(&mut self, now_ms: u64) {
        self.request_ms = Some(now_ms);
    }

    /// Consume the pending user request, returning when it was made.
    pub(crate) fn take_request(&mut self) -> Option<u64> {
        self.request_ms.take()
    }

    /// Engage motor assistance for the running tack.
    pub(crate) fn engage_assist(&mut self) {
        self.assist = true;
    }

    pub(crate) fn started_ms(&self) -> u64 {
        self.started_ms
    }

    pub(crate) fn cleared_ms(&self) -> u64 {
        self.cleared_ms
    }
}

impl Default for TackSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = TackSession::new();
        assert!(!session.tacking());
        assert!(session.heading_rad().is_none());
        assert!(!session.assist_engaged());
        assert_eq!(session.cleared_ms(), 0);
    }

    #[test]
    fn test_begin_pins_heading() {
        let mut session = TackSession::new();
        session.begin(1.5, 10_000);
        assert!(session.tacking());
        assert_eq!(session.heading_rad(), Some(1.5));
        assert_eq!(session.started_ms(), 10_000);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = TackSession::new();
        session.request(9_000);
        session.begin(1.5, 10_000);
        session.engage_assist();
        session.clear(16_000);
        assert!(!session.tacking());
        assert!(session.heading_rad().is_none());
        assert!(!session.assist_engaged());
        assert_eq!(session.cleared_ms(), 16_000);
        assert!(
            session.take_request().is_none(),
            "pending request dies with the tack"
        );
    }

    #[test]
    fn test_take_request_consumes() {
        let mut session = TackSession::new();
        session.request(8_000);
        assert_eq!(session.take_request(), Some(8_000));
        assert_eq!(session.take_request(), None);
    }
}
