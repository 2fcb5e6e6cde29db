//! Tack decision logic and heading selection while beating upwind
//!
//! Runs once per control cycle. Decides whether the demanded heading is
//! sailable directly, whether a tack must be triggered, and which no-go
//! boundary to hold otherwise. Once a tack is triggered its target
//! heading stays pinned until the vehicle comes about or the maneuver
//! times out, so the wind vane swinging through the turn cannot abort
//! the maneuver halfway.

use libm::fabsf;

use crate::geo::{wrap_2pi, wrap_pi};
use crate::navigation::NavTarget;
use crate::tack::report::{SailEvent, SailTelemetry};
use crate::tack::session::TackSession;
use crate::wind::{
    apparent_angle_for_heading, in_no_go, is_tack_not_gybe, no_go_boundaries, Tack, WindState,
};

/// Heading error at which a tack counts as complete, degrees.
pub const TACKING_ACCURACY_DEG: f32 = 10.0;

/// Time limit for a tack to come about, milliseconds.
pub const TACK_TIMEOUT_MS: u64 = 5_000;

/// Cooldown after a tack ends before the next one may trigger,
/// milliseconds.
pub const TACK_RETRY_COOLDOWN_MS: u64 = 5_000;

/// Window within which a user tack request stays valid, milliseconds.
pub const USER_REQUEST_WINDOW_MS: u64 = 500;

/// Motor assistance may stretch a stalled tack to this many timeout
/// periods before it is abandoned.
const ASSIST_TIMEOUT_MS: u64 = 3 * TACK_TIMEOUT_MS;

/// Tack state machine and heading selector.
///
/// Owns the [`TackSession`] carried between cycles. All sensor data,
/// navigation demands and the clock arrive as call arguments, so the
/// engine itself never touches platform services and runs unchanged in
/// host tests.
pub struct TackEngine {
    session: TackSession,
}

impl TackEngine {
    pub fn new() -> Self {
        Self {
            session: TackSession::new(),
        }
    }

    /// Read-only view of the tack session.
    pub fn session(&self) -> &TackSession {
        &self.session
    }

    /// Record a user tack request from an autonomous mode.
    ///
    /// The request is consumed by the next [`evaluate`] cycle and
    /// expires after [`USER_REQUEST_WINDOW_MS`]. Ignored while a tack
    /// is already running.
    ///
    /// [`evaluate`]: TackEngine::evaluate
    pub fn request_tack(&mut self, now_ms: u64) {
        if self.session.tacking() {
            return;
        }
        self.session.request(now_ms);
    }

    /// Start a tack that mirrors the current heading across the wind,
    /// for manual modes without a navigation demand.
    ///
    /// Pins the heading on the far side of the wind at the same angle
    /// off it the vehicle holds now. Ignored while a tack is already
    /// running. Poll [`reflected_tack_heading`] to steer the maneuver.
    ///
    /// [`reflected_tack_heading`]: TackEngine::reflected_tack_heading
    pub fn request_tack_reflected(&mut self, yaw_rad: f32, true_wind_rad: f32, now_ms: u64) {
        if self.session.tacking() {
            return;
        }
        let reflected = wrap_2pi(yaw_rad + 2.0 * wrap_pi(true_wind_rad - yaw_rad));
        self.session.begin(reflected, now_ms);
    }

    /// Target heading for a reflected tack, radians.
    ///
    /// Returns the pinned heading while the maneuver runs and `None`
    /// once it completes or times out. Completion and timeout use the
    /// same thresholds as autonomous tacks, without motor assistance.
    pub fn reflected_tack_heading(&mut self, yaw_rad: f32, now_ms: u64) -> Option<f32> {
        let target = self.session.heading_rad()?;
        if fabsf(wrap_pi(target - yaw_rad)) <= TACKING_ACCURACY_DEG.to_radians()
            || now_ms.saturating_sub(self.session.started_ms()) > TACK_TIMEOUT_MS
        {
            self.session.clear(now_ms);
            return None;
        }
        Some(target)
    }

    /// Select the heading to steer this cycle, radians.
    ///
    /// Passes the demanded heading through when it is sailable on the
    /// current tack. Otherwise decides between holding the current
    /// no-go boundary and triggering a tack to the other one. Tacks
    /// trigger on a side change that crosses the bow through the wind,
    /// on a fresh user request, or on leaving the cross track corridor,
    /// rate limited by [`TACK_RETRY_COOLDOWN_MS`].
    ///
    /// `assist_available` reports whether the motor policy allows
    /// assistance, which lets a stalled tack keep trying beyond the
    /// normal timeout.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &mut self,
        nav: &NavTarget,
        wind: &WindState,
        yaw_rad: f32,
        no_go_rad: f32,
        assist_available: bool,
        now_ms: u64,
        telemetry: &mut dyn SailTelemetry,
    ) -> f32 {
        let mut should_tack = false;
        let current_tack = Tack::from_apparent(wind.apparent_wind_rad);
        let desired = nav.desired_heading_rad;

        // outside the no-go cone the demand is sailable as-is, unless
        // reaching it means putting the bow through the wind
        if !in_no_go(wind.true_wind_rad, desired, no_go_rad) && !self.session.tacking() {
            let candidate_apparent = apparent_angle_for_heading(wind.true_wind_rad, desired);
            let new_tack = Tack::from_apparent(candidate_apparent);
            if new_tack != current_tack
                && is_tack_not_gybe(wind.apparent_wind_rad, candidate_apparent)
            {
                should_tack = true;
            }
            if !should_tack {
                return desired;
            }
        }

        // user requested tack, valid for half a second
        if !should_tack && !self.session.tacking() {
            if let Some(requested_ms) = self.session.take_request() {
                should_tack = now_ms.saturating_sub(requested_ms) < USER_REQUEST_WINDOW_MS;
            }
        }

        // corridor breach tacks only when the current tack carries the
        // vehicle further out
        let corridor = nav.corridor_half_width_m;
        if fabsf(nav.cross_track_error_m) >= corridor
            && corridor > 0.0
            && !should_tack
            && !self.session.tacking()
        {
            if nav.cross_track_error_m > 0.0 && current_tack == Tack::Starboard {
                should_tack = true;
            }
            if nav.cross_track_error_m < 0.0 && current_tack == Tack::Port {
                should_tack = true;
            }
        }

        // port tack holds the left boundary, starboard the right
        let (left_heading, right_heading) = no_go_boundaries(wind.true_wind_rad, no_go_rad);

        if should_tack && now_ms.saturating_sub(self.session.cleared_ms()) >= TACK_RETRY_COOLDOWN_MS
        {
            telemetry.notify(SailEvent::TackStarted);
            telemetry.record_tack();
            let target = match current_tack {
                Tack::Port => right_heading,
                Tack::Starboard => left_heading,
            };
            self.session.begin(target, now_ms);
        }

        // hold the pinned heading until the tack completes or times out
        if let Some(target) = self.session.heading_rad() {
            if fabsf(wrap_pi(target - yaw_rad)) <= TACKING_ACCURACY_DEG.to_radians() {
                self.session.clear(now_ms);
            } else if now_ms.saturating_sub(self.session.started_ms()) > TACK_TIMEOUT_MS {
                if assist_available
                    && now_ms.saturating_sub(self.session.started_ms()) < ASSIST_TIMEOUT_MS
                {
                    self.session.engage_assist();
                } else {
                    telemetry.notify(SailEvent::TackTimedOut);
                    self.session.clear(now_ms);
                }
            }
            return target;
        }

        match current_tack {
            Tack::Port => left_heading,
            Tack::Starboard => right_heading,
        }
    }
}

impl Default for TackEngine {
    fn default() -> Self {
        Self::new()
    }
}
