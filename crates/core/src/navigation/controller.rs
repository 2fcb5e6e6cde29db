//! Sailing navigation controller
//!
//! Ties the wind geometry, tack engine, motor policy and mainsail trim
//! together behind the surface the vehicle modes call. The controller
//! holds no sensor handles; each cycle the caller samples wind, pose
//! and navigation demand and passes them in along with the monotonic
//! clock.

use libm::fabsf;

use crate::geo::wrap_pi;
use crate::motor::{MotorError, MotorMode, MotorPolicy};
use crate::navigation::types::NavTarget;
use crate::parameters::sail::{SailParams, TackType, WaypointMode};
use crate::sail::trim::{SailTrimStrategy, TrimInput};
use crate::tack::engine::TackEngine;
use crate::tack::report::{SailEvent, SailTelemetry};
use crate::tack::session::TackSession;
use crate::wind::{self, WindState, NO_GO_PAD_DEG};

/// Top level sailing controller.
///
/// One instance lives for the whole flight. Parameters are replaced
/// wholesale on parameter updates through [`set_params`].
///
/// [`set_params`]: SailController::set_params
pub struct SailController {
    params: SailParams,
    motor: MotorPolicy,
    engine: TackEngine,
    trim: SailTrimStrategy,
}

impl SailController {
    /// Create the controller and arm motor assistance. Vehicles without
    /// a motor silently keep the motor policy disabled.
    pub fn new(params: SailParams, motor_fitted: bool) -> Self {
        let mut motor = MotorPolicy::new();
        let _ = motor.set_mode(MotorMode::Assist, motor_fitted);
        Self {
            trim: SailTrimStrategy::from_params(&params),
            params,
            motor,
            engine: TackEngine::new(),
        }
    }

    /// True when sailing control is configured on.
    pub fn enabled(&self) -> bool {
        self.params.enable
    }

    /// True when upwind tacking maneuvers are allowed. Sailing must be
    /// enabled and the motor must not already be carrying the vehicle,
    /// either continuously or because the wind died.
    pub fn tack_enabled(&self, wind: &WindState) -> bool {
        self.enabled()
            && self.motor.mode() != MotorMode::Always
            && !self
                .motor
                .low_wind_assist(wind, self.params.wind_speed_min_mps)
    }

    /// True when the demanded heading cannot be sailed directly and the
    /// navigation layer should expect zig-zag legs instead of a
    /// straight one. The check pads the no-go cone so a leg close to
    /// the cone edge does not flip the answer back and forth.
    pub fn use_indirect_route(&self, desired_heading_rad: f32, wind: &WindState) -> bool {
        if !self.tack_enabled(wind) {
            return false;
        }
        if self.engine.session().tacking() {
            return true;
        }
        let padded = (self.params.no_go_angle_deg + NO_GO_PAD_DEG).to_radians();
        fabsf(wrap_pi(wind.true_wind_rad - desired_heading_rad)) <= padded
    }

    /// Heading to steer this cycle, radians.
    ///
    /// Falls back to the demanded heading whenever tacking is
    /// unavailable, which also covers motoring straight upwind.
    pub fn calc_heading(
        &mut self,
        nav: &NavTarget,
        wind: &WindState,
        yaw_rad: f32,
        now_ms: u64,
        telemetry: &mut dyn SailTelemetry,
    ) -> f32 {
        if !self.tack_enabled(wind) {
            return nav.desired_heading_rad;
        }
        let assist_available = self.motor.mode() == MotorMode::Assist;
        self.engine.evaluate(
            nav,
            wind,
            yaw_rad,
            self.params.no_go_rad(),
            assist_available,
            now_ms,
            telemetry,
        )
    }

    /// True when the auxiliary motor should produce thrust this cycle.
    pub fn motor_should_run(&self, wind: &WindState) -> bool {
        match self.motor.mode() {
            MotorMode::Always => true,
            MotorMode::Assist => {
                self.engine.session().assist_engaged()
                    || self
                        .motor
                        .low_wind_assist(wind, self.params.wind_speed_min_mps)
            }
            MotorMode::Never => false,
        }
    }

    /// Mainsail sheet position in percent for this cycle.
    ///
    /// The sail is fully sheeted out when motoring continuously or when
    /// the vehicle wants to stop or reverse, so it cannot fight the
    /// motor.
    pub fn mainsail_out(&mut self, input: &TrimInput, desired_speed_mps: f32) -> f32 {
        if !self.enabled() {
            return 0.0;
        }
        if self.motor.mode() == MotorMode::Always || desired_speed_mps <= 0.0 {
            return 100.0;
        }
        self.trim.mainsail_out(input, &self.params)
    }

    /// Change the motor usage mode, reporting a missing motor.
    pub fn set_motor_mode(
        &mut self,
        mode: MotorMode,
        motor_fitted: bool,
        telemetry: &mut dyn SailTelemetry,
    ) -> Result<(), MotorError> {
        self.motor.set_mode(mode, motor_fitted).map_err(|err| {
            telemetry.notify(SailEvent::MotorUnavailable);
            err
        })
    }

    /// Replace the parameters. The trim strategy is rebuilt only when
    /// its selector changed, so learned trim state survives unrelated
    /// parameter updates.
    pub fn set_params(&mut self, params: SailParams) {
        if params.prop_control != self.params.prop_control {
            self.trim = SailTrimStrategy::from_params(&params);
        }
        self.params = params;
    }

    /// Ask for a tack at the next opportunity, from autonomous modes.
    pub fn request_tack(&mut self, wind: &WindState, now_ms: u64) {
        if !self.tack_enabled(wind) {
            return;
        }
        self.engine.request_tack(now_ms);
    }

    /// Start a tack mirroring the current heading across the wind, from
    /// manual modes without a navigation demand.
    pub fn request_tack_reflected(&mut self, yaw_rad: f32, wind: &WindState, now_ms: u64) {
        if !self.tack_enabled(wind) {
            return;
        }
        self.engine
            .request_tack_reflected(yaw_rad, wind.true_wind_rad, now_ms);
    }

    /// Target heading for a reflected tack, `None` once it is done.
    pub fn reflected_tack_heading(&mut self, yaw_rad: f32, now_ms: u64) -> Option<f32> {
        self.engine.reflected_tack_heading(yaw_rad, now_ms)
    }

    /// Speed made good toward `target_bearing_rad`, m/s. Outside
    /// autopilot modes there is no navigation target, so the raw speed
    /// is reported instead.
    pub fn velocity_made_good(
        &self,
        speed_mps: Option<f32>,
        autopilot: bool,
        yaw_rad: f32,
        target_bearing_rad: f32,
    ) -> f32 {
        match speed_mps {
            None => 0.0,
            Some(speed) if !autopilot => speed,
            Some(speed) => wind::velocity_made_good(speed, yaw_rad, target_bearing_rad),
        }
    }

    pub fn params(&self) -> &SailParams {
        &self.params
    }

    pub fn motor_mode(&self) -> MotorMode {
        self.motor.mode()
    }

    /// True while a tack maneuver is in progress.
    pub fn tacking(&self) -> bool {
        self.engine.session().tacking()
    }

    /// Read-only view of the tack session.
    pub fn session(&self) -> &TackSession {
        self.engine.session()
    }

    /// Upwind leg planning style.
    pub fn tack_type(&self) -> TackType {
        self.params.tack_type
    }

    /// Waypoint tracking style under sail.
    pub fn waypoint_mode(&self) -> WaypointMode {
        self.params.waypoint_mode
    }

    /// Loiter radius for sailing position hold, meters.
    pub fn loiter_radius_m(&self) -> f32 {
        self.params.loiter_radius_m
    }
}
