//! Sailing Parameter Definitions
//!
//! Runtime tunable settings for the sailing navigation subsystem.
//!
//! # Parameters
//!
//! - `SAIL_ENABLE` - Master enable for sailing control (reboot required)
//! - `SAIL_ANGLE_MIN` / `SAIL_ANGLE_MAX` - Mainsail sheeting range in degrees
//! - `SAIL_ANGLE_IDEAL` - Ideal angle between sail and apparent wind
//! - `SAIL_HEEL_MAX` - Maximum heel angle before sheeting out
//! - `SAIL_NO_GO_ANGLE` - Half angle of the upwind no-go cone
//! - `SAIL_WNDSPD_MIN` - Wind speed below which the motor assists, 0 disables
//! - `SAIL_XTRACK_MAX` - Half width of the tacking corridor, 0 disables
//! - `SAIL_LOIT_RADIUS` - Loiter radius for sailing position hold
//! - `SAIL_PROP_CTRL` - Mainsail trim strategy selector
//! - `SAIL_FIXED_ANGLE` - Sail angle for the fixed trim strategy
//! - `SAIL_SPEED_MAX` - Reference speed for the cardioid trim strategy
//! - `SAIL_EXTR_STEP` - Sail angle step for extremum seeking trim
//! - `SAIL_EXTR_T` / `SAIL_POLAR_T` - Update periods for the self trimming strategies
//! - `SAIL_TACK_TYPE` - Reactive or deliberative upwind tacking
//! - `SAIL_TACK_DT` - Lateral spacing of deliberative tack legs
//! - `SAIL_TACK_THETAT` - Tack angle for the deliberative planner
//! - `SAIL_WAYP_TYPE` - Corridor following or direct heading waypoint tracking

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

const DEFAULT_ANGLE_MIN: f32 = 0.0;
const DEFAULT_ANGLE_MAX: f32 = 90.0;
const DEFAULT_ANGLE_IDEAL: f32 = 25.0;
const DEFAULT_HEEL_MAX: f32 = 15.0;
const DEFAULT_NO_GO_ANGLE: f32 = 45.0;
const DEFAULT_WNDSPD_MIN: f32 = 0.0;
const DEFAULT_XTRACK_MAX: f32 = 10.0;
const DEFAULT_LOIT_RADIUS: f32 = 5.0;
const DEFAULT_PROP_CTRL: i32 = 0;
const DEFAULT_FIXED_ANGLE: f32 = 0.0;
const DEFAULT_SPEED_MAX: f32 = 0.0;
const DEFAULT_EXTR_STEP: f32 = 5.0;
const DEFAULT_EXTR_T: f32 = 1.0;
const DEFAULT_POLAR_T: f32 = 1.0;
const DEFAULT_TACK_TYPE: i32 = 0;
const DEFAULT_TACK_DT: f32 = 10.0;
const DEFAULT_TACK_THETAT: f32 = 60.0;
const DEFAULT_WAYP_TYPE: i32 = 0;

/// Sheeting and cone angles live on [0, 90] degrees.
const MAX_ANGLE: f32 = 90.0;

/// The deliberative tack angle must keep tan and sin well away from
/// their poles.
const MIN_TACK_THETA: f32 = 1.0;
const MAX_TACK_THETA: f32 = 89.0;

const MIN_TACK_DT: f32 = 1.0;
const MAX_TACK_DT: f32 = 100.0;

/// How upwind legs are planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TackType {
    /// Tack when the corridor or a side change demands it
    Reactive,
    /// Plan the whole zig-zag to the destination up front
    Deliberative,
}

/// How the navigation layer tracks waypoints under sail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaypointMode {
    /// Line tracking with a cross track corridor
    CorridorFollow,
    /// Steer the bearing to the waypoint directly
    HeadingHold,
}

/// Sailing parameters loaded from the parameter store
#[derive(Debug, Clone, Copy)]
pub struct SailParams {
    /// Master enable for sailing control
    pub enable: bool,
    /// Minimum mainsail sheet angle, degrees
    pub angle_min_deg: f32,
    /// Maximum mainsail sheet angle, degrees
    pub angle_max_deg: f32,
    /// Ideal sail to apparent wind angle, degrees
    pub angle_ideal_deg: f32,
    /// Heel angle the sheet controller tries not to exceed, degrees
    pub heel_max_deg: f32,
    /// Half angle of the no-go cone, degrees
    pub no_go_angle_deg: f32,
    /// True wind speed below which the motor assists, m/s, 0 disables
    pub wind_speed_min_mps: f32,
    /// Half width of the tacking corridor, meters, 0 disables
    pub xtrack_max_m: f32,
    /// Radius for sailing position hold, meters
    pub loiter_radius_m: f32,
    /// Mainsail trim strategy selector
    pub prop_control: u8,
    /// Sail angle for the fixed trim strategy, degrees
    pub fixed_angle_deg: f32,
    /// Reference speed for the cardioid trim strategy, m/s
    pub speed_max_mps: f32,
    /// Sail angle step for extremum seeking, degrees
    pub extr_step_deg: f32,
    /// Update period of extremum seeking, seconds
    pub extr_period_s: f32,
    /// Update period of the cardioid speed offset, seconds
    pub polar_period_s: f32,
    /// Upwind leg planning style
    pub tack_type: TackType,
    /// Lateral spacing of deliberative tack legs, meters
    pub tack_leg_m: f32,
    /// Tack angle of the deliberative planner, degrees
    pub tack_theta_deg: f32,
    /// Waypoint tracking style under sail
    pub waypoint_mode: WaypointMode,
}

impl Default for SailParams {
    fn default() -> Self {
        Self {
            enable: false,
            angle_min_deg: DEFAULT_ANGLE_MIN,
            angle_max_deg: DEFAULT_ANGLE_MAX,
            angle_ideal_deg: DEFAULT_ANGLE_IDEAL,
            heel_max_deg: DEFAULT_HEEL_MAX,
            no_go_angle_deg: DEFAULT_NO_GO_ANGLE,
            wind_speed_min_mps: DEFAULT_WNDSPD_MIN,
            xtrack_max_m: DEFAULT_XTRACK_MAX,
            loiter_radius_m: DEFAULT_LOIT_RADIUS,
            prop_control: DEFAULT_PROP_CTRL as u8,
            fixed_angle_deg: DEFAULT_FIXED_ANGLE,
            speed_max_mps: DEFAULT_SPEED_MAX,
            extr_step_deg: DEFAULT_EXTR_STEP,
            extr_period_s: DEFAULT_EXTR_T,
            polar_period_s: DEFAULT_POLAR_T,
            tack_type: TackType::Reactive,
            tack_leg_m: DEFAULT_TACK_DT,
            tack_theta_deg: DEFAULT_TACK_THETAT,
            waypoint_mode: WaypointMode::CorridorFollow,
        }
    }
}

impl SailParams {
    /// Register sailing parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "SAIL_ENABLE",
            ParamValue::Bool(false),
            ParamFlags::REBOOT_REQUIRED,
        )?;
        store.register(
            "SAIL_ANGLE_MIN",
            ParamValue::Float(DEFAULT_ANGLE_MIN),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_ANGLE_MAX",
            ParamValue::Float(DEFAULT_ANGLE_MAX),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_ANGLE_IDEAL",
            ParamValue::Float(DEFAULT_ANGLE_IDEAL),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_HEEL_MAX",
            ParamValue::Float(DEFAULT_HEEL_MAX),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_NO_GO_ANGLE",
            ParamValue::Float(DEFAULT_NO_GO_ANGLE),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_WNDSPD_MIN",
            ParamValue::Float(DEFAULT_WNDSPD_MIN),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_XTRACK_MAX",
            ParamValue::Float(DEFAULT_XTRACK_MAX),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_LOIT_RADIUS",
            ParamValue::Float(DEFAULT_LOIT_RADIUS),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_PROP_CTRL",
            ParamValue::Int(DEFAULT_PROP_CTRL),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_FIXED_ANGLE",
            ParamValue::Float(DEFAULT_FIXED_ANGLE),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_SPEED_MAX",
            ParamValue::Float(DEFAULT_SPEED_MAX),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_EXTR_STEP",
            ParamValue::Float(DEFAULT_EXTR_STEP),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_EXTR_T",
            ParamValue::Float(DEFAULT_EXTR_T),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_POLAR_T",
            ParamValue::Float(DEFAULT_POLAR_T),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_TACK_TYPE",
            ParamValue::Int(DEFAULT_TACK_TYPE),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_TACK_DT",
            ParamValue::Float(DEFAULT_TACK_DT),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_TACK_THETAT",
            ParamValue::Float(DEFAULT_TACK_THETAT),
            ParamFlags::empty(),
        )?;
        store.register(
            "SAIL_WAYP_TYPE",
            ParamValue::Int(DEFAULT_WAYP_TYPE),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load sailing parameters from the store, clamping out of range
    /// values instead of rejecting them
    pub fn from_store(store: &ParameterStore) -> Self {
        let enable = match store.get("SAIL_ENABLE") {
            Some(ParamValue::Bool(v)) => *v,
            Some(ParamValue::Int(v)) => *v != 0,
            _ => false,
        };

        let tack_type = match selector(store, "SAIL_TACK_TYPE", DEFAULT_TACK_TYPE as u8, 1) {
            1 => TackType::Deliberative,
            _ => TackType::Reactive,
        };

        let waypoint_mode = match selector(store, "SAIL_WAYP_TYPE", DEFAULT_WAYP_TYPE as u8, 1) {
            1 => WaypointMode::HeadingHold,
            _ => WaypointMode::CorridorFollow,
        };

        Self {
            enable,
            angle_min_deg: float(store, "SAIL_ANGLE_MIN", DEFAULT_ANGLE_MIN, 0.0, MAX_ANGLE),
            angle_max_deg: float(store, "SAIL_ANGLE_MAX", DEFAULT_ANGLE_MAX, 0.0, MAX_ANGLE),
            angle_ideal_deg: float(store, "SAIL_ANGLE_IDEAL", DEFAULT_ANGLE_IDEAL, 0.0, MAX_ANGLE),
            heel_max_deg: float(store, "SAIL_HEEL_MAX", DEFAULT_HEEL_MAX, 0.0, MAX_ANGLE),
            no_go_angle_deg: float(store, "SAIL_NO_GO_ANGLE", DEFAULT_NO_GO_ANGLE, 0.0, MAX_ANGLE),
            wind_speed_min_mps: float(store, "SAIL_WNDSPD_MIN", DEFAULT_WNDSPD_MIN, 0.0, 5.0),
            xtrack_max_m: float(store, "SAIL_XTRACK_MAX", DEFAULT_XTRACK_MAX, 0.0, 25.0),
            loiter_radius_m: float(store, "SAIL_LOIT_RADIUS", DEFAULT_LOIT_RADIUS, 0.0, 20.0),
            prop_control: selector(store, "SAIL_PROP_CTRL", DEFAULT_PROP_CTRL as u8, 10),
            fixed_angle_deg: float(store, "SAIL_FIXED_ANGLE", DEFAULT_FIXED_ANGLE, 0.0, MAX_ANGLE),
            speed_max_mps: float(store, "SAIL_SPEED_MAX", DEFAULT_SPEED_MAX, 0.0, 10.0),
            extr_step_deg: float(store, "SAIL_EXTR_STEP", DEFAULT_EXTR_STEP, 0.0, 50.0),
            extr_period_s: float(store, "SAIL_EXTR_T", DEFAULT_EXTR_T, 0.0, 10.0),
            polar_period_s: float(store, "SAIL_POLAR_T", DEFAULT_POLAR_T, 0.0, 10.0),
            tack_type,
            tack_leg_m: float(store, "SAIL_TACK_DT", DEFAULT_TACK_DT, MIN_TACK_DT, MAX_TACK_DT),
            tack_theta_deg: float(
                store,
                "SAIL_TACK_THETAT",
                DEFAULT_TACK_THETAT,
                MIN_TACK_THETA,
                MAX_TACK_THETA,
            ),
            waypoint_mode,
        }
    }

    /// Validate sailing parameters
    pub fn is_valid(&self) -> bool {
        if self.angle_min_deg > self.angle_max_deg {
            return false;
        }
        if self.angle_min_deg < 0.0 || self.angle_max_deg > MAX_ANGLE {
            return false;
        }
        if self.no_go_angle_deg < 0.0 || self.no_go_angle_deg > MAX_ANGLE {
            return false;
        }
        if self.tack_theta_deg < MIN_TACK_THETA || self.tack_theta_deg > MAX_TACK_THETA {
            return false;
        }
        if self.tack_leg_m < MIN_TACK_DT {
            return false;
        }
        if self.extr_period_s < 0.0 || self.polar_period_s < 0.0 {
            return false;
        }
        true
    }

    /// Half angle of the no-go cone in radians.
    pub fn no_go_rad(&self) -> f32 {
        self.no_go_angle_deg.to_radians()
    }
}

fn float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

fn selector(store: &ParameterStore, name: &str, default: u8, max: u8) -> u8 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => (*v).clamp(0, max as i32) as u8,
        Some(ParamValue::Float(v)) => (*v as i32).clamp(0, max as i32) as u8,
        _ => default,
    }
}
