//! Mainsail trim strategies
//!
//! Converts wind, speed and heel information into a mainsail sheet
//! position in percent, 0 fully sheeted in and 100 fully sheeted out.
//! Four strategies are available, selected by parameter: a linear map
//! from apparent wind angle, a fixed angle, a cardioid polar
//! approximation with a speed seeking offset, and extremum seeking
//! that perturbs the sail and keeps changes which gained speed.

use libm::{copysignf, fabsf};

use crate::parameters::sail::SailParams;

/// The speed seeking offset of the cardioid strategy is held within
/// this many percent either way, convergence is not guaranteed.
const CARDIOID_OFFSET_LIMIT: f32 = 10.0;

/// Inputs sampled by the caller for one trim update.
#[derive(Debug, Clone, Copy)]
pub struct TrimInput {
    /// Apparent wind angle, radians, signed, zero at the bow
    pub apparent_wind_rad: f32,
    /// Forward speed estimate in m/s, `None` when unavailable
    pub speed_mps: Option<f32>,
    /// Heel limiting response from the attitude controller, 0 to 1
    pub heel_response: f32,
    /// Speed tracking response from the attitude controller, consumed
    /// by the cardioid strategy as its per period step magnitude
    pub speed_response: f32,
    /// Monotonic time, milliseconds
    pub now_ms: u64,
}

impl Default for TrimInput {
    fn default() -> Self {
        Self {
            apparent_wind_rad: 0.0,
            speed_mps: None,
            heel_response: 0.0,
            speed_response: 0.0,
            now_ms: 0,
        }
    }
}

/// Speed and sail first difference history for the self trimming
/// strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimHistory {
    speed_last: f32,
    sail_last: f32,
    sail_last_last: f32,
    updated_ms: u64,
}

impl TrimHistory {
    /// First differences of speed and sail angle against the history.
    fn first_differences(&self, speed: f32) -> (f32, f32) {
        (
            speed - self.speed_last,
            self.sail_last - self.sail_last_last,
        )
    }

    fn due(&self, now_ms: u64, period_ms: u64) -> bool {
        now_ms.saturating_sub(self.updated_ms) >= period_ms
    }

    fn record(&mut self, speed: f32, sail_out: f32, now_ms: u64) {
        self.speed_last = speed;
        self.sail_last_last = self.sail_last;
        self.sail_last = sail_out;
        self.updated_ms = now_ms;
    }

    fn last_sail(&self) -> f32 {
        self.sail_last
    }
}

/// Mainsail trim strategy with whatever state it carries between
/// updates.
#[derive(Debug, Clone, Copy)]
pub enum SailTrimStrategy {
    /// Sheet linearly with apparent wind angle, heel relief added
    Linear,
    /// Hold the configured fixed sail angle
    Fixed,
    /// Cardioid polar approximation, linear base plus an accumulated
    /// speed seeking offset
    PolarCardioid {
        history: TrimHistory,
        speed_offset: f32,
    },
    /// Perturb the sail each period and keep changes that gained speed
    ExtremumSeeking { history: TrimHistory },
}

impl SailTrimStrategy {
    /// Build the strategy selected by the propulsion control parameter.
    /// Unknown selectors fall back to linear trim.
    pub fn from_params(params: &SailParams) -> Self {
        match params.prop_control {
            1 => SailTrimStrategy::Fixed,
            2 => SailTrimStrategy::PolarCardioid {
                history: TrimHistory::default(),
                speed_offset: 0.0,
            },
            4 => SailTrimStrategy::ExtremumSeeking {
                history: TrimHistory::default(),
            },
            _ => SailTrimStrategy::Linear,
        }
    }

    /// Mainsail output in percent for this cycle.
    pub fn mainsail_out(&mut self, input: &TrimInput, params: &SailParams) -> f32 {
        match self {
            SailTrimStrategy::Linear => {
                let base = linear_base(input.apparent_wind_rad, params);
                (base + input.heel_response * 100.0).clamp(0.0, 100.0)
            }
            SailTrimStrategy::Fixed => linear_interpolate(
                0.0,
                100.0,
                params.fixed_angle_deg,
                params.angle_min_deg,
                params.angle_max_deg,
            ),
            SailTrimStrategy::PolarCardioid {
                history,
                speed_offset,
            } => {
                let base = linear_base(input.apparent_wind_rad, params);
                let out = (base + input.heel_response * 100.0 + *speed_offset).clamp(0.0, 100.0);

                let period_ms = (params.polar_period_s * 1000.0) as u64;
                if history.due(input.now_ms, period_ms) {
                    let speed = input.speed_mps.unwrap_or(0.0);
                    let (du, ds) = history.first_differences(speed);
                    // speed and sail moved together: keep pushing the
                    // offset the same way, otherwise back off
                    if (du < 0.0 && ds < 0.0) || (du > 0.0 && ds > 0.0) {
                        *speed_offset += fabsf(input.speed_response);
                    } else {
                        *speed_offset -= fabsf(input.speed_response);
                    }
                    *speed_offset =
                        speed_offset.clamp(-CARDIOID_OFFSET_LIMIT, CARDIOID_OFFSET_LIMIT);
                    history.record(speed, out, input.now_ms);
                }
                out
            }
            SailTrimStrategy::ExtremumSeeking { history } => {
                let period_ms = (params.extr_period_s * 1000.0) as u64;
                if history.due(input.now_ms, period_ms) {
                    let speed = input.speed_mps.unwrap_or(0.0);
                    let (du, ds) = history.first_differences(speed);
                    let step_scale = linear_interpolate(
                        0.0,
                        100.0,
                        params.extr_step_deg,
                        params.angle_min_deg,
                        params.angle_max_deg,
                    );
                    let step = step_scale * copysignf(1.0, du) * copysignf(1.0, ds);
                    let out = (history.last_sail() + step).clamp(0.0, 100.0);
                    history.record(speed, out, input.now_ms);
                    out
                } else {
                    history.last_sail().clamp(0.0, 100.0)
                }
            }
        }
    }
}

/// Linear sheet position from the apparent wind angle. The sails sheet
/// the same on both sides, so only the angle magnitude matters.
fn linear_base(apparent_wind_rad: f32, params: &SailParams) -> f32 {
    let wind_deg = fabsf(apparent_wind_rad).to_degrees();
    let mainsail_angle =
        (wind_deg - params.angle_ideal_deg).clamp(params.angle_min_deg, params.angle_max_deg);
    linear_interpolate(
        0.0,
        100.0,
        mainsail_angle,
        params.angle_min_deg,
        params.angle_max_deg,
    )
}

/// Map `value` from [low_in, high_in] onto [low_out, high_out],
/// clamping at both ends.
fn linear_interpolate(low_out: f32, high_out: f32, value: f32, low_in: f32, high_in: f32) -> f32 {
    if value <= low_in {
        return low_out;
    }
    if value >= high_in {
        return high_out;
    }
    let p = (value - low_in) / (high_in - low_in);
    low_out + p * (high_out - low_out)
}
