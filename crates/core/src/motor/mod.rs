//! Auxiliary motor usage policy
//!
//! Sailing vehicles often carry a small motor for close-quarters
//! maneuvering, stalled tacks and calm conditions. This module decides
//! *when* the motor may run; producing the actual throttle output is
//! the firmware's job.

use crate::wind::WindState;

/// How the auxiliary motor may be used alongside the sails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorMode {
    /// Sail only, motor stays off
    Never,
    /// Motor runs to rescue stalled tacks and in light wind
    Assist,
    /// Motor runs continuously
    Always,
}

/// Errors raised when changing the motor policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Vehicle has no forward thrust source configured
    NoForwardThrust,
}

impl core::fmt::Display for MotorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MotorError::NoForwardThrust => write!(f, "no forward thrust source configured"),
        }
    }
}

/// Decides when the auxiliary motor is allowed to run.
pub struct MotorPolicy {
    mode: MotorMode,
}

impl MotorPolicy {
    pub fn new() -> Self {
        Self {
            mode: MotorMode::Never,
        }
    }

    /// Current motor usage mode.
    pub fn mode(&self) -> MotorMode {
        self.mode
    }

    /// Change the motor usage mode.
    ///
    /// Disabling is always allowed. Enabling `Assist` or `Always`
    /// requires a forward thrust source, reported by the caller from
    /// its knowledge of the vehicle configuration.
    pub fn set_mode(&mut self, mode: MotorMode, motor_fitted: bool) -> Result<(), MotorError> {
        if mode == MotorMode::Never {
            self.mode = mode;
            return Ok(());
        }
        if motor_fitted {
            self.mode = mode;
            Ok(())
        } else {
            Err(MotorError::NoForwardThrust)
        }
    }

    /// True when the motor should run because the wind is too light to
    /// sail. Requires assist mode, a wind speed sensor and a positive
    /// `min_wind_speed` threshold.
    pub fn low_wind_assist(&self, wind: &WindState, min_wind_speed: f32) -> bool {
        if self.mode != MotorMode::Assist {
            return false;
        }
        match wind.true_wind_speed {
            Some(speed) => min_wind_speed > 0.0 && speed < min_wind_speed,
            None => false,
        }
    }
}

impl Default for MotorPolicy {
    fn default() -> Self {
        Self::new()
    }
}
