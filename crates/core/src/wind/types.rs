//! Wind observation types shared across the sailing subsystems

/// Which side of the vehicle the wind arrives on.
///
/// Starboard tack means the wind comes over the starboard rail and the
/// sail is carried to port. The sign convention follows the apparent
/// wind angle: a non-negative angle is starboard tack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tack {
    /// Wind over the port rail
    Port,
    /// Wind over the starboard rail
    Starboard,
}

impl Tack {
    /// The opposite tack.
    pub fn opposite(self) -> Tack {
        match self {
            Tack::Port => Tack::Starboard,
            Tack::Starboard => Tack::Port,
        }
    }

    /// Classify a signed apparent wind angle. Zero counts as starboard.
    pub fn from_apparent(apparent_rad: f32) -> Tack {
        if apparent_rad < 0.0 {
            Tack::Port
        } else {
            Tack::Starboard
        }
    }
}

/// Wind estimate sampled from the wind vane at the start of an update.
///
/// Directions follow the meteorological convention: the angle the wind
/// blows *from*. Speeds are optional because anemometers are not fitted
/// on every vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindState {
    /// True wind direction in earth frame, radians
    pub true_wind_rad: f32,
    /// Apparent wind angle in body frame, radians, signed, zero at the bow
    pub apparent_wind_rad: f32,
    /// True wind speed in m/s, `None` when no wind speed sensor is fitted
    pub true_wind_speed: Option<f32>,
    /// Apparent wind speed in m/s, `None` when no wind speed sensor is fitted
    pub apparent_wind_speed: Option<f32>,
}

impl Default for WindState {
    fn default() -> Self {
        Self {
            true_wind_rad: 0.0,
            apparent_wind_rad: 0.0,
            true_wind_speed: None,
            apparent_wind_speed: None,
        }
    }
}
