//! Parameter management types and utilities
//!
//! This module provides core parameter types for configuration of the
//! sailing subsystem. Platform-specific persistence (EEPROM drivers,
//! ground station protocols) lives outside this crate.

pub mod error;
pub mod sail;
pub mod storage;

pub use error::ParameterError;
pub use sail::{SailParams, TackType, WaypointMode};
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
