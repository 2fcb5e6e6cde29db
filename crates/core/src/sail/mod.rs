//! Mainsail control
//!
//! Strategies for converting wind and speed measurements into a sheet
//! position. The surrounding rules about when to relax the sail live
//! in the navigation controller.

pub mod trim;

pub use trim::{SailTrimStrategy, TrimHistory, TrimInput};
