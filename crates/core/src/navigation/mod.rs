//! Navigation types and the sailing controller
//!
//! This module contains the navigation demand type handed in by the
//! path follower and the controller that turns it into sailable
//! headings and sheet positions.

pub mod controller;
pub mod types;

pub use controller::SailController;
pub use types::NavTarget;
