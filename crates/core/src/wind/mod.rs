//! Wind observation types and sailing geometry
//!
//! Everything downstream of the wind vane: which tack the vehicle is
//! on, the no-go cone, tack-versus-gybe classification and speed made
//! good. The functions here are pure so they can be exercised directly
//! in host tests.

pub mod geometry;
pub mod types;

pub use geometry::{
    apparent_angle_for_heading, in_no_go, is_tack_not_gybe, no_go_boundaries, tack_for_heading,
    velocity_made_good, NO_GO_PAD_DEG,
};
pub use types::{Tack, WindState};
