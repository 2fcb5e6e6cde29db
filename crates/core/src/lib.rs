//! windward_core - Pure no_std sailing navigation logic for the windward autopilot
//!
//! This crate contains platform-agnostic sailing algorithms and types
//! that can be tested on host without any feature flags or firmware dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`geo`]: Geodetic locations and north/east local-plane conversions
//! - [`wind`]: Wind frames, tack sides and no-go zone geometry
//! - [`motor`]: Motor usage policy and assistance predicates
//! - [`sail`]: Mainsail trim strategies
//! - [`tack`]: Tack state machine and telemetry events
//! - [`navigation`]: Sailing heading selection
//! - [`planner`]: Deliberative upwind tack planning
//! - [`parameters`]: Parameter store and sailing parameter block

#![no_std]

pub mod geo;
pub mod motor;
pub mod navigation;
pub mod parameters;
pub mod planner;
pub mod sail;
pub mod tack;
pub mod wind;
