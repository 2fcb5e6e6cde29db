//! Tack state machine, session state and telemetry events
//!
//! Working upwind means sailing a zig-zag of close hauled legs joined
//! by tacks. This module decides when to tack, carries the maneuver
//! state between control cycles and reports notable events to the host.

pub mod engine;
pub mod report;
pub mod session;

pub use engine::{
    TackEngine, TACKING_ACCURACY_DEG, TACK_RETRY_COOLDOWN_MS, TACK_TIMEOUT_MS,
    USER_REQUEST_WINDOW_MS,
};
pub use report::{NullTelemetry, SailEvent, SailTelemetry};
pub use session::TackSession;
