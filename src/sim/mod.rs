//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - No timers: ticking is a request/callback handshake with the host
//! - No rendering or platform dependencies beyond the sink traits

pub mod playfield;
pub mod session;
pub mod shapes;

pub use playfield::{ClickOutcome, Playfield};
pub use session::{Event, Session, TickRequest};
pub use shapes::{Circle, Line};
