//! Frantic - a reflex mini-game core
//!
//! A wobbling target ball drifts around a square playfield while the player
//! chases it with a crosshair and clicks to score hits. Each hit speeds the
//! game up; a running hit-rate is pushed to a score display.
//!
//! Core modules:
//! - `sim`: deterministic game logic (shapes, playfield, session)
//! - `sink`: the drawing/display boundary the host GUI implements
//! - `settings`: gameplay constants, JSON-loadable
//!
//! Windowing, widgets, and the actual timer/event loop belong to the host;
//! the core only requests ticks and issues drawing commands through the
//! sink traits.

pub mod settings;
pub mod sim;
pub mod sink;

pub use settings::Settings;
pub use sim::{Event, Playfield, Session, TickRequest};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Side length of the square playfield
    pub const FIELD_SIZE: f32 = 600.0;
    /// Starting delay between ball movement ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Starting distance the ball covers per tick
    pub const DISPLACEMENT: f32 = 6.0;

    /// Ball radius as a divisor of the field size
    pub const BALL_RADIUS_DIVISOR: f32 = 20.0;
    /// Crosshair ring radius as a divisor of the field size
    pub const SIGHT_RADIUS_DIVISOR: f32 = 40.0;
    /// Hit mark radius as a divisor of the field size
    pub const HIT_MARK_DIVISOR: f32 = 20.0;
    /// Miss mark radius as a divisor of the field size
    pub const MISS_MARK_DIVISOR: f32 = 30.0;

    /// Outline width for the ball
    pub const BALL_OUTLINE_WIDTH: u32 = 2;
    /// Outline width for the crosshair ring and the hit/miss marks
    pub const THIN_OUTLINE_WIDTH: u32 = 1;
    /// Width of the crosshair guide lines
    pub const GUIDE_WIDTH: u32 = 2;
}

/// Step vector for a heading given in whole degrees.
///
/// Headings are sampled as integers in `0..=359`; the x component uses
/// `sin` and the y component `cos`, so 0 degrees steps along +y.
#[inline]
pub fn displacement_vector(heading_degrees: u32, displacement: f32) -> Vec2 {
    let theta = (heading_degrees as f32).to_radians();
    Vec2::new(displacement * theta.sin(), displacement * theta.cos())
}
