//! Drawing and score-display boundary
//!
//! The game core never talks to a toolkit directly. The host implements
//! [`RenderSink`] on whatever can draw ovals and lines (a canvas widget, a
//! GPU pipeline, a test recorder) and [`ScoreDisplay`] on whatever shows
//! the tallies. Shapes are created once and repositioned through their
//! handle afterwards; the moving elements are never recreated per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a shape owned by the sink
pub type ShapeHandle = u32;

/// RGB color, `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const RED: Color = Color(0xFF0000);
    pub const BLUE: Color = Color(0x0000FF);
    pub const IVORY: Color = Color(0xFFFFF0);
}

/// Axis-aligned bounding box (min corner, max corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Bounding square of a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Drawing surface supplied by the host
pub trait RenderSink {
    fn create_oval(
        &mut self,
        bbox: Rect,
        fill: Option<Color>,
        outline_width: u32,
        outline: Color,
    ) -> ShapeHandle;
    fn create_line(&mut self, from: Vec2, to: Vec2, width: u32, color: Color) -> ShapeHandle;
    /// Text label at a position; returns a handle so it can be torn down
    fn create_text(&mut self, at: Vec2, text: &str) -> ShapeHandle;
    fn move_oval(&mut self, handle: ShapeHandle, bbox: Rect);
    fn move_line(&mut self, handle: ShapeHandle, from: Vec2, to: Vec2);
    fn delete_shape(&mut self, handle: ShapeHandle);
}

/// Score readout supplied by the host.
///
/// Push model: the session calls all three after every registered click.
pub trait ScoreDisplay {
    fn show_hits(&mut self, hits: u32);
    fn show_misses(&mut self, misses: u32);
    fn show_hit_rate(&mut self, formatted: &str);
}

/// One command captured by [`RecordingSink`]. Outline styling is not
/// captured; fill is, so hit marks and miss marks stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCommand {
    CreateOval {
        handle: ShapeHandle,
        bbox: Rect,
        fill: Option<Color>,
    },
    CreateLine {
        handle: ShapeHandle,
        from: Vec2,
        to: Vec2,
    },
    CreateText {
        handle: ShapeHandle,
        at: Vec2,
        text: String,
    },
    MoveOval {
        handle: ShapeHandle,
        bbox: Rect,
    },
    MoveLine {
        handle: ShapeHandle,
        from: Vec2,
        to: Vec2,
    },
    Delete {
        handle: ShapeHandle,
    },
}

/// Headless sink that records every command it receives.
///
/// Drives the demo binary and the tests; it is not a renderer.
#[derive(Debug, Default)]
pub struct RecordingSink {
    next_handle: ShapeHandle,
    /// Every command received, in order
    pub commands: Vec<SinkCommand>,
    live: Vec<ShapeHandle>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles created and not yet deleted
    pub fn live_shapes(&self) -> &[ShapeHandle] {
        &self.live
    }

    fn allocate(&mut self) -> ShapeHandle {
        self.next_handle += 1;
        self.live.push(self.next_handle);
        self.next_handle
    }
}

impl RenderSink for RecordingSink {
    fn create_oval(
        &mut self,
        bbox: Rect,
        fill: Option<Color>,
        _outline_width: u32,
        _outline: Color,
    ) -> ShapeHandle {
        let handle = self.allocate();
        self.commands.push(SinkCommand::CreateOval { handle, bbox, fill });
        handle
    }

    fn create_line(&mut self, from: Vec2, to: Vec2, _width: u32, _color: Color) -> ShapeHandle {
        let handle = self.allocate();
        self.commands.push(SinkCommand::CreateLine { handle, from, to });
        handle
    }

    fn create_text(&mut self, at: Vec2, text: &str) -> ShapeHandle {
        let handle = self.allocate();
        self.commands.push(SinkCommand::CreateText {
            handle,
            at,
            text: text.to_string(),
        });
        handle
    }

    fn move_oval(&mut self, handle: ShapeHandle, bbox: Rect) {
        self.commands.push(SinkCommand::MoveOval { handle, bbox });
    }

    fn move_line(&mut self, handle: ShapeHandle, from: Vec2, to: Vec2) {
        self.commands.push(SinkCommand::MoveLine { handle, from, to });
    }

    fn delete_shape(&mut self, handle: ShapeHandle) {
        self.live.retain(|&h| h != handle);
        self.commands.push(SinkCommand::Delete { handle });
    }
}

/// Score display double that keeps the last pushed values
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub hits: u32,
    pub misses: u32,
    pub hit_rate: String,
}

impl ScoreDisplay for RecordingDisplay {
    fn show_hits(&mut self, hits: u32) {
        self.hits = hits;
    }

    fn show_misses(&mut self, misses: u32) {
        self.misses = misses;
    }

    fn show_hit_rate(&mut self, formatted: &str) {
        self.hit_rate = formatted.to_string();
    }
}
