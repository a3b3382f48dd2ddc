//! Circle and line values with their draw contract
//!
//! Four kinds of circles appear in play: the wobbling ball, the plain
//! crosshair ring, a filled hit mark, and an unfilled miss mark. A shape is
//! drawn once; after that only `move_to` touches the sink, through the
//! handle stored at draw time. Style parameters are fixed at construction.

use glam::Vec2;

use crate::sink::{Color, Rect, RenderSink, ShapeHandle};

/// A styled circle, identified on the sink by an opaque handle once drawn
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vec2,
    radius: f32,
    outline_width: u32,
    outline: Color,
    fill: Option<Color>,
    handle: Option<ShapeHandle>,
}

impl Circle {
    pub fn new(
        center: Vec2,
        radius: f32,
        outline_width: u32,
        outline: Color,
        fill: Option<Color>,
    ) -> Self {
        Self {
            center,
            radius,
            outline_width,
            outline,
            fill,
            handle: None,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn handle(&self) -> Option<ShapeHandle> {
        self.handle
    }

    /// Bounding square at the current position
    pub fn bounding_rect(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }

    /// Issue the one-time create command and keep the handle
    pub fn draw(&mut self, sink: &mut dyn RenderSink) {
        if self.handle.is_none() {
            self.handle = Some(sink.create_oval(
                self.bounding_rect(),
                self.fill,
                self.outline_width,
                self.outline,
            ));
        }
    }

    /// Reposition the already-drawn circle; never recreates the shape
    pub fn move_to(&mut self, sink: &mut dyn RenderSink, center: Vec2) {
        self.center = center;
        if let Some(handle) = self.handle {
            sink.move_oval(handle, self.bounding_rect());
        }
    }

    /// Remove the circle from the sink; safe to call twice
    pub fn erase(&mut self, sink: &mut dyn RenderSink) {
        if let Some(handle) = self.handle.take() {
            sink.delete_shape(handle);
        }
    }
}

/// A styled line segment (the two crosshair guides)
#[derive(Debug, Clone)]
pub struct Line {
    from: Vec2,
    to: Vec2,
    width: u32,
    color: Color,
    handle: Option<ShapeHandle>,
}

impl Line {
    pub fn new(from: Vec2, to: Vec2, width: u32, color: Color) -> Self {
        Self {
            from,
            to,
            width,
            color,
            handle: None,
        }
    }

    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.from, self.to)
    }

    pub fn draw(&mut self, sink: &mut dyn RenderSink) {
        if self.handle.is_none() {
            self.handle = Some(sink.create_line(self.from, self.to, self.width, self.color));
        }
    }

    /// Reposition both endpoints of the already-drawn line
    pub fn move_to(&mut self, sink: &mut dyn RenderSink, from: Vec2, to: Vec2) {
        self.from = from;
        self.to = to;
        if let Some(handle) = self.handle {
            sink.move_line(handle, from, to);
        }
    }

    pub fn erase(&mut self, sink: &mut dyn RenderSink) {
        if let Some(handle) = self.handle.take() {
            sink.delete_shape(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkCommand};

    #[test]
    fn test_draw_once_then_reposition() {
        let mut sink = RecordingSink::new();
        let mut circle = Circle::new(Vec2::new(300.0, 300.0), 30.0, 2, Color::RED, None);

        circle.draw(&mut sink);
        circle.draw(&mut sink); // second draw is a no-op
        circle.move_to(&mut sink, Vec2::new(310.0, 290.0));

        assert_eq!(sink.live_shapes().len(), 1);
        assert!(matches!(sink.commands[0], SinkCommand::CreateOval { .. }));
        let SinkCommand::MoveOval { bbox, .. } = &sink.commands[1] else {
            panic!("expected a move command, got {:?}", sink.commands[1]);
        };
        assert_eq!(bbox.center(), Vec2::new(310.0, 290.0));
        assert_eq!(sink.commands.len(), 2);
    }

    #[test]
    fn test_move_before_draw_touches_nothing() {
        let mut sink = RecordingSink::new();
        let mut line = Line::new(Vec2::ZERO, Vec2::new(600.0, 0.0), 2, Color::BLUE);
        line.move_to(&mut sink, Vec2::new(0.0, 5.0), Vec2::new(600.0, 5.0));
        assert!(sink.commands.is_empty());
        assert_eq!(line.endpoints().0, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_erase_is_idempotent() {
        let mut sink = RecordingSink::new();
        let mut circle = Circle::new(Vec2::ZERO, 10.0, 1, Color::BLACK, Some(Color::RED));
        circle.draw(&mut sink);
        circle.erase(&mut sink);
        circle.erase(&mut sink);
        assert!(sink.live_shapes().is_empty());
        assert_eq!(
            sink.commands
                .iter()
                .filter(|c| matches!(c, SinkCommand::Delete { .. }))
                .count(),
            1
        );
    }
}
