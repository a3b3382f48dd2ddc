//! The playfield: ball, crosshair, guide lines, and click scoring
//!
//! The playfield exclusively owns everything it puts on the sink. The ball
//! wobbles one random step per tick; the crosshair and guides follow the
//! pointer; clicks leave a permanent mark. The session owns the tallies, so
//! judging a click is split from registering it: `judge` is pure, and the
//! session calls back into `register_hit`/`register_miss` with the running
//! count to paint next to the mark.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts;
use crate::displacement_vector;
use crate::settings::{Palette, Settings};
use crate::sim::shapes::{Circle, Line};
use crate::sink::{RenderSink, ShapeHandle};

/// Outcome of judging a click against the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit,
    Miss,
}

/// The bounded square area containing the moving target, crosshair, and
/// guide lines
#[derive(Debug)]
pub struct Playfield {
    field_size: f32,
    speed_ms: u32,
    displacement: f32,
    hit_mark_radius: f32,
    miss_mark_radius: f32,
    palette: Palette,
    ball: Circle,
    sight: Circle,
    guide_h: Line,
    guide_v: Line,
    /// Hit/miss marks and count labels, kept only for teardown
    marks: Vec<ShapeHandle>,
}

impl Playfield {
    /// Ball, crosshair, and guides all start at the field center
    pub fn new(settings: &Settings) -> Self {
        let size = settings.field_size;
        let center = Vec2::splat(size / 2.0);
        let palette = settings.palette.clone();

        let ball = Circle::new(
            center,
            settings.ball_radius(),
            consts::BALL_OUTLINE_WIDTH,
            palette.ball_outline,
            Some(palette.ball_fill),
        );
        let sight = Circle::new(
            center,
            settings.sight_radius(),
            consts::THIN_OUTLINE_WIDTH,
            palette.sight,
            None,
        );
        let guide_h = Line::new(
            Vec2::new(0.0, center.y),
            Vec2::new(size, center.y),
            consts::GUIDE_WIDTH,
            palette.guide,
        );
        let guide_v = Line::new(
            Vec2::new(center.x, 0.0),
            Vec2::new(center.x, size),
            consts::GUIDE_WIDTH,
            palette.guide,
        );

        Self {
            field_size: size,
            speed_ms: settings.speed_ms.max(1),
            displacement: settings.displacement,
            hit_mark_radius: settings.hit_mark_radius(),
            miss_mark_radius: settings.miss_mark_radius(),
            palette,
            ball,
            sight,
            guide_h,
            guide_v,
            marks: Vec::new(),
        }
    }

    /// Draw the four permanent shapes
    pub fn mount(&mut self, sink: &mut dyn RenderSink) {
        self.ball.draw(sink);
        self.sight.draw(sink);
        self.guide_h.draw(sink);
        self.guide_v.draw(sink);
    }

    /// Current delay between ticks, milliseconds
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Current distance per tick
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    pub fn ball(&self) -> &Circle {
        &self.ball
    }

    /// Move the ball one step in a random whole-degree heading, keeping its
    /// center inside `[radius, field_size - radius]` on both axes
    pub fn on_tick(&mut self, rng: &mut Pcg32, sink: &mut dyn RenderSink) {
        let heading = rng.random_range(0u32..360);
        let step = displacement_vector(heading, self.displacement);
        let radius = self.ball.radius();
        let next = (self.ball.center() + step).clamp(
            Vec2::splat(radius),
            Vec2::splat(self.field_size - radius),
        );
        self.ball.move_to(sink, next);
    }

    /// Track the pointer: crosshair ring plus full-span guide lines.
    /// Visual feedback only; the ball and score are untouched.
    pub fn on_pointer_move(&mut self, at: Vec2, sink: &mut dyn RenderSink) {
        self.sight.move_to(sink, at);
        self.guide_h
            .move_to(sink, Vec2::new(0.0, at.y), Vec2::new(self.field_size, at.y));
        self.guide_v
            .move_to(sink, Vec2::new(at.x, 0.0), Vec2::new(at.x, self.field_size));
    }

    /// Hit iff the click lands on or inside the ball's edge
    pub fn judge(&self, at: Vec2) -> ClickOutcome {
        if at.distance(self.ball.center()) <= self.ball.radius() {
            ClickOutcome::Hit
        } else {
            ClickOutcome::Miss
        }
    }

    /// Record a hit: filled mark and the running count at the click
    /// position, then ramp the difficulty and respawn the ball at the field
    /// center with a fresh oval.
    pub fn register_hit(&mut self, at: Vec2, total_hits: u32, sink: &mut dyn RenderSink) {
        self.place_mark(at, self.hit_mark_radius, true, total_hits, sink);

        // Ramp: tick faster until the interval bottoms out, then step farther
        if self.speed_ms > 1 {
            self.speed_ms -= 1;
        } else {
            self.displacement += 1.0;
        }

        self.respawn_ball(sink);
    }

    /// Record a miss: unfilled mark and the running count, nothing else
    pub fn register_miss(&mut self, at: Vec2, total_misses: u32, sink: &mut dyn RenderSink) {
        self.place_mark(at, self.miss_mark_radius, false, total_misses, sink);
    }

    fn place_mark(
        &mut self,
        at: Vec2,
        radius: f32,
        filled: bool,
        count: u32,
        sink: &mut dyn RenderSink,
    ) {
        let (outline, fill) = if filled {
            (self.palette.hit_mark, Some(self.palette.hit_mark))
        } else {
            (self.palette.miss_mark, None)
        };
        let mut mark = Circle::new(at, radius, consts::THIN_OUTLINE_WIDTH, outline, fill);
        mark.draw(sink);
        if let Some(handle) = mark.handle() {
            self.marks.push(handle);
        }
        self.marks.push(sink.create_text(at, &count.to_string()));
    }

    /// The replacement ball gets a fresh oval; the old one leaves the sink
    fn respawn_ball(&mut self, sink: &mut dyn RenderSink) {
        self.ball.erase(sink);
        self.ball = Circle::new(
            Vec2::splat(self.field_size / 2.0),
            self.ball.radius(),
            consts::BALL_OUTLINE_WIDTH,
            self.palette.ball_outline,
            Some(self.palette.ball_fill),
        );
        self.ball.draw(sink);
    }

    /// Remove everything this playfield put on the sink; idempotent
    pub fn teardown(&mut self, sink: &mut dyn RenderSink) {
        self.ball.erase(sink);
        self.sight.erase(sink);
        self.guide_h.erase(sink);
        self.guide_v.erase(sink);
        for handle in self.marks.drain(..) {
            sink.delete_shape(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RecordingSink, SinkCommand};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn mounted(settings: &Settings) -> (Playfield, RecordingSink) {
        let mut playfield = Playfield::new(settings);
        let mut sink = RecordingSink::new();
        playfield.mount(&mut sink);
        (playfield, sink)
    }

    #[test]
    fn test_click_at_center_is_a_hit() {
        let (playfield, _) = mounted(&Settings::default());
        assert_eq!(playfield.judge(playfield.ball().center()), ClickOutcome::Hit);
    }

    #[test]
    fn test_hit_boundary_is_inclusive() {
        let (playfield, _) = mounted(&Settings::default());
        let center = playfield.ball().center();
        let radius = playfield.ball().radius();

        let on_edge = center + Vec2::new(radius, 0.0);
        assert_eq!(playfield.judge(on_edge), ClickOutcome::Hit);

        let just_outside = center + Vec2::new(radius + 0.01, 0.0);
        assert_eq!(playfield.judge(just_outside), ClickOutcome::Miss);
    }

    #[test]
    fn test_pointer_move_leaves_ball_alone() {
        let (mut playfield, mut sink) = mounted(&Settings::default());
        let ball_before = playfield.ball().center();

        playfield.on_pointer_move(Vec2::new(100.0, 40.0), &mut sink);

        assert_eq!(playfield.ball().center(), ball_before);
        assert_eq!(playfield.sight.center(), Vec2::new(100.0, 40.0));
        assert_eq!(
            playfield.guide_h.endpoints(),
            (Vec2::new(0.0, 40.0), Vec2::new(600.0, 40.0))
        );
        assert_eq!(
            playfield.guide_v.endpoints(),
            (Vec2::new(100.0, 0.0), Vec2::new(100.0, 600.0))
        );
    }

    #[test]
    fn test_difficulty_ramp_over_fifteen_hits() {
        let (mut playfield, mut sink) = mounted(&Settings::default());
        assert_eq!(playfield.speed_ms(), 10);
        assert_eq!(playfield.displacement(), 6.0);

        for hit in 1..=15 {
            let at = playfield.ball().center();
            playfield.register_hit(at, hit, &mut sink);
            if hit == 9 {
                // Interval bottoms out before the distance ramp starts
                assert_eq!(playfield.speed_ms(), 1);
                assert_eq!(playfield.displacement(), 6.0);
            }
        }

        // 9 hits drain the interval to 1 ms, the remaining 6 add distance
        assert_eq!(playfield.speed_ms(), 1);
        assert_eq!(playfield.displacement(), 12.0);
    }

    #[test]
    fn test_hit_respawns_ball_with_fresh_handle() {
        let (mut playfield, mut sink) = mounted(&Settings::default());
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            playfield.on_tick(&mut rng, &mut sink);
        }
        let old_handle = playfield.ball().handle();

        playfield.register_hit(playfield.ball().center(), 1, &mut sink);

        assert_eq!(
            playfield.ball().center(),
            Vec2::splat(300.0),
            "ball respawns at field center"
        );
        assert_ne!(playfield.ball().handle(), old_handle);
        let old = old_handle.expect("mounted ball has a handle");
        assert!(sink
            .commands
            .iter()
            .any(|c| matches!(c, SinkCommand::Delete { handle } if *handle == old)));
    }

    #[test]
    fn test_miss_mark_is_unfilled_and_labeled() {
        let (mut playfield, mut sink) = mounted(&Settings::default());
        let at = Vec2::new(50.0, 50.0);
        let before = sink.commands.len();

        playfield.register_miss(at, 3, &mut sink);

        let new = &sink.commands[before..];
        assert!(matches!(
            new[0],
            SinkCommand::CreateOval { fill: None, .. }
        ));
        assert!(
            matches!(&new[1], SinkCommand::CreateText { at: p, text, .. } if *p == at && text == "3")
        );
    }

    #[test]
    fn test_teardown_removes_everything_and_is_idempotent() {
        let (mut playfield, mut sink) = mounted(&Settings::default());
        playfield.register_miss(Vec2::new(10.0, 10.0), 1, &mut sink);
        playfield.register_hit(playfield.ball().center(), 1, &mut sink);
        assert!(!sink.live_shapes().is_empty());

        playfield.teardown(&mut sink);
        assert!(sink.live_shapes().is_empty());

        let commands_after_first = sink.commands.len();
        playfield.teardown(&mut sink);
        assert_eq!(sink.commands.len(), commands_after_first);
    }

    #[test]
    fn test_tick_path_is_deterministic() {
        let settings = Settings::default();
        let (mut a, mut sink_a) = mounted(&settings);
        let (mut b, mut sink_b) = mounted(&settings);
        let mut rng_a = Pcg32::seed_from_u64(99999);
        let mut rng_b = Pcg32::seed_from_u64(99999);

        for _ in 0..500 {
            a.on_tick(&mut rng_a, &mut sink_a);
            b.on_tick(&mut rng_b, &mut sink_b);
        }

        assert_eq!(a.ball().center(), b.ball().center());
    }

    proptest! {
        #[test]
        fn ball_stays_in_field(
            seed in any::<u64>(),
            ticks in 0usize..400,
            field in 60.0f32..2000.0,
        ) {
            let settings = Settings {
                field_size: field,
                ..Settings::default()
            };
            let (mut playfield, mut sink) = mounted(&settings);
            let mut rng = Pcg32::seed_from_u64(seed);

            for _ in 0..ticks {
                playfield.on_tick(&mut rng, &mut sink);
            }

            let radius = playfield.ball().radius();
            let center = playfield.ball().center();
            prop_assert!(center.x >= radius && center.x <= field - radius);
            prop_assert!(center.y >= radius && center.y <= field - radius);
        }
    }
}
