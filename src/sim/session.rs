//! Game session: tallies, event dispatch, and tick scheduling
//!
//! The session owns the playfield, the seeded RNG, and the hit/miss
//! counters. It never owns a timer: every live tick returns a
//! [`TickRequest`] and the host calls back with [`Event::Tick`] after the
//! requested delay. `restart` bumps the generation counter first, so a
//! callback the host already scheduled against the torn-down playfield
//! dispatches as a no-op instead of moving the new ball.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::playfield::{ClickOutcome, Playfield};
use crate::sink::{RenderSink, ScoreDisplay};

/// Host-delivered input event, in field-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Timer callback for the tick requested with this generation
    Tick { generation: u64 },
    PointerMove { at: Vec2 },
    PointerClick { at: Vec2 },
}

/// Ask the host to deliver `Event::Tick { generation }` after `delay_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRequest {
    pub generation: u64,
    pub delay_ms: u32,
}

/// One run of the game, restartable
pub struct Session {
    settings: Settings,
    rng: Pcg32,
    playfield: Playfield,
    generation: u64,
    hits: u32,
    misses: u32,
}

impl Session {
    pub fn new(settings: Settings, seed: u64) -> Self {
        let playfield = Playfield::new(&settings);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            settings,
            generation: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mount the playfield, zero the tallies, and request the first tick
    pub fn start(
        &mut self,
        sink: &mut dyn RenderSink,
        display: &mut dyn ScoreDisplay,
    ) -> TickRequest {
        log::info!("Session started ({} px field)", self.settings.field_size);
        self.hits = 0;
        self.misses = 0;
        self.playfield.mount(sink);
        self.publish(display);
        self.request_tick()
    }

    /// Tear the current playfield down and begin a fresh one.
    ///
    /// The generation bump comes first: any tick already scheduled by the
    /// host arrives stale and cannot touch the replacement playfield.
    pub fn restart(
        &mut self,
        sink: &mut dyn RenderSink,
        display: &mut dyn ScoreDisplay,
    ) -> TickRequest {
        self.generation += 1;
        self.playfield.teardown(sink);
        self.playfield = Playfield::new(&self.settings);
        log::info!("Session restarted (generation {})", self.generation);
        self.hits = 0;
        self.misses = 0;
        self.playfield.mount(sink);
        self.publish(display);
        self.request_tick()
    }

    /// Deliver one event. Returns the next tick to schedule, if any.
    pub fn dispatch(
        &mut self,
        event: Event,
        sink: &mut dyn RenderSink,
        display: &mut dyn ScoreDisplay,
    ) -> Option<TickRequest> {
        match event {
            Event::Tick { generation } if generation != self.generation => {
                log::debug!(
                    "Dropping stale tick (generation {generation}, current {})",
                    self.generation
                );
                None
            }
            Event::Tick { .. } => {
                self.playfield.on_tick(&mut self.rng, sink);
                Some(self.request_tick())
            }
            Event::PointerMove { at } => {
                self.playfield.on_pointer_move(at, sink);
                None
            }
            Event::PointerClick { at } => {
                match self.playfield.judge(at) {
                    ClickOutcome::Hit => {
                        self.hits += 1;
                        self.playfield.register_hit(at, self.hits, sink);
                        log::debug!("Hit {} at ({:.0}, {:.0})", self.hits, at.x, at.y);
                    }
                    ClickOutcome::Miss => {
                        self.misses += 1;
                        self.playfield.register_miss(at, self.misses, sink);
                        log::debug!("Miss {} at ({:.0}, {:.0})", self.misses, at.x, at.y);
                    }
                }
                self.publish(display);
                None
            }
        }
    }

    /// Hits over total clicks with two decimal places; `"0.00%"` before any
    /// click so there is never a division by zero
    pub fn hit_rate_text(&self) -> String {
        let total = self.hits + self.misses;
        if total == 0 {
            return "0.00%".to_string();
        }
        format!("{:.2}%", self.hits as f64 * 100.0 / total as f64)
    }

    fn publish(&self, display: &mut dyn ScoreDisplay) {
        display.show_hits(self.hits);
        display.show_misses(self.misses);
        display.show_hit_rate(&self.hit_rate_text());
    }

    fn request_tick(&self) -> TickRequest {
        TickRequest {
            generation: self.generation,
            delay_ms: self.playfield.speed_ms(),
        }
    }
}
