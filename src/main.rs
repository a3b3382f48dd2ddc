//! Frantic entry point
//!
//! There is no bundled GUI: a host embeds [`Session`] behind its own canvas
//! and timer. Running the binary plays a short scripted round against the
//! recording sink and prints the tallies, which doubles as a smoke test of
//! the whole dispatch path.

use std::path::Path;

use glam::Vec2;

use frantic::Settings;
use frantic::sim::{Event, Session};
use frantic::sink::{RecordingSink, ScoreDisplay};

/// Score display that forwards every push to the log
struct ConsoleDisplay;

impl ScoreDisplay for ConsoleDisplay {
    fn show_hits(&mut self, hits: u32) {
        log::info!("hits: {hits}");
    }

    fn show_misses(&mut self, misses: u32) {
        log::info!("misses: {misses}");
    }

    fn show_hit_rate(&mut self, formatted: &str) {
        log::info!("hit rate: {formatted}");
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load_or_default(Path::new("frantic_settings.json"));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Frantic headless demo, seed {seed}");

    let mut sink = RecordingSink::new();
    let mut display = ConsoleDisplay;
    let mut session = Session::new(settings, seed);
    let mut pending = session.start(&mut sink, &mut display);

    // Scripted round: let the ball wobble for a while, chase it with the
    // crosshair, click it, and fumble the occasional shot into a corner.
    for round in 0u32..6 {
        for _ in 0..50 {
            if let Some(next) = session.dispatch(
                Event::Tick {
                    generation: pending.generation,
                },
                &mut sink,
                &mut display,
            ) {
                pending = next;
            }
        }

        let ball = session.playfield().ball().center();
        session.dispatch(Event::PointerMove { at: ball }, &mut sink, &mut display);
        session.dispatch(Event::PointerClick { at: ball }, &mut sink, &mut display);

        if round % 2 == 1 {
            session.dispatch(
                Event::PointerClick { at: Vec2::ZERO },
                &mut sink,
                &mut display,
            );
        }
    }

    println!(
        "hits: {}  misses: {}  rate: {}",
        session.hits(),
        session.misses(),
        session.hit_rate_text()
    );
    println!(
        "sink commands issued: {} ({} shapes live)",
        sink.commands.len(),
        sink.live_shapes().len()
    );
}
