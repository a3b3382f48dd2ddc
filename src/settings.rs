//! Gameplay settings
//!
//! Constructor-time constants for a session: everything here is chosen by
//! the host, not typed by the player, so loading falls back to defaults
//! instead of failing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sink::Color;

/// Colors for the playfield shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub ball_outline: Color,
    pub ball_fill: Color,
    pub sight: Color,
    pub guide: Color,
    pub hit_mark: Color,
    pub miss_mark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball_outline: Color::RED,
            ball_fill: Color::BLUE,
            sight: Color::BLACK,
            guide: Color::BLUE,
            hit_mark: Color::RED,
            miss_mark: Color::BLACK,
        }
    }
}

/// Gameplay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Side length of the square playfield
    pub field_size: f32,
    /// Starting delay between ball ticks in milliseconds (ramps down on hits)
    pub speed_ms: u32,
    /// Starting distance per tick (ramps up once speed_ms bottoms out at 1)
    pub displacement: f32,
    /// Hit mark radius is `field_size / hit_mark_divisor`
    pub hit_mark_divisor: f32,
    /// Miss mark radius is `field_size / miss_mark_divisor`
    pub miss_mark_divisor: f32,
    #[serde(default)]
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_size: consts::FIELD_SIZE,
            speed_ms: consts::TICK_INTERVAL_MS,
            displacement: consts::DISPLACEMENT,
            hit_mark_divisor: consts::HIT_MARK_DIVISOR,
            miss_mark_divisor: consts::MISS_MARK_DIVISOR,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Target ball radius
    pub fn ball_radius(&self) -> f32 {
        self.field_size / consts::BALL_RADIUS_DIVISOR
    }

    /// Crosshair ring radius
    pub fn sight_radius(&self) -> f32 {
        self.field_size / consts::SIGHT_RADIUS_DIVISOR
    }

    pub fn hit_mark_radius(&self) -> f32 {
        self.field_size / self.hit_mark_divisor
    }

    pub fn miss_mark_radius(&self) -> f32 {
        self.field_size / self.miss_mark_divisor
    }

    /// Clamp values the game invariants depend on (`speed_ms >= 1`,
    /// `displacement > 0`, positive field)
    pub fn sanitized(mut self) -> Self {
        self.speed_ms = self.speed_ms.max(1);
        if !(self.displacement > 0.0) {
            self.displacement = consts::DISPLACEMENT;
        }
        if !(self.field_size > 0.0) {
            self.field_size = consts::FIELD_SIZE;
        }
        if !(self.hit_mark_divisor > 0.0) {
            self.hit_mark_divisor = consts::HIT_MARK_DIVISOR;
        }
        if !(self.miss_mark_divisor > 0.0) {
            self.miss_mark_divisor = consts::MISS_MARK_DIVISOR;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON; problems are logged, not surfaced
    pub fn save(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(err) => log::warn!("Could not save settings: {err}"),
            }
        }
    }
}
