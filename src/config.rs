use anyhow::Context;
use serde::Deserialize;

/// Gameplay and presentation constants, overridable from `tuning.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ticks_per_second: u32,
    /// Downward velocity gained per tick.
    pub gravity_per_tick: f32,
    /// Divisor applied to the spawn-to-click vector to get the launch velocity.
    pub launch_damping: f32,
    /// On-screen rocket size in pixels (square).
    pub sprite_size: f32,
    /// The rocket art points up, so draws are rotated by this extra amount.
    pub sprite_art_rotation_deg: f32,
    pub font_size: f32,
    pub rocket_variants: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            ticks_per_second: 60,
            gravity_per_tick: 0.1,
            launch_damping: 10.0,
            sprite_size: 32.0,
            sprite_art_rotation_deg: 90.0,
            font_size: 24.0,
            rocket_variants: 3,
        }
    }
}

impl Tuning {
    /// The tuning file is an optional override; anything wrong with it is
    /// logged and the defaults are used instead.
    pub fn load_or_default(path: &str) -> Self {
        match Self::try_load(path) {
            Ok(tuning) => {
                log::info!("loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("using default tuning: {e:#}");
                Self::default()
            }
        }
    }

    fn try_load(path: &str) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        let tuning = serde_json::from_str(&data).with_context(|| format!("parsing {path}"))?;
        Ok(tuning)
    }
}
