use ggez::glam::Vec2;
use rand::Rng;

use crate::config::Tuning;

/// One in-flight rocket.
pub struct Rocket {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees, set from the launch velocity and kept as-is
    /// afterwards even though gravity bends the flight path.
    pub rotation: f32,
    pub active: bool,
    pub variant: u8,
}

pub struct GameState {
    pub rockets: Vec<Rocket>,
    pub score: u32,
    pub game_over: bool,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            rockets: vec![],
            score: 0,
            game_over: false,
            tuning,
        }
    }

    /// Launch a rocket from the bottom center toward the clicked point.
    ///
    /// Coordinates outside the window are accepted and simply produce
    /// extreme velocities.
    pub fn launch(&mut self, x: f32, y: f32) {
        let spawn = Vec2::new(self.tuning.screen_width / 2.0, self.tuning.screen_height);
        let vel = (Vec2::new(x, y) - spawn) / self.tuning.launch_damping;

        let rocket = Rocket {
            pos: spawn,
            vel,
            rotation: vel.y.atan2(vel.x).to_degrees(),
            active: true,
            variant: rand::rng().random_range(0..self.tuning.rocket_variants.max(1)),
        };
        log::debug!(
            "launch: vel=({:.1}, {:.1}) variant={}",
            vel.x,
            vel.y,
            rocket.variant
        );
        self.rockets.push(rocket);
    }

    pub fn reset(&mut self) {
        self.rockets.clear();
        self.score = 0;
        self.game_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Tuning::default())
    }

    #[test]
    fn launch_spawns_from_bottom_center() {
        let mut state = state();
        state.launch(400.0, 300.0);

        assert_eq!(state.rockets.len(), 1);
        let rocket = &state.rockets[0];
        assert_eq!(rocket.pos, Vec2::new(400.0, 600.0));
        assert!(rocket.active);
    }

    #[test]
    fn launch_velocity_is_damped_click_vector() {
        let mut state = state();
        state.launch(400.0, 300.0);
        assert_eq!(state.rockets[0].vel, Vec2::new(0.0, -30.0));

        state.launch(500.0, 500.0);
        assert_eq!(state.rockets[1].vel, Vec2::new(10.0, -10.0));
    }

    #[test]
    fn launch_rotation_faces_initial_velocity() {
        let mut state = state();
        state.launch(400.0, 300.0);
        assert!((state.rockets[0].rotation + 90.0).abs() < 1e-3);

        state.launch(500.0, 500.0);
        assert!((state.rockets[1].rotation + 45.0).abs() < 1e-3);
    }

    #[test]
    fn launch_variant_stays_in_range() {
        let mut state = state();
        for _ in 0..100 {
            state.launch(123.0, 456.0);
        }
        assert!(state.rockets.iter().all(|r| r.variant < 3));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = state();
        state.launch(100.0, 100.0);
        state.launch(700.0, 100.0);
        state.score = 5;

        state.reset();
        assert!(state.rockets.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.game_over);

        state.reset();
        assert!(state.rockets.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
    }
}
