use crate::state::GameState;

/// Advance every live rocket by one fixed tick, then drop the ones that
/// left the screen.
pub fn update_rockets(state: &mut GameState) {
    let width = state.tuning.screen_width;
    let height = state.tuning.screen_height;
    let gravity = state.tuning.gravity_per_tick;

    for rocket in &mut state.rockets {
        if !rocket.active {
            continue;
        }

        rocket.pos += rocket.vel;
        rocket.vel.y += gravity;

        // Only the side and bottom edges cull; rockets above the window
        // stay live until gravity brings them back down.
        if rocket.pos.y > height || rocket.pos.x < 0.0 || rocket.pos.x > width {
            rocket.active = false;
        }
    }

    state.rockets.retain(|r| r.active);
}
