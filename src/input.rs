use ggez::event::MouseButton;
use ggez::input::keyboard::KeyCode;

/// Intent recorded by an event callback, applied at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Launch { x: f32, y: f32 },
    Reset,
}

#[derive(Default)]
pub struct InputState {
    pending: Vec<PlayerAction>,
}

impl InputState {
    /// Drains every intent gathered since the last tick, oldest first.
    pub fn consume_actions(&mut self) -> Option<Vec<PlayerAction>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }

    pub fn process_mouse_down(&mut self, button: MouseButton, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.pending.push(PlayerAction::Launch { x, y });
        }
    }

    pub fn process_key_down(&mut self, key: KeyCode) {
        match key {
            KeyCode::KeyR => self.pending.push(PlayerAction::Reset),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_click_queues_a_launch() {
        let mut input = InputState::default();
        input.process_mouse_down(MouseButton::Left, 120.0, 340.0);

        assert_eq!(
            input.consume_actions(),
            Some(vec![PlayerAction::Launch { x: 120.0, y: 340.0 }])
        );
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputState::default();
        input.process_mouse_down(MouseButton::Right, 120.0, 340.0);
        input.process_mouse_down(MouseButton::Middle, 10.0, 10.0);

        assert_eq!(input.consume_actions(), None);
    }

    #[test]
    fn r_key_queues_a_reset() {
        let mut input = InputState::default();
        input.process_key_down(KeyCode::KeyR);
        input.process_key_down(KeyCode::Space);

        assert_eq!(input.consume_actions(), Some(vec![PlayerAction::Reset]));
    }

    #[test]
    fn consume_drains_in_arrival_order() {
        let mut input = InputState::default();
        input.process_mouse_down(MouseButton::Left, 1.0, 2.0);
        input.process_key_down(KeyCode::KeyR);
        input.process_mouse_down(MouseButton::Left, 3.0, 4.0);

        assert_eq!(
            input.consume_actions(),
            Some(vec![
                PlayerAction::Launch { x: 1.0, y: 2.0 },
                PlayerAction::Reset,
                PlayerAction::Launch { x: 3.0, y: 4.0 },
            ])
        );
        assert_eq!(input.consume_actions(), None);
    }
}
