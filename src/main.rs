use std::{env, path};

use ggez::event::{self, EventHandler, MouseButton};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, ContextBuilder, GameError, GameResult};

mod audio;
mod config;
mod input;
mod physics;
mod rendering;
mod state;

use audio::AudioBank;
use config::Tuning;
use input::{InputState, PlayerAction};
use physics::update_rockets;
use rendering::Renderer;
use state::GameState;

const TUNING_PATH: &str = "tuning.json";

struct MainState {
    game: GameState,
    input: InputState,
    renderer: Renderer,
    audio: AudioBank,
}

impl MainState {
    fn new(ctx: &mut Context, tuning: Tuning) -> GameResult<Self> {
        let renderer = Renderer::new(ctx)?;
        let mut audio = AudioBank::new(ctx)?;
        audio.start_music(ctx)?;
        log::info!("assets loaded, music started");

        Ok(Self {
            game: GameState::new(tuning),
            input: InputState::default(),
            renderer,
            audio,
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.game.tuning.ticks_per_second) {
            // Apply the intents gathered since the previous tick.
            if let Some(actions) = self.input.consume_actions() {
                for action in actions {
                    match action {
                        PlayerAction::Launch { x, y } => {
                            self.game.launch(x, y);
                            self.audio.play_launch(ctx);
                        }
                        PlayerAction::Reset => self.game.reset(),
                    }
                }
            }

            update_rockets(&mut self.game);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.renderer.draw(ctx, &self.game)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        self.input.process_mouse_down(button, x, y);
        Ok(())
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        input: KeyInput,
        _repeat: bool,
    ) -> Result<(), GameError> {
        if let Some(keycode) = input.keycode {
            self.input.process_key_down(keycode);
        }
        Ok(())
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let tuning = Tuning::load_or_default(TUNING_PATH);

    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = path::PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        path::PathBuf::from("./resources")
    };

    let (mut ctx, event_loop) = ContextBuilder::new("rocket_salvo", "you")
        .add_resource_path(resource_dir)
        .window_setup(ggez::conf::WindowSetup::default().title("Rocket Salvo"))
        .window_mode(
            ggez::conf::WindowMode::default().dimensions(tuning.screen_width, tuning.screen_height),
        )
        .build()?;

    let game = MainState::new(&mut ctx, tuning)?;
    log::info!("entering frame loop");
    event::run(ctx, event_loop, game)
}
