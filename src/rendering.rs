use ggez::{
    Context, GameResult,
    glam::Vec2,
    graphics::{self, Color, DrawParam, FontData, Image, Text, TextFragment},
};

use crate::state::GameState;

const SCORE_FONT: &str = "score-font";
const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);

pub struct Renderer {
    rocket: Image,
    background: Image,
    // Shipped with the asset set but nothing draws it yet.
    explosion: Image,
}

impl Renderer {
    pub fn new(ctx: &mut Context) -> GameResult<Self> {
        ctx.gfx
            .add_font(SCORE_FONT, FontData::from_path(ctx, "/font.ttf")?);

        Ok(Self {
            rocket: Image::from_path(ctx, "/rocket.png")?,
            background: Image::from_path(ctx, "/background.png")?,
            explosion: Image::from_path(ctx, "/explosion.png")?,
        })
    }

    /// Back to front: background, rockets in spawn order, score overlay.
    pub fn draw(&self, ctx: &mut Context, state: &GameState) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);
        let tuning = &state.tuning;

        let bg_scale = Vec2::new(
            tuning.screen_width / self.background.width() as f32,
            tuning.screen_height / self.background.height() as f32,
        );
        canvas.draw(&self.background, DrawParam::default().scale(bg_scale));

        let sprite_scale = Vec2::new(
            tuning.sprite_size / self.rocket.width() as f32,
            tuning.sprite_size / self.rocket.height() as f32,
        );
        for rocket in &state.rockets {
            if !rocket.active {
                continue;
            }

            canvas.draw(
                &self.rocket,
                DrawParam::default()
                    .dest(rocket.pos)
                    .offset(Vec2::new(0.5, 0.5))
                    .scale(sprite_scale)
                    .rotation((rocket.rotation + tuning.sprite_art_rotation_deg).to_radians()),
            );
        }

        let score = Text::new(
            TextFragment::new(format!("Score: {}", state.score))
                .font(SCORE_FONT)
                .color(Color::WHITE)
                .scale(tuning.font_size),
        );
        canvas.draw(&score, DrawParam::default().dest(SCORE_POS));

        canvas.finish(ctx)
    }
}
