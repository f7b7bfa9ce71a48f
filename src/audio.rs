use ggez::audio::{SoundSource, Source};
use ggez::{Context, GameResult};

pub struct AudioBank {
    launch: Source,
    // Shipped with the sound set but nothing plays it yet.
    explosion: Source,
    music: Source,
}

impl AudioBank {
    pub fn new(ctx: &mut Context) -> GameResult<Self> {
        Ok(Self {
            launch: Source::new(ctx, "/rocket.wav")?,
            explosion: Source::new(ctx, "/explosion.wav")?,
            music: Source::new(ctx, "/background.ogg")?,
        })
    }

    /// One-shot launch cue. Fire-and-forget: overlapping shots are fine and
    /// a playback failure only warns.
    pub fn play_launch(&mut self, ctx: &Context) {
        if let Err(e) = self.launch.play_detached(ctx) {
            log::warn!("launch sound failed: {e}");
        }
    }

    /// Starts the looping background track; the source stays owned here for
    /// the whole run.
    pub fn start_music(&mut self, ctx: &mut Context) -> GameResult {
        self.music.set_repeat(true);
        self.music.play(ctx)
    }
}
