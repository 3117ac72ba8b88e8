//! Engine: display context, frame clock and the cooperative game loop

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use macroquad::prelude::*;

use crate::canvas::{Canvas, ScreenSize};

static CONTEXT_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Handle for the process-wide display/input subsystem.
///
/// Exactly one context exists per process; [`Context::acquire`] claims it
/// and a second claim panics. The window itself opens when the engine's
/// loop starts (the platform owns the event loop), the context carries the
/// claim and all display-facing operations.
pub struct Context {
    _claim: (),
}

impl Context {
    /// Claim the display/input subsystem for this process.
    ///
    /// Panics if a context is already live; the runtime supports one
    /// engine/canvas pair per process.
    pub fn acquire() -> Self {
        if CONTEXT_ACTIVE.swap(true, Ordering::SeqCst) {
            panic!("display context already acquired (one engine per process)");
        }
        Self { _claim: () }
    }

    /// Poll the pending close signals exactly once.
    ///
    /// A window-close request or an Escape key press terminates the
    /// process immediately. This is an unconditional hard exit, not a
    /// signal the frame callback can intercept, and no caller cleanup
    /// runs after it.
    pub fn await_closure(&self) {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            info!("close requested, shutting down");
            CONTEXT_ACTIVE.store(false, Ordering::SeqCst);
            std::process::exit(0);
        }
    }

    /// Upload the canvas frame buffer and draw it stretched to the window
    pub fn present(&self, canvas: &Canvas) {
        let surface = canvas.surface();
        let texture =
            Texture2D::from_rgba8(surface.width as u16, surface.height as u16, &surface.pixels);
        texture.set_filter(FilterMode::Nearest);
        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }

    /// Ask the window to match a new canvas size (after a canvas reset)
    pub fn sync_window(&self, size: ScreenSize) {
        request_new_screen_size(size.0 as f32, size.1 as f32);
    }
}

/// Owns the frame clock and canvas and runs the frame loop.
///
/// The loop is single-threaded and cooperative: caller logic runs exactly
/// once per tick inside the frame callback, and the only suspension point
/// is the fixed-rate wait at the end of each iteration.
pub struct Engine {
    game_title: String,
    fps: u32,
    canvas: Canvas,
    context: Context,
}

impl Engine {
    /// Build with a default canvas (600x600, white background)
    pub fn new(context: Context, game_title: impl Into<String>, fps: u32) -> Self {
        Self::with_canvas(context, game_title, fps, Canvas::default())
    }

    pub fn with_canvas(
        context: Context,
        game_title: impl Into<String>,
        fps: u32,
        canvas: Canvas,
    ) -> Self {
        assert!(fps > 0, "fps must be positive");
        Self {
            game_title: game_title.into(),
            fps,
            canvas,
            context,
        }
    }

    pub fn game_title(&self) -> &str {
        &self.game_title
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Open the window and run the frame loop. Does not return.
    ///
    /// Each iteration, in order: poll close signals (may exit the
    /// process), invoke `frame` exactly once with the canvas, present the
    /// frame buffer, block out the remaining `1/fps` budget, flip, then
    /// clear the canvas back to its background color. Every callback
    /// therefore starts from a freshly cleared canvas, and its draws are
    /// visible in the frame presented right after it returns.
    pub fn run<F>(self, frame: F) -> !
    where
        F: FnMut(&mut Canvas) + 'static,
    {
        let conf = Conf {
            window_title: self.game_title.clone(),
            window_width: self.canvas.width() as i32,
            window_height: self.canvas.height() as i32,
            window_resizable: false,
            ..Default::default()
        };
        macroquad::Window::from_config(conf, self.frame_loop(frame));
        // The platform event loop ended without passing through
        // await_closure (some backends close the window directly).
        std::process::exit(0)
    }

    async fn frame_loop<F>(mut self, mut frame: F)
    where
        F: FnMut(&mut Canvas) + 'static,
    {
        prevent_quit();
        info!("running {} at {} fps", self.game_title, self.fps);

        let frame_budget = 1.0 / self.fps as f64;
        let mut applied_size = self.canvas.screen_size();

        loop {
            let frame_start = get_time();

            self.context.await_closure();
            frame(&mut self.canvas);

            // A canvas reset inside the callback resizes the window
            if self.canvas.screen_size() != applied_size {
                applied_size = self.canvas.screen_size();
                self.context.sync_window(applied_size);
            }

            self.context.present(&self.canvas);
            wait_out_budget(frame_start, frame_budget);
            next_frame().await;
            self.canvas.clear();
        }
    }
}

/// Block until `budget` seconds have elapsed since `frame_start`.
fn wait_out_budget(frame_start: f64, budget: f64) {
    // Native: sleep for the bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < budget {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < budget {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < budget {
            // busy wait - the browser handles frame pacing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_engine_holds_its_canvas() {
        let context = Context::acquire();
        let canvas = Canvas::new((320, 240), Color::BLACK);
        let engine = Engine::with_canvas(context, "test window", 30, canvas);

        assert_eq!(engine.game_title(), "test window");
        assert_eq!(engine.fps(), 30);
        assert_eq!(engine.canvas().screen_size(), (320, 240));
    }
}
