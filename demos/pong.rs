//! Pong on the quadkit runtime
//!
//! W/S moves the left paddle, the right paddle trails the ball. Scores go
//! to the console. ESC or closing the window quits.

use macroquad::rand::gen_range;
use quadkit::{Canvas, Character, Color, Context, Engine, Player, Surface};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const PADDLE_W: u32 = 15;
const PADDLE_H: u32 = 80;
const BALL_SIZE: u32 = 15;
const AI_SPEED: i32 = 6;
const MAX_BALL_SPEED: i32 = 8;

struct Ball {
    body: Character,
    vx: i32,
    vy: i32,
}

impl Ball {
    fn new() -> Self {
        let mut body = Character::new(center(), BALL_SIZE);
        body.fill(Color::WHITE);
        let mut ball = Self { body, vx: 0, vy: 0 };
        ball.serve();
        ball
    }

    fn serve(&mut self) {
        let (x, y) = center();
        self.body.set_position(x, y);
        self.vx = if gen_range(0, 2) == 0 { -5 } else { 5 };
        self.vy = if gen_range(0, 2) == 0 { -3 } else { 3 };
    }

    fn update(&mut self, canvas: &Canvas) {
        let max_y = canvas.height() as i32 - BALL_SIZE as i32;
        let collider = self.body.collider_mut();
        collider.x += self.vx;
        collider.y += self.vy;

        // Bounce off the top and bottom walls
        if collider.y <= 0 || collider.y >= max_y {
            self.vy = -self.vy;
            collider.y = collider.y.clamp(0, max_y);
        }
    }

    /// Reverse direction, deflecting by where the ball struck the paddle
    fn bounce_off(&mut self, paddle: &Character) {
        let paddle_center = paddle.collider().y + PADDLE_H as i32 / 2;
        let ball_center = self.body.collider().y + BALL_SIZE as i32 / 2;
        let relative = (ball_center - paddle_center) as f32 / (PADDLE_H as f32 / 2.0);

        self.vx = -self.vx;
        self.vy = (relative * 5.0) as i32;
        if self.vx.abs() < MAX_BALL_SPEED {
            self.vx += self.vx.signum();
        }
    }
}

fn center() -> (i32, i32) {
    (
        (WIDTH - BALL_SIZE) as i32 / 2,
        (HEIGHT - BALL_SIZE) as i32 / 2,
    )
}

fn paddle_image() -> Surface {
    Surface::new(PADDLE_W, PADDLE_H, Color::WHITE)
}

fn main() {
    let context = Context::acquire();
    let canvas = Canvas::new((WIDTH, HEIGHT), Color::BLACK);

    let paddle_y = (HEIGHT - PADDLE_H) as i32 / 2;
    let mut player = Player::new((30, paddle_y), PADDLE_W);
    player.body_mut().set_image(paddle_image());

    let mut ai = Character::new((WIDTH as i32 - 45, paddle_y), PADDLE_W);
    ai.set_image(paddle_image());

    let mut ball = Ball::new();
    let mut player_score = 0u32;
    let mut ai_score = 0u32;

    Engine::with_canvas(context, "Pong", 60, canvas).run(move |canvas| {
        player.handle_keys(canvas);

        // The AI paddle trails the ball at a capped speed
        let target = ball.body.collider().y + BALL_SIZE as i32 / 2 - PADDLE_H as i32 / 2;
        let step = (target - ai.collider().y).clamp(-AI_SPEED, AI_SPEED);
        let max_y = canvas.height() as i32 - PADDLE_H as i32;
        let next = (ai.collider().y + step).clamp(0, max_y);
        ai.collider_mut().y = next;

        ball.update(canvas);
        if ball.vx < 0 && ball.body.check_collision([player.body()]) {
            ball.bounce_off(player.body());
        } else if ball.vx > 0 && ball.body.check_collision([&ai]) {
            ball.bounce_off(&ai);
        }

        // A ball past either edge scores for the other side
        if ball.body.collider().right() < 0 {
            ai_score += 1;
            println!("score: you {player_score} - cpu {ai_score}");
            ball.serve();
        } else if ball.body.collider().x > canvas.width() as i32 {
            player_score += 1;
            println!("score: you {player_score} - cpu {ai_score}");
            ball.serve();
        }

        player.draw(canvas.surface_mut());
        ai.draw(canvas.surface_mut());
        ball.body.draw(canvas.surface_mut());
    });
}
