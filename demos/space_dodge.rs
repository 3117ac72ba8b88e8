//! Space dodge on the quadkit runtime
//!
//! Dodge the falling asteroids with WASD. A hit resets the run and prints
//! how many frames you survived. ESC or closing the window quits.

use macroquad::rand::gen_range;
use quadkit::{Canvas, Character, Color, Context, Engine, Player};

const WIDTH: u32 = 600;
const HEIGHT: u32 = 800;
const PLAYER_SIZE: u32 = 30;
const ASTEROID_SIZE_MIN: u32 = 20;
const ASTEROID_SIZE_MAX: u32 = 50;
const ASTEROID_SPEED_MIN: i32 = 3;
const ASTEROID_SPEED_MAX: i32 = 8;
const SPAWN_INTERVAL: u32 = 40;

struct Asteroid {
    body: Character,
    speed: i32,
}

impl Asteroid {
    fn spawn() -> Self {
        let size = gen_range(ASTEROID_SIZE_MIN, ASTEROID_SIZE_MAX + 1);
        let x = gen_range(0, (WIDTH - size) as i32 + 1);
        let mut body = Character::new((x, -(size as i32)), size);
        body.fill(Color::new(100, 100, 100));
        Self {
            body,
            speed: gen_range(ASTEROID_SPEED_MIN, ASTEROID_SPEED_MAX + 1),
        }
    }
}

fn spawn_position() -> (i32, i32) {
    (
        (WIDTH - PLAYER_SIZE) as i32 / 2,
        (HEIGHT - PLAYER_SIZE) as i32 - 40,
    )
}

fn main() {
    let context = Context::acquire();
    let canvas = Canvas::new((WIDTH, HEIGHT), Color::new(10, 12, 20));

    let mut ship = Player::new(spawn_position(), PLAYER_SIZE);
    ship.body_mut().fill(Color::new(80, 200, 220));

    let mut asteroids: Vec<Asteroid> = Vec::new();
    let mut frames_survived = 0u32;
    let mut spawn_timer = 0u32;

    Engine::with_canvas(context, "Space Dodge", 60, canvas).run(move |canvas| {
        frames_survived += 1;
        spawn_timer += 1;
        if spawn_timer >= SPAWN_INTERVAL {
            spawn_timer = 0;
            asteroids.push(Asteroid::spawn());
        }

        ship.handle_keys(canvas);

        let floor = canvas.height() as i32;
        for asteroid in &mut asteroids {
            asteroid.body.collider_mut().y += asteroid.speed;
        }
        asteroids.retain(|asteroid| asteroid.body.collider().y < floor);

        for asteroid in &asteroids {
            asteroid.body.draw(canvas.surface_mut());
        }
        ship.draw(canvas.surface_mut());

        if ship.check_collision(asteroids.iter().map(|a| &a.body)) {
            println!("hit! survived {frames_survived} frames");
            asteroids.clear();
            frames_survived = 0;
            let (x, y) = spawn_position();
            ship.body_mut().set_position(x, y);
        }
    });
}
