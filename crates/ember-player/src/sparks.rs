//! Rising-sparks demo game
//!
//! A spawn timer feeds short-lived spark entities into a collection; a
//! periodic "gust" broadcast nudges every waiting spark sideways.

use ember_core::{entity_ref, Color, Entity, Game, Renderer, Result};
use ember_runtime::{EntityCollection, IntervalTimer, Signal, Waiter};
use rand::Rng;
use std::rc::Rc;

const SPARK_GLYPHS: &[char] = &['*', '+', '.', '\''];
const SPARK_COLOR: u32 = 0xFFA040;

struct Spark {
    x: f64,
    y: f64,
    rise: f64,
    drift: f64,
    ttl: f64,
    lifetime: f64,
    glyph: char,
    gust: Rc<Signal<f64>>,
    waiter: Waiter<f64>,
}

impl Spark {
    fn new(x: f64, y: f64, gust: &Rc<Signal<f64>>) -> Self {
        let mut rng = rand::thread_rng();
        let ttl = rng.gen_range(1.5..4.0);
        Self {
            x,
            y,
            rise: rng.gen_range(2.0..6.0),
            drift: rng.gen_range(-1.0..1.0),
            ttl,
            lifetime: ttl,
            glyph: SPARK_GLYPHS[rng.gen_range(0..SPARK_GLYPHS.len())],
            waiter: gust.wait(),
            gust: Rc::clone(gust),
        }
    }
}

impl Entity for Spark {
    fn draw(&mut self, renderer: &mut dyn Renderer, delta: f64) -> Result<()> {
        // A gust resolves the waiter once; re-subscribe for the next one
        if let Some(push) = self.waiter.try_take() {
            self.drift += push;
            self.waiter = self.gust.wait();
        }

        self.y -= self.rise * delta;
        self.x += self.drift * delta;
        self.ttl -= delta;

        let fade = (self.ttl / self.lifetime).clamp(0.2, 1.0) as f32;
        renderer.color(Color::from_hex(SPARK_COLOR).dimmed(fade));
        renderer.char(self.glyph, self.x as i32, self.y as i32);
        Ok(())
    }

    fn is_alive(&self) -> bool {
        self.ttl > 0.0 && self.y >= 0.0
    }
}

/// The demo game: an entity collection plus the timers and signal that pace it.
pub struct SparksGame {
    entities: EntityCollection,
    spawn: IntervalTimer,
    gust_timer: IntervalTimer,
    gust: Rc<Signal<f64>>,
    width: i32,
    height: i32,
}

impl SparksGame {
    pub fn new(width: i32, height: i32, spawn_interval: f64, gust_interval: f64) -> Self {
        Self {
            entities: EntityCollection::new(),
            spawn: IntervalTimer::new(spawn_interval),
            gust_timer: IntervalTimer::new(gust_interval),
            gust: Rc::new(Signal::new()),
            width,
            height,
        }
    }

    pub fn spark_count(&self) -> usize {
        self.entities.len()
    }

    fn spawn_spark(&self, x: f64) {
        let floor = (self.height - 1) as f64;
        self.entities.add(entity_ref(Spark::new(x, floor, &self.gust)));
    }
}

impl Game for SparksGame {
    fn key(&mut self, code: &str) {
        match code {
            // Space stokes the fire, G forces a gust
            "Space" => {
                let mut rng = rand::thread_rng();
                for _ in 0..8 {
                    self.spawn_spark(rng.gen_range(0.0..self.width as f64));
                }
            }
            "KeyG" => self.gust.emit(rand::thread_rng().gen_range(-3.0..3.0)),
            _ => {}
        }
    }

    fn mouse(&mut self, x: i32, _y: i32) {
        self.spawn_spark(x as f64);
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, delta: f64) -> Result<()> {
        if self.spawn.count(delta) {
            self.spawn_spark(rand::thread_rng().gen_range(0.0..self.width as f64));
        }
        if self.gust_timer.count(delta) {
            self.gust.emit(rand::thread_rng().gen_range(-2.0..2.0));
        }

        self.entities.drive(renderer, delta)?;

        renderer.color(Color::WHITE);
        renderer.print(&format!("sparks: {:3}", self.entities.len()), 1, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn color(&mut self, _color: Color) {}
        fn char(&mut self, _c: char, _x: i32, _y: i32) {}
        fn rect(&mut self, _x: i32, _y: i32) {}
    }

    #[test]
    fn test_spawn_timer_feeds_collection() {
        let mut game = SparksGame::new(40, 20, 0.1, 1e9);
        game.draw(&mut NullRenderer, 0.25).unwrap();
        assert!(game.spark_count() >= 1);
    }

    #[test]
    fn test_space_stokes_eight_sparks() {
        let mut game = SparksGame::new(40, 20, 1e9, 1e9);
        game.key("Space");
        assert_eq!(game.spark_count(), 8);
        game.key("KeyQ");
        assert_eq!(game.spark_count(), 8);
    }

    #[test]
    fn test_mouse_spawns_at_column() {
        let mut game = SparksGame::new(40, 20, 1e9, 1e9);
        game.mouse(12, 0);
        assert_eq!(game.spark_count(), 1);
    }

    #[test]
    fn test_sparks_burn_out() {
        let mut game = SparksGame::new(40, 20, 1e9, 1e9);
        game.mouse(5, 0);

        // Sparks live at most four seconds
        for _ in 0..20 {
            game.draw(&mut NullRenderer, 0.5).unwrap();
        }
        assert_eq!(game.spark_count(), 0);
    }

    #[test]
    fn test_forced_gust_reaches_waiting_sparks() {
        let mut game = SparksGame::new(40, 20, 1e9, 1e9);
        game.mouse(5, 0);
        assert_eq!(game.gust.len(), 1);

        game.key("KeyG");
        // The spark consumes the gust and re-subscribes on its next draw
        game.draw(&mut NullRenderer, 0.01).unwrap();
        assert_eq!(game.gust.len(), 1);
    }
}
