use std::f32::consts::TAU;

use rand::Rng;
use raylib::prelude::*;

use crate::engine::ParticleLayer;
use crate::render::tint_color;
use crate::section::{FALLBACK_TINT, Section, Tint};

const PARTICLE_RADIUS: f32 = 2.0;
const FLOAT_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone)]
struct Particle {
    // Fractions of the screen size.
    x: f32,
    y: f32,
    delay: f32,
    duration: f32,
}

impl Particle {
    /// Position in the float loop, 0..1, or `None` before the delay runs out.
    fn phase(&self, elapsed: f32) -> Option<f32> {
        let t = elapsed - self.delay;
        if t < 0.0 {
            return None;
        }
        Some((t % self.duration) / self.duration)
    }
}

/// Decorative background particles sharing one tint.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    tint: Tint,
    elapsed: f32,
}

impl ParticleField {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                delay: rng.random_range(0.0..6.0),
                duration: rng.random_range(4.0..8.0),
            })
            .collect();

        Self {
            particles,
            tint: FALLBACK_TINT,
            elapsed: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn tint(&self) -> Tint {
        self.tint
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        for particle in &self.particles {
            let (lift, opacity) = match particle.phase(self.elapsed) {
                Some(p) => ((p * TAU).sin() * FLOAT_HEIGHT, 0.4 + 0.6 * (p * TAU * 0.5).sin()),
                None => (0.0, 0.4),
            };
            d.draw_circle_v(
                Vector2::new(particle.x * width, particle.y * height - lift),
                PARTICLE_RADIUS,
                tint_color(self.tint, opacity),
            );
        }
    }
}

impl ParticleLayer for ParticleField {
    fn retint(&mut self, section: &Section) {
        self.tint = section.tint();
    }
}
