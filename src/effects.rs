//! Short-lived pointer effects: the burst around a hovered car and the
//! ring that pops out of a clicked call-to-action button.

use std::f32::consts::TAU;

use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::render::with_opacity;

const BURST_DOT_RADIUS: f32 = 3.0;
const BURST_COLOR: Color = Color::new(255, 107, 53, 255);
const RING_COLOR: Color = Color::new(76, 175, 80, 255);
const RING_BASE_RADIUS: f32 = 10.0;
const RING_MAX_SCALE: f32 = 3.0;
const RING_THICKNESS: f32 = 3.0;

#[derive(Debug, Clone)]
struct BurstDot {
    origin: Vector2,
    angle: f32,
    distance: f32,
    duration: f32,
    elapsed: f32,
}

impl BurstDot {
    fn progress(&self) -> f32 {
        let t = (self.elapsed / self.duration).min(1.0);
        ease::quad_out(t, 0.0, 1.0, 1.0)
    }

    fn position(&self) -> Vector2 {
        let p = self.progress();
        Vector2::new(
            self.origin.x + self.angle.cos() * self.distance * p,
            self.origin.y + self.angle.sin() * self.distance * p,
        )
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone)]
struct SuccessRing {
    center: Vector2,
    elapsed: f32,
}

impl SuccessRing {
    fn duration() -> f32 {
        SUCCESS_RING_MS as f32 / 1000.0
    }

    fn progress(&self) -> f32 {
        let t = (self.elapsed / Self::duration()).min(1.0);
        ease::quad_out(t, 0.0, 1.0, 1.0)
    }

    fn is_done(&self) -> bool {
        self.elapsed >= Self::duration()
    }
}

#[derive(Debug, Default)]
pub struct EffectLayer {
    dots: Vec<BurstDot>,
    rings: Vec<SuccessRing>,
}

impl EffectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn burst(&mut self, center: Vector2, rng: &mut impl Rng) {
        for i in 0..BURST_COUNT {
            self.dots.push(BurstDot {
                origin: center,
                angle: i as f32 / BURST_COUNT as f32 * TAU,
                distance: rng.random_range(50.0..150.0),
                duration: rng.random_range(0.6..1.4),
                elapsed: 0.0,
            });
        }
    }

    pub fn success_ring(&mut self, center: Vector2) {
        self.rings.push(SuccessRing {
            center,
            elapsed: 0.0,
        });
    }

    pub fn active(&self) -> usize {
        self.dots.len() + self.rings.len()
    }

    pub fn update(&mut self, dt: f32) {
        for dot in self.dots.iter_mut() {
            dot.elapsed += dt;
        }
        for ring in self.rings.iter_mut() {
            ring.elapsed += dt;
        }
        self.dots.retain(|d| !d.is_done());
        self.rings.retain(|r| !r.is_done());
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for dot in &self.dots {
            let p = dot.progress();
            d.draw_circle_v(
                dot.position(),
                BURST_DOT_RADIUS * (1.0 - p),
                with_opacity(BURST_COLOR, 1.0 - p),
            );
        }
        for ring in &self.rings {
            let p = ring.progress();
            let outer = RING_BASE_RADIUS * RING_MAX_SCALE * p;
            d.draw_ring(
                ring.center,
                (outer - RING_THICKNESS).max(0.0),
                outer,
                0.0,
                360.0,
                48,
                with_opacity(RING_COLOR, 1.0 - p),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_spreads_dots_evenly() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer = EffectLayer::new();
        layer.burst(Vector2::new(100.0, 100.0), &mut rng);
        assert_eq!(layer.dots.len(), BURST_COUNT);
        let step = TAU / BURST_COUNT as f32;
        for (i, dot) in layer.dots.iter().enumerate() {
            assert!((dot.angle - step * i as f32).abs() < 1e-5);
            assert!((50.0..150.0).contains(&dot.distance));
            assert!((0.6..1.4).contains(&dot.duration));
        }
    }

    #[test]
    fn dots_travel_their_distance_then_vanish() {
        let mut dot = BurstDot {
            origin: Vector2::new(0.0, 0.0),
            angle: 0.0,
            distance: 100.0,
            duration: 1.0,
            elapsed: 1.0,
        };
        assert!((dot.position().x - 100.0).abs() < 1e-3);
        assert!(dot.is_done());
        dot.elapsed = 0.0;
        assert_eq!(dot.position().x, 0.0);
    }

    #[test]
    fn effects_expire() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut layer = EffectLayer::new();
        layer.burst(Vector2::new(0.0, 0.0), &mut rng);
        layer.success_ring(Vector2::new(0.0, 0.0));
        assert_eq!(layer.active(), BURST_COUNT + 1);
        layer.update(0.5);
        assert_eq!(layer.rings.len(), 1);
        layer.update(0.35);
        assert!(layer.rings.is_empty());
        layer.update(1.0);
        assert_eq!(layer.active(), 0);
    }
}
