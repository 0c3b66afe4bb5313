//! Staggered slide-in of the first section's elements on startup.

use raylib::prelude::*;

const SLIDE_DISTANCE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroElement {
    Brand,
    Model,
    Tagline,
    Feature(usize),
    Price,
    Cta,
    Visual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cue {
    element: IntroElement,
    start: f32,
    duration: f32,
    // -1 slides in from the left, +1 from the right.
    from: f32,
}

/// Where an element currently is in its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    pub offset_x: f32,
}

impl Entrance {
    pub const SETTLED: Entrance = Entrance {
        opacity: 1.0,
        offset_x: 0.0,
    };
}

#[derive(Debug, Clone)]
pub struct IntroTimeline {
    cues: Vec<Cue>,
    elapsed: f32,
}

impl IntroTimeline {
    pub fn new(feature_count: usize) -> Self {
        let left = |element, start, duration| Cue {
            element,
            start,
            duration,
            from: -1.0,
        };

        let mut cues = vec![
            left(IntroElement::Brand, 0.2, 0.8),
            left(IntroElement::Model, 0.4, 0.8),
            left(IntroElement::Tagline, 0.6, 0.8),
        ];
        cues.extend(
            (0..feature_count).map(|i| left(IntroElement::Feature(i), 0.8 + i as f32 * 0.1, 0.6)),
        );
        cues.push(left(IntroElement::Price, 1.2, 0.8));
        cues.push(left(IntroElement::Cta, 1.4, 0.8));
        cues.push(Cue {
            element: IntroElement::Visual,
            start: 0.6,
            duration: 1.0,
            from: 1.0,
        });

        Self { cues, elapsed: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn is_finished(&self) -> bool {
        self.cues
            .iter()
            .all(|c| self.elapsed >= c.start + c.duration)
    }

    /// Elements with no cue are treated as settled.
    pub fn entrance(&self, element: IntroElement) -> Entrance {
        let Some(cue) = self.cues.iter().find(|c| c.element == element) else {
            return Entrance::SETTLED;
        };
        let t = ((self.elapsed - cue.start) / cue.duration).clamp(0.0, 1.0);
        let eased = ease::quad_in_out(t, 0.0, 1.0, 1.0);
        Entrance {
            opacity: eased,
            offset_x: cue.from * SLIDE_DISTANCE * (1.0 - eased),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_are_hidden_until_their_cue() {
        let mut intro = IntroTimeline::new(3);
        intro.update(0.3);
        assert_eq!(intro.entrance(IntroElement::Model).opacity, 0.0);
        assert_eq!(intro.entrance(IntroElement::Model).offset_x, -50.0);
        assert!(intro.entrance(IntroElement::Brand).opacity > 0.0);
    }

    #[test]
    fn features_are_staggered() {
        let mut intro = IntroTimeline::new(3);
        intro.update(0.95);
        let first = intro.entrance(IntroElement::Feature(0)).opacity;
        let third = intro.entrance(IntroElement::Feature(2)).opacity;
        assert!(first > 0.0);
        assert_eq!(third, 0.0);
    }

    #[test]
    fn visual_enters_from_the_right() {
        let mut intro = IntroTimeline::new(0);
        intro.update(0.6);
        assert_eq!(intro.entrance(IntroElement::Visual).offset_x, 50.0);
    }

    #[test]
    fn everything_settles() {
        let mut intro = IntroTimeline::new(3);
        assert!(!intro.is_finished());
        intro.update(2.3);
        assert!(intro.is_finished());
        assert_eq!(intro.entrance(IntroElement::Cta), Entrance::SETTLED);
        assert_eq!(intro.entrance(IntroElement::Feature(7)), Entrance::SETTLED);
    }
}
