//! Input adapters: raw pointer, keyboard, wheel and touch events in,
//! showcase [`Command`]s out.
//!
//! Every navigating event becomes `Next`, `Previous` or `GoTo`, so the
//! controller's transition guard sees all sources the same way.

use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    PauseAutoAdvance,
    ResumeAutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Positive values scroll down.
    Wheel { delta_y: f32 },
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
    IndicatorClick(usize),
    NavLinkClick(usize),
    HoverEnter,
    HoverLeave,
}

/// Recognizes a horizontal swipe from a touch start/end pair.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Swiping left (finger moving toward smaller x) goes forward.
    pub fn touch_end(&mut self, x: f32, y: f32) -> Option<Command> {
        let (start_x, start_y) = self.start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;

        if dx.abs() > dy.abs() && dx.abs() > self.threshold {
            Some(if dx > 0.0 { Command::Next } else { Command::Previous })
        } else {
            None
        }
    }
}

/// Turns a polled "is the pointer over it" flag into enter/leave edges.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    inside: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEdge {
    Enter,
    Leave,
}

impl HoverTracker {
    pub fn update(&mut self, inside: bool) -> Option<HoverEdge> {
        let edge = match (self.inside, inside) {
            (false, true) => Some(HoverEdge::Enter),
            (true, false) => Some(HoverEdge::Leave),
            _ => None,
        };
        self.inside = inside;
        edge
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    swipe: SwipeTracker,
}

impl InputRouter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    pub fn translate(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(Key::ArrowRight | Key::ArrowDown) => Some(Command::Next),
            InputEvent::Key(Key::ArrowLeft | Key::ArrowUp) => Some(Command::Previous),
            InputEvent::Key(Key::Other) => None,
            InputEvent::Wheel { delta_y } if delta_y > 0.0 => Some(Command::Next),
            InputEvent::Wheel { delta_y } if delta_y < 0.0 => Some(Command::Previous),
            InputEvent::Wheel { .. } => None,
            InputEvent::TouchStart { x, y } => {
                self.swipe.touch_start(x, y);
                None
            }
            InputEvent::TouchEnd { x, y } => self.swipe.touch_end(x, y),
            InputEvent::IndicatorClick(index) | InputEvent::NavLinkClick(index) => {
                Some(Command::GoTo(index))
            }
            InputEvent::HoverEnter => Some(Command::PauseAutoAdvance),
            InputEvent::HoverLeave => Some(Command::ResumeAutoAdvance),
        }
    }
}
