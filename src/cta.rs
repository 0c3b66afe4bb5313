use std::time::Duration;

use tracing::debug;

use crate::constants::*;
use crate::timer::Scheduler;

pub const PROCESSING_LABEL: &str = "PROCESSING...";
pub const SUCCESS_LABEL: &str = "SUCCESS!";
const PRESSED_SCALE: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaPhase {
    Ready,
    Processing,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CtaTask {
    Release,
    Succeed,
    Restore,
}

/// Call-to-action button: press, simulated processing, success, restore.
#[derive(Debug)]
pub struct CtaButton {
    label: &'static str,
    phase: CtaPhase,
    pressed: bool,
    scheduler: Scheduler<CtaTask>,
}

impl CtaButton {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            phase: CtaPhase::Ready,
            pressed: false,
            scheduler: Scheduler::new(),
        }
    }

    /// Returns false while the button is disabled.
    pub fn click(&mut self) -> bool {
        if self.phase != CtaPhase::Ready {
            return false;
        }
        debug!(label = self.label, "cta clicked");
        self.pressed = true;
        self.phase = CtaPhase::Processing;
        self.scheduler
            .schedule(Duration::from_millis(CTA_PRESS_MS), CtaTask::Release);
        self.scheduler
            .schedule(Duration::from_millis(CTA_PROCESSING_MS), CtaTask::Succeed);
        true
    }

    pub fn update(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            match task {
                CtaTask::Release => self.pressed = false,
                CtaTask::Succeed => {
                    self.phase = CtaPhase::Success;
                    self.scheduler
                        .schedule(Duration::from_millis(CTA_SUCCESS_MS), CtaTask::Restore);
                }
                CtaTask::Restore => self.phase = CtaPhase::Ready,
            }
        }
        self.scheduler.settle(until);
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            CtaPhase::Ready => self.label,
            CtaPhase::Processing => PROCESSING_LABEL,
            CtaPhase::Success => SUCCESS_LABEL,
        }
    }

    pub fn phase(&self) -> CtaPhase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase == CtaPhase::Ready
    }

    pub fn scale(&self) -> f32 {
        if self.pressed { PRESSED_SCALE } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn full_sequence() {
        let mut button = CtaButton::new("GET A QUOTE");
        assert!(button.click());
        assert_eq!(button.label(), PROCESSING_LABEL);
        assert_eq!(button.scale(), 0.95);
        assert!(!button.is_enabled());

        button.update(ms(150));
        assert_eq!(button.scale(), 1.0);

        button.update(ms(1350));
        assert_eq!(button.phase(), CtaPhase::Success);
        assert_eq!(button.label(), SUCCESS_LABEL);

        button.update(ms(1999));
        assert!(!button.is_enabled());
        button.update(ms(1));
        assert_eq!(button.label(), "GET A QUOTE");
        assert!(button.is_enabled());
    }

    #[test]
    fn clicks_while_disabled_are_ignored() {
        let mut button = CtaButton::new("EXPLORE");
        assert!(button.click());
        button.update(ms(100));
        assert!(!button.click());
        button.update(ms(1500));
        assert!(!button.click());
        button.update(ms(2000));
        assert!(button.click());
    }
}
