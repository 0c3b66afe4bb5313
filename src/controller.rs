//! Section transition state machine and auto-advance coordination.
//!
//! A transition is two deferred steps on the virtual clock: after
//! [`Timings::exit`] the incoming section is attached, and after
//! [`Timings::settle`] it is finalized as the active one. At most one
//! transition is in flight; navigation requests that arrive meanwhile are
//! dropped, whatever their source.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::{ConfigError, Timings};
use crate::engine::{ParticleLayer, Renderer};
use crate::input::Command;
use crate::section::Section;
use crate::state::{ShowcaseState, TransitionStep};
use crate::timer::{Scheduler, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Enter,
    Finalize,
    AutoAdvance,
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Started,
    AlreadyShowing,
    Busy,
    OutOfRange,
}

pub struct SectionController<R, P> {
    sections: Vec<Section>,
    timings: Timings,
    current_index: usize,
    state: ShowcaseState,
    auto_advance: Option<TaskId>,
    scheduler: Scheduler<Task>,
    renderer: R,
    particles: P,
}

impl<R: Renderer, P: ParticleLayer> SectionController<R, P> {
    pub fn new(
        sections: Vec<Section>,
        timings: Timings,
        renderer: R,
        particles: P,
    ) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        timings.validate()?;

        Ok(Self {
            sections,
            timings,
            current_index: 0,
            state: ShowcaseState::Idle,
            auto_advance: None,
            scheduler: Scheduler::new(),
            renderer,
            particles,
        })
    }

    /// Syncs the collaborators with section 0 and starts auto-advance.
    pub fn start(&mut self) {
        let index = self.current_index;
        self.renderer.finalize(index);
        self.renderer.highlight_indicator(index);
        self.particles.retint(&self.sections[index]);
        self.resume_auto_advance();
        info!(sections = self.sections.len(), "showcase started");
    }

    pub fn go_to(&mut self, index: usize) -> Navigation {
        if let ShowcaseState::Transitioning { from, to, .. } = self.state {
            debug!(requested = index, from, to, "navigation dropped, transition in flight");
            return Navigation::Busy;
        }
        if index == self.current_index {
            return Navigation::AlreadyShowing;
        }
        if index >= self.sections.len() {
            debug!(requested = index, sections = self.sections.len(), "navigation out of range");
            return Navigation::OutOfRange;
        }

        let from = self.current_index;
        debug!(from, to = index, "transition started");
        self.state = ShowcaseState::Transitioning {
            from,
            to: index,
            step: TransitionStep::Exiting,
        };
        self.renderer.set_outgoing(from);
        self.scheduler.schedule(self.timings.exit, Task::Enter);
        Navigation::Started
    }

    pub fn next(&mut self) -> Navigation {
        let n = self.sections.len();
        self.go_to((self.current_index + 1) % n)
    }

    pub fn previous(&mut self) -> Navigation {
        let n = self.sections.len();
        self.go_to((self.current_index + n - 1) % n)
    }

    /// Cancels the auto-advance timer. The showcase state is left alone.
    pub fn pause_auto_advance(&mut self) {
        if let Some(id) = self.auto_advance.take() {
            self.scheduler.cancel(id);
            debug!("auto-advance paused");
        }
    }

    /// Re-arms auto-advance with a full period; elapsed time is not carried over.
    pub fn resume_auto_advance(&mut self) {
        let Some(period) = self.timings.auto_advance else {
            return;
        };
        if self.auto_advance.is_none() {
            self.auto_advance = Some(self.scheduler.every(period, Task::AutoAdvance));
            debug!(period_ms = period.as_millis() as u64, "auto-advance running");
        }
    }

    pub fn apply(&mut self, command: Command) -> Option<Navigation> {
        match command {
            Command::Next => Some(self.next()),
            Command::Previous => Some(self.previous()),
            Command::GoTo(index) => Some(self.go_to(index)),
            Command::PauseAutoAdvance => {
                self.pause_auto_advance();
                None
            }
            Command::ResumeAutoAdvance => {
                self.resume_auto_advance();
                None
            }
        }
    }

    /// Advances the virtual clock by `dt`, running every step that falls due.
    pub fn update(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run(task);
        }
        self.scheduler.settle(until);
    }

    fn run(&mut self, task: Task) {
        match (task, self.state) {
            (Task::AutoAdvance, _) => {
                self.next();
            }
            (
                Task::Enter,
                ShowcaseState::Transitioning {
                    from,
                    to,
                    step: TransitionStep::Exiting,
                },
            ) => {
                self.renderer.set_incoming(to);
                self.state = ShowcaseState::Transitioning {
                    from,
                    to,
                    step: TransitionStep::Entering,
                };
                self.scheduler.schedule(self.timings.settle, Task::Finalize);
            }
            (
                Task::Finalize,
                ShowcaseState::Transitioning {
                    from,
                    to,
                    step: TransitionStep::Entering,
                },
            ) => {
                self.renderer.finalize(to);
                self.renderer.highlight_indicator(to);
                self.current_index = to;
                self.state = ShowcaseState::Idle;
                self.particles.retint(&self.sections[to]);
                info!(from, to, section = self.sections[to].id, "section shown");
            }
            (task, state) => {
                debug!(?task, ?state, "stale transition step ignored");
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_section(&self) -> &Section {
        &self.sections[self.current_index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn state(&self) -> ShowcaseState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Number of tasks on the virtual clock, auto-advance included.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn particles(&self) -> &P {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut P {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SHOWCASE;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Effect {
        Outgoing(usize),
        Incoming(usize),
        Finalize(usize),
        Highlight(usize),
        Retint(&'static str),
    }

    #[derive(Default)]
    struct Recorder {
        effects: Vec<Effect>,
    }

    impl Renderer for Recorder {
        fn set_outgoing(&mut self, index: usize) {
            self.effects.push(Effect::Outgoing(index));
        }
        fn set_incoming(&mut self, index: usize) {
            self.effects.push(Effect::Incoming(index));
        }
        fn finalize(&mut self, active_index: usize) {
            self.effects.push(Effect::Finalize(active_index));
        }
        fn highlight_indicator(&mut self, index: usize) {
            self.effects.push(Effect::Highlight(index));
        }
    }

    #[derive(Default)]
    struct Tints(Vec<&'static str>);

    impl ParticleLayer for Tints {
        fn retint(&mut self, section: &Section) {
            self.0.push(section.id);
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller() -> SectionController<Recorder, Tints> {
        SectionController::new(
            SHOWCASE.to_vec(),
            Timings::default(),
            Recorder::default(),
            Tints::default(),
        )
        .unwrap()
    }

    #[test]
    fn transition_runs_both_steps_in_order() {
        let mut c = controller();
        assert_eq!(c.go_to(2), Navigation::Started);
        assert_eq!(c.renderer().effects, vec![Effect::Outgoing(0)]);
        assert!(c.is_transitioning());

        c.update(ms(399));
        assert_eq!(c.renderer().effects.len(), 1);
        c.update(ms(1));
        assert_eq!(
            c.state(),
            ShowcaseState::Transitioning { from: 0, to: 2, step: TransitionStep::Entering }
        );
        assert_eq!(c.current_index(), 0);

        c.update(ms(50));
        assert_eq!(
            c.renderer().effects,
            vec![
                Effect::Outgoing(0),
                Effect::Incoming(2),
                Effect::Finalize(2),
                Effect::Highlight(2),
            ]
        );
        assert_eq!(c.particles().0, vec!["honda"]);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.state(), ShowcaseState::Idle);
    }

    #[test]
    fn single_update_covers_whole_transition() {
        let mut c = controller();
        c.next();
        c.update(ms(450));
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn going_to_current_section_has_no_effects() {
        let mut c = controller();
        assert_eq!(c.go_to(0), Navigation::AlreadyShowing);
        c.update(ms(1000));
        assert!(c.renderer().effects.is_empty());
        assert!(c.particles().0.is_empty());
    }

    #[test]
    fn second_request_mid_transition_is_dropped() {
        let mut c = controller();
        assert_eq!(c.go_to(1), Navigation::Started);
        c.update(ms(200));
        assert_eq!(c.go_to(3), Navigation::Busy);
        assert_eq!(c.next(), Navigation::Busy);
        c.update(ms(220));
        assert_eq!(c.go_to(3), Navigation::Busy);
        c.update(ms(1000));

        let finals = c
            .renderer()
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::Finalize(_)))
            .count();
        assert_eq!(finals, 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut c = controller();
        assert_eq!(c.previous(), Navigation::Started);
        c.update(ms(450));
        assert_eq!(c.current_index(), 3);
        c.next();
        c.update(ms(450));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn four_nexts_come_back_to_start() {
        let mut c = controller();
        for expected in [1, 2, 3] {
            c.next();
            c.update(ms(450));
            assert_eq!(c.current_index(), expected);
        }
        c.next();
        c.update(ms(450));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn auto_advance_moves_every_period() {
        let mut c = controller();
        c.start();
        assert!(c.is_auto_advancing());
        c.update(ms(7999));
        assert_eq!(c.current_index(), 0);
        c.update(ms(1 + 450));
        assert_eq!(c.current_index(), 1);
        c.update(ms(8000));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn pause_and_resume_never_advance_by_themselves() {
        let mut c = controller();
        c.start();
        c.renderer_mut().effects.clear();
        c.update(ms(7000));
        c.pause_auto_advance();
        c.resume_auto_advance();
        assert!(c.renderer().effects.is_empty());

        // The interval restarts from zero after resume.
        c.update(ms(7999));
        assert_eq!(c.current_index(), 0);
        c.update(ms(451));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn paused_showcase_stays_put() {
        let mut c = controller();
        c.start();
        c.pause_auto_advance();
        assert!(!c.is_auto_advancing());
        c.update(ms(60_000));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.pending_tasks(), 0);
    }

    #[test]
    fn resume_twice_keeps_one_timer() {
        let mut c = controller();
        c.resume_auto_advance();
        c.resume_auto_advance();
        assert_eq!(c.pending_tasks(), 1);
    }

    #[test]
    fn disabled_auto_advance_never_arms() {
        let timings = Timings { auto_advance: None, ..Timings::default() };
        let mut c = SectionController::new(
            SHOWCASE.to_vec(),
            timings,
            Recorder::default(),
            Tints::default(),
        )
        .unwrap();
        c.start();
        c.apply(Command::ResumeAutoAdvance);
        assert!(!c.is_auto_advancing());
    }

    #[test]
    fn start_syncs_collaborators_with_first_section() {
        let mut c = controller();
        c.start();
        assert_eq!(
            c.renderer().effects,
            vec![Effect::Finalize(0), Effect::Highlight(0)]
        );
        assert_eq!(c.particles().0, vec!["toyota"]);
    }

    #[test]
    fn out_of_range_is_rejected_without_effects() {
        let mut c = controller();
        assert_eq!(c.go_to(4), Navigation::OutOfRange);
        assert!(c.renderer().effects.is_empty());
    }

    #[test]
    fn empty_section_list_is_an_error() {
        let result = SectionController::new(
            Vec::new(),
            Timings::default(),
            Recorder::default(),
            Tints::default(),
        );
        assert!(matches!(result, Err(ConfigError::NoSections)));
    }
}
