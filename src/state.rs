#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransitionStep {
    Exiting,  // Outgoing section is animating off-screen
    Entering, // Incoming section is attached and settling
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ShowcaseState {
    Idle, // Showing the current section, timer running or paused
    Transitioning {
        from: usize,
        to: usize,
        step: TransitionStep,
    },
}

impl ShowcaseState {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, ShowcaseState::Transitioning { .. })
    }
}
