//! Side-effect boundaries of the showcase.
//!
//! The controller never draws. It tells a [`Renderer`] which panels are
//! leaving, arriving or settled, and a [`ParticleLayer`] which tint to use.

use crate::section::Section;

pub trait Renderer {
    /// Start animating the section at `index` off-screen.
    fn set_outgoing(&mut self, index: usize);
    /// Attach the section at `index` off-screen, ready to slide in.
    fn set_incoming(&mut self, index: usize);
    /// Mark `active_index` as the only active section.
    fn finalize(&mut self, active_index: usize);
    fn highlight_indicator(&mut self, index: usize);
}

pub trait ParticleLayer {
    fn retint(&mut self, section: &Section);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn set_outgoing(&mut self, index: usize) {
        (**self).set_outgoing(index)
    }

    fn set_incoming(&mut self, index: usize) {
        (**self).set_incoming(index)
    }

    fn finalize(&mut self, active_index: usize) {
        (**self).finalize(active_index)
    }

    fn highlight_indicator(&mut self, index: usize) {
        (**self).highlight_indicator(index)
    }
}

impl<P: ParticleLayer + ?Sized> ParticleLayer for &mut P {
    fn retint(&mut self, section: &Section) {
        (**self).retint(section)
    }
}
