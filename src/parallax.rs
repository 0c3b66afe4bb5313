/// Pointer-driven parallax offsets, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parallax {
    pub visual: (f32, f32),
    pub backdrop: (f32, f32),
}

impl Parallax {
    /// `mouse_x` and `mouse_y` are the pointer position as a fraction of the window.
    pub fn from_pointer(mouse_x: f32, mouse_y: f32) -> Self {
        let cx = mouse_x.clamp(0.0, 1.0) - 0.5;
        let cy = mouse_y.clamp(0.0, 1.0) - 0.5;
        Self {
            visual: (cx * 30.0, cy * 20.0),
            backdrop: (cx * 15.0, cy * 10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_has_no_offset() {
        assert_eq!(Parallax::from_pointer(0.5, 0.5), Parallax::default());
    }

    #[test]
    fn corners_reach_full_range() {
        let p = Parallax::from_pointer(1.0, 0.0);
        assert_eq!(p.visual, (15.0, -10.0));
        assert_eq!(p.backdrop, (7.5, -5.0));
    }

    #[test]
    fn pointer_outside_window_is_clamped() {
        assert_eq!(Parallax::from_pointer(3.0, -2.0), Parallax::from_pointer(1.0, 0.0));
    }
}
