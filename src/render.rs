use raylib::prelude::*;

use crate::constants::*;
use crate::cta::{CtaButton, CtaPhase};
use crate::engine::Renderer;
use crate::intro::{Entrance, IntroElement, IntroTimeline};
use crate::parallax::Parallax;
use crate::section::{Backdrop, Section, Tint};

const ACCENT: Color = Color::new(255, 107, 53, 255);
const SUCCESS: Color = Color::new(76, 175, 80, 255);
const TEXT: Color = Color::new(245, 245, 245, 255);
const MUTED: Color = Color::new(190, 190, 200, 255);

pub fn tint_color(tint: Tint, opacity: f32) -> Color {
    Color::new(
        tint.r,
        tint.g,
        tint.b,
        (tint.a as f32 * opacity.clamp(0.0, 1.0)) as u8,
    )
}

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8,
    )
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Screen geometry of the interactive parts, shared by drawing and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub sections: usize,
}

impl Layout {
    const DOT_SPACING: f32 = 28.0;
    const DOT_RADIUS: f32 = 7.0;
    const DOT_HIT_RADIUS: f32 = 12.0;
    const LINK_WIDTH: f32 = 150.0;
    const LINK_HEIGHT: f32 = 40.0;

    pub fn new(width: f32, height: f32, sections: usize) -> Self {
        Self {
            width,
            height,
            sections,
        }
    }

    pub fn indicator(&self, index: usize) -> Vector2 {
        let span = Self::DOT_SPACING * (self.sections.saturating_sub(1)) as f32;
        Vector2::new(
            self.width * 0.5 - span * 0.5 + Self::DOT_SPACING * index as f32,
            self.height - 40.0,
        )
    }

    pub fn indicator_at(&self, point: Vector2) -> Option<usize> {
        (0..self.sections).find(|&i| {
            let c = self.indicator(i);
            let (dx, dy) = (point.x - c.x, point.y - c.y);
            dx * dx + dy * dy <= Self::DOT_HIT_RADIUS * Self::DOT_HIT_RADIUS
        })
    }

    pub fn nav_link(&self, index: usize) -> Rectangle {
        let from_right = (self.sections - index) as f32;
        Rectangle::new(
            self.width - 20.0 - from_right * Self::LINK_WIDTH,
            20.0,
            Self::LINK_WIDTH,
            Self::LINK_HEIGHT,
        )
    }

    pub fn nav_link_at(&self, point: Vector2) -> Option<usize> {
        (0..self.sections).find(|&i| contains(&self.nav_link(i), point))
    }

    pub fn cta(&self) -> Rectangle {
        Rectangle::new(self.width * 0.08, self.height * 0.72, 300.0, 56.0)
    }

    pub fn is_on_cta(&self, point: Vector2) -> bool {
        contains(&self.cta(), point)
    }

    pub fn visual(&self) -> Rectangle {
        Rectangle::new(
            self.width * 0.55,
            self.height * 0.38,
            self.width * 0.35,
            self.height * 0.28,
        )
    }

    pub fn is_on_visual(&self, point: Vector2) -> bool {
        contains(&self.visual(), point)
    }

    pub fn visual_center(&self) -> Vector2 {
        let r = self.visual();
        Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5)
    }
}

/// Horizontal position (fraction of screen width) and opacity of one section.
#[derive(Debug, Clone)]
struct Panel {
    attached: bool,
    active: bool,

    offset: f32,
    opacity: f32,

    start_offset: f32,
    start_opacity: f32,
    end_offset: f32,
    end_opacity: f32,

    animation_timer: f32,
    animation_duration: f32,
    is_animating: bool,
}

impl Panel {
    fn hidden() -> Self {
        Self {
            attached: false,
            active: false,
            offset: 1.0,
            opacity: 0.0,
            start_offset: 1.0,
            start_opacity: 0.0,
            end_offset: 1.0,
            end_opacity: 0.0,
            animation_timer: 0.0,
            animation_duration: 0.0,
            is_animating: false,
        }
    }

    fn place(&mut self, offset: f32, opacity: f32) {
        self.offset = offset;
        self.opacity = opacity;
        self.is_animating = false;
    }

    fn animate_to(&mut self, offset: f32, opacity: f32, duration: f32) {
        self.start_offset = self.offset;
        self.start_opacity = self.opacity;
        self.end_offset = offset;
        self.end_opacity = opacity;
        self.animation_timer = 0.0;
        self.animation_duration = duration;
        self.is_animating = true;
    }

    fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = if self.animation_duration > 0.0 {
            (self.animation_timer / self.animation_duration).min(1.0)
        } else {
            1.0
        };
        let eased = ease::cubic_out(t, 0.0, 1.0, 1.0);

        self.offset = raylib::core::math::lerp(self.start_offset, self.end_offset, eased);
        self.opacity = raylib::core::math::lerp(self.start_opacity, self.end_opacity, eased);

        if t >= 1.0 {
            self.is_animating = false;
            self.offset = self.end_offset;
            self.opacity = self.end_opacity;
        }
    }
}

/// Per-frame inputs to drawing that the renderer does not own.
pub struct Frame<'a> {
    pub sections: &'a [Section],
    pub layout: Layout,
    pub parallax: Parallax,
    pub ctas: &'a [CtaButton],
    pub intro: Option<&'a IntroTimeline>,
}

/// Slides section panels in and out and tracks the highlighted indicator.
#[derive(Debug, Clone)]
pub struct StageRenderer {
    panels: Vec<Panel>,
    highlighted: usize,
    exit_duration: f32,
}

impl StageRenderer {
    pub fn new(sections: usize, exit_duration: f32) -> Self {
        Self {
            panels: vec![Panel::hidden(); sections],
            highlighted: 0,
            exit_duration,
        }
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn active_sections(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn attached_sections(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.attached)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn update(&mut self, dt: f32) {
        for panel in self.panels.iter_mut() {
            panel.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let layout = frame.layout;
        d.clear_background(Color::new(12, 12, 18, 255));

        for (i, panel) in self.panels.iter().enumerate() {
            if !panel.attached || panel.opacity <= 0.0 {
                continue;
            }
            let Some(section) = frame.sections.get(i) else {
                continue;
            };
            let shift = panel.offset * layout.width;
            let intro = if i == 0 { frame.intro } else { None };
            draw_backdrop(
                d,
                section.backdrop,
                &layout,
                shift + frame.parallax.backdrop.0,
                frame.parallax.backdrop.1,
                panel.opacity,
            );
            draw_copy(d, section, &layout, shift, panel.opacity, intro);
            draw_visual(d, section, &layout, shift, frame.parallax, panel.opacity, intro);
            if let Some(button) = frame.ctas.get(i) {
                draw_cta(d, button, &layout, shift, panel.opacity, intro);
            }
        }
    }

    pub fn draw_navigation(&self, d: &mut RaylibDrawHandle, frame: &Frame) {
        let layout = frame.layout;
        for (i, section) in frame.sections.iter().enumerate() {
            let link = layout.nav_link(i);
            let color = if i == self.highlighted { ACCENT } else { MUTED };
            d.draw_text(section.brand, link.x as i32 + 10, link.y as i32 + 10, 20, color);

            let center = layout.indicator(i);
            if i == self.highlighted {
                d.draw_circle_v(center, Layout::DOT_RADIUS, ACCENT);
            } else {
                d.draw_circle_v(center, Layout::DOT_RADIUS, with_opacity(TEXT, 0.35));
            }
        }
    }
}

impl Renderer for StageRenderer {
    fn set_outgoing(&mut self, index: usize) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.animate_to(-1.0, 0.0, self.exit_duration);
        }
    }

    fn set_incoming(&mut self, index: usize) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.attached = true;
            panel.place(1.0, 0.0);
        }
    }

    fn finalize(&mut self, active_index: usize) {
        for (i, panel) in self.panels.iter_mut().enumerate() {
            if i == active_index {
                panel.attached = true;
                panel.active = true;
                if panel.offset != 0.0 || panel.opacity < 1.0 {
                    panel.animate_to(0.0, 1.0, ENTER_DURATION);
                }
            } else {
                panel.active = false;
                panel.attached = false;
                panel.place(1.0, 0.0);
            }
        }
    }

    fn highlight_indicator(&mut self, index: usize) {
        self.highlighted = index;
    }
}

fn entrance(intro: Option<&IntroTimeline>, element: IntroElement) -> Entrance {
    intro.map_or(Entrance::SETTLED, |t| t.entrance(element))
}

fn draw_backdrop(d: &mut RaylibDrawHandle, backdrop: Backdrop, layout: &Layout, x: f32, y: f32, opacity: f32) {
    let (w, h) = (layout.width, layout.height);
    let (top, bottom, shape) = match backdrop {
        Backdrop::Skyline => (Color::new(20, 30, 60, 255), Color::new(60, 80, 130, 255), Color::new(15, 20, 40, 255)),
        Backdrop::Mountain => (Color::new(70, 110, 150, 255), Color::new(200, 170, 110, 255), Color::new(50, 60, 70, 255)),
        Backdrop::Neon => (Color::new(20, 0, 40, 255), Color::new(60, 0, 80, 255), Color::new(255, 0, 128, 255)),
        Backdrop::Terrain => (Color::new(150, 110, 70, 255), Color::new(90, 60, 30, 255), Color::new(70, 45, 20, 255)),
    };
    d.draw_rectangle_gradient_v(x as i32, 0, w as i32, h as i32, with_opacity(top, opacity), with_opacity(bottom, opacity));

    let shape = with_opacity(shape, opacity);
    let ground = h * 0.82 + y;
    match backdrop {
        Backdrop::Skyline => {
            for i in 0..16 {
                let bw = w / 16.0;
                let bh = h * (0.12 + ((i * 7) % 5) as f32 * 0.05);
                d.draw_rectangle((x + bw * i as f32) as i32, (ground - bh) as i32, (bw - 4.0) as i32, bh as i32, shape);
            }
        }
        Backdrop::Mountain => {
            for i in 0..5 {
                let base = x + w * (i as f32 * 0.25 - 0.1);
                let peak = h * (0.35 + (i % 2) as f32 * 0.1) + y;
                d.draw_triangle(
                    Vector2::new(base + w * 0.15, peak),
                    Vector2::new(base, ground),
                    Vector2::new(base + w * 0.3, ground),
                    shape,
                );
            }
        }
        Backdrop::Neon => {
            for i in 0..8 {
                let ly = ground - i as f32 * h * 0.06;
                d.draw_line_ex(Vector2::new(x, ly), Vector2::new(x + w, ly), 2.0, with_opacity(shape, 0.6 - i as f32 * 0.06));
            }
        }
        Backdrop::Terrain => {
            for i in 0..6 {
                let cx = x + w * (i as f32 * 0.2);
                d.draw_circle_v(Vector2::new(cx, ground + h * 0.1), w * 0.14, shape);
            }
        }
    }
}

fn draw_copy(d: &mut RaylibDrawHandle, section: &Section, layout: &Layout, shift: f32, opacity: f32, intro: Option<&IntroTimeline>) {
    let x = layout.width * 0.08 + shift;
    let h = layout.height;

    let lines = [
        (IntroElement::Brand, section.brand, h * 0.22, 28, ACCENT),
        (IntroElement::Model, section.model, h * 0.27, 64, TEXT),
        (IntroElement::Tagline, section.tagline, h * 0.38, 24, MUTED),
        (IntroElement::Price, section.price, h * 0.58, 36, TEXT),
    ];
    for (element, text, y, size, color) in lines {
        let e = entrance(intro, element);
        d.draw_text(text, (x + e.offset_x) as i32, y as i32, size, with_opacity(color, opacity * e.opacity));
    }

    for (i, feature) in section.features.iter().enumerate() {
        let e = entrance(intro, IntroElement::Feature(i));
        d.draw_text(
            feature,
            (x + e.offset_x + i as f32 * 230.0) as i32,
            (h * 0.48) as i32,
            20,
            with_opacity(TEXT, opacity * e.opacity),
        );
    }
}

fn draw_visual(d: &mut RaylibDrawHandle, section: &Section, layout: &Layout, shift: f32, parallax: Parallax, opacity: f32, intro: Option<&IntroTimeline>) {
    let e = entrance(intro, IntroElement::Visual);
    let r = layout.visual();
    let x = r.x + shift + parallax.visual.0 + e.offset_x;
    let y = r.y + parallax.visual.1;
    let alpha = opacity * e.opacity;
    let body = tint_color(section.tint(), 1.0);

    d.draw_rectangle_rounded(
        Rectangle::new(x, y + r.height * 0.35, r.width, r.height * 0.4),
        0.4,
        12,
        with_opacity(body, alpha),
    );
    d.draw_rectangle_rounded(
        Rectangle::new(x + r.width * 0.2, y + r.height * 0.1, r.width * 0.55, r.height * 0.35),
        0.5,
        12,
        with_opacity(body, alpha * 0.8),
    );
    for wheel in [0.22, 0.78] {
        d.draw_circle_v(
            Vector2::new(x + r.width * wheel, y + r.height * 0.78),
            r.height * 0.14,
            with_opacity(Color::new(20, 20, 20, 255), alpha),
        );
    }
}

fn draw_cta(d: &mut RaylibDrawHandle, button: &CtaButton, layout: &Layout, shift: f32, opacity: f32, intro: Option<&IntroTimeline>) {
    let e = entrance(intro, IntroElement::Cta);
    let r = layout.cta();
    let scale = button.scale();
    let (w, h) = (r.width * scale, r.height * scale);
    let rect = Rectangle::new(
        r.x + shift + e.offset_x + (r.width - w) * 0.5,
        r.y + (r.height - h) * 0.5,
        w,
        h,
    );
    let fill = match button.phase() {
        CtaPhase::Success => SUCCESS,
        _ => ACCENT,
    };
    let alpha = opacity * e.opacity;
    d.draw_rectangle_rounded(rect, 0.5, 12, with_opacity(fill, alpha));
    d.draw_text(
        button.label(),
        (rect.x + 24.0) as i32,
        (rect.y + h * 0.5 - 10.0) as i32,
        20,
        with_opacity(TEXT, alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_leaves_exactly_one_active_panel() {
        let mut stage = StageRenderer::new(4, 0.4);
        stage.finalize(0);
        stage.set_outgoing(0);
        stage.set_incoming(2);
        assert_eq!(stage.attached_sections(), vec![0, 2]);

        stage.finalize(2);
        stage.highlight_indicator(2);
        assert_eq!(stage.active_sections(), vec![2]);
        assert_eq!(stage.attached_sections(), vec![2]);
        assert_eq!(stage.highlighted(), 2);
    }

    #[test]
    fn outgoing_panel_slides_left_and_fades() {
        let mut stage = StageRenderer::new(2, 0.4);
        stage.finalize(0);
        stage.update(ENTER_DURATION);
        assert_eq!(stage.panels[0].offset, 0.0);
        assert_eq!(stage.panels[0].opacity, 1.0);

        stage.set_outgoing(0);
        stage.update(0.4);
        assert_eq!(stage.panels[0].offset, -1.0);
        assert_eq!(stage.panels[0].opacity, 0.0);
    }

    #[test]
    fn incoming_panel_settles_at_center() {
        let mut stage = StageRenderer::new(2, 0.4);
        stage.set_incoming(1);
        assert_eq!(stage.panels[1].offset, 1.0);
        stage.finalize(1);
        stage.update(ENTER_DURATION / 2.0);
        assert!(stage.panels[1].offset > 0.0 && stage.panels[1].offset < 1.0);
        stage.update(ENTER_DURATION);
        assert_eq!(stage.panels[1].offset, 0.0);
    }

    #[test]
    fn layout_hit_tests_round_trip() {
        let layout = Layout::new(1280.0, 720.0, 4);
        for i in 0..4 {
            assert_eq!(layout.indicator_at(layout.indicator(i)), Some(i));
            let link = layout.nav_link(i);
            let center = Vector2::new(link.x + link.width / 2.0, link.y + link.height / 2.0);
            assert_eq!(layout.nav_link_at(center), Some(i));
        }
        assert_eq!(layout.indicator_at(Vector2::new(0.0, 0.0)), None);
        assert!(layout.is_on_visual(layout.visual_center()));
        assert!(!layout.is_on_cta(layout.visual_center()));
    }

    #[test]
    fn opacity_scales_alpha() {
        let c = tint_color(Tint::new(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 100));
        assert_eq!(with_opacity(ACCENT, 2.0).a, 255);
    }
}
