use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, info};

use crate::config::{ConfigError, ShowcaseConfig};
use crate::controller::SectionController;
use crate::cta::CtaButton;
use crate::effects::EffectLayer;
use crate::input::{HoverEdge, HoverTracker, InputEvent, InputRouter, Key};
use crate::intro::IntroTimeline;
use crate::parallax::Parallax;
use crate::particles::ParticleField;
use crate::render::{Frame, Layout, StageRenderer};
use crate::section::SHOWCASE;

/// Follows the first touch point so start/end pairs can be reported.
#[derive(Debug, Default)]
struct TouchState {
    touching: bool,
    last: (f32, f32),
}

impl TouchState {
    fn poll(&mut self, rl: &RaylibHandle, events: &mut Vec<InputEvent>) {
        let touching = rl.get_touch_point_count() > 0;
        if touching {
            let position = (rl.get_touch_x() as f32, rl.get_touch_y() as f32);
            if !self.touching {
                events.push(InputEvent::TouchStart {
                    x: position.0,
                    y: position.1,
                });
            }
            self.last = position;
        } else if self.touching {
            events.push(InputEvent::TouchEnd {
                x: self.last.0,
                y: self.last.1,
            });
        }
        self.touching = touching;
    }
}

fn poll_keys(rl: &RaylibHandle, events: &mut Vec<InputEvent>) {
    let keys = [
        (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
        (KeyboardKey::KEY_DOWN, Key::ArrowDown),
        (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
        (KeyboardKey::KEY_UP, Key::ArrowUp),
    ];
    for (raylib_key, key) in keys {
        if rl.is_key_pressed(raylib_key) {
            events.push(InputEvent::Key(key));
        }
    }
}

/// Opens the window and runs the showcase until it is closed.
pub fn run(config: &ShowcaseConfig) -> Result<(), ConfigError> {
    config.validate()?;

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Car Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let sections = SHOWCASE.to_vec();
    let mut rng = rand::rng();

    let stage = StageRenderer::new(sections.len(), config.timings.exit.as_secs_f32());
    let particles = ParticleField::new(config.particle_count, &mut rng);
    let mut controller = SectionController::new(sections, config.timings, stage, particles)?;
    controller.start();

    let mut router = InputRouter::new(config.swipe_threshold);
    let mut ctas: Vec<CtaButton> = controller
        .sections()
        .iter()
        .map(|s| CtaButton::new(s.cta_label))
        .collect();
    let mut effects = EffectLayer::new();
    let mut intro = IntroTimeline::new(controller.sections()[0].features.len());
    let mut container_hover = HoverTracker::default();
    let mut visual_hover = HoverTracker::default();
    let mut touch = TouchState::default();

    info!(width = config.width, height = config.height, "window open");

    while !rl.window_should_close() {
        let dt = rl.get_frame_time().max(0.0);
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            controller.sections().len(),
        );
        let mouse = rl.get_mouse_position();

        // --- Input ---
        let mut events = Vec::new();
        poll_keys(&rl, &mut events);

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            // raylib reports scrolling up as positive
            events.push(InputEvent::Wheel { delta_y: -wheel });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(index) = layout.indicator_at(mouse) {
                events.push(InputEvent::IndicatorClick(index));
            } else if let Some(index) = layout.nav_link_at(mouse) {
                events.push(InputEvent::NavLinkClick(index));
            } else if layout.is_on_cta(mouse) && !controller.is_transitioning() {
                let index = controller.current_index();
                if ctas[index].click() {
                    let r = layout.cta();
                    effects.success_ring(Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5));
                }
            }
        }

        touch.poll(&rl, &mut events);

        match container_hover.update(rl.is_cursor_on_screen()) {
            Some(HoverEdge::Enter) => events.push(InputEvent::HoverEnter),
            Some(HoverEdge::Leave) => events.push(InputEvent::HoverLeave),
            None => {}
        }

        if visual_hover.update(layout.is_on_visual(mouse)) == Some(HoverEdge::Enter) {
            effects.burst(layout.visual_center(), &mut rng);
        }

        for event in events {
            if let Some(command) = router.translate(event) {
                let outcome = controller.apply(command);
                debug!(?event, ?command, ?outcome, "input");
            }
        }

        // --- Update ---
        controller.update(Duration::from_secs_f32(dt));
        controller.renderer_mut().update(dt);
        controller.particles_mut().update(dt);
        for button in ctas.iter_mut() {
            button.update(Duration::from_secs_f32(dt));
        }
        effects.update(dt);
        intro.update(dt);

        // --- Draw ---
        let frame = Frame {
            sections: controller.sections(),
            layout,
            parallax: Parallax::from_pointer(
                mouse.x / layout.width.max(1.0),
                mouse.y / layout.height.max(1.0),
            ),
            ctas: &ctas,
            intro: (!intro.is_finished()).then_some(&intro),
        };

        let mut d = rl.begin_drawing(&thread);
        controller.renderer().draw(&mut d, &frame);
        controller.particles().draw(&mut d, layout.width, layout.height);
        controller.renderer().draw_navigation(&mut d, &frame);
        effects.draw(&mut d);
    }

    info!("window closed");
    Ok(())
}
