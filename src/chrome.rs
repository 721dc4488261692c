//! Window chrome around the canvas: header bar with view and source buttons,
//! letterboxing, footer caption, and click hit-testing.
//!
//! All sizes here are logical pixels; the caller scales by the window's
//! scale factor.

use vello::kurbo::{Affine, Circle, Line, Point, Rect, RoundedRect};
use vello::peniko::Color;

use crate::info_panel::{self, InfoPanel};
use crate::input::Command;
use crate::stadium::{CANVAS_HEIGHT, CANVAS_WIDTH, rgb, rgba};
use crate::surface::{Surface, TextStyle};
use crate::view::ViewState;

const HEADER_BG: Color = rgba(0x000000, 0.8);
const HEADER_RULE: Color = rgba(0xffffff, 0.1);
const STATUS_DOT: Color = rgb(0xef4444);
const LETTERBOX: Color = Color::BLACK;
const CANVAS_BORDER: Color = rgba(0xffffff, 0.1);
const BUTTON_ON: Color = rgb(0x2563eb);
const BUTTON_ON_EDGE: Color = rgb(0x60a5fa);
const BUTTON_OFF: Color = rgba(0xffffff, 0.08);
const BUTTON_OFF_EDGE: Color = rgba(0xffffff, 0.2);
const FOOTER: Color = rgba(0xffffff, 0.3);

pub const HEADER_HEIGHT: f64 = 56.0;
const SIDE_MARGIN: f64 = 24.0;
const BUTTON_H: f64 = 28.0;
const VIEW_BUTTON_W: f64 = 84.0;
const TOGGLE_BUTTON_W: f64 = 150.0;
const BUTTON_GAP: f64 = 8.0;

const FOOTER_TEXT: &str = "DEV-C++ COMPATIBLE GLUT TEMPLATE | STABLE_FRONT_RENDER";

/// Where the 1000x600 canvas lands inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    pub scale: f64,
    pub rect: Rect,
}

impl CanvasFit {
    /// Uniformly scale the canvas into the area below the header and center it.
    pub fn new(width: f64, height: f64) -> Self {
        let avail_h = (height - HEADER_HEIGHT).max(0.0);
        let scale = (width / CANVAS_WIDTH).min(avail_h / CANVAS_HEIGHT).max(0.0);
        let w = CANVAS_WIDTH * scale;
        let h = CANVAS_HEIGHT * scale;
        let x = (width - w) / 2.0;
        let y = HEADER_HEIGHT + (avail_h - h) / 2.0;
        Self {
            scale,
            rect: Rect::new(x, y, x + w, y + h),
        }
    }

    /// Canvas coordinates to window logical coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate((self.rect.x0, self.rect.y0)) * Affine::scale(self.scale)
    }

    pub fn is_empty(&self) -> bool {
        self.rect.width() < 1.0 || self.rect.height() < 1.0
    }
}

/// A clickable header button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub command: Command,
}

/// Header buttons for a window `width` logical pixels wide, left to right:
/// FRONT, LEFT, RIGHT, then the source toggle.
pub fn header_buttons(width: f64) -> [Button; 4] {
    let y0 = (HEADER_HEIGHT - BUTTON_H) / 2.0;
    let toggle_x = width - SIDE_MARGIN - TOGGLE_BUTTON_W;
    let view_x = |slot: usize| {
        toggle_x - (3 - slot) as f64 * (VIEW_BUTTON_W + BUTTON_GAP) - BUTTON_GAP * 2.0
    };
    let view_button = |slot: usize| {
        let x = view_x(slot);
        Button {
            rect: Rect::new(x, y0, x + VIEW_BUTTON_W, y0 + BUTTON_H),
            command: Command::Select(ViewState::ALL[slot]),
        }
    };
    [
        view_button(0),
        view_button(1),
        view_button(2),
        Button {
            rect: Rect::new(toggle_x, y0, toggle_x + TOGGLE_BUTTON_W, y0 + BUTTON_H),
            command: Command::ToggleInfo,
        },
    ]
}

/// Which command, if any, a click at `pos` (logical pixels) triggers.
/// While the overlay is up it covers the header, so only its exit button answers.
pub fn hit_test(width: f64, pos: Point, panel: &InfoPanel) -> Option<Command> {
    if panel.is_shown() {
        return info_panel::exit_button(width)
            .contains(pos)
            .then_some(Command::HideInfo);
    }
    header_buttons(width)
        .into_iter()
        .find(|button| button.rect.contains(pos))
        .map(|button| button.command)
}

/// Paint over everything outside the canvas so glows stop at its edge.
pub fn render_letterbox<S: Surface>(surface: &mut S, width: f64, height: f64, fit: &CanvasFit) {
    let c = fit.rect;
    surface.fill(LETTERBOX, &Rect::new(0.0, 0.0, width, c.y0));
    surface.fill(LETTERBOX, &Rect::new(0.0, c.y1, width, height));
    surface.fill(LETTERBOX, &Rect::new(0.0, c.y0, c.x0, c.y1));
    surface.fill(LETTERBOX, &Rect::new(c.x1, c.y0, width, c.y1));
    if !fit.is_empty() {
        surface.stroke(1.0, CANVAS_BORDER, &c);
    }
}

/// Header bar and footer caption.
pub fn render_chrome<S: Surface>(
    surface: &mut S,
    width: f64,
    height: f64,
    view: ViewState,
    panel: &InfoPanel,
) {
    surface.fill(HEADER_BG, &Rect::new(0.0, 0.0, width, HEADER_HEIGHT));
    surface.stroke(
        1.0,
        HEADER_RULE,
        &Line::new((0.0, HEADER_HEIGHT), (width, HEADER_HEIGHT)),
    );
    surface.fill(STATUS_DOT, &Circle::new((SIDE_MARGIN + 6.0, HEADER_HEIGHT / 2.0), 6.0));
    surface.text(
        Point::new(SIDE_MARGIN + 24.0, HEADER_HEIGHT / 2.0 + 5.0),
        &header_title(view),
        TextStyle::new(14.0, Color::WHITE).mono(),
    );

    for button in header_buttons(width) {
        let (label, active) = match button.command {
            Command::Select(v) => (v.label(), v == view),
            _ => (panel.toggle_label(), true),
        };
        let shape = RoundedRect::from_rect(button.rect, 4.0);
        let (fill, edge) = if active {
            (BUTTON_ON, BUTTON_ON_EDGE)
        } else {
            (BUTTON_OFF, BUTTON_OFF_EDGE)
        };
        surface.fill(fill, &shape);
        surface.stroke(1.0, edge, &shape);
        surface.text(
            Point::new(button.rect.center().x, button.rect.center().y + 4.5),
            label,
            TextStyle::new(12.0, Color::WHITE).centered(),
        );
    }

    surface.text(
        Point::new(width - SIDE_MARGIN, height - 16.0),
        FOOTER_TEXT,
        TextStyle::new(10.0, FOOTER).right().mono(),
    );
}

pub fn header_title(view: ViewState) -> String {
    format!("OPENGL_STADIUM_SIMULATOR.EXE | VIEW: {}", view.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::Recorder;

    #[test]
    fn fit_keeps_aspect_and_centers() {
        let fit = CanvasFit::new(1920.0, 1080.0);
        let r = fit.rect;
        assert!((r.width() / r.height() - CANVAS_WIDTH / CANVAS_HEIGHT).abs() < 1e-9);
        assert!((r.center().x - 960.0).abs() < 1e-9);
        assert!(r.y0 >= HEADER_HEIGHT);
        assert!(r.y1 <= 1080.0 + 1e-9);
    }

    #[test]
    fn fit_is_width_limited_on_tall_windows() {
        let fit = CanvasFit::new(500.0, 2000.0);
        assert!((fit.scale - 0.5).abs() < 1e-12);
        assert_eq!(fit.rect.x0, 0.0);
    }

    #[test]
    fn fit_transform_maps_canvas_corners() {
        let fit = CanvasFit::new(1000.0, 600.0 + HEADER_HEIGHT);
        let t = fit.transform();
        assert_eq!(t * Point::new(0.0, 0.0), Point::new(0.0, HEADER_HEIGHT));
        assert_eq!(
            t * Point::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            Point::new(1000.0, 600.0 + HEADER_HEIGHT)
        );
    }

    #[test]
    fn tiny_window_fits_to_nothing() {
        assert!(CanvasFit::new(800.0, 40.0).is_empty());
    }

    #[test]
    fn button_centers_hit_their_commands() {
        let panel = InfoPanel::default();
        for button in header_buttons(1280.0) {
            assert_eq!(
                hit_test(1280.0, button.rect.center(), &panel),
                Some(button.command)
            );
        }
        assert_eq!(hit_test(1280.0, Point::new(5.0, 300.0), &panel), None);
        assert_eq!(hit_test(1280.0, Point::new(40.0, 28.0), &panel), None);
    }

    #[test]
    fn view_buttons_run_front_left_right() {
        let commands: Vec<_> = header_buttons(1280.0).iter().map(|b| b.command).collect();
        assert_eq!(
            commands,
            vec![
                Command::Select(ViewState::Front),
                Command::Select(ViewState::Left),
                Command::Select(ViewState::Right),
                Command::ToggleInfo,
            ]
        );
    }

    #[test]
    fn buttons_do_not_overlap() {
        let buttons = header_buttons(1280.0);
        for pair in buttons.windows(2) {
            assert!(pair[0].rect.x1 < pair[1].rect.x0);
        }
    }

    #[test]
    fn overlay_swallows_header_clicks() {
        let mut panel = InfoPanel::default();
        panel.show();
        let exit = info_panel::exit_button(1280.0);
        assert_eq!(hit_test(1280.0, exit.center(), &panel), Some(Command::HideInfo));
        let front = header_buttons(1280.0)[0];
        assert_eq!(hit_test(1280.0, front.rect.center(), &panel), None);
    }

    #[test]
    fn chrome_shows_view_and_toggle_labels() {
        let mut rec = Recorder::default();
        let mut panel = InfoPanel::default();
        render_chrome(&mut rec, 1280.0, 800.0, ViewState::Left, &panel);
        let texts = rec.texts();
        assert!(texts.contains(&"OPENGL_STADIUM_SIMULATOR.EXE | VIEW: LEFT"));
        assert!(texts.contains(&"VIEW C++ CODE"));
        assert!(texts.contains(&FOOTER_TEXT));

        panel.toggle();
        let mut rec = Recorder::default();
        render_chrome(&mut rec, 1280.0, 800.0, ViewState::Left, &panel);
        assert!(rec.texts().contains(&"CLOSE SOURCE"));
    }

    #[test]
    fn letterbox_covers_outside_of_canvas() {
        let fit = CanvasFit::new(1600.0, 900.0);
        let mut rec = Recorder::default();
        render_letterbox(&mut rec, 1600.0, 900.0, &fit);
        let covered: f64 = rec.fills().map(|(r, _, _)| r.area()).sum();
        let expected = 1600.0 * 900.0 - fit.rect.area();
        assert!((covered - expected).abs() < 1e-6);
    }
}
