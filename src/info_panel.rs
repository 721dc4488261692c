//! "View source" overlay.
//!
//! A full-window panel showing a fixed, illustrative GLUT listing. It has no
//! connection to the live scene. Its only state is visibility and how far
//! the listing is scrolled.

use vello::kurbo::{Point, Rect, RoundedRect};
use vello::peniko::Color;

use crate::stadium::{rgb, rgba};
use crate::surface::{Surface, TextStyle};

const BACKDROP: Color = rgba(0x000000, 0.98);
const TITLE: Color = rgb(0x3b82f6);
const SUBTITLE: Color = rgba(0xffffff, 0.3);
const BUTTON: Color = rgb(0x2563eb);
const LISTING_BORDER: Color = rgba(0xffffff, 0.05);
const LISTING_TEXT: Color = rgb(0x22c55e);
const SCROLL_THUMB: Color = rgba(0xffffff, 0.2);

const PADDING: f64 = 32.0;
const EXIT_W: f64 = 140.0;
const EXIT_H: f64 = 40.0;
const LISTING_TOP: f64 = PADDING + EXIT_H + 24.0;
const LISTING_SIZE: f64 = 11.0;
pub const LISTING_LINE: f64 = LISTING_SIZE * 1.6;

pub const FILE_NAME: &str = "ARENA_PRO_V43.CPP";
pub const SUBTITLE_TEXT: &str = "CENTRAL CIRCLE (ELLIPSE) + PITCH MARKINGS + LATTICE FLOODLIGHTS";

/// The illustrative listing. Decorative only; it is never compiled or run.
pub const LISTING: &str = r#"#include <GL/glut.h>
#include <math.h>

// --- OpenGL 2D Stadium V43: Pitch Markings ---
// Feature: Central Circle rendering with perspective correction.
// Feature: Smooth trigonometry-based circular primitives.

void drawCentralCircle(float cx, float cy, float rx, float ry) {
    glBegin(GL_LINE_LOOP);
    for(int i=0; i<360; i++) {
        float rad = i * 3.14159f / 180.0f;
        glVertex2f(cx + cos(rad)*rx, cy + sin(rad)*ry);
    }
    glEnd();
}

void drawPitch() {
    // Green stripes...
    // Boundary line...

    // Center Line
    glBegin(GL_LINES);
    glVertex2f(0.0f, -0.6f); glVertex2f(0.0f, -0.95f);
    glEnd();

    // Central Circle (rx=0.15, ry=0.07 for perspective)
    glColor4f(1.0f, 1.0f, 1.0f, 0.85f);
    drawCentralCircle(0.0f, -0.775f, 0.15f, 0.07f);

    // Kick-off Spot
    glPointSize(5.0f);
    glBegin(GL_POINTS);
    glVertex2f(0.0f, -0.775f);
    glEnd();
}

void drawLightPole(float x, float topY, float bottomY) {
    glColor3f(0.05f, 0.05f, 0.05f);
    glRectf(x - 0.01f, bottomY, x + 0.01f, topY);
    // ... lattice logic ...
}

void drawFrontStand() {
    // ... draw sky, seats ...
    drawPitch();
    drawLightPole(-0.92f, 0.95f, 0.15f);
    drawLightPole(0.92f, 0.95f, 0.15f);
}

void display() {
    glClear(GL_COLOR_BUFFER_BIT);
    glLoadIdentity();
    drawFrontStand();
    glutSwapBuffers();
}

int main(int argc, char** argv) {
    glutInit(&argc, argv);
    glutInitDisplayMode(GLUT_DOUBLE | GLUT_RGB);
    glutInitWindowSize(1000, 600);
    glutCreateWindow("Elite Stadium V43 - Pitch Focus");
    glutDisplayFunc(display);
    glEnable(GL_BLEND);
    glBlendFunc(GL_SRC_ALPHA, GL_ONE_MINUS_SRC_ALPHA);
    glutMainLoop();
    return 0;
}"#;

/// Visibility and scroll position of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoPanel {
    shown: bool,
    /// Index of the first listing line in view.
    scroll: usize,
}

impl InfoPanel {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn toggle(&mut self) {
        if self.shown {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn show(&mut self) {
        self.shown = true;
    }

    /// Hide the overlay. Reopening starts at the top of the listing.
    pub fn hide(&mut self) {
        self.shown = false;
        self.scroll = 0;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Move the listing by `lines` (positive scrolls down) in a window
    /// `height` logical pixels tall. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, lines: isize, height: f64) -> bool {
        if !self.shown {
            return false;
        }
        let max = max_scroll(height) as isize;
        let next = (self.scroll as isize + lines).clamp(0, max) as usize;
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    /// Label for the header button that opens or closes the overlay.
    pub fn toggle_label(&self) -> &'static str {
        if self.shown { "CLOSE SOURCE" } else { "VIEW C++ CODE" }
    }
}

/// The overlay's close button for a window of `width` logical pixels.
pub fn exit_button(width: f64) -> Rect {
    Rect::new(width - PADDING - EXIT_W, PADDING, width - PADDING, PADDING + EXIT_H)
}

fn listing_box(width: f64, height: f64) -> Rect {
    Rect::new(PADDING, LISTING_TOP, width - PADDING, (height - PADDING).max(LISTING_TOP))
}

/// Baseline range available to listing text inside a box.
fn text_band(frame: Rect) -> (f64, f64) {
    (frame.y0 + 24.0 + LISTING_SIZE, frame.y1 - 16.0)
}

/// How many listing lines fit at once in a window `height` pixels tall.
fn visible_lines(height: f64) -> usize {
    let (first, last) = text_band(listing_box(0.0, height));
    if last < first {
        return 0;
    }
    ((last - first) / LISTING_LINE).floor() as usize + 1
}

fn max_scroll(height: f64) -> usize {
    LISTING.lines().count().saturating_sub(visible_lines(height))
}

/// Paint the overlay over the whole window, listing scrolled to `panel`'s
/// offset and clipped to its box. Returns how many listing lines were drawn.
pub fn render_overlay<S: Surface>(
    surface: &mut S,
    width: f64,
    height: f64,
    panel: &InfoPanel,
) -> usize {
    surface.fill(BACKDROP, &Rect::new(0.0, 0.0, width, height));

    surface.text(
        Point::new(PADDING, PADDING + 24.0),
        FILE_NAME,
        TextStyle::new(24.0, TITLE).mono(),
    );
    surface.text(
        Point::new(PADDING, PADDING + 44.0),
        SUBTITLE_TEXT,
        TextStyle::new(10.0, SUBTITLE).mono(),
    );

    let exit = exit_button(width);
    surface.fill(BUTTON, &RoundedRect::from_rect(exit, 8.0));
    surface.text(
        Point::new(exit.center().x, exit.y0 + 26.0),
        "EXIT SOURCE",
        TextStyle::new(14.0, Color::WHITE).centered(),
    );

    let frame = listing_box(width, height);
    let frame_shape = RoundedRect::from_rect(frame, 12.0);
    surface.fill(Color::BLACK, &frame_shape);
    surface.stroke(1.0, LISTING_BORDER, &frame_shape);

    let total = LISTING.lines().count();
    let visible = visible_lines(height);
    let start = panel.scroll.min(max_scroll(height));
    let (first_baseline, _) = text_band(frame);

    surface.push_clip(&frame_shape);
    let style = TextStyle::new(LISTING_SIZE, LISTING_TEXT).mono();
    let mut drawn = 0;
    for (i, line) in LISTING.lines().skip(start).take(visible).enumerate() {
        let baseline = first_baseline + i as f64 * LISTING_LINE;
        surface.text(Point::new(frame.x0 + 24.0, baseline), line, style);
        drawn += 1;
    }
    surface.pop_clip();

    // Scroll indicator.
    if total > visible && visible > 0 {
        let track = Rect::new(frame.x1 - 10.0, frame.y0 + 12.0, frame.x1 - 6.0, frame.y1 - 12.0);
        let frac = start as f64 / max_scroll(height).max(1) as f64;
        let thumb_h = (track.height() * visible as f64 / total as f64).max(20.0);
        let thumb_y = track.y0 + frac * (track.height() - thumb_h).max(0.0);
        surface.fill(
            SCROLL_THUMB,
            &Rect::new(track.x0, thumb_y, track.x1, thumb_y + thumb_h),
        );
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, Recorder};

    fn shown() -> InfoPanel {
        let mut panel = InfoPanel::default();
        panel.show();
        panel
    }

    #[test]
    fn starts_hidden_by_default() {
        assert!(!InfoPanel::default().is_shown());
        let mut panel = InfoPanel::default();
        panel.show();
        assert!(panel.is_shown());
    }

    #[test]
    fn double_toggle_restores_visibility() {
        for start in [false, true] {
            let mut panel = InfoPanel {
                shown: start,
                ..Default::default()
            };
            panel.toggle();
            assert_ne!(panel.is_shown(), start);
            panel.toggle();
            assert_eq!(panel.is_shown(), start);
        }
    }

    #[test]
    fn toggle_label_follows_visibility() {
        let mut panel = InfoPanel::default();
        assert_eq!(panel.toggle_label(), "VIEW C++ CODE");
        panel.show();
        assert_eq!(panel.toggle_label(), "CLOSE SOURCE");
        panel.hide();
        assert_eq!(panel.toggle_label(), "VIEW C++ CODE");
    }

    #[test]
    fn tall_window_shows_whole_listing() {
        let mut rec = Recorder::default();
        let drawn = render_overlay(&mut rec, 1400.0, 2000.0, &shown());
        assert_eq!(drawn, LISTING.lines().count());
        assert!(rec.texts().contains(&FILE_NAME));
        assert!(rec.texts().contains(&"EXIT SOURCE"));
    }

    #[test]
    fn short_window_shows_a_page() {
        let mut rec = Recorder::default();
        let drawn = render_overlay(&mut rec, 800.0, 300.0, &shown());
        assert!(drawn > 0);
        assert!(drawn < LISTING.lines().count());
        assert_eq!(drawn, visible_lines(300.0));
    }

    #[test]
    fn degenerate_window_draws_no_listing() {
        let mut rec = Recorder::default();
        assert_eq!(render_overlay(&mut rec, 200.0, 50.0, &shown()), 0);
    }

    #[test]
    fn scrolling_reaches_the_last_line() {
        let last = "    return 0;";
        let mut panel = shown();

        let mut rec = Recorder::default();
        render_overlay(&mut rec, 1000.0, 656.0, &panel);
        assert!(!rec.texts().contains(&last));

        while panel.scroll_by(3, 656.0) {}
        assert_eq!(panel.scroll_offset(), max_scroll(656.0));

        let mut rec = Recorder::default();
        let drawn = render_overlay(&mut rec, 1000.0, 656.0, &panel);
        assert_eq!(drawn, visible_lines(656.0));
        assert!(rec.texts().contains(&last));
        assert!(!rec.texts().contains(&"#include <GL/glut.h>"));
    }

    #[test]
    fn scroll_is_clamped() {
        let mut panel = shown();
        assert!(!panel.scroll_by(-5, 656.0));
        assert_eq!(panel.scroll_offset(), 0);

        assert!(panel.scroll_by(10_000, 656.0));
        assert_eq!(panel.scroll_offset(), max_scroll(656.0));
        assert!(!panel.scroll_by(1, 656.0));

        // Everything fits: nothing to scroll.
        let mut tall = shown();
        assert!(!tall.scroll_by(4, 2000.0));
    }

    #[test]
    fn hidden_panel_ignores_scroll_and_reopens_at_top() {
        let mut panel = InfoPanel::default();
        assert!(!panel.scroll_by(4, 656.0));

        panel.show();
        panel.scroll_by(4, 656.0);
        panel.toggle();
        panel.toggle();
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn listing_is_clipped_to_its_box() {
        let mut rec = Recorder::default();
        render_overlay(&mut rec, 400.0, 656.0, &shown());
        let clip = rec
            .ops
            .iter()
            .find_map(|op| match op {
                Op::PushClip { bounds } => Some(*bounds),
                _ => None,
            })
            .unwrap();
        assert_eq!(clip, listing_box(400.0, 656.0));

        let push = rec.ops.iter().position(|op| matches!(op, Op::PushClip { .. })).unwrap();
        let pop = rec.ops.iter().position(|op| matches!(op, Op::PopClip)).unwrap();
        let listing_ops = &rec.ops[push + 1..pop];
        assert!(!listing_ops.is_empty());
        assert!(
            listing_ops
                .iter()
                .all(|op| matches!(op, Op::Text { size, .. } if *size == LISTING_SIZE))
        );
    }

    #[test]
    fn exit_button_is_top_right() {
        let exit = exit_button(1000.0);
        assert_eq!(exit.x1, 1000.0 - PADDING);
        assert_eq!(exit.y0, PADDING);
    }
}
