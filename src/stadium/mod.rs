//! Stadium illustration on the fixed 1000x600 logical canvas.

mod front;
pub mod geometry;
mod lights;
pub mod side;

use vello::kurbo::Rect;
use vello::peniko::Color;

use crate::surface::Surface;
use crate::view::ViewState;

pub use geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};

const CLEAR: Color = rgb(0x010103);

/// Drawing features resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCaps {
    /// Draw seats as rounded rectangles. When off, seats are plain rectangles.
    pub rounded_rects: bool,
}

impl Default for RenderCaps {
    fn default() -> Self {
        Self { rounded_rects: true }
    }
}

/// Paint `view` onto the canvas. A missing surface skips the frame.
pub fn render<S: Surface>(surface: Option<&mut S>, view: ViewState, caps: RenderCaps) {
    let Some(surface) = surface else {
        return;
    };

    surface.fill(CLEAR, &Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT));
    match view {
        ViewState::Front => front::paint(surface, caps),
        ViewState::Left | ViewState::Right => side::paint(surface, view),
    }
}

/// Opaque color from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color {
    rgba(hex, 1.0)
}

/// Color from a `0xRRGGBB` literal with the given alpha.
pub const fn rgba(hex: u32, alpha: f32) -> Color {
    Color::new([
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::Recorder;

    #[test]
    fn every_view_paints_more_than_the_background() {
        for view in ViewState::ALL {
            let mut rec = Recorder::default();
            render(Some(&mut rec), view, RenderCaps::default());
            assert!(rec.ops.len() > 1, "{view} drew only {} ops", rec.ops.len());
        }
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        render(None::<&mut Recorder>, ViewState::Front, RenderCaps::default());
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        render(Some(&mut first), ViewState::Front, RenderCaps::default());
        render(Some(&mut second), ViewState::Front, RenderCaps::default());
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn front_view_has_no_perspective_caption() {
        let mut rec = Recorder::default();
        render(Some(&mut rec), ViewState::Front, RenderCaps::default());
        assert!(rec.texts().is_empty());
    }

    #[test]
    fn hex_colors() {
        assert_eq!(rgb(0xff0000).components, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgba(0x000000, 0.5).components, [0.0, 0.0, 0.0, 0.5]);
    }
}
