//! Side-stand placeholder: one silhouette and two captions.

use vello::kurbo::{BezPath, Point, Rect};
use vello::peniko::Color;

use super::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};
use super::rgb;
use crate::surface::{Surface, TextStyle};
use crate::view::ViewState;

const NIGHT: Color = rgb(0x0a0a30);
const HINT: Color = rgb(0x999999);

/// Silhouette of the left stand; the right stand is its mirror image.
const LEFT_STAND: [(f64, f64); 4] = [(0.0, 120.0), (800.0, 180.0), (800.0, 420.0), (0.0, 480.0)];

pub fn paint<S: Surface>(surface: &mut S, side: ViewState) {
    surface.fill(NIGHT, &Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT));
    surface.fill(Color::BLACK, &silhouette(side));

    let mid = CANVAS_WIDTH / 2.0;
    surface.text(
        Point::new(mid, 80.0),
        &title(side),
        TextStyle::new(36.0, Color::WHITE).centered().mono(),
    );
    surface.text(
        Point::new(mid, 560.0),
        "PRESS [F] TO RESET VIEW",
        TextStyle::new(14.0, HINT).centered().mono(),
    );
}

pub fn title(side: ViewState) -> String {
    format!("{} STAND PERSPECTIVE", side.label())
}

fn silhouette(side: ViewState) -> BezPath {
    let mirrored = side == ViewState::Right;
    let mut path = BezPath::new();
    for (i, &(x, y)) in LEFT_STAND.iter().enumerate() {
        let x = if mirrored { CANVAS_WIDTH - x } else { x };
        if i == 0 {
            path.move_to((x, y));
        } else {
            path.line_to((x, y));
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::Recorder;
    use vello::kurbo::Shape;

    #[test]
    fn left_and_right_silhouettes_mirror() {
        assert_eq!(silhouette(ViewState::Left).bounding_box(), Rect::new(0.0, 120.0, 800.0, 480.0));
        assert_eq!(silhouette(ViewState::Right).bounding_box(), Rect::new(200.0, 120.0, 1000.0, 480.0));
    }

    #[test]
    fn right_view_leans_right() {
        let path = silhouette(ViewState::Right);
        let first = path.elements()[0].end_point().unwrap();
        assert_eq!(first, Point::new(1000.0, 120.0));
    }

    #[test]
    fn captions() {
        let mut rec = Recorder::default();
        paint(&mut rec, ViewState::Left);
        assert_eq!(
            rec.texts(),
            vec!["LEFT STAND PERSPECTIVE", "PRESS [F] TO RESET VIEW"]
        );
        assert_eq!(rec.fills().count(), 2);
    }
}
