//! Light sources: radial glows and the lattice floodlight masts.

use vello::kurbo::{BezPath, Circle, Point, Rect};
use vello::peniko::{Color, Gradient};

use super::{rgb, rgba};
use crate::surface::Surface;

const SOURCE_RADIUS: f64 = 11.0;
const SOURCE_OUTLINE: Color = rgb(0x666666);

const MAST_COLOR: Color = rgb(0x111111);
const BRACE_COLOR: Color = rgb(0x222222);
const HEAD_COLOR: Color = rgb(0x050505);
const MAST_WIDTH: f64 = 12.0;
const LATTICE_SEGMENTS: usize = 10;
const HEAD_WIDTH: f64 = 50.0;
const HEAD_HEIGHT: f64 = 25.0;
const AMBIENT_GLOW: f64 = 180.0;
const BULB_GLOW: f64 = 40.0;

/// A radial glow centered on `center`, optionally with a visible lamp disk.
pub fn point_light<S: Surface>(surface: &mut S, center: Point, radius: f64, with_source: bool) {
    let glow = Gradient::new_radial(center, radius as f32).with_stops([
        (0.0, Color::WHITE),
        (0.1, rgba(0xffffd2, 0.8)),
        (0.4, rgba(0x6464ff, 0.1)),
        (1.0, Color::TRANSPARENT),
    ]);
    surface.fill(glow, &Circle::new(center, radius));

    if with_source {
        let lamp = Circle::new(center, SOURCE_RADIUS);
        surface.fill(Color::WHITE, &lamp);
        surface.stroke(1.5, SOURCE_OUTLINE, &lamp);
    }
}

/// A cross-braced mast from `bottom_y` up to `top_y` with a six-bulb head.
pub fn floodlight_pole<S: Surface>(surface: &mut S, x: f64, bottom_y: f64, top_y: f64) {
    let half = MAST_WIDTH / 2.0;
    surface.fill(MAST_COLOR, &Rect::new(x - half, top_y, x + half, bottom_y));

    let seg_h = (bottom_y - top_y) / LATTICE_SEGMENTS as f64;
    for i in 0..LATTICE_SEGMENTS {
        let y = top_y + i as f64 * seg_h;
        let mut brace = BezPath::new();
        brace.move_to((x - half, y));
        brace.line_to((x + half, y + seg_h));
        brace.move_to((x + half, y));
        brace.line_to((x - half, y + seg_h));
        surface.stroke(1.5, BRACE_COLOR, &brace);
    }

    let head = Rect::new(
        x - HEAD_WIDTH / 2.0,
        top_y - HEAD_HEIGHT,
        x + HEAD_WIDTH / 2.0,
        top_y,
    );
    surface.fill(HEAD_COLOR, &head);

    let head_center = Point::new(x, top_y - HEAD_HEIGHT / 2.0);
    let ambient = Gradient::new_radial(head_center, AMBIENT_GLOW as f32).with_stops([
        (0.0, rgba(0xffffff, 0.4)),
        (1.0, Color::TRANSPARENT),
    ]);
    surface.fill(ambient, &Circle::new(head_center, AMBIENT_GLOW));

    for col in 0..3 {
        for row in 0..2 {
            let bulb = Point::new(
                head.x0 + 10.0 + col as f64 * 15.0,
                head.y0 + 7.0 + row as f64 * 12.0,
            );
            point_light(surface, bulb, BULB_GLOW, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Op, Recorder};

    #[test]
    fn point_light_with_and_without_source() {
        let mut bare = Recorder::default();
        point_light(&mut bare, Point::new(10.0, 10.0), 60.0, false);
        assert_eq!(bare.ops.len(), 1);

        let mut lit = Recorder::default();
        point_light(&mut lit, Point::new(10.0, 10.0), 60.0, true);
        assert_eq!(lit.fills().count(), 2);
        assert_eq!(lit.stroke_count(), 1);
    }

    #[test]
    fn pole_has_lattice_and_six_bulbs() {
        let mut rec = Recorder::default();
        floodlight_pole(&mut rec, 40.0, 280.0, 40.0);
        assert_eq!(rec.stroke_count(), LATTICE_SEGMENTS);

        // Bulb glows are the radius-40 circles.
        let bulbs = rec
            .fills()
            .filter(|(bounds, _, gradient)| *gradient && (bounds.width() - 80.0).abs() < 1e-9)
            .count();
        assert_eq!(bulbs, 6);

        let Op::Fill { bounds: mast, .. } = &rec.ops[0] else {
            panic!("mast should be drawn first");
        };
        assert_eq!(*mast, Rect::new(34.0, 40.0, 46.0, 280.0));
    }
}
