//! The detailed front-stand scene.
//!
//! Painted back to front: sky, stand, pillars and roof, floodlights, roof
//! lights, team shelter, track, pitch, then the pitch markings on top.

use vello::kurbo::{BezPath, Circle, Ellipse, Line, Rect};
use vello::peniko::{Color, Gradient};

use super::geometry::{Cell, SceneGeometry};
use super::{RenderCaps, lights, rgb, rgba};
use crate::surface::Surface;

const SKY_TOP: Color = rgb(0x0a0a2a);
const SKY_MID: Color = rgb(0x15155a);
const SKY_HORIZON: Color = rgb(0x20208a);

const STAIR_TREAD: Color = rgb(0x222222);
const STAIR_NOSING: Color = rgba(0xe6e6f0, 0.25);
const SEAT_SHINE: Color = rgb(0x3b82f6);
const SEAT_EVEN: Color = rgb(0x1e40af);
const SEAT_ODD: Color = rgb(0x1d4ed8);
const SEAT_HIGHLIGHT: Color = rgba(0xffffff, 0.1);
const SEAT_INSET: f64 = 2.5;

const PILLAR: Color = rgb(0x111111);
const ROOF: Color = rgb(0x050505);
const ROOF_LIGHT_GLOW: f64 = 60.0;

const FRAME_EDGE: Color = rgb(0x9ca3af);
const FRAME_SHINE: Color = rgb(0xe5e7eb);
const SHELTER_INTERIOR: Color = rgb(0x0f172a);
const BENCH: Color = rgb(0x334155);

const TRACK: Color = rgb(0x8b2a2a);
const LANE_LINE: Color = rgba(0xffffff, 0.35);
const GRASS_DARK: Color = rgb(0x1b4317);
const GRASS_LIGHT: Color = rgb(0x23521e);
const MARKING: Color = rgba(0xffffff, 0.85);
const MARKING_WIDTH: f64 = 2.5;

pub fn paint<S: Surface>(surface: &mut S, caps: RenderCaps) {
    let g = SceneGeometry::new();

    paint_sky(surface, &g);
    paint_stand(surface, &g, caps);

    for pillar in g.pillars() {
        surface.fill(PILLAR, &pillar);
    }
    surface.fill(ROOF, &g.roof());

    for x in g.floodlight_xs() {
        lights::floodlight_pole(surface, x, g.track_y, g.floodlight_top());
    }
    for center in g.roof_lights() {
        lights::point_light(surface, center, ROOF_LIGHT_GLOW, true);
    }

    paint_shelter(surface, &g);
    paint_track(surface, &g);
    paint_pitch(surface, &g);
}

fn paint_sky<S: Surface>(surface: &mut S, g: &SceneGeometry) {
    let sky = g.sky();
    let gradient = Gradient::new_linear((0.0, sky.y0), (0.0, sky.y1)).with_stops([
        (0.0, SKY_TOP),
        (0.5, SKY_MID),
        (1.0, SKY_HORIZON),
    ]);
    surface.fill(gradient, &sky);
}

fn paint_stand<S: Surface>(surface: &mut S, g: &SceneGeometry, caps: RenderCaps) {
    surface.fill(Color::BLACK, &g.stand());

    for row in 0..g.rows {
        for col in 0..g.cols {
            let cell = g.cell(row, col);
            match g.classify(row, col) {
                // The shelter covers any stair inside its area.
                Cell::Stair if g.in_shelter_area(row, col) => {}
                Cell::Stair => paint_stair(surface, cell),
                Cell::ShelterGap => {}
                Cell::Seat => paint_seat(surface, cell, row, caps),
            }
        }
    }
}

fn paint_stair<S: Surface>(surface: &mut S, cell: Rect) {
    surface.fill(STAIR_TREAD, &cell);
    let riser_top = cell.y0 + cell.height() * 0.8;
    surface.fill(Color::BLACK, &Rect::new(cell.x0, riser_top, cell.x1, cell.y1));
    surface.fill(STAIR_NOSING, &Rect::new(cell.x0, cell.y0, cell.x1, cell.y0 + 1.2));
}

fn paint_seat<S: Surface>(surface: &mut S, cell: Rect, row: usize, caps: RenderCaps) {
    let seat_h = cell.height() * 0.08;
    let top = cell.y0 + (cell.height() - seat_h) / 2.0;
    let seat = Rect::new(cell.x0 + SEAT_INSET, top, cell.x1 - SEAT_INSET, top + seat_h);

    let base = if row % 2 == 0 { SEAT_EVEN } else { SEAT_ODD };
    let shade = Gradient::new_linear((seat.x0, seat.y0), (seat.x0, seat.y1)).with_stops([
        (0.0, SEAT_SHINE),
        (0.5, base),
        (1.0, Color::BLACK),
    ]);
    if caps.rounded_rects {
        surface.fill(shade, &seat.to_rounded_rect(0.5));
    } else {
        surface.fill(shade, &seat);
    }

    let highlight = Ellipse::new(
        (seat.x0 + seat.width() * 0.3, seat.y0 + seat.height() * 0.3),
        (seat.width() * 0.1, seat.height() * 0.1),
        0.0,
    );
    surface.fill(SEAT_HIGHLIGHT, &highlight);
}

fn paint_shelter<S: Surface>(surface: &mut S, g: &SceneGeometry) {
    let frame = g.shelter();

    let metal = Gradient::new_linear((frame.x0, frame.y0), (frame.x1, frame.y0)).with_stops([
        (0.0, FRAME_EDGE),
        (0.5, FRAME_SHINE),
        (1.0, FRAME_EDGE),
    ]);
    surface.fill(metal, &frame);

    let canopy = Gradient::new_linear((frame.x0, frame.y0), (frame.x0, frame.y1)).with_stops([
        (0.0, rgba(0x28282d, 0.85)),
        (0.5, rgba(0x3c3c46, 0.6)),
        (1.0, rgba(0x1e1e23, 0.9)),
    ]);
    let mut roof = BezPath::new();
    roof.move_to((frame.x0 - 5.0, frame.y1));
    roof.line_to((frame.x1 + 5.0, frame.y1));
    roof.quad_to((frame.center().x, frame.y0 - 25.0), (frame.x0 - 5.0, frame.y1));
    roof.close_path();
    surface.fill(canopy, &roof);

    let interior = Rect::new(frame.x0 + 4.0, frame.y0 + 18.0, frame.x1 - 4.0, frame.y1 - 4.0);
    surface.fill(SHELTER_INTERIOR, &interior);

    for bench in g.bench_seats() {
        surface.fill(BENCH, &bench);
    }
}

fn paint_track<S: Surface>(surface: &mut S, g: &SceneGeometry) {
    surface.fill(TRACK, &g.track());
    for y in g.lane_lines() {
        surface.stroke(1.2, LANE_LINE, &Line::new((0.0, y), (g.width, y)));
    }
}

fn paint_pitch<S: Surface>(surface: &mut S, g: &SceneGeometry) {
    for (i, stripe) in g.stripes().iter().enumerate() {
        let grass = if i % 2 == 0 { GRASS_DARK } else { GRASS_LIGHT };
        surface.fill(grass, stripe);
    }

    let m = g.markings();
    surface.stroke(MARKING_WIDTH, MARKING, &m.boundary);
    surface.stroke(
        MARKING_WIDTH,
        MARKING,
        &Line::new((m.center.x, m.boundary.y0), (m.center.x, m.boundary.y1)),
    );
    surface.stroke(
        MARKING_WIDTH,
        MARKING,
        &Ellipse::new(m.center, m.circle_radii, 0.0),
    );
    surface.fill(Color::WHITE, &Circle::new(m.center, m.spot_radius));

    for area in m.goal_areas.iter().chain(m.six_yard_boxes.iter()) {
        surface.stroke(MARKING_WIDTH, MARKING, area);
    }
}
