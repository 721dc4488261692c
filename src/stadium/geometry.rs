//! Fixed layout of the front-stand illustration.
//!
//! Everything is derived from a handful of literals on the 1000x600 logical
//! canvas. Nothing here is stored between frames; the painter builds a fresh
//! [`SceneGeometry`] on every redraw.

use vello::kurbo::{Point, Rect};

pub const CANVAS_WIDTH: f64 = 1000.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// What a seating-grid cell turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Stair,
    ShelterGap,
    Seat,
}

#[derive(Debug, Clone)]
pub struct SceneGeometry {
    pub width: f64,
    pub height: f64,

    pub stand_y: f64,
    pub stand_height: f64,
    pub center_gap: f64,
    pub side_width: f64,

    pub rows: usize,
    pub cols: usize,
    pub row_h: f64,
    pub col_w: f64,
    /// First row whose aisles flare outward.
    pub flare_start: usize,
    pub left_anchor: usize,
    pub right_anchor: usize,
    pub center_col: usize,

    pub pillar_width: f64,
    pub pillar_top: f64,
    pub pillar_height: f64,

    pub track_y: f64,
    pub track_height: f64,
    pub lanes: usize,

    pub pitch_y: f64,
    pub pitch_height: f64,
    pub stripes: usize,

    pub marking_margin: f64,
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGeometry {
    pub fn new() -> Self {
        let width = CANVAS_WIDTH;
        let height = CANVAS_HEIGHT;
        let stand_y = 130.0;
        let stand_height = 150.0;
        let center_gap = 360.0;
        let side_width = (width - center_gap) / 2.0;

        let rows = 12;
        let cols = 50;
        let row_h = stand_height / rows as f64;
        let col_w = width / cols as f64;

        let pillar_rise = 80.0;
        let track_y = stand_y + stand_height;
        let track_height = 80.0;
        let pitch_y = track_y + track_height;

        Self {
            width,
            height,
            stand_y,
            stand_height,
            center_gap,
            side_width,
            rows,
            cols,
            row_h,
            col_w,
            flare_start: rows / 2,
            left_anchor: (side_width / col_w).floor() as usize,
            right_anchor: ((side_width + center_gap) / col_w).floor() as usize,
            center_col: cols / 2,
            pillar_width: 14.0,
            pillar_top: stand_y - pillar_rise,
            pillar_height: stand_height + pillar_rise,
            track_y,
            track_height,
            lanes: 8,
            pitch_y,
            pitch_height: height - pitch_y,
            stripes: 10,
            marking_margin: 25.0,
        }
    }

    pub fn sky(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.stand_y)
    }

    pub fn stand(&self) -> Rect {
        Rect::new(0.0, self.stand_y, self.width, self.stand_y + self.stand_height)
    }

    pub fn cell(&self, row: usize, col: usize) -> Rect {
        let x = col as f64 * self.col_w;
        let y = self.stand_y + row as f64 * self.row_h;
        Rect::new(x, y, x + self.col_w, y + self.row_h)
    }

    /// Classify a seating cell. Stairs win over the shelter gap, which wins
    /// over seats.
    pub fn classify(&self, row: usize, col: usize) -> Cell {
        if self.is_stair(row, col) {
            Cell::Stair
        } else if self.in_shelter_area(row, col) {
            Cell::ShelterGap
        } else {
            Cell::Seat
        }
    }

    fn is_stair(&self, row: usize, col: usize) -> bool {
        let (row, col) = (row as isize, col as isize);
        let cols = self.cols as isize;
        let center = self.center_col as isize;

        if col == 0 || col == cols - 1 {
            return true;
        }
        // An even column count has no single middle column, so the center
        // aisle is two columns wide.
        if col == center || (cols % 2 == 0 && col == center - 1) {
            return true;
        }
        if row >= self.flare_start as isize {
            let flare = row - self.flare_start as isize;
            let left = self.left_anchor as isize - flare;
            let right = self.right_anchor as isize + flare;
            if col == left || col == left - 1 || col == right || col == right + 1 {
                return true;
            }
        }
        false
    }

    /// Upper-half cells whose left edge falls inside the center gap.
    /// Holds for stair cells too; they are classified stair but left unpainted.
    pub fn in_shelter_area(&self, row: usize, col: usize) -> bool {
        let x = col as f64 * self.col_w;
        let in_gap = x >= self.side_width && x < self.side_width + self.center_gap;
        in_gap && row < self.flare_start
    }

    /// Left and right pillar rectangles flanking the center gap.
    pub fn pillars(&self) -> [Rect; 2] {
        let bottom = self.pillar_top + self.pillar_height;
        let right_x = self.side_width + self.center_gap - self.pillar_width;
        [
            Rect::new(self.side_width, self.pillar_top, self.side_width + self.pillar_width, bottom),
            Rect::new(right_x, self.pillar_top, right_x + self.pillar_width, bottom),
        ]
    }

    pub fn roof(&self) -> Rect {
        Rect::new(
            self.side_width,
            self.pillar_top,
            self.side_width + self.center_gap,
            self.pillar_top + 3.0,
        )
    }

    /// Centers of the four roof-mounted point lights.
    pub fn roof_lights(&self) -> [Point; 4] {
        let half_pillar = self.pillar_width / 2.0;
        let mid = self.width / 2.0;
        let y = self.pillar_top;
        [
            Point::new(self.side_width + half_pillar, y),
            Point::new(self.side_width + self.center_gap - half_pillar, y),
            Point::new(mid - 90.0, y),
            Point::new(mid + 90.0, y),
        ]
    }

    /// Horizontal positions of the two floodlight masts.
    pub fn floodlight_xs(&self) -> [f64; 2] {
        [40.0, self.width - 40.0]
    }

    pub fn floodlight_top(&self) -> f64 {
        40.0
    }

    pub fn shelter(&self) -> Rect {
        let x = self.side_width + self.pillar_width;
        let y = self.stand_y + 5.0;
        let w = self.center_gap - self.pillar_width * 2.0;
        Rect::new(x, y, x + w, y + 70.0)
    }

    /// The 15 bench seats inside the shelter.
    pub fn bench_seats(&self) -> Vec<Rect> {
        const SEATS: usize = 15;
        let shelter = self.shelter();
        let seat_w = (shelter.width() - 40.0) / SEATS as f64;
        let y = shelter.y0 + 25.0;
        (0..SEATS)
            .map(|i| {
                let x = shelter.x0 + 20.0 + i as f64 * (seat_w + 2.0);
                Rect::new(x, y, x + seat_w - 2.0, y + 20.0)
            })
            .collect()
    }

    pub fn track(&self) -> Rect {
        Rect::new(0.0, self.track_y, self.width, self.track_y + self.track_height)
    }

    /// y of every lane divider, both edges included.
    pub fn lane_lines(&self) -> Vec<f64> {
        let lane_h = self.track_height / self.lanes as f64;
        (0..=self.lanes)
            .map(|i| self.track_y + i as f64 * lane_h)
            .collect()
    }

    pub fn stripes(&self) -> Vec<Rect> {
        let stripe_w = self.width / self.stripes as f64;
        (0..self.stripes)
            .map(|i| {
                let x = i as f64 * stripe_w;
                Rect::new(x, self.pitch_y, x + stripe_w, self.height)
            })
            .collect()
    }

    pub fn markings(&self) -> PitchMarkings {
        PitchMarkings::new(self)
    }
}

/// Lines painted on the pitch, all inset from the pitch edges by the margin.
#[derive(Debug, Clone)]
pub struct PitchMarkings {
    pub boundary: Rect,
    pub center: Point,
    /// Horizontal and vertical radius of the center circle. The circle is seen
    /// at a shallow angle, so the horizontal radius is the larger one.
    pub circle_radii: (f64, f64),
    pub spot_radius: f64,
    pub goal_areas: [Rect; 2],
    pub six_yard_boxes: [Rect; 2],
}

impl PitchMarkings {
    fn new(g: &SceneGeometry) -> Self {
        let m = g.marking_margin;
        let boundary = Rect::new(m, g.pitch_y + m, g.width - m, g.pitch_y + g.pitch_height - 2.0 * m);
        let center = boundary.center();

        let end_box = |w: f64, h: f64| {
            let top = center.y - h / 2.0;
            [
                Rect::new(boundary.x0, top, boundary.x0 + w, top + h),
                Rect::new(boundary.x1 - w, top, boundary.x1, top + h),
            ]
        };

        Self {
            boundary,
            center,
            circle_radii: (75.0, 35.0),
            spot_radius: 5.0,
            goal_areas: end_box(80.0, 130.0),
            six_yard_boxes: end_box(30.0, 60.0),
        }
    }
}
