use common::{Point, Segment};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport { x_min: -10., x_max: 10., y_min: -10., y_max: 10., }
    }
}

fn ticks(min: f64, max: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut tick = min.ceil();
    while tick < max {
        ticks.push(tick);
        tick += 1.;
    }
    ticks
}

impl Viewport {
    pub fn x_ticks(&self) -> Vec<f64> {
        ticks(self.x_min, self.x_max)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        ticks(self.y_min, self.y_max)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Projection {
    viewport: Viewport,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Projection {
    pub fn fit(viewport: Viewport, width: f64, height: f64) -> Projection {
        let world_width = viewport.x_max - viewport.x_min;
        let world_height = viewport.y_max - viewport.y_min;
        let scale = (width / world_width).min(height / world_height);
        Projection {
            viewport,
            scale,
            offset_x: (width - world_width * scale) / 2.,
            offset_y: (height - world_height * scale) / 2.,
        }
    }

    pub fn to_screen(&self, point: Point) -> Point {
        Point {
            x: self.offset_x + (point.x - self.viewport.x_min) * self.scale,
            y: self.offset_y + (self.viewport.y_max - point.y) * self.scale,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

pub const POINT_PX: f64 = 1.5;

// dash pattern in units of line width
pub const DASH_ON: f64 = 3.7;
pub const DASH_OFF: f64 = 1.6;

pub fn dashes(segment: &Segment, on: f64, off: f64) -> Vec<Segment> {
    let dx = segment.dst.x - segment.src.x;
    let dy = segment.dst.y - segment.src.y;
    let length = (dx * dx + dy * dy).sqrt();
    let mut pieces = Vec::new();
    if length <= 0. || on <= 0. {
        return pieces;
    }
    let at = |t: f64| Point::new(segment.src.x + dx * t / length, segment.src.y + dy * t / length);
    let mut start = 0.;
    while start < length {
        let end = (start + on).min(length);
        pieces.push(Segment::new(at(start), at(end)));
        start = end + off.max(0.);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ticks() {
        let viewport = Viewport::default();
        let ticks = viewport.x_ticks();
        assert_eq!(ticks.len(), 20);
        assert_eq!(ticks[0], -10.);
        assert_eq!(ticks[19], 9.);
        assert_eq!(viewport.y_ticks(), ticks);
    }

    #[test]
    fn projection_keeps_aspect_and_flips_y() {
        let projection = Projection::fit(Viewport::default(), 800., 400.);
        assert_eq!(projection.to_screen(Point::new(-10., 10.)), Point::new(200., 0.));
        assert_eq!(projection.to_screen(Point::new(10., -10.)), Point::new(600., 400.));
        assert_eq!(projection.to_screen(Point::new(0., 0.)), Point::new(400., 200.));
    }

    #[test]
    fn dashes_cover_segment() {
        let segment = Segment::new(Point::new(0., 0.), Point::new(10., 0.));
        let pieces = dashes(&segment, 3., 1.);
        assert_eq!(pieces, vec![
            Segment::new(Point::new(0., 0.), Point::new(3., 0.)),
            Segment::new(Point::new(4., 0.), Point::new(7., 0.)),
            Segment::new(Point::new(8., 0.), Point::new(10., 0.)),
        ]);
    }

    #[test]
    fn zero_length_has_no_dashes() {
        let point = Point::new(1., 1.);
        assert!(dashes(&Segment::new(point, point), 3., 1.).is_empty());
    }
}
