#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y, }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn new(src: Point, dst: Point) -> Segment {
        Segment { src, dst, }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            min: Point {
                x: self.src.x.min(self.dst.x),
                y: self.src.y.min(self.dst.y),
            },
            max: Point {
                x: self.src.x.max(self.dst.x),
                y: self.src.y.max(self.dst.y),
            },
        }
    }

    pub fn points(&self) -> [Point; 2] {
        [self.src, self.dst]
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Touching boundaries count as overlap. Used as a stand-in for occlusion,
    /// so it over-approximates: boxes can meet while the geometry does not.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.max.x >= other.min.x && other.max.x >= self.min.x &&
            self.max.y >= other.min.y && other.max.y >= self.min.y
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rectangle {
    pub corner_a: Point,
    pub corner_b: Point,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SceneError {
    MissingCorner { given: usize, },
    RectangleCount(usize),
}

impl Rectangle {
    pub fn new(corner_a: Point, corner_b: Point) -> Rectangle {
        Rectangle { corner_a, corner_b, }
    }

    pub fn from_points(points: &[Point]) -> Result<Rectangle, SceneError> {
        match points {
            &[corner_a, corner_b] =>
                Ok(Rectangle::new(corner_a, corner_b)),
            _ =>
                Err(SceneError::MissingCorner { given: points.len(), }),
        }
    }

    /// Edges in order: bottom, right, top, left.
    pub fn edges(&self) -> [Segment; 4] {
        let Point { x: x1, y: y1, } = self.corner_a;
        let Point { x: x2, y: y2, } = self.corner_b;
        [
            Segment::new(Point::new(x1, y1), Point::new(x2, y1)),
            Segment::new(Point::new(x2, y1), Point::new(x2, y2)),
            Segment::new(Point::new(x2, y2), Point::new(x1, y2)),
            Segment::new(Point::new(x1, y2), Point::new(x1, y1)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn bounding_box_normalizes_endpoint_order() {
        let bbox = seg(5., 0., 2., 3.).bounding_box();
        assert_eq!(bbox.min, Point::new(2., 0.));
        assert_eq!(bbox.max, Point::new(5., 3.));
    }

    #[test]
    fn zero_length_segment_has_point_box() {
        let bbox = seg(1., 1., 1., 1.).bounding_box();
        assert_eq!(bbox.min, bbox.max);
        assert!(bbox.overlaps(&bbox));
    }

    #[test]
    fn edges_follow_bottom_right_top_left() {
        let rect = Rectangle::new(Point::new(-7., -6.), Point::new(-3., -2.));
        assert_eq!(rect.edges(), [
            seg(-7., -6., -3., -6.),
            seg(-3., -6., -3., -2.),
            seg(-3., -2., -7., -2.),
            seg(-7., -2., -7., -6.),
        ]);
    }

    #[test]
    fn rectangle_needs_two_corners() {
        assert_eq!(
            Rectangle::from_points(&[Point::new(0., 0.)]),
            Err(SceneError::MissingCorner { given: 1, }),
        );
        assert_eq!(
            Rectangle::from_points(&[Point::new(0., 0.), Point::new(1., 2.)]),
            Ok(Rectangle::new(Point::new(0., 0.), Point::new(1., 2.))),
        );
    }
}
