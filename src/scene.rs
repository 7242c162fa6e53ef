use common::{Point, Segment, Rectangle, SceneError};

#[derive(Clone, PartialEq, Debug)]
pub struct Scene {
    segments: Vec<Segment>,
    top: Rectangle,
    bottom: Rectangle,
}

impl Scene {
    // rectangles[0] is the occluder, rectangles[1] the occluded one
    pub fn new(segments: Vec<Segment>, rectangles: Vec<Rectangle>) -> Result<Scene, SceneError> {
        match &rectangles[..] {
            &[top, bottom] =>
                Ok(Scene { segments, top, bottom, }),
            _ =>
                Err(SceneError::RectangleCount(rectangles.len())),
        }
    }

    pub fn demo() -> Result<Scene, SceneError> {
        let segments = vec![
            Segment::new(Point::new(1., 1.), Point::new(6., 4.)),
            Segment::new(Point::new(2., 3.), Point::new(5., 0.)),
        ];
        let rectangles = vec![
            Rectangle::from_points(&[Point::new(-7., -6.), Point::new(-3., -2.)])?,
            Rectangle::from_points(&[Point::new(-9., -8.), Point::new(-5., -4.)])?,
        ];
        Scene::new(segments, rectangles)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn top(&self) -> &Rectangle {
        &self.top
    }

    pub fn bottom(&self) -> &Rectangle {
        &self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_rectangles() {
        let rect = Rectangle::new(Point::new(0., 0.), Point::new(1., 1.));
        assert_eq!(Scene::new(vec![], vec![rect]), Err(SceneError::RectangleCount(1)));
        assert_eq!(Scene::new(vec![], vec![rect; 3]), Err(SceneError::RectangleCount(3)));
        assert!(Scene::new(vec![], vec![rect; 2]).is_ok());
    }

    #[test]
    fn demo_scene_layout() {
        let scene = Scene::demo().unwrap();
        assert_eq!(scene.segments().len(), 2);
        assert_eq!(scene.top().corner_a, Point::new(-7., -6.));
        assert_eq!(scene.bottom().corner_b, Point::new(-5., -4.));
    }
}
