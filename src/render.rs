use common::{Point, Segment};
use classify::Classification;
use viewport::Viewport;

pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const GRAY: Color = [0.5, 0.5, 0.5, 1.0];

const SCENE_WIDTH: f64 = 2.0;
const DEFAULT_WIDTH: f64 = 1.5;
const GUIDE_WIDTH: f64 = 0.5;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Stroke {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineStyle {
    pub stroke: Stroke,
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    fn scene(stroke: Stroke) -> LineStyle {
        LineStyle { stroke, color: BLACK, width: SCENE_WIDTH, }
    }
}

pub trait Canvas {
    fn plot(&mut self, points: &[Point], style: LineStyle);
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct DisplayList {
    pub items: Vec<(Vec<Point>, LineStyle)>,
}

impl DisplayList {
    pub fn new() -> DisplayList {
        DisplayList::default()
    }
}

impl Canvas for DisplayList {
    fn plot(&mut self, points: &[Point], style: LineStyle) {
        self.items.push((points.to_vec(), style));
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct StyleOverrides {
    forced: Vec<(Segment, Stroke)>,
}

impl StyleOverrides {
    pub fn new() -> StyleOverrides {
        StyleOverrides::default()
    }

    pub fn force(mut self, segment: Segment, stroke: Stroke) -> StyleOverrides {
        self.forced.push((segment, stroke));
        self
    }

    pub fn stroke_for(&self, segment: &Segment, default: Stroke) -> Stroke {
        self.forced.iter()
            .find(|&&(ref forced, _)| forced == segment)
            .map(|&(_, stroke)| stroke)
            .unwrap_or(default)
    }
}

fn plot_segment<C>(canvas: &mut C, segment: &Segment, style: LineStyle) where C: Canvas {
    canvas.plot(&segment.points(), style);
}

pub fn render<C>(classification: &Classification, overrides: &StyleOverrides, canvas: &mut C) where C: Canvas {
    for edge in classification.top_edges.iter() {
        plot_segment(canvas, edge, LineStyle::scene(Stroke::Solid));
    }
    for edge in classification.visible_bottom_edges.iter() {
        plot_segment(canvas, edge, LineStyle::scene(Stroke::Solid));
    }
    for edge in classification.hidden_bottom_edges.iter() {
        plot_segment(canvas, edge, LineStyle { stroke: Stroke::Dashed, color: BLACK, width: DEFAULT_WIDTH, });
    }
    for segment in classification.visible_segments.iter() {
        let stroke = overrides.stroke_for(segment, Stroke::Solid);
        plot_segment(canvas, segment, LineStyle::scene(stroke));
    }
    for segment in classification.hidden_segments.iter() {
        plot_segment(canvas, segment, LineStyle::scene(Stroke::Dashed));
    }
}

pub fn draw_axes_and_grid<C>(canvas: &mut C, viewport: &Viewport) where C: Canvas {
    let grid = LineStyle { stroke: Stroke::Dashed, color: GRAY, width: GUIDE_WIDTH, };
    for x in viewport.x_ticks() {
        canvas.plot(&[Point::new(x, viewport.y_min), Point::new(x, viewport.y_max)], grid);
    }
    for y in viewport.y_ticks() {
        canvas.plot(&[Point::new(viewport.x_min, y), Point::new(viewport.x_max, y)], grid);
    }

    let axis = LineStyle { stroke: Stroke::Solid, color: BLACK, width: GUIDE_WIDTH, };
    canvas.plot(&[Point::new(viewport.x_min, 0.), Point::new(viewport.x_max, 0.)], axis);
    canvas.plot(&[Point::new(0., viewport.y_min), Point::new(0., viewport.y_max)], axis);
}
