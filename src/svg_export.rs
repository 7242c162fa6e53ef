use std::io;
use std::path::Path;

use svg::{self, Document, Node};
use svg::node::element::{Path as SvgPath, Rectangle};
use svg::node::element::path::Data;

use render::{DisplayList, Stroke, Color};
use viewport::{Projection, DASH_ON, DASH_OFF, POINT_PX};

fn rgb(color: &Color) -> String {
    let channel = |c: f32| (c.max(0.).min(1.) * 255.).round() as u8;
    format!("rgb({},{},{})", channel(color[0]), channel(color[1]), channel(color[2]))
}

pub fn document(list: &DisplayList, projection: &Projection, width: u32, height: u32) -> Document {
    let mut document = Document::new()
        .set("viewBox", format!("0 0 {} {}", width, height))
        .set("width", format!("{}px", width))
        .set("height", format!("{}px", height));

    document.append(
        Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", "white"),
    );

    for &(ref points, style) in list.items.iter() {
        let mut screen = points.iter().map(|&p| projection.to_screen(p));
        let mut data = match screen.next() {
            Some(first) => Data::new().move_to((first.x as f32, first.y as f32)),
            None => continue,
        };
        for point in screen {
            data = data.line_to((point.x as f32, point.y as f32));
        }

        let stroke_width = style.width * POINT_PX;
        let mut path = SvgPath::new()
            .set("fill", "none")
            .set("stroke", rgb(&style.color))
            .set("stroke-width", stroke_width)
            .set("d", data);
        if style.stroke == Stroke::Dashed {
            path = path.set("stroke-dasharray", format!("{} {}", DASH_ON * stroke_width, DASH_OFF * stroke_width));
        }
        document.append(path);
    }

    document
}

pub fn save<P>(file: P, list: &DisplayList, projection: &Projection, width: u32, height: u32) -> io::Result<()> where P: AsRef<Path> {
    svg::save(file, &document(list, projection, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Point;
    use render::{Canvas, LineStyle, BLACK, GRAY};
    use viewport::Viewport;

    #[test]
    fn color_channels() {
        assert_eq!(rgb(&BLACK), "rgb(0,0,0)");
        assert_eq!(rgb(&GRAY), "rgb(128,128,128)");
    }

    #[test]
    fn paths_carry_stroke_style() {
        let mut list = DisplayList::new();
        list.plot(&[Point::new(-10., 0.), Point::new(10., 0.)], LineStyle { stroke: Stroke::Solid, color: BLACK, width: 2., });
        list.plot(&[Point::new(0., -10.), Point::new(0., 10.)], LineStyle { stroke: Stroke::Dashed, color: BLACK, width: 2., });
        list.plot(&[], LineStyle { stroke: Stroke::Solid, color: BLACK, width: 2., });

        let projection = Projection::fit(Viewport::default(), 200., 200.);
        let text = document(&list, &projection, 200, 200).to_string();
        assert_eq!(text.matches("<path").count(), 2);
        assert_eq!(text.matches("stroke-dasharray").count(), 1);
        assert!(text.contains("fill=\"white\""));
    }
}
