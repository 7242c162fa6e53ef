use std::path::{Path, PathBuf};

use gfx_core;
use piston_window::{
    OpenGL,
    PistonWindow,
    WindowSettings,
    TextureSettings,
    Glyphs,
    Event,
    Input,
    Button,
    ButtonArgs,
    ButtonState,
    Key,
};

use common::{Point, Segment};
use render::{DisplayList, Stroke, Color, BLACK};
use viewport::{Projection, dashes, DASH_ON, DASH_OFF, POINT_PX};

#[derive(Debug)]
pub enum PistonError {
    BuildWindow(String),
    DrawText(gfx_core::factory::CombinedError),
}

const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
const LABEL_SIZE: u32 = 10;
const CAPTION_SIZE: u32 = 14;
const FONT_FILE: &'static str = "FiraSans-Regular.ttf";

// labels are optional: without the font only the scene lines are drawn
fn font_file(assets_dir: &Path) -> Option<PathBuf> {
    let path = assets_dir.join(FONT_FILE);
    if path.is_file() {
        Some(path)
    } else {
        warn!("font {:?} not found, tick labels disabled", path);
        None
    }
}

pub fn screen_lines(points: &[Point], stroke: Stroke, width: f64, projection: &Projection) -> Vec<Segment> {
    let screen: Vec<Point> = points.iter().map(|&p| projection.to_screen(p)).collect();
    let mut lines = Vec::new();
    for pair in screen.windows(2) {
        let piece = Segment::new(pair[0], pair[1]);
        match stroke {
            Stroke::Solid =>
                lines.push(piece),
            Stroke::Dashed => {
                let scale = width * POINT_PX;
                lines.extend(dashes(&piece, DASH_ON * scale, DASH_OFF * scale));
            },
        }
    }
    lines
}

pub fn show(list: &DisplayList, initial: Projection, caption: &str, assets_dir: &Path, size: [u32; 2]) -> Result<(), PistonError> {
    let opengl = OpenGL::V4_1;
    let mut window: PistonWindow = WindowSettings::new("Painter's occlusion demo", size)
        .exit_on_esc(true)
        .opengl(opengl)
        .build()
        .map_err(PistonError::BuildWindow)?;

    let mut maybe_glyphs = match font_file(assets_dir) {
        Some(font_path) =>
            match Glyphs::new(&font_path, window.factory.clone(), TextureSettings::new()) {
                Ok(glyphs) =>
                    Some(glyphs),
                Err(e) => {
                    warn!("{:?}, tick labels disabled", e);
                    None
                },
            },
        None =>
            None,
    };

    let viewport = *initial.viewport();
    let mut projection = initial;
    while let Some(event) = window.next() {
        let maybe_result = window.draw_2d(&event, |context, g2d| {
            use piston_window::{clear, text, line, Transformed};
            clear(BACKGROUND, g2d);

            for &(ref points, style) in list.items.iter() {
                let radius = style.width * POINT_PX / 2.;
                for piece in screen_lines(points, style.stroke, style.width, &projection) {
                    let Segment { src: Point { x: sx, y: sy, }, dst: Point { x: dx, y: dy, }, } = piece;
                    line(style.color, radius, [sx, sy, dx, dy], context.transform, g2d);
                }
            }

            let glyphs = match maybe_glyphs {
                Some(ref mut glyphs) =>
                    glyphs,
                None =>
                    return Ok(()),
            };

            // tick labels along the axes
            for x in viewport.x_ticks() {
                let Point { x: sx, y: sy, } = projection.to_screen(Point::new(x, 0.));
                text::Text::new_color(BLACK, LABEL_SIZE).draw(
                    &format!("{}", x),
                    &mut *glyphs,
                    &context.draw_state,
                    context.transform.trans(sx + 2., sy + 12.),
                    g2d
                ).map_err(PistonError::DrawText)?;
            }
            for y in viewport.y_ticks() {
                if y == 0. {
                    continue;
                }
                let Point { x: sx, y: sy, } = projection.to_screen(Point::new(0., y));
                text::Text::new_color(BLACK, LABEL_SIZE).draw(
                    &format!("{}", y),
                    &mut *glyphs,
                    &context.draw_state,
                    context.transform.trans(sx + 2., sy - 2.),
                    g2d
                ).map_err(PistonError::DrawText)?;
            }

            text::Text::new_color([0.0, 0.5, 0.0, 1.0], CAPTION_SIZE).draw(
                caption,
                &mut *glyphs,
                &context.draw_state,
                context.transform.trans(5.0, 20.0),
                g2d
            ).map_err(PistonError::DrawText)?;

            Ok(())
        });
        if let Some(result) = maybe_result {
            let () = result?;
        }

        match event {
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::Q), state: ButtonState::Release, .. })) =>
                break,
            Event::Input(Input::Resize(width, height)) => {
                debug!("resized to {}x{}", width, height);
                projection = Projection::fit(viewport, width as f64, height as f64);
            },
            _ =>
                (),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs};
    use super::*;
    use viewport::Viewport;

    #[test]
    fn missing_font_disables_labels() {
        assert_eq!(font_file(Path::new("/nonexistent/assets")), None);

        let assets_dir = env::temp_dir().join("painter-occlusion-demo-assets");
        fs::create_dir_all(&assets_dir).unwrap();
        fs::write(assets_dir.join(FONT_FILE), b"").unwrap();
        assert_eq!(font_file(&assets_dir), Some(assets_dir.join(FONT_FILE)));
    }

    #[test]
    fn solid_polyline_maps_each_pair() {
        let projection = Projection::fit(Viewport::default(), 200., 200.);
        let points = [Point::new(-10., 10.), Point::new(0., 0.), Point::new(10., 0.)];
        let lines = screen_lines(&points, Stroke::Solid, 2., &projection);
        assert_eq!(lines, vec![
            Segment::new(Point::new(0., 0.), Point::new(100., 100.)),
            Segment::new(Point::new(100., 100.), Point::new(200., 100.)),
        ]);
    }

    #[test]
    fn dashed_line_is_split() {
        let projection = Projection::fit(Viewport::default(), 200., 200.);
        let points = [Point::new(-10., 0.), Point::new(10., 0.)];
        let lines = screen_lines(&points, Stroke::Dashed, 2., &projection);
        assert!(lines.len() > 1);
        assert_eq!(lines[0].src, Point::new(0., 100.));
        assert!(lines.iter().all(|piece| piece.src.y == 100. && piece.dst.y == 100.));
    }
}
