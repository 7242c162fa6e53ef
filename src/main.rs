extern crate svg;
extern crate gfx_core;
extern crate env_logger;
extern crate piston_window;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;

use std::{io, process};
use std::path::PathBuf;

use clap::Arg;

mod common;
mod scene;
mod classify;
mod render;
mod viewport;
mod window;
mod svg_export;

use common::{Point, Segment, SceneError};
use scene::Scene;
use render::{DisplayList, StyleOverrides, Stroke};
use viewport::{Viewport, Projection};
use window::PistonError;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    InvalidParameter { name: &'static str, value: String, },
    Scene(SceneError),
    Piston(PistonError),
    SaveSvg { file: String, error: io::Error, },
}

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 640;

fn size_parameter(matches: &clap::ArgMatches, name: &'static str) -> Result<u32, Error> {
    let value = matches.value_of(name)
        .ok_or(Error::MissingParameter(name))?;
    match value.parse::<u32>() {
        Ok(size) if size > 0 =>
            Ok(size),
        _ =>
            Err(Error::InvalidParameter { name, value: value.to_string(), }),
    }
}

fn run() -> Result<(), Error> {
    let screen_width = SCREEN_WIDTH.to_string();
    let screen_height = SCREEN_HEIGHT.to_string();
    let matches = app_from_crate!()
        .arg(Arg::with_name("assets-dir")
             .short("a")
             .long("assets-dir")
             .value_name("DIR")
             .help("Graphics resources directory, tick labels are drawn when it holds the font")
             .default_value("./assets")
             .takes_value(true))
        .arg(Arg::with_name("svg")
             .short("s")
             .long("svg")
             .value_name("FILE")
             .help("Also write the rendered scene to an svg file")
             .takes_value(true))
        .arg(Arg::with_name("headless")
             .long("headless")
             .help("Do not open the interactive window"))
        .arg(Arg::with_name("width")
             .short("W")
             .long("width")
             .value_name("PX")
             .help("Drawing surface width")
             .default_value(&screen_width)
             .takes_value(true))
        .arg(Arg::with_name("height")
             .short("H")
             .long("height")
             .value_name("PX")
             .help("Drawing surface height")
             .default_value(&screen_height)
             .takes_value(true))
        .get_matches();

    let assets_dir = matches.value_of("assets-dir")
        .ok_or(Error::MissingParameter("assets-dir"))?;
    let width = size_parameter(&matches, "width")?;
    let height = size_parameter(&matches, "height")?;

    let scene = Scene::demo()
        .map_err(Error::Scene)?;
    let overrides = StyleOverrides::new()
        .force(Segment::new(Point::new(2., 3.), Point::new(5., 0.)), Stroke::Dashed);

    let classification = classify::classify(&scene);
    info!(
        "segments: {} visible, {} hidden; bottom edges: {} visible, {} hidden",
        classification.visible_segments.len(),
        classification.hidden_segments.len(),
        classification.visible_bottom_edges.len(),
        classification.hidden_bottom_edges.len(),
    );

    let viewport = Viewport::default();
    let mut list = DisplayList::new();
    render::draw_axes_and_grid(&mut list, &viewport);
    render::render(&classification, &overrides, &mut list);

    let projection = Projection::fit(viewport, width as f64, height as f64);
    if let Some(file) = matches.value_of("svg") {
        svg_export::save(file, &list, &projection, width, height)
            .map_err(|e| Error::SaveSvg { file: file.to_string(), error: e, })?;
        info!("scene written to {}", file);
    }

    if !matches.is_present("headless") {
        let caption = format!(
            "{} visible / {} hidden segments, <Q> to exit",
            classification.visible_segments.len(),
            classification.hidden_segments.len(),
        );
        window::show(&list, projection, &caption, &PathBuf::from(assets_dir), [width, height])
            .map_err(Error::Piston)?;
    }

    Ok(())
}
