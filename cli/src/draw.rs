//! Replays a script of map clicks and undo/redo presses through a `RouteDrawing`. Each line is
//! one of:
//!
//! - `add <latitude> <longitude>`
//! - `undo`
//! - `redo`
//! - `clear`
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::{bail, Result};
use serde::Serialize;

use geom::LonLat;
use route_editor::RouteDrawing;

use crate::options::Options;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Add(LonLat),
    Undo,
    Redo,
    Clear,
}

/// The state of a drawing after the script, printed as JSON.
#[derive(Serialize)]
struct Summary {
    points: Vec<LonLat>,
    distance_meters: f64,
    distance: String,
    wkt: String,
    can_undo: bool,
    can_redo: bool,
}

pub fn run(script: String, opts: &Options) -> Result<()> {
    let steps = parse_script(&fs_err::read_to_string(&script)?)?;
    info!(
        "Replaying {} steps from {}",
        abstutil::prettyprint_usize(steps.len()),
        script
    );
    let drawing = replay(steps);
    println!("{}", abstutil::to_json(&summarize(&drawing, opts))?);
    Ok(())
}

fn parse_script(contents: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_step(line) {
            Ok(step) => steps.push(step),
            Err(err) => bail!("Line {}: {}", idx + 1, err),
        }
    }
    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["add", lat, lon] => {
            let lat = lat.parse::<f64>()?;
            let lon = lon.parse::<f64>()?;
            match LonLat::checked(lon, lat) {
                Ok(pt) => Ok(Step::Add(pt)),
                Err(err) => bail!("the point {}", err),
            }
        }
        ["undo"] => Ok(Step::Undo),
        ["redo"] => Ok(Step::Redo),
        ["clear"] => Ok(Step::Clear),
        _ => bail!("don't understand \"{}\"", line),
    }
}

fn replay(steps: Vec<Step>) -> RouteDrawing {
    let mut drawing = RouteDrawing::new();
    for step in steps {
        match step {
            Step::Add(pt) => drawing.add_point(pt),
            Step::Undo => {
                if !drawing.undo() {
                    warn!("Nothing to undo");
                }
            }
            Step::Redo => {
                if !drawing.redo() {
                    warn!("Nothing to redo");
                }
            }
            Step::Clear => drawing.clear(),
        }
    }
    drawing
}

fn summarize(drawing: &RouteDrawing, opts: &Options) -> Summary {
    let length = drawing.length();
    Summary {
        points: drawing.points().to_vec(),
        distance_meters: length.round_to_meters().inner_meters(),
        distance: length.to_string(&opts.units),
        wkt: drawing.wkt_preview(),
        can_undo: drawing.can_undo(),
        can_redo: drawing.can_redo(),
    }
}
