//! Tools for working with routes stored as WKT LINESTRINGs. These are bundled as a single
//! executable.

#[macro_use]
extern crate log;

mod draw;
mod options;

use anyhow::Result;
use structopt::StructOpt;

use geom::{path_length, wkt};

use crate::options::Options;

#[derive(StructOpt)]
#[structopt(name = "route_cli", about = "Tools for routes stored as WKT")]
enum Command {
    /// Print every point of a LINESTRING as "latitude, longitude", one per line
    ParseWkt {
        /// WKT like `SRID=4326;LINESTRING(23.721 37.983, 23.723 37.985)`
        #[structopt()]
        input: String,
    },
    /// Print the great-circle length of a LINESTRING
    Length {
        /// WKT like `SRID=4326;LINESTRING(23.721 37.983, 23.723 37.985)`
        #[structopt()]
        input: String,
        /// The path to a JSON file with options, such as which units to use
        #[structopt(long)]
        options: Option<String>,
    },
    /// Convert a LINESTRING to a GeoJSON feature, with its length as a property
    #[structopt(name = "wkt-to-geojson")]
    WktToGeoJSON {
        /// WKT like `SRID=4326;LINESTRING(23.721 37.983, 23.723 37.985)`
        #[structopt()]
        input: String,
        /// Write the GeoJSON here, instead of printing it
        #[structopt(long)]
        output: Option<String>,
    },
    /// Replay a script of clicks, undos, and redos, then print the resulting route as JSON.
    ///
    /// Each line of the script is `add <latitude> <longitude>`, `undo`, `redo`, or `clear`.
    Draw {
        /// The path to the script
        #[structopt()]
        script: String,
        /// The path to a JSON file with options, such as which units to use
        #[structopt(long)]
        options: Option<String>,
    },
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    match Command::from_args() {
        Command::ParseWkt { input } => parse_wkt(input)?,
        Command::Length { input, options } => length(input, Options::load(options)?)?,
        Command::WktToGeoJSON { input, output } => wkt_to_geojson(input, output)?,
        Command::Draw { script, options } => draw::run(script, &Options::load(options)?)?,
    }
    Ok(())
}

fn parse_wkt(input: String) -> Result<()> {
    let pts = wkt::parse_linestring(&input)?;
    info!("Parsed {} points", abstutil::prettyprint_usize(pts.len()));
    for pt in pts {
        let (lat, lon) = pt.to_lat_lng();
        println!("{}, {}", lat, lon);
    }
    Ok(())
}

fn length(input: String, opts: Options) -> Result<()> {
    let pts = wkt::parse_linestring(&input)?;
    println!("{}", path_length(&pts).to_string(&opts.units));
    Ok(())
}

fn wkt_to_geojson(input: String, output: Option<String>) -> Result<()> {
    let pts = wkt::parse_linestring(&input)?;
    let feature = geom::to_geojson_feature(&pts)?;
    if let Some(path) = output {
        abstutil::write_json(&path, &feature)?;
        info!("Wrote {}", path);
    } else {
        println!("{}", serde_json::to_string_pretty(&feature)?);
    }
    Ok(())
}
