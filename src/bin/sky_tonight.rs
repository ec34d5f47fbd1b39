use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skygraph::plot::surface::BitmapSurface;
use skygraph::sky_tonight::SkyScene;
use skygraph::skygraph_errors::SkyGraphError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot the altitude of a sky target over the current day")]
struct Args {
    /// Output image (PNG)
    #[arg(long, default_value = "sky_tonight.png")]
    output: PathBuf,

    /// JSON scene (observer, target, plot options); M13 over Paris when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Reference instant, RFC 3339 (e.g. 2024-06-21T22:00:00Z); now when omitted
    #[arg(long)]
    date: Option<String>,
}

fn parse_date(date: Option<&str>) -> Result<DateTime<Utc>, SkyGraphError> {
    match date {
        None => Ok(Utc::now()),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| SkyGraphError::InvalidDate(format!("{s}: {e}"))),
    }
}

fn main() -> Result<(), SkyGraphError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let scene = match &args.scene {
        Some(path) => SkyScene::from_json(&fs::read_to_string(path)?)?,
        None => SkyScene::m13_over_paris(),
    };
    let now = parse_date(args.date.as_deref())?;

    info!(
        target_name = %scene.target_name,
        latitude = scene.observer.latitude,
        longitude = scene.observer.longitude,
        %now,
        "plotting altitude curve"
    );

    let mut graph = scene.graph(now)?;
    graph.attach(BitmapSurface::new(scene.plot.width, scene.plot.height))?;

    if let Some(surface) = graph.surface() {
        surface.save(&args.output)?;
        info!(output = %args.output.display(), "altitude plot written");
    }
    Ok(())
}
