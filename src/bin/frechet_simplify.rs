use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use img2freeman::kurbo::Point;
use img2freeman::{board, frechet, sdp, ErrorCriterion, FrechetShortcut};

#[derive(Parser)]
#[command(
    name = "frechet-simplify",
    about = "Simplify a polyline with the greedy Fréchet-shortcut segmentation"
)]
struct Cli {
    /// Input contour as a sequence of discrete points ('-' reads stdin)
    #[arg(long, value_name = "FILE")]
    sdp: PathBuf,

    /// Maximum allowed error of a shortcut
    #[arg(long, default_value = "2.0")]
    error: f64,

    /// Error measure bounding each shortcut
    #[arg(long, value_enum, default_value = "frechet")]
    criterion: CriterionArg,

    /// Overlay output: original polyline plus simplified segments
    #[arg(long, value_name = "FILE", default_value = "frechet-simplification.svg")]
    svg: PathBuf,

    /// Skip writing the overlay
    #[arg(long)]
    no_svg: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CriterionArg {
    Frechet,
    Width,
}

impl From<CriterionArg> for ErrorCriterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::Frechet => ErrorCriterion::Frechet,
            CriterionArg::Width => ErrorCriterion::Width,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let contour = if cli.sdp.as_os_str() == "-" {
        sdp::read_points(std::io::stdin().lock())
    } else {
        sdp::read_points_from_path(&cli.sdp)
    }
    .with_context(|| format!("failed to read {}", cli.sdp.display()))?;

    let points: Vec<Point> = contour
        .iter()
        .map(|&(x, y)| Point::new(x as f64, y as f64))
        .collect();

    let shortcut = FrechetShortcut::with_criterion(cli.error, cli.criterion.into());
    let segments = frechet::greedy_segmentation(&points, &shortcut);
    for s in &segments {
        info!(
            "segment [{}..{}] from ({}, {}) to ({}, {})",
            s.start, s.end, contour[s.start].0, contour[s.start].1, contour[s.end].0, contour[s.end].1
        );
    }
    info!(
        "{} points simplified to {} segments (error {})",
        contour.len(),
        segments.len(),
        cli.error
    );

    let kept: Vec<(i32, i32)> = frechet::simplify_indices(&points, &shortcut)
        .into_iter()
        .map(|i| contour[i])
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sdp::write_points(&mut out, &kept)?;
    out.flush()?;

    if !cli.no_svg {
        let simplified: Vec<Point> = kept
            .iter()
            .map(|&(x, y)| Point::new(x as f64, y as f64))
            .collect();
        board::render_simplification(&points, &simplified, &cli.svg)
            .with_context(|| format!("failed to write {}", cli.svg.display()))?;
        info!("overlay written to {}", cli.svg.display());
    }

    Ok(())
}
