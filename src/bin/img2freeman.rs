use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use img2freeman::{
    contours, sdp, Adjacency, ContourSelection, ExtractConfig, FreemanChain, PointContour,
    ThresholdMethod, ThresholdRange,
};

#[derive(Parser)]
#[command(
    name = "img2freeman",
    about = "Extract 2D contours from a grayscale image as Freeman chain codes"
)]
struct Cli {
    /// Input image path (PGM, PNG, ...)
    #[arg(long)]
    image: PathBuf,

    /// Minimal threshold for binarization (inclusive)
    #[arg(long, default_value = "0")]
    min_threshold: u8,

    /// Maximal threshold for binarization (inclusive)
    #[arg(long, default_value = "128")]
    max_threshold: u8,

    /// Automatic threshold via Otsu's method (overrides the interval)
    #[arg(long)]
    otsu: bool,

    /// Sweep thresholds: extract once per interval [MIN, MIN+(i+1)*INCR]
    /// while the upper bound stays below MAX
    #[arg(long, value_name = "MIN:INCR:MAX")]
    threshold_range: Option<String>,

    /// Surfel adjacency at diagonal pixel configurations
    #[arg(long, value_enum, default_value = "interior")]
    adjacency: AdjacencyArg,

    /// Minimum number of boundary points for a contour to be output
    #[arg(long, default_value = "4")]
    min_size: usize,

    /// Keep only contours whose mean point is within DMAX of (X, Y)
    #[arg(long, value_name = "X:Y:DMAX")]
    select_contour: Option<String>,

    /// Swap foreground/background before tracing
    #[arg(long)]
    invert: bool,

    /// Flip the y axis of output coordinates
    #[arg(long)]
    invert_vertical_axis: bool,

    /// Print the largest contour as discrete points instead of chain codes
    #[arg(long)]
    output_sdp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AdjacencyArg {
    Interior,
    Exterior,
}

impl From<AdjacencyArg> for Adjacency {
    fn from(arg: AdjacencyArg) -> Self {
        match arg {
            AdjacencyArg::Interior => Adjacency::Interior,
            AdjacencyArg::Exterior => Adjacency::Exterior,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let select = cli
        .select_contour
        .as_deref()
        .map(parse_selection)
        .transpose()
        .context("invalid --select-contour")?;

    let config = ExtractConfig {
        threshold: if cli.otsu {
            ThresholdMethod::Otsu
        } else {
            ThresholdMethod::Interval {
                min: cli.min_threshold,
                max: cli.max_threshold,
            }
        },
        invert: cli.invert,
        adjacency: cli.adjacency.into(),
        min_size: cli.min_size,
        select,
    };

    let gray = image::open(&cli.image)
        .with_context(|| format!("failed to open {}", cli.image.display()))?
        .into_luma8();
    let height = gray.height();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.threshold_range {
        Some(raw) => {
            let range = parse_range(raw).context("invalid --threshold-range")?;
            for step in img2freeman::threshold_sweep(&gray, &config, range) {
                info!("contours from thresholds [{}, {}]", step.min, step.max);
                write_contours(&mut out, &step.contours, &cli, height)?;
            }
        }
        None => {
            let binary = img2freeman::bitmap::binarize(&gray, config.threshold, config.invert);
            let extracted = img2freeman::extract_from_image(&binary, &config);
            write_contours(&mut out, &extracted, &cli, height)?;
        }
    }

    Ok(())
}

fn write_contours(
    out: &mut impl Write,
    extracted: &[PointContour],
    cli: &Cli,
    height: u32,
) -> Result<()> {
    let output_points = |points: &[(i32, i32)]| {
        if cli.invert_vertical_axis {
            contours::invert_vertical(points, height)
        } else {
            points.to_vec()
        }
    };

    if cli.output_sdp {
        match contours::largest(extracted) {
            Some(largest) => sdp::write_points(out, &output_points(&largest.points))?,
            None => warn!("no contour matched the filters; nothing to output"),
        }
    } else {
        for contour in extracted {
            let fc = FreemanChain::from_contour(&output_points(&contour.points))?;
            writeln!(out, "{}", fc)?;
        }
    }
    Ok(())
}

fn parse_selection(raw: &str) -> Result<ContourSelection> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [x, y, dmax] = parts.as_slice() else {
        bail!("expected X:Y:DMAX, got '{raw}'");
    };
    Ok(ContourSelection {
        x: x.parse().context("X is not an integer")?,
        y: y.parse().context("Y is not an integer")?,
        distance_max: dmax.parse().context("DMAX is not a non-negative integer")?,
    })
}

fn parse_range(raw: &str) -> Result<ThresholdRange> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [min, incr, max] = parts.as_slice() else {
        bail!("expected MIN:INCR:MAX, got '{raw}'");
    };
    let range = ThresholdRange {
        min: min.parse().context("MIN is not in 0..=255")?,
        increment: incr.parse().context("INCR is not in 0..=255")?,
        max: max.parse().context("MAX is not in 0..=255")?,
    };
    if range.increment == 0 {
        bail!("INCR must be positive");
    }
    Ok(range)
}
