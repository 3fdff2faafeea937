//! img2freeman: connected-region boundaries → Freeman chain codes.
//!
//! Binarizes a grayscale image, traces the closed boundaries of all
//! 4-connected foreground regions on the inter-pixel grid, and encodes
//! them as Freeman chains. The companion `frechet` module simplifies
//! polylines with the greedy Fréchet-shortcut segmentation.
//!
//! # Example
//!
//! ```no_run
//! use img2freeman::{extract, ExtractConfig, FreemanChain};
//! use std::path::Path;
//!
//! let config = ExtractConfig::default();
//! let contours = extract(Path::new("shape.pgm"), &config)?;
//! for contour in &contours {
//!     println!("{}", FreemanChain::from_contour(&contour.points)?);
//! }
//! # Ok::<(), img2freeman::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod bitmap;
pub mod board;
pub mod chain;
pub mod config;
pub mod contours;
pub mod error;
pub mod frechet;
pub mod sdp;
pub mod trace;

// Re-export kurbo so downstream users get the same Point type the
// frechet and board APIs take.
pub use kurbo;

pub use chain::FreemanChain;
pub use config::{ContourSelection, ExtractConfig, ThresholdMethod, ThresholdRange};
pub use error::Error;
pub use frechet::{ErrorCriterion, FrechetShortcut, Segment};
pub use trace::{Adjacency, PointContour};

use std::path::Path;

use image::GrayImage;
use log::info;
use rayon::prelude::*;

/// Full extraction pipeline: image path → filtered boundary contours.
pub fn extract(image_path: &Path, config: &ExtractConfig) -> Result<Vec<PointContour>, Error> {
    let binary = bitmap::load_and_binarize(image_path, config.threshold, config.invert)?;
    Ok(extract_from_image(&binary, config))
}

/// Extraction from an already-binarized image (non-zero = foreground).
pub fn extract_from_image(binary: &GrayImage, config: &ExtractConfig) -> Vec<PointContour> {
    let mut contours = trace::extract_contours(binary, config.adjacency);
    let traced = contours.len();

    contours::filter_min_size(&mut contours, config.min_size);
    if let Some(selection) = config.select {
        contours::select_near(&mut contours, selection);
    }

    info!("traced {} contours, {} kept", traced, contours.len());
    contours
}

/// One step of a threshold sweep.
#[derive(Debug, Clone)]
pub struct SweepStep {
    pub min: u8,
    pub max: u8,
    pub contours: Vec<PointContour>,
}

/// Run the extraction once per sweep interval, in parallel. Steps are
/// independent binarizations of the same grayscale image; the returned
/// order follows the interval order.
pub fn threshold_sweep(
    gray: &GrayImage,
    config: &ExtractConfig,
    range: ThresholdRange,
) -> Vec<SweepStep> {
    range
        .upper_bounds()
        .into_par_iter()
        .map(|upper| {
            let method = ThresholdMethod::Interval {
                min: range.min,
                max: upper,
            };
            let binary = bitmap::binarize(gray, method, config.invert);
            SweepStep {
                min: range.min,
                max: upper,
                contours: extract_from_image(&binary, config),
            }
        })
        .collect()
}
