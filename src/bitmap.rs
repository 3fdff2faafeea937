use std::path::Path;

use image::{GrayImage, ImageReader, Luma};
use imageproc::contrast::otsu_level;
use log::debug;

use crate::config::ThresholdMethod;
use crate::error::Error;

/// Load an image and convert it to a binary (black/white) GrayImage.
///
/// Foreground pixels are 255, background pixels are 0.
pub fn load_and_binarize(
    path: &Path,
    method: ThresholdMethod,
    invert: bool,
) -> Result<GrayImage, Error> {
    let img = ImageReader::open(path)
        .map_err(|e| Error::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| Error::ImageLoad(e.to_string()))?
        .into_luma8();

    Ok(binarize(&img, method, invert))
}

/// Binarize a grayscale image with the given threshold method.
pub fn binarize(img: &GrayImage, method: ThresholdMethod, invert: bool) -> GrayImage {
    let (min, max) = match method {
        ThresholdMethod::Interval { min, max } => (min, max),
        ThresholdMethod::Otsu => {
            let t = otsu_level(img);
            debug!("Otsu level = {}", t);
            (0, t)
        }
    };

    let mut binary = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let v = pixel.0[0];
        let fg = (min <= v && v <= max) != invert;
        binary.put_pixel(x, y, Luma([if fg { 255 } else { 0 }]));
    }
    binary
}
