use crate::trace::Adjacency;

/// All extraction parameters in one struct.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    // -- Binarization --
    /// Threshold method for converting gray values to a binary image.
    pub threshold: ThresholdMethod,
    /// If true, swap foreground/background after thresholding.
    pub invert: bool,

    // -- Tracing --
    /// Surfel adjacency used when the boundary crosses a diagonal
    /// pixel configuration.
    pub adjacency: Adjacency,

    // -- Output filtering --
    /// Minimum number of boundary points for a contour to be kept.
    /// Contours with `min_size` points or fewer are dropped.
    pub min_size: usize,
    /// Keep only contours whose mean point lies near a reference point.
    pub select: Option<ContourSelection>,
}

/// Threshold method for converting a grayscale image to binary.
#[derive(Debug, Clone, Copy)]
pub enum ThresholdMethod {
    /// Inclusive brightness interval: foreground iff `min <= value <= max`.
    Interval { min: u8, max: u8 },
    /// Otsu's method (automatic). Foreground is the dark side.
    Otsu,
}

/// Reference-point contour selection.
///
/// A contour passes when the Euclidean distance from its mean point to
/// `(x, y)`, rounded up to an integer, is at most `distance_max`.
#[derive(Debug, Clone, Copy)]
pub struct ContourSelection {
    pub x: i32,
    pub y: i32,
    pub distance_max: u32,
}

/// Threshold sweep: one extraction per interval `[min, min + (i+1)*increment]`
/// for every i with `min + (i+1)*increment < max`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRange {
    pub min: u8,
    pub increment: u8,
    pub max: u8,
}

impl ThresholdRange {
    /// The upper bounds of the sweep intervals, in increasing order.
    pub fn upper_bounds(&self) -> Vec<u8> {
        if self.increment == 0 {
            return Vec::new();
        }
        let (min, incr, max) = (self.min as u32, self.increment as u32, self.max as u32);
        (0u32..)
            .map(|i| min + (i + 1) * incr)
            .take_while(|&upper| upper < max)
            .map(|upper| upper as u8)
            .collect()
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            threshold: ThresholdMethod::Interval { min: 0, max: 128 },
            invert: false,
            adjacency: Adjacency::Interior,
            min_size: 4,
            select: None,
        }
    }
}
