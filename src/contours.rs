//! Contour filtering and selection for output.

use crate::config::ContourSelection;
use crate::trace::PointContour;

/// Drop contours with `min_size` points or fewer.
pub fn filter_min_size(contours: &mut Vec<PointContour>, min_size: usize) {
    contours.retain(|c| c.points.len() > min_size);
}

/// Keep only contours whose mean point lies near the selection's
/// reference point. The distance is ceiled to an integer before the
/// comparison, so `distance_max = 0` still accepts exact matches.
pub fn select_near(contours: &mut Vec<PointContour>, selection: ContourSelection) {
    contours.retain(|c| {
        let (mx, my) = mean_point(&c.points);
        let dist = ((mx - selection.x as f64).powi(2) + (my - selection.y as f64).powi(2)).sqrt();
        dist.ceil() as u32 <= selection.distance_max
    });
}

/// The contour with the most points, if any.
pub fn largest(contours: &[PointContour]) -> Option<&PointContour> {
    contours.iter().max_by_key(|c| c.points.len())
}

/// Arithmetic mean of the contour points.
pub fn mean_point(points: &[(i32, i32)]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0i64, 0i64), |(sx, sy), &(x, y)| (sx + x as i64, sy + y as i64));
    (sx as f64 / n, sy as f64 / n)
}

/// Flip the y axis of a contour: `y -> height - y`.
///
/// `height` is in pixel units; corners range over `0..=height`, so the
/// flip maps that range onto itself.
pub fn invert_vertical(points: &[(i32, i32)], height: u32) -> Vec<(i32, i32)> {
    points
        .iter()
        .map(|&(x, y)| (x, height as i32 - y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contour(points: Vec<(i32, i32)>) -> PointContour {
        PointContour { points, outer: true }
    }

    #[test]
    fn min_size_filter_is_strict() {
        let mut cs = vec![
            contour(vec![(0, 0); 4]),
            contour(vec![(0, 0); 5]),
        ];
        filter_min_size(&mut cs, 4);
        assert_eq!(cs.len(), 1);
        assert_eq!(cs[0].points.len(), 5);
    }

    #[test]
    fn selection_uses_ceiled_distance_to_mean() {
        let square = contour(vec![(0, 0), (0, 2), (2, 2), (2, 0)]); // mean (1, 1)
        let sel = |x, y, d| ContourSelection { x, y, distance_max: d };

        let mut cs = vec![square.clone()];
        select_near(&mut cs, sel(1, 1, 0));
        assert_eq!(cs.len(), 1);

        let mut cs = vec![square.clone()];
        select_near(&mut cs, sel(3, 1, 1)); // distance 2
        assert!(cs.is_empty());

        let mut cs = vec![square];
        select_near(&mut cs, sel(2, 2, 2)); // distance sqrt(2), ceil 2
        assert_eq!(cs.len(), 1);
    }

    #[test]
    fn largest_picks_most_points() {
        let cs = vec![
            contour(vec![(0, 0); 6]),
            contour(vec![(0, 0); 12]),
            contour(vec![(0, 0); 4]),
        ];
        assert_eq!(largest(&cs).unwrap().points.len(), 12);
        assert!(largest(&[]).is_none());
    }

    #[test]
    fn vertical_inversion_maps_corner_range_onto_itself() {
        let flipped = invert_vertical(&[(0, 0), (2, 3)], 3);
        assert_eq!(flipped, vec![(0, 3), (2, 0)]);
    }
}
