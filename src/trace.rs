//! Inter-pixel boundary extraction.
//!
//! Contours are traced on the pixel-corner grid (between pixels) rather
//! than through pixel centers, so each boundary is a closed 4-connected
//! sequence of corners. Uses XOR fill to handle nesting (outer vs hole):
//! after a boundary is traced its interior is toggled, which erases the
//! traced region and surfaces its holes for the scan to find next.

use image::GrayImage;

/// Surfel adjacency convention at diagonal pixel configurations.
///
/// When two foreground pixels meet only at a corner, the tracer has two
/// legal continuations. `Interior` turns back along the current region,
/// keeping diagonally-touching regions separate; `Exterior` turns across
/// the corner, connecting them into one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    Interior,
    Exterior,
}

/// A closed contour on the pixel-corner grid, in y-down image coordinates.
///
/// Corners range over `0..=w` horizontally and `0..=h` vertically; the
/// corner `(x, y)` is the top-left corner of pixel `(x, y)`. The closing
/// edge from the last point back to the first is implicit.
#[derive(Debug, Clone)]
pub struct PointContour {
    pub points: Vec<(i32, i32)>,
    /// True for the outer boundary of a region, false for a hole boundary.
    pub outer: bool,
}

/// Flat boolean working bitmap for contour tracing.
struct Bitmap {
    data: Vec<bool>,
    width: i32,
    height: i32,
}

impl Bitmap {
    /// Create from a binary GrayImage (non-zero = foreground).
    fn from_gray(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        let data = img.pixels().map(|p| p.0[0] > 0).collect();
        Bitmap {
            data,
            width: w as i32,
            height: h as i32,
        }
    }

    /// Pixel at (x, y). Out-of-bounds reads are background.
    fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.data[(y * self.width + x) as usize]
    }

    /// XOR all pixels in row y from column x to the right edge.
    fn xor_row_from(&mut self, x: i32, y: i32) {
        if y < 0 || y >= self.height {
            return;
        }
        for xi in x.max(0)..self.width {
            self.data[(y * self.width + xi) as usize] ^= true;
        }
    }
}

/// Extract the closed boundaries of every 4-connected foreground region,
/// outer boundaries and hole boundaries both.
///
/// Scans in raster order, traces each boundary, and XORs the interior to
/// handle nesting.
pub fn extract_contours(gray: &GrayImage, adjacency: Adjacency) -> Vec<PointContour> {
    let mut bm = Bitmap::from_gray(gray);
    // Keep the original for outer/hole classification; the working copy
    // is destroyed by the XOR fills.
    let orig = bm.data.clone();
    let mut contours = Vec::new();

    for y in 0..bm.height {
        for x in 0..bm.width {
            if bm.get(x, y) {
                // The row above has already been scanned clean, so this
                // pixel sits on the top edge of its region. If that
                // neighbour is foreground in the ORIGINAL image, the
                // region being traced is a toggled-on hole.
                let above_set = y > 0 && orig[((y - 1) * bm.width + x) as usize];

                let points = trace_boundary(&bm, x, y, adjacency);
                xor_fill(&mut bm, &points);
                contours.push(PointContour {
                    points,
                    outer: !above_set,
                });
            }
        }
    }

    contours
}

/// Trace one closed boundary starting from the top-left corner of pixel
/// (x0, y0), which must be the first set pixel in raster order that the
/// scan has not yet erased.
///
/// The walk keeps foreground on its left. At each corner the two pixels
/// ahead decide the turn:
///
///   left  right │ action
///   ────────────┼──────────────────────────────────────
///   fg    bg    │ straight (boundary continues ahead)
///   fg    fg    │ turn right (wall ahead)
///   bg    bg    │ turn left  (boundary falls away)
///   bg    fg    │ diagonal crossing: adjacency decides
fn trace_boundary(bm: &Bitmap, x0: i32, y0: i32, adjacency: Adjacency) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let (mut x, mut y) = (x0, y0);
    // Down the left edge of the starting pixel; foreground on the left.
    let (mut dx, mut dy) = (0i32, 1i32);

    loop {
        points.push((x, y));
        x += dx;
        y += dy;
        if x == x0 && y == y0 {
            break;
        }

        // Pixels ahead-left and ahead-right of the new corner. The
        // truncating-division offsets map each cardinal direction to the
        // correct diagonal neighbour.
        let left = bm.get(x + (dx + dy - 1) / 2, y + (dy - dx - 1) / 2);
        let right = bm.get(x + (dx - dy - 1) / 2, y + (dy + dx - 1) / 2);

        if right && !left {
            match adjacency {
                Adjacency::Interior => {
                    let tmp = dx;
                    dx = dy;
                    dy = -tmp;
                }
                Adjacency::Exterior => {
                    let tmp = dx;
                    dx = -dy;
                    dy = tmp;
                }
            }
        } else if right {
            let tmp = dx;
            dx = -dy;
            dy = tmp;
        } else if !left {
            let tmp = dx;
            dx = dy;
            dy = -tmp;
        }
    }

    points
}

/// XOR-fill the interior of a closed corner path.
///
/// For each vertical step the pixels from that column to the right edge
/// of the crossed row are toggled. Pairs of toggles cancel outside the
/// contour, leaving only the interior flipped.
fn xor_fill(bm: &mut Bitmap, points: &[(i32, i32)]) {
    let n = points.len();
    if n == 0 {
        return;
    }

    let mut y_prev = points[n - 1].1;
    for &(x, y) in points {
        if y != y_prev {
            bm.xor_row_from(x, y.min(y_prev));
        }
        y_prev = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn binary(rows: &[&[u8]]) -> GrayImage {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        GrayImage::from_fn(w, h, |x, y| {
            Luma([if rows[y as usize][x as usize] > 0 { 255 } else { 0 }])
        })
    }

    fn is_closed_4_connected(points: &[(i32, i32)]) -> bool {
        points.iter().zip(points.iter().cycle().skip(1)).all(|(a, b)| {
            (a.0 - b.0).abs() + (a.1 - b.1).abs() == 1
        })
    }

    #[test]
    fn single_pixel_yields_unit_square() {
        let img = binary(&[&[1]]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].outer);
        assert_eq!(contours[0].points, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn rectangle_boundary_has_perimeter_points() {
        let img = binary(&[
            &[1, 1, 1],
            &[1, 1, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 1);
        // 3x2 pixel block: perimeter of the corner polygon is 10 edges.
        assert_eq!(contours[0].points.len(), 10);
        assert!(is_closed_4_connected(&contours[0].points));
    }

    #[test]
    fn ring_produces_outer_and_hole() {
        let img = binary(&[
            &[1, 1, 1],
            &[1, 0, 1],
            &[1, 1, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 2);
        assert!(contours[0].outer);
        assert!(!contours[1].outer);
        assert_eq!(contours[0].points.len(), 12);
        assert_eq!(contours[1].points.len(), 4);
        assert_eq!(contours[1].points, vec![(1, 1), (1, 2), (2, 2), (2, 1)]);
    }

    #[test]
    fn interior_adjacency_splits_diagonal_pixels() {
        let img = binary(&[
            &[1, 0],
            &[0, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].points.len(), 4);
        assert_eq!(contours[1].points.len(), 4);
    }

    #[test]
    fn exterior_adjacency_joins_diagonal_pixels() {
        let img = binary(&[
            &[1, 0],
            &[0, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Exterior);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points.len(), 8);
        assert!(is_closed_4_connected(&contours[0].points));
    }

    #[test]
    fn all_background_yields_nothing() {
        let img = binary(&[&[0, 0], &[0, 0]]);
        assert!(extract_contours(&img, Adjacency::Interior).is_empty());
    }

    #[test]
    fn separate_regions_are_traced_once_each() {
        let img = binary(&[
            &[1, 0, 1],
            &[1, 0, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 2);
        assert!(contours.iter().all(|c| c.outer));
        assert!(contours.iter().all(|c| c.points.len() == 6));
    }

    #[test]
    fn nested_region_inside_hole_is_outer() {
        let img = binary(&[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ]);
        let contours = extract_contours(&img, Adjacency::Interior);
        assert_eq!(contours.len(), 3);
        let outers = contours.iter().filter(|c| c.outer).count();
        assert_eq!(outers, 2);
        // The innermost single pixel comes out as a 4-point outer contour.
        let inner = contours.iter().find(|c| c.points.len() == 4).unwrap();
        assert!(inner.outer);
    }
}
