//! SVG rendering of a simplification result.
//!
//! Draws the original polyline as a thin blue stroke and the simplified
//! segments as a thick red stroke on top, for visual comparison. The
//! y axis is flipped so the drawing matches the mathematical orientation
//! of the input coordinates.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use kurbo::{BezPath, Point};

const MARGIN: f64 = 5.0;

/// Render the overlay and write it to `path`.
pub fn render_simplification(
    contour: &[Point],
    simplified: &[Point],
    path: &Path,
) -> io::Result<()> {
    fs::write(path, svg_document(contour, simplified))
}

/// Build the SVG document text.
fn svg_document(contour: &[Point], simplified: &[Point]) -> String {
    let (min, max) = bounds(contour.iter().chain(simplified));
    let width = max.x - min.x + 2.0 * MARGIN;
    let height = max.y - min.y + 2.0 * MARGIN;

    // Map input coordinates into the viewport, flipping y.
    let map = |p: &Point| Point::new(p.x - min.x + MARGIN, max.y - p.y + MARGIN);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}">"#
    );
    if let Some(d) = polyline_path(contour, map) {
        let _ = writeln!(
            svg,
            r##"  <path d="{d}" fill="none" stroke="#0000ff" stroke-width="1"/>"##
        );
    }
    if let Some(d) = polyline_path(simplified, map) {
        let _ = writeln!(
            svg,
            r##"  <path d="{d}" fill="none" stroke="#ff0000" stroke-width="3"/>"##
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Polyline as SVG path data, or None when there is nothing to draw.
fn polyline_path(points: &[Point], map: impl Fn(&Point) -> Point) -> Option<String> {
    if points.len() < 2 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(map(&points[0]));
    for p in &points[1..] {
        path.line_to(map(p));
    }
    Some(path.to_svg())
}

fn bounds<'a>(points: impl Iterator<Item = &'a Point>) -> (Point, Point) {
    let mut min = Point::new(f64::MAX, f64::MAX);
    let mut max = Point::new(f64::MIN, f64::MIN);
    let mut any = false;
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        any = true;
    }
    if !any {
        return (Point::ZERO, Point::ZERO);
    }
    (min, max)
}
