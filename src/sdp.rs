//! Sequence-of-discrete-points (SDP) I/O.
//!
//! One `x y` pair per line; `#` starts a comment line; blank lines and
//! columns beyond the first two are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Error;

/// Read points from an SDP file.
pub fn read_points_from_path(path: &Path) -> Result<Vec<(i32, i32)>, Error> {
    read_points(BufReader::new(File::open(path)?))
}

/// Read points from any buffered reader.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<(i32, i32)>, Error> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut cols = trimmed.split_whitespace();
        let x = parse_coord(cols.next(), idx + 1)?;
        let y = parse_coord(cols.next(), idx + 1)?;
        points.push((x, y));
    }
    Ok(points)
}

fn parse_coord(token: Option<&str>, line: usize) -> Result<i32, Error> {
    let token = token.ok_or(Error::SdpParse {
        line,
        message: "expected two coordinates".to_string(),
    })?;
    token.parse().map_err(|_| Error::SdpParse {
        line,
        message: format!("invalid coordinate '{}'", token),
    })
}

/// Write points as SDP, one `x y` per line.
pub fn write_points<W: Write>(mut writer: W, points: &[(i32, i32)]) -> io::Result<()> {
    for &(x, y) in points {
        writeln!(writer, "{} {}", x, y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_points_skipping_comments_and_blanks() {
        let input = "# contour\n\n0 0\n1 0 extra ignored\n  1 1\n";
        let points = read_points(input.as_bytes()).unwrap();
        assert_eq!(points, vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn reads_negative_coordinates() {
        let points = read_points("-3 7\n".as_bytes()).unwrap();
        assert_eq!(points, vec![(-3, 7)]);
    }

    #[test]
    fn missing_column_reports_line_number() {
        let err = read_points("0 0\n42\n".as_bytes()).unwrap_err();
        match err {
            Error::SdpParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_coordinate_reports_line_number() {
        let err = read_points("1 one\n".as_bytes()).unwrap_err();
        match err {
            Error::SdpParse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("one"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let points = vec![(0, 0), (5, -2), (7, 9)];
        let mut buf = Vec::new();
        write_points(&mut buf, &points).unwrap();
        assert_eq!(read_points(buf.as_slice()).unwrap(), points);
    }
}
