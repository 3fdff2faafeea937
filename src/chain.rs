//! Freeman chain codes for closed 4-connected boundaries.
//!
//! A chain is an origin point plus a sequence of unit moves:
//! `'0'` = +x, `'1'` = +y, `'2'` = -x, `'3'` = -y.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A Freeman chain code: origin plus unit moves.
///
/// The text form is the output line format `x0 y0 chain`, e.g.
/// `12 9 0001112233` — parse and display round-trip through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreemanChain {
    pub x0: i32,
    pub y0: i32,
    pub chain: String,
}

impl FreemanChain {
    /// Encode a closed contour. The closing move from the last point back
    /// to the first is included, so an n-point contour yields n moves.
    pub fn from_contour(points: &[(i32, i32)]) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(Error::ContourTooShort(points.len()));
        }

        let mut chain = String::with_capacity(points.len());
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            chain.push(move_code(a, b).ok_or(Error::NonUnitStep(i, (i + 1) % points.len()))?);
        }

        Ok(FreemanChain {
            x0: points[0].0,
            y0: points[0].1,
            chain,
        })
    }

    /// Number of moves in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Decode the chain back into contour points, starting at the origin.
    ///
    /// For a chain built from a closed contour the final move returns to
    /// the origin and is not repeated in the output.
    pub fn points(&self) -> Result<Vec<(i32, i32)>, Error> {
        let mut pts = Vec::with_capacity(self.chain.len());
        let (mut x, mut y) = (self.x0, self.y0);
        for code in self.chain.chars() {
            pts.push((x, y));
            let (dx, dy) = move_step(code).ok_or(Error::InvalidChainCode(code))?;
            x += dx;
            y += dy;
        }
        Ok(pts)
    }

    /// Whether the moves return to the origin.
    pub fn is_closed(&self) -> bool {
        let (mut x, mut y) = (self.x0, self.y0);
        for code in self.chain.chars() {
            match move_step(code) {
                Some((dx, dy)) => {
                    x += dx;
                    y += dy;
                }
                None => return false,
            }
        }
        (x, y) == (self.x0, self.y0)
    }
}

fn move_code(a: (i32, i32), b: (i32, i32)) -> Option<char> {
    match (b.0 - a.0, b.1 - a.1) {
        (1, 0) => Some('0'),
        (0, 1) => Some('1'),
        (-1, 0) => Some('2'),
        (0, -1) => Some('3'),
        _ => None,
    }
}

fn move_step(code: char) -> Option<(i32, i32)> {
    match code {
        '0' => Some((1, 0)),
        '1' => Some((0, 1)),
        '2' => Some((-1, 0)),
        '3' => Some((0, -1)),
        _ => None,
    }
}

impl fmt::Display for FreemanChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x0, self.y0, self.chain)
    }
}

impl FromStr for FreemanChain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.split_whitespace();
        let x0 = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| Error::ChainFormat(s.to_string()))?;
        let y0 = parts
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| Error::ChainFormat(s.to_string()))?;
        let chain: String = parts.next().unwrap_or("").to_string();
        if parts.next().is_some() {
            return Err(Error::ChainFormat(s.to_string()));
        }
        if let Some(bad) = chain.chars().find(|c| !('0'..='3').contains(c)) {
            return Err(Error::InvalidChainCode(bad));
        }
        Ok(FreemanChain { x0, y0, chain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_encodes_and_closes() {
        let square = [(0, 0), (0, 1), (1, 1), (1, 0)];
        let fc = FreemanChain::from_contour(&square).unwrap();
        assert_eq!(fc.to_string(), "0 0 1032");
        assert!(fc.is_closed());
    }

    #[test]
    fn points_round_trip() {
        let contour = [(3, 2), (4, 2), (4, 3), (4, 4), (3, 4), (3, 3)];
        let fc = FreemanChain::from_contour(&contour).unwrap();
        assert_eq!(fc.points().unwrap(), contour);
    }

    #[test]
    fn display_parse_round_trip() {
        let fc = FreemanChain {
            x0: -2,
            y0: 7,
            chain: "00112233".to_string(),
        };
        let parsed: FreemanChain = fc.to_string().parse().unwrap();
        assert_eq!(parsed, fc);
    }

    #[test]
    fn non_unit_step_is_rejected() {
        let err = FreemanChain::from_contour(&[(0, 0), (2, 0), (2, 1)]).unwrap_err();
        assert!(matches!(err, Error::NonUnitStep(0, 1)));
    }

    #[test]
    fn too_short_contour_is_rejected() {
        assert!(matches!(
            FreemanChain::from_contour(&[(5, 5)]),
            Err(Error::ContourTooShort(1))
        ));
    }

    #[test]
    fn bad_code_character_is_rejected() {
        assert!(matches!(
            "0 0 0142".parse::<FreemanChain>(),
            Err(Error::InvalidChainCode('4'))
        ));
    }

    #[test]
    fn open_chain_is_not_closed() {
        let fc = FreemanChain {
            x0: 0,
            y0: 0,
            chain: "001".to_string(),
        };
        assert!(!fc.is_closed());
    }
}
