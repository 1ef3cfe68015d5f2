use crate::errors::PolygonError;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A horizontal segment at height `y`, spanning the open interval
/// `(x_left, x_right)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalSegment {
    pub y: f64,
    pub x_left: f64,
    pub x_right: f64,
}

impl HorizontalSegment {
    pub fn new(y: f64, x_left: f64, x_right: f64) -> Result<Self, PolygonError> {
        if !(x_left < x_right) {
            return Err(PolygonError::InvalidSegment { x_left, x_right });
        }
        Ok(HorizontalSegment { y, x_left, x_right })
    }
}

impl fmt::Display for HorizontalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y={} ({}, {})", self.y, self.x_left, self.x_right)
    }
}
