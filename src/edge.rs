use crate::errors::PolygonError;
use crate::Coordinate;

/// One side of the polygon, stored as a node of the edge tree.
///
/// `y0 <= y1` is assumed by the queries. `y_high` starts at `y1` and is
/// raised during the build to the highest `y1` in the node's subtree.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub(crate) x0: f64,
    pub(crate) y0: f64,
    pub(crate) x1: f64,
    pub(crate) y1: f64,
    pub(crate) y_high: f64,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    pub(crate) wn_inc: i32,
}

impl Edge {
    /// Create an unlinked edge from its lower and upper endpoints.
    pub fn new(lower: Coordinate, upper: Coordinate, wn_inc: i32) -> Self {
        Edge {
            x0: lower.x,
            y0: lower.y,
            x1: upper.x,
            y1: upper.y,
            y_high: upper.y,
            left: None,
            right: None,
            wn_inc,
        }
    }

    /// Create an edge for the directed ring side `start -> end`.  Upward sides
    /// count +1; anything else has its endpoints swapped and counts -1.
    pub fn from_direction(start: Coordinate, end: Coordinate) -> Self {
        if start.y < end.y {
            Edge::new(start, end, 1)
        } else {
            Edge::new(end, start, -1)
        }
    }

    pub fn lower(&self) -> Coordinate {
        Coordinate::new(self.x0, self.y0)
    }

    pub fn upper(&self) -> Coordinate {
        Coordinate::new(self.x1, self.y1)
    }

    pub fn y_high(&self) -> f64 {
        self.y_high
    }

    pub fn left(&self) -> Option<usize> {
        self.left
    }

    pub fn right(&self) -> Option<usize> {
        self.right
    }

    pub fn winding_increment(&self) -> i32 {
        self.wn_inc
    }

    pub(crate) fn is_linked(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }

    /// Whether this edge spans height `y` under the half-open `[y0, y1)` rule.
    #[inline]
    pub(crate) fn spans(&self, y: f64) -> bool {
        y >= self.y0 && y < self.y1
    }

    /// Twice the signed area of (lower, upper, point); positive when the
    /// point is strictly left of the upward edge.
    #[inline]
    pub(crate) fn side_of(&self, point: Coordinate) -> f64 {
        (self.x1 - self.x0) * (point.y - self.y0) - (point.x - self.x0) * (self.y1 - self.y0)
    }

    /// Where the edge crosses height `y`, or `None` for a horizontal edge.
    #[inline]
    pub(crate) fn intercept(&self, y: f64) -> Option<f64> {
        let dy = self.y1 - self.y0;
        if dy > 0. {
            Some(self.x1 - ((self.y1 - y) / dy) * (self.x1 - self.x0))
        } else {
            None
        }
    }
}

/// Flat layout of an `Edge`, using the persisted field names of existing
/// polygon tables.  Links use `-1` for "no child".
#[allow(non_snake_case)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub yHigh: f64,
    pub l0: i64,
    pub l1: i64,
    pub wnInc: i64,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        EdgeRecord {
            x0: edge.x0,
            y0: edge.y0,
            x1: edge.x1,
            y1: edge.y1,
            yHigh: edge.y_high,
            l0: link_to_record(edge.left),
            l1: link_to_record(edge.right),
            wnInc: i64::from(edge.wn_inc),
        }
    }
}

impl EdgeRecord {
    /// Convert back to an `Edge`, checking links against a table of `len` edges.
    pub(crate) fn to_edge(self, index: usize, len: usize) -> Result<Edge, PolygonError> {
        let wn_inc = match self.wnInc {
            1 => 1,
            -1 => -1,
            value => return Err(PolygonError::InvalidWindingIncrement { index, value }),
        };
        Ok(Edge {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1,
            y1: self.y1,
            y_high: self.yHigh,
            left: link_from_record(index, self.l0, len)?,
            right: link_from_record(index, self.l1, len)?,
            wn_inc,
        })
    }
}

fn link_to_record(link: Option<usize>) -> i64 {
    match link {
        None => -1,
        Some(child) => child as i64,
    }
}

fn link_from_record(index: usize, link: i64, len: usize) -> Result<Option<usize>, PolygonError> {
    if link == -1 {
        return Ok(None);
    }
    if link <= 0 || link as u64 >= len as u64 {
        // Index 0 is the root and can never be a child.
        return Err(PolygonError::InvalidLink { index, link });
    }
    Ok(Some(link as usize))
}
