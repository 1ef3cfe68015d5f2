use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PolygonError {
    #[error("Polygon has no edges")]
    EmptyPolygon,

    #[error("Ring needs at least 3 edges")]
    TooFewCoordinates,

    #[error("Coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("Edge {index} already has child links; the table was built before")]
    EdgeAlreadyLinked { index: usize },

    #[error("Edge {index} links to {link}, which is not an edge of the table")]
    InvalidLink { index: usize, link: i64 },

    #[error("Edge {index} links to {link}, which already has a parent")]
    DuplicateLink { index: usize, link: usize },

    #[error("Edge {index} is not reachable from the root")]
    UnreachableEdge { index: usize },

    #[error("Edge {index} has y0 above y1")]
    InvertedEdge { index: usize },

    #[error("Edge {index} has a yHigh below its own y1 or a child's yHigh")]
    InvalidYHigh { index: usize },

    #[error("Edge {index} has winding increment {value}; expected 1 or -1")]
    InvalidWindingIncrement { index: usize, value: i64 },

    #[error("Segment x bounds are not ordered: {x_left} !< {x_right}")]
    InvalidSegment { x_left: f64, x_right: f64 },

    #[error("Polygons with interior rings are not supported")]
    UnsupportedHoles,

    #[error("Geometry is not a polygon")]
    UnsupportedGeometry,

    #[error("Could not parse WKT: {0}")]
    Wkt(String),
}
