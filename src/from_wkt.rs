use crate::errors::PolygonError;
use crate::Coordinate;
use wkt::types;
use wkt::types::Coord;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

fn coords_to_positions(coords: Vec<Coord<f64>>) -> Vec<Coordinate> {
    coords.into_iter().map(Coordinate::from).collect()
}

fn linestring_to_positions(linestring: types::LineString<f64>) -> Vec<Coordinate> {
    coords_to_positions(linestring.0)
}

/// Parse `POLYGON` and `MULTIPOLYGON` WKT into the shell ring of each
/// polygon.  Empty polygons are skipped.
pub fn parse_polygon_shells(wkt_str: &str) -> Result<Vec<Vec<Coordinate>>, PolygonError> {
    let wkt_geoms =
        wkt::Wkt::<f64>::from_str(wkt_str).map_err(|msg| PolygonError::Wkt(msg.to_string()))?;

    let mut shells = Vec::new();
    for geom in wkt_geoms.items {
        match geom {
            wkt::Geometry::Polygon(poly) => shells.extend(polygon_shell(poly)?),
            wkt::Geometry::MultiPolygon(mpoly) => {
                for poly in mpoly.0 {
                    shells.extend(polygon_shell(poly)?);
                }
            }
            _ => return Err(PolygonError::UnsupportedGeometry),
        }
    }
    Ok(shells)
}

fn polygon_shell(poly: types::Polygon<f64>) -> Result<Option<Vec<Coordinate>>, PolygonError> {
    let mut linestrings = poly.0;
    match linestrings.len() {
        0 => Ok(None),
        1 => Ok(Some(linestring_to_positions(linestrings.remove(0)))),
        _ => Err(PolygonError::UnsupportedHoles),
    }
}
