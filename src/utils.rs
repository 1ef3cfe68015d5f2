use crate::errors::PolygonError;
use crate::{Coordinate, Edge};

/// The contribution of a single edge to the winding number around `point`.
///
/// The edge counts when it spans `point.y` (half-open, `[y0, y1)`) and the
/// point lies strictly to its left.  Points exactly on the edge line do not
/// count.
pub fn edge_winding(point: Coordinate, edge: &Edge) -> i32 {
    if edge.spans(point.y) && edge.side_of(point) > 0. {
        edge.wn_inc
    } else {
        0
    }
}

/// Winding number by scanning every edge, ignoring the tree links.
pub fn winding_number_linear(point: Coordinate, edges: &[Edge]) -> i32 {
    edges.iter().map(|edge| edge_winding(point, edge)).sum()
}

pub(crate) fn edges_from_ring(coords: &[Coordinate]) -> Result<Vec<Edge>, PolygonError> {
    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(PolygonError::NonFiniteCoordinate { index });
    }

    let closed = coords.first() == coords.last();
    let num_edges = if closed {
        coords.len().saturating_sub(1)
    } else {
        coords.len()
    };
    if num_edges < 3 {
        return Err(PolygonError::TooFewCoordinates);
    }

    let mut edges: Vec<Edge> = coords
        .windows(2)
        .map(|c| Edge::from_direction(c[0], c[1]))
        .collect();
    if !closed {
        edges.push(Edge::from_direction(coords[coords.len() - 1], coords[0]));
    }
    Ok(edges)
}

/// Number of nodes on the longest root-to-leaf path.  The links must form a
/// tree rooted at 0.
pub(crate) fn tree_depth(edges: &[Edge]) -> usize {
    if edges.is_empty() {
        return 0;
    }

    let mut depth = 0;
    // Stack entries: (row, level)
    let mut stack = vec![(0, 1)];
    while let Some((row, level)) = stack.pop() {
        depth = depth.max(level);
        let edge = &edges[row];
        for &child in edge.left.iter().chain(edge.right.iter()) {
            stack.push((child, level + 1));
        }
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_positions(coords: Vec<(f64, f64)>) -> Vec<Coordinate> {
        coords.into_iter().map(|c| c.into()).collect()
    }

    #[test]
    fn test_closed_ring() {
        let coords = make_positions(vec![(0., 0.), (1., 0.), (0., 1.), (0., 0.)]);
        let edges = edges_from_ring(&coords).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1].lower(), (1., 0.).into());
        assert_eq!(edges[1].upper(), (0., 1.).into());
        assert_eq!(edges[1].winding_increment(), 1);
        assert_eq!(edges[2].winding_increment(), -1);
    }

    #[test]
    fn test_open_ring_is_closed() {
        let coords = make_positions(vec![(0., 0.), (1., 0.), (0., 1.)]);
        let edges = edges_from_ring(&coords).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].lower(), (0., 0.).into());
        assert_eq!(edges[2].upper(), (0., 1.).into());
        assert_eq!(edges[2].winding_increment(), -1);
    }

    #[test]
    fn test_bad_rings() {
        assert_eq!(edges_from_ring(&[]), Err(PolygonError::TooFewCoordinates));
        let coords = make_positions(vec![(0., 0.), (1., 0.), (0., 0.)]);
        assert_eq!(edges_from_ring(&coords), Err(PolygonError::TooFewCoordinates));
        let coords = make_positions(vec![(0., 0.), (1., 0.)]);
        assert_eq!(edges_from_ring(&coords), Err(PolygonError::TooFewCoordinates));
        let coords = make_positions(vec![(0., 0.), (1., f64::NAN), (0., 1.)]);
        assert_eq!(
            edges_from_ring(&coords),
            Err(PolygonError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn test_linear_winding() {
        let coords = make_positions(vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.)]);
        let edges = edges_from_ring(&coords).unwrap();
        assert_eq!(winding_number_linear((5., 5.).into(), &edges), 1);
        assert_eq!(winding_number_linear((15., 5.).into(), &edges), 0);

        let reversed: Vec<Coordinate> = coords.into_iter().rev().collect();
        let edges = edges_from_ring(&reversed).unwrap();
        assert_eq!(winding_number_linear((5., 5.).into(), &edges), -1);
    }

    #[test]
    fn test_depth_of_unlinked() {
        let coords = make_positions(vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.)]);
        let edges = edges_from_ring(&coords).unwrap();
        assert_eq!(tree_depth(&edges), 1);
        assert_eq!(tree_depth(&[]), 0);
    }
}
