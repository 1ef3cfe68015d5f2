use crate::errors::PolygonError;
use crate::utils::edge_winding;
use crate::{Coordinate, Edge};

/// Test whether `point` is inside the polygon whose edges were linked by
/// `build_tree`.
///
/// A point is inside when its winding number is non-zero.  Points whose
/// cross product with an edge is exactly zero (on the edge line) are not
/// counted by that edge, so boundary points may report `false`.
pub fn point_in_polygon(point: Coordinate, edges: &[Edge]) -> Result<bool, PolygonError> {
    if edges.is_empty() {
        return Err(PolygonError::EmptyPolygon);
    }
    Ok(winding_number(point, edges) != 0)
}

/// Winding number of `point` over a built edge tree, skipping every subtree
/// whose `y_high` is below the point.
pub(crate) fn winding_number(point: Coordinate, edges: &[Edge]) -> i32 {
    if edges.is_empty() {
        return 0;
    }

    let mut wn: i32 = 0;

    let mut stack = vec![0];
    while let Some(row) = stack.pop() {
        let edge = &edges[row];
        if point.y > edge.y_high {
            continue;
        }

        // Right subtree edges all have y0 > edge.y0, so they can only span
        // the point when this edge starts at or below it.
        if point.y >= edge.y0 {
            if let Some(right) = edge.right {
                stack.push(right);
            }
            wn += edge_winding(point, edge);
        }
        if let Some(left) = edge.left {
            stack.push(left);
        }
    }

    wn
}
