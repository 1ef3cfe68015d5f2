use crate::errors::PolygonError;
use crate::{Edge, HorizontalSegment};

/// Test whether a horizontal segment crosses the boundary of a polygon whose
/// edges were linked by `build_tree`.
///
/// An edge crosses when it spans `segment.y` (half-open, `[y0, y1)`) and its
/// intercept lies strictly between `x_left` and `x_right`.  Touching an edge
/// at either end of the segment is not a crossing.
pub fn horizontal_segment_intersects_polygon(
    segment: HorizontalSegment,
    edges: &[Edge],
) -> Result<bool, PolygonError> {
    if edges.is_empty() {
        return Err(PolygonError::EmptyPolygon);
    }
    if !(segment.x_left < segment.x_right) {
        return Err(PolygonError::InvalidSegment {
            x_left: segment.x_left,
            x_right: segment.x_right,
        });
    }
    Ok(any_crossing(segment, edges))
}

/// Same pruned descent as the winding number, stopping at the first edge
/// that crosses.
pub(crate) fn any_crossing(segment: HorizontalSegment, edges: &[Edge]) -> bool {
    if edges.is_empty() {
        return false;
    }

    let y = segment.y;
    let mut stack = vec![0];
    while let Some(row) = stack.pop() {
        let edge = &edges[row];
        if y > edge.y_high {
            continue;
        }

        if y >= edge.y0 {
            if edge.spans(y) {
                // Horizontal edges have no intercept and never cross.
                if let Some(x) = edge.intercept(y) {
                    if segment.x_left < x && x < segment.x_right {
                        return true;
                    }
                }
            }
            if let Some(right) = edge.right {
                stack.push(right);
            }
        }
        if let Some(left) = edge.left {
            stack.push(left);
        }
    }

    false
}
