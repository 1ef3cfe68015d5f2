use crate::errors::PolygonError;
use crate::Edge;

/// Link `edges` in place into a binary search tree keyed on `y0`, rooted at
/// index 0, with each node's `y_high` raised to the maximum of its subtree.
///
/// Edges are inserted in table order and the tree is not rebalanced; shuffle
/// the table first if the input is sorted by height.
///
/// The table must be freshly constructed.  Building a table twice relinks
/// nodes that are already in the tree and can leave a node pointing at
/// itself, after which queries will not terminate.
pub fn build_tree(edges: &mut [Edge]) -> Result<(), PolygonError> {
    if edges.is_empty() {
        return Err(PolygonError::EmptyPolygon);
    }
    let depth = link_edges(edges);
    tracing::debug!(edges = edges.len(), depth, "built edge tree");
    Ok(())
}

/// Insert every non-root edge, returning the depth of the resulting tree.
pub(crate) fn link_edges(edges: &mut [Edge]) -> usize {
    let mut depth = if edges.is_empty() { 0 } else { 1 };

    for row in 1..edges.len() {
        let y_high = edges[row].y_high;
        let y0 = edges[row].y0;

        let mut c = 0;
        let mut level = 1;
        loop {
            let node = &mut edges[c];
            if y_high > node.y_high {
                node.y_high = y_high;
            }

            let branch = if y0 > node.y0 {
                &mut node.right
            } else {
                &mut node.left
            };
            level += 1;
            match *branch {
                None => {
                    *branch = Some(row);
                    break;
                }
                Some(child) => c = child,
            }
        }
        depth = depth.max(level);
    }

    depth
}
