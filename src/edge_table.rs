use crate::algorithms::{any_crossing, link_edges, winding_number};
use crate::errors::PolygonError;
use crate::from_wkt::parse_polygon_shells;
use crate::table_state::{Built, Unbuilt};
use crate::utils::{edges_from_ring, tree_depth};
use crate::{Coordinate, Edge, EdgeRecord, HorizontalSegment};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::convert::TryFrom;

/// The edges of one polygon, stored as an arena of tree nodes.
///
/// An `EdgeTable<Unbuilt>` is built exactly once into an `EdgeTable<Built>`,
/// which answers point and segment queries and can be shared across threads.
#[derive(Debug, Clone)]
pub struct EdgeTable<S> {
    edges: Vec<Edge>,
    state: S,
}

impl<S> EdgeTable<S> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Tables always hold at least one edge.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }
}

impl EdgeTable<Unbuilt> {
    /// Take ownership of freshly created edges.  Edges that already carry
    /// links, or whose winding increment is not 1 or -1, are rejected.
    pub fn from_edges(edges: Vec<Edge>) -> Result<Self, PolygonError> {
        if edges.is_empty() {
            return Err(PolygonError::EmptyPolygon);
        }
        if let Some(index) = edges.iter().position(|e| e.is_linked()) {
            return Err(PolygonError::EdgeAlreadyLinked { index });
        }
        if let Some((index, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.wn_inc != 1 && e.wn_inc != -1)
        {
            return Err(PolygonError::InvalidWindingIncrement {
                index,
                value: i64::from(edge.wn_inc),
            });
        }
        Ok(EdgeTable {
            edges,
            state: Unbuilt,
        })
    }

    /// Create a table from the vertices of a ring, closing it if the last
    /// vertex differs from the first.
    pub fn from_ring<IP: Into<Coordinate>>(coords: Vec<IP>) -> Result<Self, PolygonError> {
        let coords: Vec<Coordinate> = coords.into_iter().map(|ip| ip.into()).collect();
        let edges = edges_from_ring(&coords)?;
        tracing::trace!(vertices = coords.len(), edges = edges.len(), "edges from ring");
        Ok(EdgeTable {
            edges,
            state: Unbuilt,
        })
    }

    /// Like `from_ring`, but with the edges shuffled by a generator seeded
    /// with `seed`, so the same seed always gives the same tree.
    pub fn from_ring_shuffled<IP: Into<Coordinate>>(
        coords: Vec<IP>,
        seed: u64,
    ) -> Result<Self, PolygonError> {
        let mut table = EdgeTable::from_ring(coords)?;
        table.shuffle(&mut SmallRng::seed_from_u64(seed));
        Ok(table)
    }

    /// Create a table from `POLYGON` or `MULTIPOLYGON` WKT.  The edges of
    /// every shell go into one table.
    pub fn from_wkt(wkt_str: &str) -> Result<Self, PolygonError> {
        let mut edges = Vec::new();
        for shell in parse_polygon_shells(wkt_str)? {
            edges.extend(edges_from_ring(&shell)?);
        }
        EdgeTable::from_edges(edges)
    }

    /// Reorder the edges before building.  Insertion order decides the tree
    /// shape, and rings tend to arrive sorted along long monotone runs.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.edges.shuffle(rng);
        tracing::trace!(edges = self.edges.len(), "shuffled edge table");
    }

    pub fn build(mut self) -> EdgeTable<Built> {
        let depth = link_edges(&mut self.edges);
        tracing::debug!(edges = self.edges.len(), depth, "built edge tree");
        EdgeTable {
            edges: self.edges,
            state: Built { depth },
        }
    }
}

impl<IP: Into<Coordinate>> TryFrom<Vec<IP>> for EdgeTable<Unbuilt> {
    type Error = PolygonError;

    fn try_from(coords: Vec<IP>) -> Result<Self, Self::Error> {
        EdgeTable::from_ring(coords)
    }
}

impl EdgeTable<Built> {
    /// Load a table that was built elsewhere.  The links must form a tree
    /// rooted at index 0.
    pub fn from_records(records: Vec<EdgeRecord>) -> Result<Self, PolygonError> {
        if records.is_empty() {
            return Err(PolygonError::EmptyPolygon);
        }
        let len = records.len();
        let edges = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.to_edge(index, len))
            .collect::<Result<Vec<Edge>, PolygonError>>()?;

        let mut has_parent = vec![false; len];
        for (index, edge) in edges.iter().enumerate() {
            for &child in edge.left.iter().chain(edge.right.iter()) {
                if has_parent[child] {
                    return Err(PolygonError::DuplicateLink { index, link: child });
                }
                has_parent[child] = true;
            }
        }

        // With at most one parent per edge and none for the root, a walk from
        // the root visits each edge at most once.  Pruning trusts y_high, so
        // every node must bound its own y1 and its children's y_high.
        let mut reached = vec![false; len];
        let mut stack = vec![0];
        while let Some(row) = stack.pop() {
            reached[row] = true;
            let edge = &edges[row];
            if !(edge.y0 <= edge.y1) {
                return Err(PolygonError::InvertedEdge { index: row });
            }
            if !(edge.y_high >= edge.y1) {
                return Err(PolygonError::InvalidYHigh { index: row });
            }
            for &child in edge.left.iter().chain(edge.right.iter()) {
                if !(edge.y_high >= edges[child].y_high) {
                    return Err(PolygonError::InvalidYHigh { index: row });
                }
                stack.push(child);
            }
        }
        if let Some(index) = reached.iter().position(|&r| !r) {
            return Err(PolygonError::UnreachableEdge { index });
        }

        let depth = tree_depth(&edges);
        Ok(EdgeTable {
            edges,
            state: Built { depth },
        })
    }

    pub fn to_records(&self) -> Vec<EdgeRecord> {
        self.edges.iter().map(EdgeRecord::from).collect()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.state.depth
    }

    pub fn winding_number<IP: Into<Coordinate>>(&self, point: IP) -> i32 {
        winding_number(point.into(), &self.edges)
    }

    /// Whether `point` has a non-zero winding number.  Points exactly on an
    /// edge line may report `false`.
    pub fn contains<IP: Into<Coordinate>>(&self, point: IP) -> bool {
        self.winding_number(point) != 0
    }

    /// Whether `segment` crosses any edge strictly between its ends.
    pub fn intersects(&self, segment: HorizontalSegment) -> bool {
        any_crossing(segment, &self.edges)
    }
}
