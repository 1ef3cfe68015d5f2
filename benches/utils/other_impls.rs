use edge_tree::utils::edge_winding;
use edge_tree::{Coordinate, Edge};
use rstar::{RTree, RTreeObject, AABB};

pub struct Segment {
    edge: Edge,
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let lower = self.edge.lower();
        let upper = self.edge.upper();
        AABB::from_corners([lower.x, lower.y], [upper.x, upper.y])
    }
}

pub(crate) fn build_rstar(coords: &[Coordinate]) -> RTree<Segment> {
    RTree::bulk_load(
        coords
            .windows(2)
            .map(|w| Segment {
                edge: Edge::from_direction(w[0], w[1]),
            })
            .collect(),
    )
}

pub(crate) fn point_in_polygon_rstar(point: Coordinate, rtree: &RTree<Segment>) -> bool {
    let mut wn: i32 = 0;

    let ray = AABB::from_corners([f64::NEG_INFINITY, point.y], [f64::INFINITY, point.y]);
    for seg in rtree.locate_in_envelope_intersecting(&ray) {
        wn += edge_winding(point, &seg.edge);
    }

    wn != 0
}
