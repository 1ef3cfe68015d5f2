mod build_tree;
mod hline_intersection;
mod point_in_polygon;

pub use build_tree::build_tree;
pub use hline_intersection::horizontal_segment_intersects_polygon;
pub use point_in_polygon::point_in_polygon;

pub(crate) use build_tree::link_edges;
pub(crate) use hline_intersection::any_crossing;
pub(crate) use point_in_polygon::winding_number;
