mod coordinate;
mod edge;
mod edge_table;
mod table_state;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
pub mod utils;

pub use coordinate::{Coordinate, HorizontalSegment};
pub use edge::{Edge, EdgeRecord};
pub use edge_table::EdgeTable;
pub use table_state::{Built, Unbuilt};
