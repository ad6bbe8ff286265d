pub use cluster::{ClusterConfig, ClusterList, PriceRange, PropertyCluster};
pub use compass::{CompassEngine, Density, Selection};
pub use error::{PropMapError, PropMapResult};
pub use geo::{planar_distance, BoundingBox, Coord};
pub use property::{Location, Price, Property};
pub use viewport::{Viewport, DEFAULT_LATITUDE_DELTA};

/**************************************************************************************************
 * Private Implementation
 *************************************************************************************************/
mod cluster;
mod compass;
mod error;
mod geo;
mod property;
mod viewport;
