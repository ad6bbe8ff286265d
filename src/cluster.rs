/*!
 * Types and functions for grouping nearby listings into clusters.
 *
 * A cluster describes the aggregate properties of a group of visible listings that sit close
 * enough together that drawing them as individual markers would just paint them on top of each
 * other.
 */

pub use cluster::{PriceRange, PropertyCluster};
pub use cluster_list::{ClusterConfig, ClusterList};

mod cluster;
mod cluster_list;
