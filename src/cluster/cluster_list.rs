use crate::{
    cluster::PropertyCluster,
    property::Property,
    viewport::{Viewport, DEFAULT_LATITUDE_DELTA},
};
use serde::Serialize;

/// Reference latitude span used to translate the pixel radius into degrees. A radius of
/// `radius` pixels covers `radius / 500` of the viewport's latitude span.
const PIXEL_SCALE: f64 = 500.0;

/**
 * Tuning knobs for a clustering pass.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClusterConfig {
    /// Grouping radius in pixel-equivalent units. The same pixel radius groups the same
    /// perceived screen area at every zoom level.
    pub radius: f64,
    /// The smallest group drawn as an aggregate marker. Smaller groups stay individual markers.
    pub min_cluster_size: usize,
    /// Latitude spans below this are considered zoomed in far enough that markers are already
    /// visually separated, and clustering is skipped outright.
    pub max_clustering_delta: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            radius: 60.0,
            min_cluster_size: 2,
            max_clustering_delta: 0.01,
        }
    }
}

/**
 * The clusters for one pass over the visible set, with the pass parameters that produced them.
 *
 * A list is recomputed from scratch whenever the visible set or the viewport changes; clusters
 * are never patched incrementally, so they can never go stale against their inputs.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterList {
    /// The grouping distance in degrees this pass used.
    pub threshold: f64,
    /// The clusters, in seed order. Empty when the view is zoomed in past the clustering cutoff.
    pub clusters: Vec<PropertyCluster>,
}

impl ClusterList {
    /**
     * Run a clustering pass over the visible listings.
     *
     * The pixel radius converts to a degree threshold against the viewport's latitude span, so
     * cluster tightness tracks the zoom level. With no viewport established yet, the default
     * span applies.
     *
     * #Arguments
     * * visible - the listings currently in the viewport.
     * * viewport - the active viewport, if the map has reported one.
     * * config - the pass parameters.
     */
    pub fn from_visible(
        visible: &[Property],
        viewport: Option<&Viewport>,
        config: &ClusterConfig,
    ) -> Self {
        let latitude_delta = viewport
            .map(|v| v.latitude_delta)
            .unwrap_or(DEFAULT_LATITUDE_DELTA);

        let threshold = latitude_delta * (config.radius / PIXEL_SCALE);

        // Past the cutoff, individual markers are spread out enough on screen that aggregate
        // markers would only obscure them.
        if latitude_delta < config.max_clustering_delta {
            return ClusterList {
                threshold,
                clusters: vec![],
            };
        }

        let clusters =
            PropertyCluster::group_visible(visible, threshold, config.min_cluster_size);

        log::debug!(
            "clustered {} visible listings into {} clusters at threshold {:.6}",
            visible.len(),
            clusters.len(),
            threshold,
        );

        ClusterList {
            threshold,
            clusters,
        }
    }

    /// The number of clusters in the list.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
