/*!
 * The Compass map engine.
 *
 * This is the single owner of the map's viewport and selection state. It filters the listing set
 * against the viewport, runs the clustering pass, and classifies marker density. Everything
 * derived (visible set, clusters, density) is a pure function of the current inputs: mutating a
 * setter triggers an explicit recompute, there is no reactive machinery, and no other writer
 * exists. The engine runs synchronously on the caller's thread.
 */

use crate::{
    cluster::{ClusterConfig, ClusterList, PropertyCluster},
    geo::Coord,
    property::Property,
    viewport::{Viewport, DEFAULT_LATITUDE_DELTA},
};
use rustc_hash::FxHashMap as HashMap;

/// Fewer visible listings than this is "low" marker density.
const LOW_DENSITY_LIMIT: usize = 10;
/// Fewer visible listings than this (and at least LOW_DENSITY_LIMIT) is "medium".
const MEDIUM_DENSITY_LIMIT: usize = 50;

/// How far one cluster expansion zooms in.
const EXPAND_ZOOM_FACTOR: f64 = 3.0;

/**
 * A coarse classification of how crowded the visible map is.
 *
 * The marker renderer switches drawing strategy on this, e.g. clustering-only rendering at high
 * density. The boundaries are fixed; callers tune rendering, not the classification.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, strum::Display, strum::IntoStaticStr)]
pub enum Density {
    #[strum(serialize = "low")]
    #[serde(rename = "low")]
    Low,
    #[strum(serialize = "medium")]
    #[serde(rename = "medium")]
    Medium,
    #[strum(serialize = "high")]
    #[serde(rename = "high")]
    High,
}

/**
 * What the user currently has selected on the map.
 *
 * A single listing and a cluster can never be selected at the same time; choosing one clears the
 * other.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Nothing is selected.
    None,
    /// A single listing, by id.
    Property(String),
    /// An aggregate cluster marker.
    Cluster(PropertyCluster),
}

/**
 * The viewport/cluster engine behind the Compass discovery map.
 */
#[derive(Debug)]
pub struct CompassEngine {
    /// Every listing the data layer handed over, mappable or not.
    properties: Vec<Property>,
    /// Listing id to index into `properties`.
    index: HashMap<String, usize>,
    /// The current viewport. None until the map reports its first layout, which means "show
    /// everything" so the map is never empty before then.
    viewport: Option<Viewport>,
    /// The current selection.
    selection: Selection,
    /// Clustering parameters.
    config: ClusterConfig,

    // Derived state, rebuilt by recompute().
    visible: Vec<Property>,
    clusters: ClusterList,
}

impl CompassEngine {
    pub fn new() -> Self {
        Self::with_config(ClusterConfig::default())
    }

    pub fn with_config(config: ClusterConfig) -> Self {
        CompassEngine {
            properties: vec![],
            index: HashMap::default(),
            viewport: None,
            selection: Selection::None,
            config,
            visible: vec![],
            clusters: ClusterList::from_visible(&[], None, &config),
        }
    }

    /**
     * Replace the listing set.
     *
     * The data layer re-queries as the user changes filters; the whole list arrives at once and
     * the visible set and clusters are rebuilt from it.
     */
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.index = properties
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        self.properties = properties;
        self.recompute();
    }

    /// The full, unfiltered listing set, in input order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The listings with a usable coordinate inside the current viewport, in input order.
    pub fn visible_properties(&self) -> &[Property] {
        &self.visible
    }

    /// The clusters computed for the current visible set.
    pub fn clusters(&self) -> &[PropertyCluster] {
        &self.clusters.clusters
    }

    /// The current viewport, if the map has reported one.
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /**
     * Replace the viewport after a pan or zoom gesture.
     *
     * The viewport is swapped wholesale and the derived state rebuilt. If a selected cluster no
     * longer has any member inside the new viewport, that selection is dropped; the selection
     * must never point at off-screen data.
     */
    pub fn update_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.recompute();

        if let Selection::Cluster(cluster) = &self.selection {
            let any_member_visible = cluster
                .properties
                .iter()
                .filter_map(Property::coord)
                .any(|coord| viewport.contains(coord));

            if !any_member_visible {
                self.selection = Selection::None;
            }
        }
    }

    /**
     * Determine if a coordinate is inside the current viewport, edges inclusive.
     *
     * Before the map reports its first layout there is no viewport, and everything counts as
     * visible.
     */
    pub fn is_in_viewport(&self, coord: Coord) -> bool {
        match &self.viewport {
            Some(viewport) => viewport.contains(coord),
            None => true,
        }
    }

    /**
     * Rebuild the visible set and the cluster list from the current inputs.
     *
     * The setters call this themselves, so the derived getters are never stale. It is public so
     * an embedder that reaches into shared config can re-derive explicitly.
     */
    pub fn recompute(&mut self) {
        self.visible = self
            .properties
            .iter()
            .filter(|p| match p.coord() {
                Some(coord) => self.is_in_viewport(coord),
                None => false,
            })
            .cloned()
            .collect();

        self.clusters =
            ClusterList::from_visible(&self.visible, self.viewport.as_ref(), &self.config);
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Select a single listing, or pass None to clear. Any cluster selection is dropped.
    pub fn select_property(&mut self, id: Option<String>) {
        self.selection = match id {
            Some(id) => Selection::Property(id),
            None => Selection::None,
        };
    }

    /// Select a cluster marker, or pass None to clear. Any single-listing selection is dropped.
    pub fn select_cluster(&mut self, cluster: Option<PropertyCluster>) {
        self.selection = match cluster {
            Some(cluster) => Selection::Cluster(cluster),
            None => Selection::None,
        };
    }

    /**
     * Zoom into a cluster to reveal its members.
     *
     * The viewport spans shrink by a factor of 3 and the view recenters on the cluster's
     * centroid, with the bounds pulled in to a sixth of the new span on each side. The cluster
     * selection is cleared; the recompute at the new zoom separates the members by itself once
     * they stop meeting the clustering threshold.
     */
    pub fn expand_cluster(&mut self, cluster: &PropertyCluster) {
        let (latitude_delta, longitude_delta) = match &self.viewport {
            Some(v) => (v.latitude_delta, v.longitude_delta),
            None => (DEFAULT_LATITUDE_DELTA, DEFAULT_LATITUDE_DELTA),
        };

        let latitude_delta = latitude_delta / EXPAND_ZOOM_FACTOR;
        let longitude_delta = longitude_delta / EXPAND_ZOOM_FACTOR;

        let centroid = cluster.centroid;
        let next = Viewport {
            north: centroid.lat + latitude_delta / 6.0,
            south: centroid.lat - latitude_delta / 6.0,
            east: centroid.lon + longitude_delta / 6.0,
            west: centroid.lon - longitude_delta / 6.0,
            latitude_delta,
            longitude_delta,
        };

        self.update_viewport(next);

        if let Selection::Cluster(_) = self.selection {
            self.selection = Selection::None;
        }
    }

    /// Classify how crowded the visible map is.
    pub fn density(&self) -> Density {
        let count = self.visible.len();

        if count < LOW_DENSITY_LIMIT {
            Density::Low
        } else if count < MEDIUM_DENSITY_LIMIT {
            Density::Medium
        } else {
            Density::High
        }
    }

    /**
     * The coordinates of the given listings, for fitting the map to a set of results.
     *
     * #Arguments
     * * ids - listing ids in the order the coordinates should come back.
     *
     * #Returns
     * One coordinate per located listing, input order preserved. Unknown ids and listings
     * without a coordinate are dropped.
     */
    pub fn fit_to_properties(&self, ids: &[&str]) -> Vec<Coord> {
        ids.iter()
            .filter_map(|id| self.index.get(*id))
            .filter_map(|&i| self.properties[i].coord())
            .collect()
    }

    /// The coordinate of one listing, or None if it is unknown or un-located.
    pub fn center_on_property(&self, id: &str) -> Option<Coord> {
        self.index
            .get(id)
            .and_then(|&i| self.properties[i].coord())
    }
}

impl Default for CompassEngine {
    fn default() -> Self {
        Self::new()
    }
}
