use crate::{geo::Coord, property::Property};
use rustc_hash::FxHashSet;
use serde::Serialize;

/**
 * The span of advertised prices across the members of a cluster.
 *
 * Members without a numeric price (contact-agent listings, ranges with no ends) do not
 * participate. When no member has a numeric price, both bounds are 0.0, which the marker
 * renderer shows as "price on application".
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    /// The lowest representative price among the members.
    pub min: f64,
    /// The highest representative price among the members.
    pub max: f64,
}

/**
 * The aggregate properties of a group of spatially close listings.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCluster {
    /// Identifier for this cluster, derived from the listing that seeded the group.
    pub id: String,
    /// Arithmetic mean of the member coordinates.
    pub centroid: Coord,
    /// The member listings, in the order they appeared in the visible set.
    pub properties: Vec<Property>,
    /// The number of member listings.
    pub count: usize,
    /// Price span across the members.
    pub price_range: PriceRange,
}

impl PropertyCluster {
    /**
     * Group visible listings into clusters.
     *
     * A single greedy pass in input order: each not-yet-grouped listing seeds a group, and every
     * other ungrouped listing within `threshold` degrees of the seed joins it. Groups below
     * `min_cluster_size` are not emitted; their members stay standalone for individual-marker
     * rendering. Grouping is deliberately order-dependent so the same input always produces the
     * same clusters across re-renders.
     *
     * The scan is O(n^2) in the visible count, which the viewport keeps small.
     *
     * #Arguments
     * * visible - the listings currently in the viewport. Entries without a coordinate are
     *   skipped.
     * * threshold - the grouping distance in degrees.
     * * min_cluster_size - the smallest group worth drawing as an aggregate marker.
     *
     * #Returns
     * The clusters, in seed order. Every member belongs to exactly one group.
     */
    pub fn group_visible(
        visible: &[Property],
        threshold: f64,
        min_cluster_size: usize,
    ) -> Vec<Self> {
        let mut clusters: Vec<Self> = vec![];
        let mut processed: FxHashSet<usize> = FxHashSet::default();

        for i in 0..visible.len() {
            if processed.contains(&i) {
                continue;
            }

            let seed_coord = match visible[i].coord() {
                Some(coord) => coord,
                None => continue,
            };

            processed.insert(i);
            let mut members = vec![visible[i].clone()];

            for j in (i + 1)..visible.len() {
                if processed.contains(&j) {
                    continue;
                }

                let candidate_coord = match visible[j].coord() {
                    Some(coord) => coord,
                    None => continue,
                };

                if crate::geo::planar_distance(seed_coord, candidate_coord) <= threshold {
                    processed.insert(j);
                    members.push(visible[j].clone());
                }
            }

            // Sub-minimum groups stay consumed so a member can never end up in two groups, even
            // with a configured minimum above two.
            if members.len() >= min_cluster_size {
                clusters.push(Self::from_members(members));
            }
        }

        clusters
    }

    /**
     * Aggregate a non-empty group of located listings into a cluster.
     *
     * The first member is the seed and lends the cluster its identifier.
     */
    fn from_members(members: Vec<Property>) -> Self {
        let id = format!("cluster-{}", members[0].id);

        let mut centroid = Coord { lat: 0.0, lon: 0.0 };
        for coord in members.iter().filter_map(Property::coord) {
            centroid.lat += coord.lat;
            centroid.lon += coord.lon;
        }
        centroid.lat /= members.len() as f64;
        centroid.lon /= members.len() as f64;

        let price_range = PriceRange::spanning(&members);
        let count = members.len();

        PropertyCluster {
            id,
            centroid,
            properties: members,
            count,
            price_range,
        }
    }
}

impl PriceRange {
    /**
     * The min/max of the representative prices of the given listings, skipping the ones without
     * a numeric price.
     */
    pub fn spanning(members: &[Property]) -> Self {
        let mut range: Option<PriceRange> = None;

        for price in members
            .iter()
            .map(|p| p.price.representative())
            .filter(|&price| price > 0.0)
        {
            range = Some(match range {
                Some(r) => PriceRange {
                    min: r.min.min(price),
                    max: r.max.max(price),
                },
                None => PriceRange {
                    min: price,
                    max: price,
                },
            });
        }

        range.unwrap_or(PriceRange { min: 0.0, max: 0.0 })
    }
}
