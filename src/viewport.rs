/*!
 * The map viewport.
 *
 * The map component reports the visible region after every pan or zoom gesture as four bounds
 * plus the zoom-derived deltas, and the whole thing is replaced at once. Partial updates do not
 * exist in this contract, which keeps the bounds and deltas from ever disagreeing with each
 * other.
 */

use crate::geo::{BoundingBox, Coord};
use serde::{Deserialize, Serialize};

/// The latitude span assumed for zoom-sensitive calculations before the map has reported its
/// first layout.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.1;

/**
 * The rectangular region currently visible on the map, plus its zoom-derived coordinate deltas.
 *
 * Invariant: north >= south and east >= west. The viewports this app can produce never straddle
 * the antimeridian, so no wraparound handling is done.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Northern latitude bound in degrees.
    pub north: f64,
    /// Southern latitude bound in degrees.
    pub south: f64,
    /// Eastern longitude bound in degrees.
    pub east: f64,
    /// Western longitude bound in degrees.
    pub west: f64,
    /// The latitude span of the view. Smaller means zoomed further in.
    #[serde(rename = "latitudeDelta")]
    pub latitude_delta: f64,
    /// The longitude span of the view.
    #[serde(rename = "longitudeDelta")]
    pub longitude_delta: f64,
}

impl Viewport {
    /**
     * Build a viewport centered on a coordinate with the given spans.
     *
     * The bounds are the center offset by half a delta in each direction.
     */
    pub fn centered_on(center: Coord, latitude_delta: f64, longitude_delta: f64) -> Self {
        Viewport {
            north: center.lat + latitude_delta / 2.0,
            south: center.lat - latitude_delta / 2.0,
            east: center.lon + longitude_delta / 2.0,
            west: center.lon - longitude_delta / 2.0,
            latitude_delta,
            longitude_delta,
        }
    }

    /**
     * Determine if a coordinate is within the viewport, edges inclusive.
     */
    pub fn contains(&self, coord: Coord) -> bool {
        coord.lat >= self.south
            && coord.lat <= self.north
            && coord.lon >= self.west
            && coord.lon <= self.east
    }

    /// The center of the viewport.
    pub fn center(&self) -> Coord {
        Coord {
            lat: (self.north + self.south) / 2.0,
            lon: (self.east + self.west) / 2.0,
        }
    }

    /// This viewport's bounds as a BoundingBox.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox {
            ll: Coord {
                lat: self.south,
                lon: self.west,
            },
            ur: Coord {
                lat: self.north,
                lon: self.east,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let vp = Viewport {
            north: 45.0,
            south: 44.0,
            east: -119.0,
            west: -120.0,
            latitude_delta: 1.0,
            longitude_delta: 1.0,
        };

        let inside = Coord {
            lat: 44.5,
            lon: -119.5,
        };

        let north_edge = Coord {
            lat: 45.0,
            lon: -119.5,
        };
        let south_edge = Coord {
            lat: 44.0,
            lon: -119.5,
        };
        let east_edge = Coord {
            lat: 44.5,
            lon: -119.0,
        };
        let west_edge = Coord {
            lat: 44.5,
            lon: -120.0,
        };

        assert!(vp.contains(inside));
        assert!(vp.contains(north_edge));
        assert!(vp.contains(south_edge));
        assert!(vp.contains(east_edge));
        assert!(vp.contains(west_edge));

        let too_far_north = Coord {
            lat: 45.5,
            lon: -119.5,
        };
        let too_far_west = Coord {
            lat: 44.5,
            lon: -120.5,
        };

        assert!(!vp.contains(too_far_north));
        assert!(!vp.contains(too_far_west));
    }

    #[test]
    fn test_centered_on() {
        let center = Coord {
            lat: -33.87,
            lon: 151.21,
        };

        let vp = Viewport::centered_on(center, 0.03, 0.03);

        assert!((vp.north - (-33.87 + 0.015)).abs() < 1.0e-12);
        assert!((vp.south - (-33.87 - 0.015)).abs() < 1.0e-12);
        assert!((vp.east - (151.21 + 0.015)).abs() < 1.0e-12);
        assert!((vp.west - (151.21 - 0.015)).abs() < 1.0e-12);
        assert!(vp.center().are_close(center, 1.0e-9));
    }

    #[test]
    fn test_bounding_box_round_trip() {
        let vp = Viewport {
            north: 45.0,
            south: 44.0,
            east: -119.0,
            west: -120.0,
            latitude_delta: 1.0,
            longitude_delta: 1.0,
        };

        let bbox = vp.bounding_box();

        assert_eq!(bbox.ll.lat, 44.0);
        assert_eq!(bbox.ll.lon, -120.0);
        assert_eq!(bbox.ur.lat, 45.0);
        assert_eq!(bbox.ur.lon, -119.0);
    }
}
