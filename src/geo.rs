/*!
 * Geographic calculations.
 *
 * The map component works in plain latitude/longitude degrees, so everything here is a simple
 * (approximate) planar calculation. Cluster grouping is a screen-space visual heuristic and the
 * viewport spans involved are small, so geodesic corrections would change nothing a user could
 * see.
 */

use serde::{Deserialize, Serialize};

/**
 * A latitude/longitude pair in degrees.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl Coord {
    /**
     * Determine if these coordinates are close to each other.
     *
     * #Arguments
     * * other - the coordinate to compare against.
     * * eps - the scale to use for comparison in degrees.
     *
     * #Returns
     * true if the difference in both latitude and longitude is less than eps.
     */
    pub fn are_close(self, other: Coord, eps: f64) -> bool {
        (self.lat - other.lat).abs() < eps && (self.lon - other.lon).abs() < eps
    }
}

/**
 * A rectangular region described by its lower left and upper right corners.
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The lower left (southwest) corner.
    pub ll: Coord,
    /// The upper right (northeast) corner.
    pub ur: Coord,
}

impl BoundingBox {
    /**
     * Determine if a coordinate is inside this box, edges inclusive.
     */
    pub fn contains(&self, coord: Coord) -> bool {
        coord.lat >= self.ll.lat
            && coord.lat <= self.ur.lat
            && coord.lon >= self.ll.lon
            && coord.lon <= self.ur.lon
    }

    /**
     * Build the smallest box containing all the given coordinates.
     *
     * #Returns
     * None if the iterator is empty.
     */
    pub fn enclosing<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut coords = coords.into_iter();
        let first = coords.next()?;

        let mut bbox = BoundingBox {
            ll: first,
            ur: first,
        };

        for coord in coords {
            bbox.ll.lat = bbox.ll.lat.min(coord.lat);
            bbox.ll.lon = bbox.ll.lon.min(coord.lon);
            bbox.ur.lat = bbox.ur.lat.max(coord.lat);
            bbox.ur.lon = bbox.ur.lon.max(coord.lon);
        }

        Some(bbox)
    }
}

/**
 * The planar (non-geodesic) distance between two coordinates.
 *
 * #Arguments
 * * left - the first point in degrees.
 * * right - the second point in degrees.
 *
 * #Returns
 * The Euclidean distance between the points in degrees of latitude/longitude.
 */
pub fn planar_distance(left: Coord, right: Coord) -> f64 {
    let dlat = left.lat - right.lat;
    let dlon = left.lon - right.lon;

    f64::sqrt(dlat * dlat + dlon * dlon)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_coord_are_close() {
        let left = Coord {
            lat: 45.5,
            lon: -120.0,
        };
        let right = Coord {
            lat: 45.5000002,
            lon: -120.0000002,
        };

        assert!(left.are_close(left, 1.0e-6));
        assert!(right.are_close(right, 1.0e-6));
        assert!(left.are_close(right, 1.0e-6));

        assert!(!left.are_close(right, 1.0e-8));
    }

    #[test]
    fn test_planar_distance() {
        let origin = Coord { lat: 0.0, lon: 0.0 };
        let east = Coord { lat: 0.0, lon: 3.0 };
        let north = Coord { lat: 4.0, lon: 0.0 };
        let corner = Coord { lat: 4.0, lon: 3.0 };

        assert!((planar_distance(origin, east) - 3.0).abs() < 1.0e-12);
        assert!((planar_distance(origin, north) - 4.0).abs() < 1.0e-12);
        assert!((planar_distance(origin, corner) - 5.0).abs() < 1.0e-12);
        assert!(planar_distance(corner, corner) == 0.0);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox {
            ll: Coord {
                lat: 44.0,
                lon: -120.0,
            },
            ur: Coord {
                lat: 45.0,
                lon: -119.0,
            },
        };

        let inside = Coord {
            lat: 44.5,
            lon: -119.5,
        };
        let edge = Coord {
            lat: 45.0,
            lon: -119.5,
        };
        let outside = Coord {
            lat: 45.5,
            lon: -119.5,
        };

        assert!(bbox.contains(inside));
        assert!(bbox.contains(edge));
        assert!(!bbox.contains(outside));
    }

    #[test]
    fn test_bounding_box_enclosing() {
        let coords = [
            Coord {
                lat: 44.0,
                lon: -120.0,
            },
            Coord {
                lat: 45.0,
                lon: -119.0,
            },
            Coord {
                lat: 44.5,
                lon: -121.0,
            },
        ];

        let bbox = BoundingBox::enclosing(coords).unwrap();

        assert_eq!(bbox.ll.lat, 44.0);
        assert_eq!(bbox.ll.lon, -121.0);
        assert_eq!(bbox.ur.lat, 45.0);
        assert_eq!(bbox.ur.lon, -119.0);

        assert!(BoundingBox::enclosing([]).is_none());
    }
}
