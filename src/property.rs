/*!
 * The property listings consumed by the map engine.
 *
 * Listings are fetched and cached by the application's data layer and handed to the engine
 * read-only. The types here mirror the payload shape of that layer, so a listing deserializes
 * directly from the backend response.
 */

use crate::geo::Coord;
use serde::{Deserialize, Serialize};

/**
 * The advertised price of a listing.
 *
 * Listings are advertised with a fixed amount, a range, or no numeric price at all
 * ("contact agent").
 */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Price {
    /// A single advertised amount.
    Fixed {
        /// The advertised amount in the listing currency.
        amount: f64,
    },
    /// An advertised range, either end of which may be missing.
    Range {
        #[serde(default, rename = "minAmount")]
        min_amount: Option<f64>,
        #[serde(default, rename = "maxAmount")]
        max_amount: Option<f64>,
    },
    /// No numeric price was advertised.
    Contact,
}

impl Price {
    /**
     * The single number used when aggregating prices across a group of listings.
     *
     * A range is represented by its low end, falling back to its high end if the low end is
     * missing. Contact-agent listings, and ranges with neither end present, come out as 0.0,
     * which aggregation treats as "no numeric price" and skips.
     */
    pub fn representative(&self) -> f64 {
        use Price::*;

        match *self {
            Fixed { amount } => amount,
            Range {
                min_amount,
                max_amount,
            } => min_amount.or(max_amount).unwrap_or(0.0),
            Contact => 0.0,
        }
    }
}

/**
 * The geographic position of a listing as supplied by the backend.
 *
 * Both fields are optional in the payload. A listing is only mappable when both are present.
 */
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/**
 * A single property listing.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The backend document id for this listing.
    pub id: String,
    /// Where the listing is, if the backend knows.
    #[serde(default)]
    pub location: Option<Location>,
    /// The advertised price.
    pub price: Price,
}

impl Property {
    /**
     * The map coordinate for this listing.
     *
     * #Returns
     * None unless the listing has both a latitude and a longitude. Listings without a usable
     * coordinate cannot be placed on the map and are excluded from filtering and clustering.
     */
    pub fn coord(&self) -> Option<Coord> {
        let location = self.location?;

        match (location.latitude, location.longitude) {
            (Some(lat), Some(lon)) => Some(Coord { lat, lon }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn listing(id: &str, lat: f64, lon: f64, price: Price) -> Property {
        Property {
            id: id.to_string(),
            location: Some(Location {
                latitude: Some(lat),
                longitude: Some(lon),
            }),
            price,
        }
    }

    #[test]
    fn test_representative_price() {
        assert_eq!(Price::Fixed { amount: 750_000.0 }.representative(), 750_000.0);

        let full_range = Price::Range {
            min_amount: Some(600_000.0),
            max_amount: Some(660_000.0),
        };
        assert_eq!(full_range.representative(), 600_000.0);

        let high_only = Price::Range {
            min_amount: None,
            max_amount: Some(660_000.0),
        };
        assert_eq!(high_only.representative(), 660_000.0);

        let empty_range = Price::Range {
            min_amount: None,
            max_amount: None,
        };
        assert_eq!(empty_range.representative(), 0.0);

        assert_eq!(Price::Contact.representative(), 0.0);
    }

    #[test]
    fn test_coord_requires_both_axes() {
        let full = listing("a", -33.87, 151.21, Price::Contact);
        assert_eq!(
            full.coord(),
            Some(Coord {
                lat: -33.87,
                lon: 151.21
            })
        );

        let missing_lon = Property {
            id: "b".to_string(),
            location: Some(Location {
                latitude: Some(-33.87),
                longitude: None,
            }),
            price: Price::Contact,
        };
        assert!(missing_lon.coord().is_none());

        let no_location = Property {
            id: "c".to_string(),
            location: None,
            price: Price::Contact,
        };
        assert!(no_location.coord().is_none());
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"
            [
                {"id": "p1", "location": {"latitude": -33.87, "longitude": 151.21},
                 "price": {"type": "fixed", "amount": 1250000}},
                {"id": "p2", "location": {"latitude": -33.88},
                 "price": {"type": "range", "minAmount": 900000, "maxAmount": 950000}},
                {"id": "p3", "price": {"type": "contact"}}
            ]
        "#;

        let listings: Vec<Property> = serde_json::from_str(json).unwrap();

        assert_eq!(listings.len(), 3);
        assert!(listings[0].coord().is_some());
        assert!(listings[1].coord().is_none());
        assert!(listings[2].location.is_none());
        assert_eq!(listings[1].price.representative(), 900_000.0);
        assert_eq!(listings[2].price.representative(), 0.0);
    }
}
